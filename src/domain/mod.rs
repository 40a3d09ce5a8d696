//! Domain types
//!
//! View state owned by the list controller and the records it lists.

pub mod attendees;
pub mod view;

pub use attendees::Attendee;
pub use view::{Record, ResultPage, ViewState};
