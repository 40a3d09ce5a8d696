//! Collaborators of the list controller.
//!
//! Contains the address bar abstraction, the view state codec on top of it,
//! and the data sources the controller fetches pages from.

pub mod data_source;
pub mod location;
pub mod url_state;

pub use data_source::{DataSource, HttpDataSource};
pub use location::{Location, MemoryLocation};
pub use url_state::UrlStateCodec;
