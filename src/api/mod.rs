//! Wire side of the list endpoint and pagination bounds

pub mod pagination;
pub mod request;
pub mod response;

pub use pagination::{PaginationView, PAGE_SIZE};
pub use request::PageRequest;
pub use response::ListResponse;
