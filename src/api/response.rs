//! List endpoint payload

use serde::Deserialize;

use crate::domain::ResultPage;

/// `{ items | attendees: [...], total: n }`
#[derive(Debug, Deserialize)]
pub struct ListResponse<T> {
    #[serde(alias = "attendees")]
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> From<ListResponse<T>> for ResultPage<T> {
    fn from(response: ListResponse<T>) -> Self {
        Self {
            items: response.items,
            total_matching: response.total,
        }
    }
}
