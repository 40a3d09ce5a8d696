//! Query encoding for the list endpoint

use crate::domain::ViewState;

/// One page request as sent to a data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page index
    pub page_index: u32,

    /// Search text, absent when the search box is empty
    pub query: Option<String>,
}

impl PageRequest {
    pub fn for_state(state: &ViewState) -> Self {
        Self {
            page_index: state.page_number.saturating_sub(1),
            query: state.has_search().then(|| state.search_text.clone()),
        }
    }

    /// Query-string pairs in wire order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("pageIndex", self.page_index.to_string())];
        if let Some(query) = &self.query {
            pairs.push(("query", query.clone()));
        }
        pairs
    }
}
