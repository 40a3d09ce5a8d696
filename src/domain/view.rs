//! View state and result page types
//!
//! `ViewState` is the (search, page) pair the controller owns; `ResultPage`
//! is one server response, replaced wholesale on every successful fetch.

use std::fmt::Debug;
use std::hash::Hash;

/// A listed record. Only its identity matters to the controller.
pub trait Record {
    type Id: Debug + Clone + Eq + Hash;

    fn id(&self) -> &Self::Id;
}

/// Search text and 1-based page number driving what is fetched.
///
/// `page_number` is a UI intent: it may exceed the total page count after a
/// search narrows the results. Display code clamps it, nothing rewrites it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub search_text: String,
    pub page_number: u32,
}

impl ViewState {
    pub fn new(search_text: impl Into<String>, page_number: u32) -> Self {
        Self {
            search_text: search_text.into(),
            page_number: page_number.max(1),
        }
    }

    pub fn has_search(&self) -> bool {
        !self.search_text.is_empty()
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new("", 1)
    }
}

/// One page of records plus the total count across all pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPage<T> {
    pub items: Vec<T>,
    pub total_matching: u64,
}

impl<T> ResultPage<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_matching: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for ResultPage<T> {
    fn default() -> Self {
        Self::empty()
    }
}
