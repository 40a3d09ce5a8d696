//! View state mirrored into the address bar
//!
//! Two query parameters carry the state: `search` and `page`. Every other
//! parameter on the location is left untouched.

use url::Url;

use super::location::Location;
use crate::domain::ViewState;

pub const SEARCH_PARAM: &str = "search";
pub const PAGE_PARAM: &str = "page";

pub struct UrlStateCodec<L> {
    location: L,
}

impl<L: Location> UrlStateCodec<L> {
    pub fn new(location: L) -> Self {
        Self { location }
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    /// Parse view state from the current location. Malformed values fall back
    /// to an empty search and page 1.
    pub fn read(&self) -> ViewState {
        decode(&self.location.href())
    }

    /// Replace the current history entry with one carrying `state`.
    pub fn write(&self, state: &ViewState) {
        let url = encode(self.location.href(), state);
        tracing::debug!(url = %url, "Address bar updated");
        self.location.replace(url);
    }
}

fn decode(url: &Url) -> ViewState {
    let mut search_text = String::new();
    let mut page_number = 1;

    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            SEARCH_PARAM => search_text = value.into_owned(),
            PAGE_PARAM => {
                page_number = value.trim().parse::<u32>().ok().filter(|p| *p >= 1).unwrap_or(1);
            }
            _ => {}
        }
    }

    ViewState::new(search_text, page_number)
}

fn encode(mut url: Url, state: &ViewState) -> Url {
    let others: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != SEARCH_PARAM && key != PAGE_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    {
        let mut query = url.query_pairs_mut();
        query.clear();
        for (key, value) in &others {
            query.append_pair(key, value);
        }
        if state.has_search() {
            query.append_pair(SEARCH_PARAM, &state.search_text);
        }
        query.append_pair(PAGE_PARAM, &state.page_number.to_string());
    }

    url
}
