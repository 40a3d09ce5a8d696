//! Address bar abstraction
//!
//! The current document location is a shared mutable channel. It is only
//! touched through [`Location`], so tests and the console driver can supply
//! an in-memory history instead of a browser.

use parking_lot::Mutex;
use std::sync::Arc;
use url::Url;

pub trait Location {
    /// Current location.
    fn href(&self) -> Url;

    /// Overwrite the current history entry without navigating.
    fn replace(&self, url: Url);

    /// Append a new history entry and make it current.
    fn push(&self, url: Url);
}

/// In-memory history stack with back/forward support.
#[derive(Clone)]
pub struct MemoryLocation {
    inner: Arc<Mutex<History>>,
}

struct History {
    entries: Vec<Url>,
    index: usize,
}

impl MemoryLocation {
    pub fn new(initial: Url) -> Self {
        Self {
            inner: Arc::new(Mutex::new(History {
                entries: vec![initial],
                index: 0,
            })),
        }
    }

    /// Step back one entry. Returns false at the start of history.
    pub fn back(&self) -> bool {
        let mut history = self.inner.lock();
        if history.index == 0 {
            return false;
        }
        history.index -= 1;
        true
    }

    /// Step forward one entry. Returns false at the end of history.
    pub fn forward(&self) -> bool {
        let mut history = self.inner.lock();
        if history.index + 1 >= history.entries.len() {
            return false;
        }
        history.index += 1;
        true
    }

    pub fn history_len(&self) -> usize {
        self.inner.lock().entries.len()
    }
}

impl Location for MemoryLocation {
    fn href(&self) -> Url {
        let history = self.inner.lock();
        history.entries[history.index].clone()
    }

    fn replace(&self, url: Url) {
        let mut history = self.inner.lock();
        let index = history.index;
        history.entries[index] = url;
    }

    fn push(&self, url: Url) {
        let mut history = self.inner.lock();
        let next = history.index + 1;
        // Pushing drops any forward entries, as browsers do
        history.entries.truncate(next);
        history.entries.push(url);
        history.index = next;
    }
}
