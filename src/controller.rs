//! List controller
//!
//! Owns the view state and the last fetched page. Every intent updates the
//! state, mirrors it into the address bar and issues a fetch. Fetches run as
//! tokio tasks, so intents must be called from within a runtime. Only the
//! completion of the most recent request is ever applied.

use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::api::{PageRequest, PaginationView, PAGE_SIZE};
use crate::domain::{ResultPage, ViewState};
use crate::error::{FetchError, FetchResult};
use crate::services::{DataSource, Location, UrlStateCodec};

/// What happened to one fetch completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// Latest request succeeded; its page replaced the previous one.
    Applied,
    /// Latest request failed; the previous page is kept.
    Failed,
    /// A newer request had been issued; the completion was dropped.
    Discarded,
}

struct Completion<T> {
    ticket: u64,
    state: ViewState,
    outcome: FetchResult<ResultPage<T>>,
}

/// Sends exactly one completion per fetch task. A task that ends without
/// reporting (a panicking data source, an abort) yields `Interrupted`.
struct CompletionGuard<T> {
    ticket: u64,
    state: ViewState,
    completions: Option<mpsc::UnboundedSender<Completion<T>>>,
}

impl<T> CompletionGuard<T> {
    fn send(&mut self, outcome: FetchResult<ResultPage<T>>) {
        if let Some(completions) = self.completions.take() {
            // The receiver lives as long as the controller
            let _ = completions.send(Completion {
                ticket: self.ticket,
                state: std::mem::take(&mut self.state),
                outcome,
            });
        }
    }
}

impl<T> Drop for CompletionGuard<T> {
    fn drop(&mut self) {
        self.send(Err(FetchError::Interrupted));
    }
}

struct InFlight {
    ticket: u64,
    task: JoinHandle<()>,
}

pub struct ListController<D: DataSource, L> {
    source: Arc<D>,
    codec: UrlStateCodec<L>,
    state: ViewState,
    results: ResultPage<D::Record>,
    latest_ticket: u64,
    in_flight: Option<InFlight>,
    completions_tx: mpsc::UnboundedSender<Completion<D::Record>>,
    completions_rx: mpsc::UnboundedReceiver<Completion<D::Record>>,
}

impl<D: DataSource, L: Location> ListController<D, L> {
    /// Seed the view state from the address bar. Nothing is fetched until
    /// [`refresh`](Self::refresh) or an intent runs.
    pub fn new(source: D, codec: UrlStateCodec<L>) -> Self {
        let state = codec.read();
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();

        debug!(search = %state.search_text, page = state.page_number, "View state restored");

        Self {
            source: Arc::new(source),
            codec,
            state,
            results: ResultPage::empty(),
            latest_ticket: 0,
            in_flight: None,
            completions_tx,
            completions_rx,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn results(&self) -> &ResultPage<D::Record> {
        &self.results
    }

    pub fn source(&self) -> &D {
        &self.source
    }

    pub fn location(&self) -> &L {
        self.codec.location()
    }

    pub fn pagination(&self) -> PaginationView {
        PaginationView::new(
            self.results.total_matching,
            PAGE_SIZE,
            self.state.page_number,
            self.results.items.len(),
        )
    }

    /// Whether the most recent request is still outstanding.
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    // =========================================================================
    // Intents
    // =========================================================================

    /// Fetch the current view state again without touching the address bar.
    pub fn refresh(&mut self) {
        self.request();
    }

    /// A new search invalidates the page position.
    pub fn search_changed(&mut self, text: impl Into<String>) {
        self.transition(ViewState::new(text, 1));
    }

    /// Jump to `page`. Bounds are the caller's concern; only `page >= 1` holds.
    pub fn page_changed(&mut self, page: u32) {
        let search_text = self.state.search_text.clone();
        self.transition(ViewState::new(search_text, page));
    }

    pub fn go_first(&mut self) {
        self.page_changed(1);
    }

    pub fn go_last(&mut self) {
        self.page_changed(self.pagination().total_pages);
    }

    pub fn go_next(&mut self) {
        self.page_changed(self.state.page_number.saturating_add(1));
    }

    pub fn go_previous(&mut self) {
        self.page_changed(self.state.page_number.saturating_sub(1));
    }

    /// The address bar moved on its own (back/forward). Adopt its state.
    pub fn location_changed(&mut self) {
        let state = self.codec.read();
        debug!(search = %state.search_text, page = state.page_number, "View state restored from history");
        self.state = state;
        self.request();
    }

    // =========================================================================
    // Fetching
    // =========================================================================

    /// Wait for the next fetch completion and apply it if it is current.
    ///
    /// Waits indefinitely when nothing is in flight.
    pub async fn settle(&mut self) -> Option<Settlement> {
        let completion = self.completions_rx.recv().await?;
        Some(self.apply(completion))
    }

    /// Wait until the most recent request has settled.
    pub async fn wait_idle(&mut self) {
        while self.is_loading() {
            if self.settle().await.is_none() {
                break;
            }
        }
    }

    fn transition(&mut self, next: ViewState) {
        self.state = next;
        self.codec.write(&self.state);
        self.request();
    }

    fn request(&mut self) {
        if let Some(previous) = self.in_flight.take() {
            previous.task.abort();
            debug!(ticket = previous.ticket, "Cancelled superseded request");
        }

        self.latest_ticket += 1;
        let ticket = self.latest_ticket;
        let request = PageRequest::for_state(&self.state);

        debug!(
            ticket,
            page_index = request.page_index,
            query = ?request.query,
            "Requesting page"
        );

        let source = Arc::clone(&self.source);

        let mut guard = CompletionGuard {
            ticket,
            state: self.state.clone(),
            completions: Some(self.completions_tx.clone()),
        };

        let task = tokio::spawn(async move {
            let outcome = source.fetch(request).await;
            guard.send(outcome);
        });

        self.in_flight = Some(InFlight { ticket, task });
    }

    fn apply(&mut self, completion: Completion<D::Record>) -> Settlement {
        if completion.ticket != self.latest_ticket {
            debug!(
                ticket = completion.ticket,
                latest = self.latest_ticket,
                search = %completion.state.search_text,
                page = completion.state.page_number,
                "Discarded stale response"
            );
            return Settlement::Discarded;
        }

        self.in_flight = None;

        match completion.outcome {
            Ok(page) => {
                info!(
                    ticket = completion.ticket,
                    items = page.items.len(),
                    total = page.total_matching,
                    "Page applied"
                );
                self.results = page;
                Settlement::Applied
            }
            Err(e) => {
                e.log();
                Settlement::Failed
            }
        }
    }
}

impl<D: DataSource, L> Drop for ListController<D, L> {
    fn drop(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.task.abort();
        }
    }
}
