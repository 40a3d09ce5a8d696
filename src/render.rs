//! Text rendering of the attendee list
//!
//! [`ListView`] is the snapshot a renderer needs: rows, the empty notice and
//! the footer counters. Row formatting for attendees lives here too.

use std::fmt;

use crate::api::PaginationView;
use crate::domain::{Attendee, ResultPage, ViewState};

/// Message shown in place of rows when the current page is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyNotice {
    /// No search is active, so the page itself does not exist
    NoPage,
    /// The active search matched nothing on this page
    NoMatch,
}

impl EmptyNotice {
    pub fn for_state(state: &ViewState) -> Self {
        if state.has_search() {
            Self::NoMatch
        } else {
            Self::NoPage
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::NoPage => "Page not found!",
            Self::NoMatch => "No attendees match this search",
        }
    }
}

/// Footer counters as displayed under the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footer {
    pub showing: usize,
    pub of_total: u64,
    pub page: u32,
    pub total_pages: u32,
}

impl Footer {
    pub fn new<T>(results: &ResultPage<T>, pagination: &PaginationView) -> Self {
        Self {
            showing: results.items.len(),
            of_total: if results.is_empty() { 0 } else { results.total_matching },
            page: pagination.displayed_page,
            total_pages: pagination.displayed_total_pages(),
        }
    }
}

pub struct ListView<'a, T> {
    pub state: &'a ViewState,
    pub results: &'a ResultPage<T>,
    pub pagination: PaginationView,
}

impl<'a, T> ListView<'a, T> {
    pub fn new(state: &'a ViewState, results: &'a ResultPage<T>, pagination: PaginationView) -> Self {
        Self {
            state,
            results,
            pagination,
        }
    }

    pub fn notice(&self) -> Option<EmptyNotice> {
        self.results
            .is_empty()
            .then(|| EmptyNotice::for_state(self.state))
    }

    pub fn footer(&self) -> Footer {
        Footer::new(self.results, &self.pagination)
    }
}

fn button(label: &str, enabled: bool) -> String {
    if enabled {
        format!("[{label}]")
    } else {
        format!(" {label} ")
    }
}

impl fmt::Display for ListView<'_, Attendee> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.state.has_search() {
            writeln!(f, "Attendees (search: {})", self.state.search_text)?;
        } else {
            writeln!(f, "Attendees")?;
        }

        match self.notice() {
            Some(notice) => writeln!(f, "  {}", notice.message())?,
            None => {
                for attendee in &self.results.items {
                    let checked_in = attendee
                        .checked_in_at
                        .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                        .unwrap_or_else(|| "not checked in".to_string());
                    writeln!(
                        f,
                        "  {:<10} {:<24} {:<32} {} | {}",
                        attendee.id,
                        attendee.name,
                        attendee.email.to_lowercase(),
                        attendee.created_at.format("%Y-%m-%d %H:%M"),
                        checked_in,
                    )?;
                }
            }
        }

        let footer = self.footer();
        let pagination = &self.pagination;
        write!(
            f,
            "Showing {} of {} items | Page {} of {} {}{}{}{}",
            footer.showing,
            footer.of_total,
            footer.page,
            footer.total_pages,
            button("<<", pagination.can_go_first()),
            button("<", pagination.can_go_previous()),
            button(">", pagination.can_go_next()),
            button(">>", pagination.can_go_last()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PAGE_SIZE;

    fn attendee(id: &str) -> Attendee {
        Attendee {
            id: id.to_string(),
            name: "Ada Lovelace".to_string(),
            email: "ADA@Example.com".to_string(),
            created_at: "2024-04-01T12:00:00Z".parse().unwrap(),
            checked_in_at: None,
        }
    }

    #[test]
    fn empty_results_without_search_use_no_page_notice() {
        let state = ViewState::new("", 1);
        let results: ResultPage<Attendee> = ResultPage::empty();
        let view = ListView::new(&state, &results, PaginationView::new(0, PAGE_SIZE, 1, 0));
        assert_eq!(view.notice(), Some(EmptyNotice::NoPage));
    }

    #[test]
    fn empty_results_with_search_use_no_match_notice() {
        let state = ViewState::new("zz", 1);
        let results: ResultPage<Attendee> = ResultPage::empty();
        let view = ListView::new(&state, &results, PaginationView::new(0, PAGE_SIZE, 1, 0));
        assert_eq!(view.notice(), Some(EmptyNotice::NoMatch));
    }

    #[test]
    fn footer_reports_zero_of_n_when_page_is_past_the_end() {
        let state = ViewState::new("", 5);
        let results: ResultPage<Attendee> = ResultPage {
            items: Vec::new(),
            total_matching: 25,
        };
        let pagination = PaginationView::new(25, PAGE_SIZE, 5, 0);
        let footer = ListView::new(&state, &results, pagination).footer();
        assert_eq!(
            footer,
            Footer {
                showing: 0,
                of_total: 0,
                page: 0,
                total_pages: 0
            }
        );
    }

    #[test]
    fn renders_rows_and_pager() {
        let state = ViewState::new("", 3);
        let results = ResultPage {
            items: vec![attendee("21"), attendee("22")],
            total_matching: 22,
        };
        let pagination = PaginationView::new(22, PAGE_SIZE, 3, 2);
        let text = ListView::new(&state, &results, pagination).to_string();

        assert!(text.contains("ada@example.com"));
        assert!(text.contains("not checked in"));
        assert!(text.ends_with("Showing 2 of 22 items | Page 3 of 3 [<<][<] >  >> "));
    }
}
