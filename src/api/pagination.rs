//! Pagination bounds for the attendee list

/// Fixed number of records per page.
pub const PAGE_SIZE: u32 = 10;

/// Derived pagination bounds. Never stored, always recomputed from counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationView {
    pub total_pages: u32,
    /// Requested page, or 0 when no such page exists in the result set
    pub displayed_page: u32,
    pub is_first_page: bool,
    pub is_last_page: bool,
    pub has_results: bool,
    /// Whether the fetched page itself carries no rows
    pub page_is_empty: bool,
}

impl PaginationView {
    pub fn new(total_matching: u64, page_size: u32, requested_page: u32, items_on_page: usize) -> Self {
        let page_size = u64::from(page_size.max(1));
        let total_pages = u32::try_from(total_matching.div_ceil(page_size)).unwrap_or(u32::MAX);
        let has_results = total_matching > 0;

        let displayed_page = if !has_results || requested_page > total_pages {
            0
        } else {
            requested_page
        };

        Self {
            total_pages,
            displayed_page,
            is_first_page: requested_page <= 1,
            is_last_page: requested_page >= total_pages,
            has_results,
            page_is_empty: items_on_page == 0,
        }
    }

    /// Total pages as shown next to the current page; 0 while the page is empty
    pub fn displayed_total_pages(&self) -> u32 {
        if self.page_is_empty {
            0
        } else {
            self.total_pages
        }
    }

    fn navigable(&self) -> bool {
        self.has_results && !self.page_is_empty
    }

    pub fn can_go_first(&self) -> bool {
        !self.is_first_page && self.navigable()
    }

    pub fn can_go_previous(&self) -> bool {
        self.can_go_first()
    }

    pub fn can_go_next(&self) -> bool {
        !self.is_last_page && self.navigable()
    }

    pub fn can_go_last(&self) -> bool {
        self.can_go_next()
    }
}
