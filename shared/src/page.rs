//! Client-side pagination and search cursor.

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Pagination and search state owned by the transaction list.
///
/// `total_items` comes from the count endpoint, which ignores the search query,
/// so the page bounds during a search are those of the unfiltered ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub current_page: u32,
    pub page_size: u32,
    pub total_items: u64,
    pub search_query: String,
}

/// The `(page, size, search)` tuple that identifies a single list request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageQuery {
    pub page: u32,
    pub size: u32,
    pub search: Option<String>,
}

impl PageState {
    pub fn new(page_size: u32) -> Self {
        Self {
            current_page: 0,
            page_size: if page_size == 0 { DEFAULT_PAGE_SIZE } else { page_size },
            total_items: 0,
            search_query: String::new(),
        }
    }

    pub fn query(&self) -> PageQuery {
        PageQuery {
            page: self.current_page,
            size: self.page_size,
            search: if self.search_query.is_empty() {
                None
            } else {
                Some(self.search_query.clone())
            },
        }
    }

    pub fn total_pages(&self) -> u64 {
        self.total_items.div_ceil(u64::from(self.page_size))
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 0
    }

    pub fn has_next(&self) -> bool {
        (u64::from(self.current_page) + 1) * u64::from(self.page_size) < self.total_items
    }

    /// Step back one page. Returns false when already on the first page.
    pub fn previous_page(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.current_page -= 1;
        true
    }

    /// Step forward one page. Returns false when the last page is showing.
    pub fn next_page(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current_page += 1;
        true
    }

    /// Change the page size and go back to the first page. A zero size is rejected.
    pub fn set_page_size(&mut self, page_size: u32) -> bool {
        if page_size == 0 {
            return false;
        }
        self.page_size = page_size;
        self.current_page = 0;
        true
    }

    /// Apply a new search (trimmed) and go back to the first page.
    pub fn set_search_query(&mut self, query: &str) {
        self.search_query = query.trim().to_string();
        self.current_page = 0;
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
