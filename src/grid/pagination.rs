//! Client-side pagination over the visible row set.
//!
//! The network layer returns everything in one response; pages exist only
//! in the view. Page changes emit a log line, which is the whole of the
//! pagination-changed hook for now.

use tracing::debug;

/// Rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// A page cursor over the visible rows.
#[derive(Debug, Clone)]
pub struct Paginator {
    /// Zero-based current page.
    page: usize,
    /// Rows per page.
    page_size: usize,
    /// Number of visible rows being paged over.
    total_rows: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new()
    }
}

impl Paginator {
    /// Create a paginator with the default page size.
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// Create a paginator with a custom page size.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
            total_rows: 0,
        }
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Zero-based current page.
    pub fn current_page(&self) -> usize {
        self.page
    }

    /// Number of rows being paged over.
    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    /// Number of pages; at least 1 so "Page 1/1" renders for an empty set.
    pub fn page_count(&self) -> usize {
        self.total_rows.div_ceil(self.page_size).max(1)
    }

    /// Update the row count, clamping the current page if the set shrank.
    pub fn set_total_rows(&mut self, total_rows: usize) {
        self.total_rows = total_rows;
        let last = self.page_count() - 1;
        if self.page > last {
            self.page = last;
            self.on_page_changed();
        }
    }

    /// Jump to the first page. Returns whether the page changed.
    pub fn first_page(&mut self) -> bool {
        self.go_to(0)
    }

    /// Jump to the last page. Returns whether the page changed.
    pub fn last_page(&mut self) -> bool {
        self.go_to(self.page_count() - 1)
    }

    /// Advance one page. Returns whether the page changed.
    pub fn next_page(&mut self) -> bool {
        self.go_to((self.page + 1).min(self.page_count() - 1))
    }

    /// Go back one page. Returns whether the page changed.
    pub fn prev_page(&mut self) -> bool {
        self.go_to(self.page.saturating_sub(1))
    }

    fn go_to(&mut self, page: usize) -> bool {
        if page == self.page {
            return false;
        }
        self.page = page;
        self.on_page_changed();
        true
    }

    /// Extension point for reacting to page changes; currently only logs.
    fn on_page_changed(&self) {
        debug!(page = self.page, "pagination changed");
    }

    /// The index range of the current page within the visible rows.
    pub fn page_range(&self) -> std::ops::Range<usize> {
        let start = (self.page * self.page_size).min(self.total_rows);
        let end = (start + self.page_size).min(self.total_rows);
        start..end
    }

    /// The current page's slice of `rows`.
    ///
    /// `rows` must be the same visible set the paginator was last sized
    /// against.
    pub fn page_slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let range = self.page_range();
        &rows[range.start.min(rows.len())..range.end.min(rows.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_size_is_50() {
        let p = Paginator::new();
        assert_eq!(p.page_size(), 50);
    }

    #[test]
    fn test_empty_set_has_one_page() {
        let p = Paginator::new();
        assert_eq!(p.page_count(), 1);
        assert_eq!(p.page_range(), 0..0);
    }

    #[test]
    fn test_page_count() {
        let mut p = Paginator::new();
        p.set_total_rows(50);
        assert_eq!(p.page_count(), 1);
        p.set_total_rows(51);
        assert_eq!(p.page_count(), 2);
        p.set_total_rows(150);
        assert_eq!(p.page_count(), 3);
    }

    #[test]
    fn test_navigation() {
        let mut p = Paginator::new();
        p.set_total_rows(120);

        assert!(p.next_page());
        assert_eq!(p.current_page(), 1);

        assert!(p.last_page());
        assert_eq!(p.current_page(), 2);

        // Already on the last page.
        assert!(!p.next_page());

        assert!(p.prev_page());
        assert_eq!(p.current_page(), 1);

        assert!(p.first_page());
        assert_eq!(p.current_page(), 0);
        assert!(!p.prev_page());
    }

    #[test]
    fn test_page_range() {
        let mut p = Paginator::new();
        p.set_total_rows(120);
        assert_eq!(p.page_range(), 0..50);
        p.next_page();
        assert_eq!(p.page_range(), 50..100);
        p.next_page();
        assert_eq!(p.page_range(), 100..120);
    }

    #[test]
    fn test_shrinking_set_clamps_page() {
        let mut p = Paginator::new();
        p.set_total_rows(200);
        p.last_page();
        assert_eq!(p.current_page(), 3);

        // A narrower filter shrinks the set; the cursor must follow.
        p.set_total_rows(60);
        assert_eq!(p.current_page(), 1);

        p.set_total_rows(0);
        assert_eq!(p.current_page(), 0);
    }

    #[test]
    fn test_page_slice() {
        let rows: Vec<u32> = (0..120).collect();
        let mut p = Paginator::new();
        p.set_total_rows(rows.len());

        assert_eq!(p.page_slice(&rows).len(), 50);
        p.last_page();
        let last = p.page_slice(&rows);
        assert_eq!(last.len(), 20);
        assert_eq!(last[0], 100);
    }

    #[test]
    fn test_custom_page_size() {
        let mut p = Paginator::with_page_size(10);
        p.set_total_rows(25);
        assert_eq!(p.page_count(), 3);
        p.last_page();
        assert_eq!(p.page_range(), 20..25);
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        let p = Paginator::with_page_size(0);
        assert_eq!(p.page_size(), 1);
    }
}
