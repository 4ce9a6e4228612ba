//! Fetched pages and list-screen pagination state

use serde::{Deserialize, Serialize};

use super::{QueryCriteria, QueryError};

/// Number of pages needed for `total_count` rows
pub fn page_count(total_count: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(u64::from(page_size)) as u32
}

/// One page of a collection.
///
/// Rows come from the response body; the total number of matching rows comes
/// from the `X-Total-Count` header and is `None` when the header was absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: Option<u64>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total_count: Option<u64>) -> Self {
        Self { items, total_count }
    }

    /// Total pages at `page_size`, if the total is known
    pub fn total_pages(&self, page_size: u32) -> Option<u32> {
        self.total_count.map(|total| page_count(total, page_size))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Pagination state of a list screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    current_page: u32,
    page_size: u32,
    total_pages: u32,
}

impl Pager {
    pub fn new(page_size: u32) -> Result<Self, QueryError> {
        if page_size == 0 {
            return Err(QueryError::InvalidPageSize);
        }
        Ok(Self {
            current_page: 1,
            page_size,
            total_pages: 1,
        })
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Move to `page` if it is within `1..=total_pages`
    pub fn go_to(&mut self, page: u32) -> bool {
        if page >= 1 && page <= self.total_pages {
            self.current_page = page;
            true
        } else {
            false
        }
    }

    pub fn next(&mut self) -> bool {
        if self.current_page < self.total_pages {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    pub fn previous(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Back to the first page, e.g. after the filters changed
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Recompute the page count from a response's total.
    ///
    /// A missing total leaves the previous page count untouched. When the
    /// count shrinks below the current page, the pager moves to the new last
    /// page.
    pub fn apply_total_count(&mut self, total_count: Option<u64>) {
        if let Some(total) = total_count {
            self.total_pages = page_count(total, self.page_size);
            self.current_page = self.current_page.min(self.total_pages.max(1));
        }
    }

    /// Update from a fetched page
    pub fn apply_page<T>(&mut self, page: &Page<T>) {
        self.apply_total_count(page.total_count);
    }

    /// Criteria for the current page
    pub fn criteria(&self) -> QueryCriteria {
        // current_page and page_size are both kept >= 1
        QueryCriteria::from_valid_parts(self.current_page, self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_rounds_up() {
        assert_eq!(page_count(23, 6), 4);
        assert_eq!(page_count(24, 6), 4);
        assert_eq!(page_count(25, 6), 5);
        assert_eq!(page_count(0, 6), 0);
    }

    #[test]
    fn test_total_pages_from_header_not_items() {
        let page = Page::new(vec![1, 2, 3, 4, 5], Some(23));
        assert_eq!(page.total_pages(6), Some(4));

        let page: Page<i32> = Page::new(vec![1, 2], None);
        assert_eq!(page.total_pages(6), None);
    }

    #[test]
    fn test_pager_navigation_bounds() {
        let mut pager = Pager::new(6).unwrap();
        assert!(!pager.next());
        assert!(!pager.go_to(2));

        pager.apply_total_count(Some(23));
        assert_eq!(pager.total_pages(), 4);
        assert!(pager.go_to(4));
        assert!(!pager.next());
        assert!(pager.previous());
        assert_eq!(pager.current_page(), 3);
        assert!(!pager.go_to(0));
        assert!(!pager.go_to(5));
        assert_eq!(pager.current_page(), 3);
    }

    #[test]
    fn test_missing_total_keeps_previous_page_count() {
        let mut pager = Pager::new(6).unwrap();
        pager.apply_total_count(Some(24));
        pager.apply_page(&Page::<()>::new(vec![], None));
        assert_eq!(pager.total_pages(), 4);
    }

    #[test]
    fn test_reset_and_criteria() {
        let mut pager = Pager::new(6).unwrap();
        pager.apply_total_count(Some(30));
        pager.go_to(3);
        assert_eq!(pager.criteria().page(), 3);
        assert_eq!(pager.criteria().size(), 6);

        pager.reset();
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn test_shrinking_total_clamps_current_page() {
        let mut pager = Pager::new(6).unwrap();
        pager.apply_total_count(Some(24));
        assert!(pager.go_to(4));

        // last row of page 4 deleted
        pager.apply_total_count(Some(18));
        assert_eq!(pager.total_pages(), 3);
        assert_eq!(pager.current_page(), 3);
        assert_eq!(pager.criteria().page(), 3);

        pager.apply_total_count(Some(0));
        assert_eq!(pager.total_pages(), 0);
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        assert!(Pager::new(0).is_err());
    }
}
