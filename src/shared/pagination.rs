//! Paged result container shared by list queries.

use serde::{Deserialize, Serialize};

/// Largest page a client may request.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Page size used when the client does not send one.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// One page of a larger result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    pub total_count: u64,
    pub total_pages: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, page: u32, page_size: u32, total_count: u64) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            total_count.div_ceil(u64::from(page_size)) as u32
        };

        Self {
            items,
            page,
            page_size,
            total_count,
            total_pages,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_count: self.total_count,
            total_pages: self.total_pages,
        }
    }
}

/// Row offset of the first item on `page` (1-based).
pub fn offset(page: u32, page_size: u32) -> u64 {
    u64::from(page.saturating_sub(1)) * u64::from(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        let page: Page<u8> = Page::new(vec![], 1, 20, 41);
        assert_eq!(page.total_pages, 3);

        let empty: Page<u8> = Page::new(vec![], 1, 20, 0);
        assert_eq!(empty.total_pages, 0);
    }

    #[test]
    fn test_offset() {
        assert_eq!(offset(1, 20), 0);
        assert_eq!(offset(3, 20), 40);
        assert_eq!(offset(0, 20), 0);
    }

    #[test]
    fn test_map_keeps_counts() {
        let page = Page::new(vec![1, 2], 2, 2, 5).map(|n| n * 10);
        assert_eq!(page.items, vec![10, 20]);
        assert_eq!(page.total_pages, 3);
    }
}
