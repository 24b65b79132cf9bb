use serde::{Deserialize, Serialize};

use crate::domain::errors::{MarketError, MarketResult};

/// A 1-based pagination window over a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    pub const DEFAULT_PAGE: u64 = 1;
    pub const DEFAULT_LIMIT: u64 = 10;

    /// Create a window; both values must be at least 1
    pub fn new(page: u64, limit: u64) -> MarketResult<Self> {
        if page == 0 {
            return Err(MarketError::validation("page must be at least 1"));
        }
        if limit == 0 {
            return Err(MarketError::validation("limit must be at least 1"));
        }
        Ok(Self { page, limit })
    }

    /// Window from optional query values, falling back to the defaults
    pub fn from_query(page: Option<u64>, limit: Option<u64>) -> MarketResult<Self> {
        Self::new(
            page.unwrap_or(Self::DEFAULT_PAGE),
            limit.unwrap_or(Self::DEFAULT_LIMIT),
        )
    }

    /// Slice a full result set, preserving its order. Pages past the end
    /// yield an empty slice, not an error.
    pub fn paginate<T>(&self, items: Vec<T>) -> (Vec<T>, Pagination) {
        let total_items = items.len() as u64;
        let total_pages = total_items.div_ceil(self.limit);
        let start = (self.page - 1).saturating_mul(self.limit);

        let window: Vec<T> = items
            .into_iter()
            .skip(start as usize)
            .take(self.limit as usize)
            .collect();

        (
            window,
            Pagination {
                page: self.page,
                limit: self.limit,
                total_items,
                total_pages,
            },
        )
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: Self::DEFAULT_PAGE,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

/// Pagination block attached to list responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let page = PageRequest::from_query(None, None).unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 10);
    }

    #[test]
    fn test_zero_values_rejected() {
        assert!(PageRequest::new(0, 10).is_err());
        assert!(PageRequest::new(1, 0).is_err());
    }

    #[test]
    fn test_paginate_slices_in_order() {
        let page = PageRequest::new(2, 3).unwrap();
        let (window, info) = page.paginate((1..=8).collect::<Vec<_>>());
        assert_eq!(window, vec![4, 5, 6]);
        assert_eq!(info.total_items, 8);
        assert_eq!(info.total_pages, 3);
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let page = PageRequest::new(5, 10).unwrap();
        let (window, info) = page.paginate(vec![1, 2, 3]);
        assert!(window.is_empty());
        assert_eq!(info.total_items, 3);
        assert_eq!(info.total_pages, 1);
    }

    #[test]
    fn test_empty_listing() {
        let page = PageRequest::default();
        let (window, info) = page.paginate(Vec::<u32>::new());
        assert!(window.is_empty());
        assert_eq!(info.total_pages, 0);
    }
}
