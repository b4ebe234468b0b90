// src/domain/common.rs
use crate::domain::errors::{DomainError, DomainResult};

pub const MAX_PER_PAGE: u32 = 100;

/// Offset pagination window. `page` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl PageRequest {
    pub fn new(page: Option<u32>, per_page: Option<u32>, default_per_page: u32) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            per_page: per_page.unwrap_or(default_per_page).clamp(1, MAX_PER_PAGE),
        }
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.per_page)
    }
}

#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub request: PageRequest,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            request,
        }
    }

    pub fn last_page(&self) -> u32 {
        let per_page = u64::from(self.request.per_page);
        let pages = self.total.div_ceil(per_page).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            request: self.request,
        }
    }
}

/// One entry of a bulk sort-order write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortPosition {
    pub id: i64,
    pub sort_order: i32,
}

impl SortPosition {
    pub fn new(id: i64, sort_order: i32) -> DomainResult<Self> {
        if sort_order < 0 {
            return Err(DomainError::Validation(
                "sort_order must be zero or greater".into(),
            ));
        }
        Ok(Self { id, sort_order })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_request_clamps_inputs() {
        let req = PageRequest::new(Some(0), Some(500), 15);
        assert_eq!(req.page, 1);
        assert_eq!(req.per_page, MAX_PER_PAGE);

        let req = PageRequest::new(None, None, 15);
        assert_eq!(req.per_page, 15);
        assert_eq!(req.offset(), 0);

        let req = PageRequest::new(Some(3), Some(20), 15);
        assert_eq!(req.offset(), 40);
    }

    #[test]
    fn last_page_is_at_least_one() {
        let empty: Page<u8> = Page::new(vec![], 0, PageRequest::new(None, None, 20));
        assert_eq!(empty.last_page(), 1);

        let page: Page<u8> = Page::new(vec![1], 41, PageRequest::new(None, Some(20), 20));
        assert_eq!(page.last_page(), 3);
    }

    #[test]
    fn negative_sort_order_is_rejected() {
        assert!(SortPosition::new(1, -1).is_err());
        assert!(SortPosition::new(1, 0).is_ok());
    }
}
