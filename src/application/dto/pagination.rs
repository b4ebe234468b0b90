// src/application/dto/pagination.rs
use crate::domain::common::Page;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct PageDto<T> {
    pub items: Vec<T>,
    pub current_page: u32,
    pub per_page: u32,
    pub total: u64,
    pub last_page: u32,
}

impl<T> PageDto<T> {
    pub fn from_page<E>(page: Page<E>) -> Self
    where
        T: From<E>,
    {
        let last_page = page.last_page();
        let request = page.request;
        let total = page.total;
        Self {
            items: page.items.into_iter().map(T::from).collect(),
            current_page: request.page,
            per_page: request.per_page,
            total,
            last_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::PageRequest;

    #[test]
    fn page_metadata_is_carried_over() {
        let page = Page::new(vec![1_i32, 2, 3], 23, PageRequest::new(Some(2), Some(10), 15));
        let dto: PageDto<i64> = PageDto::from_page(page);
        assert_eq!(dto.items, vec![1, 2, 3]);
        assert_eq!(dto.current_page, 2);
        assert_eq!(dto.per_page, 10);
        assert_eq!(dto.total, 23);
        assert_eq!(dto.last_page, 3);
    }
}
