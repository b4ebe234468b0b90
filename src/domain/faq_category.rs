// src/domain/faq_category.rs
use crate::domain::common::SortPosition;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct FaqCategory {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewFaqCategory {
    pub name: String,
    pub description: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct FaqCategoryChanges {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct FaqCategoryFilter {
    pub active: Option<bool>,
    pub search: Option<String>,
}

#[async_trait]
pub trait FaqCategoryRepository: Send + Sync {
    async fn list(&self, filter: &FaqCategoryFilter) -> DomainResult<Vec<FaqCategory>>;
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<FaqCategory>>;
    async fn name_taken(&self, name: &str, exclude_id: Option<i64>) -> DomainResult<bool>;
    async fn insert(&self, category: NewFaqCategory) -> DomainResult<FaqCategory>;
    async fn update(&self, id: i64, changes: FaqCategoryChanges) -> DomainResult<FaqCategory>;
    async fn delete(&self, id: i64) -> DomainResult<()>;
    async fn toggle_active(&self, id: i64) -> DomainResult<FaqCategory>;
    /// Writes every position in one transaction; an unknown id aborts the batch.
    async fn reorder(&self, positions: &[SortPosition]) -> DomainResult<()>;
}
