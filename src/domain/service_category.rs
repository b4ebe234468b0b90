// src/domain/service_category.rs
use crate::domain::errors::DomainResult;
use crate::domain::slug::{Slug, SlugLookup};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub const SLUG_FALLBACK: &str = "service-category";

#[derive(Debug, Clone)]
pub struct ServiceCategory {
    pub id: i64,
    pub name: String,
    pub slug: Slug,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Compact view embedded in services and hosting plans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone)]
pub struct NewServiceCategory {
    pub name: String,
    pub slug: Slug,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ServiceCategoryChanges {
    pub name: Option<String>,
    pub slug: Option<Slug>,
    pub description: Option<Option<String>>,
    pub icon: Option<Option<String>>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct ServiceCategoryFilter {
    pub active: Option<bool>,
}

#[async_trait]
pub trait ServiceCategoryRepository: SlugLookup {
    async fn list(&self, filter: &ServiceCategoryFilter) -> DomainResult<Vec<ServiceCategory>>;
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<ServiceCategory>>;
    async fn insert(&self, category: NewServiceCategory) -> DomainResult<ServiceCategory>;
    async fn update(
        &self,
        id: i64,
        changes: ServiceCategoryChanges,
    ) -> DomainResult<ServiceCategory>;
    async fn delete(&self, id: i64) -> DomainResult<()>;
    async fn toggle_active(&self, id: i64, at: DateTime<Utc>) -> DomainResult<ServiceCategory>;
    /// Services plus hosting plans that reference the category.
    async fn count_dependents(&self, id: i64) -> DomainResult<u64>;
}
