// src/domain/service.rs
use crate::domain::errors::DomainResult;
use crate::domain::service_category::CategorySummary;
use crate::domain::slug::{Slug, SlugLookup};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub const SLUG_FALLBACK: &str = "service";

#[derive(Debug, Clone)]
pub struct Service {
    pub id: i64,
    pub name: String,
    pub slug: Slug,
    pub description: Option<String>,
    pub category_id: Option<i64>,
    pub category: Option<CategorySummary>,
    pub icon: Option<String>,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewService {
    pub name: String,
    pub slug: Slug,
    pub description: Option<String>,
    pub category_id: Option<i64>,
    pub icon: Option<String>,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ServiceChanges {
    pub name: Option<String>,
    pub slug: Option<Slug>,
    pub description: Option<Option<String>>,
    pub category_id: Option<Option<i64>>,
    pub icon: Option<Option<String>>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i32>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct ServiceFilter {
    pub active: Option<bool>,
    pub category_id: Option<i64>,
    pub search: Option<String>,
}

#[async_trait]
pub trait ServiceRepository: SlugLookup {
    async fn list(&self, filter: &ServiceFilter) -> DomainResult<Vec<Service>>;
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Service>>;
    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Service>>;
    async fn insert(&self, service: NewService) -> DomainResult<Service>;
    async fn update(&self, id: i64, changes: ServiceChanges) -> DomainResult<Service>;
    async fn delete(&self, id: i64) -> DomainResult<()>;
    async fn toggle_active(&self, id: i64, at: DateTime<Utc>) -> DomainResult<Service>;
}
