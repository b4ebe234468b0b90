// src/domain/hosting_type.rs
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct HostingType {
    pub id: i64,
    pub name: String,
    pub image: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewHostingType {
    pub name: String,
    pub image: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct HostingTypeChanges {
    pub name: Option<String>,
    pub image: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub updated_at: DateTime<Utc>,
}

#[async_trait]
pub trait HostingTypeRepository: Send + Sync {
    async fn list(&self) -> DomainResult<Vec<HostingType>>;
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<HostingType>>;
    async fn insert(&self, hosting_type: NewHostingType) -> DomainResult<HostingType>;
    async fn update(&self, id: i64, changes: HostingTypeChanges) -> DomainResult<HostingType>;
    async fn delete(&self, id: i64) -> DomainResult<()>;
}
