// src/domain/partner.rs
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Partner {
    pub id: i64,
    pub name: String,
    pub picture: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPartner {
    pub name: String,
    pub picture: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PartnerChanges {
    pub name: Option<String>,
    pub picture: Option<Option<String>>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct PartnerFilter {
    pub search: Option<String>,
    pub descending: bool,
    pub limit: Option<u32>,
}

#[async_trait]
pub trait PartnerRepository: Send + Sync {
    async fn list(&self, filter: &PartnerFilter) -> DomainResult<Vec<Partner>>;
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Partner>>;
    async fn insert(&self, partner: NewPartner) -> DomainResult<Partner>;
    async fn update(&self, id: i64, changes: PartnerChanges) -> DomainResult<Partner>;
    async fn delete(&self, id: i64) -> DomainResult<()>;
}
