// src/domain/service_card.rs
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct ServiceCard {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub picture: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewServiceCard {
    pub name: String,
    pub description: Option<String>,
    pub picture: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ServiceCardChanges {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub picture: Option<Option<String>>,
    pub updated_at: DateTime<Utc>,
}

#[async_trait]
pub trait ServiceCardRepository: Send + Sync {
    async fn list(&self) -> DomainResult<Vec<ServiceCard>>;
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<ServiceCard>>;
    async fn insert(&self, card: NewServiceCard) -> DomainResult<ServiceCard>;
    async fn update(&self, id: i64, changes: ServiceCardChanges) -> DomainResult<ServiceCard>;
    async fn delete(&self, id: i64) -> DomainResult<()>;
}
