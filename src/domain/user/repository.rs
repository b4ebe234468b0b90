// src/domain/user/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{NewUser, User},
    value_objects::{Email, UserId},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;

    /// Account with `email` whose `created_at` is strictly after `since`.
    async fn find_created_since(
        &self,
        email: &Email,
        since: DateTime<Utc>,
    ) -> DomainResult<Option<User>>;

    async fn delete(&self, id: UserId) -> DomainResult<()>;
}
