// src/application/ports/security.rs
use crate::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
    /// `Ok(false)` on a mismatch; `Err` only when the hash itself is unusable.
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool>;
}

#[async_trait]
pub trait TokenManager: Send + Sync {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto>;
    /// Verifies signature and expiry.
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser>;
    /// Like [`TokenManager::authenticate`] but tolerates an expired token whose
    /// issue time is still inside the refresh window.
    async fn authenticate_for_refresh(&self, token: &str) -> ApplicationResult<AuthenticatedUser>;
}

#[async_trait]
pub trait TokenRevocationStore: Send + Sync {
    /// Records `token_id` as unusable until `expires_at`.
    async fn revoke(&self, token_id: &str, expires_at: DateTime<Utc>) -> ApplicationResult<()>;
    async fn is_revoked(&self, token_id: &str) -> ApplicationResult<bool>;
}
