// src/infrastructure/repositories/postgres_revoked_token.rs
use super::map_sqlx;
use crate::application::{
    ApplicationResult, error::ApplicationError, ports::security::TokenRevocationStore,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// Revocation list of token ids. Rows past `expires_at` are pruned on write.
#[derive(Clone)]
pub struct PostgresTokenRevocationStore {
    pool: PgPool,
}

impl PostgresTokenRevocationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn to_app(err: sqlx::Error) -> ApplicationError {
    ApplicationError::from(map_sqlx(err))
}

#[async_trait]
impl TokenRevocationStore for PostgresTokenRevocationStore {
    async fn revoke(&self, token_id: &str, expires_at: DateTime<Utc>) -> ApplicationResult<()> {
        sqlx::query("DELETE FROM revoked_tokens WHERE expires_at < NOW()")
            .execute(&self.pool)
            .await
            .map_err(to_app)?;
        sqlx::query(
            "INSERT INTO revoked_tokens (jti, expires_at) VALUES ($1, $2)
             ON CONFLICT (jti) DO NOTHING",
        )
        .bind(token_id)
        .bind(expires_at)
        .execute(&self.pool)
        .await
        .map_err(to_app)?;
        Ok(())
    }

    async fn is_revoked(&self, token_id: &str) -> ApplicationResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM revoked_tokens WHERE jti = $1)")
            .bind(token_id)
            .fetch_one(&self.pool)
            .await
            .map_err(to_app)
    }
}
