// src/application/commands/users/session.rs
use super::UserCommandService;
use crate::application::{
    dto::{AuthSessionDto, AuthenticatedUser, UserDto},
    error::{ApplicationError, ApplicationResult},
};
use tracing::info;

impl UserCommandService {
    /// Verifies a bearer token and rejects revoked ones.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let auth = self.token_manager.authenticate(token).await?;
        self.ensure_not_revoked(&auth).await?;
        Ok(auth)
    }

    pub async fn logout(&self, auth: &AuthenticatedUser) -> ApplicationResult<()> {
        self.revocations
            .revoke(&auth.token_id, auth.refresh_expires_at)
            .await?;
        info!(user_id = %auth.id, "user logged out");
        Ok(())
    }

    /// Exchanges a (possibly expired) token for a fresh one and revokes the old one.
    pub async fn refresh(&self, token: &str) -> ApplicationResult<AuthSessionDto> {
        let auth = self.token_manager.authenticate_for_refresh(token).await?;
        self.ensure_not_revoked(&auth).await?;

        let user = self
            .user_repo
            .find_by_id(auth.id)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("Unauthenticated"))?;

        let session = self.start_session(user).await?;
        self.revocations
            .revoke(&auth.token_id, auth.refresh_expires_at)
            .await?;
        Ok(session)
    }

    pub async fn me(&self, auth: &AuthenticatedUser) -> ApplicationResult<UserDto> {
        self.user_repo
            .find_by_id(auth.id)
            .await?
            .map(UserDto::from)
            .ok_or_else(|| ApplicationError::unauthorized("Unauthenticated"))
    }

    async fn ensure_not_revoked(&self, auth: &AuthenticatedUser) -> ApplicationResult<()> {
        if self.revocations.is_revoked(&auth.token_id).await? {
            return Err(ApplicationError::unauthorized("Token has been revoked"));
        }
        Ok(())
    }
}
