// src/application/commands/users/service.rs
use std::sync::Arc;

use crate::application::{
    dto::{AuthSessionDto, TokenSubject},
    error::ApplicationResult,
    ports::{
        security::{PasswordHasher, TokenManager, TokenRevocationStore},
        time::Clock,
    },
};
use crate::domain::user::{User, UserRepository};

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) revocations: Arc<dyn TokenRevocationStore>,
    pub(super) clock: Arc<dyn Clock>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        revocations: Arc<dyn TokenRevocationStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            token_manager,
            revocations,
            clock,
        }
    }

    pub(super) async fn start_session(&self, user: User) -> ApplicationResult<AuthSessionDto> {
        let subject = TokenSubject {
            user_id: user.id,
            email: user.email.to_string(),
        };
        let token = self.token_manager.issue(subject).await?;
        Ok(AuthSessionDto::new(token, user.into()))
    }
}
