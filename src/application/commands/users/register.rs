// src/application/commands/users/register.rs
use super::UserCommandService;
use crate::{
    application::{
        dto::AuthSessionDto,
        error::{ApplicationError, ApplicationResult},
        validation::FieldErrors,
    },
    domain::{
        errors::DomainError,
        user::{Email, NewUser, PasswordHash, User, UserName},
    },
};
use chrono::Duration;
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;
use validator::Validate;

/// Accounts created this recently with the same email are treated as the
/// earlier submission of a retried request.
pub const REGISTRATION_RETRY_WINDOW_SECS: i64 = 5;

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct RegisterUserCommand {
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 255,
        message = "The name field is required and may not be greater than 255 characters."
    ))]
    pub name: String,
    #[serde(default)]
    #[validate(
        length(
            min = 1,
            max = 255,
            message = "The email field is required and may not be greater than 255 characters."
        ),
        email(message = "The email must be a valid email address.")
    )]
    pub email: String,
    #[serde(default)]
    #[validate(
        length(min = 6, message = "The password must be at least 6 characters."),
        must_match(
            other = "password_confirmation",
            message = "The password confirmation does not match."
        )
    )]
    pub password: String,
    #[serde(default)]
    pub password_confirmation: String,
}

impl UserCommandService {
    pub async fn register(
        &self,
        mut command: RegisterUserCommand,
    ) -> ApplicationResult<AuthSessionDto> {
        command.email = Email::normalize(&command.email);

        if let Some(existing) = self.recent_registration(&command).await? {
            info!(user_id = %existing.id, "absorbed repeated registration");
            return self.start_session(existing).await;
        }

        self.validate_registration(&command).await?;
        let user = self.create_user(&command).await?;
        let user_id = user.id;

        match self.start_session(user).await {
            Ok(session) => {
                info!(%user_id, "user registered");
                Ok(session)
            }
            Err(err) => {
                error!(error = %err, %user_id, "registration could not be completed");
                if let Err(cleanup) = self.user_repo.delete(user_id).await {
                    warn!(
                        error = %cleanup,
                        %user_id,
                        "failed to remove partially registered account"
                    );
                }
                Err(ApplicationError::failed("Registration failed"))
            }
        }
    }

    /// Account with the same email created inside the retry window.
    async fn recent_registration(
        &self,
        command: &RegisterUserCommand,
    ) -> ApplicationResult<Option<User>> {
        let Ok(email) = Email::new(&command.email) else {
            return Ok(None);
        };
        let since = self.clock.now() - Duration::seconds(REGISTRATION_RETRY_WINDOW_SECS);
        Ok(self.user_repo.find_created_since(&email, since).await?)
    }

    async fn validate_registration(&self, command: &RegisterUserCommand) -> ApplicationResult<()> {
        let mut errors = FieldErrors::collect(command);
        if !errors.contains("email") {
            let email = Email::new(&command.email)?;
            if self.user_repo.find_by_email(&email).await?.is_some() {
                errors.add("email", "The email has already been taken.");
            }
        }
        errors.into_result()?;
        Ok(())
    }

    async fn create_user(&self, command: &RegisterUserCommand) -> ApplicationResult<User> {
        let name = UserName::new(command.name.clone())?;
        let email = Email::new(&command.email)?;
        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let new_user = NewUser::new(name, email, password_hash, self.clock.now());
        self.user_repo.insert(new_user).await.map_err(|err| match err {
            DomainError::Conflict(_) => {
                ApplicationError::conflict("An account with this email already exists")
            }
            other => other.into(),
        })
    }
}
