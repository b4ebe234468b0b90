// src/application/commands/users/login.rs
use super::UserCommandService;
use crate::{
    application::{
        dto::AuthSessionDto,
        error::{ApplicationError, ApplicationResult},
        validation::FieldErrors,
    },
    domain::user::Email,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct LoginUserCommand {
    #[serde(default)]
    #[validate(
        length(min = 1, message = "The email field is required."),
        email(message = "The email must be a valid email address.")
    )]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "The password field is required."))]
    pub password: String,
}

impl UserCommandService {
    pub async fn login(&self, mut command: LoginUserCommand) -> ApplicationResult<AuthSessionDto> {
        command.email = Email::normalize(&command.email);
        FieldErrors::collect(&command).into_result()?;

        let email = Email::new(&command.email)
            .map_err(|_| ApplicationError::unauthorized(INVALID_CREDENTIALS))?;
        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized(INVALID_CREDENTIALS))?;

        let verified = self
            .password_hasher
            .verify(&command.password, user.password_hash.as_str())
            .await?;
        if !verified {
            return Err(ApplicationError::unauthorized(INVALID_CREDENTIALS));
        }

        self.start_session(user).await
    }
}
