// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::users::{LoginUserCommand, RegisterUserCommand},
    dto::{AuthSessionDto, UserDto},
};
use crate::presentation::http::{
    error::{ErrorResponse, HttpResult, IntoHttpResult},
    extractors::{Authenticated, BearerToken, JsonBody},
    response::Envelope,
    state::HttpState,
};
use axum::Extension;

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterUserCommand,
    responses(
        (status = 201, description = "User registered; the token payload is enveloped.", body = AuthSessionDto),
        (status = 409, description = "A concurrent registration stored the email first.", body = ErrorResponse),
        (status = 422, description = "Validation failed.", body = ErrorResponse),
        (status = 500, description = "Registration could not be completed.", body = ErrorResponse)
    ),
    security([]),
    tag = "Auth"
)]
pub async fn register(
    Extension(state): Extension<HttpState>,
    JsonBody(command): JsonBody<RegisterUserCommand>,
) -> HttpResult<Envelope<AuthSessionDto>> {
    let session = state.services.users.register(command).await.into_http()?;
    Ok(Envelope::created(session, "User registered successfully"))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginUserCommand,
    responses(
        (status = 200, description = "Token payload.", body = AuthSessionDto),
        (status = 401, description = "Invalid credentials.", body = ErrorResponse),
        (status = 422, description = "Validation failed.", body = ErrorResponse)
    ),
    security([]),
    tag = "Auth"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    JsonBody(command): JsonBody<LoginUserCommand>,
) -> HttpResult<Envelope<AuthSessionDto>> {
    state
        .services
        .users
        .login(command)
        .await
        .into_http()
        .map(Envelope::ok)
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Token revoked."),
        (status = 401, description = "Unauthenticated.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Auth"
)]
pub async fn logout(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Envelope<()>> {
    state.services.users.logout(&user).await.into_http()?;
    Ok(Envelope::done("Successfully logged out"))
}

#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    responses(
        (status = 200, description = "A new token payload; the old token is revoked.", body = AuthSessionDto),
        (status = 401, description = "Missing, revoked or stale token.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Auth"
)]
pub async fn refresh(
    Extension(state): Extension<HttpState>,
    BearerToken(token): BearerToken,
) -> HttpResult<Envelope<AuthSessionDto>> {
    state
        .services
        .users
        .refresh(&token)
        .await
        .into_http()
        .map(Envelope::ok)
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "The authenticated user.", body = UserDto),
        (status = 401, description = "Unauthenticated.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Auth"
)]
pub async fn me(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Envelope<UserDto>> {
    state
        .services
        .users
        .me(&user)
        .await
        .into_http()
        .map(Envelope::ok)
}
