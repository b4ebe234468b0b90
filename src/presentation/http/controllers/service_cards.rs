// src/presentation/http/controllers/service_cards.rs
use crate::application::{
    commands::service_cards::{CreateServiceCardCommand, UpdateServiceCardCommand},
    dto::ServiceCardDto,
};
use crate::presentation::http::{
    error::{ErrorResponse, HttpResult, IntoHttpResult},
    extractors::{Authenticated, IdPath, JsonBody, Uploads},
    response::Envelope,
    state::HttpState,
};
use axum::Extension;

#[utoipa::path(
    get,
    path = "/api/services-cards",
    responses(
        (status = 200, description = "All service cards.", body = [ServiceCardDto])
    ),
    security([]),
    tag = "Service cards"
)]
pub async fn list(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Envelope<Vec<ServiceCardDto>>> {
    state
        .services
        .service_card_queries
        .list()
        .await
        .into_http()
        .map(Envelope::ok)
}

#[utoipa::path(
    get,
    path = "/api/services-cards/{id}",
    params(("id" = i64, Path, description = "Card id")),
    responses(
        (status = 200, description = "The card.", body = ServiceCardDto),
        (status = 404, description = "Not found.", body = ErrorResponse)
    ),
    security([]),
    tag = "Service cards"
)]
pub async fn show(
    Extension(state): Extension<HttpState>,
    IdPath(id): IdPath,
) -> HttpResult<Envelope<ServiceCardDto>> {
    state
        .services
        .service_card_queries
        .get(id)
        .await
        .into_http()
        .map(Envelope::ok)
}

#[utoipa::path(
    post,
    path = "/api/services-cards",
    request_body = CreateServiceCardCommand,
    responses(
        (status = 201, description = "Card created.", body = ServiceCardDto),
        (status = 401, description = "Unauthenticated.", body = ErrorResponse),
        (status = 422, description = "Validation failed.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Service cards"
)]
pub async fn create(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    JsonBody(command): JsonBody<CreateServiceCardCommand>,
) -> HttpResult<Envelope<ServiceCardDto>> {
    let card = state
        .services
        .service_card_commands
        .create(command)
        .await
        .into_http()?;
    Ok(Envelope::created(card, "Service card created successfully"))
}

#[utoipa::path(
    put,
    path = "/api/services-cards/{id}",
    params(("id" = i64, Path, description = "Card id")),
    request_body = UpdateServiceCardCommand,
    responses(
        (status = 200, description = "Card updated.", body = ServiceCardDto),
        (status = 404, description = "Not found.", body = ErrorResponse),
        (status = 422, description = "Validation failed.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Service cards"
)]
pub async fn update(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
    JsonBody(command): JsonBody<UpdateServiceCardCommand>,
) -> HttpResult<Envelope<ServiceCardDto>> {
    let card = state
        .services
        .service_card_commands
        .update(id, command)
        .await
        .into_http()?;
    Ok(Envelope::with_message(card, "Service card updated successfully"))
}

#[utoipa::path(
    delete,
    path = "/api/services-cards/{id}",
    params(("id" = i64, Path, description = "Card id")),
    responses(
        (status = 200, description = "Card deleted."),
        (status = 404, description = "Not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Service cards"
)]
pub async fn delete(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
) -> HttpResult<Envelope<()>> {
    state
        .services
        .service_card_commands
        .delete(id)
        .await
        .into_http()?;
    Ok(Envelope::done("Service card deleted successfully"))
}

#[utoipa::path(
    post,
    path = "/api/services-cards/{id}/picture",
    params(("id" = i64, Path, description = "Card id")),
    request_body(content_type = "multipart/form-data", description = "Image in the `file` field, at most 2 MB."),
    responses(
        (status = 200, description = "Picture replaced.", body = ServiceCardDto),
        (status = 404, description = "Not found.", body = ErrorResponse),
        (status = 422, description = "Missing, oversized or non-image file.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Service cards"
)]
pub async fn upload_picture(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
    uploads: Uploads,
) -> HttpResult<Envelope<ServiceCardDto>> {
    let file = uploads.single("file").await?;
    let card = state
        .services
        .service_card_commands
        .upload_picture(id, file)
        .await
        .into_http()?;
    Ok(Envelope::with_message(card, "Picture uploaded successfully"))
}
