// src/presentation/http/controllers/partners.rs
use crate::application::{
    commands::partners::{CreatePartnerCommand, UpdatePartnerCommand},
    dto::PartnerDto,
    queries::partners::ListPartnersQuery,
};
use crate::presentation::http::{
    error::{ErrorResponse, HttpResult, IntoHttpResult},
    extractors::{Authenticated, IdPath, JsonBody, QueryParams, Uploads},
    response::Envelope,
    state::HttpState,
};
use axum::Extension;

#[utoipa::path(
    get,
    path = "/api/partners",
    params(ListPartnersQuery),
    responses(
        (status = 200, description = "Partners ordered by name.", body = [PartnerDto]),
        (status = 422, description = "Invalid order or limit.", body = ErrorResponse)
    ),
    security([]),
    tag = "Partners"
)]
pub async fn list(
    Extension(state): Extension<HttpState>,
    QueryParams(query): QueryParams<ListPartnersQuery>,
) -> HttpResult<Envelope<Vec<PartnerDto>>> {
    state
        .services
        .partner_queries
        .list(query)
        .await
        .into_http()
        .map(Envelope::ok)
}

#[utoipa::path(
    get,
    path = "/api/partners/{id}",
    params(("id" = i64, Path, description = "Partner id")),
    responses(
        (status = 200, description = "The partner.", body = PartnerDto),
        (status = 404, description = "Not found.", body = ErrorResponse)
    ),
    security([]),
    tag = "Partners"
)]
pub async fn show(
    Extension(state): Extension<HttpState>,
    IdPath(id): IdPath,
) -> HttpResult<Envelope<PartnerDto>> {
    state
        .services
        .partner_queries
        .get(id)
        .await
        .into_http()
        .map(Envelope::ok)
}

#[utoipa::path(
    post,
    path = "/api/partners",
    request_body = CreatePartnerCommand,
    responses(
        (status = 201, description = "Partner created.", body = PartnerDto),
        (status = 401, description = "Unauthenticated.", body = ErrorResponse),
        (status = 422, description = "Validation failed.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Partners"
)]
pub async fn create(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    JsonBody(command): JsonBody<CreatePartnerCommand>,
) -> HttpResult<Envelope<PartnerDto>> {
    let partner = state
        .services
        .partner_commands
        .create(command)
        .await
        .into_http()?;
    Ok(Envelope::created(partner, "Partner created successfully"))
}

#[utoipa::path(
    put,
    path = "/api/partners/{id}",
    params(("id" = i64, Path, description = "Partner id")),
    request_body = UpdatePartnerCommand,
    responses(
        (status = 200, description = "Partner updated.", body = PartnerDto),
        (status = 404, description = "Not found.", body = ErrorResponse),
        (status = 422, description = "Validation failed.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Partners"
)]
pub async fn update(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
    JsonBody(command): JsonBody<UpdatePartnerCommand>,
) -> HttpResult<Envelope<PartnerDto>> {
    let partner = state
        .services
        .partner_commands
        .update(id, command)
        .await
        .into_http()?;
    Ok(Envelope::with_message(partner, "Partner updated successfully"))
}

#[utoipa::path(
    delete,
    path = "/api/partners/{id}",
    params(("id" = i64, Path, description = "Partner id")),
    responses(
        (status = 200, description = "Partner deleted."),
        (status = 404, description = "Not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Partners"
)]
pub async fn delete(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
) -> HttpResult<Envelope<()>> {
    state
        .services
        .partner_commands
        .delete(id)
        .await
        .into_http()?;
    Ok(Envelope::done("Partner deleted successfully"))
}

#[utoipa::path(
    post,
    path = "/api/partners/{id}/picture",
    params(("id" = i64, Path, description = "Partner id")),
    request_body(content_type = "multipart/form-data", description = "Image in the `file` field, at most 2 MB."),
    responses(
        (status = 200, description = "Picture replaced.", body = PartnerDto),
        (status = 404, description = "Not found.", body = ErrorResponse),
        (status = 422, description = "Missing, oversized or non-image file.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Partners"
)]
pub async fn upload_picture(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
    uploads: Uploads,
) -> HttpResult<Envelope<PartnerDto>> {
    let file = uploads.single("file").await?;
    let partner = state
        .services
        .partner_commands
        .upload_picture(id, file)
        .await
        .into_http()?;
    Ok(Envelope::with_message(partner, "Picture uploaded successfully"))
}
