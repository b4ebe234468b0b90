// src/presentation/http/controllers/hosting_types.rs
use crate::application::{
    commands::hosting_types::{CreateHostingTypeCommand, UpdateHostingTypeCommand},
    dto::HostingTypeDto,
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
    path = "/api/type-of-hostings",
    responses(
        (status = 200, description = "All hosting types.", body = [HostingTypeDto])
    ),
    security([]),
    tag = "Hosting types"
)]
pub async fn list(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Envelope<Vec<HostingTypeDto>>> {
    state
        .services
        .hosting_type_queries
        .list()
        .await
        .into_http()
        .map(Envelope::ok)
}

#[utoipa::path(
    get,
    path = "/api/type-of-hostings/{id}",
    params(("id" = i64, Path, description = "Hosting type id")),
    responses(
        (status = 200, description = "The hosting type.", body = HostingTypeDto),
        (status = 404, description = "Not found.", body = ErrorResponse)
    ),
    security([]),
    tag = "Hosting types"
)]
pub async fn show(
    Extension(state): Extension<HttpState>,
    IdPath(id): IdPath,
) -> HttpResult<Envelope<HostingTypeDto>> {
    state
        .services
        .hosting_type_queries
        .get(id)
        .await
        .into_http()
        .map(Envelope::ok)
}

#[utoipa::path(
    post,
    path = "/api/type-of-hostings",
    request_body = CreateHostingTypeCommand,
    responses(
        (status = 201, description = "Hosting type created.", body = HostingTypeDto),
        (status = 401, description = "Unauthenticated.", body = ErrorResponse),
        (status = 422, description = "Validation failed.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Hosting types"
)]
pub async fn create(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    JsonBody(command): JsonBody<CreateHostingTypeCommand>,
) -> HttpResult<Envelope<HostingTypeDto>> {
    let hosting_type = state
        .services
        .hosting_type_commands
        .create(command)
        .await
        .into_http()?;
    Ok(Envelope::created(
        hosting_type,
        "Type of hosting created successfully",
    ))
}

#[utoipa::path(
    put,
    path = "/api/type-of-hostings/{id}",
    params(("id" = i64, Path, description = "Hosting type id")),
    request_body = UpdateHostingTypeCommand,
    responses(
        (status = 200, description = "Hosting type updated.", body = HostingTypeDto),
        (status = 404, description = "Not found.", body = ErrorResponse),
        (status = 422, description = "Validation failed.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Hosting types"
)]
pub async fn update(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
    JsonBody(command): JsonBody<UpdateHostingTypeCommand>,
) -> HttpResult<Envelope<HostingTypeDto>> {
    let hosting_type = state
        .services
        .hosting_type_commands
        .update(id, command)
        .await
        .into_http()?;
    Ok(Envelope::with_message(
        hosting_type,
        "Type of hosting updated successfully",
    ))
}

#[utoipa::path(
    delete,
    path = "/api/type-of-hostings/{id}",
    params(("id" = i64, Path, description = "Hosting type id")),
    responses(
        (status = 200, description = "Hosting type deleted."),
        (status = 404, description = "Not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Hosting types"
)]
pub async fn delete(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
) -> HttpResult<Envelope<()>> {
    state
        .services
        .hosting_type_commands
        .delete(id)
        .await
        .into_http()?;
    Ok(Envelope::done("Type of hosting deleted successfully"))
}

#[utoipa::path(
    post,
    path = "/api/type-of-hostings/{id}/image",
    params(("id" = i64, Path, description = "Hosting type id")),
    request_body(content_type = "multipart/form-data", description = "Image in the `file` field, at most 2 MB."),
    responses(
        (status = 200, description = "Image replaced.", body = HostingTypeDto),
        (status = 404, description = "Not found.", body = ErrorResponse),
        (status = 422, description = "Missing, oversized or non-image file.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Hosting types"
)]
pub async fn upload_image(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
    uploads: Uploads,
) -> HttpResult<Envelope<HostingTypeDto>> {
    let file = uploads.single("file").await?;
    let hosting_type = state
        .services
        .hosting_type_commands
        .upload_image(id, file)
        .await
        .into_http()?;
    Ok(Envelope::with_message(
        hosting_type,
        "Image uploaded successfully",
    ))
}
