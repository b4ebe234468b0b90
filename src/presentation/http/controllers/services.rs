// src/presentation/http/controllers/services.rs
use crate::application::{
    commands::services::{CreateServiceCommand, UpdateServiceCommand},
    dto::ServiceDto,
    queries::{Lookup, services::ListServicesQuery},
};
use crate::presentation::http::{
    error::{ErrorResponse, HttpResult, IntoHttpResult},
    extractors::{Authenticated, IdPath, JsonBody, QueryParams},
    response::Envelope,
    state::HttpState,
};
use axum::{Extension, extract::Path};

#[utoipa::path(
    get,
    path = "/api/services",
    params(ListServicesQuery),
    responses(
        (status = 200, description = "Services with their category.", body = [ServiceDto])
    ),
    security([]),
    tag = "Services"
)]
pub async fn list(
    Extension(state): Extension<HttpState>,
    QueryParams(query): QueryParams<ListServicesQuery>,
) -> HttpResult<Envelope<Vec<ServiceDto>>> {
    state
        .services
        .service_queries
        .list(query)
        .await
        .into_http()
        .map(Envelope::ok)
}

#[utoipa::path(
    get,
    path = "/api/services/{id}",
    params(("id" = String, Path, description = "Numeric id or slug")),
    responses(
        (status = 200, description = "The service.", body = ServiceDto),
        (status = 404, description = "Not found.", body = ErrorResponse)
    ),
    security([]),
    tag = "Services"
)]
pub async fn show(
    Extension(state): Extension<HttpState>,
    Path(segment): Path<String>,
) -> HttpResult<Envelope<ServiceDto>> {
    state
        .services
        .service_queries
        .get(Lookup::parse(&segment))
        .await
        .into_http()
        .map(Envelope::ok)
}

#[utoipa::path(
    get,
    path = "/api/services/by-category/{category_id}",
    params(("category_id" = i64, Path, description = "Service category id")),
    responses(
        (status = 200, description = "Active services of the category.", body = [ServiceDto]),
        (status = 404, description = "Unknown category.", body = ErrorResponse)
    ),
    security([]),
    tag = "Services"
)]
pub async fn by_category(
    Extension(state): Extension<HttpState>,
    IdPath(category_id): IdPath,
) -> HttpResult<Envelope<Vec<ServiceDto>>> {
    state
        .services
        .service_queries
        .by_category(category_id)
        .await
        .into_http()
        .map(Envelope::ok)
}

#[utoipa::path(
    post,
    path = "/api/services",
    request_body = CreateServiceCommand,
    responses(
        (status = 201, description = "Service created.", body = ServiceDto),
        (status = 401, description = "Unauthenticated.", body = ErrorResponse),
        (status = 422, description = "Validation failed.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Services"
)]
pub async fn create(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    JsonBody(command): JsonBody<CreateServiceCommand>,
) -> HttpResult<Envelope<ServiceDto>> {
    let service = state
        .services
        .service_commands
        .create(command)
        .await
        .into_http()?;
    Ok(Envelope::created(service, "Service created successfully"))
}

#[utoipa::path(
    put,
    path = "/api/services/{id}",
    params(("id" = i64, Path, description = "Service id")),
    request_body = UpdateServiceCommand,
    responses(
        (status = 200, description = "Service updated.", body = ServiceDto),
        (status = 404, description = "Not found.", body = ErrorResponse),
        (status = 422, description = "Validation failed.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Services"
)]
pub async fn update(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
    JsonBody(command): JsonBody<UpdateServiceCommand>,
) -> HttpResult<Envelope<ServiceDto>> {
    let service = state
        .services
        .service_commands
        .update(id, command)
        .await
        .into_http()?;
    Ok(Envelope::with_message(service, "Service updated successfully"))
}

#[utoipa::path(
    delete,
    path = "/api/services/{id}",
    params(("id" = i64, Path, description = "Service id")),
    responses(
        (status = 200, description = "Service deleted."),
        (status = 404, description = "Not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Services"
)]
pub async fn delete(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
) -> HttpResult<Envelope<()>> {
    state
        .services
        .service_commands
        .delete(id)
        .await
        .into_http()?;
    Ok(Envelope::done("Service deleted successfully"))
}

#[utoipa::path(
    patch,
    path = "/api/services/{id}/toggle-active",
    params(("id" = i64, Path, description = "Service id")),
    responses(
        (status = 200, description = "`is_active` flipped.", body = ServiceDto),
        (status = 404, description = "Not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Services"
)]
pub async fn toggle_active(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
) -> HttpResult<Envelope<ServiceDto>> {
    let service = state
        .services
        .service_commands
        .toggle_active(id)
        .await
        .into_http()?;
    Ok(Envelope::with_message(
        service,
        "Service status updated successfully",
    ))
}
