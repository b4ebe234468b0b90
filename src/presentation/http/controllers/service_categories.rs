// src/presentation/http/controllers/service_categories.rs
use crate::application::{
    commands::service_categories::{CreateServiceCategoryCommand, UpdateServiceCategoryCommand},
    dto::ServiceCategoryDto,
    queries::service_categories::ListServiceCategoriesQuery,
};
use crate::presentation::http::{
    error::{ErrorResponse, HttpResult, IntoHttpResult},
    extractors::{Authenticated, IdPath, JsonBody, QueryParams},
    response::Envelope,
    state::HttpState,
};
use axum::Extension;

#[utoipa::path(
    get,
    path = "/api/service-categories",
    params(ListServiceCategoriesQuery),
    responses(
        (status = 200, description = "Categories ordered by sort order.", body = [ServiceCategoryDto])
    ),
    security([]),
    tag = "Service categories"
)]
pub async fn list(
    Extension(state): Extension<HttpState>,
    QueryParams(query): QueryParams<ListServiceCategoriesQuery>,
) -> HttpResult<Envelope<Vec<ServiceCategoryDto>>> {
    state
        .services
        .service_category_queries
        .list(query)
        .await
        .into_http()
        .map(Envelope::ok)
}

#[utoipa::path(
    get,
    path = "/api/service-categories/{id}",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "The category.", body = ServiceCategoryDto),
        (status = 404, description = "Not found.", body = ErrorResponse)
    ),
    security([]),
    tag = "Service categories"
)]
pub async fn show(
    Extension(state): Extension<HttpState>,
    IdPath(id): IdPath,
) -> HttpResult<Envelope<ServiceCategoryDto>> {
    state
        .services
        .service_category_queries
        .get(id)
        .await
        .into_http()
        .map(Envelope::ok)
}

#[utoipa::path(
    post,
    path = "/api/service-categories",
    request_body = CreateServiceCategoryCommand,
    responses(
        (status = 201, description = "Category created.", body = ServiceCategoryDto),
        (status = 401, description = "Unauthenticated.", body = ErrorResponse),
        (status = 422, description = "Validation failed.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Service categories"
)]
pub async fn create(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    JsonBody(command): JsonBody<CreateServiceCategoryCommand>,
) -> HttpResult<Envelope<ServiceCategoryDto>> {
    let category = state
        .services
        .service_category_commands
        .create(command)
        .await
        .into_http()?;
    Ok(Envelope::created(category, "Service category created successfully"))
}

#[utoipa::path(
    put,
    path = "/api/service-categories/{id}",
    params(("id" = i64, Path, description = "Category id")),
    request_body = UpdateServiceCategoryCommand,
    responses(
        (status = 200, description = "Category updated.", body = ServiceCategoryDto),
        (status = 404, description = "Not found.", body = ErrorResponse),
        (status = 422, description = "Validation failed.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Service categories"
)]
pub async fn update(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
    JsonBody(command): JsonBody<UpdateServiceCategoryCommand>,
) -> HttpResult<Envelope<ServiceCategoryDto>> {
    let category = state
        .services
        .service_category_commands
        .update(id, command)
        .await
        .into_http()?;
    Ok(Envelope::with_message(
        category,
        "Service category updated successfully",
    ))
}

#[utoipa::path(
    delete,
    path = "/api/service-categories/{id}",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category deleted."),
        (status = 404, description = "Not found.", body = ErrorResponse),
        (status = 409, description = "Services or hosting plans still use the category.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Service categories"
)]
pub async fn delete(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
) -> HttpResult<Envelope<()>> {
    state
        .services
        .service_category_commands
        .delete(id)
        .await
        .into_http()?;
    Ok(Envelope::done("Service category deleted successfully"))
}

#[utoipa::path(
    patch,
    path = "/api/service-categories/{id}/toggle-active",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "`is_active` flipped.", body = ServiceCategoryDto),
        (status = 404, description = "Not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Service categories"
)]
pub async fn toggle_active(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
) -> HttpResult<Envelope<ServiceCategoryDto>> {
    let category = state
        .services
        .service_category_commands
        .toggle_active(id)
        .await
        .into_http()?;
    Ok(Envelope::with_message(
        category,
        "Service category status updated successfully",
    ))
}
