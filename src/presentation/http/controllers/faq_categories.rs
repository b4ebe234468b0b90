// src/presentation/http/controllers/faq_categories.rs
use crate::application::{
    commands::faq_categories::{
        CreateFaqCategoryCommand, ReorderFaqCategoriesCommand, UpdateFaqCategoryCommand,
    },
    dto::FaqCategoryDto,
    queries::faq_categories::ListFaqCategoriesQuery,
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
    path = "/api/faq-categories",
    params(ListFaqCategoriesQuery),
    responses(
        (status = 200, description = "Categories, optionally with FAQ counts.", body = [FaqCategoryDto])
    ),
    security([]),
    tag = "FAQ categories"
)]
pub async fn list(
    Extension(state): Extension<HttpState>,
    QueryParams(query): QueryParams<ListFaqCategoriesQuery>,
) -> HttpResult<Envelope<Vec<FaqCategoryDto>>> {
    state
        .services
        .faq_category_queries
        .list(query)
        .await
        .into_http()
        .map(Envelope::ok)
}

#[utoipa::path(
    get,
    path = "/api/faq-categories/active-with-faqs",
    responses(
        (status = 200, description = "Active categories with their active FAQs.", body = [FaqCategoryDto])
    ),
    security([]),
    tag = "FAQ categories"
)]
pub async fn active_with_faqs(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Envelope<Vec<FaqCategoryDto>>> {
    state
        .services
        .faq_category_queries
        .active_with_faqs()
        .await
        .into_http()
        .map(Envelope::ok)
}

#[utoipa::path(
    get,
    path = "/api/faq-categories/{id}",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "The category with its FAQs.", body = FaqCategoryDto),
        (status = 404, description = "Not found.", body = ErrorResponse)
    ),
    security([]),
    tag = "FAQ categories"
)]
pub async fn show(
    Extension(state): Extension<HttpState>,
    IdPath(id): IdPath,
) -> HttpResult<Envelope<FaqCategoryDto>> {
    state
        .services
        .faq_category_queries
        .get(id)
        .await
        .into_http()
        .map(Envelope::ok)
}

#[utoipa::path(
    post,
    path = "/api/faq-categories",
    request_body = CreateFaqCategoryCommand,
    responses(
        (status = 201, description = "Category created.", body = FaqCategoryDto),
        (status = 401, description = "Unauthenticated.", body = ErrorResponse),
        (status = 422, description = "Validation failed or name taken.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "FAQ categories"
)]
pub async fn create(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    JsonBody(command): JsonBody<CreateFaqCategoryCommand>,
) -> HttpResult<Envelope<FaqCategoryDto>> {
    let category = state
        .services
        .faq_category_commands
        .create(command)
        .await
        .into_http()?;
    Ok(Envelope::created(category, "FAQ category created successfully"))
}

#[utoipa::path(
    put,
    path = "/api/faq-categories/{id}",
    params(("id" = i64, Path, description = "Category id")),
    request_body = UpdateFaqCategoryCommand,
    responses(
        (status = 200, description = "Category updated.", body = FaqCategoryDto),
        (status = 404, description = "Not found.", body = ErrorResponse),
        (status = 422, description = "Validation failed or name taken.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "FAQ categories"
)]
pub async fn update(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
    JsonBody(command): JsonBody<UpdateFaqCategoryCommand>,
) -> HttpResult<Envelope<FaqCategoryDto>> {
    let category = state
        .services
        .faq_category_commands
        .update(id, command)
        .await
        .into_http()?;
    Ok(Envelope::with_message(
        category,
        "FAQ category updated successfully",
    ))
}

#[utoipa::path(
    delete,
    path = "/api/faq-categories/{id}",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category deleted."),
        (status = 404, description = "Not found.", body = ErrorResponse),
        (status = 409, description = "FAQs still reference the category.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "FAQ categories"
)]
pub async fn delete(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
) -> HttpResult<Envelope<()>> {
    state
        .services
        .faq_category_commands
        .delete(id)
        .await
        .into_http()?;
    Ok(Envelope::done("FAQ category deleted successfully"))
}

#[utoipa::path(
    patch,
    path = "/api/faq-categories/{id}/toggle-active",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "`is_active` flipped.", body = FaqCategoryDto),
        (status = 404, description = "Not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "FAQ categories"
)]
pub async fn toggle_active(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
) -> HttpResult<Envelope<FaqCategoryDto>> {
    let category = state
        .services
        .faq_category_commands
        .toggle_active(id)
        .await
        .into_http()?;
    Ok(Envelope::with_message(
        category,
        "FAQ category status updated successfully",
    ))
}

#[utoipa::path(
    post,
    path = "/api/faq-categories/reorder",
    request_body = ReorderFaqCategoriesCommand,
    responses(
        (status = 200, description = "Sort orders applied."),
        (status = 422, description = "Unknown id or invalid sort order.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "FAQ categories"
)]
pub async fn reorder(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    JsonBody(command): JsonBody<ReorderFaqCategoriesCommand>,
) -> HttpResult<Envelope<()>> {
    state
        .services
        .faq_category_commands
        .reorder(command)
        .await
        .into_http()?;
    Ok(Envelope::done("FAQ categories reordered successfully"))
}
