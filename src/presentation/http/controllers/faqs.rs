// src/presentation/http/controllers/faqs.rs
use crate::application::{
    commands::faqs::{BulkUpdateFaqsCommand, CreateFaqCommand, ReorderFaqsCommand, UpdateFaqCommand},
    dto::{AffectedDto, FaqDto},
    queries::faqs::{ListFaqsQuery, SearchFaqsQuery},
};
use crate::domain::faq::FaqFlag;
use crate::presentation::http::{
    error::{ErrorResponse, HttpResult, IntoHttpResult},
    extractors::{Authenticated, IdPath, JsonBody, QueryParams},
    response::Envelope,
    state::HttpState,
};
use axum::Extension;

#[utoipa::path(
    get,
    path = "/api/faqs",
    params(ListFaqsQuery),
    responses(
        (status = 200, description = "FAQs ordered by sort order.", body = [FaqDto])
    ),
    security([]),
    tag = "FAQs"
)]
pub async fn list(
    Extension(state): Extension<HttpState>,
    QueryParams(query): QueryParams<ListFaqsQuery>,
) -> HttpResult<Envelope<Vec<FaqDto>>> {
    state
        .services
        .faq_queries
        .list(query)
        .await
        .into_http()
        .map(Envelope::ok)
}

#[utoipa::path(
    get,
    path = "/api/faqs/featured",
    responses(
        (status = 200, description = "Active featured FAQs.", body = [FaqDto])
    ),
    security([]),
    tag = "FAQs"
)]
pub async fn featured(Extension(state): Extension<HttpState>) -> HttpResult<Envelope<Vec<FaqDto>>> {
    state
        .services
        .faq_queries
        .featured()
        .await
        .into_http()
        .map(Envelope::ok)
}

#[utoipa::path(
    get,
    path = "/api/faqs/public",
    responses(
        (status = 200, description = "Active FAQs outside inactive categories.", body = [FaqDto])
    ),
    security([]),
    tag = "FAQs"
)]
pub async fn public(Extension(state): Extension<HttpState>) -> HttpResult<Envelope<Vec<FaqDto>>> {
    state
        .services
        .faq_queries
        .public()
        .await
        .into_http()
        .map(Envelope::ok)
}

#[utoipa::path(
    get,
    path = "/api/faqs/search",
    params(SearchFaqsQuery),
    responses(
        (status = 200, description = "Public FAQs matching the term.", body = [FaqDto]),
        (status = 422, description = "Term missing or shorter than three characters.", body = ErrorResponse)
    ),
    security([]),
    tag = "FAQs"
)]
pub async fn search(
    Extension(state): Extension<HttpState>,
    QueryParams(query): QueryParams<SearchFaqsQuery>,
) -> HttpResult<Envelope<Vec<FaqDto>>> {
    state
        .services
        .faq_queries
        .search(query)
        .await
        .into_http()
        .map(Envelope::ok)
}

#[utoipa::path(
    get,
    path = "/api/faqs/by-category/{category_id}",
    params(("category_id" = i64, Path, description = "FAQ category id")),
    responses(
        (status = 200, description = "Active FAQs of the category.", body = [FaqDto]),
        (status = 404, description = "Unknown category.", body = ErrorResponse)
    ),
    security([]),
    tag = "FAQs"
)]
pub async fn by_category(
    Extension(state): Extension<HttpState>,
    IdPath(category_id): IdPath,
) -> HttpResult<Envelope<Vec<FaqDto>>> {
    state
        .services
        .faq_queries
        .by_category(category_id)
        .await
        .into_http()
        .map(Envelope::ok)
}

#[utoipa::path(
    get,
    path = "/api/faqs/{id}",
    params(("id" = i64, Path, description = "FAQ id")),
    responses(
        (status = 200, description = "The FAQ.", body = FaqDto),
        (status = 404, description = "Not found.", body = ErrorResponse)
    ),
    security([]),
    tag = "FAQs"
)]
pub async fn show(
    Extension(state): Extension<HttpState>,
    IdPath(id): IdPath,
) -> HttpResult<Envelope<FaqDto>> {
    state
        .services
        .faq_queries
        .get(id)
        .await
        .into_http()
        .map(Envelope::ok)
}

#[utoipa::path(
    post,
    path = "/api/faqs",
    request_body = CreateFaqCommand,
    responses(
        (status = 201, description = "FAQ created.", body = FaqDto),
        (status = 401, description = "Unauthenticated.", body = ErrorResponse),
        (status = 422, description = "Validation failed.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "FAQs"
)]
pub async fn create(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    JsonBody(command): JsonBody<CreateFaqCommand>,
) -> HttpResult<Envelope<FaqDto>> {
    let faq = state
        .services
        .faq_commands
        .create(command)
        .await
        .into_http()?;
    Ok(Envelope::created(faq, "FAQ created successfully"))
}

#[utoipa::path(
    put,
    path = "/api/faqs/{id}",
    params(("id" = i64, Path, description = "FAQ id")),
    request_body = UpdateFaqCommand,
    responses(
        (status = 200, description = "FAQ updated.", body = FaqDto),
        (status = 404, description = "Not found.", body = ErrorResponse),
        (status = 422, description = "Validation failed.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "FAQs"
)]
pub async fn update(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
    JsonBody(command): JsonBody<UpdateFaqCommand>,
) -> HttpResult<Envelope<FaqDto>> {
    let faq = state
        .services
        .faq_commands
        .update(id, command)
        .await
        .into_http()?;
    Ok(Envelope::with_message(faq, "FAQ updated successfully"))
}

#[utoipa::path(
    delete,
    path = "/api/faqs/{id}",
    params(("id" = i64, Path, description = "FAQ id")),
    responses(
        (status = 200, description = "FAQ deleted."),
        (status = 404, description = "Not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "FAQs"
)]
pub async fn delete(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
) -> HttpResult<Envelope<()>> {
    state
        .services
        .faq_commands
        .delete(id)
        .await
        .into_http()?;
    Ok(Envelope::done("FAQ deleted successfully"))
}

#[utoipa::path(
    patch,
    path = "/api/faqs/{id}/toggle-active",
    params(("id" = i64, Path, description = "FAQ id")),
    responses(
        (status = 200, description = "`is_active` flipped.", body = FaqDto),
        (status = 404, description = "Not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "FAQs"
)]
pub async fn toggle_active(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
) -> HttpResult<Envelope<FaqDto>> {
    let faq = state
        .services
        .faq_commands
        .toggle(id, FaqFlag::Active)
        .await
        .into_http()?;
    Ok(Envelope::with_message(faq, "FAQ status updated successfully"))
}

#[utoipa::path(
    patch,
    path = "/api/faqs/{id}/toggle-featured",
    params(("id" = i64, Path, description = "FAQ id")),
    responses(
        (status = 200, description = "`is_featured` flipped.", body = FaqDto),
        (status = 404, description = "Not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "FAQs"
)]
pub async fn toggle_featured(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
) -> HttpResult<Envelope<FaqDto>> {
    let faq = state
        .services
        .faq_commands
        .toggle(id, FaqFlag::Featured)
        .await
        .into_http()?;
    Ok(Envelope::with_message(
        faq,
        "FAQ featured status updated successfully",
    ))
}

#[utoipa::path(
    post,
    path = "/api/faqs/reorder",
    request_body = ReorderFaqsCommand,
    responses(
        (status = 200, description = "Sort orders applied."),
        (status = 422, description = "Unknown id or invalid sort order.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "FAQs"
)]
pub async fn reorder(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    JsonBody(command): JsonBody<ReorderFaqsCommand>,
) -> HttpResult<Envelope<()>> {
    state
        .services
        .faq_commands
        .reorder(command)
        .await
        .into_http()?;
    Ok(Envelope::done("FAQs reordered successfully"))
}

#[utoipa::path(
    post,
    path = "/api/faqs/bulk-update",
    request_body = BulkUpdateFaqsCommand,
    responses(
        (status = 200, description = "Number of FAQs touched.", body = AffectedDto),
        (status = 422, description = "Unknown action or category.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "FAQs"
)]
pub async fn bulk_update(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    JsonBody(command): JsonBody<BulkUpdateFaqsCommand>,
) -> HttpResult<Envelope<AffectedDto>> {
    let message = bulk_message(&command.action, command.category_id.is_some());
    let affected = state
        .services
        .faq_commands
        .bulk_update(command)
        .await
        .into_http()?;
    Ok(Envelope::with_message(affected, message))
}

fn bulk_message(action: &str, reassigned: bool) -> &'static str {
    if reassigned {
        return "FAQs updated successfully";
    }
    match action {
        "activate" => "FAQs activated successfully",
        "deactivate" => "FAQs deactivated successfully",
        "feature" => "FAQs featured successfully",
        "unfeature" => "FAQs unfeatured successfully",
        "delete" => "FAQs deleted successfully",
        _ => "FAQs updated successfully",
    }
}

#[cfg(test)]
mod tests {
    use super::bulk_message;

    #[test]
    fn reassignment_overrides_the_action_message() {
        assert_eq!(bulk_message("feature", false), "FAQs featured successfully");
        assert_eq!(bulk_message("feature", true), "FAQs updated successfully");
    }
}
