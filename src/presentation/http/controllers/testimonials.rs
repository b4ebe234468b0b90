// src/presentation/http/controllers/testimonials.rs
use crate::application::{
    commands::testimonials::{
        BulkUpdateTestimonialsCommand, CreateTestimonialCommand, ReorderTestimonialsCommand,
        UpdateTestimonialCommand,
    },
    dto::{AffectedDto, PageDto, ServiceTestimonialsDto, TestimonialDto, TestimonialStatsDto},
    queries::testimonials::ListTestimonialsQuery,
};
use crate::domain::testimonial::TestimonialFlag;
use crate::presentation::http::{
    error::{ErrorResponse, HttpResult, IntoHttpResult},
    extractors::{Authenticated, IdPath, JsonBody, QueryParams, Uploads},
    response::Envelope,
    state::HttpState,
};
use axum::Extension;

#[utoipa::path(
    get,
    path = "/api/testimonials/public",
    responses(
        (status = 200, description = "Approved testimonials.", body = [TestimonialDto])
    ),
    security([]),
    tag = "Testimonials"
)]
pub async fn public(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Envelope<Vec<TestimonialDto>>> {
    state
        .services
        .testimonial_queries
        .public()
        .await
        .into_http()
        .map(Envelope::ok)
}

#[utoipa::path(
    get,
    path = "/api/testimonials/featured",
    responses(
        (status = 200, description = "Approved featured testimonials.", body = [TestimonialDto])
    ),
    security([]),
    tag = "Testimonials"
)]
pub async fn featured(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Envelope<Vec<TestimonialDto>>> {
    state
        .services
        .testimonial_queries
        .featured()
        .await
        .into_http()
        .map(Envelope::ok)
}

#[utoipa::path(
    get,
    path = "/api/testimonials/by-service/{service_id}",
    params(("service_id" = i64, Path, description = "Service id")),
    responses(
        (status = 200, description = "Approved testimonials of the service with their average rating.", body = ServiceTestimonialsDto),
        (status = 404, description = "Unknown service.", body = ErrorResponse)
    ),
    security([]),
    tag = "Testimonials"
)]
pub async fn by_service(
    Extension(state): Extension<HttpState>,
    IdPath(service_id): IdPath,
) -> HttpResult<Envelope<ServiceTestimonialsDto>> {
    state
        .services
        .testimonial_queries
        .by_service(service_id)
        .await
        .into_http()
        .map(Envelope::ok)
}

#[utoipa::path(
    get,
    path = "/api/testimonials",
    params(ListTestimonialsQuery),
    responses(
        (status = 200, description = "One page of testimonials.", body = PageDto<TestimonialDto>),
        (status = 401, description = "Unauthenticated.", body = ErrorResponse),
        (status = 422, description = "Invalid filter or paging values.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Testimonials"
)]
pub async fn list(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    QueryParams(query): QueryParams<ListTestimonialsQuery>,
) -> HttpResult<Envelope<PageDto<TestimonialDto>>> {
    state
        .services
        .testimonial_queries
        .list(query)
        .await
        .into_http()
        .map(Envelope::ok)
}

#[utoipa::path(
    get,
    path = "/api/testimonials/stats",
    responses(
        (status = 200, description = "Totals, rating distribution and top services.", body = TestimonialStatsDto),
        (status = 401, description = "Unauthenticated.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Testimonials"
)]
pub async fn stats(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
) -> HttpResult<Envelope<TestimonialStatsDto>> {
    state
        .services
        .testimonial_queries
        .stats()
        .await
        .into_http()
        .map(Envelope::ok)
}

#[utoipa::path(
    get,
    path = "/api/testimonials/{id}",
    params(("id" = i64, Path, description = "Testimonial id")),
    responses(
        (status = 200, description = "The testimonial.", body = TestimonialDto),
        (status = 404, description = "Not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Testimonials"
)]
pub async fn show(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
) -> HttpResult<Envelope<TestimonialDto>> {
    state
        .services
        .testimonial_queries
        .get(id)
        .await
        .into_http()
        .map(Envelope::ok)
}

#[utoipa::path(
    post,
    path = "/api/testimonials",
    request_body = CreateTestimonialCommand,
    responses(
        (status = 201, description = "Testimonial created.", body = TestimonialDto),
        (status = 401, description = "Unauthenticated.", body = ErrorResponse),
        (status = 422, description = "Validation failed.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Testimonials"
)]
pub async fn create(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    JsonBody(command): JsonBody<CreateTestimonialCommand>,
) -> HttpResult<Envelope<TestimonialDto>> {
    let testimonial = state
        .services
        .testimonial_commands
        .create(command)
        .await
        .into_http()?;
    Ok(Envelope::created(testimonial, "Testimonial created successfully"))
}

#[utoipa::path(
    put,
    path = "/api/testimonials/{id}",
    params(("id" = i64, Path, description = "Testimonial id")),
    request_body = UpdateTestimonialCommand,
    responses(
        (status = 200, description = "Testimonial updated.", body = TestimonialDto),
        (status = 404, description = "Not found.", body = ErrorResponse),
        (status = 422, description = "Validation failed.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Testimonials"
)]
pub async fn update(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
    JsonBody(command): JsonBody<UpdateTestimonialCommand>,
) -> HttpResult<Envelope<TestimonialDto>> {
    let testimonial = state
        .services
        .testimonial_commands
        .update(id, command)
        .await
        .into_http()?;
    Ok(Envelope::with_message(
        testimonial,
        "Testimonial updated successfully",
    ))
}

#[utoipa::path(
    delete,
    path = "/api/testimonials/{id}",
    params(("id" = i64, Path, description = "Testimonial id")),
    responses(
        (status = 200, description = "Testimonial and its stored photo deleted."),
        (status = 404, description = "Not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Testimonials"
)]
pub async fn delete(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
) -> HttpResult<Envelope<()>> {
    state
        .services
        .testimonial_commands
        .delete(id)
        .await
        .into_http()?;
    Ok(Envelope::done("Testimonial deleted successfully"))
}

#[utoipa::path(
    patch,
    path = "/api/testimonials/{id}/toggle-approved",
    params(("id" = i64, Path, description = "Testimonial id")),
    responses(
        (status = 200, description = "`is_approved` flipped.", body = TestimonialDto),
        (status = 404, description = "Not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Testimonials"
)]
pub async fn toggle_approved(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
) -> HttpResult<Envelope<TestimonialDto>> {
    let testimonial = state
        .services
        .testimonial_commands
        .toggle(id, TestimonialFlag::Approved)
        .await
        .into_http()?;
    Ok(Envelope::with_message(
        testimonial,
        "Testimonial approval status updated successfully",
    ))
}

#[utoipa::path(
    patch,
    path = "/api/testimonials/{id}/toggle-featured",
    params(("id" = i64, Path, description = "Testimonial id")),
    responses(
        (status = 200, description = "`is_featured` flipped.", body = TestimonialDto),
        (status = 404, description = "Not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Testimonials"
)]
pub async fn toggle_featured(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
) -> HttpResult<Envelope<TestimonialDto>> {
    let testimonial = state
        .services
        .testimonial_commands
        .toggle(id, TestimonialFlag::Featured)
        .await
        .into_http()?;
    Ok(Envelope::with_message(
        testimonial,
        "Testimonial featured status updated successfully",
    ))
}

#[utoipa::path(
    post,
    path = "/api/testimonials/reorder",
    request_body = ReorderTestimonialsCommand,
    responses(
        (status = 200, description = "Sort orders applied."),
        (status = 422, description = "Unknown id or invalid sort order.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Testimonials"
)]
pub async fn reorder(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    JsonBody(command): JsonBody<ReorderTestimonialsCommand>,
) -> HttpResult<Envelope<()>> {
    state
        .services
        .testimonial_commands
        .reorder(command)
        .await
        .into_http()?;
    Ok(Envelope::done("Testimonials reordered successfully"))
}

#[utoipa::path(
    post,
    path = "/api/testimonials/bulk-update",
    request_body = BulkUpdateTestimonialsCommand,
    responses(
        (status = 200, description = "Number of testimonials touched.", body = AffectedDto),
        (status = 422, description = "Unknown action or service.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Testimonials"
)]
pub async fn bulk_update(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    JsonBody(command): JsonBody<BulkUpdateTestimonialsCommand>,
) -> HttpResult<Envelope<AffectedDto>> {
    let message = bulk_message(&command.action, command.service_id.is_some());
    let affected = state
        .services
        .testimonial_commands
        .bulk_update(command)
        .await
        .into_http()?;
    Ok(Envelope::with_message(affected, message))
}

#[utoipa::path(
    post,
    path = "/api/testimonials/{id}/photo",
    params(("id" = i64, Path, description = "Testimonial id")),
    request_body(content_type = "multipart/form-data", description = "Image in the `file` field, at most 2 MB."),
    responses(
        (status = 200, description = "Photo replaced.", body = TestimonialDto),
        (status = 404, description = "Not found.", body = ErrorResponse),
        (status = 422, description = "Missing, oversized or non-image file.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Testimonials"
)]
pub async fn upload_photo(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
    uploads: Uploads,
) -> HttpResult<Envelope<TestimonialDto>> {
    let file = uploads.single("file").await?;
    let testimonial = state
        .services
        .testimonial_commands
        .upload_photo(id, file)
        .await
        .into_http()?;
    Ok(Envelope::with_message(testimonial, "Photo uploaded successfully"))
}

fn bulk_message(action: &str, reassigned: bool) -> &'static str {
    match action {
        "delete" => "Testimonials deleted successfully",
        _ if reassigned => "Testimonials updated successfully",
        "approve" => "Testimonials approved successfully",
        "unapprove" => "Testimonials unapproved successfully",
        "feature" => "Testimonials featured successfully",
        "unfeature" => "Testimonials unfeatured successfully",
        _ => "Testimonials updated successfully",
    }
}
