// src/presentation/http/controllers/portfolio.rs
use crate::application::{
    commands::portfolio::{CreatePortfolioCommand, UpdatePortfolioCommand},
    dto::{PageDto, PortfolioDto},
    queries::portfolio::ListPortfolioQuery,
};
use crate::domain::portfolio::PortfolioFlag;
use crate::presentation::http::{
    error::{ErrorResponse, HttpResult, IntoHttpResult},
    extractors::{Authenticated, JsonBody, QueryParams, Uploads},
    response::Envelope,
    state::HttpState,
};
use axum::{Extension, extract::Path};

#[utoipa::path(
    get,
    path = "/api/portfolio",
    params(ListPortfolioQuery),
    responses(
        (status = 200, description = "One page of portfolio items, newest project first.", body = PageDto<PortfolioDto>),
        (status = 422, description = "Invalid paging or filter values.", body = ErrorResponse)
    ),
    security([]),
    tag = "Portfolio"
)]
pub async fn list(
    Extension(state): Extension<HttpState>,
    QueryParams(query): QueryParams<ListPortfolioQuery>,
) -> HttpResult<Envelope<PageDto<PortfolioDto>>> {
    state
        .services
        .portfolio_queries
        .list(query)
        .await
        .into_http()
        .map(Envelope::ok)
}

#[utoipa::path(
    get,
    path = "/api/portfolio/{slug}",
    params(("slug" = String, Path, description = "Portfolio slug")),
    responses(
        (status = 200, description = "The portfolio item.", body = PortfolioDto),
        (status = 404, description = "Not found.", body = ErrorResponse)
    ),
    security([]),
    tag = "Portfolio"
)]
pub async fn show(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Envelope<PortfolioDto>> {
    state
        .services
        .portfolio_queries
        .get(&slug)
        .await
        .into_http()
        .map(Envelope::ok)
}

#[utoipa::path(
    post,
    path = "/api/portfolio",
    request_body = CreatePortfolioCommand,
    responses(
        (status = 201, description = "Portfolio item created.", body = PortfolioDto),
        (status = 401, description = "Unauthenticated.", body = ErrorResponse),
        (status = 422, description = "Validation failed.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Portfolio"
)]
pub async fn create(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    JsonBody(command): JsonBody<CreatePortfolioCommand>,
) -> HttpResult<Envelope<PortfolioDto>> {
    let item = state
        .services
        .portfolio_commands
        .create(command)
        .await
        .into_http()?;
    Ok(Envelope::created(item, "Portfolio item created successfully"))
}

#[utoipa::path(
    put,
    path = "/api/portfolio/{slug}",
    params(("slug" = String, Path, description = "Portfolio slug")),
    request_body = UpdatePortfolioCommand,
    responses(
        (status = 200, description = "Portfolio item updated.", body = PortfolioDto),
        (status = 404, description = "Not found.", body = ErrorResponse),
        (status = 422, description = "Validation failed.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Portfolio"
)]
pub async fn update(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    Path(slug): Path<String>,
    JsonBody(command): JsonBody<UpdatePortfolioCommand>,
) -> HttpResult<Envelope<PortfolioDto>> {
    let item = state
        .services
        .portfolio_commands
        .update(&slug, command)
        .await
        .into_http()?;
    Ok(Envelope::with_message(item, "Portfolio item updated successfully"))
}

#[utoipa::path(
    delete,
    path = "/api/portfolio/{slug}",
    params(("slug" = String, Path, description = "Portfolio slug")),
    responses(
        (status = 200, description = "Portfolio item and its stored images deleted."),
        (status = 404, description = "Not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Portfolio"
)]
pub async fn delete(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Envelope<()>> {
    state
        .services
        .portfolio_commands
        .delete(&slug)
        .await
        .into_http()?;
    Ok(Envelope::done("Portfolio item deleted successfully"))
}

#[utoipa::path(
    patch,
    path = "/api/portfolio/{slug}/toggle-featured",
    params(("slug" = String, Path, description = "Portfolio slug")),
    responses(
        (status = 200, description = "`is_featured` flipped.", body = PortfolioDto),
        (status = 404, description = "Not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Portfolio"
)]
pub async fn toggle_featured(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Envelope<PortfolioDto>> {
    let item = state
        .services
        .portfolio_commands
        .toggle(&slug, PortfolioFlag::Featured)
        .await
        .into_http()?;
    Ok(Envelope::with_message(
        item,
        "Portfolio featured status updated successfully",
    ))
}

#[utoipa::path(
    patch,
    path = "/api/portfolio/{slug}/toggle-published",
    params(("slug" = String, Path, description = "Portfolio slug")),
    responses(
        (status = 200, description = "`is_published` flipped.", body = PortfolioDto),
        (status = 404, description = "Not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Portfolio"
)]
pub async fn toggle_published(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Envelope<PortfolioDto>> {
    let item = state
        .services
        .portfolio_commands
        .toggle(&slug, PortfolioFlag::Published)
        .await
        .into_http()?;
    Ok(Envelope::with_message(
        item,
        "Portfolio published status updated successfully",
    ))
}

#[utoipa::path(
    post,
    path = "/api/portfolio/{slug}/featured-image",
    params(("slug" = String, Path, description = "Portfolio slug")),
    request_body(content_type = "multipart/form-data", description = "Image in the `file` field, at most 5 MB."),
    responses(
        (status = 200, description = "Featured image replaced.", body = PortfolioDto),
        (status = 404, description = "Not found.", body = ErrorResponse),
        (status = 422, description = "Missing, oversized or non-image file.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Portfolio"
)]
pub async fn upload_featured_image(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    Path(slug): Path<String>,
    uploads: Uploads,
) -> HttpResult<Envelope<PortfolioDto>> {
    let file = uploads.single("file").await?;
    let item = state
        .services
        .portfolio_commands
        .upload_featured_image(&slug, file)
        .await
        .into_http()?;
    Ok(Envelope::with_message(
        item,
        "Featured image uploaded successfully",
    ))
}

#[utoipa::path(
    post,
    path = "/api/portfolio/{slug}/gallery",
    params(("slug" = String, Path, description = "Portfolio slug")),
    request_body(content_type = "multipart/form-data", description = "Up to 10 images in the `files` field, at most 5 MB each."),
    responses(
        (status = 200, description = "Gallery replaced.", body = PortfolioDto),
        (status = 404, description = "Not found.", body = ErrorResponse),
        (status = 422, description = "Missing, oversized or non-image files.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Portfolio"
)]
pub async fn upload_gallery(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    Path(slug): Path<String>,
    uploads: Uploads,
) -> HttpResult<Envelope<PortfolioDto>> {
    let files = uploads.many("files").await?;
    let item = state
        .services
        .portfolio_commands
        .upload_gallery(&slug, files)
        .await
        .into_http()?;
    Ok(Envelope::with_message(item, "Gallery uploaded successfully"))
}
