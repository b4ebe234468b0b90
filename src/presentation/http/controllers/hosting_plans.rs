// src/presentation/http/controllers/hosting_plans.rs
use crate::application::{
    commands::hosting_plans::{CreateHostingPlanCommand, UpdateHostingPlanCommand},
    dto::HostingPlanDto,
    queries::{Lookup, hosting_plans::ListHostingPlansQuery},
};
use crate::domain::hosting_plan::HostingPlanFlag;
use crate::presentation::http::{
    error::{ErrorResponse, HttpResult, IntoHttpResult},
    extractors::{Authenticated, IdPath, JsonBody, QueryParams},
    response::Envelope,
    state::HttpState,
};
use axum::{Extension, extract::Path};

#[utoipa::path(
    get,
    path = "/api/hosting-plans",
    params(ListHostingPlansQuery),
    responses(
        (status = 200, description = "Plans ordered by sort order.", body = [HostingPlanDto])
    ),
    security([]),
    tag = "Hosting plans"
)]
pub async fn list(
    Extension(state): Extension<HttpState>,
    QueryParams(query): QueryParams<ListHostingPlansQuery>,
) -> HttpResult<Envelope<Vec<HostingPlanDto>>> {
    state
        .services
        .hosting_plan_queries
        .list(query)
        .await
        .into_http()
        .map(Envelope::ok)
}

#[utoipa::path(
    get,
    path = "/api/hosting-plans/{id}",
    params(("id" = String, Path, description = "Numeric id or slug")),
    responses(
        (status = 200, description = "The plan with its features.", body = HostingPlanDto),
        (status = 404, description = "Not found.", body = ErrorResponse)
    ),
    security([]),
    tag = "Hosting plans"
)]
pub async fn show(
    Extension(state): Extension<HttpState>,
    Path(segment): Path<String>,
) -> HttpResult<Envelope<HostingPlanDto>> {
    state
        .services
        .hosting_plan_queries
        .get(Lookup::parse(&segment))
        .await
        .into_http()
        .map(Envelope::ok)
}

#[utoipa::path(
    post,
    path = "/api/hosting-plans",
    request_body = CreateHostingPlanCommand,
    responses(
        (status = 201, description = "Plan created.", body = HostingPlanDto),
        (status = 401, description = "Unauthenticated.", body = ErrorResponse),
        (status = 422, description = "Validation failed.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Hosting plans"
)]
pub async fn create(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    JsonBody(command): JsonBody<CreateHostingPlanCommand>,
) -> HttpResult<Envelope<HostingPlanDto>> {
    let plan = state
        .services
        .hosting_plan_commands
        .create(command)
        .await
        .into_http()?;
    Ok(Envelope::created(plan, "Hosting plan created successfully"))
}

#[utoipa::path(
    put,
    path = "/api/hosting-plans/{id}",
    params(("id" = i64, Path, description = "Plan id")),
    request_body = UpdateHostingPlanCommand,
    responses(
        (status = 200, description = "Plan updated.", body = HostingPlanDto),
        (status = 404, description = "Not found.", body = ErrorResponse),
        (status = 422, description = "Validation failed.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Hosting plans"
)]
pub async fn update(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
    JsonBody(command): JsonBody<UpdateHostingPlanCommand>,
) -> HttpResult<Envelope<HostingPlanDto>> {
    let plan = state
        .services
        .hosting_plan_commands
        .update(id, command)
        .await
        .into_http()?;
    Ok(Envelope::with_message(plan, "Hosting plan updated successfully"))
}

#[utoipa::path(
    delete,
    path = "/api/hosting-plans/{id}",
    params(("id" = i64, Path, description = "Plan id")),
    responses(
        (status = 200, description = "Plan and its features deleted."),
        (status = 404, description = "Not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Hosting plans"
)]
pub async fn delete(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
) -> HttpResult<Envelope<()>> {
    state
        .services
        .hosting_plan_commands
        .delete(id)
        .await
        .into_http()?;
    Ok(Envelope::done("Hosting plan deleted successfully"))
}

async fn toggle(
    state: &HttpState,
    id: i64,
    flag: HostingPlanFlag,
    message: &str,
) -> HttpResult<Envelope<HostingPlanDto>> {
    let plan = state
        .services
        .hosting_plan_commands
        .toggle(id, flag)
        .await
        .into_http()?;
    Ok(Envelope::with_message(plan, message))
}

#[utoipa::path(
    patch,
    path = "/api/hosting-plans/{id}/toggle-active",
    params(("id" = i64, Path, description = "Plan id")),
    responses(
        (status = 200, description = "`is_active` flipped.", body = HostingPlanDto),
        (status = 404, description = "Not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Hosting plans"
)]
pub async fn toggle_active(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
) -> HttpResult<Envelope<HostingPlanDto>> {
    toggle(
        &state,
        id,
        HostingPlanFlag::Active,
        "Hosting plan status updated successfully",
    )
    .await
}

#[utoipa::path(
    patch,
    path = "/api/hosting-plans/{id}/toggle-highlighted",
    params(("id" = i64, Path, description = "Plan id")),
    responses(
        (status = 200, description = "`is_highlighted` flipped.", body = HostingPlanDto),
        (status = 404, description = "Not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Hosting plans"
)]
pub async fn toggle_highlighted(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
) -> HttpResult<Envelope<HostingPlanDto>> {
    toggle(
        &state,
        id,
        HostingPlanFlag::Highlighted,
        "Hosting plan highlight status updated successfully",
    )
    .await
}

#[utoipa::path(
    patch,
    path = "/api/hosting-plans/{id}/toggle-popular",
    params(("id" = i64, Path, description = "Plan id")),
    responses(
        (status = 200, description = "`is_popular` flipped.", body = HostingPlanDto),
        (status = 404, description = "Not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Hosting plans"
)]
pub async fn toggle_popular(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
) -> HttpResult<Envelope<HostingPlanDto>> {
    toggle(
        &state,
        id,
        HostingPlanFlag::Popular,
        "Hosting plan popular status updated successfully",
    )
    .await
}
