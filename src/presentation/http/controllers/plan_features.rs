// src/presentation/http/controllers/plan_features.rs
use crate::application::{
    commands::plan_features::{
        BulkCreatePlanFeaturesCommand, CreatePlanFeatureCommand, UpdatePlanFeatureCommand,
    },
    dto::PlanFeatureDto,
    queries::plan_features::ListPlanFeaturesQuery,
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
    path = "/api/plan-features",
    params(ListPlanFeaturesQuery),
    responses(
        (status = 200, description = "Features ordered by sort order.", body = [PlanFeatureDto])
    ),
    security([]),
    tag = "Plan features"
)]
pub async fn list(
    Extension(state): Extension<HttpState>,
    QueryParams(query): QueryParams<ListPlanFeaturesQuery>,
) -> HttpResult<Envelope<Vec<PlanFeatureDto>>> {
    state
        .services
        .plan_feature_queries
        .list(query)
        .await
        .into_http()
        .map(Envelope::ok)
}

#[utoipa::path(
    get,
    path = "/api/plan-features/{id}",
    params(("id" = i64, Path, description = "Feature id")),
    responses(
        (status = 200, description = "The feature.", body = PlanFeatureDto),
        (status = 404, description = "Not found.", body = ErrorResponse)
    ),
    security([]),
    tag = "Plan features"
)]
pub async fn show(
    Extension(state): Extension<HttpState>,
    IdPath(id): IdPath,
) -> HttpResult<Envelope<PlanFeatureDto>> {
    state
        .services
        .plan_feature_queries
        .get(id)
        .await
        .into_http()
        .map(Envelope::ok)
}

#[utoipa::path(
    get,
    path = "/api/plan-features/by-plan/{plan_id}",
    params(("plan_id" = i64, Path, description = "Hosting plan id")),
    responses(
        (status = 200, description = "Features of the plan.", body = [PlanFeatureDto]),
        (status = 404, description = "Unknown plan.", body = ErrorResponse)
    ),
    security([]),
    tag = "Plan features"
)]
pub async fn by_plan(
    Extension(state): Extension<HttpState>,
    IdPath(plan_id): IdPath,
) -> HttpResult<Envelope<Vec<PlanFeatureDto>>> {
    state
        .services
        .plan_feature_queries
        .by_plan(plan_id)
        .await
        .into_http()
        .map(Envelope::ok)
}

#[utoipa::path(
    post,
    path = "/api/plan-features",
    request_body = CreatePlanFeatureCommand,
    responses(
        (status = 201, description = "Feature created.", body = PlanFeatureDto),
        (status = 401, description = "Unauthenticated.", body = ErrorResponse),
        (status = 422, description = "Validation failed.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Plan features"
)]
pub async fn create(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    JsonBody(command): JsonBody<CreatePlanFeatureCommand>,
) -> HttpResult<Envelope<PlanFeatureDto>> {
    let feature = state
        .services
        .plan_feature_commands
        .create(command)
        .await
        .into_http()?;
    Ok(Envelope::created(feature, "Plan feature created successfully"))
}

#[utoipa::path(
    post,
    path = "/api/plan-features/bulk",
    request_body = BulkCreatePlanFeaturesCommand,
    responses(
        (status = 201, description = "All features inserted in one transaction.", body = [PlanFeatureDto]),
        (status = 422, description = "Validation failed; nothing was inserted.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Plan features"
)]
pub async fn bulk_create(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    JsonBody(command): JsonBody<BulkCreatePlanFeaturesCommand>,
) -> HttpResult<Envelope<Vec<PlanFeatureDto>>> {
    let features = state
        .services
        .plan_feature_commands
        .create_many(command)
        .await
        .into_http()?;
    Ok(Envelope::created(features, "Plan features created successfully"))
}

#[utoipa::path(
    put,
    path = "/api/plan-features/{id}",
    params(("id" = i64, Path, description = "Feature id")),
    request_body = UpdatePlanFeatureCommand,
    responses(
        (status = 200, description = "Feature updated.", body = PlanFeatureDto),
        (status = 404, description = "Not found.", body = ErrorResponse),
        (status = 422, description = "Validation failed.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Plan features"
)]
pub async fn update(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
    JsonBody(command): JsonBody<UpdatePlanFeatureCommand>,
) -> HttpResult<Envelope<PlanFeatureDto>> {
    let feature = state
        .services
        .plan_feature_commands
        .update(id, command)
        .await
        .into_http()?;
    Ok(Envelope::with_message(feature, "Plan feature updated successfully"))
}

#[utoipa::path(
    delete,
    path = "/api/plan-features/{id}",
    params(("id" = i64, Path, description = "Feature id")),
    responses(
        (status = 200, description = "Feature deleted."),
        (status = 404, description = "Not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Plan features"
)]
pub async fn delete(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
) -> HttpResult<Envelope<()>> {
    state
        .services
        .plan_feature_commands
        .delete(id)
        .await
        .into_http()?;
    Ok(Envelope::done("Plan feature deleted successfully"))
}

#[utoipa::path(
    patch,
    path = "/api/plan-features/{id}/toggle-included",
    params(("id" = i64, Path, description = "Feature id")),
    responses(
        (status = 200, description = "`is_included` flipped.", body = PlanFeatureDto),
        (status = 404, description = "Not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Plan features"
)]
pub async fn toggle_included(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    IdPath(id): IdPath,
) -> HttpResult<Envelope<PlanFeatureDto>> {
    let feature = state
        .services
        .plan_feature_commands
        .toggle_included(id)
        .await
        .into_http()?;
    Ok(Envelope::with_message(
        feature,
        "Plan feature inclusion status updated successfully",
    ))
}
