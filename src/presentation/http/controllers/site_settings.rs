// src/presentation/http/controllers/site_settings.rs
use crate::application::{
    commands::site_settings::{CreateSiteSettingCommand, UpdateSiteSettingCommand},
    dto::SiteSettingDto,
};
use crate::presentation::http::{
    error::{ErrorResponse, HttpResult, IntoHttpResult},
    extractors::{Authenticated, JsonBody, Uploads},
    response::Envelope,
    state::HttpState,
};
use axum::{Extension, extract::Path};

#[utoipa::path(
    get,
    path = "/api/settings",
    responses(
        (status = 200, description = "All settings with typed values.", body = [SiteSettingDto])
    ),
    security([]),
    tag = "Settings"
)]
pub async fn list(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Envelope<Vec<SiteSettingDto>>> {
    state
        .services
        .site_setting_queries
        .list()
        .await
        .into_http()
        .map(Envelope::ok)
}

#[utoipa::path(
    get,
    path = "/api/settings/{key}",
    params(("key" = String, Path, description = "Setting key")),
    responses(
        (status = 200, description = "The setting.", body = SiteSettingDto),
        (status = 404, description = "Not found.", body = ErrorResponse)
    ),
    security([]),
    tag = "Settings"
)]
pub async fn show(
    Extension(state): Extension<HttpState>,
    Path(key): Path<String>,
) -> HttpResult<Envelope<SiteSettingDto>> {
    state
        .services
        .site_setting_queries
        .get(&key)
        .await
        .into_http()
        .map(Envelope::ok)
}

#[utoipa::path(
    post,
    path = "/api/settings",
    request_body = CreateSiteSettingCommand,
    responses(
        (status = 201, description = "Setting created.", body = SiteSettingDto),
        (status = 401, description = "Unauthenticated.", body = ErrorResponse),
        (status = 422, description = "Validation failed or key taken.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Settings"
)]
pub async fn create(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    JsonBody(command): JsonBody<CreateSiteSettingCommand>,
) -> HttpResult<Envelope<SiteSettingDto>> {
    let setting = state
        .services
        .site_setting_commands
        .create(command)
        .await
        .into_http()?;
    Ok(Envelope::created(setting, "Setting created successfully"))
}

#[utoipa::path(
    put,
    path = "/api/settings/{key}",
    params(("key" = String, Path, description = "Setting key")),
    request_body = UpdateSiteSettingCommand,
    responses(
        (status = 200, description = "Setting updated.", body = SiteSettingDto),
        (status = 404, description = "Not found.", body = ErrorResponse),
        (status = 422, description = "Value does not match the type.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Settings"
)]
pub async fn update(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    Path(key): Path<String>,
    JsonBody(command): JsonBody<UpdateSiteSettingCommand>,
) -> HttpResult<Envelope<SiteSettingDto>> {
    let setting = state
        .services
        .site_setting_commands
        .update(&key, command)
        .await
        .into_http()?;
    Ok(Envelope::with_message(setting, "Setting updated successfully"))
}

#[utoipa::path(
    delete,
    path = "/api/settings/{key}",
    params(("key" = String, Path, description = "Setting key")),
    responses(
        (status = 200, description = "Setting deleted."),
        (status = 404, description = "Not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Settings"
)]
pub async fn delete(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    Path(key): Path<String>,
) -> HttpResult<Envelope<()>> {
    state
        .services
        .site_setting_commands
        .delete(&key)
        .await
        .into_http()?;
    Ok(Envelope::done("Setting deleted successfully"))
}

#[utoipa::path(
    post,
    path = "/api/settings/{key}/image",
    params(("key" = String, Path, description = "Setting key")),
    request_body(content_type = "multipart/form-data", description = "Image in the `file` field, at most 2 MB."),
    responses(
        (status = 200, description = "Stored path saved as the setting value.", body = SiteSettingDto),
        (status = 404, description = "Not found.", body = ErrorResponse),
        (status = 422, description = "Not an image setting, or a bad file.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Settings"
)]
pub async fn upload_image(
    Extension(state): Extension<HttpState>,
    _auth: Authenticated,
    Path(key): Path<String>,
    uploads: Uploads,
) -> HttpResult<Envelope<SiteSettingDto>> {
    let file = uploads.single("file").await?;
    let setting = state
        .services
        .site_setting_commands
        .upload_image(&key, file)
        .await
        .into_http()?;
    Ok(Envelope::with_message(setting, "Image uploaded successfully"))
}
