// src/presentation/http/openapi.rs
use crate::presentation::http::controllers::{
    auth, contact_messages, faq_categories, faqs, hosting_plans, hosting_types, partners,
    plan_features, portfolio, service_cards, service_categories, services, site_settings,
    team_members, testimonials,
};
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

/// Documented bodies are the `data` member of the success envelope.
#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register,
        auth::login,
        auth::logout,
        auth::refresh,
        auth::me,
        service_categories::list,
        service_categories::show,
        service_categories::create,
        service_categories::update,
        service_categories::delete,
        service_categories::toggle_active,
        services::list,
        services::show,
        services::by_category,
        services::create,
        services::update,
        services::delete,
        services::toggle_active,
        hosting_plans::list,
        hosting_plans::show,
        hosting_plans::create,
        hosting_plans::update,
        hosting_plans::delete,
        hosting_plans::toggle_active,
        hosting_plans::toggle_highlighted,
        hosting_plans::toggle_popular,
        plan_features::list,
        plan_features::show,
        plan_features::by_plan,
        plan_features::create,
        plan_features::bulk_create,
        plan_features::update,
        plan_features::delete,
        plan_features::toggle_included,
        portfolio::list,
        portfolio::show,
        portfolio::create,
        portfolio::update,
        portfolio::delete,
        portfolio::toggle_featured,
        portfolio::toggle_published,
        portfolio::upload_featured_image,
        portfolio::upload_gallery,
        team_members::list,
        team_members::show,
        team_members::by_role,
        team_members::create,
        team_members::update,
        team_members::delete,
        team_members::toggle_active,
        team_members::toggle_verified,
        team_members::upload_photo,
        faq_categories::list,
        faq_categories::active_with_faqs,
        faq_categories::show,
        faq_categories::create,
        faq_categories::update,
        faq_categories::delete,
        faq_categories::toggle_active,
        faq_categories::reorder,
        faqs::list,
        faqs::featured,
        faqs::public,
        faqs::search,
        faqs::by_category,
        faqs::show,
        faqs::create,
        faqs::update,
        faqs::delete,
        faqs::toggle_active,
        faqs::toggle_featured,
        faqs::reorder,
        faqs::bulk_update,
        contact_messages::submit,
        contact_messages::list,
        contact_messages::stats,
        contact_messages::export,
        contact_messages::show,
        contact_messages::update,
        contact_messages::update_status,
        contact_messages::delete,
        contact_messages::bulk_update,
        testimonials::public,
        testimonials::featured,
        testimonials::by_service,
        testimonials::list,
        testimonials::stats,
        testimonials::show,
        testimonials::create,
        testimonials::update,
        testimonials::delete,
        testimonials::toggle_approved,
        testimonials::toggle_featured,
        testimonials::reorder,
        testimonials::bulk_update,
        testimonials::upload_photo,
        partners::list,
        partners::show,
        partners::create,
        partners::update,
        partners::delete,
        partners::upload_picture,
        service_cards::list,
        service_cards::show,
        service_cards::create,
        service_cards::update,
        service_cards::delete,
        service_cards::upload_picture,
        hosting_types::list,
        hosting_types::show,
        hosting_types::create,
        hosting_types::update,
        hosting_types::delete,
        hosting_types::upload_image,
        site_settings::list,
        site_settings::show,
        site_settings::create,
        site_settings::update,
        site_settings::delete,
        site_settings::upload_image,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse
        )
    ),
    tags(
        (name = "Auth", description = "Registration, login and token lifecycle"),
        (name = "Service categories", description = "Top-level grouping of services and plans"),
        (name = "Services", description = "Service catalog"),
        (name = "Hosting plans", description = "Hosting plans and pricing"),
        (name = "Plan features", description = "Feature rows of hosting plans"),
        (name = "Portfolio", description = "Published project showcase"),
        (name = "Team members", description = "Team directory"),
        (name = "FAQ categories", description = "FAQ grouping"),
        (name = "FAQs", description = "Frequently asked questions"),
        (name = "Contact messages", description = "Contact form inbox"),
        (name = "Testimonials", description = "Client testimonials"),
        (name = "Partners", description = "Partner logos"),
        (name = "Service cards", description = "Marketing service cards"),
        (name = "Hosting types", description = "Kinds of hosting on offer"),
        (name = "Settings", description = "Key/value site settings"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = [])),
    info(
        title = "Site CMS API",
        description = "Content backend for the marketing site",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("JWT".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();
        for url in public_api_urls() {
            servers.push(Server::new(url));
        }
    }
}

/// `PUBLIC_API_URLS` (comma separated) or `PUBLIC_API_URL`, plus the local default.
fn public_api_urls() -> Vec<String> {
    let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
        .ok()
        .map(|value| {
            value
                .split(',')
                .map(str::trim)
                .filter(|segment| !segment.is_empty())
                .map(|segment| segment.trim_end_matches('/').to_string())
                .collect()
        })
        .unwrap_or_default();

    if urls.is_empty() {
        if let Ok(url) = env::var("PUBLIC_API_URL") {
            let sanitized = url.trim().trim_end_matches('/').to_string();
            if !sanitized.is_empty() {
                urls.push(sanitized);
            }
        }
    }

    urls.push("http://localhost:8080".to_string());

    let mut seen = HashSet::new();
    urls.retain(|url| seen.insert(url.clone()));
    urls
}

/// Swagger UI at `/docs`, Redoc at `/redoc`, and the raw document.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url(OPENAPI_JSON_PATH, openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "docs/openapi.json".to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_declares_bearer_auth_and_core_routes() {
        let doc = ApiDoc::openapi();
        let components = doc.components.as_ref().expect("components");
        assert!(components.security_schemes.contains_key("bearerAuth"));
        for path in [
            "/api/auth/register",
            "/api/portfolio/{slug}",
            "/api/contact-messages/export",
            "/api/settings/{key}/image",
            "/health",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
