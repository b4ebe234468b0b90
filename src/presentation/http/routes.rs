// src/presentation/http/routes.rs
use crate::config::AppConfig;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{
        auth, contact_messages, faq_categories, faqs, hosting_plans, hosting_types, partners,
        plan_features, portfolio, service_cards, service_categories, services, site_settings,
        team_members, testimonials,
    },
    middleware::rate_limit::{self, IpRateLimit},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    routing::{MethodRouter, get, patch, post},
};
use std::{path::PathBuf, time::Duration};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::warn;

/// Ten gallery images of 5 MB each plus multipart overhead.
const MAX_BODY_BYTES: usize = 60 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct RouterOptions {
    pub allowed_origins: Vec<String>,
    pub upload_dir: PathBuf,
    pub upload_prefix: String,
    pub rate_limit: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:3000".into()],
            upload_dir: PathBuf::from("./public"),
            upload_prefix: "/uploads".into(),
            rate_limit: true,
        }
    }
}

impl From<&AppConfig> for RouterOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            allowed_origins: config.allowed_origins().to_vec(),
            upload_dir: config.upload_dir().clone(),
            upload_prefix: config.public_upload_prefix().to_string(),
            rate_limit: config.rate_limit_enabled(),
        }
    }
}

pub fn build_router(state: HttpState) -> Router {
    build_router_with_options(state, &RouterOptions::default())
}

/// Test entry point; the per-IP limiter needs connect info that `oneshot` lacks.
pub fn build_router_with_rate_limiter(state: HttpState, rate_limit: bool) -> Router {
    build_router_with_options(
        state,
        &RouterOptions {
            rate_limit,
            ..RouterOptions::default()
        },
    )
}

pub fn build_router_with_options(state: HttpState, options: &RouterOptions) -> Router {
    let limiter = if options.rate_limit {
        rate_limit::public_write_limit()
    } else {
        None
    };

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .nest("/api", api_routes(limiter.as_ref()))
        .nest_service(&options.upload_prefix, ServeDir::new(&options.upload_dir))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.allowed_origins))
        .layer(Extension(state))
}

fn throttled(route: MethodRouter, limiter: Option<&IpRateLimit>) -> MethodRouter {
    match limiter {
        Some(layer) => route.layer(layer.clone()),
        None => route,
    }
}

fn api_routes(limiter: Option<&IpRateLimit>) -> Router {
    Router::new()
        .route("/auth/register", throttled(post(auth::register), limiter))
        .route("/auth/login", throttled(post(auth::login), limiter))
        .route("/auth/refresh", throttled(post(auth::refresh), limiter))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/me", get(auth::me))
        .route(
            "/service-categories",
            get(service_categories::list).post(service_categories::create),
        )
        .route(
            "/service-categories/{id}",
            get(service_categories::show)
                .put(service_categories::update)
                .delete(service_categories::delete),
        )
        .route(
            "/service-categories/{id}/toggle-active",
            patch(service_categories::toggle_active),
        )
        .route("/services", get(services::list).post(services::create))
        .route(
            "/services/by-category/{category_id}",
            get(services::by_category),
        )
        .route(
            "/services/{id}",
            get(services::show)
                .put(services::update)
                .delete(services::delete),
        )
        .route(
            "/services/{id}/toggle-active",
            patch(services::toggle_active),
        )
        .route(
            "/hosting-plans",
            get(hosting_plans::list).post(hosting_plans::create),
        )
        .route(
            "/hosting-plans/{id}",
            get(hosting_plans::show)
                .put(hosting_plans::update)
                .delete(hosting_plans::delete),
        )
        .route(
            "/hosting-plans/{id}/toggle-active",
            patch(hosting_plans::toggle_active),
        )
        .route(
            "/hosting-plans/{id}/toggle-highlighted",
            patch(hosting_plans::toggle_highlighted),
        )
        .route(
            "/hosting-plans/{id}/toggle-popular",
            patch(hosting_plans::toggle_popular),
        )
        .route(
            "/plan-features",
            get(plan_features::list).post(plan_features::create),
        )
        .route("/plan-features/bulk", post(plan_features::bulk_create))
        .route(
            "/plan-features/by-plan/{plan_id}",
            get(plan_features::by_plan),
        )
        .route(
            "/plan-features/{id}",
            get(plan_features::show)
                .put(plan_features::update)
                .delete(plan_features::delete),
        )
        .route(
            "/plan-features/{id}/toggle-included",
            patch(plan_features::toggle_included),
        )
        .route("/portfolio", get(portfolio::list).post(portfolio::create))
        .route(
            "/portfolio/{slug}",
            get(portfolio::show)
                .put(portfolio::update)
                .delete(portfolio::delete),
        )
        .route(
            "/portfolio/{slug}/toggle-featured",
            patch(portfolio::toggle_featured),
        )
        .route(
            "/portfolio/{slug}/toggle-published",
            patch(portfolio::toggle_published),
        )
        .route(
            "/portfolio/{slug}/featured-image",
            post(portfolio::upload_featured_image),
        )
        .route("/portfolio/{slug}/gallery", post(portfolio::upload_gallery))
        .route(
            "/team-members",
            get(team_members::list).post(team_members::create),
        )
        .route("/team-members/by-role/{role}", get(team_members::by_role))
        .route(
            "/team-members/{id}",
            get(team_members::show)
                .put(team_members::update)
                .delete(team_members::delete),
        )
        .route(
            "/team-members/{id}/toggle-active",
            patch(team_members::toggle_active),
        )
        .route(
            "/team-members/{id}/toggle-verified",
            patch(team_members::toggle_verified),
        )
        .route(
            "/team-members/{id}/photo",
            post(team_members::upload_photo),
        )
        .route(
            "/faq-categories",
            get(faq_categories::list).post(faq_categories::create),
        )
        .route(
            "/faq-categories/active-with-faqs",
            get(faq_categories::active_with_faqs),
        )
        .route("/faq-categories/reorder", post(faq_categories::reorder))
        .route(
            "/faq-categories/{id}",
            get(faq_categories::show)
                .put(faq_categories::update)
                .delete(faq_categories::delete),
        )
        .route(
            "/faq-categories/{id}/toggle-active",
            patch(faq_categories::toggle_active),
        )
        .route("/faqs", get(faqs::list).post(faqs::create))
        .route("/faqs/featured", get(faqs::featured))
        .route("/faqs/public", get(faqs::public))
        .route("/faqs/search", get(faqs::search))
        .route("/faqs/by-category/{category_id}", get(faqs::by_category))
        .route("/faqs/reorder", post(faqs::reorder))
        .route("/faqs/bulk-update", post(faqs::bulk_update))
        .route(
            "/faqs/{id}",
            get(faqs::show).put(faqs::update).delete(faqs::delete),
        )
        .route("/faqs/{id}/toggle-active", patch(faqs::toggle_active))
        .route("/faqs/{id}/toggle-featured", patch(faqs::toggle_featured))
        .route(
            "/contact-messages",
            get(contact_messages::list)
                .merge(throttled(post(contact_messages::submit), limiter)),
        )
        .route("/contact-messages/stats", get(contact_messages::stats))
        .route("/contact-messages/export", get(contact_messages::export))
        .route(
            "/contact-messages/bulk-update",
            post(contact_messages::bulk_update),
        )
        .route(
            "/contact-messages/{id}",
            get(contact_messages::show)
                .put(contact_messages::update)
                .delete(contact_messages::delete),
        )
        .route(
            "/contact-messages/{id}/status",
            patch(contact_messages::update_status),
        )
        .route(
            "/testimonials",
            get(testimonials::list).post(testimonials::create),
        )
        .route("/testimonials/public", get(testimonials::public))
        .route("/testimonials/featured", get(testimonials::featured))
        .route("/testimonials/stats", get(testimonials::stats))
        .route(
            "/testimonials/by-service/{service_id}",
            get(testimonials::by_service),
        )
        .route("/testimonials/reorder", post(testimonials::reorder))
        .route("/testimonials/bulk-update", post(testimonials::bulk_update))
        .route(
            "/testimonials/{id}",
            get(testimonials::show)
                .put(testimonials::update)
                .delete(testimonials::delete),
        )
        .route(
            "/testimonials/{id}/toggle-approved",
            patch(testimonials::toggle_approved),
        )
        .route(
            "/testimonials/{id}/toggle-featured",
            patch(testimonials::toggle_featured),
        )
        .route(
            "/testimonials/{id}/photo",
            post(testimonials::upload_photo),
        )
        .route("/partners", get(partners::list).post(partners::create))
        .route(
            "/partners/{id}",
            get(partners::show)
                .put(partners::update)
                .delete(partners::delete),
        )
        .route("/partners/{id}/picture", post(partners::upload_picture))
        .route(
            "/services-cards",
            get(service_cards::list).post(service_cards::create),
        )
        .route(
            "/services-cards/{id}",
            get(service_cards::show)
                .put(service_cards::update)
                .delete(service_cards::delete),
        )
        .route(
            "/services-cards/{id}/picture",
            post(service_cards::upload_picture),
        )
        .route(
            "/type-of-hostings",
            get(hosting_types::list).post(hosting_types::create),
        )
        .route(
            "/type-of-hostings/{id}",
            get(hosting_types::show)
                .put(hosting_types::update)
                .delete(hosting_types::delete),
        )
        .route(
            "/type-of-hostings/{id}/image",
            post(hosting_types::upload_image),
        )
        .route(
            "/settings",
            get(site_settings::list).post(site_settings::create),
        )
        .route(
            "/settings/{key}",
            get(site_settings::show)
                .put(site_settings::update)
                .delete(site_settings::delete),
        )
        .route("/settings/{key}/image", post(site_settings::upload_image))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    security([]),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
