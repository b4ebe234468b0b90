// tests/support/helpers.rs
use super::mocks::{
    InMemoryContactMessages, InMemoryHostingPlans, InMemoryPortfolio, InMemoryServiceCategories,
    InMemoryServices, InMemoryUsers, ManualClock, MemoryRevocations, MemoryStorage, PlainHasher,
    SwitchableTokens,
};
use super::stubs::EmptyStore;
use axum::{
    Router,
    body::{self, Body},
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use chrono::Duration as ChronoDuration;
use serde_json::Value;
use site_cms::application::{
    dto::TokenSubject,
    ports::security::TokenManager,
    services::{ApplicationServices, RepositorySet, ServicePorts},
};
use site_cms::domain::user::UserId;
use site_cms::infrastructure::{security::JwtTokenManager, util::DefaultSlugGenerator};
use site_cms::presentation::http::{routes::build_router_with_rate_limiter, state::HttpState};
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub const TEST_SECRET: &str = "integration-test-secret-with-32-bytes!!";

/// Router plus handles on the in-memory adapters behind it.
pub struct TestApp {
    pub router: Router,
    pub users: Arc<InMemoryUsers>,
    pub categories: Arc<InMemoryServiceCategories>,
    pub services: Arc<InMemoryServices>,
    pub plans: Arc<InMemoryHostingPlans>,
    pub portfolio: Arc<InMemoryPortfolio>,
    pub messages: Arc<InMemoryContactMessages>,
    pub storage: Arc<MemoryStorage>,
    pub clock: Arc<ManualClock>,
    pub tokens: Arc<SwitchableTokens>,
}

impl TestApp {
    pub fn new() -> Self {
        let clock = Arc::new(ManualClock::new());
        let jwt = JwtTokenManager::new(
            TEST_SECRET,
            ChronoDuration::hours(1),
            ChronoDuration::days(14),
            clock.clone(),
        )
        .expect("token manager");
        let tokens = Arc::new(SwitchableTokens::new(Arc::new(jwt)));
        let users = Arc::new(InMemoryUsers::default());
        let categories = Arc::new(InMemoryServiceCategories::default());
        let services = Arc::new(InMemoryServices::default());
        let plans = Arc::new(InMemoryHostingPlans::default());
        let portfolio = Arc::new(InMemoryPortfolio::default());
        let messages = Arc::new(InMemoryContactMessages::default());
        let storage = Arc::new(MemoryStorage::default());
        let empty = Arc::new(EmptyStore);

        let repos = RepositorySet {
            users: users.clone(),
            service_categories: categories.clone(),
            services: services.clone(),
            hosting_plans: plans.clone(),
            plan_features: empty.clone(),
            portfolio: portfolio.clone(),
            team_members: empty.clone(),
            faq_categories: empty.clone(),
            faqs: empty.clone(),
            contact_messages: messages.clone(),
            testimonials: empty.clone(),
            partners: empty.clone(),
            service_cards: empty.clone(),
            hosting_types: empty.clone(),
            site_settings: empty,
        };
        let ports = ServicePorts {
            password_hasher: Arc::new(PlainHasher),
            token_manager: tokens.clone(),
            revocations: Arc::new(MemoryRevocations::default()),
            storage: storage.clone(),
            clock: clock.clone(),
            slugger: Arc::new(DefaultSlugGenerator),
        };

        let state = HttpState::new(ApplicationServices::new(repos, ports));
        Self {
            router: build_router_with_rate_limiter(state, false),
            users,
            categories,
            services,
            plans,
            portfolio,
            messages,
            storage,
            clock,
            tokens,
        }
    }

    /// A valid bearer token for a user that need not exist.
    pub async fn token_for(&self, user_id: i64) -> String {
        self.tokens
            .issue(TokenSubject {
                user_id: UserId::new(user_id).unwrap(),
                email: format!("user{user_id}@example.com"),
            })
            .await
            .expect("issue token")
            .access_token
    }

    pub async fn admin_token(&self) -> String {
        self.token_for(1).await
    }

    pub fn advance(&self, seconds: i64) {
        self.clock.advance(ChronoDuration::seconds(seconds));
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.expect("router response")
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> Response {
        self.send(request(Method::GET, uri, token, None)).await
    }

    pub async fn post_json(&self, uri: &str, token: Option<&str>, body: Value) -> Response {
        self.send(request(Method::POST, uri, token, Some(body))).await
    }

    pub async fn put_json(&self, uri: &str, token: Option<&str>, body: Value) -> Response {
        self.send(request(Method::PUT, uri, token, Some(body))).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> Response {
        self.send(request(Method::DELETE, uri, token, None)).await
    }

    pub async fn patch(&self, uri: &str, token: Option<&str>) -> Response {
        self.send(request(Method::PATCH, uri, token, None)).await
    }
}

pub fn request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn read_body(resp: Response) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    (status, parts.headers, bytes.to_vec())
}

pub async fn read_json(resp: Response) -> (StatusCode, Value) {
    let (status, headers, bytes) = read_body(resp).await;
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content-type: {content_type}"
    );
    let json = serde_json::from_slice(&bytes).expect("json body");
    (status, json)
}

/// Asserts a `{status: "success", data}` body with the given status and returns `data`.
pub async fn expect_success(resp: Response, expected: StatusCode) -> Value {
    let (status, json) = read_json(resp).await;
    assert_eq!(status, expected, "unexpected status, body: {json}");
    assert_eq!(json["status"], "success", "body: {json}");
    json["data"].clone()
}

/// Asserts a 422 `Validation error` body and returns the whole payload.
pub async fn expect_validation_error(resp: Response) -> Value {
    assert_error_response(resp, StatusCode::UNPROCESSABLE_ENTITY, "Validation error").await
}

/// Asserts a `{status: "error", message}` body and returns the whole payload.
pub async fn assert_error_response(
    resp: Response,
    expected_status: StatusCode,
    expected_message: &str,
) -> Value {
    let (status, json) = read_json(resp).await;
    assert_eq!(status, expected_status, "unexpected status, body: {json}");
    assert_eq!(json["status"], "error", "body: {json}");
    assert_eq!(json["message"], expected_message, "body: {json}");
    json
}
