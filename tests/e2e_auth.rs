use axum::http::StatusCode;
use serde_json::{Value, json};

mod support;

fn registration(email: &str, password: &str) -> Value {
    json!({
        "name": "Jane Admin",
        "email": email,
        "password": password,
        "password_confirmation": password,
    })
}

#[tokio::test]
async fn register_returns_a_session_for_the_normalized_email() {
    let app = support::TestApp::new();

    let resp = app
        .post_json(
            "/api/auth/register",
            None,
            registration("  Jane@Example.COM ", "secret123"),
        )
        .await;
    let (status, json) = support::read_json(resp).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["message"], "User registered successfully");
    assert_eq!(json["data"]["token_type"], "bearer");
    assert_eq!(json["data"]["user"]["email"], "jane@example.com");
    assert!(json["data"]["access_token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(app.users.emails(), vec!["jane@example.com".to_string()]);
}

#[tokio::test]
async fn repeated_registration_inside_the_window_yields_one_account() {
    let app = support::TestApp::new();

    let first = app
        .post_json("/api/auth/register", None, registration("jane@example.com", "secret123"))
        .await;
    let first = support::expect_success(first, StatusCode::CREATED).await;

    app.advance(2);
    let second = app
        .post_json("/api/auth/register", None, registration("JANE@example.com", "secret123"))
        .await;
    let second = support::expect_success(second, StatusCode::CREATED).await;

    assert_eq!(app.users.count(), 1);
    assert_eq!(first["user"]["id"], second["user"]["id"]);
}

#[tokio::test]
async fn retry_inside_the_window_skips_validation() {
    let app = support::TestApp::new();
    let first = app
        .post_json("/api/auth/register", None, registration("A@X.com ", "secret1"))
        .await;
    let first = support::expect_success(first, StatusCode::CREATED).await;

    app.advance(1);
    let other_password = app
        .post_json("/api/auth/register", None, registration("a@x.com", "other22"))
        .await;
    let other_password = support::expect_success(other_password, StatusCode::CREATED).await;

    let bare = app
        .post_json("/api/auth/register", None, json!({ "email": "a@x.com" }))
        .await;
    let bare = support::expect_success(bare, StatusCode::CREATED).await;

    assert_eq!(app.users.emails(), vec!["a@x.com".to_string()]);
    assert_eq!(other_password["user"]["id"], first["user"]["id"]);
    assert_eq!(bare["user"]["id"], first["user"]["id"]);
    assert!(bare["access_token"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn an_account_exactly_five_seconds_old_is_outside_the_window() {
    let app = support::TestApp::new();
    app.post_json("/api/auth/register", None, registration("jane@example.com", "secret123"))
        .await;

    app.advance(5);
    let resp = app
        .post_json("/api/auth/register", None, registration("jane@example.com", "secret123"))
        .await;
    let json = support::expect_validation_error(resp).await;

    assert_eq!(json["errors"]["email"][0], "The email has already been taken.");
    assert_eq!(app.users.count(), 1);
}

#[tokio::test]
async fn failed_token_issue_removes_the_new_account() {
    let app = support::TestApp::new();
    app.tokens.refuse_issue();

    let resp = app
        .post_json("/api/auth/register", None, registration("jane@example.com", "secret123"))
        .await;
    support::assert_error_response(
        resp,
        StatusCode::INTERNAL_SERVER_ERROR,
        "Registration failed",
    )
    .await;

    assert_eq!(app.users.count(), 0);
}

#[tokio::test]
async fn losing_the_insert_race_is_a_conflict() {
    let app = support::TestApp::new();
    app.users.lose_next_insert_race();

    let resp = app
        .post_json("/api/auth/register", None, registration("jane@example.com", "secret123"))
        .await;
    support::assert_error_response(
        resp,
        StatusCode::CONFLICT,
        "An account with this email already exists",
    )
    .await;

    assert_eq!(app.users.count(), 0);
}

#[tokio::test]
async fn registration_after_the_window_is_a_duplicate() {
    let app = support::TestApp::new();
    app.post_json("/api/auth/register", None, registration("jane@example.com", "secret123"))
        .await;

    app.advance(30);
    let resp = app
        .post_json("/api/auth/register", None, registration("jane@example.com", "secret123"))
        .await;
    support::expect_validation_error(resp).await;
}

#[tokio::test]
async fn register_validates_every_field() {
    let app = support::TestApp::new();

    let resp = app
        .post_json(
            "/api/auth/register",
            None,
            json!({
                "name": "",
                "email": "not-an-email",
                "password": "123",
                "password_confirmation": "456",
            }),
        )
        .await;
    let json = support::expect_validation_error(resp).await;

    for field in ["name", "email", "password"] {
        assert!(json["errors"].get(field).is_some(), "missing error for {field}: {json}");
    }
    assert_eq!(app.users.count(), 0);
}

#[tokio::test]
async fn login_rejects_a_wrong_password() {
    let app = support::TestApp::new();
    app.post_json("/api/auth/register", None, registration("jane@example.com", "secret123"))
        .await;

    let resp = app
        .post_json(
            "/api/auth/login",
            None,
            json!({ "email": "jane@example.com", "password": "nope-nope" }),
        )
        .await;
    support::assert_error_response(resp, StatusCode::UNAUTHORIZED, "Invalid credentials").await;
}

#[tokio::test]
async fn logout_revokes_the_token() {
    let app = support::TestApp::new();
    let session = app
        .post_json("/api/auth/register", None, registration("jane@example.com", "secret123"))
        .await;
    let session = support::expect_success(session, StatusCode::CREATED).await;
    let token = session["access_token"].as_str().unwrap().to_string();

    let me = app.get("/api/auth/me", Some(&token)).await;
    let me = support::expect_success(me, StatusCode::OK).await;
    assert_eq!(me["email"], "jane@example.com");

    let resp = app.post_json("/api/auth/logout", Some(&token), json!({})).await;
    let (status, json) = support::read_json(resp).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Successfully logged out");

    let resp = app.get("/api/auth/me", Some(&token)).await;
    support::assert_error_response(resp, StatusCode::UNAUTHORIZED, "Token has been revoked").await;
}

#[tokio::test]
async fn refresh_issues_a_new_token_and_retires_the_old_one() {
    let app = support::TestApp::new();
    let session = app
        .post_json("/api/auth/register", None, registration("jane@example.com", "secret123"))
        .await;
    let session = support::expect_success(session, StatusCode::CREATED).await;
    let old_token = session["access_token"].as_str().unwrap().to_string();

    // past the one-hour expiry, inside the refresh window
    app.advance(2 * 3600);
    let resp = app.get("/api/auth/me", Some(&old_token)).await;
    support::assert_error_response(resp, StatusCode::UNAUTHORIZED, "Token has expired").await;

    let refreshed = app.post_json("/api/auth/refresh", Some(&old_token), json!({})).await;
    let refreshed = support::expect_success(refreshed, StatusCode::OK).await;
    let new_token = refreshed["access_token"].as_str().unwrap().to_string();
    assert_ne!(new_token, old_token);

    let me = app.get("/api/auth/me", Some(&new_token)).await;
    support::expect_success(me, StatusCode::OK).await;

    let again = app.post_json("/api/auth/refresh", Some(&old_token), json!({})).await;
    support::assert_error_response(again, StatusCode::UNAUTHORIZED, "Token has been revoked").await;
}

#[tokio::test]
async fn protected_routes_require_a_bearer_token() {
    let app = support::TestApp::new();

    let resp = app.get("/api/auth/me", None).await;
    support::assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthenticated").await;

    let resp = app.get("/api/auth/me", Some("garbage")).await;
    support::assert_error_response(resp, StatusCode::UNAUTHORIZED, "Token is invalid").await;
}
