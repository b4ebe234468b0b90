use axum::http::StatusCode;
use serde_json::json;

mod support;

#[tokio::test]
async fn colliding_names_get_numbered_slugs() {
    let app = support::TestApp::new();
    let token = app.admin_token().await;

    let first = app
        .post_json("/api/service-categories", Some(&token), json!({ "name": "Web Development" }))
        .await;
    let first = support::expect_success(first, StatusCode::CREATED).await;
    let second = app
        .post_json("/api/service-categories", Some(&token), json!({ "name": "Web  Development!" }))
        .await;
    let second = support::expect_success(second, StatusCode::CREATED).await;

    assert_eq!(first["slug"], "web-development");
    assert_eq!(second["slug"], "web-development-1");
    assert_eq!(first["is_active"], true);
    assert_eq!(first["sort_order"], 0);
}

#[tokio::test]
async fn renaming_keeps_its_own_slug_free() {
    let app = support::TestApp::new();
    let token = app.admin_token().await;

    let created = app
        .post_json("/api/service-categories", Some(&token), json!({ "name": "Hosting" }))
        .await;
    let created = support::expect_success(created, StatusCode::CREATED).await;
    let id = created["id"].as_i64().unwrap();

    let resp = app
        .put_json(
            &format!("/api/service-categories/{id}"),
            Some(&token),
            json!({ "description": "All hosting products" }),
        )
        .await;
    let updated = support::expect_success(resp, StatusCode::OK).await;
    assert_eq!(updated["slug"], "hosting");
    assert_eq!(updated["description"], "All hosting products");

    let resp = app
        .put_json(
            &format!("/api/service-categories/{id}"),
            Some(&token),
            json!({ "name": "Cloud Hosting" }),
        )
        .await;
    let renamed = support::expect_success(resp, StatusCode::OK).await;
    assert_eq!(renamed["slug"], "cloud-hosting");
}

#[tokio::test]
async fn a_category_in_use_cannot_be_deleted() {
    let app = support::TestApp::new();
    let token = app.admin_token().await;

    let created = app
        .post_json("/api/service-categories", Some(&token), json!({ "name": "Design" }))
        .await;
    let id = support::expect_success(created, StatusCode::CREATED).await["id"]
        .as_i64()
        .unwrap();
    app.categories.set_dependents(id, 2);

    let resp = app.delete(&format!("/api/service-categories/{id}"), Some(&token)).await;
    let (status, json) = support::read_json(resp).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["status"], "error");
    assert!(json["message"].as_str().unwrap().contains("2 associated record(s)"));
    assert_eq!(app.categories.len(), 1);

    app.categories.set_dependents(id, 0);
    let resp = app.delete(&format!("/api/service-categories/{id}"), Some(&token)).await;
    let (status, json) = support::read_json(resp).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["data"].is_null());
    assert_eq!(app.categories.len(), 0);
}

#[tokio::test]
async fn missing_name_is_a_field_error() {
    let app = support::TestApp::new();
    let token = app.admin_token().await;

    let resp = app
        .post_json("/api/service-categories", Some(&token), json!({ "sort_order": -1 }))
        .await;
    let json = support::expect_validation_error(resp).await;

    assert!(json["errors"]["name"].is_array());
    assert!(json["errors"]["sort_order"].is_array());
    assert_eq!(app.categories.len(), 0);
}

#[tokio::test]
async fn unknown_and_malformed_ids_are_not_found() {
    let app = support::TestApp::new();

    let resp = app.get("/api/service-categories/999", None).await;
    support::assert_error_response(resp, StatusCode::NOT_FOUND, "Service category not found").await;

    let resp = app.get("/api/service-categories/abc", None).await;
    support::assert_error_response(resp, StatusCode::NOT_FOUND, "Resource not found").await;
}

#[tokio::test]
async fn writes_need_a_token_but_reads_do_not() {
    let app = support::TestApp::new();

    let resp = app
        .post_json("/api/service-categories", None, json!({ "name": "Anything" }))
        .await;
    support::assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthenticated").await;

    let resp = app.get("/api/service-categories", None).await;
    let data = support::expect_success(resp, StatusCode::OK).await;
    assert_eq!(data, json!([]));
}

#[tokio::test]
async fn toggle_flips_the_active_flag() {
    let app = support::TestApp::new();
    let token = app.admin_token().await;

    let created = app
        .post_json("/api/service-categories", Some(&token), json!({ "name": "SEO" }))
        .await;
    let id = support::expect_success(created, StatusCode::CREATED).await["id"]
        .as_i64()
        .unwrap();

    let resp = app
        .patch(&format!("/api/service-categories/{id}/toggle-active"), Some(&token))
        .await;
    let toggled = support::expect_success(resp, StatusCode::OK).await;
    assert_eq!(toggled["is_active"], false);

    let resp = app.get("/api/service-categories?active=true", None).await;
    let listed = support::expect_success(resp, StatusCode::OK).await;
    assert_eq!(listed, json!([]));
}
