use axum::http::StatusCode;
use serde_json::json;

mod support;

#[tokio::test]
async fn same_name_services_get_sequential_slugs() {
    let app = support::TestApp::new();
    let token = app.admin_token().await;

    let mut slugs = Vec::new();
    for _ in 0..3 {
        let resp = app
            .post_json("/api/services", Some(&token), json!({ "name": "Web Development" }))
            .await;
        let data = support::expect_success(resp, StatusCode::CREATED).await;
        slugs.push(data["slug"].as_str().unwrap().to_string());
    }

    assert_eq!(slugs, ["web-development", "web-development-1", "web-development-2"]);
}

#[tokio::test]
async fn explicit_slug_survives_other_updates() {
    let app = support::TestApp::new();
    let token = app.admin_token().await;

    let resp = app
        .post_json(
            "/api/services",
            Some(&token),
            json!({ "name": "Managed WordPress", "slug": "wp" }),
        )
        .await;
    let created = support::expect_success(resp, StatusCode::CREATED).await;
    assert_eq!(created["slug"], "wp");
    let id = created["id"].as_i64().unwrap();

    let resp = app
        .put_json(&format!("/api/services/{id}"), Some(&token), json!({ "icon": "wp.svg" }))
        .await;
    let updated = support::expect_success(resp, StatusCode::OK).await;
    assert_eq!(updated["slug"], "wp");

    let resp = app.get("/api/services/wp", None).await;
    let by_slug = support::expect_success(resp, StatusCode::OK).await;
    assert_eq!(by_slug["id"], id);
}

#[tokio::test]
async fn unknown_category_is_a_field_error() {
    let app = support::TestApp::new();
    let token = app.admin_token().await;

    let resp = app
        .post_json(
            "/api/services",
            Some(&token),
            json!({ "name": "Orphan", "category_id": 42 }),
        )
        .await;
    let json = support::expect_validation_error(resp).await;
    assert!(json["errors"]["category_id"].is_array());
    assert_eq!(app.services.len(), 0);
}

#[tokio::test]
async fn deleting_a_category_with_services_is_refused() {
    let app = support::TestApp::new();
    let token = app.admin_token().await;

    let resp = app
        .post_json("/api/service-categories", Some(&token), json!({ "name": "Development" }))
        .await;
    let category_id = support::expect_success(resp, StatusCode::CREATED).await["id"]
        .as_i64()
        .unwrap();
    let resp = app
        .post_json(
            "/api/services",
            Some(&token),
            json!({ "name": "Web Development", "category_id": category_id }),
        )
        .await;
    let service_id = support::expect_success(resp, StatusCode::CREATED).await["id"]
        .as_i64()
        .unwrap();
    app.categories.set_dependents(category_id, 1);

    let resp = app
        .delete(&format!("/api/service-categories/{category_id}"), Some(&token))
        .await;
    let (status, _) = support::read_json(resp).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let resp = app.get(&format!("/api/service-categories/{category_id}"), None).await;
    support::expect_success(resp, StatusCode::OK).await;
    let resp = app.get(&format!("/api/services/{service_id}"), None).await;
    let service = support::expect_success(resp, StatusCode::OK).await;
    assert_eq!(service["category_id"], category_id);
}
