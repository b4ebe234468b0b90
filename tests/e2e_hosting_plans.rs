use axum::http::StatusCode;
use serde_json::{Value, json};

mod support;

fn plan(name: &str, category_id: i64) -> Value {
    json!({
        "name": name,
        "category_id": category_id,
        "monthly_price": 4.99,
        "yearly_price": 49.0,
        "monthly_renewal_price": 6.99,
        "yearly_renewal_price": 69.0,
    })
}

async fn category(app: &support::TestApp, token: &str) -> i64 {
    let resp = app
        .post_json("/api/service-categories", Some(token), json!({ "name": "Hosting" }))
        .await;
    support::expect_success(resp, StatusCode::CREATED).await["id"]
        .as_i64()
        .unwrap()
}

#[tokio::test]
async fn plans_with_the_same_name_get_suffixed_slugs() {
    let app = support::TestApp::new();
    let token = app.admin_token().await;
    let category_id = category(&app, &token).await;

    for _ in 0..2 {
        let resp = app
            .post_json("/api/hosting-plans", Some(&token), plan("Starter Plan", category_id))
            .await;
        support::expect_success(resp, StatusCode::CREATED).await;
    }

    assert_eq!(app.plans.slugs(), ["starter-plan", "starter-plan-1"]);

    let resp = app.get("/api/hosting-plans/starter-plan-1", None).await;
    let shown = support::expect_success(resp, StatusCode::OK).await;
    assert_eq!(shown["id"], 2);
    assert!(shown["features"].as_array().is_some_and(Vec::is_empty));
}

#[tokio::test]
async fn renaming_a_plan_skips_its_own_slug() {
    let app = support::TestApp::new();
    let token = app.admin_token().await;
    let category_id = category(&app, &token).await;
    app.post_json("/api/hosting-plans", Some(&token), plan("Business", category_id))
        .await;
    let resp = app
        .post_json("/api/hosting-plans", Some(&token), plan("Pro", category_id))
        .await;
    let id = support::expect_success(resp, StatusCode::CREATED).await["id"]
        .as_i64()
        .unwrap();

    let resp = app
        .put_json(&format!("/api/hosting-plans/{id}"), Some(&token), json!({ "name": "Business" }))
        .await;
    let updated = support::expect_success(resp, StatusCode::OK).await;

    assert_eq!(updated["slug"], "business-1");
}

#[tokio::test]
async fn a_plan_needs_an_existing_category() {
    let app = support::TestApp::new();
    let token = app.admin_token().await;

    let resp = app
        .post_json("/api/hosting-plans", Some(&token), plan("Starter", 99))
        .await;
    let json = support::expect_validation_error(resp).await;

    assert!(json["errors"]["category_id"].is_array());
    assert!(app.plans.slugs().is_empty());
}
