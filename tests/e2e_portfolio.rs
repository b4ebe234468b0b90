use axum::http::StatusCode;
use serde_json::json;

mod support;

#[tokio::test]
async fn items_are_addressed_by_unique_slugs() {
    let app = support::TestApp::new();
    let token = app.admin_token().await;

    let mut slugs = Vec::new();
    for _ in 0..2 {
        let resp = app
            .post_json("/api/portfolio", Some(&token), json!({ "title": "Shop Relaunch!" }))
            .await;
        let data = support::expect_success(resp, StatusCode::CREATED).await;
        slugs.push(data["slug"].as_str().unwrap().to_string());
    }
    assert_eq!(slugs, ["shop-relaunch", "shop-relaunch-1"]);

    let resp = app.get("/api/portfolio/shop-relaunch-1", None).await;
    let shown = support::expect_success(resp, StatusCode::OK).await;
    assert_eq!(shown["title"], "Shop Relaunch!");
}

#[tokio::test]
async fn retitling_moves_the_item_to_a_new_slug() {
    let app = support::TestApp::new();
    let token = app.admin_token().await;
    app.post_json("/api/portfolio", Some(&token), json!({ "title": "Shop Relaunch" }))
        .await;

    let resp = app
        .put_json(
            "/api/portfolio/shop-relaunch",
            Some(&token),
            json!({ "title": "Corporate Site" }),
        )
        .await;
    let updated = support::expect_success(resp, StatusCode::OK).await;
    assert_eq!(updated["slug"], "corporate-site");

    let resp = app.get("/api/portfolio/shop-relaunch", None).await;
    support::assert_error_response(resp, StatusCode::NOT_FOUND, "Portfolio item not found").await;
    let resp = app.get("/api/portfolio/corporate-site", None).await;
    support::expect_success(resp, StatusCode::OK).await;
}
