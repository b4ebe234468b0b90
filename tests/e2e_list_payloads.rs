use axum::http::StatusCode;
use serde_json::json;

mod support;

#[tokio::test]
async fn reorder_needs_at_least_one_entry() {
    let app = support::TestApp::new();
    let token = app.admin_token().await;

    let resp = app
        .post_json("/api/faq-categories/reorder", Some(&token), json!({ "categories": [] }))
        .await;
    let json = support::expect_validation_error(resp).await;

    assert_eq!(json["errors"]["categories"][0], "The categories field is required.");
}

#[tokio::test]
async fn reorder_entries_are_checked_one_by_one() {
    let app = support::TestApp::new();
    let token = app.admin_token().await;

    let resp = app
        .post_json(
            "/api/faqs/reorder",
            Some(&token),
            json!({ "faqs": [{ "id": 1, "sort_order": 0 }, { "id": 2, "sort_order": -3 }] }),
        )
        .await;
    let json = support::expect_validation_error(resp).await;

    assert_eq!(json["errors"]["faqs.1.sort_order"][0], "The sort order must be at least 0.");
    assert!(json["errors"].get("faqs.0.sort_order").is_none());
}

#[tokio::test]
async fn bulk_features_report_errors_per_item() {
    let app = support::TestApp::new();
    let token = app.admin_token().await;

    let resp = app
        .post_json(
            "/api/plan-features/bulk",
            Some(&token),
            json!({
                "plan_id": 7,
                "features": [
                    { "feature_name": "SSL", "is_included": true },
                    { "feature_name": "", "is_included": false },
                ],
            }),
        )
        .await;
    let json = support::expect_validation_error(resp).await;

    assert!(json["errors"]["features.1.feature_name"].is_array());
    assert!(json["errors"].get("features.0.feature_name").is_none());
    assert!(json["errors"]["plan_id"].is_array());
}

#[tokio::test]
async fn bulk_features_need_a_non_empty_list() {
    let app = support::TestApp::new();
    let token = app.admin_token().await;

    let resp = app
        .post_json(
            "/api/plan-features/bulk",
            Some(&token),
            json!({ "plan_id": 7, "features": [] }),
        )
        .await;
    let (status, json) = support::read_json(resp).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["errors"]["features"][0], "The features field must have at least 1 item.");
}
