use axum::http::StatusCode;

mod support;

#[tokio::test]
async fn openapi_document_is_served() {
    let app = support::TestApp::new();

    let resp = app.get("/api-docs/openapi.json", None).await;
    let (status, json) = support::read_json(resp).await;
    assert_eq!(status, StatusCode::OK);

    let paths = json["paths"].as_object().expect("paths object");
    for path in [
        "/api/auth/register",
        "/api/service-categories/{id}",
        "/api/portfolio/{slug}/gallery",
        "/api/contact-messages/export",
        "/api/settings/{key}",
        "/health",
    ] {
        assert!(paths.contains_key(path), "missing {path}");
    }
    assert!(json["components"]["securitySchemes"]["bearerAuth"].is_object());
}

#[tokio::test]
async fn writes_declare_bearer_security() {
    let app = support::TestApp::new();

    let resp = app.get("/api-docs/openapi.json", None).await;
    let (_, json) = support::read_json(resp).await;

    let create = &json["paths"]["/api/faqs"]["post"];
    assert!(create["security"][0]["bearerAuth"].is_array());
}

#[tokio::test]
async fn health_reports_ok() {
    let app = support::TestApp::new();

    let resp = app.get("/health", None).await;
    let (status, json) = support::read_json(resp).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}
