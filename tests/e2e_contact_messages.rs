use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use serde_json::json;
use site_cms::domain::contact_message::MessageStatus;

mod support;

fn enquiry() -> serde_json::Value {
    json!({
        "name": "Visitor",
        "email": "visitor@example.com",
        "subject": "Quote",
        "message": "Could you host our shop?",
        "budget_range": "1000-5000",
    })
}

#[tokio::test]
async fn anyone_can_submit_and_the_client_is_recorded() {
    let app = support::TestApp::new();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/contact-messages")
        .header(header::CONTENT_TYPE, "application/json")
        .header("x-forwarded-for", "203.0.113.9, 10.0.0.1")
        .header(header::USER_AGENT, "integration-test")
        .body(Body::from(enquiry().to_string()))
        .unwrap();
    let resp = app.send(request).await;
    let data = support::expect_success(resp, StatusCode::CREATED).await;

    assert_eq!(data["status"], "new");
    assert_eq!(data["preferred_contact"], "email");
    assert_eq!(data["ip_address"], "203.0.113.9");
    assert_eq!(data["user_agent"], "integration-test");
}

#[tokio::test]
async fn submission_requires_name_email_and_message() {
    let app = support::TestApp::new();

    let resp = app
        .post_json("/api/contact-messages", None, json!({ "email": "nope" }))
        .await;
    let json = support::expect_validation_error(resp).await;

    for field in ["name", "email", "message"] {
        assert!(json["errors"][field].is_array(), "missing error for {field}: {json}");
    }
}

#[tokio::test]
async fn listing_is_private_and_paginated() {
    let app = support::TestApp::new();
    for _ in 0..3 {
        app.post_json("/api/contact-messages", None, enquiry()).await;
    }

    let resp = app.get("/api/contact-messages", None).await;
    support::assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthenticated").await;

    let token = app.admin_token().await;
    let resp = app
        .get("/api/contact-messages?per_page=2&page=2", Some(&token))
        .await;
    let page = support::expect_success(resp, StatusCode::OK).await;
    assert_eq!(page["total"], 3);
    assert_eq!(page["current_page"], 2);
    assert_eq!(page["last_page"], 2);
    assert_eq!(page["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn opening_a_new_message_marks_it_read() {
    let app = support::TestApp::new();
    let created = app.post_json("/api/contact-messages", None, enquiry()).await;
    let id = support::expect_success(created, StatusCode::CREATED).await["id"]
        .as_i64()
        .unwrap();
    let token = app.admin_token().await;

    let resp = app.get(&format!("/api/contact-messages/{id}"), Some(&token)).await;
    let data = support::expect_success(resp, StatusCode::OK).await;

    assert_eq!(data["status"], "read");
    assert_eq!(app.messages.status_of(id), Some(MessageStatus::Read));
}

#[tokio::test]
async fn csv_export_is_an_attachment() {
    let app = support::TestApp::new();
    app.post_json("/api/contact-messages", None, enquiry()).await;
    let token = app.admin_token().await;

    let resp = app
        .get("/api/contact-messages/export?format=csv", Some(&token))
        .await;
    let (status, headers, body) = support::read_body(resp).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "text/csv; charset=utf-8");
    let disposition = headers[header::CONTENT_DISPOSITION].to_str().unwrap();
    assert!(disposition.starts_with("attachment; filename=\"contact_messages_2025-03-10"));
    let body = String::from_utf8(body).unwrap();
    assert_eq!(body.lines().count(), 2, "header plus one row: {body}");
    assert!(body.contains("visitor@example.com"));
}

#[tokio::test]
async fn export_needs_a_known_format() {
    let app = support::TestApp::new();
    let token = app.admin_token().await;

    let resp = app
        .get("/api/contact-messages/export?format=xml", Some(&token))
        .await;
    let json = support::expect_validation_error(resp).await;
    assert_eq!(json["errors"]["format"][0], "The selected format is invalid.");
}

#[tokio::test]
async fn bulk_update_reports_the_action() {
    let app = support::TestApp::new();
    let first = app.post_json("/api/contact-messages", None, enquiry()).await;
    let first = support::expect_success(first, StatusCode::CREATED).await["id"]
        .as_i64()
        .unwrap();
    let token = app.admin_token().await;

    let resp = app
        .post_json(
            "/api/contact-messages/bulk-update",
            Some(&token),
            json!({ "ids": [first], "action": "mark_closed" }),
        )
        .await;
    let (status, json) = support::read_json(resp).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Messages marked as closed");
    assert_eq!(app.messages.status_of(first), Some(MessageStatus::Closed));
}
