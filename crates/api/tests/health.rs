//! Health endpoint and middleware stack.

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use common::{body_json, build_test_app, get, send, Collaborators};

#[tokio::test]
async fn health_reports_loaded_local_stores() {
    let app = build_test_app(Collaborators::default()).await;

    let response = get(app.router(), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["storage_mode"], "local");
    assert_eq!(json["stores_loaded"], true);
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let app = build_test_app(Collaborators::default()).await;

    let response = get(app.router(), "/health").await;
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn json_responses_are_gzipped_on_request() {
    let app = build_test_app(Collaborators::default()).await;

    let request = Request::get("/api/v1/projects")
        .header(header::ACCEPT_ENCODING, "gzip")
        .body(Body::empty())
        .unwrap();
    let response = send(app.router(), request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_ENCODING], "gzip");
}

#[tokio::test]
async fn cors_preflight_allows_configured_origin_with_credentials() {
    let app = build_test_app(Collaborators::default()).await;

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/v1/admin/projects/1")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PATCH")
        .body(Body::empty())
        .unwrap();
    let response = send(app.router(), request).await;

    let headers = response.headers();
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:5173"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
}
