#![allow(dead_code)]

use std::path::Path;

use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use folio_api::config::{LogFormat, ServerConfig, StorageMode};
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_db::remote::RemoteConfig;
use folio_events::EmailConfig;
use http_body_util::BodyExt;
use serde_json::json;
use tempfile::TempDir;
use tower::ServiceExt;
use wiremock::matchers::{header as header_eq, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ADMIN_TOKEN: &str = "admin-token";

/// A running app plus the directories it owns.
pub struct TestApp {
    pub state: AppState,
    pub data_dir: TempDir,
    pub site_dir: TempDir,
}

impl TestApp {
    /// A fresh router over the same state (routers are consumed by `oneshot`).
    pub fn router(&self) -> Router {
        build_app_router(self.state.clone())
    }
}

/// Where the test app's external collaborators live.
#[derive(Default)]
pub struct Collaborators<'a> {
    /// Hosted backend (auth, storage); `None` disables admin login.
    pub backend: Option<&'a MockServer>,
    /// Email API; `None` leaves the email credentials unset.
    pub email: Option<&'a MockServer>,
}

/// Build a test `ServerConfig` over the given directories.
pub fn test_config(data_dir: &Path, site_dir: &Path, with: &Collaborators<'_>) -> ServerConfig {
    let email = match with.email {
        Some(server) => EmailConfig {
            api_url: server.uri(),
            service_id: Some("service_test".into()),
            template_id: Some("template_test".into()),
            public_key: Some("public_test".into()),
            private_key: None,
            recipient_name: "Kevin".into(),
        },
        None => EmailConfig::from_lookup(|_| None),
    };

    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        storage_mode: StorageMode::Local,
        data_dir: data_dir.to_path_buf(),
        site_dir: site_dir.to_path_buf(),
        backend: with
            .backend
            .map(|server| RemoteConfig::new(server.uri(), "anon-key")),
        email,
        analytics_id: Some("G-TEST".into()),
        log_format: LogFormat::Pretty,
    }
}

/// Build and load the full application over fresh temp directories.
pub async fn build_test_app(with: Collaborators<'_>) -> TestApp {
    let data_dir = tempfile::tempdir().unwrap();
    let site_dir = tempfile::tempdir().unwrap();
    std::fs::write(site_dir.path().join("index.html"), "<html>folio</html>").unwrap();
    std::fs::write(site_dir.path().join("404.html"), "<html>not found</html>").unwrap();

    let state = AppState::build(test_config(data_dir.path(), site_dir.path(), &with))
        .await
        .unwrap();
    state.load_all().await;

    TestApp {
        state,
        data_dir,
        site_dir,
    }
}

/// Rebuild state over an existing app's directories, as after a restart.
pub async fn restart(app: &TestApp, with: Collaborators<'_>) -> AppState {
    let state = AppState::build(test_config(app.data_dir.path(), app.site_dir.path(), &with))
        .await
        .unwrap();
    state.load_all().await;
    state
}

/// Make the mock backend accept [`ADMIN_TOKEN`] as a signed-in admin.
pub async fn mount_admin(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .and(header_eq("authorization", format!("Bearer {ADMIN_TOKEN}").as_str()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "id": "admin-1", "email": "admin@example.com" })),
        )
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "msg": "invalid JWT" })))
        .mount(server)
        .await;
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn get_auth(app: Router, uri: &str) -> Response<Body> {
    let request = Request::get(uri)
        .header(header::AUTHORIZATION, format!("Bearer {ADMIN_TOKEN}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

fn json_request(
    method: &str,
    uri: &str,
    body: &serde_json::Value,
    auth: bool,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if auth {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {ADMIN_TOKEN}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request("POST", uri, &body, false)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request("PUT", uri, &body, false)).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request("POST", uri, &body, true)).await
}

pub async fn put_json_auth(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request("PUT", uri, &body, true)).await
}

pub async fn patch_json_auth(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request("PATCH", uri, &body, true)).await
}

pub async fn delete_auth(app: Router, uri: &str) -> Response<Body> {
    let request = Request::delete(uri)
        .header(header::AUTHORIZATION, format!("Bearer {ADMIN_TOKEN}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}
