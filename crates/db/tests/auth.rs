//! Integration tests for the auth and object storage clients.

use assert_matches::assert_matches;
use folio_db::remote::{
    AuthClient, RemoteClient, RemoteConfig, StorageClient, PROJECT_IMAGES_BUCKET,
};
use folio_db::StoreError;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> RemoteClient {
    RemoteClient::new(RemoteConfig::new(server.uri(), "anon-key"))
}

#[tokio::test]
async fn sign_in_returns_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "password"))
        .and(body_json(json!({ "email": "admin@example.com", "password": "hunter2" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok-1",
            "refresh_token": "ref-1",
            "expires_in": 3600,
            "token_type": "bearer",
            "user": { "id": "u-1", "email": "admin@example.com" }
        })))
        .mount(&server)
        .await;

    let session = AuthClient::new(client(&server))
        .sign_in("admin@example.com", "hunter2")
        .await
        .unwrap();

    assert_eq!(session.access_token, "tok-1");
    assert_eq!(session.user.id, "u-1");
    assert_eq!(session.expires_in, Some(3600));
}

#[tokio::test]
async fn sign_in_failure_surfaces_backend_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "Invalid login credentials"
        })))
        .mount(&server)
        .await;

    let err = AuthClient::new(client(&server))
        .sign_in("admin@example.com", "wrong")
        .await
        .unwrap_err();

    assert_matches!(
        err,
        StoreError::Backend { status: 400, message } if message == "Invalid login credentials"
    );
}

#[tokio::test]
async fn current_user_uses_the_callers_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "id": "u-1", "email": "admin@example.com" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .and(header("authorization", "Bearer stale"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "msg": "invalid JWT" })))
        .mount(&server)
        .await;

    let auth = AuthClient::new(client(&server));

    let user = auth.current_user("tok-1").await.unwrap();
    assert_eq!(user.map(|u| u.id).as_deref(), Some("u-1"));

    assert_eq!(auth.current_user("stale").await.unwrap(), None);
}

#[tokio::test]
async fn sign_out_posts_logout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/logout"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    AuthClient::new(client(&server))
        .sign_out("tok-1")
        .await
        .unwrap();
}

#[tokio::test]
async fn upload_returns_public_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path_regex(r"^/storage/v1/object/project-images/[0-9a-f-]{36}\.jpg$"))
        .and(header("x-upsert", "true"))
        .and(header("content-type", "image/jpeg"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Key": "ignored" })))
        .expect(1)
        .mount(&server)
        .await;

    let url = StorageClient::new(client(&server))
        .upload(PROJECT_IMAGES_BUCKET, "cover.jpg", vec![0xff, 0xd8], "image/jpeg")
        .await
        .unwrap();

    let prefix = format!("{}/storage/v1/object/public/project-images/", server.uri());
    assert!(url.starts_with(&prefix), "unexpected url {url}");
    assert!(url.ends_with(".jpg"));
}
