//! Integration tests for the remote table adapter.
//!
//! A `wiremock` server stands in for the hosted backend's REST interface;
//! each test checks the request shape and the mapping back to domain
//! records.

use assert_matches::assert_matches;
use folio_core::message::{ContactMessage, ContactMessagePatch, NewContactMessage};
use folio_core::project::{NewProject, Project, ProjectPatch};
use folio_db::remote::{RemoteClient, RemoteConfig, RemoteTable};
use folio_db::{Backend, StoreError};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const KEY: &str = "anon-key";

fn table<E: folio_db::remote::rows::WireRecord>(server: &MockServer) -> RemoteTable<E> {
    RemoteTable::new(RemoteClient::new(RemoteConfig::new(server.uri(), KEY)))
}

fn project_row(id: i64, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "short_description": "short",
        "full_description": "long",
        "tags": ["Rust"],
        "image_url": "/placeholder.svg",
        "repository_url": "https://git.example/r",
        "demo_url": "",
        "is_featured": false,
        "created_at": "2024-06-01T08:00:00Z"
    })
}

// ---------------------------------------------------------------------------
// Fetch
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_all_orders_newest_first_and_sends_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/projects"))
        .and(query_param("order", "created_at.desc"))
        .and(header("apikey", KEY))
        .and(header("authorization", format!("Bearer {KEY}").as_str()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([project_row(2, "Newer"), project_row(1, "Older")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let projects = table::<Project>(&server).fetch_all().await.unwrap();

    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].id, "2");
    assert_eq!(projects[0].title, "Newer");
    assert_eq!(projects[0].repo_url, "https://git.example/r");
}

#[tokio::test]
async fn backend_error_carries_status_and_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/contact_messages"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "JWT expired" })),
        )
        .mount(&server)
        .await;

    let err = table::<ContactMessage>(&server)
        .fetch_all()
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
    assert_matches!(err, StoreError::Backend { status: 401, message } if message == "JWT expired");
}

// ---------------------------------------------------------------------------
// Insert
// ---------------------------------------------------------------------------

#[tokio::test]
async fn insert_sends_wire_columns_and_returns_stored_row() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/contact_messages"))
        .and(header("prefer", "return=representation"))
        .and(body_json(json!({
            "nombre": "Ana",
            "email": "ana@example.com",
            "mensaje": "Hola"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([{
            "id": 77,
            "nombre": "Ana",
            "email": "ana@example.com",
            "mensaje": "Hola",
            "created_at": "2024-06-01T08:00:00Z",
            "read": null
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let stored = table::<ContactMessage>(&server)
        .insert(&NewContactMessage {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            message: "Hola".into(),
        })
        .await
        .unwrap();

    assert_eq!(stored.id, "77");
    assert_eq!(stored.name, "Ana");
    assert!(!stored.read);
}

#[tokio::test]
async fn insert_without_returned_row_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/projects"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([])))
        .mount(&server)
        .await;

    let new = NewProject {
        title: "Demo".into(),
        description: "d".into(),
        full_description: String::new(),
        tags: vec![],
        image_url: "/placeholder.svg".into(),
        repo_url: String::new(),
        demo_url: String::new(),
        featured: false,
    };
    let err = table::<Project>(&server).insert(&new).await.unwrap_err();
    assert_matches!(err, StoreError::EmptyResponse);
}

// ---------------------------------------------------------------------------
// Update / delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_targets_one_id_with_only_named_columns() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/projects"))
        .and(query_param("id", "eq.5"))
        .and(body_json(json!({ "is_featured": true })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let patch = ProjectPatch {
        featured: Some(true),
        ..Default::default()
    };
    table::<Project>(&server).update("5", &patch).await.unwrap();
}

#[tokio::test]
async fn empty_patch_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    table::<ContactMessage>(&server)
        .update("5", &ContactMessagePatch::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn delete_targets_one_id() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/rest/v1/contact_messages"))
        .and(query_param("id", "eq.9"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    table::<ContactMessage>(&server).delete("9").await.unwrap();
}

#[tokio::test]
async fn reset_is_unsupported_remotely() {
    let server = MockServer::start().await;
    let err = table::<Project>(&server).reset().await.unwrap_err();
    assert_matches!(err, StoreError::Unsupported("remote"));
}
