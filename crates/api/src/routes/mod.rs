pub mod admin;
pub mod auth;
pub mod health;
pub mod pages;
pub mod preferences;
pub mod projects;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use crate::handlers::{contact, site, testimonials};
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /site                                  public site config
/// /i18n/{lang}                           translation table
///
/// /preferences                           get, update (PUT)
/// /preferences/language/toggle           toggle language (POST)
///
/// /projects                              public list (?tag=)
/// /projects/tags                         tag filter menu
/// /testimonials                          public list
/// /contact                               contact form (POST)
///
/// /auth/login                            login (public)
/// /auth/logout                           logout
/// /auth/session                          gate state
///
/// /admin/overview                        counters (admin only)
/// /admin/notices                         notice stream (SSE)
/// /admin/projects                        create
/// /admin/projects/{id}                   update (PATCH), replace (PUT), delete
/// /admin/projects/reset                  reset to seed (POST)
/// /admin/projects/refresh                re-fetch (POST)
/// /admin/testimonials                    create
/// /admin/testimonials/{id}               update (PATCH), delete
/// /admin/testimonials/refresh            re-fetch (POST)
/// /admin/messages                        list
/// /admin/messages/{id}                   update (PATCH), delete
/// /admin/messages/refresh                re-fetch (POST)
/// /admin/uploads/project-image           image upload (POST, multipart)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/site", get(site::info))
        .route("/i18n/{lang}", get(site::translations))
        .nest("/preferences", preferences::router())
        .nest("/projects", projects::router())
        .route("/testimonials", get(testimonials::list))
        .route("/contact", post(contact::submit))
        .nest("/auth", auth::router())
        .nest("/admin", admin::router())
        .fallback(api_not_found)
}

async fn api_not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "No such endpoint", "code": "NOT_FOUND" })),
    )
}
