//! Route definitions for the admin area. Every handler behind these routes
//! takes an `AdminSession`.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::{admin, messages, projects, testimonials};
use crate::state::AppState;

/// Largest accepted image upload.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /overview                   -> overview
/// GET    /notices                    -> notices (SSE)
///
/// POST   /projects                   -> create
/// PATCH  /projects/{id}              -> update
/// PUT    /projects/{id}              -> replace
/// DELETE /projects/{id}              -> delete
/// POST   /projects/reset             -> reset
/// POST   /projects/refresh           -> refresh
///
/// POST   /testimonials               -> create
/// PATCH  /testimonials/{id}          -> update
/// DELETE /testimonials/{id}          -> delete
/// POST   /testimonials/refresh       -> refresh
///
/// GET    /messages                   -> list
/// PATCH  /messages/{id}              -> update
/// DELETE /messages/{id}              -> delete
/// POST   /messages/refresh           -> refresh
///
/// POST   /uploads/project-image      -> upload_project_image
/// ```
pub fn router() -> Router<AppState> {
    let project_routes = Router::new()
        .route("/", post(projects::create))
        .route(
            "/{id}",
            patch(projects::update)
                .put(projects::replace)
                .delete(projects::delete),
        )
        .route("/reset", post(projects::reset))
        .route("/refresh", post(projects::refresh));

    let testimonial_routes = Router::new()
        .route("/", post(testimonials::create))
        .route(
            "/{id}",
            patch(testimonials::update).delete(testimonials::delete),
        )
        .route("/refresh", post(testimonials::refresh));

    let message_routes = Router::new()
        .route("/", get(messages::list))
        .route("/{id}", patch(messages::update).delete(messages::delete))
        .route("/refresh", post(messages::refresh));

    Router::new()
        .route("/overview", get(admin::overview))
        .route("/notices", get(admin::notices))
        .nest("/projects", project_routes)
        .nest("/testimonials", testimonial_routes)
        .nest("/messages", message_routes)
        .route(
            "/uploads/project-image",
            post(admin::upload_project_image).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
}
