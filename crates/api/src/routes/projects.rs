use axum::routing::get;
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Public routes mounted at `/projects`.
///
/// ```text
/// GET    /?tag=     -> list
/// GET    /tags      -> tags
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(projects::list))
        .route("/tags", get(projects::tags))
}
