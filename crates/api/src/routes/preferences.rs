use axum::routing::{get, post};
use axum::Router;

use crate::handlers::preferences;
use crate::state::AppState;

/// Routes mounted at `/preferences`.
///
/// ```text
/// GET    /                  -> get
/// PUT    /                  -> update
/// POST   /language/toggle   -> toggle_language
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(preferences::get).put(preferences::update))
        .route("/language/toggle", post(preferences::toggle_language))
}
