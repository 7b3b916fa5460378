use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::config::StorageMode;
use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    pub storage_mode: StorageMode,
    /// Whether every entity store finished its initial fetch.
    pub stores_loaded: bool,
}

/// GET /health -- returns service status and store readiness.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let stores_loaded = state.stores_loaded();
    let status = if stores_loaded { "ok" } else { "starting" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        storage_mode: state.config.storage_mode,
        stores_loaded,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
