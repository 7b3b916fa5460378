//! Handlers for visitor preferences.

use axum::extract::State;
use axum::Json;
use folio_core::preferences::{Preferences, UpdatePreferences};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/preferences
pub async fn get(State(state): State<AppState>) -> Json<DataResponse<Preferences>> {
    Json(DataResponse {
        data: state.preferences.get(),
    })
}

/// PUT /api/v1/preferences
pub async fn update(
    State(state): State<AppState>,
    Json(input): Json<UpdatePreferences>,
) -> AppResult<Json<DataResponse<Preferences>>> {
    let data = state.preferences.update(input).await?;
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/preferences/language/toggle
pub async fn toggle_language(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Preferences>>> {
    let data = state.preferences.toggle_language().await?;
    tracing::debug!(language = %data.language, "Language toggled");
    Ok(Json(DataResponse { data }))
}
