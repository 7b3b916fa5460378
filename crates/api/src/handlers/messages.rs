//! Handlers for received contact messages (admin only).

use axum::extract::{Path, State};
use axum::Json;
use folio_core::message::{ContactMessage, ContactMessagePatch};

use super::projects::Deleted;
use crate::error::AppResult;
use crate::middleware::session::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/messages
pub async fn list(
    _admin: AdminSession,
    State(state): State<AppState>,
) -> Json<DataResponse<Vec<ContactMessage>>> {
    Json(DataResponse {
        data: state.messages.list().await,
    })
}

/// PATCH /api/v1/admin/messages/{id}
pub async fn update(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ContactMessagePatch>,
) -> AppResult<Json<DataResponse<ContactMessage>>> {
    let data = state.messages.update(&id, patch).await?;
    Ok(Json(DataResponse { data }))
}

/// DELETE /api/v1/admin/messages/{id}
pub async fn delete(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<Deleted>>> {
    let deleted = state.messages.delete(&id).await?;
    Ok(Json(DataResponse {
        data: Deleted { deleted },
    }))
}

/// POST /api/v1/admin/messages/refresh
pub async fn refresh(
    _admin: AdminSession,
    State(state): State<AppState>,
) -> Json<DataResponse<Vec<ContactMessage>>> {
    state.messages.refresh().await;
    Json(DataResponse {
        data: state.messages.list().await,
    })
}
