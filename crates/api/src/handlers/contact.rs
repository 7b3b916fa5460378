//! Handler for the public contact form.

use axum::extract::State;
use axum::Json;
use folio_core::message::ContactForm;
use folio_events::Notice;

use crate::contact;
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/contact
pub async fn submit(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> AppResult<Json<DataResponse<Notice>>> {
    let notice = contact::submit(&state, &form).await?;
    Ok(Json(DataResponse { data: notice }))
}
