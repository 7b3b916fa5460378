//! Handlers for testimonials.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::testimonial::{Testimonial, TestimonialForm, TestimonialPatch};

use super::projects::Deleted;
use crate::error::AppResult;
use crate::middleware::session::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/testimonials
pub async fn list(State(state): State<AppState>) -> Json<DataResponse<Vec<Testimonial>>> {
    Json(DataResponse {
        data: state.testimonials.list().await,
    })
}

/// POST /api/v1/admin/testimonials
pub async fn create(
    _admin: AdminSession,
    State(state): State<AppState>,
    Json(form): Json<TestimonialForm>,
) -> AppResult<(StatusCode, Json<DataResponse<Testimonial>>)> {
    let testimonial = state.testimonials.add(form.into_new()?).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: testimonial })))
}

/// PATCH /api/v1/admin/testimonials/{id}
pub async fn update(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<TestimonialPatch>,
) -> AppResult<Json<DataResponse<Testimonial>>> {
    let data = state.testimonials.update(&id, patch.validated()?).await?;
    Ok(Json(DataResponse { data }))
}

/// DELETE /api/v1/admin/testimonials/{id}
pub async fn delete(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<Deleted>>> {
    let deleted = state.testimonials.delete(&id).await?;
    Ok(Json(DataResponse {
        data: Deleted { deleted },
    }))
}

/// POST /api/v1/admin/testimonials/refresh
pub async fn refresh(
    _admin: AdminSession,
    State(state): State<AppState>,
) -> Json<DataResponse<Vec<Testimonial>>> {
    state.testimonials.refresh().await;
    Json(DataResponse {
        data: state.testimonials.list().await,
    })
}
