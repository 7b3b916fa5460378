//! Admin dashboard handlers: overview counters, the notice stream, and
//! image uploads.

use std::convert::Infallible;
use std::time::Duration;

use axum::extract::{Multipart, State};
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::Json;
use folio_core::error::CoreError;
use folio_core::project::ProjectStats;
use folio_db::remote::PROJECT_IMAGES_BUCKET;
use futures::Stream;
use serde::Serialize;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;

use crate::error::{AppError, AppResult};
use crate::middleware::session::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct StoreSummary {
    pub loaded: bool,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct Overview {
    pub user_email: Option<String>,
    pub projects: StoreSummary,
    pub project_stats: ProjectStats,
    pub testimonials: StoreSummary,
    pub messages: StoreSummary,
    pub unread_messages: usize,
}

#[derive(Debug, Serialize)]
pub struct Upload {
    pub url: String,
}

/// GET /api/v1/admin/overview
pub async fn overview(
    admin: AdminSession,
    State(state): State<AppState>,
) -> Json<DataResponse<Overview>> {
    let projects = state.projects.list().await;
    let messages = state.messages.list().await;

    Json(DataResponse {
        data: Overview {
            user_email: admin.user.email,
            projects: StoreSummary {
                loaded: state.projects.is_loaded(),
                count: projects.len(),
            },
            project_stats: ProjectStats::of(&projects),
            testimonials: StoreSummary {
                loaded: state.testimonials.is_loaded(),
                count: state.testimonials.len().await,
            },
            messages: StoreSummary {
                loaded: state.messages.is_loaded(),
                count: messages.len(),
            },
            unread_messages: messages.iter().filter(|m| !m.read).count(),
        },
    })
}

/// GET /api/v1/admin/notices
///
/// Server-sent events, one `notice` event per published notice. A client
/// that falls behind skips the notices it missed.
pub async fn notices(
    _admin: AdminSession,
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = BroadcastStream::new(state.notifier.bus().subscribe()).filter_map(|item| {
        match item {
            Ok(notice) => match Event::default().event("notice").json_data(&notice) {
                Ok(event) => Some(Ok(event)),
                Err(e) => {
                    tracing::warn!(error = %e, "Could not encode notice");
                    None
                }
            },
            Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                tracing::debug!(skipped, "Notice subscriber lagged");
                None
            }
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::new().interval(Duration::from_secs(15)))
}

/// POST /api/v1/admin/uploads/project-image
///
/// Multipart body with one `file` field. Returns the public URL to store
/// as the project's image.
pub async fn upload_project_image(
    _admin: AdminSession,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<DataResponse<Upload>>> {
    let storage = state.storage.clone().ok_or_else(|| {
        AppError::Core(CoreError::MissingConfig(
            "image uploads require BACKEND_URL and BACKEND_KEY".into(),
        ))
    })?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        if !content_type.starts_with("image/") {
            return Err(AppError::BadRequest(format!(
                "expected an image, got {content_type}"
            )));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        let url = storage
            .upload(PROJECT_IMAGES_BUCKET, &file_name, bytes.to_vec(), &content_type)
            .await?;

        return Ok(Json(DataResponse { data: Upload { url } }));
    }

    Err(AppError::BadRequest("missing 'file' field".into()))
}
