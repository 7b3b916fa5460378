//! Handlers for the `/projects` resource (public) and its admin CRUD.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::project::{
    filter_by_tag, tag_menu, Project, ProjectForm, ProjectPatch,
};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::middleware::session::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ProjectQuery {
    pub tag: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Deleted {
    pub deleted: bool,
}

/// GET /api/v1/projects?tag=
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ProjectQuery>,
) -> Json<DataResponse<Vec<Project>>> {
    let projects = state.projects.list().await;
    let tag = query.tag.as_deref().filter(|t| !t.is_empty());
    let data = filter_by_tag(&projects, tag).into_iter().cloned().collect();
    Json(DataResponse { data })
}

/// GET /api/v1/projects/tags
pub async fn tags(State(state): State<AppState>) -> Json<DataResponse<Vec<String>>> {
    let projects = state.projects.list().await;
    Json(DataResponse {
        data: tag_menu(&projects),
    })
}

/// POST /api/v1/admin/projects
pub async fn create(
    _admin: AdminSession,
    State(state): State<AppState>,
    Json(form): Json<ProjectForm>,
) -> AppResult<(StatusCode, Json<DataResponse<Project>>)> {
    let new = form.into_new()?;
    let project = state.projects.add(new).await?;
    tracing::info!(id = %project.id, title = %project.title, "Project created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

/// PATCH /api/v1/admin/projects/{id}
///
/// Named fields go through the same trimming and required-field rules as a
/// full draft; unknown field names are rejected by the extractor.
pub async fn update(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ProjectPatch>,
) -> AppResult<Json<DataResponse<Project>>> {
    let data = state.projects.update(&id, patch.validated()?).await?;
    Ok(Json(DataResponse { data }))
}

/// PUT /api/v1/admin/projects/{id}
///
/// Saves a whole edit form; every editable field is replaced.
pub async fn replace(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(form): Json<ProjectForm>,
) -> AppResult<Json<DataResponse<Project>>> {
    let patch = ProjectPatch::from(form.into_new()?);
    let data = state.projects.update(&id, patch).await?;
    Ok(Json(DataResponse { data }))
}

/// DELETE /api/v1/admin/projects/{id}
pub async fn delete(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<Deleted>>> {
    let deleted = state.projects.delete(&id).await?;
    Ok(Json(DataResponse {
        data: Deleted { deleted },
    }))
}

/// POST /api/v1/admin/projects/reset
pub async fn reset(
    _admin: AdminSession,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    let data = state.projects.reset().await?;
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/admin/projects/refresh
pub async fn refresh(
    _admin: AdminSession,
    State(state): State<AppState>,
) -> Json<DataResponse<Vec<Project>>> {
    state.projects.refresh().await;
    Json(DataResponse {
        data: state.projects.list().await,
    })
}
