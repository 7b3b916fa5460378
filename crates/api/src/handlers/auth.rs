//! Handlers for the `/auth` resource.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::HeaderMap;
use axum::response::{AppendHeaders, IntoResponse};
use axum::Json;
use folio_core::error::CoreError;
use folio_db::remote::AuthUser;
use folio_db::StoreError;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::session::{
    clear_session_cookie, session_cookie, session_token, GateState,
};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub expires_in: Option<i64>,
    pub user: AuthUser,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub signed_out: bool,
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let auth = state.gate.auth().ok_or_else(|| {
        AppError::Core(CoreError::MissingConfig(
            "admin login requires BACKEND_URL and BACKEND_KEY".into(),
        ))
    })?;

    let session = auth
        .sign_in(input.email.trim(), &input.password)
        .await
        .map_err(|e| match e {
            StoreError::Backend { message, .. } if !message.trim().is_empty() => {
                AppError::Core(CoreError::Unauthorized(message))
            }
            StoreError::Backend { .. } | StoreError::EmptyResponse => {
                AppError::Core(CoreError::Unauthorized("Invalid credentials".into()))
            }
            other => AppError::Store(other),
        })?;

    let cookie = session_cookie(&session.access_token, session.expires_in);
    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(DataResponse {
            data: LoginResponse {
                access_token: session.access_token,
                expires_in: session.expires_in,
                user: session.user,
            },
        }),
    ))
}

/// POST /api/v1/auth/logout
///
/// Always clears the cookie; a failed remote sign-out is only logged.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let mut signed_out = false;
    if let (Some(auth), Some(token)) = (state.gate.auth(), session_token(&headers)) {
        match auth.sign_out(&token).await {
            Ok(()) => signed_out = true,
            Err(e) => tracing::warn!(error = %e, "Remote sign-out failed"),
        }
    }

    (
        AppendHeaders([(SET_COOKIE, clear_session_cookie())]),
        Json(DataResponse {
            data: LogoutResponse { signed_out },
        }),
    )
}

/// GET /api/v1/auth/session
pub async fn session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<DataResponse<GateState>> {
    let token = session_token(&headers);
    Json(DataResponse {
        data: state.gate.check(token.as_deref()).await,
    })
}
