//! Admin session gate and its axum extractor.
//!
//! A session is the hosted auth service's access token, carried either as a
//! Bearer header (API clients) or in the [`SESSION_COOKIE`] set by login
//! (the admin page). The gate asks the auth service on every check; a token
//! revoked while a page is open is only noticed on the next request.

use axum::extract::FromRequestParts;
use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::request::Parts;
use axum::http::HeaderMap;
use folio_core::error::CoreError;
use folio_db::remote::{AuthClient, AuthUser};
use serde::Serialize;

use crate::error::AppError;
use crate::state::AppState;

/// Cookie holding the access token for browser sessions.
pub const SESSION_COOKIE: &str = "folio_session";

/// Where a caller stands with respect to the admin area.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GateState {
    /// Lookup not resolved yet.
    #[default]
    Checking,
    Authenticated { user: AuthUser },
    Unauthenticated,
}

impl GateState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, GateState::Authenticated { .. })
    }
}

/// Resolves tokens to users through the hosted auth service.
pub struct SessionGate {
    auth: Option<AuthClient>,
}

impl SessionGate {
    /// `None` disables the admin area: every check is unauthenticated.
    pub fn new(auth: Option<AuthClient>) -> Self {
        Self { auth }
    }

    pub fn auth(&self) -> Option<&AuthClient> {
        self.auth.as_ref()
    }

    pub async fn check(&self, token: Option<&str>) -> GateState {
        let (Some(auth), Some(token)) = (self.auth.as_ref(), token) else {
            return GateState::Unauthenticated;
        };

        match auth.current_user(token).await {
            Ok(Some(user)) => GateState::Authenticated { user },
            Ok(None) => GateState::Unauthenticated,
            Err(e) => {
                tracing::warn!(error = %e, "Session lookup failed");
                GateState::Unauthenticated
            }
        }
    }
}

/// Token from `Authorization: Bearer ...`, else from the session cookie.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty());
    if let Some(token) = bearer {
        return Some(token.to_string());
    }

    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

/// `Set-Cookie` value storing `token`.
pub fn session_cookie(token: &str, max_age_secs: Option<i64>) -> String {
    let mut cookie = format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax");
    if let Some(max_age) = max_age_secs {
        cookie.push_str(&format!("; Max-Age={max_age}"));
    }
    cookie
}

/// `Set-Cookie` value that removes the session cookie.
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// A verified admin, extracted from the request's session token.
///
/// ```ignore
/// async fn handler(admin: AdminSession) -> AppResult<Json<()>> { ... }
/// ```
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub user: AuthUser,
    pub token: String,
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = session_token(&parts.headers).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Missing session".into()))
        })?;

        match state.gate.check(Some(&token)).await {
            GateState::Authenticated { user } => Ok(AdminSession { user, token }),
            _ => Err(AppError::Core(CoreError::Unauthorized(
                "Invalid or expired session".into(),
            ))),
        }
    }
}
