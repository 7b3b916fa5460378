//! Page routes for the single-page site shell.
//!
//! Every page is the same `index.html`; the client router picks the view.
//! `/admin` is gated on the session before the shell is served.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::middleware::session::session_token;
use crate::state::AppState;

const INDEX_PAGE: &str = "index.html";
const NOT_FOUND_PAGE: &str = "404.html";

/// GET / and GET /login
pub async fn shell(State(state): State<AppState>) -> Response {
    serve_page(&state, INDEX_PAGE, StatusCode::OK).await
}

/// GET /admin
pub async fn admin(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let token = session_token(&headers);
    if !state.gate.check(token.as_deref()).await.is_authenticated() {
        return Redirect::to("/login").into_response();
    }
    serve_page(&state, INDEX_PAGE, StatusCode::OK).await
}

/// Fallback for unknown paths outside `/api`.
pub async fn not_found(State(state): State<AppState>) -> Response {
    serve_page(&state, NOT_FOUND_PAGE, StatusCode::NOT_FOUND).await
}

async fn serve_page(state: &AppState, page: &str, status: StatusCode) -> Response {
    let path = state.config.site_dir.join(page);
    match tokio::fs::read_to_string(&path).await {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Page not available");
            let fallback = if status == StatusCode::NOT_FOUND {
                "<h1>404</h1>"
            } else {
                "<h1>Site not built</h1>"
            };
            let status = if status == StatusCode::OK {
                StatusCode::NOT_FOUND
            } else {
                status
            };
            (status, Html(fallback)).into_response()
        }
    }
}
