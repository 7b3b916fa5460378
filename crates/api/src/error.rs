use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_core::error::CoreError;
use folio_db::StoreError;
use folio_events::EmailError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps the per-layer errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `folio_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A persistence error from either adapter.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Contact email delivery failed.
    #[error(transparent)]
    Email(#[from] EmailError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::MissingConfig(msg) => {
                    tracing::warn!(error = %msg, "Missing configuration");
                    (StatusCode::SERVICE_UNAVAILABLE, "CONFIG_ERROR", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        INTERNAL_MESSAGE.to_string(),
                    )
                }
            },

            // --- Persistence errors ---
            AppError::Store(err) => classify_store_error(err),

            // --- Email errors ---
            AppError::Email(err) => match err {
                EmailError::MissingConfig(_) => {
                    tracing::warn!(error = %err, "Email delivery not configured");
                    (StatusCode::SERVICE_UNAVAILABLE, "CONFIG_ERROR", err.to_string())
                }
                EmailError::Api { .. } | EmailError::Request(_) => {
                    tracing::error!(error = %err, "Email delivery failed");
                    (StatusCode::BAD_GATEWAY, "EMAIL_ERROR", err.to_string())
                }
            },

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    INTERNAL_MESSAGE.to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a persistence error into an HTTP status, error code, and message.
///
/// - Backend 401/403 maps to 401 (the hosted backend rejected the key).
/// - Other backend statuses and transport failures map to 502 with the
///   backend's message, which is what the admin notice shows.
/// - Local I/O and corrupt data map to 500 with a sanitized message.
fn classify_store_error(err: &StoreError) -> (StatusCode, &'static str, String) {
    match err {
        StoreError::Backend { .. } if err.is_unauthorized() => {
            (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", err.to_string())
        }
        StoreError::Backend { .. } | StoreError::EmptyResponse | StoreError::Request(_) => {
            tracing::error!(error = %err, "Backend error");
            (StatusCode::BAD_GATEWAY, "BACKEND_ERROR", err.to_string())
        }
        StoreError::Unsupported(_) => (StatusCode::BAD_REQUEST, "UNSUPPORTED", err.to_string()),
        StoreError::Io(_) | StoreError::Corrupt { .. } | StoreError::Serialize(_) => {
            tracing::error!(error = %err, "Storage error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                INTERNAL_MESSAGE.to_string(),
            )
        }
    }
}
