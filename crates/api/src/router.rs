//! The one place the folio route tree meets its middleware.
//!
//! `main.rs` and the integration tests both serve [`build_app_router`], so
//! a request in a test passes through the same layers as in production.

use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE, COOKIE};
use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum::body::Body;
use axum::http::Response;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

const REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Site pages, `/health` and `/api/v1` behind one middleware stack.
///
/// Layers, outermost first:
///
/// - CORS for the configured front-end origins (cookies allowed, so the
///   admin session travels cross-origin in development)
/// - `x-request-id` assigned, traced, and echoed on the response
/// - timeout on reaching response headers; an open `/admin/notices`
///   stream is not cut off once it has started
/// - gzip, skipped by default for `text/event-stream`
/// - panics turned into 500s
///
/// Unknown `/api/v1` paths get a JSON 404; every other unknown path falls
/// through to the static site and then its not-found page.
pub fn build_app_router(state: AppState) -> Router {
    let config = state.config.clone();

    let middleware = ServiceBuilder::new()
        .layer(cors_layer(&config))
        .map_response(|res: Response<_>| res.map(Body::new))
        .layer(SetRequestIdLayer::new(REQUEST_ID, MakeRequestUuid))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(PropagateRequestIdLayer::new(REQUEST_ID))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(CompressionLayer::new())
        .layer(CatchPanicLayer::new());

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .merge(routes::pages::router(&state))
        .layer(middleware)
        .with_state(state)
}

/// CORS for `CORS_ORIGINS`. An origin that is not a valid header value
/// stops startup.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .unwrap_or_else(|e| panic!("CORS_ORIGINS entry '{origin}' is invalid: {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::PATCH, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION, COOKIE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(60 * 60))
}
