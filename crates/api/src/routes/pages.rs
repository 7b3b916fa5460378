use axum::handler::Handler;
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;

use crate::handlers::pages;
use crate::state::AppState;

/// Page routes at the root, with static assets from `SITE_DIR` behind
/// them and the not-found page for anything else.
///
/// ```text
/// GET    /          -> shell
/// GET    /login     -> shell
/// GET    /admin     -> admin (redirects to /login without a session)
/// GET    /*         -> site asset, else not_found (404)
/// ```
pub fn router(state: &AppState) -> Router<AppState> {
    let assets = ServeDir::new(&state.config.site_dir)
        .not_found_service(pages::not_found.with_state(state.clone()));

    Router::new()
        .route("/", get(pages::shell))
        .route("/login", get(pages::shell))
        .route("/admin", get(pages::admin))
        .fallback_service(assets)
}
