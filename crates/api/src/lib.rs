//! Development content API for the marketing site.
//!
//! Serves `/cms/*` (posts, landing copy, images) on top of a static file
//! server for everything else.

pub mod body;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

pub use config::AppConfig;
pub use state::AppState;

/// Build the application: routes plus the middleware stack.
pub fn build_app(state: AppState) -> Router {
    let cms_enabled = state.config().cms_enabled;
    let max_body_bytes = state.config().max_body_bytes;

    let app = routes::build_router(state)
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(middleware::cors::cors_layer());
    let app = if cms_enabled {
        app.layer(axum::middleware::from_fn(middleware::cors::preflight))
    } else {
        app
    };
    app.layer(middleware::request_tracing::trace_layer())
}
