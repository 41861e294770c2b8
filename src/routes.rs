//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`        - Service banner
//! - `GET  /health`  - Health check
//! - `/api/tasks*`   - Task REST API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{banner_handler, health_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and the tracing layer.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(banner_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::task_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Wraps [`router`] so that `/api/tasks/` and `/api/tasks` resolve to the same route.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
