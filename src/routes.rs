//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /create`  - Documentation request (caller identity header required)
//! - `GET  /health`  - Health check: chat server reachability and routing (public)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Caller identity** - `Mattermost-User-ID` header on protected routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routes and per-route middleware, without path normalization.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::protected_routes())
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
