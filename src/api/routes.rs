//! API route configuration.

use crate::api::handlers::create_handler;
use crate::api::middleware::auth;
use crate::state::AppState;
use axum::{Router, middleware, routing::post};

/// Routes called by the chat web client on behalf of a logged-in user.
///
/// # Endpoints
///
/// - `POST /create` - Open a documentation issue for a post
///
/// Every route requires the caller identity header (see [`auth::layer`]).
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_handler))
        .route_layer(middleware::from_fn(auth::layer))
}
