//! HTTP API
//!
//! One module per resource, each exposing a `router(state)` in the shape
//! `Router<ServerState>`; admin-only routes are wrapped in the bearer
//! middleware inside their own module so the 401 short-circuits before any
//! validation or store access.

pub mod admin;
pub mod members;
pub mod payments;

use axum::Router;
use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// Build the full application router
pub fn create_router(state: ServerState) -> Router {
    // The public site is served from anywhere; mirror its permissive CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .merge(admin::router())
        .merge(payments::router(state.clone()))
        .merge(members::router(state.clone()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
