//! Admin session routes
//!
//! - `/api/admin/login`: public, issues a session token
//! - `/api/admin/status`: reports whether the presented token is live
//! - `/api/admin/logout`: best-effort token removal, always succeeds

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/admin/login", post(handler::login))
        .route("/api/admin/status", get(handler::status))
        .route("/api/admin/logout", post(handler::logout))
}
