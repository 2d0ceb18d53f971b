//! Payment API module

mod handler;

use axum::{Router, middleware, routing::get, routing::post};

use crate::auth::require_auth;
use crate::core::ServerState;

pub fn router(state: ServerState) -> Router<ServerState> {
    // Reads are public; the ledger is the whole point
    let read_routes = Router::new().route("/api/payments", get(handler::list));

    // Recording a payment requires a live admin session
    let manage_routes = Router::new()
        .route("/api/payments", post(handler::create))
        .layer(middleware::from_fn_with_state(state, require_auth));

    read_routes.merge(manage_routes)
}
