//! Member API module

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::auth::require_auth;
use crate::core::ServerState;

pub fn router(state: ServerState) -> Router<ServerState> {
    // The active-member list is public
    let read_routes = Router::new().route("/api/members", get(handler::list));

    // Create / edit / soft-delete and the full listing require a live
    // admin session
    let manage_routes = Router::new()
        .route("/api/members", post(handler::create))
        .route("/api/members/all", get(handler::list_all))
        .route(
            "/api/members/{id}",
            put(handler::update).delete(handler::deactivate),
        )
        .layer(middleware::from_fn_with_state(state, require_auth));

    read_routes.merge(manage_routes)
}
