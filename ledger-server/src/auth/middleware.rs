//! Bearer-token middleware
//!
//! Admin-only routes are wrapped in [`require_auth`], which rejects the
//! request with 401 before any validation or store access happens.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::core::ServerState;
use crate::utils::AppError;

/// Extract the token from an `Authorization: Bearer <token>` header value
pub fn bearer_token(headers: &http::HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .filter(|t| !t.is_empty())
}

/// Require a live admin session
///
/// Missing, unknown and expired tokens all fail the same way (401); callers
/// cannot tell whether the token was wrong or the server restarted.
pub async fn require_auth(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = match bearer_token(req.headers()) {
        Some(t) => t,
        None => {
            tracing::warn!(uri = %req.uri(), "Missing bearer token");
            return Err(AppError::unauthorized());
        }
    };

    if !state.sessions.validate(token) {
        tracing::warn!(uri = %req.uri(), "Invalid or expired session token");
        return Err(AppError::invalid_token());
    }

    Ok(next.run(req).await)
}
