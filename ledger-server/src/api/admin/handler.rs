//! Admin session handlers

use axum::{
    Json,
    extract::State,
    extract::rejection::JsonRejection,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};

use crate::auth::bearer_token;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult};
use shared::client::{LoginRequest, LoginResponse, StatusResponse, SuccessResponse};

/// POST /api/admin/login
///
/// Exactly one credential pair is accepted; any mismatch fails with 401 and
/// no token is issued.
pub async fn login(
    State(state): State<ServerState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<Json<LoginResponse>> {
    let Json(req) = payload.map_err(|rej| AppError::validation(rej.body_text()))?;

    if req.username != state.config.admin_username
        || req.password != state.config.admin_password
    {
        tracing::warn!(username = %req.username, "Login failed - invalid credentials");
        return Err(AppError::invalid_credentials());
    }

    let token = state.sessions.issue();
    tracing::info!("Admin logged in");

    Ok(Json(LoginResponse {
        success: true,
        token,
    }))
}

/// GET /api/admin/status
///
/// Pure membership check; expired and unknown tokens answer the same way.
pub async fn status(State(state): State<ServerState>, headers: HeaderMap) -> Response {
    let authenticated = bearer_token(&headers)
        .map(|t| state.sessions.validate(t))
        .unwrap_or(false);

    if authenticated {
        Json(StatusResponse {
            authenticated: true,
        })
        .into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(StatusResponse {
                authenticated: false,
            }),
        )
            .into_response()
    }
}

/// POST /api/admin/logout
///
/// Removes the presented token immediately. Always reports success, even
/// when no (valid) token was presented.
pub async fn logout(State(state): State<ServerState>, headers: HeaderMap) -> Json<SuccessResponse> {
    if let Some(token) = bearer_token(&headers) {
        state.sessions.revoke(token);
        tracing::info!("Admin logged out");
    }

    Json(SuccessResponse::plain())
}
