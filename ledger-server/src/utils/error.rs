//! Unified error handling
//!
//! Every failure is converted at the endpoint boundary into the JSON
//! envelope `{"error": "<human-readable message>"}`. Store failures are
//! logged server-side and surfaced as a generic 500 with no internal
//! detail leaked.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use shared::client::ErrorResponse;

/// Generic message for infrastructure failures (no detail leaks)
pub const INTERNAL_ERROR_MSG: &str = "Erro interno do servidor";

/// Application error
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== Authorization errors (401) ==========
    #[error("Unauthorized - Missing token")]
    Unauthorized,

    #[error("Unauthorized - Invalid token")]
    InvalidToken,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    // ========== Validation errors (400) ==========
    #[error("{0}")]
    Validation(String),

    /// Duplicate member name; friendlier than a raw constraint failure
    #[error("{0}")]
    Duplicate(String),

    // ========== System errors (500) ==========
    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn unauthorized() -> Self {
        Self::Unauthorized
    }

    pub fn invalid_token() -> Self {
        Self::InvalidToken
    }

    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn duplicate(msg: impl Into<String>) -> Self {
        Self::Duplicate(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Unauthorized | AppError::InvalidToken | AppError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }

            AppError::Validation(msg) | AppError::Duplicate(msg) => {
                (StatusCode::BAD_REQUEST, msg.clone())
            }

            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MSG.to_string())
            }

            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MSG.to_string())
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
