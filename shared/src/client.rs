//! Client-related types shared between server and client
//!
//! Request/response DTOs for the HTTP API. The wire shapes match what the
//! public site and admin console consume.

use serde::{Deserialize, Serialize};

use crate::models::{Member, Payment};

// =============================================================================
// Admin auth DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response: `{ success: true, token: "..." }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
}

/// Session status response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub authenticated: bool,
}

// =============================================================================
// Resource DTOs
// =============================================================================

/// Payment list envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentsResponse {
    pub payments: Vec<Payment>,
}

/// Member list envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembersResponse {
    pub members: Vec<Member>,
}

/// Create response: success flag plus the new row ID
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Plain success envelope (updates, soft-deletes, logout)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SuccessResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }

    pub fn plain() -> Self {
        Self {
            success: true,
            message: None,
        }
    }
}

/// Error envelope: every failure carries a human-readable `error` string
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
