//! Payment API handlers

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::core::ServerState;
use crate::db::repository::payment;
use crate::utils::validation::validate_payment;
use crate::utils::{AppError, AppResult};
use shared::client::{CreatedResponse, PaymentsResponse};
use shared::models::PaymentCreate;

/// GET /api/payments - full ledger, newest first
///
/// No caching layer exists: every call is a fresh query.
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<PaymentsResponse>> {
    let payments = payment::find_all(&state.pool).await?;
    Ok(Json(PaymentsResponse { payments }))
}

/// POST /api/payments - record a contribution (admin)
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<PaymentCreate>, JsonRejection>,
) -> AppResult<Json<CreatedResponse>> {
    let Json(data) = payload.map_err(|rej| AppError::validation(rej.body_text()))?;

    validate_payment(&data)?;

    let id = payment::create(&state.pool, data).await?;
    tracing::info!(id, "Payment recorded");

    Ok(Json(CreatedResponse {
        success: true,
        id,
        message: Some("Pagamento adicionado com sucesso".to_string()),
    }))
}
