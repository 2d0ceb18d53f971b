//! Member API handlers

use axum::{
    Json,
    extract::{Path, State},
    extract::rejection::JsonRejection,
};

use crate::core::ServerState;
use crate::db::repository::member;
use crate::utils::validation::{
    validate_member_name, validate_optional_email, validate_optional_phone,
};
use crate::utils::{AppError, AppResult};
use shared::client::{CreatedResponse, MembersResponse, SuccessResponse};
use shared::models::{MemberCreate, MemberUpdate};

/// Empty optional strings from the admin form become NULL
fn normalize(opt: Option<String>) -> Option<String> {
    opt.filter(|s| !s.trim().is_empty())
}

/// GET /api/members - active members, name ascending
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<MembersResponse>> {
    let members = member::find_active(&state.pool).await?;
    Ok(Json(MembersResponse { members }))
}

/// GET /api/members/all - every member, inactive included (admin)
pub async fn list_all(State(state): State<ServerState>) -> AppResult<Json<MembersResponse>> {
    let members = member::find_all(&state.pool).await?;
    Ok(Json(MembersResponse { members }))
}

/// POST /api/members - create a member (admin)
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<MemberCreate>, JsonRejection>,
) -> AppResult<Json<CreatedResponse>> {
    let Json(data) = payload.map_err(|rej| AppError::validation(rej.body_text()))?;

    let name = validate_member_name(&data.name)?;
    validate_optional_email(data.email.as_deref())?;
    validate_optional_phone(data.phone.as_deref())?;

    let id = member::create(
        &state.pool,
        MemberCreate {
            name,
            email: normalize(data.email),
            phone: normalize(data.phone),
        },
    )
    .await?;
    tracing::info!(id, "Member created");

    Ok(Json(CreatedResponse {
        success: true,
        id,
        message: Some("Membro adicionado com sucesso".to_string()),
    }))
}

/// PUT /api/members/{id} - edit a member (admin)
///
/// `is_active` omitted means active; the same endpoint reactivates a
/// previously deactivated member.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    payload: Result<Json<MemberUpdate>, JsonRejection>,
) -> AppResult<Json<SuccessResponse>> {
    let Json(data) = payload.map_err(|rej| AppError::validation(rej.body_text()))?;

    let name = validate_member_name(&data.name)?;
    validate_optional_email(data.email.as_deref())?;
    validate_optional_phone(data.phone.as_deref())?;

    member::update(
        &state.pool,
        id,
        MemberUpdate {
            name,
            email: normalize(data.email),
            phone: normalize(data.phone),
            is_active: data.is_active,
        },
    )
    .await?;
    tracing::info!(id, "Member updated");

    Ok(Json(SuccessResponse::new("Membro atualizado com sucesso")))
}

/// DELETE /api/members/{id} - soft-deactivate a member (admin)
///
/// The row stays; historical payments keep displaying the original name.
pub async fn deactivate(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<SuccessResponse>> {
    member::deactivate(&state.pool, id).await?;
    tracing::info!(id, "Member deactivated");

    Ok(Json(SuccessResponse::new("Membro desativado com sucesso")))
}
