//! Member Repository

use sqlx::SqlitePool;

use super::RepoResult;
use shared::models::{Member, MemberCreate, MemberUpdate};
use shared::util::{now_millis, snowflake_id};

/// Active members only, name ascending. The public listing.
pub async fn find_active(pool: &SqlitePool) -> RepoResult<Vec<Member>> {
    let rows = sqlx::query_as::<_, Member>(
        "SELECT id, name, email, phone, is_active, created_at, updated_at \
         FROM members WHERE is_active = 1 ORDER BY name ASC",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Every member including deactivated ones. Feeds the admin console,
/// which needs to show and reactivate inactive rows.
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Member>> {
    let rows = sqlx::query_as::<_, Member>(
        "SELECT id, name, email, phone, is_active, created_at, updated_at \
         FROM members ORDER BY name ASC",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Insert a member; the unique name index rejects duplicates across both
/// active and inactive rows. Returns the new ID.
pub async fn create(pool: &SqlitePool, data: MemberCreate) -> RepoResult<i64> {
    let now = now_millis();
    let id = snowflake_id();
    sqlx::query(
        "INSERT INTO members (id, name, email, phone, is_active, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, 1, ?5, ?5)",
    )
    .bind(id)
    .bind(&data.name)
    .bind(&data.email)
    .bind(&data.phone)
    .bind(now)
    .execute(pool)
    .await?;
    Ok(id)
}

/// Full replace of the editable fields. `is_active` omitted keeps/returns
/// the member active, mirroring the admin edit form.
pub async fn update(pool: &SqlitePool, id: i64, data: MemberUpdate) -> RepoResult<u64> {
    let now = now_millis();
    let is_active = data.is_active.unwrap_or(true);
    let result = sqlx::query(
        "UPDATE members SET name = ?1, email = ?2, phone = ?3, is_active = ?4, updated_at = ?5 \
         WHERE id = ?6",
    )
    .bind(&data.name)
    .bind(&data.email)
    .bind(&data.phone)
    .bind(is_active)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

/// Soft delete: flip is_active off, keep the row forever
pub async fn deactivate(pool: &SqlitePool, id: i64) -> RepoResult<u64> {
    let now = now_millis();
    let result = sqlx::query("UPDATE members SET is_active = 0, updated_at = ?1 WHERE id = ?2")
        .bind(now)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
