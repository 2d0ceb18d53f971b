//! Payment Repository
//!
//! Insert and list only — payments are immutable once recorded.

use sqlx::SqlitePool;

use super::RepoResult;
use shared::models::{Payment, PaymentCreate};
use shared::util::{now_millis, snowflake_id};

/// Every payment, newest payment date first, ties broken by creation time
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Payment>> {
    let rows = sqlx::query_as::<_, Payment>(
        "SELECT id, member_name, amount, payment_date, created_at, updated_at \
         FROM payments ORDER BY payment_date DESC, created_at DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Record a contribution. `member_name` is stored as given (free text);
/// no reference to the members table is created. Returns the new ID.
pub async fn create(pool: &SqlitePool, data: PaymentCreate) -> RepoResult<i64> {
    let now = now_millis();
    let id = snowflake_id();
    sqlx::query(
        "INSERT INTO payments (id, member_name, amount, payment_date, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
    )
    .bind(id)
    .bind(&data.member_name)
    .bind(data.amount)
    .bind(&data.payment_date)
    .bind(now)
    .execute(pool)
    .await?;
    Ok(id)
}
