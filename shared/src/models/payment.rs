//! Payment Model

use serde::{Deserialize, Serialize};

/// One dues contribution
///
/// `member_name` is a denormalized display string, not a member reference:
/// renaming or deactivating a member never rewrites historical payments.
/// Payments are immutable once recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Payment {
    pub id: i64,
    pub member_name: String,
    pub amount: f64,
    /// ISO date string (`YYYY-MM-DD`), may carry a time suffix from older rows
    pub payment_date: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create payment payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentCreate {
    #[serde(default)]
    pub member_name: String,
    pub amount: f64,
    #[serde(default)]
    pub payment_date: String,
}
