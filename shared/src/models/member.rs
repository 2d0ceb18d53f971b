//! Member Model

use serde::{Deserialize, Serialize};

/// Association member
///
/// Deactivation is a soft flip of `is_active`; rows are never removed so
/// historical payment attribution stays intact.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Member {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create member payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberCreate {
    #[serde(default)]
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Update member payload
///
/// `is_active` omitted means the member stays (or becomes) active.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberUpdate {
    #[serde(default)]
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub is_active: Option<bool>,
}
