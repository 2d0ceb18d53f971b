//! Data models
//!
//! Shared between ledger-server and the client crate (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod member;
pub mod payment;

// Re-exports
pub use member::*;
pub use payment::*;
