//! Shared types for the dues ledger
//!
//! Common types used by both the server and the client: data models,
//! request/response DTOs and small utilities.

pub mod client;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{Member, MemberCreate, MemberUpdate, Payment, PaymentCreate};
