//! Ledger Client - presentation layer for the dues ledger
//!
//! Typed HTTP client for the ledger API plus the view logic both the public
//! page and the admin console share: name/date filtering over fetched
//! payments and the dashboard statistics computed from the filtered subset.

pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod http;
pub mod stats;
pub mod views;

pub use client::{AdminSession, LedgerClient};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use filter::PaymentFilter;
pub use http::HttpClient;
pub use stats::DashboardStats;

// Re-export shared types for convenience
pub use shared::client::{LoginResponse, StatusResponse};
pub use shared::models::{Member, MemberCreate, MemberUpdate, Payment, PaymentCreate};
