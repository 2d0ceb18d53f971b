//! Dues Ledger Server
//!
//! Public payment ledger and single-admin console for an association's
//! membership dues.
//!
//! # Module structure
//!
//! ```text
//! ledger-server/src/
//! ├── core/          # config, state, server
//! ├── auth/          # session store, bearer middleware
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # SQLite pool, repositories
//! └── utils/         # errors, validation, logging
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use auth::SessionStore;
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};
pub use utils::logger::init_logger;

/// Load .env and initialize logging. Call once at process start.
///
/// LOG_LEVEL and LOG_DIR are read here rather than through [`Config`]
/// because logging must be up before configuration is loaded and logged.
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    utils::logger::init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   ______           __       _
  / ____/___ ______/ /____  (_)________ _
 / /   / __ `/ ___/ __/ _ \/ / ___/ __ `/
/ /___/ /_/ / /  / /_/  __/ / /  / /_/ /
\____/\__,_/_/   \__/\___/_/_/   \__,_/
    "#
    );
}
