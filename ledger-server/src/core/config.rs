use std::path::PathBuf;
use std::time::Duration;

/// Server configuration
///
/// All items can be overridden through environment variables:
///
/// | Env var | Default | Meaning |
/// |---------|---------|---------|
/// | WORK_DIR | ./data | working directory (database, logs) |
/// | HTTP_PORT | 8080 | HTTP service port |
/// | ADMIN_USERNAME | associacao2025 | the single admin identity |
/// | ADMIN_PASSWORD | associacao123 | its shared secret |
/// | SESSION_TTL_HOURS | 24 | session token lifetime |
/// | ENVIRONMENT | development | development \| production |
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory holding the database file and logs
    pub work_dir: String,
    /// HTTP API service port
    pub http_port: u16,
    /// Admin username (exactly one identity exists)
    pub admin_username: String,
    /// Admin password
    pub admin_password: String,
    /// Session token lifetime
    pub session_ttl: Duration,
    /// Runtime environment: development | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let ttl_hours: u64 = std::env::var("SESSION_TTL_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(24);

        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            admin_username: std::env::var("ADMIN_USERNAME")
                .unwrap_or_else(|_| "associacao2025".into()),
            admin_password: std::env::var("ADMIN_PASSWORD")
                .unwrap_or_else(|_| "associacao123".into()),
            session_ttl: Duration::from_secs(ttl_hours * 3600),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Path of the SQLite database file
    pub fn database_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("ledger.db")
    }

    /// Ensure the working directory exists
    pub fn ensure_work_dir(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.work_dir)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
