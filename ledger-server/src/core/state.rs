use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::SessionStore;
use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// Shared server state
///
/// Holds the connection pool and the session store. Cloning is cheap (pool
/// is internally reference-counted, sessions are behind an Arc), so every
/// request handler receives its own copy via axum `State`.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// Admin session store (replaces the process-global token set)
    pub sessions: Arc<SessionStore>,
}

impl ServerState {
    pub fn new(config: Config, pool: SqlitePool, sessions: Arc<SessionStore>) -> Self {
        Self {
            config,
            pool,
            sessions,
        }
    }

    /// Initialize state: working directory, database pool + migrations,
    /// session store.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        config
            .ensure_work_dir()
            .map_err(|e| AppError::internal(format!("Failed to create work dir: {e}")))?;

        let db_path = config.database_path();
        let db_service = DbService::new(&db_path.to_string_lossy()).await?;

        let sessions = Arc::new(SessionStore::new(config.session_ttl));

        Ok(Self::new(config.clone(), db_service.pool, sessions))
    }

    /// Start background tasks. Must be called before `Server::run()` serves
    /// traffic. Currently: periodic sweep of expired session tokens.
    pub fn start_background_tasks(&self) {
        self.sessions.clone().start_sweeper();
    }
}
