//! Session token store
//!
//! Maps opaque bearer tokens to their expiry instant. Constructed once at
//! startup and shared through [`crate::core::ServerState`]. Entries are
//! plain set membership, so no locking beyond the map's own sharding is
//! needed: a token is either present or absent at check time.

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;

use shared::util::now_millis;

/// Interval between background sweeps of expired tokens
const SWEEP_INTERVAL: Duration = Duration::from_secs(600);

/// In-memory store of admin session tokens
pub struct SessionStore {
    /// token -> expiry (epoch millis)
    sessions: DashMap<String, i64>,
    ttl: Duration,
}

impl SessionStore {
    /// Create a store whose tokens live for `ttl` after issuance
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            ttl,
        }
    }

    /// Issue a fresh opaque token and record it
    pub fn issue(&self) -> String {
        let token = generate_token();
        let expires_at = now_millis() + self.ttl.as_millis() as i64;
        self.sessions.insert(token.clone(), expires_at);
        token
    }

    /// Check whether a token is live. Expired entries are removed on sight
    /// and reported identically to unknown tokens.
    pub fn validate(&self, token: &str) -> bool {
        match self.sessions.get(token).map(|e| *e.value()) {
            Some(expires_at) if expires_at > now_millis() => true,
            Some(_) => {
                self.sessions.remove(token);
                false
            }
            None => false,
        }
    }

    /// Remove a token immediately, independent of its scheduled expiry.
    /// Removing an unknown token is a no-op.
    pub fn revoke(&self, token: &str) {
        self.sessions.remove(token);
    }

    /// Number of live (non-expired) sessions
    pub fn live_count(&self) -> usize {
        let now = now_millis();
        self.sessions.iter().filter(|e| *e.value() > now).count()
    }

    /// Drop every expired entry
    pub fn purge_expired(&self) {
        let now = now_millis();
        self.sessions.retain(|_, expires_at| *expires_at > now);
    }

    /// Spawn the periodic expiry sweep
    pub fn start_sweeper(self: Arc<Self>) {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(SWEEP_INTERVAL);
            loop {
                interval.tick().await;
                self.purge_expired();
            }
        });
    }
}

/// 32 random bytes, hex-encoded
fn generate_token() -> String {
    use rand::RngCore;
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
