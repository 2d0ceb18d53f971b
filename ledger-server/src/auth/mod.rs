//! Admin session authentication
//!
//! Opaque bearer tokens held in an in-process [`SessionStore`]. A process
//! restart invalidates every outstanding session; clients must treat 401 as
//! possibly meaning "server restarted".

pub mod middleware;
pub mod session;

pub use middleware::{bearer_token, require_auth};
pub use session::SessionStore;
