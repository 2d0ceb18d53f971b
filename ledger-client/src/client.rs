//! Typed operations against the ledger API
//!
//! [`LedgerClient`] wraps the transport with one method per endpoint.
//! Any 401 discards the locally held token: the server may have restarted,
//! so "unauthorized" never means only "token wrong or expired".

use crate::{ClientConfig, ClientError, ClientResult, HttpClient};
use shared::client::{
    CreatedResponse, LoginRequest, LoginResponse, MembersResponse, PaymentsResponse,
    StatusResponse, SuccessResponse,
};
use shared::models::{Member, MemberCreate, MemberUpdate, Payment, PaymentCreate};

/// Client for the dues ledger API
#[derive(Debug, Clone)]
pub struct LedgerClient {
    http: HttpClient,
}

impl LedgerClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            http: HttpClient::new(config)?,
        })
    }

    /// The session token currently held, if any
    pub fn token(&self) -> Option<&str> {
        self.http.token()
    }

    // ── Session ─────────────────────────────────────────────────────

    /// Authenticate as the admin; on success the token is kept for
    /// subsequent calls and also returned.
    pub async fn login(&mut self, username: &str, password: &str) -> ClientResult<String> {
        let req = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let resp: LoginResponse = self.http.post("/api/admin/login", &req).await?;
        self.http.set_token(Some(resp.token.clone()));
        Ok(resp.token)
    }

    /// Check whether the held token is still live
    pub async fn status(&mut self) -> ClientResult<bool> {
        match self.http.get::<StatusResponse>("/api/admin/status").await {
            Ok(resp) => Ok(resp.authenticated),
            Err(ClientError::Unauthorized) => {
                self.http.set_token(None);
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// End the session and discard the token
    pub async fn logout(&mut self) -> ClientResult<()> {
        let result = self
            .http
            .post_empty::<SuccessResponse>("/api/admin/logout")
            .await;
        self.http.set_token(None);
        result.map(|_| ())
    }

    // ── Public reads ────────────────────────────────────────────────

    pub async fn list_payments(&self) -> ClientResult<Vec<Payment>> {
        let resp: PaymentsResponse = self.http.get("/api/payments").await?;
        Ok(resp.payments)
    }

    pub async fn list_members(&self) -> ClientResult<Vec<Member>> {
        let resp: MembersResponse = self.http.get("/api/members").await?;
        Ok(resp.members)
    }

    // ── Admin reads / writes ────────────────────────────────────────

    /// Every member, deactivated ones included. Admin only.
    pub async fn list_all_members(&mut self) -> ClientResult<Vec<Member>> {
        let result = self.http.get::<MembersResponse>("/api/members/all").await;
        let resp = self.checked(result)?;
        Ok(resp.members)
    }

    pub async fn create_payment(&mut self, payment: &PaymentCreate) -> ClientResult<i64> {
        let result = self.http.post::<CreatedResponse, _>("/api/payments", payment).await;
        let resp = self.checked(result)?;
        Ok(resp.id)
    }

    pub async fn create_member(&mut self, member: &MemberCreate) -> ClientResult<i64> {
        let result = self.http.post::<CreatedResponse, _>("/api/members", member).await;
        let resp = self.checked(result)?;
        Ok(resp.id)
    }

    pub async fn update_member(&mut self, id: i64, member: &MemberUpdate) -> ClientResult<()> {
        let path = format!("/api/members/{id}");
        let result = self.http.put::<SuccessResponse, _>(&path, member).await;
        self.checked(result)?;
        Ok(())
    }

    pub async fn deactivate_member(&mut self, id: i64) -> ClientResult<()> {
        let path = format!("/api/members/{id}");
        let result = self.http.delete::<SuccessResponse>(&path).await;
        self.checked(result)?;
        Ok(())
    }

    /// 401 on any call forces a client-side logout
    fn checked<T>(&mut self, result: ClientResult<T>) -> ClientResult<T> {
        if let Err(ClientError::Unauthorized) = &result {
            self.http.set_token(None);
        }
        result
    }
}

/// Admin session resume flow
///
/// The console caches its token locally; on load it must re-validate the
/// token against the server before trusting it, falling back to the login
/// prompt on any failure.
pub struct AdminSession;

impl AdminSession {
    /// Try to resume with a cached token. Returns the authenticated client,
    /// or `None` when the token is stale and a fresh login is needed.
    pub async fn resume(base_url: &str, cached_token: &str) -> ClientResult<Option<LedgerClient>> {
        let config = ClientConfig::new(base_url).with_token(cached_token);
        let mut client = LedgerClient::new(&config)?;

        if client.status().await? {
            Ok(Some(client))
        } else {
            tracing::info!("Cached session token rejected, login required");
            Ok(None)
        }
    }
}
