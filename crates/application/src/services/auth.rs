//! Authentication service: the login/registration endpoints plus the
//! wiring that lands their results in the session store.

use std::sync::Arc;

use tracing::warn;

use atelier_domain::{AuthPayload, LoginRequest, RegisterRequest, UserIdentity};

use crate::client::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::session::SessionStore;

/// Auth endpoints and session establishment.
pub struct AuthService {
    client: Arc<ApiClient>,
    store: Arc<SessionStore>,
}

impl AuthService {
    /// Creates the service over a client and the session store it feeds.
    #[must_use]
    pub const fn new(client: Arc<ApiClient>, store: Arc<SessionStore>) -> Self {
        Self { client, store }
    }

    /// Logs in and establishes the session.
    ///
    /// `remember` picks the storage tier: durable when true, ephemeral
    /// otherwise. The choice sticks for the whole session.
    ///
    /// # Errors
    ///
    /// Propagates validation failures (wrong credentials come back as API
    /// errors) and rejects a success payload without an access token.
    pub async fn login(&self, request: &LoginRequest, remember: bool) -> ApiResult<UserIdentity> {
        let payload: AuthPayload = self.client.post("/auth/login", request).await?;
        self.establish(payload, remember).await
    }

    /// Registers a new account and establishes the session.
    ///
    /// # Errors
    ///
    /// Propagates field-level validation failures untouched.
    pub async fn register(
        &self,
        request: &RegisterRequest,
        remember: bool,
    ) -> ApiResult<UserIdentity> {
        let payload: AuthPayload = self.client.post("/auth/register", request).await?;
        self.establish(payload, remember).await
    }

    async fn establish(&self, payload: AuthPayload, remember: bool) -> ApiResult<UserIdentity> {
        if payload.token.access_token.is_none() {
            return Err(ApiError::Decode(
                "auth response carried no access token".to_string(),
            ));
        }
        self.store
            .set_session(&payload.token, Some(payload.user.clone()), remember)
            .await;
        Ok(payload.user)
    }

    /// Fetches the authenticated user.
    ///
    /// # Errors
    ///
    /// Propagates API failures; a session that cannot be recovered surfaces
    /// as [`ApiError::SessionExpired`].
    pub async fn me(&self) -> ApiResult<UserIdentity> {
        self.client.get("/me").await
    }

    /// Fetches `/me` and caches the identity in the store.
    ///
    /// A failure clears the session: a token that cannot resolve its own
    /// user is not worth keeping.
    ///
    /// # Errors
    ///
    /// Propagates the underlying failure after clearing.
    pub async fn load_me(&self) -> ApiResult<UserIdentity> {
        match self.me().await {
            Ok(user) => {
                self.store.set_user(user.clone()).await;
                Ok(user)
            }
            Err(error) => {
                self.store.clear().await;
                Err(error)
            }
        }
    }

    /// Ends the current session on this device.
    ///
    /// The server call is best-effort; the local session is destroyed
    /// regardless, so logout always succeeds from the caller's view.
    pub async fn logout(&self) {
        if let Err(error) = self.client.post_unit("/auth/logout", &serde_json::json!({})).await {
            warn!(%error, "server logout failed, clearing locally");
        }
        self.store.clear().await;
    }

    /// Ends the session on every device, then clears locally.
    pub async fn logout_all(&self) {
        if let Err(error) = self
            .client
            .post_unit("/auth/logout-all", &serde_json::json!({}))
            .await
        {
            warn!(%error, "server logout-all failed, clearing locally");
        }
        self.store.clear().await;
    }
}
