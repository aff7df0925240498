//! The session store, single source of truth for the logged-in state.

use std::sync::Arc;

use tokio::sync::{RwLock, watch};
use tracing::{debug, warn};

use atelier_domain::{Credential, Persistence, Session, TokenPayload, UserIdentity};

use crate::ports::{StoredTokens, TokenStorage};

/// Holds the current credential, user identity and persistence choice.
///
/// The in-memory session is authoritative for the process lifetime; the two
/// injected storage tiers are written best-effort. Exactly one tier holds
/// the live tokens at a time: every session switch wipes both tiers before
/// writing the new one.
pub struct SessionStore {
    session: RwLock<Session>,
    durable: Arc<dyn TokenStorage>,
    ephemeral: Arc<dyn TokenStorage>,
    auth_tx: watch::Sender<bool>,
}

impl SessionStore {
    /// Creates a logged-out store over the two tiers.
    #[must_use]
    pub fn new(durable: Arc<dyn TokenStorage>, ephemeral: Arc<dyn TokenStorage>) -> Self {
        let (auth_tx, _) = watch::channel(false);
        Self {
            session: RwLock::new(Session::default()),
            durable,
            ephemeral,
            auth_tx,
        }
    }

    /// Restores the session from whichever tier is non-empty.
    ///
    /// The durable tier takes precedence; by invariant at most one tier is
    /// populated, so precedence only matters after a crash mid-switch.
    pub async fn hydrate(&self) {
        if self
            .hydrate_tier(&self.durable, Persistence::Durable)
            .await
        {
            return;
        }
        let _ = self
            .hydrate_tier(&self.ephemeral, Persistence::Ephemeral)
            .await;
    }

    async fn hydrate_tier(&self, tier: &Arc<dyn TokenStorage>, persistence: Persistence) -> bool {
        match tier.load().await {
            Ok(tokens) if !tokens.is_empty() => {
                let credential = tokens.into_credential();
                let mut session = self.session.write().await;
                session.credential = credential;
                session.persistence = persistence;
                let authenticated = session.is_authenticated();
                drop(session);
                self.auth_tx.send_replace(authenticated);
                debug!(?persistence, "session hydrated");
                true
            }
            Ok(_) => false,
            Err(error) => {
                warn!(%error, ?persistence, "could not read token storage tier");
                false
            }
        }
    }

    /// Current credential (in-memory fast path).
    pub async fn credential(&self) -> Credential {
        self.session.read().await.credential.clone()
    }

    /// Current user identity, once known.
    pub async fn user(&self) -> Option<UserIdentity> {
        self.session.read().await.user.clone()
    }

    /// True iff an access token is held.
    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_authenticated()
    }

    /// Reactive view of the login state for UI-shaped observers.
    #[must_use]
    pub fn watch_authenticated(&self) -> watch::Receiver<bool> {
        self.auth_tx.subscribe()
    }

    /// Establishes a new session from a login or registration payload.
    ///
    /// Both tiers are wiped first, then the tokens land in the durable tier
    /// if `remember`, otherwise in the ephemeral tier. Observers are
    /// notified before this returns.
    pub async fn set_session(
        &self,
        payload: &TokenPayload,
        user: Option<UserIdentity>,
        remember: bool,
    ) {
        let persistence = if remember {
            Persistence::Durable
        } else {
            Persistence::Ephemeral
        };
        let credential = payload.to_credential();
        {
            let mut session = self.session.write().await;
            session.credential = credential.clone();
            session.user = user;
            session.persistence = persistence;
        }
        self.wipe_tiers().await;
        self.persist(&credential, persistence).await;
        self.auth_tx.send_replace(credential.is_authenticated());
    }

    /// Merges a successful refresh into the live session.
    ///
    /// The persistence choice made at login is kept: the refreshed tokens
    /// are written to the session's existing tier.
    pub async fn apply_refresh(&self, payload: &TokenPayload) {
        let (credential, persistence) = {
            let mut session = self.session.write().await;
            session.credential.apply(payload);
            (session.credential.clone(), session.persistence)
        };
        self.persist(&credential, persistence).await;
        self.auth_tx.send_replace(credential.is_authenticated());
    }

    /// Updates the cached user identity without touching the tokens.
    pub async fn set_user(&self, user: UserIdentity) {
        self.session.write().await.user = Some(user);
    }

    /// Destroys the session: in-memory fields nulled, both tiers wiped.
    ///
    /// Idempotent; clearing a logged-out store is a no-op.
    pub async fn clear(&self) {
        *self.session.write().await = Session::default();
        self.wipe_tiers().await;
        self.auth_tx.send_replace(false);
    }

    async fn wipe_tiers(&self) {
        if let Err(error) = self.durable.clear().await {
            warn!(%error, "could not clear durable token storage");
        }
        if let Err(error) = self.ephemeral.clear().await {
            warn!(%error, "could not clear ephemeral token storage");
        }
    }

    async fn persist(&self, credential: &Credential, persistence: Persistence) {
        let tier = match persistence {
            Persistence::Durable => &self.durable,
            Persistence::Ephemeral => &self.ephemeral,
        };
        let tokens = StoredTokens::from_credential(credential);
        if let Err(error) = tier.store(&tokens).await {
            // In-memory state stays authoritative; losing the tier only
            // costs persistence across restarts.
            warn!(%error, ?persistence, "could not persist tokens");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::session::MemoryTokenStorage;
    use pretty_assertions::assert_eq;

    fn payload(access: &str, refresh: &str) -> TokenPayload {
        TokenPayload {
            access_token: Some(access.to_string()),
            refresh_token: Some(refresh.to_string()),
            token_type: Some("Bearer".to_string()),
            expires_in: Some(3600),
        }
    }

    fn store_with_tiers() -> (SessionStore, Arc<MemoryTokenStorage>, Arc<MemoryTokenStorage>) {
        let durable = Arc::new(MemoryTokenStorage::new());
        let ephemeral = Arc::new(MemoryTokenStorage::new());
        let store = SessionStore::new(durable.clone(), ephemeral.clone());
        (store, durable, ephemeral)
    }

    #[tokio::test]
    async fn remembered_session_lands_in_the_durable_tier() {
        let (store, durable, ephemeral) = store_with_tiers();

        store.set_session(&payload("a1", "r1"), None, true).await;

        let credential = store.credential().await;
        assert_eq!(credential.access_token.as_deref(), Some("a1"));
        assert_eq!(
            durable.load().await.unwrap().access_token.as_deref(),
            Some("a1")
        );
        assert!(ephemeral.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unremembered_session_lands_in_the_ephemeral_tier() {
        let (store, durable, ephemeral) = store_with_tiers();

        store.set_session(&payload("a1", "r1"), None, false).await;

        assert!(durable.load().await.unwrap().is_empty());
        assert_eq!(
            ephemeral.load().await.unwrap().access_token.as_deref(),
            Some("a1")
        );
    }

    #[tokio::test]
    async fn switching_sessions_wipes_the_other_tier() {
        let (store, durable, ephemeral) = store_with_tiers();

        store.set_session(&payload("a1", "r1"), None, true).await;
        store.set_session(&payload("a2", "r2"), None, false).await;

        assert!(durable.load().await.unwrap().is_empty());
        assert_eq!(
            ephemeral.load().await.unwrap().access_token.as_deref(),
            Some("a2")
        );
    }

    #[tokio::test]
    async fn clear_empties_memory_and_both_tiers() {
        let (store, durable, ephemeral) = store_with_tiers();

        store.set_session(&payload("a1", "r1"), None, true).await;
        store.clear().await;
        // Idempotent.
        store.clear().await;

        assert!(!store.is_authenticated().await);
        assert!(durable.load().await.unwrap().is_empty());
        assert!(ephemeral.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn hydrate_prefers_the_durable_tier() {
        let (store, durable, ephemeral) = store_with_tiers();
        durable
            .store(&StoredTokens {
                access_token: Some("durable-token".to_string()),
                refresh_token: Some("r1".to_string()),
                token_type: Some("Bearer".to_string()),
            })
            .await
            .unwrap();
        ephemeral
            .store(&StoredTokens {
                access_token: Some("ephemeral-token".to_string()),
                refresh_token: None,
                token_type: Some("Bearer".to_string()),
            })
            .await
            .unwrap();

        store.hydrate().await;

        let credential = store.credential().await;
        assert_eq!(credential.access_token.as_deref(), Some("durable-token"));
    }

    #[tokio::test]
    async fn refresh_persists_to_the_tier_chosen_at_login() {
        let (store, durable, ephemeral) = store_with_tiers();
        store.set_session(&payload("a1", "r1"), None, true).await;

        store
            .apply_refresh(&TokenPayload {
                access_token: Some("a2".to_string()),
                ..TokenPayload::default()
            })
            .await;

        let stored = durable.load().await.unwrap();
        assert_eq!(stored.access_token.as_deref(), Some("a2"));
        // Refresh token survives a rotation that omits it.
        assert_eq!(stored.refresh_token.as_deref(), Some("r1"));
        assert!(ephemeral.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn watch_channel_tracks_login_state() {
        let (store, _durable, _ephemeral) = store_with_tiers();
        let watcher = store.watch_authenticated();
        assert!(!*watcher.borrow());

        store.set_session(&payload("a1", "r1"), None, false).await;
        assert!(*watcher.borrow());

        store.clear().await;
        assert!(!*watcher.borrow());
    }
}
