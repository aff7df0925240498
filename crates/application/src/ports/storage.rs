//! Token storage port
//!
//! A tier stores exactly three named slots: access token, refresh token and
//! token type. The durable tier survives restarts; the ephemeral tier lives
//! for the process.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use atelier_domain::Credential;

/// The three persisted slots of one storage tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredTokens {
    /// Access token slot.
    #[serde(default)]
    pub access_token: Option<String>,
    /// Refresh token slot.
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Token type slot.
    #[serde(default)]
    pub token_type: Option<String>,
}

impl StoredTokens {
    /// Returns true when no slot is filled.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.access_token.is_none() && self.refresh_token.is_none() && self.token_type.is_none()
    }

    /// Snapshot of a live credential for persistence.
    #[must_use]
    pub fn from_credential(credential: &Credential) -> Self {
        Self {
            access_token: credential.access_token.clone(),
            refresh_token: credential.refresh_token.clone(),
            token_type: credential
                .access_token
                .is_some()
                .then(|| credential.token_type.clone()),
        }
    }

    /// Rebuilds a credential from the slots.
    #[must_use]
    pub fn into_credential(self) -> Credential {
        let mut credential = Credential::empty();
        credential.access_token = self.access_token;
        credential.refresh_token = self.refresh_token;
        // A stored type without a token would be an orphan; only restore it
        // alongside an access token.
        if credential.access_token.is_some() {
            if let Some(token_type) = self.token_type {
                if !token_type.is_empty() {
                    credential.token_type = token_type;
                }
            }
        }
        credential
    }
}

/// Errors raised by a storage tier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The underlying store could not be read or written.
    #[error("storage I/O error: {0}")]
    Io(String),

    /// The stored payload could not be encoded or decoded.
    #[error("storage serialization error: {0}")]
    Serialization(String),
}

/// Port for one token storage tier.
///
/// The session store treats writes as best-effort: a failing tier is logged
/// and ignored because the in-memory credential stays authoritative for the
/// process lifetime.
#[async_trait]
pub trait TokenStorage: Send + Sync {
    /// Loads the slots; an empty [`StoredTokens`] means "nothing stored".
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the tier cannot be read.
    async fn load(&self) -> Result<StoredTokens, StorageError>;

    /// Writes all three slots, replacing previous contents.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the tier cannot be written.
    async fn store(&self, tokens: &StoredTokens) -> Result<(), StorageError>;

    /// Removes all slots. Must be idempotent.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the tier cannot be cleared.
    async fn clear(&self) -> Result<(), StorageError>;
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn roundtrip_preserves_credential() {
        let credential = Credential {
            access_token: Some("a1".to_string()),
            refresh_token: Some("r1".to_string()),
            token_type: "Bearer".to_string(),
        };
        let restored = StoredTokens::from_credential(&credential).into_credential();
        assert_eq!(restored, credential);
    }

    #[test]
    fn orphaned_token_type_is_not_restored() {
        let tokens = StoredTokens {
            access_token: None,
            refresh_token: Some("r1".to_string()),
            token_type: Some("Bearer".to_string()),
        };
        let credential = tokens.into_credential();
        assert_eq!(credential.access_token, None);
        assert_eq!(credential.authorization_value(), None);
        assert_eq!(credential.refresh_token.as_deref(), Some("r1"));
    }

    #[test]
    fn snapshot_of_logged_out_credential_is_empty() {
        let tokens = StoredTokens::from_credential(&Credential::empty());
        assert!(tokens.is_empty());
    }
}
