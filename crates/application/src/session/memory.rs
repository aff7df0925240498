//! In-memory token storage, the ephemeral tier.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::ports::{StorageError, StoredTokens, TokenStorage};

/// Process-lifetime token storage.
///
/// This is the live ephemeral tier: tokens stored here vanish when the
/// process ends, which is exactly the "do not remember me" contract. It
/// also serves as the storage double in tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStorage {
    tokens: RwLock<StoredTokens>,
}

impl MemoryTokenStorage {
    /// Creates an empty tier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenStorage for MemoryTokenStorage {
    async fn load(&self) -> Result<StoredTokens, StorageError> {
        Ok(self.tokens.read().await.clone())
    }

    async fn store(&self, tokens: &StoredTokens) -> Result<(), StorageError> {
        *self.tokens.write().await = tokens.clone();
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        *self.tokens.write().await = StoredTokens::default();
        Ok(())
    }
}
