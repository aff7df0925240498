//! Durable token tier backed by a JSON file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use atelier_application::ports::{StorageError, StoredTokens, TokenStorage};

/// File-backed storage tier for the remember-me session.
///
/// The file holds one [`StoredTokens`] document. A missing file reads as
/// empty, and clearing removes the file, so a fresh profile and a
/// logged-out profile look the same.
#[derive(Debug, Clone)]
pub struct FileTokenStorage {
    path: PathBuf,
}

impl FileTokenStorage {
    /// Creates a tier persisting to the given file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a tier at the platform's config directory
    /// (`<config>/atelier/tokens.json`).
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] when the platform reports no config
    /// directory.
    pub fn in_config_dir() -> Result<Self, StorageError> {
        let base = dirs::config_dir()
            .ok_or_else(|| StorageError::Io("no config directory on this platform".to_string()))?;
        Ok(Self::new(base.join("atelier").join("tokens.json")))
    }

    /// The file this tier persists to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TokenStorage for FileTokenStorage {
    async fn load(&self) -> Result<StoredTokens, StorageError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(StoredTokens::default()),
            Err(e) => return Err(StorageError::Io(e.to_string())),
        };
        serde_json::from_slice(&bytes).map_err(|e| StorageError::Serialization(e.to_string()))
    }

    async fn store(&self, tokens: &StoredTokens) -> Result<(), StorageError> {
        let json = serde_json::to_vec_pretty(tokens)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::Io(e.to_string()))?;
        }
        fs::write(&self.path, json)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))
    }

    async fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(e.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn sample() -> StoredTokens {
        StoredTokens {
            access_token: Some("a1".to_string()),
            refresh_token: Some("r1".to_string()),
            token_type: Some("Bearer".to_string()),
        }
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        let storage = FileTokenStorage::new(dir.path().join("tokens.json"));
        assert_eq!(storage.load().await.unwrap(), StoredTokens::default());
    }

    #[tokio::test]
    async fn store_then_load_roundtrips() {
        let dir = tempdir().unwrap();
        let storage = FileTokenStorage::new(dir.path().join("tokens.json"));
        storage.store(&sample()).await.unwrap();
        assert_eq!(storage.load().await.unwrap(), sample());
    }

    #[tokio::test]
    async fn store_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let storage = FileTokenStorage::new(dir.path().join("nested/deeper/tokens.json"));
        storage.store(&sample()).await.unwrap();
        assert_eq!(storage.load().await.unwrap(), sample());
    }

    #[tokio::test]
    async fn clear_removes_the_file_and_is_idempotent() {
        let dir = tempdir().unwrap();
        let storage = FileTokenStorage::new(dir.path().join("tokens.json"));
        storage.store(&sample()).await.unwrap();
        storage.clear().await.unwrap();
        assert!(!storage.path().exists());
        storage.clear().await.unwrap();
        assert_eq!(storage.load().await.unwrap(), StoredTokens::default());
    }

    #[tokio::test]
    async fn corrupt_file_is_a_serialization_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tokens.json");
        tokio::fs::write(&path, b"not json").await.unwrap();
        let storage = FileTokenStorage::new(path);
        assert!(matches!(
            storage.load().await,
            Err(StorageError::Serialization(_))
        ));
    }
}
