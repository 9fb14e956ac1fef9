//! Local filesystem blob store.

use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::debug;

use nestbox_core::config::storage::LocalStorageConfig;
use nestbox_core::error::{AppError, ErrorKind};
use nestbox_core::result::AppResult;
use nestbox_core::traits::blob::{BlobStore, StoredBlob};

/// Blob store writing objects under a root directory on the local disk.
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    /// Root directory for all stored blobs.
    root: PathBuf,
    /// URL prefix under which blobs are served.
    public_base_url: String,
}

impl LocalBlobStore {
    /// Create a new local blob store rooted at the configured path.
    pub async fn new(config: &LocalStorageConfig) -> AppResult<Self> {
        let root = PathBuf::from(&config.root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create blob root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self {
            root,
            public_base_url: config.public_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve a key to an absolute path within the root.
    fn resolve(&self, key: &str) -> PathBuf {
        self.root.join(key.trim_start_matches('/'))
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(self.root.exists() && self.root.is_dir())
    }

    async fn put(&self, key: &str, data: Bytes) -> AppResult<StoredBlob> {
        let path = self.resolve(key);
        fs::write(&path, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write blob: {key}"),
                e,
            )
        })?;

        debug!(key, bytes = data.len(), "Wrote blob");
        Ok(StoredBlob {
            key: key.to_string(),
            url: self.url_for(key),
        })
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let path = self.resolve(key);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            // Already gone counts as deleted.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to delete blob: {key}"),
                e,
            )),
        }
    }

    fn url_for(&self, key: &str) -> String {
        format!("{}/{}", self.public_base_url, key.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(dir: &str) -> LocalStorageConfig {
        LocalStorageConfig {
            root_path: std::env::temp_dir()
                .join(dir)
                .to_string_lossy()
                .into_owned(),
            public_base_url: "http://localhost:8080/blobs/".to_string(),
        }
    }

    #[tokio::test]
    async fn test_put_then_delete_roundtrip() {
        let store = LocalBlobStore::new(&test_config("nestbox-local-store-rt"))
            .await
            .unwrap();

        let blob = store.put("abc123", Bytes::from_static(b"hello")).await.unwrap();
        assert_eq!(blob.key, "abc123");
        assert_eq!(blob.url, "http://localhost:8080/blobs/abc123");

        store.delete("abc123").await.unwrap();
        // Deleting a missing blob is not an error.
        store.delete("abc123").await.unwrap();
    }

    #[tokio::test]
    async fn test_url_strips_duplicate_slashes() {
        let store = LocalBlobStore::new(&test_config("nestbox-local-store-url"))
            .await
            .unwrap();
        assert_eq!(
            store.url_for("/key"),
            "http://localhost:8080/blobs/key"
        );
    }
}
