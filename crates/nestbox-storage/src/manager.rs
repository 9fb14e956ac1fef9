//! Storage manager — selects and wraps the configured blob provider.

use std::sync::Arc;

use bytes::Bytes;

use nestbox_core::config::storage::StorageConfig;
use nestbox_core::error::AppError;
use nestbox_core::result::AppResult;
use nestbox_core::traits::blob::{BlobStore, StoredBlob};

use crate::providers::local::LocalBlobStore;
use crate::providers::s3::S3BlobStore;

/// Holds the blob provider chosen by configuration and delegates to it.
#[derive(Debug, Clone)]
pub struct StorageManager {
    provider: Arc<dyn BlobStore>,
}

impl StorageManager {
    /// Build the provider named in the configuration.
    pub async fn new(config: &StorageConfig) -> AppResult<Self> {
        let provider: Arc<dyn BlobStore> = match config.provider.as_str() {
            "local" => Arc::new(LocalBlobStore::new(&config.local).await?),
            "s3" => Arc::new(S3BlobStore::new(&config.s3).await?),
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown storage provider '{other}' (expected 'local' or 's3')"
                )));
            }
        };
        Ok(Self { provider })
    }

    /// The active provider's type name.
    pub fn provider_type(&self) -> &str {
        self.provider.provider_type()
    }

    /// Check whether the active provider is reachable.
    pub async fn health_check(&self) -> AppResult<bool> {
        self.provider.health_check().await
    }

    /// Write a blob and return its key and retrievable URL.
    pub async fn put(&self, key: &str, data: Bytes) -> AppResult<StoredBlob> {
        self.provider.put(key, data).await
    }

    /// Delete a blob by key.
    pub async fn delete(&self, key: &str) -> AppResult<()> {
        self.provider.delete(key).await
    }
}
