//! Blob store trait for pluggable binary object backends.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Result of writing a blob: the key it was stored under and the
/// retrievable URL handed back to clients.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct StoredBlob {
    /// Provider-scoped object key.
    pub key: String,
    /// Publicly retrievable URL for the object.
    pub url: String,
}

/// Trait for binary object storage backends.
///
/// Implementations exist for the local filesystem and S3. The trait is
/// defined here in `nestbox-core` and implemented in `nestbox-storage`.
/// Contents are opaque to Nestbox; only the returned URL is persisted.
#[async_trait]
pub trait BlobStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local", "s3").
    fn provider_type(&self) -> &str;

    /// Check whether the provider is healthy and reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Write a blob under the given key and return its retrievable URL.
    async fn put(&self, key: &str, data: Bytes) -> AppResult<StoredBlob>;

    /// Delete the blob stored under the given key.
    async fn delete(&self, key: &str) -> AppResult<()>;

    /// The retrievable URL for a key, without touching the backend.
    fn url_for(&self, key: &str) -> String;
}
