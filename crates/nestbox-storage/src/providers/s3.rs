//! S3-compatible blob store.

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use tracing::debug;

use nestbox_core::config::storage::S3StorageConfig;
use nestbox_core::error::{AppError, ErrorKind};
use nestbox_core::result::AppResult;
use nestbox_core::traits::blob::{BlobStore, StoredBlob};

/// Blob store backed by an S3 bucket (AWS or S3-compatible endpoint).
///
/// Credentials come from the default AWS provider chain; the bucket and
/// region are configured explicitly.
#[derive(Debug, Clone)]
pub struct S3BlobStore {
    client: aws_sdk_s3::Client,
    bucket: String,
    region: String,
    public_base_url: String,
}

impl S3BlobStore {
    /// Create a new S3 blob store from configuration.
    pub async fn new(config: &S3StorageConfig) -> AppResult<Self> {
        if config.bucket.is_empty() {
            return Err(AppError::configuration(
                "storage.s3.bucket must be set when the s3 provider is selected",
            ));
        }

        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()));
        if !config.endpoint.is_empty() {
            loader = loader.endpoint_url(&config.endpoint);
        }
        let sdk_config = loader.load().await;

        Ok(Self {
            client: aws_sdk_s3::Client::new(&sdk_config),
            bucket: config.bucket.clone(),
            region: config.region.clone(),
            public_base_url: config.public_base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl BlobStore for S3BlobStore {
    fn provider_type(&self) -> &str {
        "s3"
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.client
            .head_bucket()
            .bucket(&self.bucket)
            .send()
            .await
            .map(|_| true)
            .map_err(|e| {
                AppError::with_source(ErrorKind::Storage, "S3 health check failed", e)
            })
    }

    async fn put(&self, key: &str, data: Bytes) -> AppResult<StoredBlob> {
        let len = data.len();
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(data))
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to put S3 object: {key}"),
                    e,
                )
            })?;

        debug!(key, bytes = len, "Wrote S3 object");
        Ok(StoredBlob {
            key: key.to_string(),
            url: self.url_for(key),
        })
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to delete S3 object: {key}"),
                    e,
                )
            })?;
        Ok(())
    }

    fn url_for(&self, key: &str) -> String {
        if self.public_base_url.is_empty() {
            format!(
                "https://{}.s3.{}.amazonaws.com/{}",
                self.bucket, self.region, key
            )
        } else {
            format!("{}/{}", self.public_base_url, key)
        }
    }
}
