//! Blob storage configuration.

use serde::{Deserialize, Serialize};

/// Top-level blob storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Which provider to use: `"local"` or `"s3"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Maximum upload size in bytes (default 100 MB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
    /// Local filesystem provider configuration.
    #[serde(default)]
    pub local: LocalStorageConfig,
    /// S3-compatible provider configuration.
    #[serde(default)]
    pub s3: S3StorageConfig,
}

/// Local filesystem blob storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalStorageConfig {
    /// Root path under which blobs are written.
    #[serde(default = "default_local_root")]
    pub root_path: String,
    /// Base URL prefixed to blob keys to form retrievable URLs.
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
}

impl Default for LocalStorageConfig {
    fn default() -> Self {
        Self {
            root_path: default_local_root(),
            public_base_url: default_public_base_url(),
        }
    }
}

/// S3-compatible object storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct S3StorageConfig {
    /// S3 endpoint URL (for non-AWS services like MinIO); empty for AWS.
    #[serde(default)]
    pub endpoint: String,
    /// AWS region.
    #[serde(default = "default_region")]
    pub region: String,
    /// S3 bucket name.
    #[serde(default)]
    pub bucket: String,
    /// Base URL prefixed to blob keys to form retrievable URLs.
    #[serde(default)]
    pub public_base_url: String,
}

fn default_provider() -> String {
    "local".to_string()
}

fn default_max_upload() -> u64 {
    104_857_600 // 100 MB
}

fn default_local_root() -> String {
    "./data/blobs".to_string()
}

fn default_public_base_url() -> String {
    "http://localhost:8080/blobs".to_string()
}

fn default_region() -> String {
    "us-east-1".to_string()
}
