//! # nestbox-storage
//!
//! Blob storage backends for uploaded file content. The [`BlobStore`]
//! trait lives in `nestbox-core`; this crate provides the local
//! filesystem and S3 implementations plus the manager that selects one
//! from configuration.
//!
//! [`BlobStore`]: nestbox_core::traits::blob::BlobStore

pub mod manager;
pub mod providers;

pub use manager::StorageManager;
