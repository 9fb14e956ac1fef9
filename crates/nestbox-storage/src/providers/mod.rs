//! Blob store provider implementations.

pub mod local;
pub mod s3;
