//! # nestbox-insight
//!
//! Thin client for the external insight model. The model receives file
//! metadata as an opaque JSON blob and returns prose; nothing here
//! affects stored state. No caching, no retries.

pub mod client;
pub mod types;

pub use client::InsightClient;
pub use types::Recommendation;
