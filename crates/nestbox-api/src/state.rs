//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use nestbox_core::config::AppConfig;
use nestbox_service::directory::{DirectoryService, OrganizeService};
use nestbox_service::file::UploadService;
use nestbox_service::insight::MetadataInsightService;
use nestbox_service::user::UserService;
use nestbox_storage::StorageManager;

/// Application state containing all shared dependencies.
///
/// Passed to every axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks; the pool and services
/// are constructed once at startup and injected here — there is no
/// module-level singleton anywhere.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool (health checks).
    pub db_pool: PgPool,
    /// Blob storage (health checks).
    pub storage: Arc<StorageManager>,
    /// Login and provisioning.
    pub user_service: Arc<UserService>,
    /// Directory tree operations.
    pub directory_service: Arc<DirectoryService>,
    /// Auto-organize.
    pub organize_service: Arc<OrganizeService>,
    /// File uploads.
    pub upload_service: Arc<UploadService>,
    /// Metadata insight reports.
    pub insight_service: Arc<MetadataInsightService>,
}
