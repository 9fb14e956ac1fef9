//! File upload: blob write plus metadata record, with compensation.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{info, warn};
use uuid::Uuid;

use nestbox_core::config::storage::StorageConfig;
use nestbox_core::error::AppError;
use nestbox_database::repositories::directory::DirectoryRepository;
use nestbox_database::repositories::file::FileRepository;
use nestbox_entity::file::{CreateStoredFile, StoredFile, split_filename};
use nestbox_storage::StorageManager;

/// Parameters for a single-request upload.
#[derive(Debug, Clone)]
pub struct UploadParams {
    /// Target directory ID.
    pub directory_id: Uuid,
    /// The uploading user.
    pub user_id: String,
    /// Original filename as supplied by the client.
    pub original_filename: String,
    /// File content bytes.
    pub data: Bytes,
}

/// Handles file uploads.
#[derive(Debug, Clone)]
pub struct UploadService {
    /// File repository.
    file_repo: Arc<FileRepository>,
    /// Directory repository.
    directory_repo: Arc<DirectoryRepository>,
    /// Blob storage.
    storage: Arc<StorageManager>,
    /// Storage configuration (size cap).
    config: StorageConfig,
}

impl UploadService {
    /// Creates a new upload service.
    pub fn new(
        file_repo: Arc<FileRepository>,
        directory_repo: Arc<DirectoryRepository>,
        storage: Arc<StorageManager>,
        config: StorageConfig,
    ) -> Self {
        Self {
            file_repo,
            directory_repo,
            storage,
            config,
        }
    }

    /// Upload a file: write the payload to blob storage under a fresh
    /// key, then record its metadata.
    ///
    /// The two steps are not one transaction; if the record insert
    /// fails, the just-written blob is deleted best-effort so no orphan
    /// object is left behind. Content is never inspected.
    pub async fn upload(&self, params: UploadParams) -> Result<StoredFile, AppError> {
        if params.original_filename.trim().is_empty() {
            return Err(AppError::validation("A filename is required"));
        }
        if params.data.len() as u64 > self.config.max_upload_size_bytes {
            return Err(AppError::validation(format!(
                "File exceeds maximum upload size of {} bytes",
                self.config.max_upload_size_bytes
            )));
        }

        let directory = self
            .directory_repo
            .find_by_id(params.directory_id)
            .await?
            .ok_or_else(|| AppError::not_found("Target directory not found"))?;

        if directory.owner_id != params.user_id {
            return Err(AppError::authorization("Access denied"));
        }

        let (name, extension) = split_filename(&params.original_filename);
        let key = Uuid::new_v4().to_string();

        let blob = self.storage.put(&key, params.data).await?;

        let record = CreateStoredFile {
            name,
            extension,
            storage_url: blob.url,
            directory_id: directory.id,
            owner_id: params.user_id.clone(),
        };

        let file = match self.file_repo.create(&record).await {
            Ok(file) => file,
            Err(e) => {
                // Roll the saga back: remove the orphan blob.
                if let Err(cleanup) = self.storage.delete(&key).await {
                    warn!(key, error = %cleanup, "Failed to delete orphan blob after insert failure");
                }
                return Err(e);
            }
        };

        info!(
            user_id = %params.user_id,
            file_id = %file.id,
            directory_id = %params.directory_id,
            "File uploaded"
        );

        Ok(file)
    }
}
