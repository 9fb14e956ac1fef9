//! File repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use nestbox_core::error::{AppError, ErrorKind};
use nestbox_core::result::AppResult;
use nestbox_entity::file::model::{CreateStoredFile, FileMetadata, StoredFile};

/// Repository for file record CRUD and metadata queries.
#[derive(Debug, Clone)]
pub struct FileRepository {
    pool: PgPool,
}

impl FileRepository {
    /// Create a new file repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a file by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<StoredFile>> {
        sqlx::query_as::<_, StoredFile>("SELECT * FROM files WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find file", e))
    }

    /// List the direct files of a directory.
    pub async fn find_by_directory(&self, directory_id: Uuid) -> AppResult<Vec<StoredFile>> {
        sqlx::query_as::<_, StoredFile>(
            "SELECT * FROM files WHERE directory_id = $1 ORDER BY name ASC",
        )
        .bind(directory_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list files", e))
    }

    /// Create a new file record.
    pub async fn create(&self, data: &CreateStoredFile) -> AppResult<StoredFile> {
        sqlx::query_as::<_, StoredFile>(
            "INSERT INTO files (name, extension, storage_url, directory_id, owner_id) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.extension)
        .bind(&data.storage_url)
        .bind(data.directory_id)
        .bind(&data.owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create file record", e))
    }

    /// All file metadata rows owned by a user, newest first.
    pub async fn metadata_for_owner(&self, owner_id: &str) -> AppResult<Vec<FileMetadata>> {
        sqlx::query_as::<_, FileMetadata>(
            "SELECT id, name, extension, storage_url, created_at FROM files \
             WHERE owner_id = $1 ORDER BY created_at DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch file metadata", e))
    }
}
