//! Directory repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use nestbox_core::error::{AppError, ErrorKind};
use nestbox_core::result::AppResult;
use nestbox_entity::directory::model::{CreateDirectory, Directory};

/// One extension bucket of an organize plan: which files move into the
/// subdirectory named after `extension`.
#[derive(Debug, Clone)]
pub struct ExtensionGroup {
    /// Subdirectory name (the extension string, never empty).
    pub extension: String,
    /// Files to re-parent into that subdirectory.
    pub file_ids: Vec<Uuid>,
}

/// Counts reported back from applying an organize plan.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrganizeStats {
    /// Number of files re-parented.
    pub moved: u64,
    /// Number of extension subdirectories newly created.
    pub created_directories: u64,
}

/// Repository for directory CRUD, access counting, and organize writes.
#[derive(Debug, Clone)]
pub struct DirectoryRepository {
    pool: PgPool,
}

impl DirectoryRepository {
    /// Create a new directory repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a directory by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Directory>> {
        sqlx::query_as::<_, Directory>("SELECT * FROM directories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find directory", e))
    }

    /// List the direct subdirectories of a directory.
    pub async fn find_children(&self, parent_id: Uuid) -> AppResult<Vec<Directory>> {
        sqlx::query_as::<_, Directory>(
            "SELECT * FROM directories WHERE parent_id = $1 ORDER BY name ASC",
        )
        .bind(parent_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list subdirectories", e))
    }

    /// Create a new directory.
    pub async fn create(&self, data: &CreateDirectory) -> AppResult<Directory> {
        sqlx::query_as::<_, Directory>(
            "INSERT INTO directories (name, owner_id, parent_id) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.owner_id)
        .bind(data.parent_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create directory", e))
    }

    /// Delete a directory. Children and files cascade at the schema level.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM directories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete directory", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Atomically increment a directory's access counter.
    pub async fn increment_access(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE directories SET access_count = access_count + 1, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to increment access count", e)
        })?;
        Ok(result.rows_affected() > 0)
    }

    /// The directory with the highest access counter among a user's
    /// directories, or None when the user owns none.
    pub async fn most_accessed(&self, owner_id: &str) -> AppResult<Option<Directory>> {
        sqlx::query_as::<_, Directory>(
            "SELECT * FROM directories WHERE owner_id = $1 \
             ORDER BY access_count DESC, created_at ASC LIMIT 1",
        )
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find most accessed directory", e)
        })
    }

    /// Apply an organize plan in a single transaction.
    ///
    /// For each extension group, finds a direct subdirectory named
    /// exactly after the extension (re-checked inside the transaction;
    /// a pre-existing same-named subdirectory is reused and files merge
    /// into it) or creates one, then bulk re-parents the group's files.
    /// Any step failing rolls the whole plan back.
    pub async fn apply_organize_plan(
        &self,
        directory: &Directory,
        groups: &[ExtensionGroup],
    ) -> AppResult<OrganizeStats> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let mut stats = OrganizeStats::default();

        for group in groups {
            let existing: Option<Uuid> = sqlx::query_scalar(
                "SELECT id FROM directories WHERE parent_id = $1 AND name = $2 \
                 ORDER BY created_at ASC LIMIT 1",
            )
            .bind(directory.id)
            .bind(&group.extension)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to look up subdirectory", e)
            })?;

            let target_id = match existing {
                Some(id) => id,
                None => {
                    let id: Uuid = sqlx::query_scalar(
                        "INSERT INTO directories (name, owner_id, parent_id) \
                         VALUES ($1, $2, $3) RETURNING id",
                    )
                    .bind(&group.extension)
                    .bind(&directory.owner_id)
                    .bind(directory.id)
                    .fetch_one(&mut *tx)
                    .await
                    .map_err(|e| {
                        AppError::with_source(
                            ErrorKind::Database,
                            "Failed to create extension subdirectory",
                            e,
                        )
                    })?;
                    stats.created_directories += 1;
                    id
                }
            };

            let result = sqlx::query("UPDATE files SET directory_id = $2 WHERE id = ANY($1)")
                .bind(&group.file_ids)
                .bind(target_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to re-parent files", e)
                })?;
            stats.moved += result.rows_affected();
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit organize plan", e)
        })?;

        Ok(stats)
    }
}
