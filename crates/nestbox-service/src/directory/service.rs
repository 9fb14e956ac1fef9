//! Directory tree operations with ownership enforcement.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use nestbox_core::error::AppError;
use nestbox_database::repositories::directory::DirectoryRepository;
use nestbox_database::repositories::file::FileRepository;
use nestbox_database::repositories::user::UserRepository;
use nestbox_entity::directory::{CreateDirectory, Directory};
use nestbox_entity::file::StoredFile;

use crate::context::RequestContext;

/// A directory's direct children.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DirectoryContents {
    /// The directory's name.
    pub name: String,
    /// Direct files.
    pub files: Vec<StoredFile>,
    /// Direct subdirectories.
    pub directories: Vec<Directory>,
}

/// A user's root directory and its direct children.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RootContents {
    /// The root directory's id.
    pub root_dir_id: Uuid,
    /// Direct files.
    pub files: Vec<StoredFile>,
    /// Direct subdirectories.
    pub directories: Vec<Directory>,
}

/// Manages directory CRUD, listing, and access counting.
#[derive(Debug, Clone)]
pub struct DirectoryService {
    /// Directory repository.
    directory_repo: Arc<DirectoryRepository>,
    /// File repository.
    file_repo: Arc<FileRepository>,
    /// User repository (root lookups).
    user_repo: Arc<UserRepository>,
}

impl DirectoryService {
    /// Creates a new directory service.
    pub fn new(
        directory_repo: Arc<DirectoryRepository>,
        file_repo: Arc<FileRepository>,
        user_repo: Arc<UserRepository>,
    ) -> Self {
        Self {
            directory_repo,
            file_repo,
            user_repo,
        }
    }

    /// Fetch a directory owned by the caller.
    ///
    /// Existence is checked before ownership, so not-found and
    /// access-denied are mutually exclusive outcomes.
    pub async fn get_owned(&self, ctx: &RequestContext, id: Uuid) -> Result<Directory, AppError> {
        let directory = self
            .directory_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Directory not found"))?;

        if directory.owner_id != ctx.user_id {
            return Err(AppError::authorization("Access denied"));
        }

        Ok(directory)
    }

    /// List the direct children of a caller-owned directory.
    pub async fn get_contents(
        &self,
        ctx: &RequestContext,
        id: Uuid,
    ) -> Result<DirectoryContents, AppError> {
        let directory = self.get_owned(ctx, id).await?;

        let files = self.file_repo.find_by_directory(directory.id).await?;
        let directories = self.directory_repo.find_children(directory.id).await?;

        Ok(DirectoryContents {
            name: directory.name,
            files,
            directories,
        })
    }

    /// Create a subdirectory under a parent.
    ///
    /// The new directory inherits the parent's owner; the caller must
    /// own the parent, which keeps parent/child ownership consistent.
    /// Sibling names are not required to be unique.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        parent_id: Uuid,
        name: &str,
    ) -> Result<Directory, AppError> {
        if name.trim().is_empty() {
            return Err(AppError::validation("Directory name cannot be empty"));
        }

        let parent = self
            .directory_repo
            .find_by_id(parent_id)
            .await?
            .ok_or_else(|| AppError::not_found("Parent directory not found"))?;

        if parent.owner_id != ctx.user_id {
            return Err(AppError::authorization("Access denied"));
        }

        let directory = self
            .directory_repo
            .create(&CreateDirectory {
                name: name.to_string(),
                owner_id: parent.owner_id,
                parent_id: Some(parent.id),
            })
            .await?;

        info!(
            user_id = %ctx.user_id,
            directory_id = %directory.id,
            parent_id = %parent_id,
            "Directory created"
        );

        Ok(directory)
    }

    /// Delete a caller-owned directory; children and files cascade.
    ///
    /// The root directory is the anchor of the user's tree and cannot
    /// be deleted.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        let directory = self.get_owned(ctx, id).await?;

        if directory.is_root() {
            return Err(AppError::validation("The root directory cannot be deleted"));
        }

        self.directory_repo.delete(id).await?;

        info!(user_id = %ctx.user_id, directory_id = %id, "Directory deleted");
        Ok(())
    }

    /// Increment a directory's access counter.
    pub async fn record_access(&self, id: Uuid) -> Result<(), AppError> {
        let updated = self.directory_repo.increment_access(id).await?;
        if !updated {
            return Err(AppError::not_found("Directory not found"));
        }
        Ok(())
    }

    /// The caller's most accessed directory, or None when they own none.
    pub async fn most_accessed(
        &self,
        ctx: &RequestContext,
    ) -> Result<Option<Directory>, AppError> {
        self.directory_repo.most_accessed(&ctx.user_id).await
    }

    /// The caller's root directory contents.
    pub async fn root_contents(&self, ctx: &RequestContext) -> Result<RootContents, AppError> {
        let root = self.find_root(&ctx.user_id).await?;

        let files = self.file_repo.find_by_directory(root.id).await?;
        let directories = self.directory_repo.find_children(root.id).await?;

        Ok(RootContents {
            root_dir_id: root.id,
            files,
            directories,
        })
    }

    /// Create a directory directly under a user's root.
    pub async fn create_under_root(
        &self,
        user_id: &str,
        name: &str,
    ) -> Result<Directory, AppError> {
        if name.trim().is_empty() {
            return Err(AppError::validation("Directory name cannot be empty"));
        }

        let root = self.find_root(user_id).await?;
        let ctx = RequestContext::new(user_id);
        self.create(&ctx, root.id, name).await
    }

    /// Resolve a user's root directory.
    async fn find_root(&self, user_id: &str) -> Result<Directory, AppError> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        let root_id = user
            .root_dir_id
            .ok_or_else(|| AppError::not_found("Root directory not found"))?;

        self.directory_repo
            .find_by_id(root_id)
            .await?
            .ok_or_else(|| AppError::not_found("Root directory not found"))
    }
}
