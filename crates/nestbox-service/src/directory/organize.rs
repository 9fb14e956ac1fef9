//! Auto-organize: partition a directory's direct files into
//! extension-named subdirectories.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use nestbox_core::error::AppError;
use nestbox_database::repositories::directory::{
    DirectoryRepository, ExtensionGroup, OrganizeStats,
};
use nestbox_database::repositories::file::FileRepository;
use nestbox_entity::file::StoredFile;
use nestbox_insight::InsightClient;

use crate::context::RequestContext;
use crate::directory::service::DirectoryService;

/// Message reported when the insight collaborator is unavailable.
const FALLBACK_MESSAGE: &str = "Files processed.";

/// What an organize run did.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct OrganizeOutcome {
    /// Number of files re-parented.
    pub moved: u64,
    /// Number of extension subdirectories newly created.
    pub created_directories: u64,
    /// Advisory confirmation text.
    pub message: String,
}

/// Runs the auto-organize routine.
#[derive(Debug, Clone)]
pub struct OrganizeService {
    /// Directory service (ownership checks).
    directory_service: Arc<DirectoryService>,
    /// Directory repository (plan application).
    directory_repo: Arc<DirectoryRepository>,
    /// File repository.
    file_repo: Arc<FileRepository>,
    /// Insight collaborator for the advisory message.
    insight: Arc<InsightClient>,
}

impl OrganizeService {
    /// Creates a new organize service.
    pub fn new(
        directory_service: Arc<DirectoryService>,
        directory_repo: Arc<DirectoryRepository>,
        file_repo: Arc<FileRepository>,
        insight: Arc<InsightClient>,
    ) -> Self {
        Self {
            directory_service,
            directory_repo,
            file_repo,
            insight,
        }
    }

    /// Organize a caller-owned directory by file extension.
    ///
    /// The structural change runs first, in one transaction; the
    /// advisory message is a best-effort follow-up whose failure never
    /// undoes or fails the reorganization. Running on an
    /// already-organized directory is a no-op.
    pub async fn organize(
        &self,
        ctx: &RequestContext,
        directory_id: Uuid,
    ) -> Result<OrganizeOutcome, AppError> {
        let directory = self.directory_service.get_owned(ctx, directory_id).await?;

        let files = self.file_repo.find_by_directory(directory.id).await?;
        let groups = plan_extension_groups(&files);

        let stats = if groups.is_empty() {
            OrganizeStats::default()
        } else {
            self.directory_repo
                .apply_organize_plan(&directory, &groups)
                .await?
        };

        info!(
            user_id = %ctx.user_id,
            directory_id = %directory_id,
            moved = stats.moved,
            created = stats.created_directories,
            "Directory organized"
        );

        let message = match self.insight.organize_confirmation().await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "Advisory message unavailable, using fallback");
                FALLBACK_MESSAGE.to_string()
            }
        };

        Ok(OrganizeOutcome {
            moved: stats.moved,
            created_directories: stats.created_directories,
            message,
        })
    }
}

/// Group a directory's direct files by extension.
///
/// Files with an empty extension stay in place; a subdirectory named
/// after the empty string is never created. Groups come back in
/// extension order so runs are deterministic.
pub fn plan_extension_groups(files: &[StoredFile]) -> Vec<ExtensionGroup> {
    let mut by_extension: BTreeMap<&str, Vec<Uuid>> = BTreeMap::new();
    for file in files {
        if file.extension.is_empty() {
            continue;
        }
        by_extension.entry(&file.extension).or_default().push(file.id);
    }

    by_extension
        .into_iter()
        .map(|(extension, file_ids)| ExtensionGroup {
            extension: extension.to_string(),
            file_ids,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn file(name: &str, extension: &str) -> StoredFile {
        StoredFile {
            id: Uuid::new_v4(),
            name: name.to_string(),
            extension: extension.to_string(),
            storage_url: format!("http://blobs/{name}"),
            directory_id: Uuid::new_v4(),
            owner_id: "uid-1".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_groups_by_extension() {
        let a = file("a", "txt");
        let b = file("b", "txt");
        let c = file("c", "pdf");
        let groups = plan_extension_groups(&[a.clone(), b.clone(), c.clone()]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].extension, "pdf");
        assert_eq!(groups[0].file_ids, vec![c.id]);
        assert_eq!(groups[1].extension, "txt");
        assert_eq!(groups[1].file_ids, vec![a.id, b.id]);
    }

    #[test]
    fn test_empty_extension_stays_in_place() {
        let plain = file("report", "");
        let groups = plan_extension_groups(&[plain]);
        assert!(groups.is_empty());
    }

    #[test]
    fn test_no_files_plans_nothing() {
        assert!(plan_extension_groups(&[]).is_empty());
    }

    #[test]
    fn test_organized_directory_plans_nothing_again() {
        // After a run, the parent holds no direct files with a
        // non-empty extension, so a second plan is empty: idempotent.
        let leftover = file("README", "");
        let groups = plan_extension_groups(&[leftover]);
        assert!(groups.is_empty());
    }
}
