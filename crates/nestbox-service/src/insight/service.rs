//! Metadata insight: hand a user's file metadata to the external model
//! for suggestions and a recommended file.

use std::sync::Arc;

use nestbox_core::error::AppError;
use nestbox_database::repositories::file::FileRepository;
use nestbox_insight::{InsightClient, Recommendation};

use crate::context::RequestContext;

/// The insight report returned to the client.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct MetadataReport {
    /// Free-text organization suggestions.
    pub insights: String,
    /// The single recommended file, when the model produced a parseable
    /// fragment.
    pub recommended: Option<Recommendation>,
}

/// Builds metadata reports via the insight collaborator.
#[derive(Debug, Clone)]
pub struct MetadataInsightService {
    /// File repository.
    file_repo: Arc<FileRepository>,
    /// Insight client.
    insight: Arc<InsightClient>,
}

impl MetadataInsightService {
    /// Creates a new metadata insight service.
    pub fn new(file_repo: Arc<FileRepository>, insight: Arc<InsightClient>) -> Self {
        Self { file_repo, insight }
    }

    /// Collect the caller's file metadata and ask the model for
    /// suggestions and one recommended file.
    ///
    /// The metadata travels as an opaque JSON blob; the model's output
    /// is not validated beyond best-effort fragment parsing.
    pub async fn report(&self, ctx: &RequestContext) -> Result<MetadataReport, AppError> {
        let metadata = self.file_repo.metadata_for_owner(&ctx.user_id).await?;
        let blob = serde_json::to_value(&metadata)?;

        let insights = self.insight.organization_suggestions(&blob).await?;
        let recommended = self.insight.recommend_file(&blob).await?;

        Ok(MetadataReport {
            insights,
            recommended,
        })
    }
}
