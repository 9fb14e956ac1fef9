//! Auto-organize handler.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use crate::error::ApiError;
use crate::extractors::Caller;
use crate::state::AppState;

/// POST /api/process-directory/{id}
pub async fn process_directory(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let outcome = state.organize_service.organize(&caller, id).await?;

    Ok(Json(serde_json::json!({
        "message": outcome.message,
        "moved": outcome.moved,
        "created_directories": outcome.created_directories,
    })))
}
