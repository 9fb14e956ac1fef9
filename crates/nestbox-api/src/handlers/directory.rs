//! Directory retrieval, creation, deletion, and access counting.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use uuid::Uuid;
use validator::Validate;

use nestbox_core::error::AppError;

use crate::dto::request::{CreateDirectoryRequest, CreateRootDirectoryRequest, UpdateAccessRequest};
use crate::error::ApiError;
use crate::extractors::Caller;
use crate::extractors::caller::USER_ID_HEADER;
use crate::state::AppState;

/// GET /api/directory/{id}
pub async fn get_directory(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let contents = state.directory_service.get_contents(&caller, id).await?;

    Ok(Json(serde_json::json!({
        "name": contents.name,
        "files": contents.files,
        "directories": contents.directories,
    })))
}

/// DELETE /api/directory/{id}
pub async fn delete_directory(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.directory_service.delete(&caller, id).await?;

    Ok(Json(
        serde_json::json!({ "message": "Directory deleted successfully." }),
    ))
}

/// POST /api/directory/create
pub async fn create_directory(
    State(state): State<AppState>,
    caller: Caller,
    Json(req): Json<CreateDirectoryRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let parent_id = req
        .parent_id
        .ok_or_else(|| AppError::validation("parent_id is required"))?;

    let directory = state
        .directory_service
        .create(&caller, parent_id, &req.name)
        .await?;

    Ok(Json(
        serde_json::json!({ "success": true, "directory": directory }),
    ))
}

/// GET /api/root-dir
pub async fn get_root_directory(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<Json<serde_json::Value>, ApiError> {
    let contents = state.directory_service.root_contents(&caller).await?;

    Ok(Json(serde_json::json!({
        "root_dir_id": contents.root_dir_id,
        "files": contents.files,
        "directories": contents.directories,
    })))
}

/// POST /api/root-dir/create
pub async fn create_under_root(
    State(state): State<AppState>,
    Json(req): Json<CreateRootDirectoryRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let directory = state
        .directory_service
        .create_under_root(&req.user_id, &req.name)
        .await?;

    Ok(Json(
        serde_json::json!({ "success": true, "directory": directory }),
    ))
}

/// GET /api/getMostAccessedDirectory
///
/// The caller id is required but its absence is a validation error on
/// this path, not an authentication failure.
pub async fn most_accessed_directory(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, ApiError> {
    let user_id = headers
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::validation("user id is required"))?;

    let ctx = nestbox_service::context::RequestContext::new(user_id);
    let directory = state.directory_service.most_accessed(&ctx).await?;

    Ok(Json(serde_json::json!({ "directory": directory })))
}

/// POST /api/updateDirectoryAccess
pub async fn update_directory_access(
    State(state): State<AppState>,
    Json(req): Json<UpdateAccessRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let directory_id = req
        .directory_id
        .ok_or_else(|| AppError::validation("Directory ID is required"))?;

    state.directory_service.record_access(directory_id).await?;

    Ok(Json(
        serde_json::json!({ "message": "Access count updated" }),
    ))
}
