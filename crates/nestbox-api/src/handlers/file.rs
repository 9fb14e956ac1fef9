//! File upload handler (multipart).

use axum::Json;
use axum::extract::{Multipart, State};
use bytes::Bytes;
use uuid::Uuid;

use nestbox_core::error::{AppError, ErrorKind};
use nestbox_service::file::upload::UploadParams;

use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/file/upload
///
/// Multipart form with three parts: `file` (the payload, carrying the
/// original filename), `directory_id`, and `user_id`.
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut payload: Option<(String, Bytes)> = None;
    let mut directory_id: Option<Uuid> = None;
    let mut user_id: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::with_source(ErrorKind::Validation, "Malformed multipart body", e)
    })? {
        let name = field.name().map(ToString::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(|e| {
                    AppError::with_source(ErrorKind::Validation, "Failed to read file part", e)
                })?;
                payload = Some((filename, bytes));
            }
            Some("directory_id") => {
                let text = field.text().await.map_err(|e| {
                    AppError::with_source(ErrorKind::Validation, "Failed to read directory_id", e)
                })?;
                directory_id = Some(
                    text.parse::<Uuid>()
                        .map_err(|_| AppError::validation("Invalid directory_id"))?,
                );
            }
            Some("user_id") => {
                user_id = Some(field.text().await.map_err(|e| {
                    AppError::with_source(ErrorKind::Validation, "Failed to read user_id", e)
                })?);
            }
            _ => {}
        }
    }

    let (original_filename, data) = payload
        .ok_or_else(|| AppError::validation("File, directory ID, and user ID are required."))?;
    let directory_id = directory_id
        .ok_or_else(|| AppError::validation("File, directory ID, and user ID are required."))?;
    let user_id = user_id
        .ok_or_else(|| AppError::validation("File, directory ID, and user ID are required."))?;

    let file = state
        .upload_service
        .upload(UploadParams {
            directory_id,
            user_id,
            original_filename,
            data,
        })
        .await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "File uploaded successfully.",
        "file": file,
    })))
}
