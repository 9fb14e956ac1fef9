//! Metadata insight handler.

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;

use nestbox_core::error::AppError;
use nestbox_service::context::RequestContext;

use crate::error::ApiError;
use crate::extractors::caller::USER_ID_HEADER;
use crate::state::AppState;

/// GET /api/getMetadata
///
/// As with the most-accessed lookup, a missing caller id on this path
/// is reported as a validation error.
pub async fn get_metadata(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, ApiError> {
    let user_id = headers
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::validation("User ID is required."))?;

    let ctx = RequestContext::new(user_id);
    let report = state.insight_service.report(&ctx).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "insights": report.insights,
        "recommended": report.recommended,
    })))
}
