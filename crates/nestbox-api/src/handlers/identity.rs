//! Login: token verification plus user and root-directory provisioning.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use nestbox_core::error::AppError;

use crate::dto::request::LoginRequest;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/identity/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state.user_service.login(&req.token, &req.name).await?;

    Ok(Json(serde_json::json!({ "user": user })))
}
