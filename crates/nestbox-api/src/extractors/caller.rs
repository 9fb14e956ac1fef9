//! `Caller` extractor — reads the caller's user id from the
//! `x-user-id` header and injects a request context.
//!
//! Internal endpoints trust this header as-is; only the login endpoint
//! verifies provider tokens.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use nestbox_core::error::AppError;
use nestbox_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Header carrying the caller's user id on read paths.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Extracted caller context available in handlers.
#[derive(Debug, Clone)]
pub struct Caller(pub RequestContext);

impl std::ops::Deref for Caller {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for Caller {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ApiError(AppError::authentication("Missing x-user-id header")))?;

        Ok(Caller(RequestContext::new(user_id)))
    }
}
