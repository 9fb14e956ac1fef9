//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use nestbox_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// Newtype around [`AppError`] carrying the HTTP conversion.
///
/// Handlers return `Result<_, ApiError>`; the `From` impl lets `?`
/// lift any `AppResult` into a response.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let (status, error_code) = match err.kind {
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ErrorKind::Authentication => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            ErrorKind::Authorization => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ErrorKind::Conflict => (StatusCode::CONFLICT, "CONFLICT"),
            _ => {
                tracing::error!(kind = %err.kind, error = %err.message, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        // Clients get a generic message for server-side failures.
        let message = if status.is_server_error() {
            "Internal server error".to_string()
        } else {
            err.message
        };

        let body = ApiErrorResponse {
            error: error_code.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_for(err: AppError) -> StatusCode {
        ApiError(err).into_response().status()
    }

    #[test]
    fn test_taxonomy_mapping() {
        assert_eq!(
            status_for(AppError::validation("bad input")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(AppError::authentication("bad token")),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_for(AppError::authorization("not yours")),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status_for(AppError::not_found("missing")),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(AppError::conflict("dupe")),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_everything_else_is_500() {
        assert_eq!(
            status_for(AppError::database("boom")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_for(AppError::storage("boom")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_for(AppError::external_service("boom")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
