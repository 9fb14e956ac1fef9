//! Request DTOs with validation.
//!
//! String fields default to empty and UUID fields to `None` when the
//! client omits them, so a missing field surfaces as a 400 validation
//! error rather than a deserialization rejection.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Identity provider token.
    #[serde(default)]
    #[validate(length(min = 1, message = "token is required"))]
    pub token: String,
    /// Display name to record for the user.
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
}

/// Create subdirectory request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDirectoryRequest {
    /// Parent directory ID.
    #[serde(default)]
    pub parent_id: Option<Uuid>,
    /// Directory name.
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "name is required"))]
    pub name: String,
}

/// Create directory under the caller's root.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateRootDirectoryRequest {
    /// The acting user.
    #[serde(default)]
    #[validate(length(min = 1, message = "user_id is required"))]
    pub user_id: String,
    /// Directory name.
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "name is required"))]
    pub name: String,
}

/// Access counter increment request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAccessRequest {
    /// The directory that was viewed.
    #[serde(default)]
    pub directory_id: Option<Uuid>,
}
