//! Directory entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Name given to the system-created top-level directory of every user.
pub const ROOT_DIRECTORY_NAME: &str = "Root Directory";

/// A directory in a user's file tree.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Directory {
    /// Unique directory identifier.
    pub id: Uuid,
    /// Directory name. Sibling names are not required to be unique.
    pub name: String,
    /// The directory owner.
    pub owner_id: String,
    /// Parent directory ID (null for the root).
    pub parent_id: Option<Uuid>,
    /// Lifetime view counter, incremented on each access.
    pub access_count: i64,
    /// When the directory was created.
    pub created_at: DateTime<Utc>,
    /// When the directory was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Directory {
    /// Check if this is a root directory (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Data required to create a new directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDirectory {
    /// Directory name.
    pub name: String,
    /// The directory owner.
    pub owner_id: String,
    /// Parent directory (None for root).
    pub parent_id: Option<Uuid>,
}
