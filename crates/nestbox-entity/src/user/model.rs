//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered user, keyed by the external identity subject.
///
/// Created on first successful login; the display name is refreshed on
/// every subsequent login.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// External identity subject (opaque, provider-issued).
    pub id: String,
    /// Email address.
    pub email: String,
    /// Human-readable display name.
    pub display_name: String,
    /// The user's root directory (set during provisioning).
    pub root_dir_id: Option<Uuid>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Whether the user has a provisioned root directory.
    pub fn is_provisioned(&self) -> bool {
        self.root_dir_id.is_some()
    }
}

/// An identity the external provider has vouched for.
///
/// Produced by token verification; input to user provisioning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifiedIdentity {
    /// The provider's subject identifier.
    pub subject: String,
    /// Email address from the token claims.
    pub email: String,
    /// Display name supplied at login.
    pub display_name: String,
}
