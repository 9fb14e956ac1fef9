//! Login handling: token verification plus user/root provisioning.

use std::sync::Arc;

use tracing::info;

use nestbox_auth::IdentityVerifier;
use nestbox_core::error::AppError;
use nestbox_database::repositories::user::UserRepository;
use nestbox_entity::user::User;

/// Handles logins against the external identity provider.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Identity token verifier.
    verifier: Arc<IdentityVerifier>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(user_repo: Arc<UserRepository>, verifier: Arc<IdentityVerifier>) -> Self {
        Self {
            user_repo,
            verifier,
        }
    }

    /// Verifies an identity token and returns the (possibly freshly
    /// provisioned) user, guaranteed to own exactly one root directory.
    ///
    /// On repeat logins only the display name is refreshed.
    pub async fn login(&self, token: &str, display_name: &str) -> Result<User, AppError> {
        if token.trim().is_empty() || display_name.trim().is_empty() {
            return Err(AppError::validation("token and name are required"));
        }

        let identity = self.verifier.verify(token, display_name)?;
        let user = self.user_repo.provision(&identity).await?;

        info!(user_id = %user.id, "User logged in");
        Ok(user)
    }
}
