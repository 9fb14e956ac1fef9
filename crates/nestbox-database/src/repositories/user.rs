//! User repository implementation, including atomic first-login
//! provisioning of the user row and its root directory.

use sqlx::PgPool;
use tracing::info;

use nestbox_core::error::{AppError, ErrorKind};
use nestbox_core::result::AppResult;
use nestbox_entity::directory::model::ROOT_DIRECTORY_NAME;
use nestbox_entity::user::model::{User, VerifiedIdentity};

/// Repository for user rows and identity provisioning.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by the external identity subject.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Upsert the user for a verified identity and guarantee it owns
    /// exactly one root directory.
    ///
    /// Runs in a single transaction. The upsert takes the user's row
    /// lock, so concurrent first logins for the same subject serialize:
    /// the second transaction blocks on the lock, then observes the
    /// root directory the first one committed and creates nothing.
    pub async fn provision(&self, identity: &VerifiedIdentity) -> AppResult<User> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (id, email, display_name) VALUES ($1, $2, $3) \
             ON CONFLICT (id) DO UPDATE \
                SET display_name = EXCLUDED.display_name, updated_at = NOW() \
             RETURNING *",
        )
        .bind(&identity.subject)
        .bind(&identity.email)
        .bind(&identity.display_name)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to upsert user", e))?;

        if user.root_dir_id.is_some() {
            tx.commit().await.map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
            })?;
            return Ok(user);
        }

        let root_id: uuid::Uuid = sqlx::query_scalar(
            "INSERT INTO directories (name, owner_id) VALUES ($1, $2) RETURNING id",
        )
        .bind(ROOT_DIRECTORY_NAME)
        .bind(&identity.subject)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create root directory", e)
        })?;

        let user = sqlx::query_as::<_, User>(
            "UPDATE users SET root_dir_id = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(&identity.subject)
        .bind(root_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to link root directory", e))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;

        info!(user_id = %user.id, root_dir_id = ?user.root_dir_id, "Provisioned user with root directory");
        Ok(user)
    }
}
