/// User repository
///
/// Owns the SQL for the `users` table. Uniqueness of `username` and `email`
/// is enforced by the database; a violated constraint surfaces here as
/// [`RepoError::Conflict`] via the shared classifier.

use sqlx::PgPool;
use tracing::debug;

use crate::models::user::{NewUser, User};
use crate::repos::RepoError;

/// Data access for user accounts
///
/// Holds a clone of the shared connection pool. Cloning the repository is
/// cheap; clones share the same pool.
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a new user row and returns its generated id
    ///
    /// Runs in its own transaction. A duplicate username or email that
    /// slipped past the service-level pre-check is still caught by the
    /// unique constraints and classified as [`RepoError::Conflict`].
    pub async fn create(&self, user: &NewUser) -> Result<i32, RepoError> {
        let mut tx = self.pool.begin().await?;

        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO users (username, email, hashed_password, is_active)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.hashed_password)
        .bind(user.is_active)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        debug!(user_id = id, "created user");
        Ok(id)
    }

    /// Flips the active flag on an existing user
    ///
    /// Returns `Ok(None)` when no row with `user_id` exists. In practice the
    /// id comes from a verified token, so absence means the account was
    /// deleted after the token was issued.
    pub async fn update_status(
        &self,
        user_id: i32,
        is_active: bool,
    ) -> Result<Option<i32>, RepoError> {
        let mut tx = self.pool.begin().await?;

        let updated: Option<i32> = sqlx::query_scalar(
            r#"
            UPDATE users
            SET is_active = $2
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(is_active)
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;

        if updated.is_some() {
            debug!(user_id, is_active, "updated user status");
        }
        Ok(updated)
    }

    /// Looks up a user by email or username
    ///
    /// A single identifier string is matched against both unique columns, so
    /// login works with either. Returns `Ok(None)` when no account matches.
    pub async fn find_by_identifier(&self, identifier: &str) -> Result<Option<User>, RepoError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, hashed_password, is_active
            FROM users
            WHERE email = $1 OR username = $1
            "#,
        )
        .bind(identifier)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
