/// Schema bootstrap
///
/// Creates the `users` and `tasks` tables at startup if they do not exist.
/// Both statements are idempotent, so running them on every boot is safe.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id SERIAL PRIMARY KEY,
///     username VARCHAR(50) UNIQUE NOT NULL,
///     email VARCHAR(100) UNIQUE NOT NULL,
///     hashed_password VARCHAR(255) NOT NULL,
///     is_active BOOLEAN NOT NULL DEFAULT TRUE
/// );
///
/// CREATE TABLE tasks (
///     id SERIAL PRIMARY KEY,
///     title VARCHAR(255) NOT NULL,
///     description VARCHAR(1000),
///     completed BOOLEAN NOT NULL DEFAULT FALSE,
///     user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE
/// );
/// ```
///
/// Uniqueness of `username` and `email` and task ownership are enforced by
/// the database; the application layers rely on these constraints rather
/// than duplicating them.

use sqlx::PgPool;
use tracing::info;

const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id SERIAL PRIMARY KEY,
    username VARCHAR(50) UNIQUE NOT NULL,
    email VARCHAR(100) UNIQUE NOT NULL,
    hashed_password VARCHAR(255) NOT NULL,
    is_active BOOLEAN NOT NULL DEFAULT TRUE
)
"#;

const CREATE_TASKS: &str = r#"
CREATE TABLE IF NOT EXISTS tasks (
    id SERIAL PRIMARY KEY,
    title VARCHAR(255) NOT NULL,
    description VARCHAR(1000),
    completed BOOLEAN NOT NULL DEFAULT FALSE,
    user_id INTEGER NOT NULL,
    CONSTRAINT fk_user
        FOREIGN KEY (user_id)
        REFERENCES users (id)
        ON DELETE CASCADE
)
"#;

/// Creates the application tables if they do not already exist
///
/// `users` must be created before `tasks` because of the foreign key.
///
/// # Errors
///
/// Returns the underlying `sqlx::Error` if either statement fails; the
/// caller (process bootstrap) treats this as fatal.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_USERS).execute(pool).await?;
    sqlx::query(CREATE_TASKS).execute(pool).await?;
    info!("database schema ready");
    Ok(())
}
