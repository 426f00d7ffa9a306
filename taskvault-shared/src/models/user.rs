/// User account model
///
/// Maps one row of the `users` table. Passwords are stored as Argon2id
/// hashes, never in plaintext; the hash is excluded from serialized output
/// so a `User` can never leak it through a response body.

use serde::{Deserialize, Serialize};

/// A user account row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Generated identity
    pub id: i32,

    /// Unique username, at most 50 characters
    pub username: String,

    /// Unique email address, at most 100 characters
    pub email: String,

    /// Argon2id password hash (opaque; never serialized)
    #[serde(skip_serializing)]
    pub hashed_password: String,

    /// Whether the account is active
    pub is_active: bool,
}

/// Input for creating a user row
///
/// The password has already been hashed by the service layer when this
/// reaches the repository.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub hashed_password: String,
    pub is_active: bool,
}
