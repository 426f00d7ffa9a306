/// Business logic and the service error taxonomy
///
/// Services sit between the HTTP handlers and the repositories. They own
/// the rules that are not the store's job: the pre-insert duplicate check,
/// password hashing and verification, token issuing, and the mapping of an
/// absent row to a business outcome.
///
/// # Modules
///
/// - `user`: registration, login, account status
/// - `task`: task create, update, delete, list

pub mod task;
pub mod user;

use crate::auth::jwt::TokenError;
use crate::auth::password::PasswordError;
use crate::repos::RepoError;

/// Failure of a service operation
///
/// Business outcomes get their own variants; infrastructure failures from
/// the layers below pass through wrapped so the transport layer can
/// translate everything from one place.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// A user with the same email or username already exists
    #[error("user already exists")]
    AlreadyExists,

    /// The addressed entity does not exist for this caller
    #[error("not found")]
    NotFound,

    /// Unknown account or wrong password, deliberately indistinguishable
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Repository failure, already classified
    #[error(transparent)]
    Repo(#[from] RepoError),

    /// Password hashing or verification failure
    #[error(transparent)]
    Password(#[from] PasswordError),

    /// Token issuing failure
    #[error(transparent)]
    Token(#[from] TokenError),
}
