/// User service
///
/// Registration, login, and account status changes. This layer hashes and
/// verifies passwords and issues tokens; the repository below it never sees
/// a plaintext password.

use tracing::{info, warn};

use crate::auth::jwt::{create_token, Claims, TokenConfig};
use crate::auth::password::{hash_password, verify_password};
use crate::models::user::NewUser;
use crate::repos::user::UserRepository;
use crate::services::ServiceError;

/// Input for registering an account
#[derive(Debug, Clone)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub is_active: bool,
}

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user_id: i32,
    pub access_token: String,
}

/// Business logic for user accounts
#[derive(Clone)]
pub struct UserService {
    repo: UserRepository,
    tokens: TokenConfig,
}

impl UserService {
    pub fn new(repo: UserRepository, tokens: TokenConfig) -> Self {
        Self { repo, tokens }
    }

    /// Registers a new account and returns its id
    ///
    /// Checks for an existing account with the same email first, then
    /// hashes the password and inserts. The check and the insert are not
    /// atomic; a duplicate that races past the check is still rejected by
    /// the unique constraints and surfaces as a conflict.
    ///
    /// # Errors
    ///
    /// [`ServiceError::AlreadyExists`] when the email is taken.
    pub async fn register(&self, registration: Registration) -> Result<i32, ServiceError> {
        if self
            .repo
            .find_by_identifier(&registration.email)
            .await?
            .is_some()
        {
            return Err(ServiceError::AlreadyExists);
        }

        let hashed_password = hash_password(&registration.password)?;

        let user_id = self
            .repo
            .create(&NewUser {
                username: registration.username,
                email: registration.email,
                hashed_password,
                is_active: registration.is_active,
            })
            .await?;

        info!(user_id, "registered user");
        Ok(user_id)
    }

    /// Authenticates a user and issues an access token
    ///
    /// The identifier may be an email or a username. An unknown account and
    /// a wrong password both fail with [`ServiceError::InvalidCredentials`];
    /// nothing in the outcome distinguishes them.
    pub async fn login(
        &self,
        identifier: &str,
        password: &str,
    ) -> Result<LoginOutcome, ServiceError> {
        let user = match self.repo.find_by_identifier(identifier).await? {
            Some(user) => user,
            None => {
                warn!("login failed: unknown identifier");
                return Err(ServiceError::InvalidCredentials);
            }
        };

        if !verify_password(password, &user.hashed_password)? {
            warn!(user_id = user.id, "login failed: wrong password");
            return Err(ServiceError::InvalidCredentials);
        }

        let claims = Claims::new(&user, self.tokens.expiry_minutes);
        let access_token = create_token(&claims, &self.tokens)?;

        info!(user_id = user.id, "user logged in");
        Ok(LoginOutcome {
            user_id: user.id,
            access_token,
        })
    }

    /// Sets the active flag on the caller's account
    ///
    /// # Errors
    ///
    /// [`ServiceError::NotFound`] when the account no longer exists.
    pub async fn update_status(&self, user_id: i32, is_active: bool) -> Result<(), ServiceError> {
        match self.repo.update_status(user_id, is_active).await? {
            Some(_) => Ok(()),
            None => Err(ServiceError::NotFound),
        }
    }
}
