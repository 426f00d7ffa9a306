/// JWT issuing and validation
///
/// Access tokens are signed with a symmetric key (HS256 by default) and
/// carry the caller's identity in the claims, so protected handlers never
/// need a database round trip to know who is calling. Tokens are
/// short-lived; there is no refresh flow, clients log in again when a token
/// expires.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::models::user::User;

/// Error type for token operations
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// Failed to sign a token
    #[error("failed to create token: {0}")]
    Create(String),

    /// Token is malformed, has a bad signature, or fails a claim check
    #[error("invalid token: {0}")]
    Invalid(String),

    /// Token expired
    #[error("token has expired")]
    Expired,
}

/// Signing configuration shared by issuing and validation
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Symmetric signing secret, at least 32 bytes
    pub secret: String,

    /// Signing algorithm (HS256 by default)
    pub algorithm: Algorithm,

    /// Access token lifetime in minutes
    pub expiry_minutes: i64,
}

impl TokenConfig {
    pub fn new(secret: impl Into<String>, expiry_minutes: i64) -> Self {
        Self {
            secret: secret.into(),
            algorithm: Algorithm::HS256,
            expiry_minutes,
        }
    }
}

/// Access token claims
///
/// `sub` holds the username; `user_id` is the claim protected handlers use
/// for ownership checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject, the username
    pub sub: String,

    /// Email address of the account
    pub email: String,

    /// Account id (custom claim)
    pub user_id: i32,

    /// Active flag at issue time (custom claim)
    pub is_active: bool,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Builds claims for an authenticated user
    pub fn new(user: &User, expiry_minutes: i64) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::minutes(expiry_minutes);

        Self {
            sub: user.username.clone(),
            email: user.email.clone(),
            user_id: user.id,
            is_active: user.is_active,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Checks whether the expiration has passed
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Signs a token from claims
///
/// # Errors
///
/// Returns [`TokenError::Create`] if encoding fails.
pub fn create_token(claims: &Claims, config: &TokenConfig) -> Result<String, TokenError> {
    let header = Header::new(config.algorithm);
    let key = EncodingKey::from_secret(config.secret.as_bytes());

    encode(&header, claims, &key)
        .map_err(|e| TokenError::Create(format!("token encoding failed: {}", e)))
}

/// Validates a token and extracts its claims
///
/// Checks the signature and expiration. An expired token is reported as
/// [`TokenError::Expired`] so the transport layer can say so; every other
/// failure collapses into [`TokenError::Invalid`].
pub fn validate_token(token: &str, config: &TokenConfig) -> Result<Claims, TokenError> {
    let key = DecodingKey::from_secret(config.secret.as_bytes());
    let validation = Validation::new(config.algorithm);

    let token_data = decode::<Claims>(token, &key, &validation).map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Invalid(format!("token validation failed: {}", e)),
    })?;

    Ok(token_data.claims)
}
