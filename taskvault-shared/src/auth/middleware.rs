/// Authentication middleware for Axum
///
/// The gate extracts the `Authorization: Bearer <token>` header, validates
/// the token, and inserts an [`AuthContext`] into the request extensions so
/// protected handlers can read the verified caller identity with axum's
/// `Extension` extractor.
///
/// Any failure short-circuits with 401 before the handler runs. Responses
/// carry a `WWW-Authenticate: Bearer` header and the standard JSON error
/// body.

use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::jwt::{validate_token, TokenConfig, TokenError};

/// Verified caller identity, added to request extensions by the gate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthContext {
    /// Account id of the caller
    pub user_id: i32,

    /// Username from the token subject
    pub username: String,

    /// Email address from the token
    pub email: String,

    /// Active flag at token issue time
    pub is_active: bool,
}

impl AuthContext {
    /// Builds the context from validated claims
    pub fn from_claims(claims: &super::jwt::Claims) -> Self {
        Self {
            user_id: claims.user_id,
            username: claims.sub.clone(),
            email: claims.email.clone(),
            is_active: claims.is_active,
        }
    }
}

/// Error type for the authentication gate
///
/// Every variant maps to 401; the variants only affect the message.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No Authorization header on the request
    #[error("missing credentials")]
    MissingCredentials,

    /// Authorization header present but not a Bearer token
    #[error("expected a Bearer token")]
    InvalidFormat,

    /// Token failed validation
    #[error("invalid token")]
    InvalidToken,

    /// Token expired
    #[error("token has expired")]
    TokenExpired,
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => AuthError::TokenExpired,
            _ => AuthError::InvalidToken,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let message = match self {
            AuthError::MissingCredentials => "Missing credentials",
            AuthError::InvalidFormat => "Expected a Bearer token",
            AuthError::InvalidToken => "Invalid token",
            AuthError::TokenExpired => "Token has expired",
        };

        let body = Json(json!({
            "success": false,
            "message": message,
            "status": 401,
        }));

        let mut response = (StatusCode::UNAUTHORIZED, body).into_response();
        response.headers_mut().insert(
            header::WWW_AUTHENTICATE,
            header::HeaderValue::from_static("Bearer"),
        );
        response
    }
}

/// JWT authentication middleware
///
/// Mount with `axum::middleware::from_fn` and a captured [`TokenConfig`].
/// On success the request continues with an [`AuthContext`] extension; on
/// failure the request ends here with 401.
pub async fn jwt_auth_middleware(
    config: TokenConfig,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingCredentials)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::InvalidFormat)?;

    let claims = validate_token(token, &config)?;

    let auth_context = AuthContext::from_claims(&claims);
    req.extensions_mut().insert(auth_context);

    Ok(next.run(req).await)
}
