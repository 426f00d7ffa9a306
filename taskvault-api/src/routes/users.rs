/// User endpoints
///
/// # Endpoints
///
/// - `POST /users/register` - Register a new account (public)
/// - `POST /users/login` - Authenticate and get an access token (public)
/// - `PUT /users/update-status` - Set the caller's active flag (authenticated)

use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use taskvault_shared::auth::middleware::AuthContext;
use taskvault_shared::services::user::Registration;

use crate::{
    app::AppState,
    error::ApiResult,
    response::{self, MessageResponse},
};

/// Register request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Username, unique, at most 50 characters
    #[validate(length(min = 1, max = 50, message = "Username must be 1 to 50 characters"))]
    pub username: String,

    /// Email address, unique, at most 100 characters
    #[validate(
        email(message = "Invalid email format"),
        length(max = 100, message = "Email must be at most 100 characters")
    )]
    pub email: String,

    /// Plaintext password, hashed before storage
    #[validate(length(min = 8, max = 128, message = "Password must be 8 to 128 characters"))]
    pub password: String,

    /// Whether the account starts active
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Register response payload
#[derive(Debug, Serialize)]
pub struct RegisterData {
    /// Id of the created account
    pub user_id: i32,
}

/// Login request
///
/// `email_or_username` matches either unique column.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Identifier must not be empty"))]
    pub email_or_username: String,

    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}

/// Login response payload
#[derive(Debug, Serialize)]
pub struct LoginData {
    /// Id of the authenticated account
    pub user_id: i32,

    /// Signed access token
    pub access_token: String,

    /// Always "bearer"
    pub token_type: String,
}

/// Update status request
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub is_active: bool,
}

/// Update status response payload
#[derive(Debug, Serialize)]
pub struct UpdateStatusData {
    /// Id of the updated account
    pub user_id: i32,
}

/// Registers a new user
///
/// # Errors
///
/// - `422 Unprocessable Entity`: validation failed
/// - `409 Conflict`: email or username already taken
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse<RegisterData>>)> {
    req.validate()?;

    let user_id = state
        .users
        .register(Registration {
            username: req.username,
            email: req.email,
            password: req.password,
            is_active: req.is_active,
        })
        .await?;

    Ok(response::created(
        RegisterData { user_id },
        "User created successfully",
    ))
}

/// Authenticates a user and returns an access token
///
/// # Errors
///
/// - `401 Unauthorized`: unknown account or wrong password, with an
///   identical body for both
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse<LoginData>>)> {
    req.validate()?;

    let outcome = state
        .users
        .login(&req.email_or_username, &req.password)
        .await?;

    Ok(response::ok(
        LoginData {
            user_id: outcome.user_id,
            access_token: outcome.access_token,
            token_type: "bearer".to_string(),
        },
        "Login successful",
    ))
}

/// Sets the caller's active flag
///
/// The account is identified by the verified token, not by request input.
pub async fn update_status(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<UpdateStatusRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse<UpdateStatusData>>)> {
    state
        .users
        .update_status(auth.user_id, req.is_active)
        .await?;

    Ok(response::ok(
        UpdateStatusData {
            user_id: auth.user_id,
        },
        "User status updated successfully",
    ))
}
