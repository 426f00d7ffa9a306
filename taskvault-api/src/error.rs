/// Error handling for the API server
///
/// A single error type maps every failure to an HTTP response. Handlers
/// return `Result<T, ApiError>`; the `From<ServiceError>` impl below is the
/// only place where business and infrastructure failures are translated to
/// status codes, so a new service outcome gets its transport mapping in
/// exactly one spot.
///
/// Error bodies share the envelope shape of success responses:
///
/// ```json
/// {
///   "success": false,
///   "message": "Invalid credentials",
///   "status": 401
/// }
/// ```
///
/// Validation failures additionally carry a `details` array naming the
/// offending fields.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use taskvault_shared::repos::RepoError;
use taskvault_shared::services::ServiceError;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Unauthorized (401)
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Not found (404)
    #[error("not found: {0}")]
    NotFound(String),

    /// Conflict (409), e.g. duplicate email
    #[error("conflict: {0}")]
    Conflict(String),

    /// Unprocessable entity (422), request validation failed
    #[error("validation failed: {} errors", .0.len())]
    ValidationError(Vec<ValidationErrorDetail>),

    /// Internal server error (500)
    #[error("internal error: {0}")]
    InternalError(String),

    /// Service unavailable (503), database unreachable
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Validation error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorDetail {
    /// Field that failed validation
    pub field: String,

    /// Error message
    pub message: String,
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always false
    pub success: bool,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code, repeated in the body
    pub status: u16,

    /// Optional validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ValidationErrorDetail>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg, None),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg, None),
            ApiError::ValidationError(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Request validation failed".to_string(),
                Some(errors),
            ),
            ApiError::InternalError(msg) => {
                // Log the detail but never expose it to clients.
                tracing::error!("internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                    None,
                )
            }
            ApiError::ServiceUnavailable(msg) => {
                tracing::error!("service unavailable: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Service temporarily unavailable".to_string(),
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            success: false,
            message,
            status: status.as_u16(),
            details,
        });

        let mut response = (status, body).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                header::HeaderValue::from_static("Bearer"),
            );
        }
        response
    }
}

/// The transport translation table
///
/// Business outcomes map to their fixed codes; classified repository
/// failures map by kind; hashing and token-signing failures are internal.
impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::AlreadyExists => {
                ApiError::Conflict("User with this email already exists".to_string())
            }
            ServiceError::NotFound => ApiError::NotFound("Resource not found".to_string()),
            ServiceError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            ServiceError::Repo(RepoError::Connection(msg)) => ApiError::ServiceUnavailable(msg),
            ServiceError::Repo(RepoError::Conflict(msg)) => {
                // Constraint names and driver text stay in the logs; the
                // client sees the same body as the pre-check path, so a
                // registration race is invisible.
                tracing::error!("conflict: {}", msg);
                ApiError::Conflict("User with this email already exists".to_string())
            }
            ServiceError::Repo(RepoError::Query(msg)) => ApiError::InternalError(msg),
            ServiceError::Password(e) => ApiError::InternalError(e.to_string()),
            ServiceError::Token(e) => ApiError::InternalError(e.to_string()),
        }
    }
}

/// Convert request validation failures to 422 with field details
impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details: Vec<ValidationErrorDetail> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| ValidationErrorDetail {
                    field: field.to_string(),
                    message: error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "Validation failed".to_string()),
                })
            })
            .collect();
        ApiError::ValidationError(details)
    }
}
