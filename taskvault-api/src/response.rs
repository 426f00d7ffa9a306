/// Success response envelope
///
/// Every successful endpoint returns the same shape:
///
/// ```json
/// {
///   "success": true,
///   "data": { ... },
///   "message": "Task created successfully",
///   "status": 201
/// }
/// ```
///
/// `data` is omitted when an operation has nothing to return.

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// The standard success envelope
#[derive(Debug, Serialize)]
pub struct MessageResponse<T: Serialize> {
    /// Always true
    pub success: bool,

    /// Operation payload, omitted when empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Human-readable outcome
    pub message: String,

    /// HTTP status code, repeated in the body
    pub status: u16,
}

/// Builds a 200 response with a payload
pub fn ok<T: Serialize>(data: T, message: &str) -> (StatusCode, Json<MessageResponse<T>>) {
    envelope(StatusCode::OK, Some(data), message)
}

/// Builds a 200 response with no payload
pub fn ok_empty(message: &str) -> (StatusCode, Json<MessageResponse<()>>) {
    envelope(StatusCode::OK, None, message)
}

/// Builds a 201 response with a payload
pub fn created<T: Serialize>(data: T, message: &str) -> (StatusCode, Json<MessageResponse<T>>) {
    envelope(StatusCode::CREATED, Some(data), message)
}

fn envelope<T: Serialize>(
    status: StatusCode,
    data: Option<T>,
    message: &str,
) -> (StatusCode, Json<MessageResponse<T>>) {
    (
        status,
        Json(MessageResponse {
            success: true,
            data,
            message: message.to_string(),
            status: status.as_u16(),
        }),
    )
}
