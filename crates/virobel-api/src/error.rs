/// API Error types
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use virobel_core::ConsultError;
use virobel_core::constants::MSG_SEND_FAILED;

/// API Error
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Too many requests: {0}")]
    TooManyRequests(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::TooManyRequests(msg) => (StatusCode::TOO_MANY_REQUESTS, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Convert core errors to API errors.
///
/// Only the public message crosses this boundary; server-side detail stays
/// in the logs.
impl From<ConsultError> for ApiError {
    fn from(err: ConsultError) -> Self {
        let message = err.public_message().to_string();
        match err {
            ConsultError::MissingFields
            | ConsultError::InvalidEmail
            | ConsultError::FieldTooLong(_) => ApiError::BadRequest(message),
            ConsultError::RateLimit(_) => ApiError::TooManyRequests(message),
            ConsultError::Delivery(_)
            | ConsultError::Transport(_)
            | ConsultError::Template(_)
            | ConsultError::Config(_) => ApiError::Internal(MSG_SEND_FAILED.to_string()),
        }
    }
}
