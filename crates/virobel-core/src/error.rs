/// Error types for the consultation endpoint
use crate::constants::{
    MSG_INVALID_EMAIL, MSG_MISSING_FIELDS, MSG_SEND_FAILED, MSG_TOO_MANY_REQUESTS,
    MSG_VALIDATION_FAILED,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsultError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Input validation failed: {0} too long")]
    FieldTooLong(&'static str),

    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    #[error("Email delivery error: {0}")]
    Delivery(String),

    #[error("Request error: {0}")]
    Transport(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ConsultError {
    /// Errors caused by the caller's input or behaviour
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::MissingFields | Self::InvalidEmail | Self::FieldTooLong(_) | Self::RateLimit(_)
        )
    }

    /// Message that may be returned to the caller.
    ///
    /// Server-side failures all collapse to one generic message so that
    /// provider details never leave the process.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::MissingFields => MSG_MISSING_FIELDS,
            Self::InvalidEmail => MSG_INVALID_EMAIL,
            Self::FieldTooLong(_) => MSG_VALIDATION_FAILED,
            Self::RateLimit(_) => MSG_TOO_MANY_REQUESTS,
            Self::Delivery(_) | Self::Transport(_) | Self::Template(_) | Self::Config(_) => {
                MSG_SEND_FAILED
            }
        }
    }
}

impl From<serde_json::Error> for ConsultError {
    fn from(err: serde_json::Error) -> Self {
        Self::Transport(format!("Invalid JSON body: {}", err))
    }
}

impl From<reqwest::Error> for ConsultError {
    fn from(err: reqwest::Error) -> Self {
        Self::Delivery(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors() {
        assert!(ConsultError::MissingFields.is_client_error());
        assert!(ConsultError::RateLimit("1.2.3.4".to_string()).is_client_error());
        assert!(!ConsultError::Delivery("timeout".to_string()).is_client_error());
        assert!(!ConsultError::Transport("bad json".to_string()).is_client_error());
    }

    #[test]
    fn test_public_message_hides_details() {
        let err = ConsultError::Delivery("api key re_123 rejected".to_string());
        assert_eq!(err.public_message(), MSG_SEND_FAILED);
        assert!(!err.public_message().contains("re_123"));
    }

    #[test]
    fn test_error_display() {
        let err = ConsultError::FieldTooLong("fullName");
        assert_eq!(err.to_string(), "Input validation failed: fullName too long");
    }
}
