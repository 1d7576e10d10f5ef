/// Consultation request models
use crate::constants::{
    MAX_EMAIL_LENGTH, MAX_FULL_NAME_LENGTH, MAX_LOCATION_LENGTH, MAX_MESSAGE_LENGTH,
    MAX_PHONE_LENGTH,
};
use crate::error::ConsultError;
use crate::utils::validation::{is_valid_email, within_length};
use serde::{Deserialize, Serialize};

/// Consultation request as submitted by the website form.
///
/// Every field is optional on the wire; [`ConsultationRequest::validate`]
/// decides what is acceptable since client-side checks are not trusted.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationRequest {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A consultation request that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Consultation {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub message: Option<String>,
}

impl ConsultationRequest {
    /// Parses a JSON request body
    pub fn from_json(body: &[u8]) -> Result<Self, ConsultError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Validates the request.
    ///
    /// Checks run in a fixed order and stop at the first failure: required
    /// fields, email shape, then length bounds. An empty message counts as
    /// no message.
    pub fn validate(self) -> Result<Consultation, ConsultError> {
        let (Some(full_name), Some(email), Some(phone), Some(location)) = (
            non_empty(self.full_name),
            non_empty(self.email),
            non_empty(self.phone),
            non_empty(self.location),
        ) else {
            return Err(ConsultError::MissingFields);
        };

        if !is_valid_email(&email) {
            return Err(ConsultError::InvalidEmail);
        }

        let message = non_empty(self.message);

        let limits = [
            ("fullName", Some(&full_name), MAX_FULL_NAME_LENGTH),
            ("email", Some(&email), MAX_EMAIL_LENGTH),
            ("phone", Some(&phone), MAX_PHONE_LENGTH),
            ("location", Some(&location), MAX_LOCATION_LENGTH),
            ("message", message.as_ref(), MAX_MESSAGE_LENGTH),
        ];
        for (field, value, max) in limits {
            if value.is_some_and(|v| !within_length(v, max)) {
                return Err(ConsultError::FieldTooLong(field));
            }
        }

        Ok(Consultation {
            full_name,
            email,
            phone,
            location,
            message,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
