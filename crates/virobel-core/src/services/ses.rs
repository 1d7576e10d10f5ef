/// SES email sending service
use crate::email::composer::compose_html_message;
use crate::error::ConsultError;
use crate::services::email::{DeliveryReceipt, EmailProvider, OutboundEmail};
use crate::utils::logging::redact_email;
use async_trait::async_trait;
use aws_sdk_ses::primitives::Blob;
use aws_sdk_ses::types::RawMessage;

const PROVIDER_NAME: &str = "ses";

pub struct SesEmailProvider {
    client: aws_sdk_ses::Client,
}

impl SesEmailProvider {
    pub fn new(client: aws_sdk_ses::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EmailProvider for SesEmailProvider {
    async fn send(&self, email: &OutboundEmail) -> Result<DeliveryReceipt, ConsultError> {
        let raw_email = compose_html_message(email)?;

        let raw_message = RawMessage::builder()
            .data(Blob::new(raw_email))
            .build()
            .map_err(|e| ConsultError::Delivery(format!("Failed to build raw message: {}", e)))?;

        let response = self
            .client
            .send_raw_email()
            .raw_message(raw_message)
            .source(&email.from)
            .set_destinations(Some(email.to.clone()))
            .send()
            .await
            .map_err(|e| ConsultError::Delivery(format!("SES send_raw_email failed: {}", e)))?;

        let message_id = response.message_id().to_string();

        tracing::debug!(
            message_id = %message_id,
            to = %redact_email(&email.to.join(", ")),
            "Sent email via SES"
        );

        Ok(DeliveryReceipt::new(message_id, PROVIDER_NAME))
    }
}
