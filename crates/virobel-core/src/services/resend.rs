/// Resend HTTP API email provider
use crate::error::ConsultError;
use crate::models::{ApiKey, ResendConfig};
use crate::services::email::{DeliveryReceipt, EmailProvider, OutboundEmail};
use crate::utils::logging::redact_email;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const PROVIDER_NAME: &str = "resend";

#[derive(Debug, Serialize)]
struct SendEmailPayload<'a> {
    from: &'a str,
    to: &'a [String],
    subject: &'a str,
    html: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: String,
}

pub struct ResendEmailProvider {
    client: reqwest::Client,
    api_url: String,
    api_key: ApiKey,
}

impl ResendEmailProvider {
    pub fn new(client: reqwest::Client, api_url: impl Into<String>, api_key: ApiKey) -> Self {
        Self {
            client,
            api_url: api_url.into(),
            api_key,
        }
    }

    /// Provider with a default HTTP client
    pub fn from_config(config: &ResendConfig) -> Result<Self, ConsultError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| ConsultError::Config("RESEND_API_KEY is not set".to_string()))?;

        let client = reqwest::Client::builder()
            .user_agent(concat!("virobel-core/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ConsultError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::new(client, config.api_url.clone(), api_key))
    }

    fn endpoint(&self) -> String {
        format!("{}/emails", self.api_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl EmailProvider for ResendEmailProvider {
    async fn send(&self, email: &OutboundEmail) -> Result<DeliveryReceipt, ConsultError> {
        let payload = SendEmailPayload {
            from: &email.from,
            to: &email.to,
            subject: &email.subject,
            html: &email.html,
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(self.api_key.expose())
            .json(&payload)
            .send()
            .await
            .map_err(|e| ConsultError::Delivery(format!("Resend request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ConsultError::Delivery(format!(
                "Resend API returned {}: {}",
                status, body
            )));
        }

        let sent: SendEmailResponse = response.json().await.map_err(|e| {
            ConsultError::Delivery(format!("Unexpected Resend API response: {}", e))
        })?;

        tracing::debug!(
            message_id = %sent.id,
            to = %redact_email(&email.to.join(", ")),
            "Sent email via Resend"
        );

        Ok(DeliveryReceipt::new(sent.id, PROVIDER_NAME))
    }
}
