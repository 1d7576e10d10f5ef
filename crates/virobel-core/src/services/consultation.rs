/// Consultation submission pipeline
use crate::email::ConsultationMailer;
use crate::error::ConsultError;
use crate::models::{AppConfig, ConsultationRequest, RateLimitConfig};
use crate::services::email::{DeliveryReceipt, EmailProvider};
use crate::services::rate_limiter::RateLimiter;
use crate::utils::logging::{email_domain, redact_body};
use std::sync::Arc;
use tracing::{info, warn};

/// Receipts of the two emails sent for one consultation
#[derive(Debug, Clone)]
pub struct SubmissionReceipt {
    pub notification: DeliveryReceipt,
    pub confirmation: DeliveryReceipt,
}

/// Validates consultation requests and dispatches their emails.
///
/// The rate limiter and email provider are injected so the in-memory table
/// can be replaced and both collaborators can be faked in tests.
pub struct ConsultationService {
    provider: Arc<dyn EmailProvider>,
    rate_limiter: Arc<dyn RateLimiter>,
    rate_limit: RateLimitConfig,
    mailer: ConsultationMailer,
}

impl ConsultationService {
    pub fn new(
        provider: Arc<dyn EmailProvider>,
        rate_limiter: Arc<dyn RateLimiter>,
        rate_limit: RateLimitConfig,
        mailer: ConsultationMailer,
    ) -> Self {
        Self {
            provider,
            rate_limiter,
            rate_limit,
            mailer,
        }
    }

    pub fn from_config(
        config: &AppConfig,
        provider: Arc<dyn EmailProvider>,
        rate_limiter: Arc<dyn RateLimiter>,
    ) -> Self {
        Self::new(
            provider,
            rate_limiter,
            config.rate_limit,
            ConsultationMailer::new(&config.mail_from, &config.notification_to),
        )
    }

    /// Counts the request against the client's window
    pub async fn check_rate_limit(&self, client_ip: &str) -> Result<(), ConsultError> {
        self.rate_limiter
            .check_rate_limit(
                client_ip,
                self.rate_limit.max_requests,
                self.rate_limit.window(),
            )
            .await
    }

    /// Validates the request, then sends the firm notification followed by
    /// the requester confirmation.
    ///
    /// The sends are sequential; a failed notification aborts before the
    /// confirmation, and a failed confirmation is reported even though the
    /// notification already went out.
    pub async fn submit(
        &self,
        request: ConsultationRequest,
    ) -> Result<SubmissionReceipt, ConsultError> {
        let consultation = request.validate().inspect_err(|e| match e {
            ConsultError::MissingFields => {
                warn!("Missing required fields in consultation request")
            }
            ConsultError::InvalidEmail => warn!("Invalid email format in consultation request"),
            ConsultError::FieldTooLong(field) => {
                warn!(field = %field, "Input validation failed: field too long")
            }
            _ => {}
        })?;

        info!(
            requester_domain = %email_domain(&consultation.email),
            message_size = %consultation.message.as_deref().map(redact_body).unwrap_or_default(),
            "Processing consultation request"
        );

        let notification = self.mailer.notification(&consultation)?;
        let confirmation = self.mailer.confirmation(&consultation)?;

        let notification = self.provider.send(&notification).await?;
        info!(
            message_id = %notification.id,
            provider = notification.provider,
            accepted_at = %notification.accepted_at.to_rfc3339(),
            recipient_domain = %email_domain(self.mailer.notification_to()),
            "Company email sent successfully"
        );

        let confirmation = self.provider.send(&confirmation).await?;
        info!(
            message_id = %confirmation.id,
            provider = confirmation.provider,
            accepted_at = %confirmation.accepted_at.to_rfc3339(),
            recipient_domain = %email_domain(&consultation.email),
            "User confirmation email sent successfully"
        );

        Ok(SubmissionReceipt {
            notification,
            confirmation,
        })
    }
}
