/// Email provider abstraction
use crate::error::ConsultError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
#[cfg(any(test, feature = "test-util"))]
use std::sync::{Arc, Mutex};
use typed_builder::TypedBuilder;

/// A fully rendered HTML email ready for dispatch
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct OutboundEmail {
    #[builder(setter(into))]
    pub from: String,
    pub to: Vec<String>,
    #[builder(setter(into))]
    pub subject: String,
    #[builder(setter(into))]
    pub html: String,
}

/// Provider acknowledgement for an accepted email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    /// Provider-assigned message id
    pub id: String,
    pub provider: &'static str,
    pub accepted_at: DateTime<Utc>,
}

impl DeliveryReceipt {
    pub fn new(id: impl Into<String>, provider: &'static str) -> Self {
        Self {
            id: id.into(),
            provider,
            accepted_at: Utc::now(),
        }
    }
}

/// Transactional email service.
///
/// Implementations hand the message to the provider once; retries, bounces
/// and delivery receipts are the provider's concern.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailProvider: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<DeliveryReceipt, ConsultError>;
}

/// In-memory provider that records accepted emails
#[cfg(any(test, feature = "test-util"))]
#[derive(Clone, Default)]
pub struct RecordingEmailProvider {
    sent: Arc<Mutex<Vec<OutboundEmail>>>,
    fail_from: Option<usize>,
}

#[cfg(any(test, feature = "test-util"))]
impl RecordingEmailProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider whose `n`-th call (0-based) and every later call fail
    pub fn failing_from(n: usize) -> Self {
        Self {
            fail_from: Some(n),
            ..Self::default()
        }
    }

    /// Emails accepted so far, in send order
    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

#[cfg(any(test, feature = "test-util"))]
#[async_trait]
impl EmailProvider for RecordingEmailProvider {
    async fn send(&self, email: &OutboundEmail) -> Result<DeliveryReceipt, ConsultError> {
        let mut sent = self
            .sent
            .lock()
            .map_err(|_| ConsultError::Delivery("recording provider poisoned".to_string()))?;

        let attempt = sent.len();
        if self.fail_from.is_some_and(|n| attempt >= n) {
            return Err(ConsultError::Delivery(format!(
                "recording provider rejected send #{}",
                attempt
            )));
        }

        sent.push(email.clone());
        Ok(DeliveryReceipt::new(format!("recorded-{}", attempt), "recording"))
    }
}
