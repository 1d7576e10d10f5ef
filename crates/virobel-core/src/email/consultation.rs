/// Consultation notification and confirmation emails
use crate::constants::{CONFIRMATION_SUBJECT, NOTIFICATION_SUBJECT_PREFIX};
use crate::error::ConsultError;
use crate::models::Consultation;
use crate::services::email::OutboundEmail;
use crate::utils::sanitization::strip_control_chars;

use super::template::{SafeHtml, Slot, Template};

const NOTIFICATION: Template = Template::new(
    "notification",
    r#"
<div style="font-family: Georgia, serif; max-width: 600px; margin: 0 auto; padding: 20px; background-color: #0A1628; color: #F5F0E6;">
  <h1 style="color: #C9A962; border-bottom: 1px solid #C9A962; padding-bottom: 10px;">
    New Consultation Request
  </h1>

  <div style="margin: 20px 0;">
    <h3 style="color: #C9A962; margin-bottom: 5px;">Contact Information</h3>
    <p><strong>Name:</strong> {{full_name}}</p>
    <p><strong>Email:</strong> <a href="mailto:{{email}}" style="color: #D4B978;">{{email}}</a></p>
    <p><strong>Phone:</strong> {{phone}}</p>
    <p><strong>Location:</strong> {{location}}</p>
  </div>
  {{message_section}}
  <hr style="border: none; border-top: 1px solid #1E3A5F; margin: 20px 0;" />
  <p style="font-size: 12px; color: #888;">
    This inquiry was submitted through the Virobel website.
  </p>
</div>
"#,
);

const MESSAGE_SECTION: Template = Template::new(
    "message_section",
    r#"
  <div style="margin: 20px 0;">
    <h3 style="color: #C9A962; margin-bottom: 5px;">Message</h3>
    <p style="white-space: pre-wrap;">{{message}}</p>
  </div>
"#,
);

const CONFIRMATION: Template = Template::new(
    "confirmation",
    r#"
<div style="font-family: Georgia, serif; max-width: 600px; margin: 0 auto; padding: 20px; background-color: #0A1628; color: #F5F0E6;">
  <h1 style="color: #C9A962; border-bottom: 1px solid #C9A962; padding-bottom: 10px;">
    Thank You, {{full_name}}
  </h1>

  <p style="line-height: 1.6;">
    We have received your consultation request and appreciate your interest in Virobel.
  </p>

  <p style="line-height: 1.6;">
    A member of our team will review your inquiry and reach out to you within
    <strong style="color: #C9A962;">1-2 business days</strong> to discuss how we can help
    you achieve your wealth management goals.
  </p>

  <p style="line-height: 1.6;">
    In the meantime, feel free to explore our website to learn more about our
    investment philosophy and services.
  </p>

  <div style="margin: 30px 0; padding: 20px; background-color: #1E3A5F; border-left: 3px solid #C9A962;">
    <p style="margin: 0; font-style: italic;">
      "Protecting &amp; Growing Generational Wealth"
    </p>
  </div>

  <p>
    Warm regards,<br/>
    <strong style="color: #C9A962;">The Virobel Team</strong>
  </p>

  <hr style="border: none; border-top: 1px solid #1E3A5F; margin: 20px 0;" />
  <p style="font-size: 12px; color: #888;">
    If you did not submit this inquiry, please disregard this email.
  </p>
</div>
"#,
);

/// Builds the two emails sent for every accepted consultation
#[derive(Debug, Clone)]
pub struct ConsultationMailer {
    from: String,
    notification_to: String,
}

impl ConsultationMailer {
    pub fn new(from: impl Into<String>, notification_to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            notification_to: notification_to.into(),
        }
    }

    pub fn notification_to(&self) -> &str {
        &self.notification_to
    }

    /// Notification to the firm inbox with the submitted details
    pub fn notification(&self, consultation: &Consultation) -> Result<OutboundEmail, ConsultError> {
        let message_section = match &consultation.message {
            Some(message) => MESSAGE_SECTION.render(&[("message", Slot::Text(message))])?,
            None => SafeHtml::empty(),
        };

        let html = NOTIFICATION.render(&[
            ("full_name", Slot::Text(&consultation.full_name)),
            ("email", Slot::Text(&consultation.email)),
            ("phone", Slot::Text(&consultation.phone)),
            ("location", Slot::Text(&consultation.location)),
            ("message_section", Slot::Markup(&message_section)),
        ])?;

        Ok(OutboundEmail::builder()
            .from(self.from.clone())
            .to(vec![self.notification_to.clone()])
            .subject(format!(
                "{}{}",
                NOTIFICATION_SUBJECT_PREFIX,
                strip_control_chars(&consultation.full_name)
            ))
            .html(html.into_string())
            .build())
    }

    /// Acknowledgement sent to the requester's own address
    pub fn confirmation(&self, consultation: &Consultation) -> Result<OutboundEmail, ConsultError> {
        let html = CONFIRMATION.render(&[("full_name", Slot::Text(&consultation.full_name))])?;

        Ok(OutboundEmail::builder()
            .from(self.from.clone())
            .to(vec![consultation.email.clone()])
            .subject(CONFIRMATION_SUBJECT)
            .html(html.into_string())
            .build())
    }
}
