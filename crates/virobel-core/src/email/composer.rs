/// MIME composition using the lettre crate
use crate::error::ConsultError;
use crate::services::email::OutboundEmail;
use lettre::message::header::ContentType;
use lettre::message::{Mailbox, Message};
use std::str::FromStr;

fn to_mailbox(address: &str) -> Result<Mailbox, ConsultError> {
    Mailbox::from_str(address)
        .map_err(|e| ConsultError::Delivery(format!("Invalid email address {}: {}", address, e)))
}

/// Builds a single-part `text/html` RFC 5322 message
pub fn compose_html_message(email: &OutboundEmail) -> Result<Vec<u8>, ConsultError> {
    let mut builder = Message::builder()
        .from(to_mailbox(&email.from)?)
        .subject(&email.subject);

    for to in &email.to {
        builder = builder.to(to_mailbox(to)?);
    }

    let message = builder
        .header(ContentType::TEXT_HTML)
        .body(email.html.clone())
        .map_err(|e| ConsultError::Delivery(format!("Failed to build email: {}", e)))?;

    Ok(message.formatted())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(to: &str) -> OutboundEmail {
        OutboundEmail::builder()
            .from("Virobel <onboarding@resend.dev>")
            .to(vec![to.to_string()])
            .subject("Thank you for your inquiry - Virobel")
            .html("<h1>Thank You, Jane</h1>")
            .build()
    }

    #[test]
    fn test_compose_html_message() {
        let raw = compose_html_message(&email("jane@example.com")).unwrap();
        let text = String::from_utf8_lossy(&raw);

        assert!(text.contains("From: Virobel <onboarding@resend.dev>"));
        assert!(text.contains("To: jane@example.com"));
        assert!(text.contains("Subject: Thank you for your inquiry - Virobel"));
        assert!(text.contains("Content-Type: text/html; charset=utf-8"));
        assert!(text.contains("Thank You, Jane"));
    }

    #[test]
    fn test_invalid_recipient() {
        let err = compose_html_message(&email("not an address")).unwrap_err();
        assert!(matches!(err, ConsultError::Delivery(_)));
    }
}
