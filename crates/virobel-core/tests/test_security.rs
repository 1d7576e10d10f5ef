/// Security & validation integration tests
///
/// These tests run the submission pipeline end to end with a recording
/// provider:
/// - HTML escaping of every user-supplied field
/// - Validation ordering and boundaries
/// - Rate limiting per client
use std::sync::Arc;
use std::time::Duration;

use tokio_test::{assert_err, assert_ok};
use virobel_core::ConsultError;
use virobel_core::models::{AppConfig, ConsultationRequest};
use virobel_core::services::{
    ConsultationService, InMemoryRateLimiter, MockRateLimiter, RecordingEmailProvider,
};

fn request() -> ConsultationRequest {
    ConsultationRequest {
        full_name: Some("Jane Doe".to_string()),
        email: Some("jane@example.com".to_string()),
        phone: Some("+1 555 1234".to_string()),
        location: Some("Zurich".to_string()),
        message: Some("Interested in family office services".to_string()),
    }
}

fn service(provider: &RecordingEmailProvider) -> ConsultationService {
    ConsultationService::from_config(
        &AppConfig::default(),
        Arc::new(provider.clone()),
        Arc::new(MockRateLimiter::allow_all()),
    )
}

#[tokio::test]
async fn script_in_name_is_escaped_in_both_emails() {
    let provider = RecordingEmailProvider::new();
    let mut req = request();
    req.full_name = Some("<script>alert(1)</script>".to_string());

    assert_ok!(service(&provider).submit(req).await);

    let sent = provider.sent();
    assert_eq!(sent.len(), 2);
    for email in &sent {
        assert!(email.html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!email.html.contains("<script>"));
    }
}

#[tokio::test]
async fn every_field_is_escaped_in_notification() {
    let provider = RecordingEmailProvider::new();
    let req = ConsultationRequest {
        full_name: Some("A & B".to_string()),
        email: Some("o'brien@example.com".to_string()),
        phone: Some("<1>".to_string()),
        location: Some("\"Geneva\"".to_string()),
        message: Some("</p><a href=\"https://phish.example\">click</a>".to_string()),
    };

    assert_ok!(service(&provider).submit(req).await);

    let notification = &provider.sent()[0];
    assert!(notification.html.contains("A &amp; B"));
    assert!(notification.html.contains("o&#x27;brien@example.com"));
    assert!(notification.html.contains("&lt;1&gt;"));
    assert!(notification.html.contains("&quot;Geneva&quot;"));
    assert!(!notification.html.contains("https://phish.example\">"));

    // The confirmation goes to the address exactly as validated
    assert_eq!(provider.sent()[1].to, vec!["o'brien@example.com"]);
}

#[tokio::test]
async fn validation_errors_short_circuit_before_sending() {
    let provider = RecordingEmailProvider::new();
    let service = service(&provider);

    let mut missing = request();
    missing.phone = None;
    assert!(matches!(
        service.submit(missing).await,
        Err(ConsultError::MissingFields)
    ));

    let mut bad_email = request();
    bad_email.email = Some("jane at example.com".to_string());
    assert!(matches!(
        service.submit(bad_email).await,
        Err(ConsultError::InvalidEmail)
    ));

    let mut too_long = request();
    too_long.full_name = Some("n".repeat(101));
    assert!(matches!(
        service.submit(too_long).await,
        Err(ConsultError::FieldTooLong("fullName"))
    ));

    assert!(provider.sent().is_empty());
}

#[tokio::test]
async fn name_of_exactly_one_hundred_chars_is_accepted() {
    let provider = RecordingEmailProvider::new();
    let mut req = request();
    req.full_name = Some("n".repeat(100));

    assert_ok!(service(&provider).submit(req).await);
    assert_eq!(provider.sent().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn rate_limit_is_per_client_and_resets() {
    let provider = RecordingEmailProvider::new();
    let service = ConsultationService::from_config(
        &AppConfig::default(),
        Arc::new(provider.clone()),
        Arc::new(InMemoryRateLimiter::new()),
    );

    for _ in 0..5 {
        assert_ok!(service.check_rate_limit("203.0.113.7").await);
    }
    assert_err!(service.check_rate_limit("203.0.113.7").await);
    assert_ok!(service.check_rate_limit("198.51.100.2").await);

    tokio::time::advance(Duration::from_secs(3601)).await;
    assert_ok!(service.check_rate_limit("203.0.113.7").await);
}
