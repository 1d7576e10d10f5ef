/// Logging utilities for PII redaction
///
/// Consultation requests carry names, addresses and free-form messages.
/// These helpers keep that content out of log lines.
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\s@<>]+@([^\s@<>]+)").unwrap());

/// Redacts email addresses from text, preserving domain for debugging
///
/// # Examples
/// ```
/// use virobel_core::utils::logging::redact_email;
///
/// assert_eq!(redact_email("jane@example.com"), "***@example.com");
/// assert_eq!(redact_email("Virobel <contact@virobel.com>"), "Virobel <***@virobel.com>");
/// ```
pub fn redact_email(text: &str) -> String {
    EMAIL_PATTERN.replace_all(text, "***@$1").to_string()
}

/// Redacts message body for logging (shows length only)
pub fn redact_body(body: &str) -> String {
    format!("[{} bytes]", body.len())
}

/// Extracts domain from email address for safe logging
pub fn email_domain(email: &str) -> &str {
    email
        .rsplit_once('@')
        .map(|(_, domain)| domain.trim_end_matches('>'))
        .unwrap_or("unknown")
}
