/// Input validation utilities
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Checks the `local@domain.tld` shape accepted by the contact form
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Length in UTF-16 code units, the unit browsers use for form field limits.
///
/// Characters outside the Basic Multilingual Plane (most emoji) count twice.
pub fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// True when the text does not exceed `max` UTF-16 code units
pub fn within_length(text: &str, max: usize) -> bool {
    utf16_len(text) <= max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("user+tag@example.co.uk"));
        assert!(is_valid_email("a@b.c"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email("invalid"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("jane doe@example.com"));
        assert!(!is_valid_email("jane@@example.com"));
        assert!(!is_valid_email("jane@example.com "));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_within_length_counts_utf16_units() {
        assert!(within_length(&"a".repeat(100), 100));
        assert!(!within_length(&"a".repeat(101), 100));
        // BMP characters count once regardless of UTF-8 width
        assert!(within_length(&"é".repeat(100), 100));
        assert_eq!(utf16_len("Zürich"), 6);
        assert_eq!(utf16_len("東京"), 2);
    }

    #[test]
    fn test_non_bmp_counts_twice() {
        assert_eq!(utf16_len("😀"), 2);
        assert!(within_length(&"😀".repeat(50), 100));
        assert!(!within_length(&"😀".repeat(51), 100));
    }
}
