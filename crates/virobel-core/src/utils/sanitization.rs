/// HTML and plain-text sanitization utilities

/// Escapes the five HTML special characters so the text can be embedded in
/// element content or a quoted attribute value.
///
/// # Examples
/// ```
/// use virobel_core::utils::sanitization::escape_html;
///
/// assert_eq!(escape_html("<b>Tom & Jerry</b>"), "&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;");
/// assert_eq!(escape_html(r#"say "hi" it's"#), "say &quot;hi&quot; it&#x27;s");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Removes control characters (CR, LF, tabs, ...) from text destined for a
/// single-line header such as an email subject.
///
/// # Examples
/// ```
/// use virobel_core::utils::sanitization::strip_control_chars;
///
/// assert_eq!(strip_control_chars("Jane\r\nBcc: x@evil.com"), "JaneBcc: x@evil.com");
/// ```
pub fn strip_control_chars(text: &str) -> String {
    text.chars().filter(|c| !c.is_control()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<script>alert('xss')</script>"),
            "&lt;script&gt;alert(&#x27;xss&#x27;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_escape_html_ampersand_first() {
        // Already-escaped input is escaped again, never decoded
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_escape_html_keeps_unicode() {
        assert_eq!(escape_html("Zürich – 東京"), "Zürich – 東京");
    }

    #[test]
    fn test_strip_control_chars() {
        assert_eq!(strip_control_chars("Jane Doe"), "Jane Doe");
        assert_eq!(strip_control_chars("a\tb\nc\rd\u{0}"), "abcd");
    }
}
