/// Escaping-by-default HTML templates
///
/// Templates are static markup with `{{slot}}` placeholders. Plain text is
/// always escaped when it fills a slot; only [`SafeHtml`] produced by this
/// module can be inserted verbatim.
use crate::error::ConsultError;
use crate::utils::sanitization::escape_html;

/// Markup that is safe to embed in an HTML email body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SafeHtml(String);

impl SafeHtml {
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Value for a template slot
#[derive(Debug, Clone, Copy)]
pub enum Slot<'a> {
    /// Untrusted text, escaped on insertion
    Text(&'a str),
    /// Already-rendered markup, inserted as is
    Markup(&'a SafeHtml),
}

#[derive(Debug, Clone, Copy)]
pub struct Template {
    name: &'static str,
    source: &'static str,
}

impl Template {
    pub const fn new(name: &'static str, source: &'static str) -> Self {
        Self { name, source }
    }

    /// Fills every `{{slot}}` of the template.
    ///
    /// A placeholder without a matching slot, or an unterminated `{{`, is an
    /// error so a template edit cannot silently drop content.
    pub fn render(&self, slots: &[(&str, Slot<'_>)]) -> Result<SafeHtml, ConsultError> {
        let mut out = String::with_capacity(self.source.len() + 256);
        let mut rest = self.source;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let end = after.find("}}").ok_or_else(|| {
                ConsultError::Template(format!("{}: unterminated placeholder", self.name))
            })?;

            let key = after[..end].trim();
            let (_, slot) = slots.iter().find(|(name, _)| *name == key).ok_or_else(|| {
                ConsultError::Template(format!("{}: no value for slot '{}'", self.name, key))
            })?;

            match slot {
                Slot::Text(text) => out.push_str(&escape_html(text)),
                Slot::Markup(html) => out.push_str(html.as_str()),
            }

            rest = &after[end + 2..];
        }
        out.push_str(rest);

        Ok(SafeHtml(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREETING: Template = Template::new("greeting", "<p>Hello {{ name }}!</p>{{extra}}");

    #[test]
    fn test_text_slots_are_escaped() {
        let extra = SafeHtml::empty();
        let html = GREETING
            .render(&[
                ("name", Slot::Text("<script>alert(1)</script>")),
                ("extra", Slot::Markup(&extra)),
            ])
            .unwrap();

        assert_eq!(
            html.as_str(),
            "<p>Hello &lt;script&gt;alert(1)&lt;/script&gt;!</p>"
        );
    }

    #[test]
    fn test_markup_slots_are_verbatim() {
        let extra = Template::new("extra", "<em>{{v}}</em>")
            .render(&[("v", Slot::Text("a & b"))])
            .unwrap();
        let html = GREETING
            .render(&[("name", Slot::Text("Jane")), ("extra", Slot::Markup(&extra))])
            .unwrap();

        assert_eq!(html.as_str(), "<p>Hello Jane!</p><em>a &amp; b</em>");
    }

    #[test]
    fn test_slot_used_twice() {
        let template = Template::new("twice", "{{v}}-{{v}}");
        let html = template.render(&[("v", Slot::Text("<"))]).unwrap();
        assert_eq!(html.as_str(), "&lt;-&lt;");
    }

    #[test]
    fn test_missing_slot() {
        let err = GREETING.render(&[("name", Slot::Text("Jane"))]).unwrap_err();
        assert!(matches!(err, ConsultError::Template(msg) if msg.contains("extra")));
    }

    #[test]
    fn test_unterminated_placeholder() {
        let template = Template::new("broken", "<p>{{name</p>");
        let err = template.render(&[("name", Slot::Text("x"))]).unwrap_err();
        assert!(matches!(err, ConsultError::Template(_)));
    }

    #[test]
    fn test_values_are_not_reparsed() {
        // A value that looks like a placeholder stays literal
        let extra = SafeHtml::empty();
        let html = GREETING
            .render(&[("name", Slot::Text("{{extra}}")), ("extra", Slot::Markup(&extra))])
            .unwrap();
        assert_eq!(html.as_str(), "<p>Hello {{extra}}!</p>");
    }
}
