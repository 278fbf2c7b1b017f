//! Markup serialization for element trees

use std::borrow::Cow;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::icon::ATTRIBUTION;

use super::{MarkupConfig, SvgElement};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const DATA_URI_PREFIX: &str = "data:image/svg+xml;base64,";

/// Serialize elements into a string buffer
struct MarkupWriter<'c> {
    config: &'c MarkupConfig,
    out: String,
}

impl<'c> MarkupWriter<'c> {
    fn new(config: &'c MarkupConfig) -> Self {
        Self {
            config,
            out: String::new(),
        }
    }

    fn indent_str(&self, depth: usize) -> String {
        if self.config.pretty_print {
            " ".repeat(self.config.indent * depth)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &'static str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    fn prolog(&mut self) {
        if !self.config.standalone {
            return;
        }
        self.out.push_str(XML_DECLARATION);
        self.out.push_str(self.newline());
        if self.config.attribution {
            self.out.push_str(&format!("<!-- {} -->", ATTRIBUTION));
            self.out.push_str(self.newline());
        }
    }

    fn element(&mut self, el: &SvgElement, depth: usize) {
        let indent = self.indent_str(depth);
        self.out.push_str(&indent);
        self.out.push('<');
        self.out.push_str(el.name());
        for attr in el.attributes() {
            self.out.push_str(&format!(
                r#" {}="{}""#,
                attr.name,
                escape_attribute(&attr.value)
            ));
        }

        if el.children().is_empty() {
            self.out.push_str("/>");
            return;
        }

        self.out.push('>');
        for child in el.children() {
            self.out.push_str(self.newline());
            self.element(child, depth + 1);
        }
        self.out.push_str(self.newline());
        self.out.push_str(&indent);
        self.out.push_str(&format!("</{}>", el.name()));
    }

    fn finish(self) -> String {
        self.out
    }
}

/// Escape the characters that cannot appear raw inside a double-quoted attribute
fn escape_attribute(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Serialize an element tree to markup
pub fn to_markup(element: &SvgElement, config: &MarkupConfig) -> String {
    let mut writer = MarkupWriter::new(config);
    writer.prolog();
    writer.element(element, 0);
    writer.finish()
}

/// Encode an element tree as a base64 `data:` URI of its compact markup
pub fn to_data_uri(element: &SvgElement) -> String {
    let markup = to_markup(element, &MarkupConfig::compact());
    format!("{}{}", DATA_URI_PREFIX, STANDARD.encode(markup))
}

#[cfg(test)]
mod tests {
    use base64::Engine as _;

    use super::*;

    fn sample() -> SvgElement {
        SvgElement::new("svg")
            .with_attribute("viewBox", "0 0 10 10")
            .with_child(SvgElement::new("path").with_attribute("d", "M0 0h10"))
    }

    #[test]
    fn test_compact_markup() {
        let markup = to_markup(&sample(), &MarkupConfig::compact());
        assert_eq!(
            markup,
            r#"<svg viewBox="0 0 10 10"><path d="M0 0h10"/></svg>"#
        );
    }

    #[test]
    fn test_pretty_markup() {
        let markup = to_markup(&sample(), &MarkupConfig::default());
        assert_eq!(
            markup,
            "<svg viewBox=\"0 0 10 10\">\n  <path d=\"M0 0h10\"/>\n</svg>"
        );
    }

    #[test]
    fn test_custom_indent() {
        let markup = to_markup(&sample(), &MarkupConfig::default().with_indent(4));
        assert!(markup.contains("\n    <path"));
    }

    #[test]
    fn test_standalone_prolog() {
        let config = MarkupConfig::compact().with_standalone(true);
        let markup = to_markup(&sample(), &config);
        assert!(markup.starts_with(XML_DECLARATION));
        assert!(markup.contains("<!-- Font Awesome Free"));

        let bare = to_markup(&sample(), &config.with_attribution(false));
        assert!(!bare.contains("<!--"));
        assert!(bare.starts_with(XML_DECLARATION));
    }

    #[test]
    fn test_childless_root_self_closes() {
        let markup = to_markup(&SvgElement::new("svg"), &MarkupConfig::default());
        assert_eq!(markup, "<svg/>");
    }

    #[test]
    fn test_attribute_escaping() {
        let el = SvgElement::new("text").with_attribute("title", r#"a < b & "c""#);
        let markup = to_markup(&el, &MarkupConfig::compact());
        assert_eq!(markup, r#"<text title="a &lt; b &amp; &quot;c&quot;"/>"#);
    }

    #[test]
    fn test_data_uri_prefix() {
        let uri = to_data_uri(&sample());
        assert!(uri.starts_with(DATA_URI_PREFIX));
        let encoded = &uri[DATA_URI_PREFIX.len()..];
        let decoded = STANDARD.decode(encoded).expect("valid base64");
        assert_eq!(
            String::from_utf8(decoded).expect("utf8"),
            to_markup(&sample(), &MarkupConfig::compact())
        );
    }
}
