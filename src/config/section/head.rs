//! `[[head]]` tag-injection configuration.
//!
//! Each entry declares one element for the generated `<head>`, in
//! declaration order. The common case is a favicon link:
//!
//! ```toml
//! [[head]]
//! tag = "link"
//! attrs = { rel = "icon", type = "image/png", href = "/icons/favicon.png" }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write;

use crate::config::{ConfigDiagnostics, FieldPath};

/// Elements that make sense inside `<head>`. Everything else is a typo.
const HEAD_TAGS: &[&str] = &["base", "link", "meta", "noscript", "script", "style"];

/// Void elements render without a closing tag.
const VOID_TAGS: &[&str] = &["base", "link", "meta"];

/// A single head element declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadEntry {
    /// Element name (e.g., "link", "meta").
    pub tag: String,

    /// Attribute name/value pairs. Rendered in sorted key order.
    pub attrs: BTreeMap<String, String>,
}

impl Default for HeadEntry {
    fn default() -> Self {
        Self {
            tag: "meta".into(),
            attrs: BTreeMap::new(),
        }
    }
}

pub struct HeadEntryFields {
    pub tag: FieldPath,
    pub attrs: FieldPath,
}

impl HeadEntry {
    pub const FIELDS: HeadEntryFields = HeadEntryFields {
        tag: FieldPath::new("head.tag"),
        attrs: FieldPath::new("head.attrs"),
    };

    /// Validate the tag name and attribute keys.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !HEAD_TAGS.contains(&self.tag.as_str()) {
            diag.error_with_hint(
                Self::FIELDS.tag,
                format!("'{}' is not a head element", self.tag),
                format!("expected one of: {}", HEAD_TAGS.join(", ")),
            );
        }

        for key in self.attrs.keys() {
            if !is_valid_attr_name(key) {
                diag.error(
                    Self::FIELDS.attrs,
                    format!("invalid attribute name '{key}'"),
                );
            }
        }
    }

    /// Render this entry as HTML.
    ///
    /// Attribute values are escaped; void elements get no closing tag.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(32);
        out.push('<');
        out.push_str(&self.tag);
        for (key, value) in &self.attrs {
            write!(out, " {key}=\"{}\"", escape_attr(value)).ok();
        }
        out.push('>');
        if !VOID_TAGS.contains(&self.tag.as_str()) {
            write!(out, "</{}>", self.tag).ok();
        }
        out
    }
}

/// Check an HTML attribute name: ASCII letter first, then letters,
/// digits or hyphens (covers `data-*` and `http-equiv`).
fn is_valid_attr_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Escape an attribute value for double-quoted HTML output.
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_head_defaults_empty() {
        let config = test_parse_config("");
        assert!(config.head.is_empty());
    }

    #[test]
    fn test_favicon_entry() {
        let config = test_parse_config(
            r#"[[head]]
tag = "link"
attrs = { rel = "icon", type = "image/png", href = "/icons/favicon.png" }"#,
        );
        assert_eq!(config.head.len(), 1);
        assert_eq!(config.head[0].tag, "link");
        assert_eq!(config.head[0].attrs["rel"], "icon");
        assert_eq!(config.head[0].attrs["href"], "/icons/favicon.png");
    }

    #[test]
    fn test_render_void_element() {
        let entry = HeadEntry {
            tag: "link".into(),
            attrs: BTreeMap::from([
                ("rel".into(), "icon".into()),
                ("href".into(), "/favicon.ico".into()),
            ]),
        };
        assert_eq!(entry.render(), r#"<link href="/favicon.ico" rel="icon">"#);
    }

    #[test]
    fn test_render_closed_element() {
        let entry = HeadEntry {
            tag: "script".into(),
            attrs: BTreeMap::from([("src".into(), "/app.js".into())]),
        };
        assert_eq!(entry.render(), r#"<script src="/app.js"></script>"#);
    }

    #[test]
    fn test_render_escapes_attr_values() {
        let entry = HeadEntry {
            tag: "meta".into(),
            attrs: BTreeMap::from([(
                "content".into(),
                "a<b & \"c\"".into(),
            )]),
        };
        assert_eq!(
            entry.render(),
            r#"<meta content="a&lt;b &amp; &quot;c&quot;">"#
        );
    }

    #[test]
    fn test_unknown_tag_rejected() {
        let entry = HeadEntry {
            tag: "div".into(),
            attrs: BTreeMap::new(),
        };
        let mut diag = ConfigDiagnostics::new();
        entry.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("not a head element"));
    }

    #[test]
    fn test_invalid_attr_name_rejected() {
        let entry = HeadEntry {
            tag: "meta".into(),
            attrs: BTreeMap::from([("1bad key".into(), "x".into())]),
        };
        let mut diag = ConfigDiagnostics::new();
        entry.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_attr_name_check() {
        assert!(is_valid_attr_name("rel"));
        assert!(is_valid_attr_name("http-equiv"));
        assert!(is_valid_attr_name("data-theme"));
        assert!(!is_valid_attr_name(""));
        assert!(!is_valid_attr_name("-rel"));
        assert!(!is_valid_attr_name("re l"));
    }
}
