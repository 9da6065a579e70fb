//! `[[theme.nav]]` top navigation entries.
//!
//! # Example
//!
//! ```toml
//! [[theme.nav]]
//! text = "Home"
//! link = "/"
//!
//! [[theme.nav]]
//! text = "Guide"
//! link = "/quick-start"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::section::link::validate_link;
use crate::config::{ConfigDiagnostics, FieldPath};

/// A single navigation entry: display text plus link target.
///
/// Shared between `theme.nav` and sidebar group items, so validation
/// takes the reporting field path from the caller.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NavItem {
    /// Display text.
    pub text: String,

    /// Link target (absolute URL, root-relative path, or `.md` path).
    pub link: String,
}

impl NavItem {
    /// Validate text and link, reporting under `field`.
    pub fn validate(&self, field: FieldPath, diag: &mut ConfigDiagnostics) {
        if self.text.is_empty() {
            diag.error(field, "entry text must not be empty");
        }
        if self.link.is_empty() {
            diag.error(field, format!("'{}' has an empty link", self.text));
        } else {
            validate_link(&self.link, field, diag);
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_nav_entries_keep_order() {
        let config = test_parse_config(
            r#"[[theme.nav]]
text = "Home"
link = "/"

[[theme.nav]]
text = "Guide"
link = "/quick-start""#,
        );
        assert_eq!(config.theme.nav.len(), 2);
        assert_eq!(config.theme.nav[0].text, "Home");
        assert_eq!(config.theme.nav[1].link, "/quick-start");
    }

    #[test]
    fn test_empty_text_rejected() {
        let item = NavItem {
            text: String::new(),
            link: "/".into(),
        };
        let mut diag = ConfigDiagnostics::new();
        item.validate(FieldPath::new("theme.nav"), &mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_empty_link_rejected() {
        let item = NavItem {
            text: "Home".into(),
            link: String::new(),
        };
        let mut diag = ConfigDiagnostics::new();
        item.validate(FieldPath::new("theme.nav"), &mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("empty link"));
    }
}
