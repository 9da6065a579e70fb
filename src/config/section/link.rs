//! Link target classification for nav and sidebar entries.
//!
//! Every `link` value in the config resolves to one of three forms:
//!
//! | Form          | Example                      | Resolution                  |
//! |---------------|------------------------------|-----------------------------|
//! | External      | `https://example.com/repo`   | Used verbatim               |
//! | Root-relative | `/quick-start`               | Prefixed with `base`        |
//! | Page-relative | `introduction/index.md`      | Resolved against the page   |
//!
//! Anything else is a config error. Whether an in-site link points at a
//! page that actually exists is the generator's concern at build time,
//! not ours (see `SiteConfig::page_links`).

use crate::config::{ConfigDiagnostics, FieldPath};

/// Classified form of a `link` config value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    /// Absolute http(s) URL pointing off-site.
    External,
    /// Path starting with `/`, resolved under the site `base`.
    RootRelative,
    /// Relative markdown file path, resolved against the current page.
    PageRelative,
}

impl LinkTarget {
    /// Classify a raw link value. Returns `None` for unsupported forms.
    pub fn classify(link: &str) -> Option<Self> {
        if link.starts_with("http://") || link.starts_with("https://") {
            return Some(Self::External);
        }
        if link.starts_with('/') {
            return Some(Self::RootRelative);
        }
        if link.ends_with(".md") && !link.contains("://") {
            return Some(Self::PageRelative);
        }
        None
    }

    /// True if the link stays within the site (subject to page existence).
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::RootRelative | Self::PageRelative)
    }
}

/// Validate a single link value, reporting under `field`.
///
/// External links get strict URL validation (scheme and host), matching
/// how the site `base` URL itself is checked.
pub fn validate_link(link: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    match LinkTarget::classify(link) {
        Some(LinkTarget::External) => match url::Url::parse(link) {
            Ok(parsed) => {
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        field,
                        format!("link '{link}' must have a valid host"),
                        "use format like https://example.com/page",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    field,
                    format!("invalid URL '{link}': {e}"),
                    "use format like https://example.com/page",
                );
            }
        },
        Some(_) => {}
        None => {
            diag.error_with_hint(
                field,
                format!("unsupported link form '{link}'"),
                "use an absolute http(s) URL, a root-relative path like \
                 \"/guide\", or a markdown file path like \"guide/index.md\"",
            );
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_external() {
        assert_eq!(
            LinkTarget::classify("https://github.com/octo/repo"),
            Some(LinkTarget::External)
        );
        assert_eq!(
            LinkTarget::classify("http://localhost:5277/"),
            Some(LinkTarget::External)
        );
    }

    #[test]
    fn test_classify_root_relative() {
        assert_eq!(LinkTarget::classify("/"), Some(LinkTarget::RootRelative));
        assert_eq!(
            LinkTarget::classify("/quick-start"),
            Some(LinkTarget::RootRelative)
        );
    }

    #[test]
    fn test_classify_page_relative() {
        assert_eq!(
            LinkTarget::classify("introduction/index.md"),
            Some(LinkTarget::PageRelative)
        );
    }

    #[test]
    fn test_classify_rejects_other_forms() {
        assert_eq!(LinkTarget::classify("quick-start"), None);
        assert_eq!(LinkTarget::classify("ftp://example.com/file"), None);
        assert_eq!(LinkTarget::classify(""), None);
    }

    #[test]
    fn test_is_internal() {
        assert!(LinkTarget::RootRelative.is_internal());
        assert!(LinkTarget::PageRelative.is_internal());
        assert!(!LinkTarget::External.is_internal());
    }

    #[test]
    fn test_validate_link_collects_errors() {
        let mut diag = ConfigDiagnostics::new();
        validate_link("/guide", FieldPath::new("theme.nav"), &mut diag);
        validate_link("guide", FieldPath::new("theme.nav"), &mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("unsupported link form"));
    }
}
