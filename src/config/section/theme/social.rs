//! `[[theme.social_links]]` configuration.
//!
//! # Example
//!
//! ```toml
//! [[theme.social_links]]
//! icon = "github"
//! link = "https://github.com/octo/repo"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// A social link rendered as an icon in the site header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Which icon to render.
    pub icon: SocialIcon,

    /// Absolute URL the icon points to.
    pub link: String,
}

impl SocialLink {
    /// Validate the link is an absolute http(s) URL with a host.
    pub fn validate(&self, field: FieldPath, diag: &mut ConfigDiagnostics) {
        match url::Url::parse(&self.link) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        field,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://github.com/octo/repo",
                    );
                } else if parsed.host_str().is_none() {
                    diag.error(field, "social link must have a valid host");
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    field,
                    format!("invalid URL '{}': {e}", self.link),
                    "social links must be absolute URLs",
                );
            }
        }
    }
}

/// Known social icons. Unknown names fail at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Github,
    Gitlab,
    Twitter,
    X,
    Mastodon,
    Linkedin,
    Discord,
    Youtube,
    Slack,
    Rss,
}

// ============================================================================
// tests
// ============================================================================
