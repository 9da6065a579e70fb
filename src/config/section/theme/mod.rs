//! `[theme]` section configuration.
//!
//! Everything the default theme renders around the page content: logo,
//! search provider, top navigation, sidebar tree, social links and
//! footer.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! logo = "/icons/logo.png"
//!
//! [theme.search]
//! provider = "local"
//!
//! [[theme.nav]]
//! text = "Home"
//! link = "/"
//!
//! [[theme.sidebar]]
//! text = "Guide"
//! items = [{ text = "Quick Start", link = "/quick-start" }]
//!
//! [[theme.social_links]]
//! icon = "github"
//! link = "https://github.com/octo/repo"
//!
//! [theme.footer]
//! message = "Licensed under CC BY-SA 4.0"
//! copyright = "Octo Cat"
//! ```

mod nav;
mod sidebar;
mod social;

pub use nav::NavItem;
pub use sidebar::SidebarGroup;
pub use social::{SocialIcon, SocialLink};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{ConfigDiagnostics, FieldPath};

/// Theme section configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Logo path shown next to the site title (relative to site root).
    pub logo: Option<PathBuf>,

    /// Search settings. Absent means no search box.
    pub search: Option<SearchConfig>,

    /// Top navigation entries, in display order.
    pub nav: Vec<NavItem>,

    /// Sidebar groups, in display order. Ordered independently of nav.
    pub sidebar: Vec<SidebarGroup>,

    /// Social icon links.
    pub social_links: Vec<SocialLink>,

    /// Footer text. Absent means no footer.
    pub footer: Option<FooterConfig>,
}

pub struct ThemeConfigFields {
    pub logo: FieldPath,
    pub nav: FieldPath,
    pub sidebar: FieldPath,
    pub social_links: FieldPath,
}

impl ThemeConfig {
    pub const FIELDS: ThemeConfigFields = ThemeConfigFields {
        logo: FieldPath::new("theme.logo"),
        nav: FieldPath::new("theme.nav"),
        sidebar: FieldPath::new("theme.sidebar"),
        social_links: FieldPath::new("theme.social_links"),
    };

    /// Validate all theme entries.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for item in &self.nav {
            item.validate(Self::FIELDS.nav, diag);
        }

        for group in &self.sidebar {
            group.validate(Self::FIELDS.sidebar, diag);
        }

        for social in &self.social_links {
            social.validate(Self::FIELDS.social_links, diag);
        }
    }
}

// ============================================================================
// Search
// ============================================================================

/// Search box configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Search backend.
    pub provider: SearchProvider,
}

/// Known search backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    /// Client-side index built at generation time.
    #[default]
    Local,
}

// ============================================================================
// Footer
// ============================================================================

/// Footer message and copyright line.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    /// Free-form message (e.g., license note).
    pub message: String,

    /// Copyright holder.
    pub copyright: String,
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_theme_defaults() {
        let config = test_parse_config("");
        assert!(config.theme.logo.is_none());
        assert!(config.theme.search.is_none());
        assert!(config.theme.nav.is_empty());
        assert!(config.theme.sidebar.is_empty());
        assert!(config.theme.social_links.is_empty());
        assert!(config.theme.footer.is_none());
    }

    #[test]
    fn test_search_provider_local() {
        let config = test_parse_config("[theme.search]\nprovider = \"local\"");
        assert_eq!(
            config.theme.search.unwrap().provider,
            SearchProvider::Local
        );
    }

    #[test]
    fn test_footer() {
        let config = test_parse_config(
            "[theme.footer]\nmessage = \"Licensed under CC BY-SA 4.0\"\ncopyright = \"Octo Cat\"",
        );
        let footer = config.theme.footer.unwrap();
        assert_eq!(footer.message, "Licensed under CC BY-SA 4.0");
        assert_eq!(footer.copyright, "Octo Cat");
    }

    #[test]
    fn test_logo() {
        let config = test_parse_config("[theme]\nlogo = \"/icons/logo.png\"");
        assert_eq!(config.theme.logo, Some(PathBuf::from("/icons/logo.png")));
    }

    #[test]
    fn test_nav_and_sidebar_are_independent() {
        // Nav pointing at a page the sidebar never lists is fine.
        let config = test_parse_config(
            r#"[[theme.nav]]
text = "Changelog"
link = "/changelog"

[[theme.sidebar]]
text = "Guide"
items = [{ text = "Quick Start", link = "/quick-start" }]"#,
        );
        let mut diag = ConfigDiagnostics::new();
        config.theme.validate(&mut diag);
        assert!(diag.is_empty());
    }
}
