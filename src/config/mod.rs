//! Site configuration management for `docsite.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── head       # [[head]] tag injection
//! │   ├── theme/     # [theme] nav, sidebar, social, footer
//! │   ├── markdown   # [markdown] extension declarations
//! │   └── link       # Link target classification (shared)
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The config value is constructed once (from file or string) and then
//! treated as immutable by the consuming generator. There is no
//! incremental mutation API; edits mean reloading the whole file.

pub mod section;
pub mod types;
mod util;

use util::{find_config_file, normalize_base};

// Re-export from section/
pub use section::{
    FooterConfig, HeadEntry, LinkTarget, MarkdownConfig, MarkdownExtension, NavItem, SearchConfig,
    SearchProvider, SidebarGroup, SocialIcon, SocialLink, ThemeConfig,
};

// Re-export from types/
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::log;
use anyhow::Result;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing docsite.toml
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// URL path prefix the site is served under. Absent means the root.
    pub base: Option<String>,

    /// Site title shown in the browser tab and header.
    pub title: String,

    /// Site description for meta tags.
    pub description: String,

    /// Head tag injection entries, in declaration order.
    pub head: Vec<HeadEntry>,

    /// Theme settings (logo, search, nav, sidebar, social links, footer).
    pub theme: ThemeConfig,

    /// Markdown extension declarations.
    pub markdown: MarkdownConfig,

    /// Free-form passthrough values for the consuming generator.
    pub extra: FxHashMap<String, toml::Value>,
}

pub struct SiteConfigFields {
    pub title: FieldPath,
    pub description: FieldPath,
    pub base: FieldPath,
}

impl SiteConfig {
    pub const FIELDS: SiteConfigFields = SiteConfigFields {
        title: FieldPath::new("title"),
        description: FieldPath::new("description"),
        base: FieldPath::new("base"),
    };

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load and validate configuration from a file path.
    ///
    /// Unknown fields are reported as a warning but do not fail the
    /// load; validation errors do.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.config_path = path.to_path_buf();
        config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();

        config.validate()?;
        Ok(config)
    }

    /// Find `config_name` by searching upward from cwd, then load it.
    pub fn discover(config_name: &Path) -> Result<Self> {
        match find_config_file(config_name) {
            Some(path) => Self::load(&path),
            None => Err(ConfigError::Validation(format!(
                "config file '{}' not found in current directory or any parent",
                config_name.display()
            ))
            .into()),
        }
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the configuration.
    ///
    /// Collects all validation errors and returns them at once. Whether
    /// in-site links point at pages that exist is left to the consuming
    /// generator (see [`Self::page_links`]).
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        if self.title.is_empty() {
            diag.error(Self::FIELDS.title, "title must not be empty");
        }
        if self.description.is_empty() {
            diag.error(Self::FIELDS.description, "description must not be empty");
        }

        self.validate_base(&mut diag);

        for entry in &self.head {
            entry.validate(&mut diag);
        }

        self.theme.validate(&mut diag);
        self.markdown.validate(&mut diag);

        // Print collected warnings (grouped display)
        diag.print_warnings();

        // Return all collected errors
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Validate the `base` prefix is a plain path, not a URL.
    fn validate_base(&self, diag: &mut ConfigDiagnostics) {
        let Some(base) = &self.base else {
            return;
        };

        if base.contains("://") {
            diag.error_with_hint(
                Self::FIELDS.base,
                format!("'{base}' is a URL, expected a path prefix"),
                "use the path only, e.g. \"/landslides-db/\"",
            );
        } else if base.chars().any(char::is_whitespace) {
            diag.error(Self::FIELDS.base, "base must not contain whitespace");
        }
    }

    // ========================================================================
    // accessors
    // ========================================================================

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// The normalized base prefix, always `/.../` (or `/` when unset).
    pub fn base(&self) -> String {
        self.base
            .as_deref()
            .map(normalize_base)
            .unwrap_or_else(|| "/".to_string())
    }

    /// Resolve a link for output under the configured `base`.
    ///
    /// Root-relative links get the base prefix; external and
    /// page-relative links pass through unchanged.
    pub fn url_for(&self, link: &str) -> String {
        match LinkTarget::classify(link) {
            Some(LinkTarget::RootRelative) => {
                let base = self.base();
                format!("{}{}", base.trim_end_matches('/'), link)
            }
            _ => link.to_string(),
        }
    }

    /// Render all head entries as HTML, one per line, in declaration order.
    pub fn render_head(&self) -> String {
        self.head
            .iter()
            .map(HeadEntry::render)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// In-site links declared in nav and sidebar entries.
    ///
    /// The consuming generator checks these against its page set;
    /// dangling entries are a build-time content error there, not here.
    pub fn page_links(&self) -> impl Iterator<Item = &str> {
        self.theme
            .nav
            .iter()
            .chain(self.theme.sidebar.iter().flat_map(|g| g.items.iter()))
            .filter(|item| {
                LinkTarget::classify(&item.link).is_some_and(|target| target.is_internal())
            })
            .map(|item| item.link.as_str())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with the required `title`/`description` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("title = \"Test\"\ndescription = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
