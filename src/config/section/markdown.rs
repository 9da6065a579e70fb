//! `[markdown]` section configuration.
//!
//! Declares which optional markdown syntaxes the generator's renderer
//! should enable. Extensions are declared as data rather than a code
//! hook, so the whole config stays serializable; they are applied to a
//! renderer through [`crate::markdown::MarkdownRegistrar`].
//!
//! # Example
//!
//! ```toml
//! [markdown]
//! extensions = ["footnotes"]
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::markdown::MarkdownRegistrar;

/// Markdown renderer configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Extensions to register, in declaration order.
    pub extensions: Vec<MarkdownExtension>,
}

pub struct MarkdownConfigFields {
    pub extensions: FieldPath,
}

impl MarkdownConfig {
    pub const FIELDS: MarkdownConfigFields = MarkdownConfigFields {
        extensions: FieldPath::new("markdown.extensions"),
    };

    /// Warn about duplicate extension declarations. Duplicates are
    /// collapsed by `apply`, so this never fails the load.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let mut seen = Vec::new();
        for ext in &self.extensions {
            if seen.contains(ext) {
                diag.warn(
                    Self::FIELDS.extensions,
                    format!("duplicate extension '{}'", ext.name()),
                );
            } else {
                seen.push(*ext);
            }
        }
    }

    /// Install every declared extension on the registrar.
    ///
    /// Each distinct extension is installed exactly once, in first
    /// declaration order.
    pub fn apply(&self, registrar: &mut dyn MarkdownRegistrar) {
        let mut installed = Vec::new();
        for ext in &self.extensions {
            if !installed.contains(ext) {
                registrar.install(*ext);
                installed.push(*ext);
            }
        }
    }
}

/// Optional markdown syntaxes the renderer can enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkdownExtension {
    /// `[^1]` footnote references with definitions.
    Footnotes,
    /// GFM pipe tables.
    Tables,
    /// `~~strikethrough~~`.
    Strikethrough,
    /// `- [ ]` task list markers.
    Tasklists,
    /// Curly quotes, en/em dashes and ellipses.
    SmartPunctuation,
}

impl MarkdownExtension {
    /// Config-file spelling of this extension.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Footnotes => "footnotes",
            Self::Tables => "tables",
            Self::Strikethrough => "strikethrough",
            Self::Tasklists => "tasklists",
            Self::SmartPunctuation => "smart-punctuation",
        }
    }
}

// ============================================================================
// tests
// ============================================================================
