//! `[[theme.sidebar]]` sidebar group configuration.
//!
//! The sidebar is an ordered list of named groups, each holding an
//! ordered list of page entries. Groups render as collapsible sections
//! in the side navigation.
//!
//! # Example
//!
//! ```toml
//! [[theme.sidebar]]
//! text = "Guide"
//! items = [
//!     { text = "Quick Start", link = "/quick-start" },
//!     { text = "Configuration", link = "/config" },
//! ]
//! ```

use serde::{Deserialize, Serialize};

use super::NavItem;
use crate::config::{ConfigDiagnostics, FieldPath};

/// A named, ordered collection of sidebar entries.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarGroup {
    /// Group heading.
    pub text: String,

    /// Entries shown under the heading.
    pub items: Vec<NavItem>,
}

impl SidebarGroup {
    /// Validate the group, reporting under `field`.
    ///
    /// A declared group with no items renders as an empty heading, so
    /// that is an error rather than silently dropped.
    pub fn validate(&self, field: FieldPath, diag: &mut ConfigDiagnostics) {
        if self.text.is_empty() {
            diag.error(field, "sidebar group text must not be empty");
        }

        if self.items.is_empty() {
            diag.error_with_hint(
                field,
                format!("sidebar group '{}' has no items", self.text),
                "add at least one { text, link } entry or remove the group",
            );
        }

        for item in &self.items {
            item.validate(field, diag);
        }
    }
}

// ============================================================================
// tests
// ============================================================================
