//! Markdown extension registration.
//!
//! The config declares extensions as data ([`MarkdownExtension`]); a
//! renderer receives them through the [`MarkdownRegistrar`] capability.
//! Keeping the registrar an explicit trait (rather than a callback
//! stored in the config) keeps the config pure data and makes the hook
//! testable with a stub.

mod cmark;

pub use cmark::CmarkRenderer;

use crate::config::MarkdownExtension;

/// Capability to register markdown syntax extensions.
///
/// [`crate::config::MarkdownConfig::apply`] calls `install` exactly
/// once per distinct declared extension, in declaration order.
pub trait MarkdownRegistrar {
    /// Enable one extension on the underlying processor.
    fn install(&mut self, extension: MarkdownExtension);
}
