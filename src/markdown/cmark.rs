//! pulldown-cmark backed markdown renderer.

use pulldown_cmark::{Options, Parser, html};

use super::MarkdownRegistrar;
use crate::config::MarkdownExtension;

/// Markdown-to-HTML renderer with config-driven extensions.
///
/// # Example
///
/// ```
/// use docsite_config::config::SiteConfig;
/// use docsite_config::markdown::CmarkRenderer;
///
/// let config = SiteConfig::from_str(
///     "title = \"T\"\ndescription = \"D\"\n[markdown]\nextensions = [\"footnotes\"]",
/// )
/// .unwrap();
///
/// let mut renderer = CmarkRenderer::new();
/// config.markdown.apply(&mut renderer);
///
/// let html = renderer.render_html("text[^1]\n\n[^1]: a footnote\n");
/// assert!(html.contains("footnote"));
/// ```
#[derive(Debug, Clone)]
pub struct CmarkRenderer {
    options: Options,
}

impl Default for CmarkRenderer {
    fn default() -> Self {
        Self {
            options: Options::empty(),
        }
    }
}

impl CmarkRenderer {
    /// Create a renderer with no extensions enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently enabled parser options.
    pub const fn options(&self) -> Options {
        self.options
    }

    /// Render markdown source to HTML.
    pub fn render_html(&self, source: &str) -> String {
        let parser = Parser::new_ext(source, self.options);
        let mut out = String::with_capacity(source.len() * 2);
        html::push_html(&mut out, parser);
        out
    }
}

impl MarkdownRegistrar for CmarkRenderer {
    fn install(&mut self, extension: MarkdownExtension) {
        let flag = match extension {
            MarkdownExtension::Footnotes => Options::ENABLE_FOOTNOTES,
            MarkdownExtension::Tables => Options::ENABLE_TABLES,
            MarkdownExtension::Strikethrough => Options::ENABLE_STRIKETHROUGH,
            MarkdownExtension::Tasklists => Options::ENABLE_TASKLISTS,
            MarkdownExtension::SmartPunctuation => Options::ENABLE_SMART_PUNCTUATION,
        };
        self.options.insert(flag);
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_extensions_by_default() {
        let renderer = CmarkRenderer::new();
        assert_eq!(renderer.options(), Options::empty());

        // Footnote syntax renders literally without the extension
        let html = renderer.render_html("text[^1]\n\n[^1]: note\n");
        assert!(!html.contains("footnote"));
    }

    #[test]
    fn test_footnotes_render_when_installed() {
        let mut renderer = CmarkRenderer::new();
        renderer.install(MarkdownExtension::Footnotes);

        let html = renderer.render_html("text[^1]\n\n[^1]: note\n");
        assert!(html.contains("footnote-reference"));
    }

    #[test]
    fn test_strikethrough() {
        let mut renderer = CmarkRenderer::new();
        renderer.install(MarkdownExtension::Strikethrough);

        let html = renderer.render_html("~~gone~~");
        assert!(html.contains("<del>"));
    }

    #[test]
    fn test_install_is_idempotent() {
        let mut renderer = CmarkRenderer::new();
        renderer.install(MarkdownExtension::Tables);
        renderer.install(MarkdownExtension::Tables);
        assert_eq!(renderer.options(), Options::ENABLE_TABLES);
    }

    #[test]
    fn test_config_driven_install() {
        let config = crate::config::test_parse_config(
            "[markdown]\nextensions = [\"footnotes\", \"tables\"]",
        );

        let mut renderer = CmarkRenderer::new();
        config.markdown.apply(&mut renderer);

        assert!(renderer.options().contains(Options::ENABLE_FOOTNOTES));
        assert!(renderer.options().contains(Options::ENABLE_TABLES));
        assert!(!renderer.options().contains(Options::ENABLE_TASKLISTS));
    }
}
