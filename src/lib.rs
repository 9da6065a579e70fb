//! docsite-config - the configuration contract for a documentation site.
//!
//! A static-site generator consumes one [`config::SiteConfig`] value,
//! loaded from `docsite.toml`, holding everything it needs to title the
//! site, place a favicon, build top navigation and a hierarchical
//! sidebar, list social links, render a footer and enable markdown
//! extensions. The value is constructed once, validated as a batch, and
//! never mutated afterwards.
//!
//! ```
//! use docsite_config::config::SiteConfig;
//!
//! let config = SiteConfig::from_str(
//!     r#"base = "/docs/"
//! title = "My Project"
//! description = "Documentation"
//!
//! [[theme.nav]]
//! text = "Home"
//! link = "/"
//! "#,
//! )
//! .unwrap();
//!
//! config.validate().unwrap();
//! assert_eq!(config.url_for("/"), "/docs/");
//! ```

pub mod config;
pub mod logger;
pub mod markdown;

pub use config::{SiteConfig, SiteConfigFields};
pub use markdown::{CmarkRenderer, MarkdownRegistrar};
