//! Configuration section definitions.
//!
//! Each module corresponds to a part of `docsite.toml`:
//!
//! | Module     | TOML Section    | Purpose                              |
//! |------------|-----------------|--------------------------------------|
//! | `head`     | `[[head]]`      | Head tag injection (favicon, meta)   |
//! | `theme`    | `[theme]`       | Nav, sidebar, social links, footer   |
//! | `markdown` | `[markdown]`    | Markdown extension declarations      |
//! | `link`     | (shared)        | Link target classification           |

mod head;
pub mod link;
mod markdown;
pub mod theme;

pub use head::HeadEntry;
pub use link::LinkTarget;
pub use markdown::{MarkdownConfig, MarkdownExtension};
pub use theme::{
    FooterConfig, NavItem, SearchConfig, SearchProvider, SidebarGroup, SocialIcon, SocialLink,
    ThemeConfig,
};
