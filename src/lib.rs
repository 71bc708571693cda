//! Static generator for a personal website with prompt style page chrome.

mod assets;
pub mod components;
mod config;
pub mod content;
pub mod generator;
mod markdown;
pub mod pages;
mod route;
mod site;

pub use assets::{ASSET_FILES, write_assets};
pub use components::layout::{PROMPT_MARKER, layout_wrapper, page_wrapper, prompt_label};
pub use config::Config;
pub use content::{Content, Page, discover};
pub use generator::{GeneratedPage, SiteOptions, SiteReport, generate_site};
pub use markdown::{LinkResolver, MarkdownRenderer};
pub use route::RoutePath;
pub use site::{NavLink, SiteMeta, default_nav_links, duplicate_titles};
