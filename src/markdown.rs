//! Markdown rendering for content pages.
//!
//! Uses comrak with GitHub Flavored Markdown extensions, highlights fenced
//! code blocks with syntect and rewrites links between content files to the
//! routes they are published under.

mod links;
mod renderer;

pub use links::LinkResolver;
pub use renderer::MarkdownRenderer;
