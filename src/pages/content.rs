//! Markdown content page

use anyhow::{Context, Result};
use maud::{Markup, PreEscaped, html};

use crate::content::Page;
use crate::markdown::{LinkResolver, MarkdownRenderer};

/// Renders a markdown page body
///
/// Relative links between content files are rewritten to the routes they are
/// published under.
///
/// # Arguments
///
/// * `renderer`: Shared markdown renderer
/// * `page`: Page being rendered, used to resolve relative links
/// * `markdown`: Page source
///
/// # Returns
///
/// Article markup holding the rendered page
///
/// # Errors
///
/// Returns error if markdown rendering fails
pub fn render(renderer: &MarkdownRenderer<'_>, page: &Page, markdown: &str) -> Result<Markup> {
    let resolver = LinkResolver::new(page.source());
    let body = renderer
        .render_with_links(markdown, &resolver)
        .with_context(|| format!("Failed to render {}", page.source().display()))?;

    Ok(html! {
        article class="markdown-body prose max-w-none pt-8 pb-8 dark:prose-dark" {
            (PreEscaped(body))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_content_page() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let page = Page::new("blog/hello.md").unwrap();
        let markdown = "# Hello\n\nBack to [the blog](./index.md).\n";

        // Act
        let html = render(&renderer, &page, markdown)
            .expect("Should render")
            .into_string();

        // Assert
        assert!(html.starts_with("<article class=\"markdown-body"));
        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains(r#"href="/blog""#), "Got: {}", html);
        assert!(html.ends_with("</article>"));
    }

    #[test]
    fn test_render_empty_page() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let page = Page::new("empty.md").unwrap();

        // Act
        let html = render(&renderer, &page, "").expect("Should render").into_string();

        // Assert
        assert!(html.contains("markdown-body"));
    }
}
