//! Markdown to HTML rendering for content pages.

use anyhow::{Context, Result};
use comrak::Options;
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use super::LinkResolver;

const CODE_OPEN: &str = "<code class=\"language-";
const CODE_CLOSE: &str = "</code>";

/// Renders markdown to HTML with GitHub Flavored Markdown extensions.
///
/// Code blocks tagged with a language are highlighted by syntect using CSS
/// classes with the `hljs-` prefix, styled by `markdown.css`.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
    syntax_set: SyntaxSet,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer with GFM extensions, smart punctuation and raw HTML
    /// passthrough. Content is authored by the site owner and trusted.
    pub fn new() -> Self {
        let mut options = Options::default();

        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options.extension.footnotes = true;
        options.extension.description_lists = true;

        options.parse.smart = true;

        options.render.unsafe_ = true;

        Self {
            options,
            syntax_set: SyntaxSet::load_defaults_newlines(),
        }
    }

    /// Renders markdown content to HTML.
    ///
    /// # Errors
    ///
    /// Returns error if syntax highlighting fails
    pub fn render(&self, content: &str) -> Result<String> {
        let html = comrak::markdown_to_html(content, &self.options);
        self.highlight_code_blocks(&html)
    }

    /// Renders markdown content and rewrites relative links to site routes.
    ///
    /// Links the resolver rejects (for example ones escaping the content
    /// directory) are left as written.
    ///
    /// # Errors
    ///
    /// Returns error if syntax highlighting fails
    pub fn render_with_links(&self, content: &str, resolver: &LinkResolver) -> Result<String> {
        let html = comrak::markdown_to_html(content, &self.options);
        let html = rewrite_links(&html, resolver);
        self.highlight_code_blocks(&html)
    }

    /// Replaces the body of every `<code class="language-X">` block with
    /// highlighted markup.
    fn highlight_code_blocks(&self, html: &str) -> Result<String> {
        let mut result = String::with_capacity(html.len());
        let mut last_end = 0;
        let mut search_pos = 0;

        while let Some(found) = html[search_pos..].find(CODE_OPEN) {
            let code_start = search_pos + found;
            let lang_start = code_start + CODE_OPEN.len();

            let Some(block) = locate_code_block(html, lang_start) else {
                search_pos = lang_start;
                continue;
            };

            let language = &html[lang_start..block.lang_end];
            let code = html_decode(&html[block.content_start..block.content_end]);
            let highlighted = self
                .highlight_code(&code, language)
                .with_context(|| format!("Failed to highlight {} code block", language))?;

            result.push_str(&html[last_end..code_start]);
            result.push_str(CODE_OPEN);
            result.push_str(language);
            result.push_str("\">");
            result.push_str(&highlighted);
            result.push_str(CODE_CLOSE);

            last_end = block.content_end + CODE_CLOSE.len();
            search_pos = last_end;
        }

        result.push_str(&html[last_end..]);
        Ok(result)
    }

    /// Highlights code with syntect, falling back to escaped plain text for
    /// unknown languages.
    fn highlight_code(&self, code: &str, language: &str) -> Result<String> {
        if code.is_empty() {
            return Ok(String::new());
        }

        let Some(syntax) = self
            .syntax_set
            .find_syntax_by_token(language)
            .or_else(|| self.syntax_set.find_syntax_by_extension(language))
        else {
            return Ok(html_escape(code));
        };

        let mut generator = ClassedHTMLGenerator::new_with_class_style(
            syntax,
            &self.syntax_set,
            ClassStyle::SpacedPrefixed { prefix: "hljs-" },
        );

        for line in LinesWithEndings::from(code) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .context("Failed to parse line for syntax highlighting")?;
        }

        Ok(generator.finalize())
    }
}

impl<'a> Default for MarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// Byte offsets of one code block after its `language-` prefix.
struct CodeBlock {
    lang_end: usize,
    content_start: usize,
    content_end: usize,
}

fn locate_code_block(html: &str, lang_start: usize) -> Option<CodeBlock> {
    let lang_end = lang_start + html[lang_start..].find('"')?;
    let content_start = lang_end + html[lang_end..].find('>')? + 1;
    let content_end = content_start + html[content_start..].find(CODE_CLOSE)?;

    Some(CodeBlock {
        lang_end,
        content_start,
        content_end,
    })
}

/// Rewrites `href` of anchors and `src` of images through the resolver.
fn rewrite_links(html: &str, resolver: &LinkResolver) -> String {
    let mut result = String::with_capacity(html.len());
    let mut pos = 0;

    while let Some((tag_start, attr)) = next_link_tag(html, pos) {
        let tag_end = html[tag_start..]
            .find('>')
            .map_or(html.len(), |p| tag_start + p);

        let Some(attr_offset) = html[tag_start..tag_end].find(attr) else {
            result.push_str(&html[pos..tag_start + 1]);
            pos = tag_start + 1;
            continue;
        };
        let value_start = tag_start + attr_offset + attr.len();

        let Some(value_len) = html[value_start..].find('"') else {
            break;
        };
        let value_end = value_start + value_len;

        // Attribute values come out of comrak entity encoded
        let url = html_decode(&html[value_start..value_end]);
        let resolved = match resolver.resolve(&url) {
            Ok(resolved) if resolved != url => html_escape(&resolved),
            Ok(_) => html[value_start..value_end].to_string(),
            Err(e) => {
                log::debug!("Keeping unresolved link {}: {:#}", url, e);
                html[value_start..value_end].to_string()
            }
        };

        result.push_str(&html[pos..value_start]);
        result.push_str(&resolved);
        pos = value_end;
    }

    result.push_str(&html[pos..]);
    result
}

/// Finds the next `<a ` or `<img ` tag and the attribute holding its URL.
fn next_link_tag(html: &str, from: usize) -> Option<(usize, &'static str)> {
    let link = html[from..].find("<a ").map(|p| (from + p, "href=\""));
    let image = html[from..].find("<img ").map(|p| (from + p, "src=\""));

    match (link, image) {
        (Some(l), Some(i)) => Some(if l.0 < i.0 { l } else { i }),
        (l, i) => l.or(i),
    }
}

fn html_decode(html: &str) -> String {
    html.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        // Arrange
        let renderer = MarkdownRenderer::new();

        // Act
        let html = renderer
            .render("# Hello\n\nThis is **bold** text.")
            .expect("Should render markdown");

        // Assert
        assert!(html.contains("<h1>"), "Should contain h1 tag");
        assert!(html.contains("Hello"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_render_gfm_tables() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = "| Year | Project |\n|------|---------|\n| 2023 | tildesite |\n";

        // Act
        let html = renderer.render(markdown).expect("Should render table");

        // Assert
        assert!(html.contains("<table>"));
        assert!(html.contains("<th>"));
        assert!(html.contains("<td>"));
        assert!(html.contains("tildesite"));
    }

    #[test]
    fn test_render_gfm_tasklist() {
        // Arrange
        let renderer = MarkdownRenderer::new();

        // Act
        let html = renderer
            .render("- [ ] Write post\n- [x] Ship site\n")
            .expect("Should render tasklist");

        // Assert
        assert!(html.contains("type=\"checkbox\""));
        assert!(html.contains("disabled"));
    }

    #[test]
    fn test_render_code_blocks_highlighted() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = "```rust\nfn main() {\n    println!(\"hello\");\n}\n```\n";

        // Act
        let html = renderer.render(markdown).expect("Should render code block");

        // Assert
        assert!(html.contains("<pre>"), "Should contain pre tag: {}", html);
        assert!(html.contains("<code class=\"language-rust\">"));
        assert!(
            html.contains("<span class=\"hljs-"),
            "Should contain syntax highlighting spans: {}",
            html
        );
        assert!(html.contains("println!"));
    }

    #[test]
    fn test_highlight_unknown_language_escaped() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = "```nosuchlang\na < b && c\n```\n";

        // Act
        let html = renderer.render(markdown).expect("Should render");

        // Assert
        assert!(html.contains("<code class=\"language-nosuchlang\">"));
        assert!(html.contains("a &lt; b &amp;&amp; c"), "Got: {}", html);
        assert!(!html.contains("hljs-"));
    }

    #[test]
    fn test_highlight_multiple_code_blocks() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = "```rust\nlet a = 1;\n```\n\ntext between\n\n```python\nb = 2\n```\n";

        // Act
        let html = renderer.render(markdown).expect("Should render");

        // Assert
        assert!(html.contains("language-rust"));
        assert!(html.contains("language-python"));
        assert!(html.contains("text between"));
        assert_eq!(html.matches("</code>").count(), 2);
    }

    #[test]
    fn test_render_empty_markdown() {
        // Arrange & Act
        let html = MarkdownRenderer::default()
            .render("")
            .expect("Should render empty");

        // Assert
        assert!(html.is_empty());
    }

    #[test]
    fn test_render_with_links_rewrites_pages_and_images() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let resolver = LinkResolver::new("blog/first.md");
        let markdown = "See [the next post](./second.md) and [me](../about.md#contact).\n\n\
                        ![diagram](./img/flow.png)\n";

        // Act
        let html = renderer
            .render_with_links(markdown, &resolver)
            .expect("Should render");

        // Assert
        assert!(html.contains(r#"href="/blog/second""#), "Got: {}", html);
        assert!(html.contains(r#"href="/about#contact""#), "Got: {}", html);
        assert!(html.contains(r#"src="/blog/img/flow.png""#), "Got: {}", html);
    }

    #[test]
    fn test_render_with_links_keeps_external_and_invalid() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let resolver = LinkResolver::new("about.md");
        let markdown = "[site](https://example.com/?a=1&b=2) [bad](../../outside.md)\n";

        // Act
        let html = renderer
            .render_with_links(markdown, &resolver)
            .expect("Should render");

        // Assert
        assert!(html.contains(r#"href="https://example.com/?a=1&amp;b=2""#), "Got: {}", html);
        assert!(html.contains(r#"href="../../outside.md""#), "Got: {}", html);
    }

    #[test]
    fn test_html_decode_escape() {
        assert_eq!(html_decode("&lt;a href=&quot;x&quot;&gt;"), "<a href=\"x\">");
        assert_eq!(html_decode("&amp;lt;"), "&lt;");
        assert_eq!(html_escape("<'&'>"), "&lt;&#39;&amp;&#39;&gt;");
    }
}
