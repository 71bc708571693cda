//! Link resolution between content files.

use anyhow::{Context, Result, bail};
use std::path::{Component, Path, PathBuf};

use crate::route::RoutePath;

/// Rewrites relative links in a content file to site routes.
///
/// Authors link pages by file (`../blog/hello.md`) so links work in any
/// markdown viewer; the generated site serves them as routes (`/blog/hello`).
pub struct LinkResolver {
    current_path: PathBuf,
}

impl LinkResolver {
    /// Creates resolver for the markdown file being rendered.
    ///
    /// # Arguments
    ///
    /// * `current_path`: Markdown file path relative to content directory
    pub fn new(current_path: impl AsRef<Path>) -> Self {
        Self {
            current_path: current_path.as_ref().to_path_buf(),
        }
    }

    /// Resolves link to its site URL.
    ///
    /// - Links with a URL scheme (`https:`, `mailto:`, `tel:`, `data:`...),
    ///   site absolute paths, anchors and bare query strings are returned
    ///   unchanged
    /// - Relative `.md` targets become page routes, keeping any query and
    ///   fragment
    /// - Relative directory targets (trailing `/`) become directory routes
    /// - Other relative targets (images, downloads) become absolute paths
    ///   to the copied static file
    ///
    /// # Arguments
    ///
    /// * `link`: Link href or image src from markdown
    ///
    /// # Returns
    ///
    /// Resolved URL for the generated site
    ///
    /// # Errors
    ///
    /// Returns error if the target escapes the content directory or is not
    /// valid UTF8
    pub fn resolve(&self, link: &str) -> Result<String> {
        if is_passthrough(link) {
            return Ok(link.to_string());
        }

        let (target, fragment) = match link.split_once('#') {
            Some((target, fragment)) => (target, Some(fragment)),
            None => (link, None),
        };
        let (target, query) = match target.split_once('?') {
            Some((target, query)) => (target, Some(query)),
            None => (target, None),
        };
        if target.is_empty() {
            return Ok(link.to_string());
        }

        let current_dir = self.current_path.parent().unwrap_or_else(|| Path::new(""));
        let normalized = normalize_path(&current_dir.join(target))
            .with_context(|| format!("Failed to resolve link: {}", link))?;

        let mut resolved = if target.ends_with(".md") {
            RoutePath::from_content_path(&normalized)?.to_string()
        } else {
            let path_str = normalized
                .to_str()
                .context("Link target contains invalid UTF8")?;
            if target.ends_with('/') {
                RoutePath::new(path_str).to_string()
            } else {
                format!("/{}", path_str)
            }
        };

        if let Some(query) = query {
            resolved.push('?');
            resolved.push_str(query);
        }
        if let Some(fragment) = fragment {
            resolved.push('#');
            resolved.push_str(fragment);
        }

        Ok(resolved)
    }
}

fn is_passthrough(link: &str) -> bool {
    link.is_empty() || link.starts_with('/') || link.starts_with('#') || has_scheme(link)
}

/// True when link starts with a URI scheme: a letter followed by letters,
/// digits, `+`, `-` or `.`, then `:`.
fn has_scheme(link: &str) -> bool {
    let Some((scheme, _)) = link.split_once(':') else {
        return false;
    };

    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Resolves `.` and `..` components without touching the filesystem.
///
/// # Errors
///
/// Returns error if path climbs above the content root
fn normalize_path(path: &Path) -> Result<PathBuf> {
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            Component::Normal(c) => components.push(c),
            Component::ParentDir => {
                if components.pop().is_none() {
                    bail!("Path escapes content root: {}", path.display());
                }
            }
            _ => {}
        }
    }

    Ok(components.iter().collect())
}
