//! Content directory discovery

use anyhow::{Context, Result, bail};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::route::RoutePath;

/// Markdown page found in the content directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    route: RoutePath,
    source: PathBuf,
}

impl Page {
    /// Creates page for a markdown file relative to the content directory.
    ///
    /// # Errors
    ///
    /// Returns error if the path cannot be turned into a route.
    pub fn new(source: impl Into<PathBuf>) -> Result<Self> {
        let source = source.into();
        let route = RoutePath::from_content_path(&source)?;
        Ok(Self { route, source })
    }

    pub fn route(&self) -> &RoutePath {
        &self.route
    }

    /// Markdown file path relative to the content directory.
    pub fn source(&self) -> &Path {
        &self.source
    }
}

/// Everything the generator publishes from a content directory.
#[derive(Debug, Default)]
pub struct Content {
    /// Markdown pages sorted by route.
    pub pages: Vec<Page>,
    /// Other files, relative to the content directory, copied verbatim.
    pub static_files: Vec<PathBuf>,
}

/// Walks the content directory for pages and static files
///
/// Hidden files and directories (leading `.`) are skipped. Every `.md` file
/// becomes a page; everything else is a static file.
///
/// # Arguments
///
/// * `content_dir`: Root of the site's content
///
/// # Returns
///
/// Pages sorted by route and static files sorted by path
///
/// # Errors
///
/// Returns error if the directory cannot be read or two files map to the
/// same route (`blog.md` and `blog/index.md`).
pub fn discover(content_dir: impl AsRef<Path>) -> Result<Content> {
    let content_dir = content_dir.as_ref();
    if !content_dir.is_dir() {
        bail!("Content directory does not exist: {}", content_dir.display());
    }

    let mut files = Vec::new();
    walk(content_dir, Path::new(""), &mut files)?;

    let mut pages: BTreeMap<RoutePath, Page> = BTreeMap::new();
    let mut static_files = Vec::new();

    for relative in files {
        if relative.extension().and_then(|e| e.to_str()) != Some("md") {
            static_files.push(relative);
            continue;
        }

        let page = Page::new(relative)?;
        if let Some(existing) = pages.get(page.route()) {
            bail!(
                "Route {} is produced by both {} and {}",
                page.route(),
                existing.source().display(),
                page.source().display()
            );
        }
        pages.insert(page.route().clone(), page);
    }

    static_files.sort();

    Ok(Content {
        pages: pages.into_values().collect(),
        static_files,
    })
}

fn walk(root: &Path, relative: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let dir = root.join(relative);
    let entries =
        fs::read_dir(&dir).with_context(|| format!("Failed to read directory {}", dir.display()))?;

    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to read entry in {}", dir.display()))?;
        let name = entry.file_name();
        if name.to_string_lossy().starts_with('.') {
            continue;
        }

        let path = relative.join(&name);
        let file_type = entry
            .file_type()
            .with_context(|| format!("Failed to stat {}", entry.path().display()))?;

        if file_type.is_dir() {
            walk(root, &path, files)?;
        } else {
            files.push(path);
        }
    }

    Ok(())
}

/// Checks that the output directory lies outside the content directory
///
/// Both paths are compared after resolving symlinks; an output directory
/// that does not exist yet is resolved through its nearest existing
/// ancestor. An output inside the content would be discovered again as
/// static files on the next run.
///
/// # Errors
///
/// Returns error if the output directory is the content directory or
/// nested inside it, or if the content directory cannot be resolved
pub fn check_output_dir(content_dir: &Path, output_dir: &Path) -> Result<()> {
    let content = content_dir.canonicalize().with_context(|| {
        format!(
            "Failed to resolve content directory {}",
            content_dir.display()
        )
    })?;
    let output = resolve_existing_prefix(output_dir)?;

    if output.starts_with(&content) {
        bail!(
            "Output directory {} must be outside content directory {}",
            output_dir.display(),
            content_dir.display()
        );
    }

    Ok(())
}

fn resolve_existing_prefix(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path)
        .with_context(|| format!("Failed to resolve path {}", path.display()))?;

    for ancestor in absolute.ancestors() {
        if let Ok(canonical) = ancestor.canonicalize() {
            let rest = absolute.strip_prefix(ancestor).unwrap_or(Path::new(""));
            return Ok(canonical.join(rest));
        }
    }

    Ok(absolute)
}

/// Page title from the first level one ATX heading, if any
///
/// Closing `#` sequences are stripped. Headings inside fenced code blocks are
/// ignored.
pub fn extract_title(markdown: &str) -> Option<String> {
    let mut in_fence = false;

    for line in markdown.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }

        if let Some(heading) = trimmed.strip_prefix("# ") {
            let title = heading.trim().trim_end_matches('#').trim_end();
            if !title.is_empty() {
                return Some(title.to_string());
            }
        }
    }

    None
}

/// Title fallback from the page's file name: `hello-world.md` is
/// `hello-world`, `blog/index.md` is `blog`.
pub fn fallback_title(page: &Page) -> String {
    page.route()
        .segments()
        .last()
        .unwrap_or_default()
        .to_string()
}
