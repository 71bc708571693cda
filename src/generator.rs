//! Whole site generation

use anyhow::{Context, Result, bail};
use maud::Markup;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::assets::write_assets;
use crate::components::layout::{layout_wrapper, page_wrapper};
use crate::content::{Content, Page, check_output_dir, discover, extract_title, fallback_title};
use crate::markdown::MarkdownRenderer;
use crate::pages;
use crate::route::RoutePath;
use crate::site::{NavLink, SiteMeta, duplicate_titles};

/// File name of the not found page at the output root.
pub const NOT_FOUND_FILE: &str = "404.html";

/// Output subdirectory holding the bundled CSS and JS.
const ASSETS_DIR: &str = "assets";

/// Inputs for one site generation run.
#[derive(Debug, Clone)]
pub struct SiteOptions<'a> {
    pub content_dir: &'a Path,
    pub output_dir: &'a Path,
    pub site: &'a SiteMeta,
    pub nav_links: &'a [NavLink],
}

/// Page written during generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPage {
    pub route: RoutePath,
    pub title: String,
    /// Written file, inside the output directory.
    pub path: PathBuf,
}

/// Summary of a generation run.
#[derive(Debug, Default)]
pub struct SiteReport {
    /// Content pages in route order; the not found page is not included.
    pub pages: Vec<GeneratedPage>,
    pub static_files: usize,
    pub not_found: PathBuf,
}

impl SiteReport {
    /// Home page file, when the content has an `index.md`.
    pub fn home(&self) -> Option<&Path> {
        self.pages
            .iter()
            .find(|p| p.route.is_root())
            .map(|p| p.path.as_path())
    }
}

/// Generates the complete site into the output directory
///
/// Writes bundled assets, one HTML file per markdown page, the static files
/// and the not found page. Every page is wrapped with the shared layout
/// showing its own route.
///
/// # Arguments
///
/// * `options`: Content and output directories, site metadata and navigation
///
/// # Returns
///
/// Report of the written pages
///
/// # Errors
///
/// Returns error if content discovery fails, the output directory lies
/// inside the content directory, a static file would overwrite a generated
/// file, or any file cannot be read, rendered or written
pub fn generate_site(options: &SiteOptions<'_>) -> Result<SiteReport> {
    let output_dir = options.output_dir;

    let content = discover(options.content_dir).context("Failed to discover content")?;
    log::debug!(
        "Found {} pages and {} static files in {}",
        content.pages.len(),
        content.static_files.len(),
        options.content_dir.display()
    );
    check_output_dir(options.content_dir, output_dir)?;
    check_generated_outputs(&content)?;

    fs::create_dir_all(output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            output_dir.display()
        )
    })?;

    let assets_dir = output_dir.join(ASSETS_DIR);
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
    write_assets(&assets_dir).context("Failed to write assets")?;

    for title in duplicate_titles(options.nav_links) {
        log::warn!("Navigation title {:?} is used more than once", title);
    }

    let renderer = MarkdownRenderer::new();
    let mut report = SiteReport::default();

    for page in &content.pages {
        let generated = generate_page(options, &renderer, page)?;
        log::info!("Generated: {}", generated.path.display());
        report.pages.push(generated);
    }

    for file in &content.static_files {
        copy_static_file(options.content_dir, output_dir, file)?;
    }
    report.static_files = content.static_files.len();

    report.not_found = generate_not_found(options)?;
    log::info!("Generated: {}", report.not_found.display());

    Ok(report)
}

/// Rejects content that would overwrite a generated file.
///
/// Static files may not land on a page's `index.html`, on `404.html` or
/// inside the bundled assets directory. Pages may not live under the assets
/// directory either.
fn check_generated_outputs(content: &Content) -> Result<()> {
    let mut generated: HashMap<PathBuf, String> = content
        .pages
        .iter()
        .map(|page| {
            (
                page.route().output_file(),
                page.source().display().to_string(),
            )
        })
        .collect();
    generated.insert(PathBuf::from(NOT_FOUND_FILE), "the not found page".to_string());

    for page in &content.pages {
        if page.route().segments().next() == Some(ASSETS_DIR) {
            bail!(
                "Page {} would be written inside the {}/ directory",
                page.source().display(),
                ASSETS_DIR
            );
        }
    }

    for file in &content.static_files {
        if file.starts_with(ASSETS_DIR) {
            bail!(
                "Static file {} would be written inside the {}/ directory",
                file.display(),
                ASSETS_DIR
            );
        }
        if let Some(source) = generated.get(file) {
            bail!(
                "Static file {} would overwrite output of {}",
                file.display(),
                source
            );
        }
    }

    Ok(())
}

/// Renders one markdown page with the site layout and writes it.
fn generate_page(
    options: &SiteOptions<'_>,
    renderer: &MarkdownRenderer<'_>,
    page: &Page,
) -> Result<GeneratedPage> {
    let source = options.content_dir.join(page.source());
    let markdown = fs::read_to_string(&source)
        .with_context(|| format!("Failed to read page {}", source.display()))?;

    let title = extract_title(&markdown).unwrap_or_else(|| {
        if page.route().is_root() {
            options.site.title.clone()
        } else {
            fallback_title(page)
        }
    });

    let body = pages::content::render(renderer, page, &markdown)?;
    let document_title = document_title(options.site, page.route(), &title);
    let document = render_document(options, page.route(), &document_title, body);

    let path = options.output_dir.join(page.route().output_file());
    write_page(&path, document)?;

    Ok(GeneratedPage {
        route: page.route().clone(),
        title,
        path,
    })
}

fn generate_not_found(options: &SiteOptions<'_>) -> Result<PathBuf> {
    let route = pages::not_found::route();
    // Served from the output root, so assets resolve without a prefix
    let layout = layout_wrapper(
        options.site,
        &route,
        options.nav_links,
        pages::not_found::render(),
    );
    let document = page_wrapper(
        &document_title(options.site, &route, "Page not found"),
        "",
        options.site.description.as_deref(),
        layout,
    );

    let path = options.output_dir.join(NOT_FOUND_FILE);
    write_page(&path, document)?;
    Ok(path)
}

fn render_document(
    options: &SiteOptions<'_>,
    route: &RoutePath,
    title: &str,
    body: Markup,
) -> Markup {
    page_wrapper(
        title,
        &route.root_prefix(),
        options.site.description.as_deref(),
        layout_wrapper(options.site, route, options.nav_links, body),
    )
}

/// `"{page} - {site}"`, or the site title alone for the home page.
fn document_title(site: &SiteMeta, route: &RoutePath, page_title: &str) -> String {
    if route.is_root() || page_title == site.title {
        site.title.clone()
    } else {
        format!("{} - {}", page_title, site.title)
    }
}

fn write_page(path: &Path, document: Markup) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    fs::write(path, document.into_string())
        .with_context(|| format!("Failed to write page to {}", path.display()))
}

fn copy_static_file(content_dir: &Path, output_dir: &Path, relative: &Path) -> Result<()> {
    let source = content_dir.join(relative);
    let target = output_dir.join(relative);

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    fs::copy(&source, &target).with_context(|| {
        format!(
            "Failed to copy {} to {}",
            source.display(),
            target.display()
        )
    })?;
    log::debug!("Copied: {}", target.display());
    Ok(())
}
