//! Shared test utilities for integration tests.
//!
//! Provides helpers for building temporary content directories and reading
//! generated pages back.

#![allow(dead_code)]

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use tildesite::{NavLink, SiteMeta};

/// Creates temporary project with an empty `content/` directory.
///
/// # Returns
///
/// Temporary directory holding the project
///
/// # Errors
///
/// Returns error if directory creation fails
pub fn create_test_project() -> Result<TempDir> {
    let dir = TempDir::new()?;
    fs::create_dir_all(dir.path().join("content"))?;
    Ok(dir)
}

/// Writes file to content directory, creating parent directories as needed.
///
/// # Arguments
///
/// * `project`: Project root containing `content/`
/// * `path`: File path relative to content directory
/// * `content`: File content
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_content(project: &Path, path: &str, content: &str) -> Result<()> {
    let file_path = project.join("content").join(path);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

/// Reads generated file from output directory.
///
/// # Errors
///
/// Returns error if file does not exist or is not UTF8
pub fn read_output(output: &Path, path: &str) -> Result<String> {
    let file = output.join(path);
    fs::read_to_string(&file).with_context(|| format!("Missing output {}", file.display()))
}

/// Site metadata used across tests.
pub fn test_site() -> SiteMeta {
    let mut site = SiteMeta::new("Test Site");
    site.author = Some("Test Author".to_string());
    site.copyright_year = Some(2024);
    site
}

/// Builds navigation list from title and href pairs.
pub fn nav(entries: &[(&str, &str)]) -> Vec<NavLink> {
    entries
        .iter()
        .map(|(title, href)| NavLink::new(*title, *href))
        .collect()
}

/// Returns the desktop navigation region of a rendered page.
pub fn nav_region(html: &str) -> &str {
    const START: &str = r#"<div class="hidden sm:block">"#;
    let start = html.find(START).expect("Page should have nav region") + START.len();
    let end = start + html[start..].find("</div>").expect("Nav region should close");
    &html[start..end]
}
