//! Bundled CSS and JS assets

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");
const UTILITIES: &str = include_str!("../assets/utilities.css");
const CHROME: &str = include_str!("../assets/components/chrome.css");
const TYPEWRITER_CSS: &str = include_str!("../assets/components/typewriter.css");
const MARKDOWN: &str = include_str!("../assets/markdown.css");

const THEME_JS: &str = include_str!("../assets/js/theme.js");
const MOBILE_NAV_JS: &str = include_str!("../assets/js/mobile-nav.js");
const TYPEWRITER_JS: &str = include_str!("../assets/js/typewriter.js");

/// Files written to the `assets/` directory, as referenced by page heads.
pub const ASSET_FILES: [&str; 5] = [
    "site.css",
    "markdown.css",
    "theme.js",
    "mobile-nav.js",
    "typewriter.js",
];

/// Writes all bundled assets to output directory
///
/// # Errors
///
/// Returns error if any file cannot be written
pub fn write_assets(assets_dir: &Path) -> Result<()> {
    write_bundled(
        assets_dir,
        "site.css",
        &[BASE, UTILITIES, CHROME, TYPEWRITER_CSS],
    )?;
    write_bundled(assets_dir, "markdown.css", &[MARKDOWN])?;
    write_bundled(assets_dir, "theme.js", &[THEME_JS])?;
    write_bundled(assets_dir, "mobile-nav.js", &[MOBILE_NAV_JS])?;
    write_bundled(assets_dir, "typewriter.js", &[TYPEWRITER_JS])?;
    Ok(())
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let content = parts.join("\n");
    fs::write(dir.join(name), content)
        .with_context(|| format!("Failed to write asset: {}", name))?;
    Ok(())
}
