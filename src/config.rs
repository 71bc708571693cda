//! Command line configuration.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;

use crate::content::check_output_dir;
use crate::site::{NavLink, SiteMeta, default_nav_links};

/// Command line configuration for tildesite.
#[derive(Debug, Clone, Parser)]
#[command(name = "tildesite", version, about, long_about = None)]
pub struct Config {
    /// Content directory holding markdown pages and static files
    #[arg(default_value = "content")]
    pub content: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Site title (defaults to the directory containing the content)
    #[arg(long)]
    pub title: Option<String>,

    /// Site author shown in the footer
    #[arg(long)]
    pub author: Option<String>,

    /// Meta description for every page
    #[arg(long)]
    pub description: Option<String>,

    /// Copyright year shown in the footer
    #[arg(long)]
    pub year: Option<u16>,

    /// Header navigation entry, repeatable, in display order
    #[arg(
        long = "nav",
        value_name = "TITLE=HREF",
        value_parser = parse_nav_link,
        default_values_t = default_nav_links()
    )]
    pub nav: Vec<NavLink>,

    /// Render no header navigation entries
    #[arg(long, conflicts_with = "nav")]
    pub no_nav: bool,

    /// Text cycled by the header typewriter, repeatable
    #[arg(long = "typewriter", value_name = "TEXT")]
    pub typewriter: Vec<String>,

    /// Do not open the generated site in a browser
    #[arg(long)]
    pub no_open: bool,
}

fn parse_nav_link(s: &str) -> std::result::Result<NavLink, String> {
    s.parse().map_err(|e: anyhow::Error| e.to_string())
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if content directory does not exist or output
    /// directory is the content directory or lies inside it.
    pub fn validate(&self) -> Result<()> {
        if !self.content.is_dir() {
            bail!(
                "Content directory does not exist: {}",
                self.content.display()
            );
        }

        check_output_dir(&self.content, &self.output)
    }

    /// Returns site title from configuration or the content's parent directory.
    ///
    /// # Errors
    ///
    /// Returns error if no directory name can be derived or it contains
    /// invalid UTF8.
    pub fn site_title(&self) -> Result<String> {
        if let Some(title) = &self.title {
            return Ok(title.clone());
        }

        let content = self
            .content
            .canonicalize()
            .unwrap_or_else(|_| self.content.clone());

        content
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .with_context(|| {
                format!(
                    "Cannot derive site title from path: {}",
                    content.display()
                )
            })
            .map(String::from)
    }

    /// Header navigation entries after applying `--no-nav`.
    pub fn nav_links(&self) -> Vec<NavLink> {
        if self.no_nav {
            Vec::new()
        } else {
            self.nav.clone()
        }
    }

    /// Builds site metadata.
    ///
    /// # Errors
    ///
    /// Returns error if the site title cannot be determined.
    pub fn site_meta(&self) -> Result<SiteMeta> {
        Ok(SiteMeta {
            title: self.site_title()?,
            author: self.author.clone(),
            description: self.description.clone(),
            copyright_year: self.year,
            typewriter_strings: self.typewriter.clone(),
        })
    }
}
