//! Static site data shared by every page

use anyhow::{Result, bail};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Header navigation entry.
///
/// Rendered once per page in the desktop header and once in the mobile menu,
/// always in list order. Titles double as list keys and should be unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    title: String,
    href: String,
}

impl NavLink {
    /// Creates navigation link from display title and target path.
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
        }
    }

    /// Display label.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Target path or URL.
    pub fn href(&self) -> &str {
        &self.href
    }
}

impl FromStr for NavLink {
    type Err = anyhow::Error;

    /// Parses `TITLE=HREF`, splitting on the first `=`.
    ///
    /// # Errors
    ///
    /// Returns error if separator is missing or either side is blank.
    fn from_str(s: &str) -> Result<Self> {
        let Some((title, href)) = s.split_once('=') else {
            bail!("Navigation link must be TITLE=HREF: {}", s);
        };

        let (title, href) = (title.trim(), href.trim());
        if title.is_empty() {
            bail!("Navigation link has empty title: {}", s);
        }
        if href.is_empty() {
            bail!("Navigation link has empty href: {}", s);
        }

        Ok(Self::new(title, href))
    }
}

impl fmt::Display for NavLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.title, self.href)
    }
}

/// Header navigation used when none is configured.
pub fn default_nav_links() -> Vec<NavLink> {
    vec![
        NavLink::new("Blog", "/blog"),
        NavLink::new("Tags", "/tags"),
        NavLink::new("Projects", "/projects"),
        NavLink::new("About", "/about"),
    ]
}

/// Returns titles appearing more than once, in first-repeat order.
///
/// Duplicate titles still render; callers report them as a warning.
pub fn duplicate_titles(links: &[NavLink]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();

    for link in links {
        if !seen.insert(link.title()) && !duplicates.contains(&link.title()) {
            duplicates.push(link.title());
        }
    }

    duplicates
}

/// Site wide metadata rendered into the page chrome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteMeta {
    pub title: String,
    pub author: Option<String>,
    pub description: Option<String>,
    pub copyright_year: Option<u16>,
    /// Strings cycled by the header typewriter. Empty leaves it idle.
    pub typewriter_strings: Vec<String>,
}

impl SiteMeta {
    /// Creates metadata with only a site title set.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: None,
            description: None,
            copyright_year: None,
            typewriter_strings: Vec::new(),
        }
    }
}
