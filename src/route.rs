//! Route paths for generated pages

use anyhow::{Context, Result, bail};
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Location path of a page, excluding domain (`/`, `/about`, `/blog/hello`).
///
/// Always starts with a slash and never ends with one, except for the root.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoutePath(String);

impl RoutePath {
    /// Root route.
    pub fn root() -> Self {
        Self("/".to_string())
    }

    /// Creates route from path text, adding the leading slash and dropping
    /// empty segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use tildesite::RoutePath;
    ///
    /// assert_eq!(RoutePath::new("blog//hello/").as_str(), "/blog/hello");
    /// assert_eq!(RoutePath::new("").as_str(), "/");
    /// ```
    pub fn new(path: &str) -> Self {
        Self::from_segments(path.split('/').filter(|s| !s.is_empty()))
    }

    fn from_segments<'a>(segments: impl IntoIterator<Item = &'a str>) -> Self {
        let mut route = String::new();
        for segment in segments {
            route.push('/');
            route.push_str(segment);
        }
        if route.is_empty() {
            route.push('/');
        }
        Self(route)
    }

    /// Derives route from markdown file path relative to content directory.
    ///
    /// The extension is dropped and `index` files stand for their directory:
    /// `about.md` is `/about`, `blog/index.md` is `/blog`, `index.md` is `/`.
    ///
    /// # Arguments
    ///
    /// * `relative`: Markdown file path relative to content directory
    ///
    /// # Errors
    ///
    /// Returns error if path is absolute, contains `..` or is not valid UTF8.
    pub fn from_content_path(relative: impl AsRef<Path>) -> Result<Self> {
        let relative = relative.as_ref();
        let stem = relative.with_extension("");
        let mut segments = Vec::new();

        for component in stem.components() {
            match component {
                Component::Normal(c) => segments.push(
                    c.to_str()
                        .with_context(|| {
                            format!("Content path contains invalid UTF8: {}", relative.display())
                        })?,
                ),
                Component::CurDir => {}
                _ => bail!(
                    "Content path must stay inside content directory: {}",
                    relative.display()
                ),
            }
        }

        if segments.last() == Some(&"index") {
            segments.pop();
        }

        Ok(Self::from_segments(segments))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Route segments, empty for the root.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    /// Number of directories between the site root and this page's file.
    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    /// Output file relative to site root: `index.html` for the root,
    /// `<segments>/index.html` otherwise.
    pub fn output_file(&self) -> PathBuf {
        let mut path: PathBuf = self.segments().collect();
        path.push("index.html");
        path
    }

    /// Relative prefix leading from this page's file back to the site root.
    pub fn root_prefix(&self) -> String {
        "../".repeat(self.depth())
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_path_to_route() {
        assert_eq!(RoutePath::from_content_path("index.md").unwrap().as_str(), "/");
        assert_eq!(
            RoutePath::from_content_path("about.md").unwrap().as_str(),
            "/about"
        );
        assert_eq!(
            RoutePath::from_content_path("blog/index.md")
                .unwrap()
                .as_str(),
            "/blog"
        );
        assert_eq!(
            RoutePath::from_content_path("blog/hello.md")
                .unwrap()
                .as_str(),
            "/blog/hello"
        );
        assert_eq!(
            RoutePath::from_content_path("./notes/rust/traits.md")
                .unwrap()
                .as_str(),
            "/notes/rust/traits"
        );
    }

    #[test]
    fn test_content_path_rejects_escape() {
        // Arrange & Act
        let result = RoutePath::from_content_path("../secret.md");

        // Assert
        assert!(result.is_err(), "Parent components should be rejected");
        assert!(RoutePath::from_content_path("/etc/passwd.md").is_err());
    }

    #[test]
    fn test_new_normalizes_slashes() {
        assert_eq!(RoutePath::new("/").as_str(), "/");
        assert_eq!(RoutePath::new("about").as_str(), "/about");
        assert_eq!(RoutePath::new("/blog/").as_str(), "/blog");
        assert_eq!(RoutePath::new("//a//b").as_str(), "/a/b");
        assert_eq!(RoutePath::root(), RoutePath::new(""));
    }

    #[test]
    fn test_depth() {
        assert_eq!(RoutePath::root().depth(), 0);
        assert_eq!(RoutePath::new("/about").depth(), 1);
        assert_eq!(RoutePath::new("/blog/hello").depth(), 2);
    }

    #[test]
    fn test_output_file() {
        assert_eq!(RoutePath::root().output_file(), PathBuf::from("index.html"));
        assert_eq!(
            RoutePath::new("/about").output_file(),
            PathBuf::from("about/index.html")
        );
        assert_eq!(
            RoutePath::new("/blog/hello").output_file(),
            PathBuf::from("blog/hello/index.html")
        );
    }

    #[test]
    fn test_root_prefix() {
        assert_eq!(RoutePath::root().root_prefix(), "");
        assert_eq!(RoutePath::new("/about").root_prefix(), "../");
        assert_eq!(RoutePath::new("/blog/hello").root_prefix(), "../../");
    }

    #[test]
    fn test_display_matches_as_str() {
        // Arrange
        let route = RoutePath::new("/projects");

        // Act & Assert
        assert_eq!(route.to_string(), "/projects");
        assert!(!route.is_root());
        assert!(RoutePath::root().is_root());
    }
}
