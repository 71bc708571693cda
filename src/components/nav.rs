//! Header navigation component

use maud::{Markup, html};

use super::link::link;
use crate::site::NavLink;

/// Classes applied to every desktop header link.
pub const NAV_LINK_CLASS: &str = "p-1 font-medium text-gray-900 sm:p-4 dark:text-gray-100 \
                                  hover:dark:text-primary-color-dark hover:text-primary-color";

/// Renders desktop header navigation
///
/// One link per entry, labelled with its title and pointing at its href,
/// in list order. Hidden below the `sm` breakpoint where the mobile menu
/// takes over.
///
/// # Arguments
///
/// * `nav_links`: Header navigation entries
///
/// # Returns
///
/// Navigation markup, an empty container for an empty list
pub fn header_nav(nav_links: &[NavLink]) -> Markup {
    html! {
        div class="hidden sm:block" {
            @for nav_link in nav_links {
                (link(nav_link.href(), NAV_LINK_CLASS, html! { (nav_link.title()) }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_nav_renders_each_link() {
        // Arrange
        let links = vec![
            NavLink::new("Blog", "/blog"),
            NavLink::new("GitHub", "https://github.com/someone"),
        ];

        // Act
        let html = header_nav(&links).into_string();

        // Assert
        assert_eq!(html.matches("<a ").count(), 2);
        assert!(html.contains(">Blog</a>"));
        assert!(html.contains(r#"href="https://github.com/someone""#));
        assert!(
            html.contains(r#"target="_blank""#),
            "External entries open in new tab"
        );
    }

    #[test]
    fn test_header_nav_empty() {
        // Arrange & Act
        let html = header_nav(&[]).into_string();

        // Assert
        assert_eq!(html, r#"<div class="hidden sm:block"></div>"#);
    }

    #[test]
    fn test_header_nav_link_class() {
        // Arrange
        let links = vec![NavLink::new("Blog", "/blog")];

        // Act
        let html = header_nav(&links).into_string();

        // Assert
        let expected = format!(r#"<a href="/blog" class="{}">Blog</a>"#, NAV_LINK_CLASS);
        assert!(html.contains(&expected), "Got: {}", html);
        assert!(html.contains(r#"class="p-1 font-medium text-gray-900 sm:p-4 dark:text-gray-100 hover:dark:text-primary-color-dark hover:text-primary-color""#));
    }
}
