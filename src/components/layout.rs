//! Page layout components
//!
//! [`layout_wrapper`] renders the chrome shared by every page: the header
//! with the prompt style route title and navigation, the main region holding
//! the page content and the footer. [`page_wrapper`] turns the result into a
//! complete HTML document.

use maud::{DOCTYPE, Markup, html};

use super::footer::footer;
use super::link::link_labelled;
use super::mobile_nav::mobile_nav;
use super::nav::header_nav;
use super::section::section_container;
use super::theme::{theme_init_script, theme_switch};
use super::typewriter::{TypewriterOptions, typewriter};
use crate::route::RoutePath;
use crate::site::{NavLink, SiteMeta};

/// Character shown before the route path in the header title.
pub const PROMPT_MARKER: char = '~';

/// Returns the header title for a route, e.g. `~/blog`
pub fn prompt_label(route: &RoutePath) -> String {
    format!("{}{}", PROMPT_MARKER, route)
}

/// Wraps page content with the shared site chrome
///
/// Pure function of its inputs: the route and navigation list are passed in
/// rather than read from global state, so rendering the same inputs twice
/// yields identical markup. The children are placed in the main region
/// untouched.
///
/// # Arguments
///
/// * `site`: Site metadata for the home link label, typewriter and footer
/// * `route`: Current page route, displayed after the prompt marker
/// * `nav_links`: Header navigation entries, rendered in order
/// * `children`: Page content
///
/// # Returns
///
/// Layout markup ready for [`page_wrapper`]
pub fn layout_wrapper(
    site: &SiteMeta,
    route: &RoutePath,
    nav_links: &[NavLink],
    children: Markup,
) -> Markup {
    section_container(html! {
        div class="flex flex-col justify-between h-screen" {
            header class="flex items-center justify-between py-6" {
                div {
                    (link_labelled("/", "", &site.title, html! {
                        div class="flex items-center justify-between text-xl font-semibold text-primary-color dark:text-primary-color-dark" {
                            span class="route-prompt" { (prompt_label(route)) }
                            " "
                            (typewriter(&site.typewriter_strings, TypewriterOptions::default()))
                        }
                    }))
                }
                div class="flex items-center text-base leading-5" {
                    (header_nav(nav_links))
                    (theme_switch())
                    (mobile_nav(nav_links))
                }
            }
            main class="relative mb-auto" { (children) }
            (footer(site))
        }
    })
}

/// Wraps page markup with standard HTML document structure
///
/// Provides DOCTYPE, head with charset, viewport, title and the bundled
/// stylesheets and scripts. Asset paths are relative so the generated site
/// works from any base path.
///
/// # Arguments
///
/// * `title`: Document title
/// * `root_prefix`: Relative prefix from the page back to the site root
/// * `description`: Optional meta description
/// * `body`: Body markup, normally produced by [`layout_wrapper`]
///
/// # Returns
///
/// Complete HTML document
pub fn page_wrapper(
    title: &str,
    root_prefix: &str,
    description: Option<&str>,
    body: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                @if let Some(description) = description {
                    meta name="description" content=(description);
                }
                title { (title) }
                (theme_init_script())
                link rel="stylesheet" href=(format!("{}assets/site.css", root_prefix));
                link rel="stylesheet" href=(format!("{}assets/markdown.css", root_prefix));
                script src=(format!("{}assets/theme.js", root_prefix)) defer {}
                script src=(format!("{}assets/mobile-nav.js", root_prefix)) defer {}
                script src=(format!("{}assets/typewriter.js", root_prefix)) defer {}
            }
            body class="bg-white text-black antialiased dark:bg-gray-900 dark:text-white" {
                (body)
            }
        }
    }
}
