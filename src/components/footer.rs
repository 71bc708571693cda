//! Site footer component

use maud::{Markup, html};

use super::link::link;
use crate::site::SiteMeta;

/// Renders the page footer
///
/// Shows author, copyright year and site title separated by bullets. Missing
/// author or year are skipped together with their separator.
///
/// # Arguments
///
/// * `site`: Site metadata
///
/// # Returns
///
/// Footer markup
pub fn footer(site: &SiteMeta) -> Markup {
    html! {
        footer class="site-footer" {
            div class="mt-16 mb-8 flex flex-col items-center" {
                div class="mb-2 flex space-x-2 text-sm text-gray-500 dark:text-gray-400" {
                    @if let Some(author) = &site.author {
                        div { (author) }
                        div { " • " }
                    }
                    @if let Some(year) = site.copyright_year {
                        div { "© " (year) }
                        div { " • " }
                    }
                    (link("/", "", html! { (site.title) }))
                }
            }
        }
    }
}
