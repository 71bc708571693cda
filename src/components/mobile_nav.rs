//! Mobile navigation menu component

use maud::{Markup, html};

use super::icons::{Icon, icon};
use super::link::link;
use crate::site::NavLink;

/// Accessible label of the menu trigger.
pub const MOBILE_NAV_LABEL: &str = "Toggle Menu";

/// Accessible label of the close button inside the open menu.
pub const MOBILE_NAV_CLOSE_LABEL: &str = "Close Menu";

/// Renders the small screen menu trigger and its overlay panel
///
/// The panel starts hidden and slides in when `mobile-nav.js` toggles the
/// `mobile-nav-open` class on the wrapper. Links mirror the desktop header
/// navigation in list order.
///
/// # Arguments
///
/// * `nav_links`: Header navigation entries
///
/// # Returns
///
/// Menu markup, hidden on `sm` screens and wider
pub fn mobile_nav(nav_links: &[NavLink]) -> Markup {
    html! {
        div class="mobile-nav sm:hidden" data-mobile-nav {
            button type="button" class="ml-1 mr-1 h-8 w-8 rounded py-1"
                aria-label=(MOBILE_NAV_LABEL) aria-expanded="false" data-mobile-nav-toggle {
                (icon(Icon::Menu))
            }
            div class="mobile-nav-panel fixed top-0 left-0 z-10 h-full w-full bg-gray-200 opacity-95 dark:bg-gray-800"
                data-mobile-nav-panel hidden {
                div class="flex justify-end" {
                    button type="button" class="mr-5 mt-11 h-8 w-8 rounded"
                        aria-label=(MOBILE_NAV_CLOSE_LABEL) data-mobile-nav-toggle {
                        (icon(Icon::Close))
                    }
                }
                nav class="fixed mt-8 h-full" {
                    @for nav_link in nav_links {
                        div class="px-12 py-4" {
                            (link(
                                nav_link.href(),
                                "mobile-nav-link text-2xl font-bold tracking-widest text-gray-900 dark:text-gray-100",
                                html! { (nav_link.title()) },
                            ))
                        }
                    }
                }
            }
        }
    }
}
