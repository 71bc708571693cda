//! Not found page

use maud::{Markup, html};

use crate::components::link::link;
use crate::route::RoutePath;

/// Route the not found page is rendered under.
pub fn route() -> RoutePath {
    RoutePath::new("/404")
}

/// Renders the not found page body
pub fn render() -> Markup {
    html! {
        div class="flex flex-col items-start justify-start md:mt-24 md:flex-row md:items-center md:justify-center md:space-x-6" {
            div class="space-x-2 pt-6 pb-8 md:space-y-5" {
                h1 class="text-6xl font-extrabold leading-9 tracking-tight text-gray-900 dark:text-gray-100 md:border-r-2 md:px-6 md:text-8xl md:leading-14" {
                    "404"
                }
            }
            div class="max-w-md" {
                p class="mb-4 text-xl font-bold leading-normal md:text-2xl" {
                    "Sorry we couldn't find this page."
                }
                p class="mb-8" {
                    "But don't worry, you can find plenty of other things on our homepage."
                }
                (link("/", "inline rounded-lg border border-transparent bg-primary-color px-4 py-2 text-sm font-medium leading-5 text-white", html! {
                    "Back to homepage"
                }))
            }
        }
    }
}
