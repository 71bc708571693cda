//! Section container component

use maud::{Markup, html};

/// Classes for the centred column every page sits in.
pub const SECTION_CLASS: &str = "mx-auto max-w-3xl px-4 sm:px-6 xl:max-w-5xl xl:px-0";

/// Wraps content in the site's centred max width column
pub fn section_container(body: Markup) -> Markup {
    html! {
        div class=(SECTION_CLASS) { (body) }
    }
}
