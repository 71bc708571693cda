//! Inline SVG icons for header controls

use maud::{Markup, html};

/// Icons drawn by the theme and menu controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Sun,
    Moon,
    Menu,
    Close,
}

impl Icon {
    /// SVG path data on a 20x20 view box.
    fn path(&self) -> &'static str {
        match self {
            Icon::Sun => {
                "M10 2a1 1 0 011 1v1a1 1 0 11-2 0V3a1 1 0 011-1zm4 8a4 4 0 11-8 0 4 4 0 018 0zm-.464 \
                 4.95l.707.707a1 1 0 001.414-1.414l-.707-.707a1 1 0 00-1.414 1.414zm2.12-10.607a1 1 \
                 0 010 1.414l-.706.707a1 1 0 11-1.414-1.414l.707-.707a1 1 0 011.414 0zM17 11a1 1 0 \
                 100-2h-1a1 1 0 100 2h1zm-7 4a1 1 0 011 1v1a1 1 0 11-2 0v-1a1 1 0 011-1zM5.05 \
                 6.464A1 1 0 106.465 5.05l-.708-.707a1 1 0 00-1.414 1.414l.707.707zm1.414 \
                 8.486l-.707.707a1 1 0 01-1.414-1.414l.707-.707a1 1 0 011.414 1.414zM4 11a1 1 0 \
                 100-2H3a1 1 0 000 2h1z"
            }
            Icon::Moon => "M17.293 13.293A8 8 0 016.707 2.707a8.001 8.001 0 1010.586 10.586z",
            Icon::Menu => {
                "M3 5a1 1 0 011-1h12a1 1 0 110 2H4a1 1 0 01-1-1zM3 10a1 1 0 011-1h12a1 1 0 110 \
                 2H4a1 1 0 01-1-1zM3 15a1 1 0 011-1h12a1 1 0 110 2H4a1 1 0 01-1-1z"
            }
            Icon::Close => {
                "M4.293 4.293a1 1 0 011.414 0L10 8.586l4.293-4.293a1 1 0 111.414 1.414L11.414 \
                 10l4.293 4.293a1 1 0 01-1.414 1.414L10 11.414l-4.293 4.293a1 1 0 \
                 01-1.414-1.414L8.586 10 4.293 5.707a1 1 0 010-1.414z"
            }
        }
    }

    /// Extra CSS class so scripts and styles can pick a variant.
    fn class(&self) -> &'static str {
        match self {
            Icon::Sun => "icon icon-sun",
            Icon::Moon => "icon icon-moon",
            Icon::Menu => "icon icon-menu",
            Icon::Close => "icon icon-close",
        }
    }
}

/// Renders icon as inline SVG
///
/// Icons inherit the text color through `currentColor` and are hidden from
/// assistive technology; the surrounding control carries the label.
pub fn icon(icon: Icon) -> Markup {
    html! {
        svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 20 20" fill="currentColor"
            class=(icon.class()) aria-hidden="true" {
            path fill-rule="evenodd" clip-rule="evenodd" d=(icon.path()) {}
        }
    }
}
