//! Decorative typewriter animation component

use maud::{Markup, html};

/// Playback options read by `typewriter.js`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterOptions {
    pub auto_start: bool,
    pub looping: bool,
}

impl Default for TypewriterOptions {
    fn default() -> Self {
        Self {
            auto_start: true,
            looping: true,
        }
    }
}

/// Renders the typewriter placeholder
///
/// The strings are embedded as hidden spans; the script types them into the
/// wrapper one after another. With no strings only the blinking cursor shows.
///
/// # Arguments
///
/// * `strings`: Texts to type, in order
/// * `options`: Playback options
///
/// # Returns
///
/// Typewriter markup
pub fn typewriter(strings: &[String], options: TypewriterOptions) -> Markup {
    html! {
        span class="Typewriter" data-typewriter
            data-autostart=(options.auto_start.to_string())
            data-loop=(options.looping.to_string()) {
            @for text in strings {
                span class="Typewriter__string" hidden { (text) }
            }
            span class="Typewriter__wrapper" {}
            span class="Typewriter__cursor" { "|" }
        }
    }
}
