//! Theme switch component

use maud::{Markup, PreEscaped, html};

use super::icons::{Icon, icon};

/// Accessible label of the theme toggle button.
pub const THEME_SWITCH_LABEL: &str = "Toggle Dark Mode";

/// `localStorage` key holding the chosen theme.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Renders the dark mode toggle button
///
/// Both icons are rendered; the stylesheet shows the moon in light mode and
/// the sun in dark mode. `theme.js` wires the click handler.
pub fn theme_switch() -> Markup {
    html! {
        button type="button" class="theme-switch ml-1 mr-1 h-8 w-8 rounded p-1 sm:ml-4"
            aria-label=(THEME_SWITCH_LABEL) data-theme-toggle {
            span class="theme-icon-dark" { (icon(Icon::Moon)) }
            span class="theme-icon-light" { (icon(Icon::Sun)) }
        }
    }
}

/// Inline script applying the stored or system theme before first paint
///
/// Must run in `<head>` so pages never flash the wrong theme.
pub fn theme_init_script() -> Markup {
    let script = format!(
        "(function(){{try{{var t=localStorage.getItem('{key}');\
         if(t==='dark'||(!t&&window.matchMedia('(prefers-color-scheme: dark)').matches))\
         {{document.documentElement.classList.add('dark');}}}}catch(e){{}}}})();",
        key = THEME_STORAGE_KEY
    );

    html! {
        script { (PreEscaped(script)) }
    }
}
