//! Link component

use maud::{Markup, html};

/// Kind of link target, decided from the href prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Site route starting with `/`
    Internal,
    /// In-page fragment starting with `#`
    Anchor,
    /// Anything else, opened in a new tab
    External,
}

impl LinkKind {
    pub fn of(href: &str) -> Self {
        if href.starts_with('/') {
            LinkKind::Internal
        } else if href.starts_with('#') {
            LinkKind::Anchor
        } else {
            LinkKind::External
        }
    }
}

/// Renders anchor element for any href
///
/// Internal and anchor links render as plain anchors. External links open in
/// a new tab without leaking the opener.
///
/// # Arguments
///
/// * `href`: Target route, fragment or URL
/// * `class`: CSS classes for the anchor
/// * `body`: Link content
///
/// # Returns
///
/// Anchor markup
pub fn link(href: &str, class: &str, body: Markup) -> Markup {
    render(href, class, None, body)
}

/// Renders anchor element with an accessible label
///
/// Same as [`link`], used where the visible content does not describe the
/// target on its own.
pub fn link_labelled(href: &str, class: &str, aria_label: &str, body: Markup) -> Markup {
    render(href, class, Some(aria_label), body)
}

fn render(href: &str, class: &str, aria_label: Option<&str>, body: Markup) -> Markup {
    let class = (!class.is_empty()).then_some(class);

    html! {
        @if LinkKind::of(href) == LinkKind::External {
            a href=(href) class=[class] aria-label=[aria_label]
                target="_blank" rel="noopener noreferrer" { (body) }
        } @else {
            a href=(href) class=[class] aria-label=[aria_label] { (body) }
        }
    }
}
