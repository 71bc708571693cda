//! Reusable HTML components for the page chrome
//!
//! This module provides the Maud components composed by the layout wrapper:
//! links, the section container, theme and menu controls, the decorative
//! typewriter and the footer. Each component is a pure function returning
//! markup so pages can be rendered and tested without a browser.

pub mod footer;
pub mod icons;
pub mod layout;
pub mod link;
pub mod mobile_nav;
pub mod nav;
pub mod section;
pub mod theme;
pub mod typewriter;
