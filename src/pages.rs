//! Page bodies rendered inside the site layout
//!
//! Each page module produces the children markup for a page type. The
//! generator wraps the result with the shared layout and document shell.

pub mod content;
pub mod not_found;
