//! Formatting and escaping utilities

pub mod helpers;
pub mod html;

pub use helpers::*;
pub use html::*;
