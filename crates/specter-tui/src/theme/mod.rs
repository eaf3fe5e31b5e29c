//! Theme module - colors and styles

pub mod palette;
pub mod styles;
