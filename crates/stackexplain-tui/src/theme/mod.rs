//! Theme system for the form.
//!
//! - `palette` - Light and dark color sets, chosen at render time
//! - `styles` - Semantic style builders over a palette

pub mod palette;
pub mod styles;

pub use palette::Palette;
