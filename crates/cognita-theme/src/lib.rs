//! cognita-theme
//!
//! Color model for dashboard rendering: tagged color specs decided once at
//! the parse boundary, alpha compositing, and palette resolution. Every
//! function here is total — this code runs inline during render, so
//! malformed input degrades instead of erroring.

pub mod color;
pub mod contrast;
pub mod palette;

pub use color::ColorSpec;
pub use contrast::{readable_text_color, TextTone};
pub use palette::{Palette, Resolved, Rgb, ThemeToken};
