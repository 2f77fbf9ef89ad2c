//! cognita-levels
//!
//! T-score → qualitative band classification and each band's display
//! vocabulary (label, palette slot). Pure functions over static tables;
//! safe to call from any render pass.

pub mod classify;
pub mod level;

pub use classify::{classify, classify_raw};
pub use level::{label_for, token_for, Level};
