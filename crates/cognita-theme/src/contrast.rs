use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Which of the palette's two fixed text tones stays readable over a
/// filled background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TextTone {
    Dark,
    Light,
}

/// Luminance above this gets dark text; at or below it, light text.
pub const LUMINANCE_THRESHOLD: f64 = 0.55;

/// Perceived luminance of an RGB triple, normalized to 0–1.
/// Standard luma weights: 0.299 R + 0.587 G + 0.114 B.
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)) / 255.0
}

/// Pick the text tone for a background filled with this color.
pub fn readable_text_color(r: u8, g: u8, b: u8) -> TextTone {
    if luminance(r, g, b) > LUMINANCE_THRESHOLD {
        TextTone::Dark
    } else {
        TextTone::Light
    }
}
