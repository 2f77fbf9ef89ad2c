use serde::{Deserialize, Serialize};
use tracing::warn;
use ts_rs::TS;

use crate::color::{hex_channels, ColorSpec};
use crate::contrast::{readable_text_color, TextTone};

/// Symbolic palette slots. The product swaps palettes at runtime
/// (light/dark mode), so slots stay symbolic until resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ThemeToken {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
    Neutral,
}

/// Concrete 0–255 color channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn text_tone(&self) -> TextTone {
        readable_text_color(self.r, self.g, self.b)
    }

    /// Full-opacity CSS encoding.
    pub fn to_css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// The running theme, injected into every resolution call.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Palette {
    pub very_low: Rgb,
    pub low: Rgb,
    pub medium: Rgb,
    pub high: Rgb,
    pub very_high: Rgb,
    /// Fallback slot for unknown tokens and unresolvable specs.
    pub neutral: Rgb,
    /// Text tone over light backgrounds.
    pub text_dark: Rgb,
    /// Text tone over dark or saturated backgrounds.
    pub text_light: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            very_low: Rgb::new(198, 40, 40),    // #c62828
            low: Rgb::new(239, 108, 0),         // #ef6c00
            medium: Rgb::new(249, 168, 37),     // #f9a825
            high: Rgb::new(102, 187, 106),      // #66bb6a
            very_high: Rgb::new(46, 125, 50),   // #2e7d32
            neutral: Rgb::new(158, 158, 158),   // #9e9e9e
            text_dark: Rgb::new(33, 33, 33),    // #212121
            text_light: Rgb::new(250, 250, 250), // #fafafa
        }
    }
}

impl Palette {
    pub fn color(&self, token: ThemeToken) -> Rgb {
        match token {
            ThemeToken::VeryLow => self.very_low,
            ThemeToken::Low => self.low,
            ThemeToken::Medium => self.medium,
            ThemeToken::High => self.high,
            ThemeToken::VeryHigh => self.very_high,
            ThemeToken::Neutral => self.neutral,
        }
    }

    pub fn text_color(&self, tone: TextTone) -> Rgb {
        match tone {
            TextTone::Dark => self.text_dark,
            TextTone::Light => self.text_light,
        }
    }

    /// Resolve any spec to concrete channels plus alpha. Total: raw
    /// passthrough and malformed hex degrade to the neutral slot.
    pub fn resolve(&self, spec: &ColorSpec) -> Resolved {
        match spec {
            ColorSpec::Hex { value } => match hex_channels(value) {
                Some((r, g, b)) => Resolved { r, g, b, a: 1.0 },
                None => {
                    warn!(value = %value, "unresolvable hex literal, using neutral slot");
                    self.neutral_resolved()
                }
            },
            ColorSpec::Rgb { r, g, b } => Resolved {
                r: *r,
                g: *g,
                b: *b,
                a: 1.0,
            },
            ColorSpec::Rgba { r, g, b, a } => Resolved {
                r: *r,
                g: *g,
                b: *b,
                a: a.clamp(0.0, 1.0),
            },
            ColorSpec::Token { token } => {
                let rgb = self.color(*token);
                Resolved {
                    r: rgb.r,
                    g: rgb.g,
                    b: rgb.b,
                    a: 1.0,
                }
            }
            ColorSpec::TokenAlpha { token, alpha } => {
                let rgb = self.color(*token);
                Resolved {
                    r: rgb.r,
                    g: rgb.g,
                    b: rgb.b,
                    a: alpha.clamp(0.0, 1.0),
                }
            }
            ColorSpec::Raw { value } => {
                warn!(value = %value, "raw color cannot be resolved, using neutral slot");
                self.neutral_resolved()
            }
        }
    }

    fn neutral_resolved(&self) -> Resolved {
        Resolved {
            r: self.neutral.r,
            g: self.neutral.g,
            b: self.neutral.b,
            a: 1.0,
        }
    }
}

/// A fully resolved render color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Resolved {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Resolved {
    /// CSS encoding: `#rrggbb` at full opacity, `rgba(...)` otherwise.
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }

    pub fn text_tone(&self) -> TextTone {
        readable_text_color(self.r, self.g, self.b)
    }
}
