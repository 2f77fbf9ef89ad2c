use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ts_rs::TS;

use crate::palette::ThemeToken;

/// A color as it enters the system, decided once at the parse boundary.
///
/// Downstream code switches on this closed set of variants; nothing
/// re-parses strings during render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum ColorSpec {
    /// Literal hex as entered: `#abc` or `#aabbcc`, any case.
    Hex { value: String },
    Rgb { r: u8, g: u8, b: u8 },
    Rgba { r: u8, g: u8, b: u8, a: f64 },
    /// Symbolic slot, resolved against the running palette.
    Token { token: ThemeToken },
    /// Deferred alpha blend of a symbolic slot, resolved the same way.
    TokenAlpha { token: ThemeToken, alpha: f64 },
    /// Unrecognized input, carried through unchanged.
    Raw { value: String },
}

impl From<ThemeToken> for ColorSpec {
    fn from(token: ThemeToken) -> Self {
        ColorSpec::Token { token }
    }
}

impl ColorSpec {
    /// Classify a raw color string into a spec. Accepts `#abc` / `#aabbcc`
    /// hex, `rgb(r, g, b)`, `rgba(r, g, b, a)`, and bare `r g b` triples;
    /// anything else becomes [`ColorSpec::Raw`], unchanged.
    pub fn parse(input: &str) -> ColorSpec {
        let trimmed = input.trim();

        if trimmed.starts_with('#') {
            if hex_channels(trimmed).is_some() {
                return ColorSpec::Hex {
                    value: trimmed.to_string(),
                };
            }
            debug!(input = %input, "unrecognized hex literal, keeping raw");
            return ColorSpec::Raw {
                value: input.to_string(),
            };
        }

        let lower = trimmed.to_ascii_lowercase();
        if let Some(body) = lower.strip_prefix("rgba(").and_then(|r| r.strip_suffix(')'))
            && let Some(spec) = parse_rgba_body(body)
        {
            return spec;
        }
        if let Some(body) = lower.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')'))
            && let Some(spec) = parse_rgb_body(body)
        {
            return spec;
        }
        if let Some((r, g, b)) = parse_bare_triple(trimmed) {
            return ColorSpec::Rgb { r, g, b };
        }

        debug!(input = %input, "unrecognized color literal, keeping raw");
        ColorSpec::Raw {
            value: input.to_string(),
        }
    }

    /// Derive an alpha-blended variant, leaving the channels unchanged.
    ///
    /// Literal variants decompose to channels and re-encode as `Rgba`;
    /// symbolic slots become deferred blends. Repeated application replaces
    /// the alpha. Malformed hex and raw passthrough come back unchanged;
    /// this runs inline during render and must never fail.
    pub fn with_alpha(&self, alpha: f64) -> ColorSpec {
        let alpha = clamp_alpha(alpha);
        match self {
            ColorSpec::Hex { value } => match hex_channels(value) {
                Some((r, g, b)) => ColorSpec::Rgba { r, g, b, a: alpha },
                None => {
                    warn!(value = %value, "cannot blend malformed hex, returning unchanged");
                    self.clone()
                }
            },
            ColorSpec::Rgb { r, g, b } => ColorSpec::Rgba {
                r: *r,
                g: *g,
                b: *b,
                a: alpha,
            },
            ColorSpec::Rgba { r, g, b, .. } => ColorSpec::Rgba {
                r: *r,
                g: *g,
                b: *b,
                a: alpha,
            },
            ColorSpec::Token { token } => ColorSpec::TokenAlpha {
                token: *token,
                alpha,
            },
            ColorSpec::TokenAlpha { token, .. } => ColorSpec::TokenAlpha {
                token: *token,
                alpha,
            },
            ColorSpec::Raw { value } => {
                warn!(value = %value, "cannot blend raw color, returning unchanged");
                self.clone()
            }
        }
    }
}

/// Decompose a `#`-prefixed hex literal into channels, expanding 3-digit
/// shorthand first. Case-insensitive.
pub(crate) fn hex_channels(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => return None,
    };
    let r = u8::from_str_radix(&expanded[0..2], 16).ok()?;
    let g = u8::from_str_radix(&expanded[2..4], 16).ok()?;
    let b = u8::from_str_radix(&expanded[4..6], 16).ok()?;
    Some((r, g, b))
}

fn clamp_alpha(alpha: f64) -> f64 {
    if alpha.is_finite() {
        alpha.clamp(0.0, 1.0)
    } else {
        1.0
    }
}

fn parse_channel(part: &str) -> Option<u8> {
    part.trim().parse::<u8>().ok()
}

fn parse_rgb_body(body: &str) -> Option<ColorSpec> {
    let parts: Vec<&str> = body.split(',').collect();
    if parts.len() != 3 {
        return None;
    }
    Some(ColorSpec::Rgb {
        r: parse_channel(parts[0])?,
        g: parse_channel(parts[1])?,
        b: parse_channel(parts[2])?,
    })
}

fn parse_rgba_body(body: &str) -> Option<ColorSpec> {
    let parts: Vec<&str> = body.split(',').collect();
    if parts.len() != 4 {
        return None;
    }
    let a = parts[3].trim().parse::<f64>().ok().filter(|a| a.is_finite())?;
    Some(ColorSpec::Rgba {
        r: parse_channel(parts[0])?,
        g: parse_channel(parts[1])?,
        b: parse_channel(parts[2])?,
        a: a.clamp(0.0, 1.0),
    })
}

fn parse_bare_triple(input: &str) -> Option<(u8, u8, u8)> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.len() != 3 {
        return None;
    }
    Some((
        parse_channel(parts[0])?,
        parse_channel(parts[1])?,
        parse_channel(parts[2])?,
    ))
}
