use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use cognita_theme::ThemeToken;

/// Qualitative T-score band, lowest to highest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Level {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

/// Placeholder label for keys no band claims.
pub const UNKNOWN_LABEL: &str = "—";

impl Level {
    /// All bands, lowest first.
    pub const ALL: [Level; 5] = [
        Level::VeryLow,
        Level::Low,
        Level::Medium,
        Level::High,
        Level::VeryHigh,
    ];

    /// Stable programmatic key, matching the serde encoding.
    pub fn as_key(&self) -> &'static str {
        match self {
            Level::VeryLow => "very_low",
            Level::Low => "low",
            Level::Medium => "medium",
            Level::High => "high",
            Level::VeryHigh => "very_high",
        }
    }

    pub fn from_key(key: &str) -> Option<Level> {
        match key {
            "very_low" => Some(Level::VeryLow),
            "low" => Some(Level::Low),
            "medium" => Some(Level::Medium),
            "high" => Some(Level::High),
            "very_high" => Some(Level::VeryHigh),
            _ => None,
        }
    }

    /// Display label shown on badges and cards.
    pub fn label(&self) -> &'static str {
        match self {
            Level::VeryLow => "MUY BAJO",
            Level::Low => "BAJO",
            Level::Medium => "MEDIO",
            Level::High => "ALTO",
            Level::VeryHigh => "MUY ALTO",
        }
    }

    /// Palette slot for this band.
    pub fn token(&self) -> ThemeToken {
        match self {
            Level::VeryLow => ThemeToken::VeryLow,
            Level::Low => ThemeToken::Low,
            Level::Medium => ThemeToken::Medium,
            Level::High => ThemeToken::High,
            Level::VeryHigh => ThemeToken::VeryHigh,
        }
    }
}

/// Label for a band key. Unknown keys get the placeholder, never an error.
pub fn label_for(key: &str) -> &'static str {
    match Level::from_key(key) {
        Some(level) => level.label(),
        None => {
            debug!(key = %key, "unknown level key, using placeholder label");
            UNKNOWN_LABEL
        }
    }
}

/// Palette slot for a band key. Unknown keys fall back to the neutral slot.
pub fn token_for(key: &str) -> ThemeToken {
    match Level::from_key(key) {
        Some(level) => level.token(),
        None => {
            debug!(key = %key, "unknown level key, using neutral slot");
            ThemeToken::Neutral
        }
    }
}
