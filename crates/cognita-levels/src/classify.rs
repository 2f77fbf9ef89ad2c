use tracing::debug;

use crate::level::Level;

/// Band cut points on the 20–80 T-score scale. Dashboard visual thresholds
/// key off these exact values; do not re-derive them downstream.
pub const LOW_MIN: f64 = 31.0;
pub const MEDIUM_MIN: f64 = 41.0;
pub const HIGH_MIN: f64 = 60.0;
pub const VERY_HIGH_MIN: f64 = 70.0;
pub const SCALE_MAX: f64 = 80.0;

/// Classify a T-score into its band.
///
/// Total: a missing or non-finite score, or one outside the band table
/// (below 31 or above 80), collapses to the lowest band. Fractional scores
/// between the named integer ranges belong to the band below the next cut.
pub fn classify(score: Option<f64>) -> Level {
    let Some(score) = score.filter(|s| s.is_finite()) else {
        debug!("missing or non-finite score, classifying very_low");
        return Level::VeryLow;
    };

    if (VERY_HIGH_MIN..=SCALE_MAX).contains(&score) {
        Level::VeryHigh
    } else if (HIGH_MIN..VERY_HIGH_MIN).contains(&score) {
        Level::High
    } else if (MEDIUM_MIN..HIGH_MIN).contains(&score) {
        Level::Medium
    } else if (LOW_MIN..MEDIUM_MIN).contains(&score) {
        Level::Low
    } else {
        Level::VeryLow
    }
}

/// Classify a raw JSON score value, coercing it first.
pub fn classify_raw(raw: &serde_json::Value) -> Level {
    classify(cognita_core::score::coerce_score(raw))
}
