use serde::{Deserialize, Serialize};
use ts_rs::TS;

use cognita_battery::Battery;
use cognita_core::score::coerce_score;
use cognita_levels::{classify, Level};
use cognita_theme::{ColorSpec, Palette};

/// Bars never extend past this, whatever the backend sends.
pub const BAR_CAP: f64 = 100.0;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BarDatum {
    pub indicator_id: String,
    pub indicator_name: String,
    /// Bar length, clamped to [0, 100]. Classification still sees the raw
    /// score; the cap governs geometry only.
    pub value: f64,
    pub level: Level,
    pub color: String,
}

/// One bar per indicator in battery order, colored by band.
pub fn bar_series(
    battery: &dyn Battery,
    scores: &serde_json::Value,
    palette: &Palette,
) -> Vec<BarDatum> {
    let map = scores.as_object();
    battery
        .domains()
        .iter()
        .flat_map(|d| &d.indicators)
        .map(|indicator| {
            let score = map.and_then(|m| m.get(&indicator.id)).and_then(coerce_score);
            let level = classify(score);
            BarDatum {
                indicator_id: indicator.id.clone(),
                indicator_name: indicator.name.clone(),
                value: score.unwrap_or(0.0).clamp(0.0, BAR_CAP),
                level,
                color: palette.resolve(&ColorSpec::from(level.token())).to_css(),
            }
        })
        .collect()
}
