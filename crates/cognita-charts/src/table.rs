use serde::{Deserialize, Serialize};
use tracing::warn;
use ts_rs::TS;

use cognita_battery::Battery;
use cognita_core::score::coerce_score;
use cognita_levels::{classify, Level};
use cognita_theme::{ColorSpec, Palette};

const BADGE_BACKGROUND_ALPHA: f64 = 0.2;
const BADGE_BORDER_ALPHA: f64 = 0.6;

/// CSS attributes for a level badge.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BadgeAttrs {
    pub background: String,
    pub border: String,
    pub text: String,
}

impl BadgeAttrs {
    /// Badge styling for a band: translucent fill, stronger border, and the
    /// text tone that stays readable over the band's solid color.
    pub fn for_level(level: Level, palette: &Palette) -> Self {
        let base = ColorSpec::from(level.token());
        let tone = palette.color(level.token()).text_tone();
        Self {
            background: palette
                .resolve(&base.with_alpha(BADGE_BACKGROUND_ALPHA))
                .to_css(),
            border: palette.resolve(&base.with_alpha(BADGE_BORDER_ALPHA)).to_css(),
            text: palette.text_color(tone).to_css(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MetricRow {
    pub indicator_id: String,
    pub indicator_name: String,
    pub score: Option<f64>,
    pub missing: bool,
    pub level: Level,
    pub label: String,
    pub badge: BadgeAttrs,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MetricGroup {
    pub domain_id: String,
    pub domain_name: String,
    pub rows: Vec<MetricRow>,
}

/// One row per indicator in battery order, with render attributes resolved
/// against the injected palette. Total: a payload that is not a JSON object
/// renders as all rows missing.
pub fn grouped_metric_table(
    battery: &dyn Battery,
    scores: &serde_json::Value,
    palette: &Palette,
) -> Vec<MetricGroup> {
    let map = scores.as_object();
    if map.is_none() {
        warn!(battery = %battery.id(), "scores payload is not an object, rendering all rows as missing");
    }

    battery
        .domains()
        .iter()
        .map(|domain| MetricGroup {
            domain_id: domain.id.clone(),
            domain_name: domain.name.clone(),
            rows: domain
                .indicators
                .iter()
                .map(|indicator| {
                    let score = map.and_then(|m| m.get(&indicator.id)).and_then(coerce_score);
                    let level = classify(score);
                    MetricRow {
                        indicator_id: indicator.id.clone(),
                        indicator_name: indicator.name.clone(),
                        score,
                        missing: score.is_none(),
                        level,
                        label: level.label().to_string(),
                        badge: BadgeAttrs::for_level(level, palette),
                    }
                })
                .collect(),
        })
        .collect()
}
