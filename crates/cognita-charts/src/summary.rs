use serde::{Deserialize, Serialize};
use ts_rs::TS;

use cognita_battery::Battery;
use cognita_core::score::coerce_score;
use cognita_levels::{classify, Level};

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DomainSummary {
    pub domain_id: String,
    pub domain_name: String,
    /// Mean of the indicator scores present in the payload. None when the
    /// domain has no usable score.
    pub mean_score: Option<f64>,
    pub level: Level,
    pub label: String,
}

/// Per-domain composite: the mean of present indicator scores, classified
/// like any other T-score. Domains with nothing usable fall to the lowest
/// band.
pub fn domain_summaries(battery: &dyn Battery, scores: &serde_json::Value) -> Vec<DomainSummary> {
    let map = scores.as_object();
    battery
        .domains()
        .iter()
        .map(|domain| {
            let present: Vec<f64> = domain
                .indicators
                .iter()
                .filter_map(|i| map.and_then(|m| m.get(&i.id)).and_then(coerce_score))
                .collect();
            let mean = if present.is_empty() {
                None
            } else {
                Some(present.iter().sum::<f64>() / present.len() as f64)
            };
            let level = classify(mean);
            DomainSummary {
                domain_id: domain.id.clone(),
                domain_name: domain.name.clone(),
                mean_score: mean,
                level,
                label: level.label().to_string(),
            }
        })
        .collect()
}
