//! cognita-battery
//!
//! Cognitive metric battery definitions. Pure data — no HTTP or storage
//! dependency. Defines the domains, indicators, and scoring rules for each
//! battery the product administers.

pub mod batteries;
pub mod error;
pub mod scoring;

use cognita_core::models::evaluation::Evaluation;
use cognita_core::score::coerce_score;

use error::BatteryError;
use scoring::{Indicator, MetricDomain, ScoreEntry, ValidationError};

/// Trait implemented by each cognitive battery.
pub trait Battery: Send + Sync + std::fmt::Debug {
    /// Unique identifier (e.g., "cognitive_profile").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "Perfil Cognitivo").
    fn name(&self) -> &str;

    /// The domains and indicators this battery measures.
    fn domains(&self) -> &[MetricDomain];

    /// Find an indicator by id across all domains.
    fn find_indicator(&self, indicator_id: &str) -> Option<&Indicator> {
        self.domains()
            .iter()
            .flat_map(|d| &d.indicators)
            .find(|i| i.id == indicator_id)
    }

    /// Find an indicator by id, erroring on ids this battery does not measure.
    fn require_indicator(&self, indicator_id: &str) -> Result<&Indicator, BatteryError> {
        self.find_indicator(indicator_id)
            .ok_or_else(|| BatteryError::UnknownIndicator {
                battery_id: self.id().to_string(),
                indicator_id: indicator_id.to_string(),
            })
    }

    /// Validate score entries against this battery's ranges.
    ///
    /// Entries whose id no indicator claims are skipped: converted payloads
    /// routinely carry foreign keys, and those are a presentation concern,
    /// not a validation failure.
    fn validate_scores(&self, scores: &[ScoreEntry]) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for entry in scores {
            if let Some(indicator) = self.find_indicator(&entry.indicator_id)
                && !indicator.range.contains(entry.value)
            {
                errors.push(ValidationError {
                    indicator_id: entry.indicator_id.clone(),
                    value: entry.value,
                    expected_range: indicator.range,
                    score_type: indicator.score_type,
                    message: format!(
                        "{}: score {} for {} is outside range [{}, {}]",
                        self.name(),
                        entry.value,
                        indicator.name,
                        indicator.range.min,
                        indicator.range.max,
                    ),
                });
            }
        }
        errors
    }

    /// Validate an evaluation's raw score payload.
    ///
    /// Values that do not coerce to a number are not validation failures;
    /// the presentation layer renders them under the band fallback policy.
    fn validate_evaluation(
        &self,
        evaluation: &Evaluation,
    ) -> Result<Vec<ValidationError>, BatteryError> {
        let map = evaluation.scores_map()?;
        let entries: Vec<ScoreEntry> = map
            .iter()
            .filter_map(|(id, raw)| {
                coerce_score(raw).map(|value| ScoreEntry {
                    indicator_id: id.clone(),
                    value,
                })
            })
            .collect();
        Ok(self.validate_scores(&entries))
    }

    /// Format scores as structured text for the report generation backend.
    fn to_report_input(&self, scores: &[ScoreEntry]) -> String {
        let mut output = format!("## {}\n\n", self.name());
        for domain in self.domains() {
            let lines: Vec<String> = domain
                .indicators
                .iter()
                .filter_map(|indicator| {
                    scores
                        .iter()
                        .find(|e| e.indicator_id == indicator.id)
                        .map(|entry| format!("- {}: {}\n", indicator.name, entry.value))
                })
                .collect();
            if lines.is_empty() {
                continue;
            }
            output.push_str(&format!("### {}\n", domain.name));
            for line in lines {
                output.push_str(&line);
            }
            output.push('\n');
        }
        output
    }
}

/// Return all registered batteries.
pub fn all_batteries() -> Vec<Box<dyn Battery>> {
    vec![
        Box::new(batteries::cognitive_profile::CognitiveProfile),
        Box::new(batteries::eeg::EegIndicators),
    ]
}

/// Look up a battery by ID.
pub fn get_battery(id: &str) -> Option<Box<dyn Battery>> {
    all_batteries().into_iter().find(|b| b.id() == id)
}

/// Look up a battery by ID, erroring on unknown ids.
pub fn require_battery(id: &str) -> Result<Box<dyn Battery>, BatteryError> {
    get_battery(id).ok_or_else(|| BatteryError::UnknownBattery(id.to_string()))
}
