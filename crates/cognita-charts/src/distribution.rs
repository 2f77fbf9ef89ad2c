use serde::{Deserialize, Serialize};
use ts_rs::TS;

use cognita_levels::{classify, Level};

/// How many scores fall in each band, lowest band first.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BandDistribution {
    pub counts: Vec<BandCount>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BandCount {
    pub level: Level,
    pub label: String,
    pub count: usize,
}

impl BandDistribution {
    /// Bucket already-coerced scores into bands. Missing scores count
    /// toward the lowest band, per the fallback policy.
    pub fn from_scores(scores: &[Option<f64>]) -> Self {
        let classified: Vec<Level> = scores.iter().map(|s| classify(*s)).collect();
        let counts = Level::ALL
            .iter()
            .map(|level| BandCount {
                level: *level,
                label: level.label().to_string(),
                count: classified.iter().filter(|c| *c == level).count(),
            })
            .collect();
        Self {
            counts,
            total: scores.len(),
        }
    }
}
