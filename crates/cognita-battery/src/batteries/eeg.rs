use crate::scoring::{Indicator, MetricDomain, ScoreType, T_SCORE};
use crate::Battery;

/// Indicadores EEG: resting-state EEG markers from the headset session,
/// normalized onto the same 20–80 T scale as the pencil-and-paper battery.
#[derive(Debug)]
pub struct EegIndicators;

impl Battery for EegIndicators {
    fn id(&self) -> &str {
        "eeg_indicators"
    }

    fn name(&self) -> &str {
        "Indicadores EEG"
    }

    fn domains(&self) -> &[MetricDomain] {
        static DOMAINS: std::sync::LazyLock<Vec<MetricDomain>> = std::sync::LazyLock::new(|| {
            vec![MetricDomain {
                id: "indicadores_eeg".to_string(),
                name: "Indicadores EEG".to_string(),
                indicators: vec![
                    indicator("indice_atencion", "Índice de Atención"),
                    indicator("indice_relajacion", "Índice de Relajación"),
                    indicator("ratio_theta_beta", "Ratio Theta/Beta"),
                    indicator("amplitud_alfa", "Amplitud Alfa"),
                ],
                composite_score_type: None,
                composite_range: None,
                description: Some(
                    "Normalized against the device vendor's adult reference sample".to_string(),
                ),
            }]
        });
        &DOMAINS
    }
}

fn indicator(id: &str, name: &str) -> Indicator {
    Indicator {
        id: id.to_string(),
        name: name.to_string(),
        score_type: ScoreType::Index,
        range: T_SCORE,
        description: None,
    }
}
