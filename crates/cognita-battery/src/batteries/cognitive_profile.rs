use crate::scoring::{Indicator, MetricDomain, ScoreType, T_SCORE};
use crate::Battery;

/// Perfil Cognitivo: the core neuropsychological battery.
/// Planning, working memory, and cognitive flexibility domains.
/// All indicators are T-scores (mean 50, SD 10) on the 20–80 scale.
#[derive(Debug)]
pub struct CognitiveProfile;

impl Battery for CognitiveProfile {
    fn id(&self) -> &str {
        "cognitive_profile"
    }

    fn name(&self) -> &str {
        "Perfil Cognitivo"
    }

    fn domains(&self) -> &[MetricDomain] {
        static DOMAINS: std::sync::LazyLock<Vec<MetricDomain>> = std::sync::LazyLock::new(|| {
            vec![
                MetricDomain {
                    id: "planificacion".to_string(),
                    name: "Planificación".to_string(),
                    indicators: vec![
                        indicator("torre_londres", "Torre de Londres"),
                        indicator("mapa_zoo", "Mapa del Zoo (BADS)"),
                        indicator("laberintos", "Laberintos"),
                    ],
                    composite_score_type: Some(ScoreType::Index),
                    composite_range: Some(T_SCORE),
                    description: None,
                },
                MetricDomain {
                    id: "memoria_trabajo".to_string(),
                    name: "Memoria de Trabajo".to_string(),
                    indicators: vec![
                        indicator("digitos", "Dígitos"),
                        indicator("letras_numeros", "Letras y Números"),
                        indicator("aritmetica", "Aritmética"),
                    ],
                    composite_score_type: Some(ScoreType::Index),
                    composite_range: Some(T_SCORE),
                    description: None,
                },
                MetricDomain {
                    id: "flexibilidad_cognitiva".to_string(),
                    name: "Flexibilidad Cognitiva".to_string(),
                    indicators: vec![
                        indicator("tmt_b", "TMT-B (Trail Making Test)"),
                        indicator("stroop", "Stroop"),
                        indicator("wcst", "Wisconsin (WCST)"),
                    ],
                    composite_score_type: Some(ScoreType::Index),
                    composite_range: Some(T_SCORE),
                    description: Some(
                        "Set-shifting and interference control under time pressure".to_string(),
                    ),
                },
            ]
        });
        &DOMAINS
    }
}

fn indicator(id: &str, name: &str) -> Indicator {
    Indicator {
        id: id.to_string(),
        name: name.to_string(),
        score_type: ScoreType::TScore,
        range: T_SCORE,
        description: None,
    }
}
