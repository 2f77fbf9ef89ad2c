use cognita_battery::get_battery;
use cognita_charts::{
    bar_series, domain_summaries, grouped_metric_table, BandDistribution, BAR_CAP,
};
use cognita_levels::Level;
use cognita_theme::Palette;
use serde_json::json;

#[test]
fn distribution_counts_every_score_once() {
    let scores = vec![
        Some(75.0),
        Some(62.0),
        Some(45.0),
        Some(35.0),
        Some(10.0),
        None,
    ];
    let dist = BandDistribution::from_scores(&scores);

    assert_eq!(dist.total, 6);
    let counted: usize = dist.counts.iter().map(|c| c.count).sum();
    assert_eq!(counted, dist.total);

    let labels: Vec<&str> = dist.counts.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, ["MUY BAJO", "BAJO", "MEDIO", "ALTO", "MUY ALTO"]);

    // 10.0 is off-scale and None is missing; both land in the lowest band.
    assert_eq!(dist.counts[0].count, 2);
    assert_eq!(dist.counts[4].count, 1);
}

#[test]
fn table_rows_follow_battery_order_and_palette() {
    let battery = get_battery("cognitive_profile").unwrap();
    let palette = Palette::default();
    let scores = json!({"digitos": 65, "torre_londres": "30"});

    let groups = grouped_metric_table(battery.as_ref(), &scores, &palette);
    assert_eq!(groups.len(), 3);
    assert_eq!(groups[0].domain_id, "planificacion");
    assert_eq!(groups[1].domain_id, "memoria_trabajo");

    let torre = &groups[0].rows[0];
    assert_eq!(torre.indicator_id, "torre_londres");
    assert_eq!(torre.score, Some(30.0));
    assert!(!torre.missing);
    assert_eq!(torre.level, Level::VeryLow);
    assert_eq!(torre.label, "MUY BAJO");

    let digitos = groups[1]
        .rows
        .iter()
        .find(|r| r.indicator_id == "digitos")
        .unwrap();
    assert_eq!(digitos.level, Level::High);
    assert_eq!(digitos.badge.background, "rgba(102, 187, 106, 0.2)");
    assert_eq!(digitos.badge.border, "rgba(102, 187, 106, 0.6)");
    // The high-band green is light enough to carry dark text.
    assert_eq!(digitos.badge.text, "#212121");
}

#[test]
fn missing_rows_degrade_to_the_lowest_band() {
    let battery = get_battery("cognitive_profile").unwrap();
    let palette = Palette::default();
    let scores = json!({"digitos": 65});

    let groups = grouped_metric_table(battery.as_ref(), &scores, &palette);
    let mapa = groups[0]
        .rows
        .iter()
        .find(|r| r.indicator_id == "mapa_zoo")
        .unwrap();
    assert!(mapa.missing);
    assert_eq!(mapa.score, None);
    assert_eq!(mapa.level, Level::VeryLow);
    assert_eq!(mapa.badge.background, "rgba(198, 40, 40, 0.2)");
    // The very-low red needs light text.
    assert_eq!(mapa.badge.text, "#fafafa");
}

#[test]
fn non_object_payloads_render_every_row_missing() {
    let battery = get_battery("eeg_indicators").unwrap();
    let palette = Palette::default();

    let groups = grouped_metric_table(battery.as_ref(), &json!("converted badly"), &palette);
    for group in &groups {
        for row in &group.rows {
            assert!(row.missing);
            assert_eq!(row.level, Level::VeryLow);
        }
    }
}

#[test]
fn bars_clamp_to_the_visual_cap() {
    let battery = get_battery("cognitive_profile").unwrap();
    let palette = Palette::default();
    let scores = json!({"digitos": 250, "stroop": -12, "tmt_b": 64.5});

    let bars = bar_series(battery.as_ref(), &scores, &palette);
    assert_eq!(bars.len(), 9);

    let digitos = bars.iter().find(|b| b.indicator_id == "digitos").unwrap();
    assert_eq!(digitos.value, BAR_CAP);
    // Off-scale scores still classify to the lowest band.
    assert_eq!(digitos.level, Level::VeryLow);

    let stroop = bars.iter().find(|b| b.indicator_id == "stroop").unwrap();
    assert_eq!(stroop.value, 0.0);

    let tmt = bars.iter().find(|b| b.indicator_id == "tmt_b").unwrap();
    assert_eq!(tmt.value, 64.5);
    assert_eq!(tmt.level, Level::High);
    assert_eq!(tmt.color, "#66bb6a");
}

#[test]
fn domain_means_use_present_scores_only() {
    let battery = get_battery("cognitive_profile").unwrap();
    let scores = json!({"digitos": 60, "letras_numeros": 70, "aritmetica": "ilegible"});

    let summaries = domain_summaries(battery.as_ref(), &scores);
    assert_eq!(summaries.len(), 3);

    let memoria = summaries
        .iter()
        .find(|s| s.domain_id == "memoria_trabajo")
        .unwrap();
    assert_eq!(memoria.mean_score, Some(65.0));
    assert_eq!(memoria.level, Level::High);
    assert_eq!(memoria.label, "ALTO");

    let planificacion = summaries
        .iter()
        .find(|s| s.domain_id == "planificacion")
        .unwrap();
    assert_eq!(planificacion.mean_score, None);
    assert_eq!(planificacion.level, Level::VeryLow);
}
