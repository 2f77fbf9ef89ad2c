use cognita_levels::{classify, classify_raw, label_for, token_for, Level};
use cognita_theme::ThemeToken;
use serde_json::json;

#[test]
fn integer_bands_match_the_published_ranges() {
    for s in 70..=80 {
        assert_eq!(classify(Some(s as f64)), Level::VeryHigh, "score {s}");
    }
    for s in 60..=69 {
        assert_eq!(classify(Some(s as f64)), Level::High, "score {s}");
    }
    for s in 41..=59 {
        assert_eq!(classify(Some(s as f64)), Level::Medium, "score {s}");
    }
    for s in 31..=40 {
        assert_eq!(classify(Some(s as f64)), Level::Low, "score {s}");
    }
    for s in 0..=30 {
        assert_eq!(classify(Some(s as f64)), Level::VeryLow, "score {s}");
    }
}

#[test]
fn fractional_scores_resolve_without_gaps() {
    assert_eq!(classify(Some(69.5)), Level::High);
    assert_eq!(classify(Some(59.9)), Level::Medium);
    assert_eq!(classify(Some(40.5)), Level::Low);
    assert_eq!(classify(Some(30.5)), Level::VeryLow);
    assert_eq!(classify(Some(20.0)), Level::VeryLow);
}

#[test]
fn out_of_scale_scores_collapse_to_the_lowest_band() {
    assert_eq!(classify(Some(80.1)), Level::VeryLow);
    assert_eq!(classify(Some(150.0)), Level::VeryLow);
    assert_eq!(classify(Some(-5.0)), Level::VeryLow);
    assert_eq!(classify(Some(19.9)), Level::VeryLow);
}

#[test]
fn missing_and_non_finite_scores_fall_back() {
    assert_eq!(classify(None), Level::VeryLow);
    assert_eq!(classify(Some(f64::NAN)), Level::VeryLow);
    assert_eq!(classify(Some(f64::INFINITY)), Level::VeryLow);
    assert_eq!(classify(Some(f64::NEG_INFINITY)), Level::VeryLow);
}

#[test]
fn raw_json_scores_coerce_before_classifying() {
    assert_eq!(classify_raw(&json!(75)), Level::VeryHigh);
    assert_eq!(classify_raw(&json!("64,5")), Level::High);
    assert_eq!(classify_raw(&json!(null)), Level::VeryLow);
    assert_eq!(classify_raw(&json!("sin datos")), Level::VeryLow);
}

#[test]
fn labels_follow_the_band() {
    assert_eq!(classify(Some(75.0)).label(), "MUY ALTO");
    assert_eq!(classify(Some(65.0)).label(), "ALTO");
    assert_eq!(classify(Some(50.0)).label(), "MEDIO");
    assert_eq!(classify(Some(35.0)).label(), "BAJO");
    assert_eq!(classify(Some(0.0)).label(), "MUY BAJO");
}

#[test]
fn keys_round_trip() {
    for level in Level::ALL {
        assert_eq!(Level::from_key(level.as_key()), Some(level));
        assert_eq!(label_for(level.as_key()), level.label());
        assert_eq!(token_for(level.as_key()), level.token());
    }
}

#[test]
fn unknown_keys_degrade_instead_of_erroring() {
    assert_eq!(label_for("severe"), "—");
    assert_eq!(token_for("severe"), ThemeToken::Neutral);
    assert_eq!(label_for(""), "—");
}

#[test]
fn bands_are_totally_ordered() {
    assert!(Level::VeryLow < Level::Low);
    assert!(Level::Low < Level::Medium);
    assert!(Level::Medium < Level::High);
    assert!(Level::High < Level::VeryHigh);
}

#[test]
fn band_tokens_are_distinct() {
    for (i, a) in Level::ALL.iter().enumerate() {
        for b in &Level::ALL[i + 1..] {
            assert_ne!(a.token(), b.token());
        }
    }
}
