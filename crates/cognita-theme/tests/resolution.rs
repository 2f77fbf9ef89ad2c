use cognita_theme::{readable_text_color, ColorSpec, Palette, TextTone, ThemeToken};

#[test]
fn token_round_trip_keeps_exact_channels() {
    let palette = Palette::default();
    for token in [
        ThemeToken::VeryLow,
        ThemeToken::Low,
        ThemeToken::Medium,
        ThemeToken::High,
        ThemeToken::VeryHigh,
    ] {
        let base = palette.color(token);
        let resolved = palette.resolve(&ColorSpec::from(token).with_alpha(1.0));
        assert_eq!((resolved.r, resolved.g, resolved.b), (base.r, base.g, base.b));
        assert_eq!(resolved.a, 1.0);
    }
}

#[test]
fn default_palette_slots_are_distinct() {
    let palette = Palette::default();
    let slots = [
        palette.very_low,
        palette.low,
        palette.medium,
        palette.high,
        palette.very_high,
        palette.neutral,
    ];
    for (i, a) in slots.iter().enumerate() {
        for b in &slots[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn raw_specs_resolve_to_the_neutral_slot() {
    let palette = Palette::default();
    let resolved = palette.resolve(&ColorSpec::parse("not-a-color"));
    let neutral = palette.neutral;
    assert_eq!((resolved.r, resolved.g, resolved.b), (neutral.r, neutral.g, neutral.b));
}

#[test]
fn css_encoding_switches_on_opacity() {
    let palette = Palette::default();
    let opaque = palette.resolve(&ColorSpec::parse("#2e7d32"));
    assert_eq!(opaque.to_css(), "#2e7d32");

    let translucent = palette.resolve(&ColorSpec::parse("#ff0000").with_alpha(0.5));
    assert_eq!(translucent.to_css(), "rgba(255, 0, 0, 0.5)");
}

#[test]
fn light_backgrounds_get_dark_text() {
    assert_eq!(readable_text_color(255, 255, 255), TextTone::Dark);
    assert_eq!(readable_text_color(249, 168, 37), TextTone::Dark);
}

#[test]
fn dark_backgrounds_get_light_text() {
    assert_eq!(readable_text_color(0, 0, 0), TextTone::Light);
    assert_eq!(readable_text_color(198, 40, 40), TextTone::Light);
}

#[test]
fn mid_gray_sits_below_the_threshold() {
    // Luminance of (128, 128, 128) is ~0.502, under the 0.55 cut.
    assert_eq!(readable_text_color(128, 128, 128), TextTone::Light);
}
