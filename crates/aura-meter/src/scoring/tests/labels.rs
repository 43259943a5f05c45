use crate::scoring::{AuraLabel, RoastIntensity};

#[test]
fn label_ladder_boundaries() {
    let cases = [
        (50, AuraLabel::RareEnergy),
        (40, AuraLabel::RareEnergy),
        (39, AuraLabel::StrongPresence),
        (25, AuraLabel::StrongPresence),
        (24, AuraLabel::PositiveAura),
        (10, AuraLabel::PositiveAura),
        (9, AuraLabel::Neutral),
        (0, AuraLabel::Neutral),
        (-1, AuraLabel::LowSignal),
        (-14, AuraLabel::LowSignal),
        (-15, AuraLabel::OffEnergy),
        (-29, AuraLabel::OffEnergy),
        (-30, AuraLabel::NegativePresence),
        (-50, AuraLabel::NegativePresence),
    ];

    for (score, expected) in cases {
        assert_eq!(AuraLabel::for_score(score), expected, "score {score}");
    }
}

#[test]
fn intensity_ladder_boundaries() {
    let cases = [
        (40, RoastIntensity::Dominant),
        (39, RoastIntensity::Challenging),
        (20, RoastIntensity::Challenging),
        (19, RoastIntensity::Teasing),
        (1, RoastIntensity::Teasing),
        (0, RoastIntensity::Deadpan),
        (-1, RoastIntensity::RealityCheck),
        (-14, RoastIntensity::RealityCheck),
        (-15, RoastIntensity::Brutal),
        (-29, RoastIntensity::Brutal),
        (-30, RoastIntensity::Surgical),
    ];

    for (score, expected) in cases {
        assert_eq!(RoastIntensity::for_score(score), expected, "score {score}");
    }
}

#[test]
fn ladders_disagree_between_ten_and_twenty_five() {
    assert_eq!(AuraLabel::for_score(22), AuraLabel::PositiveAura);
    assert_eq!(RoastIntensity::for_score(22), RoastIntensity::Challenging);
    assert_eq!(AuraLabel::for_score(5), AuraLabel::Neutral);
    assert_eq!(RoastIntensity::for_score(5), RoastIntensity::Teasing);
}

#[test]
fn labels_serialize_as_display_text() {
    let value = serde_json::to_value(AuraLabel::NegativePresence).expect("serialize");
    assert_eq!(value, serde_json::json!("Negative Presence"));

    let parsed: AuraLabel = serde_json::from_str("\"Rare Energy\"").expect("deserialize");
    assert_eq!(parsed, AuraLabel::RareEnergy);
    assert_eq!(parsed.to_string(), "Rare Energy");
}

#[test]
fn intensity_guidance_text() {
    assert_eq!(
        RoastIntensity::Dominant.guidance(),
        "Dominant, confident - 'don't get arrogant'"
    );
    assert_eq!(
        RoastIntensity::Surgical.to_string(),
        "Surgical destruction (still no insults)"
    );
}
