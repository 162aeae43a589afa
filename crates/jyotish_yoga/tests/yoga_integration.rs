//! Integration tests for yoga detection on full sample charts.

use jyotish_base::{
    DignityLabel, DivisionalDignities, Graha, HouseLords, JyotishError, Positions, Varga,
    angular_distance,
};
use jyotish_yoga::{
    DetectedYoga, InvolvementTier, StrengthLabel, YOGA_DEFINITIONS, YogaConfig, YogaInputs,
    detect_yogas,
};

const SPEEDS: [f64; 9] = [1.01, 12.8, 0.77, -0.4, -0.08, 1.2, 0.03, -0.05, -0.05];

fn sample_positions() -> Positions {
    Positions::new()
        .with(Graha::Surya, 280.5)
        .with(Graha::Chandra, 33.2)
        .with(Graha::Mangal, 297.0)
        .with(Graha::Buddh, 265.4)
        .with(Graha::Guru, 95.0)
        .with(Graha::Shukra, 330.1)
        .with(Graha::Shani, 201.0)
        .with(Graha::Rahu, 12.0)
        .with_ascendant(185.0)
}

fn sample_d9() -> Positions {
    Positions::new()
        .with(Graha::Surya, 12.0)
        .with(Graha::Chandra, 208.0)
        .with(Graha::Mangal, 282.0)
        .with(Graha::Buddh, 108.0)
        .with(Graha::Guru, 135.0)
        .with(Graha::Shukra, 170.0)
        .with(Graha::Shani, 200.0)
        .with(Graha::Rahu, 108.0)
        .with_ascendant(225.0)
}

fn sample_dignities() -> DivisionalDignities {
    DivisionalDignities::new()
        .with(Graha::Mangal, Varga::D1, DignityLabel::Exalted)
        .with(Graha::Guru, Varga::D1, DignityLabel::Exalted)
        .with(Graha::Shani, Varga::D1, DignityLabel::Exalted)
        .with(Graha::Shani, Varga::D9, DignityLabel::Exalted)
}

fn detect(positions: &Positions, config: &YogaConfig) -> Result<Vec<DetectedYoga>, JyotishError> {
    let asc = positions.ascendant().unwrap_or(0.0);
    let lords = HouseLords::from_ascendant(asc);
    let d9 = sample_d9();
    let dignities = sample_dignities();
    let inputs = YogaInputs {
        jd: 2_460_325.0,
        positions,
        speeds: &SPEEDS,
        d9_positions: &d9,
        house_lords: &lords,
        dignities: &dignities,
        is_day_birth: false,
    };
    detect_yogas(&inputs, config)
}

fn names(found: &[DetectedYoga]) -> Vec<&'static str> {
    found.iter().map(|y| y.name).collect()
}

#[test]
fn gajakesari_follows_conjunction_orb() {
    let config = YogaConfig::default();
    for jupiter in [20.0, 25.2, 28.0, 33.2, 41.2, 41.3, 45.0, 200.0] {
        let positions = sample_positions().with(Graha::Guru, jupiter);
        let found = detect(&positions, &config).unwrap();
        let expected = angular_distance(jupiter, 33.2) <= 8.0;
        assert_eq!(
            names(&found).contains(&"Gajakesari Yoga"),
            expected,
            "Jupiter at {jupiter}"
        );
    }
}

#[test]
fn wider_orb_from_config() {
    let positions = sample_positions().with(Graha::Guru, 45.0);
    let narrow = detect(&positions, &YogaConfig::default()).unwrap();
    assert!(!names(&narrow).contains(&"Gajakesari Yoga"));
    let wide = YogaConfig {
        conjunction_orb: 12.0,
        ..YogaConfig::default()
    };
    let found = detect(&positions, &wide).unwrap();
    assert!(names(&found).contains(&"Gajakesari Yoga"));
}

#[test]
fn no_yoga_without_a_met_condition() {
    let found = detect(&sample_positions(), &YogaConfig::default()).unwrap();
    assert!(!found.is_empty());
    for y in &found {
        assert!(y.conditions_met > 0, "{}", y.name);
        assert!(y.conditions_met <= y.conditions_total);
        assert_eq!(y.met_conditions.len(), y.conditions_met);
    }
}

#[test]
fn output_follows_table_order() {
    let found = detect(&sample_positions(), &YogaConfig::default()).unwrap();
    let table: Vec<_> = YOGA_DEFINITIONS.iter().map(|y| y.name).collect();
    let positions: Vec<usize> = found
        .iter()
        .map(|y| table.iter().position(|n| *n == y.name).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn detection_is_deterministic() {
    let config = YogaConfig::default();
    let first = detect(&sample_positions(), &config).unwrap();
    for _ in 0..5 {
        assert_eq!(detect(&sample_positions(), &config).unwrap(), first);
    }
}

#[test]
fn strengths_come_with_diagnostics() {
    let found = detect(&sample_positions(), &YogaConfig::default()).unwrap();
    for y in &found {
        let diag = y.diagnostics.as_ref().unwrap();
        assert_eq!(diag.result, y.strength);
        assert!(diag.tier.is_some(), "{}", y.name);
        assert!(!diag.involved.is_empty(), "{}", y.name);
        assert!(diag.involved.iter().all(|g| !g.is_node()));
        if diag.tier == Some(InvolvementTier::Fallback) {
            assert!(!diag.errors.is_empty());
        }
    }
}

#[test]
fn zero_thresholds_make_everything_very_strong() {
    let config = YogaConfig {
        estimator: jyotish_yoga::EstimatorThresholds {
            very_strong: 0.0,
            strong: 0.0,
            medium: 0.0,
        },
        ..YogaConfig::default()
    };
    let found = detect(&sample_positions(), &config).unwrap();
    assert!(found.iter().all(|y| y.strength == StrengthLabel::VeryStrong));
}

#[test]
fn invalid_longitude_rejected() {
    let positions = sample_positions().with(Graha::Shani, f64::NAN);
    assert!(matches!(
        detect(&positions, &YogaConfig::default()),
        Err(JyotishError::InvalidLongitude { .. })
    ));
}
