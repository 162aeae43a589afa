//! Integration tests for the strength aggregator on a full sample chart.

use jyotish_bala::{
    ALL_COMPONENTS, MAX_COMPONENT, NodeDigBala, PHALA_TOTAL, StrengthConfig, StrengthInputs,
    compute_strengths,
};
use jyotish_base::{DignityLabel, DivisionalDignities, Graha, Positions, SAPTA_GRAHAS, Varga};

const EPS: f64 = 1e-6;

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

fn sample_dignities() -> DivisionalDignities {
    DivisionalDignities::new()
        .with(Graha::Mangal, Varga::D1, DignityLabel::Exalted)
        .with(Graha::Mangal, Varga::D9, DignityLabel::OwnSign)
        .with(Graha::Guru, Varga::D1, DignityLabel::Exalted)
        .with(Graha::Guru, Varga::D9, DignityLabel::Exalted)
        .with(Graha::Shani, Varga::D1, DignityLabel::Exalted)
}

const SPEEDS: [f64; 9] = [1.01, 12.8, 0.77, -0.4, -0.08, 1.2, 0.03, -0.05, -0.05];

#[test]
fn every_component_within_bounds() {
    let positions = sample_positions();
    let dignities = sample_dignities();
    let inputs = StrengthInputs {
        jd: 2_460_325.0,
        positions: &positions,
        speeds: &SPEEDS,
        dignities: &dignities,
    };
    let report = compute_strengths(&inputs, &StrengthConfig::default().with_nodes()).unwrap();
    assert_eq!(report.rows.len(), 9);
    for b in &report.breakdown.grahas {
        for c in ALL_COMPONENTS {
            let v = b.component(c);
            assert!(
                (0.0..=MAX_COMPONENT).contains(&v),
                "{} {} = {v}",
                b.graha.english_name(),
                c.name()
            );
        }
    }
}

#[test]
fn ishta_and_kashta_sum_to_sixty() {
    let positions = sample_positions();
    let dignities = sample_dignities();
    let inputs = StrengthInputs {
        jd: 2_460_325.0,
        positions: &positions,
        speeds: &SPEEDS,
        dignities: &dignities,
    };
    let report = compute_strengths(&inputs, &StrengthConfig::default()).unwrap();
    for row in &report.rows {
        assert!(
            (row.ishta + row.kashta - PHALA_TOTAL).abs() < EPS,
            "{}",
            row.graha.english_name()
        );
        assert!((0.0..=100.0).contains(&row.percent));
    }
}

#[test]
fn rows_match_breakdown_totals() {
    let positions = sample_positions();
    let dignities = sample_dignities();
    let inputs = StrengthInputs {
        jd: 2_460_325.0,
        positions: &positions,
        speeds: &SPEEDS,
        dignities: &dignities,
    };
    let report = compute_strengths(&inputs, &StrengthConfig::default()).unwrap();
    for g in SAPTA_GRAHAS {
        let row = report.row(g).unwrap();
        let total = report.breakdown.total(g).unwrap();
        assert!((row.total - total).abs() < 0.01, "{}", g.english_name());
    }
}

#[test]
fn exalted_states_reach_row_labels() {
    let positions = sample_positions();
    let dignities = sample_dignities();
    let inputs = StrengthInputs {
        jd: 2_460_325.0,
        positions: &positions,
        speeds: &SPEEDS,
        dignities: &dignities,
    };
    let report = compute_strengths(&inputs, &StrengthConfig::default()).unwrap();
    // Mars at 297 deg is within 3 deg of its exaltation point.
    let mars = report.row(Graha::Mangal).unwrap();
    assert!(mars.combined_state.contains("Exalted"), "{}", mars.combined_state);
}

#[test]
fn zero_node_dig_bala_policy() {
    let positions = sample_positions();
    let dignities = sample_dignities();
    let inputs = StrengthInputs {
        jd: 2_460_325.0,
        positions: &positions,
        speeds: &SPEEDS,
        dignities: &dignities,
    };
    let config = StrengthConfig {
        include_nodes: true,
        node_dig_bala: NodeDigBala::Zero,
        ..StrengthConfig::default()
    };
    let report = compute_strengths(&inputs, &config).unwrap();
    for node in [Graha::Rahu, Graha::Ketu] {
        assert_eq!(report.breakdown.get(node).unwrap().dig, 0.0);
    }
}

#[test]
fn results_are_deterministic() {
    let positions = sample_positions();
    let dignities = sample_dignities();
    let inputs = StrengthInputs {
        jd: 2_460_325.0,
        positions: &positions,
        speeds: &SPEEDS,
        dignities: &dignities,
    };
    let config = StrengthConfig::default().with_nodes();
    let first = compute_strengths(&inputs, &config).unwrap();
    for _ in 0..5 {
        assert_eq!(compute_strengths(&inputs, &config).unwrap(), first);
    }
}
