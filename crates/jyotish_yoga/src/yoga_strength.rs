//! Yoga strength estimation from the Shadbala of the grahas behind a yoga.

use std::collections::BTreeMap;
use std::fmt;

use jyotish_bala::{StrengthConfig, StrengthInputs, StrengthReport, compute_strengths};
use jyotish_base::util::sign_index;
use jyotish_base::{Graha, JyotishError, SAPTA_GRAHAS, rashi_lord_by_index};
use log::debug;
use serde::Serialize;

use crate::chart_state::ChartState;
use crate::config::{EstimatorThresholds, YogaConfig};
use crate::yoga_table::{PlanetSelector, YogaDefinition};

/// Qualitative strength of a detected yoga.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum StrengthLabel {
    #[default]
    Weak,
    Medium,
    Strong,
    #[serde(rename = "Very Strong")]
    VeryStrong,
}

impl StrengthLabel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        }
    }

    /// Bucket an average Shadbala (virupas), with the cut-off that applied.
    pub fn from_average(average: f64, thresholds: &EstimatorThresholds) -> (Self, String) {
        if average >= thresholds.very_strong {
            (Self::VeryStrong, format!(">= {} Virupas", thresholds.very_strong))
        } else if average >= thresholds.strong {
            (Self::Strong, format!(">= {} Virupas", thresholds.strong))
        } else if average >= thresholds.medium {
            (Self::Medium, format!(">= {} Virupas", thresholds.medium))
        } else {
            (Self::Weak, format!("< {} Virupas", thresholds.medium))
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which rule produced the involved grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InvolvementTier {
    /// The yoga's declared selector.
    Selector,
    /// House numbers and planet names found in the condition names.
    ConditionTokens,
    /// Every placed classical graha.
    Fallback,
}

/// Everything the estimator looked at for one yoga.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YogaDiagnostics {
    pub yoga: &'static str,
    pub conditions_met: usize,
    pub involved: Vec<Graha>,
    /// Shadbala total of each involved graha.
    pub strengths: BTreeMap<Graha, f64>,
    pub total: f64,
    pub average: f64,
    pub threshold: Option<String>,
    pub tier: Option<InvolvementTier>,
    pub errors: Vec<String>,
    pub result: StrengthLabel,
}

impl YogaDiagnostics {
    fn weak(yoga: &'static str, conditions_met: usize) -> Self {
        Self {
            yoga,
            conditions_met,
            involved: Vec::new(),
            strengths: BTreeMap::new(),
            total: 0.0,
            average: 0.0,
            threshold: None,
            tier: None,
            errors: Vec::new(),
            result: StrengthLabel::Weak,
        }
    }
}

// ---------------------------------------------------------------------------
// Involved grahas
// ---------------------------------------------------------------------------

fn classical_placed(state: &ChartState<'_>) -> Vec<Graha> {
    state.placed_grahas().filter(|g| !g.is_node()).collect()
}

fn house_lords(state: &ChartState<'_>, houses: &[u8]) -> Vec<Graha> {
    houses
        .iter()
        .filter_map(|&h| state.house_lords().lord(h))
        .collect()
}

fn debilitated_with_dispositors(state: &ChartState<'_>) -> Vec<Graha> {
    let mut grahas = Vec::new();
    for (g, lon) in state.positions().placed() {
        if g.is_node() {
            continue;
        }
        match state.state(g) {
            Ok(s) if s.debilitated => {
                grahas.push(g);
                grahas.extend(rashi_lord_by_index(sign_index(lon)));
            }
            Ok(_) => {}
            Err(e) => debug!("No state for {}: {e}", g.english_name()),
        }
    }
    grahas
}

fn from_selector(selector: PlanetSelector, state: &ChartState<'_>) -> Vec<Graha> {
    match selector {
        PlanetSelector::Grahas(grahas) => grahas.to_vec(),
        PlanetSelector::HouseLords(houses) => house_lords(state, houses),
        PlanetSelector::HouseLordsWith(houses, grahas) => {
            let mut out = house_lords(state, houses);
            out.extend_from_slice(grahas);
            out
        }
        PlanetSelector::Occupants(houses) => houses
            .iter()
            .flat_map(|&h| state.occupants(h).collect::<Vec<_>>())
            .collect(),
        PlanetSelector::DebilitatedWithDispositors => debilitated_with_dispositors(state),
        PlanetSelector::ExchangePairs => state
            .exchange_pairs()
            .into_iter()
            .flat_map(|(a, b)| [a, b])
            .collect(),
        PlanetSelector::AllPlanets => classical_placed(state),
        PlanetSelector::FromConditions => Vec::new(),
    }
}

/// House numbers lead a token ("9th" → 9); a name that opens with a
/// planet ("jupiter_in_...") names that planet.
fn from_condition_tokens(conditions: &[&str], state: &ChartState<'_>) -> Vec<Graha> {
    let mut grahas = Vec::new();
    for cond in conditions {
        for token in cond.split('_') {
            let digits: String = token.chars().take_while(char::is_ascii_digit).collect();
            let Ok(house) = digits.parse::<u8>() else {
                continue;
            };
            grahas.extend(state.house_lords().lord(house));
        }
        let lower = cond.to_ascii_lowercase();
        grahas.extend(
            SAPTA_GRAHAS
                .iter()
                .copied()
                .filter(|g| lower.starts_with(&g.english_name().to_ascii_lowercase())),
        );
    }
    grahas
}

/// Dedup, drop the nodes and anything unplaced, and sort.
fn clean(mut grahas: Vec<Graha>, state: &ChartState<'_>) -> Vec<Graha> {
    grahas.retain(|&g| !g.is_node() && state.is_placed(g));
    grahas.sort();
    grahas.dedup();
    grahas
}

/// Grahas whose strength stands for the yoga, and the tier that chose them.
pub fn involved_planets(
    yoga: &YogaDefinition,
    state: &ChartState<'_>,
) -> (Vec<Graha>, InvolvementTier) {
    let selected = clean(from_selector(yoga.selector, state), state);
    if !selected.is_empty() {
        return (selected, InvolvementTier::Selector);
    }
    let tokens = clean(from_condition_tokens(yoga.conditions, state), state);
    if !tokens.is_empty() {
        return (tokens, InvolvementTier::ConditionTokens);
    }
    (classical_placed(state), InvolvementTier::Fallback)
}

// ---------------------------------------------------------------------------
// Estimation
// ---------------------------------------------------------------------------

/// Strength report for the chart, nodes included.
pub(crate) fn chart_strengths(state: &ChartState<'_>) -> Result<StrengthReport, JyotishError> {
    let inputs = StrengthInputs {
        jd: state.jd(),
        positions: state.positions(),
        speeds: state.speeds(),
        dignities: state.dignities(),
    };
    compute_strengths(&inputs, &StrengthConfig::default().with_nodes())
}

/// Estimate a yoga's strength, running the strength aggregator for the chart.
///
/// Never fails: aggregation errors come back as a Weak result with the
/// error recorded in the diagnostics.
pub fn estimate_yoga_strength(
    yoga: &YogaDefinition,
    conditions_met: usize,
    state: &ChartState<'_>,
    config: &YogaConfig,
) -> YogaDiagnostics {
    if conditions_met == 0 {
        return YogaDiagnostics::weak(yoga.name, 0);
    }
    let report = chart_strengths(state);
    estimate_from_report(yoga, conditions_met, state, &report, &config.estimator)
}

pub(crate) fn estimate_from_report(
    yoga: &YogaDefinition,
    conditions_met: usize,
    state: &ChartState<'_>,
    report: &Result<StrengthReport, JyotishError>,
    thresholds: &EstimatorThresholds,
) -> YogaDiagnostics {
    let mut diag = YogaDiagnostics::weak(yoga.name, conditions_met);
    if conditions_met == 0 {
        return diag;
    }
    let report = match report {
        Ok(r) if r.breakdown.grahas.is_empty() => {
            diag.errors.push("empty strength breakdown".to_string());
            return diag;
        }
        Ok(r) => r,
        Err(e) => {
            diag.errors.push(format!("strength aggregation failed: {e}"));
            return diag;
        }
    };

    let (involved, tier) = involved_planets(yoga, state);
    if tier == InvolvementTier::Fallback {
        debug!("{}: no specific grahas, using every placed graha", yoga.name);
        diag.errors.push("using fallback: all planets".to_string());
    }

    for &g in &involved {
        let total = report.breakdown.total(g).unwrap_or(0.0);
        diag.strengths.insert(g, total);
    }
    diag.total = diag.strengths.values().sum();
    diag.average = if diag.strengths.is_empty() {
        0.0
    } else {
        diag.total / diag.strengths.len() as f64
    };

    let (result, threshold) = StrengthLabel::from_average(diag.average, thresholds);
    diag.involved = involved;
    diag.tier = Some(tier);
    diag.threshold = Some(threshold);
    diag.result = result;
    diag
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart_state::tests::{sample_positions, state_for};
    use crate::yoga_table::yoga_definition;
    use jyotish_base::{DivisionalDignities, HouseLords, Positions};

    #[test]
    fn label_buckets() {
        let t = EstimatorThresholds::default();
        assert_eq!(StrengthLabel::from_average(360.0, &t).0, StrengthLabel::VeryStrong);
        assert_eq!(StrengthLabel::from_average(359.99, &t).0, StrengthLabel::Strong);
        assert_eq!(StrengthLabel::from_average(300.0, &t).0, StrengthLabel::Strong);
        assert_eq!(StrengthLabel::from_average(240.0, &t).0, StrengthLabel::Medium);
        let (weak, threshold) = StrengthLabel::from_average(239.0, &t);
        assert_eq!(weak, StrengthLabel::Weak);
        assert_eq!(threshold, "< 240 Virupas");
        assert!(StrengthLabel::VeryStrong > StrengthLabel::Weak);
        assert_eq!(StrengthLabel::VeryStrong.to_string(), "Very Strong");
    }

    #[test]
    fn selector_tier_for_gajakesari() {
        let p = sample_positions();
        let lords = HouseLords::from_ascendant(130.0);
        let d = DivisionalDignities::new();
        let d9 = Positions::new();
        let s = state_for(&p, &d9, &lords, &d);
        let yoga = yoga_definition("Gajakesari Yoga").unwrap();
        let (grahas, tier) = involved_planets(yoga, &s);
        assert_eq!(tier, InvolvementTier::Selector);
        assert_eq!(grahas, vec![Graha::Chandra, Graha::Guru]);
    }

    #[test]
    fn condition_tokens_use_house_lords() {
        // Leo ascendant: the 9th lord is Mars.
        let p = sample_positions();
        let lords = HouseLords::from_ascendant(130.0);
        let d = DivisionalDignities::new();
        let d9 = Positions::new();
        let s = state_for(&p, &d9, &lords, &d);
        let bheri = yoga_definition("Bheri Yoga").unwrap();
        assert_eq!(
            involved_planets(bheri, &s),
            (vec![Graha::Mangal], InvolvementTier::ConditionTokens)
        );
        let guru_mangala = yoga_definition("Guru Mangala Yoga").unwrap();
        assert_eq!(
            involved_planets(guru_mangala, &s),
            (vec![Graha::Guru], InvolvementTier::ConditionTokens)
        );
    }

    #[test]
    fn empty_selector_falls_through() {
        // No exchange in the sample chart, and no tokens in the condition name.
        let p = sample_positions();
        let lords = HouseLords::from_ascendant(130.0);
        let d = DivisionalDignities::new();
        let d9 = Positions::new();
        let s = state_for(&p, &d9, &lords, &d);
        let yoga = yoga_definition("Parivartana Yoga").unwrap();
        let (grahas, tier) = involved_planets(yoga, &s);
        assert_eq!(tier, InvolvementTier::Fallback);
        assert_eq!(grahas.len(), 7);
        assert!(grahas.iter().all(|g| !g.is_node()));
    }

    #[test]
    fn zero_met_is_weak_without_work() {
        let p = sample_positions();
        let lords = HouseLords::from_ascendant(130.0);
        let d = DivisionalDignities::new();
        let d9 = Positions::new();
        let s = state_for(&p, &d9, &lords, &d);
        let yoga = yoga_definition("Raj Yoga").unwrap();
        let diag = estimate_yoga_strength(yoga, 0, &s, &YogaConfig::default());
        assert_eq!(diag.result, StrengthLabel::Weak);
        assert!(diag.tier.is_none());
        assert!(diag.strengths.is_empty());
    }

    #[test]
    fn average_over_involved_grahas() {
        let p = sample_positions();
        let lords = HouseLords::from_ascendant(130.0);
        let d = DivisionalDignities::new();
        let d9 = Positions::new();
        let s = state_for(&p, &d9, &lords, &d);
        let yoga = yoga_definition("Gajakesari Yoga").unwrap();
        let diag = estimate_yoga_strength(yoga, 1, &s, &YogaConfig::default());
        assert!(diag.errors.is_empty());
        assert_eq!(diag.strengths.len(), 2);
        let expected = (diag.strengths[&Graha::Chandra] + diag.strengths[&Graha::Guru]) / 2.0;
        assert!((diag.average - expected).abs() < 1e-9);
        assert_eq!(
            diag.result,
            StrengthLabel::from_average(diag.average, &EstimatorThresholds::default()).0
        );
    }

    #[test]
    fn aggregation_error_is_weak() {
        let p = sample_positions();
        let lords = HouseLords::from_ascendant(130.0);
        let d = DivisionalDignities::new();
        let d9 = Positions::new();
        let s = state_for(&p, &d9, &lords, &d);
        let yoga = yoga_definition("Gajakesari Yoga").unwrap();
        let report = Err(JyotishError::EmptyPositions);
        let diag = estimate_from_report(yoga, 1, &s, &report, &EstimatorThresholds::default());
        assert_eq!(diag.result, StrengthLabel::Weak);
        assert_eq!(diag.errors.len(), 1);
        assert!(diag.errors[0].starts_with("strength aggregation failed"));
    }
}
