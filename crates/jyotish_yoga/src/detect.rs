//! Yoga detection over the static definition table.

use jyotish_base::JyotishError;
use log::{debug, info, warn};
use rayon::prelude::*;
use serde::Serialize;

use crate::chart_state::{ChartState, YogaInputs};
use crate::condition::evaluate_condition;
use crate::config::YogaConfig;
use crate::yoga_strength::{StrengthLabel, YogaDiagnostics, chart_strengths, estimate_from_report};
use crate::yoga_table::{YOGA_DEFINITIONS, YogaDefinition};

/// A yoga with at least one condition met.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectedYoga {
    pub name: &'static str,
    pub description: &'static str,
    pub conditions_met: usize,
    pub conditions_total: usize,
    /// Met condition names, in definition order.
    pub met_conditions: Vec<&'static str>,
    pub strength: StrengthLabel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<YogaDiagnostics>,
}

impl DetectedYoga {
    /// "met/total", e.g. "2/4".
    pub fn met_ratio(&self) -> String {
        format!("{}/{}", self.conditions_met, self.conditions_total)
    }
}

/// Conditions of `yoga` that hold for the chart.
///
/// A condition that fails to evaluate is logged and counts as not met.
pub fn met_conditions(yoga: &YogaDefinition, state: &ChartState<'_>) -> Vec<&'static str> {
    yoga.conditions
        .iter()
        .copied()
        .filter(|&cond| match evaluate_condition(cond, state) {
            Ok(met) => met,
            Err(e) => {
                warn!("Error checking condition {cond} for {}: {e}", yoga.name);
                false
            }
        })
        .collect()
}

/// Detect every yoga in the table for one chart.
///
/// Output keeps table order and omits yogas with no met condition. The
/// strength aggregator runs once per call; its failure downgrades every
/// yoga to Weak rather than failing detection.
///
/// Fails only on an empty chart, a missing ascendant, or an invalid
/// longitude.
pub fn detect_yogas(
    inputs: &YogaInputs<'_>,
    config: &YogaConfig,
) -> Result<Vec<DetectedYoga>, JyotishError> {
    let state = ChartState::new(inputs, config)?;
    let report = chart_strengths(&state);
    if let Err(e) = &report {
        warn!("Strength aggregation failed, yoga strengths default to Weak: {e}");
    }

    let detected: Vec<DetectedYoga> = YOGA_DEFINITIONS
        .par_iter()
        .filter_map(|yoga| {
            let met = met_conditions(yoga, &state);
            if met.is_empty() {
                return None;
            }
            let diagnostics =
                estimate_from_report(yoga, met.len(), &state, &report, &config.estimator);
            debug!(
                "{}: {}/{} met, {}",
                yoga.name,
                met.len(),
                yoga.conditions.len(),
                diagnostics.result
            );
            Some(DetectedYoga {
                name: yoga.name,
                description: yoga.description,
                conditions_met: met.len(),
                conditions_total: yoga.conditions.len(),
                met_conditions: met,
                strength: diagnostics.result,
                diagnostics: Some(diagnostics),
            })
        })
        .collect();

    info!(
        "Detected {} of {} yogas",
        detected.len(),
        YOGA_DEFINITIONS.len()
    );
    Ok(detected)
}

/// Detected yogas ordered strongest first; ties keep table order.
pub fn sort_by_strength(yogas: &mut [DetectedYoga]) {
    yogas.sort_by(|a, b| b.strength.cmp(&a.strength));
}
