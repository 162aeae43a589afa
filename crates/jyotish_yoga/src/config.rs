//! Yoga engine configuration.

use serde::Deserialize;

/// Average-Shadbala cut-offs (virupas) for the yoga strength labels.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EstimatorThresholds {
    pub very_strong: f64,
    pub strong: f64,
    pub medium: f64,
}

impl Default for EstimatorThresholds {
    fn default() -> Self {
        Self {
            very_strong: 360.0,
            strong: 300.0,
            medium: 240.0,
        }
    }
}

/// Options for [`crate::detect_yogas`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct YogaConfig {
    /// Maximum separation (deg) for two grahas to count as conjunct.
    pub conjunction_orb: f64,
    /// Tolerance (deg) around an aspect point.
    pub aspect_orb: f64,
    pub estimator: EstimatorThresholds,
}

impl Default for YogaConfig {
    fn default() -> Self {
        Self {
            conjunction_orb: 8.0,
            aspect_orb: 5.0,
            estimator: EstimatorThresholds::default(),
        }
    }
}
