//! Input and breakdown types for the component calculators.

use jyotish_base::{DivisionalDignities, Graha, Positions};
use serde::Serialize;

/// Chart data shared by every component calculator.
#[derive(Debug, Clone, Copy)]
pub struct StrengthInputs<'a> {
    /// Julian day of the chart moment.
    pub jd: f64,
    pub positions: &'a Positions,
    /// Daily motion in deg/day, indexed by `Graha::index()`. Negative = retrograde.
    pub speeds: &'a [f64; 9],
    pub dignities: &'a DivisionalDignities,
}

impl<'a> StrengthInputs<'a> {
    pub fn speed(&self, graha: Graha) -> f64 {
        self.speeds[graha.index() as usize]
    }
}

/// Sthana Bala breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SthanaBalaBreakdown {
    pub uchcha: f64,
    pub saptavargaja: f64,
    pub oja_yugma: f64,
    pub dig: f64,
    pub kendradi: f64,
    /// Unclamped sum of the five parts.
    pub raw_total: f64,
    /// `raw_total` clamped to [0, 60].
    pub total: f64,
}

/// Kala Bala breakdown; `total` is the weighted blend.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct KalaBalaBreakdown {
    pub natonnata: f64,
    pub paksha: f64,
    pub tribhaga: f64,
    pub varsha: f64,
    pub masa: f64,
    pub dina: f64,
    pub hora: f64,
    pub ayana: f64,
    pub total: f64,
}

/// Avastha Bala breakdown: the three multipliers and the scaled result.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct AvasthaBalaBreakdown {
    pub baladi: f64,
    pub jagradadi: f64,
    pub deeptadi: f64,
    pub total: f64,
}

/// Drik Bala: signed aspect score and its [0, 60] rescaling.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct DrikBalaBreakdown {
    /// Aspect score clamped to [-60, 60].
    pub signed: f64,
    /// `(signed + 60) / 2`.
    pub total: f64,
}
