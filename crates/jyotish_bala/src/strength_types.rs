//! Aggregated strength output: ranked rows and the per-component breakdown.

use jyotish_base::Graha;
use serde::Serialize;

use crate::shadbala_types::{
    AvasthaBalaBreakdown, DrikBalaBreakdown, KalaBalaBreakdown, SthanaBalaBreakdown,
};

/// Maximum Shadbala per graha (six components x 60 virupas).
pub const MAX_SHADBALA: f64 = 360.0;

/// The six strength components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum StrengthComponent {
    Sthana,
    Cheshta,
    Dig,
    Kala,
    Avastha,
    Drik,
}

pub const ALL_COMPONENTS: [StrengthComponent; 6] = [
    StrengthComponent::Sthana,
    StrengthComponent::Cheshta,
    StrengthComponent::Dig,
    StrengthComponent::Kala,
    StrengthComponent::Avastha,
    StrengthComponent::Drik,
];

impl StrengthComponent {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sthana => "Sthana",
            Self::Cheshta => "Cheshta",
            Self::Dig => "Dig",
            Self::Kala => "Kala",
            Self::Avastha => "Avastha",
            Self::Drik => "Drik",
        }
    }
}

/// Every component of one graha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrahaBreakdown {
    pub graha: Graha,
    pub sthana: SthanaBalaBreakdown,
    pub cheshta: f64,
    pub dig: f64,
    pub kala: KalaBalaBreakdown,
    pub avastha: AvasthaBalaBreakdown,
    pub drik: DrikBalaBreakdown,
}

impl GrahaBreakdown {
    pub fn component(&self, c: StrengthComponent) -> f64 {
        match c {
            StrengthComponent::Sthana => self.sthana.total,
            StrengthComponent::Cheshta => self.cheshta,
            StrengthComponent::Dig => self.dig,
            StrengthComponent::Kala => self.kala.total,
            StrengthComponent::Avastha => self.avastha.total,
            StrengthComponent::Drik => self.drik.total,
        }
    }

    /// Shadbala: sum of the six components, in [0, 360].
    pub fn total(&self) -> f64 {
        ALL_COMPONENTS.iter().map(|&c| self.component(c)).sum()
    }
}

/// Component scores for every included graha, in computation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StrengthBreakdown {
    pub grahas: Vec<GrahaBreakdown>,
}

impl StrengthBreakdown {
    pub fn get(&self, graha: Graha) -> Option<&GrahaBreakdown> {
        self.grahas.iter().find(|b| b.graha == graha)
    }

    /// Score of one component for one graha.
    pub fn component(&self, c: StrengthComponent, graha: Graha) -> Option<f64> {
        self.get(graha).map(|b| b.component(c))
    }

    pub fn total(&self, graha: Graha) -> Option<f64> {
        self.get(graha).map(GrahaBreakdown::total)
    }

    pub fn contains(&self, graha: Graha) -> bool {
        self.get(graha).is_some()
    }
}

/// One ranked line of the strength table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrengthRow {
    pub graha: Graha,
    /// Dense rank, 1 = strongest.
    pub rank: usize,
    /// Shadbala in virupas.
    pub total: f64,
    /// `100 * total / 360`.
    pub percent: f64,
    pub ishta: f64,
    pub kashta: f64,
    /// Baladi status label (Child, Youth, Adult, Old, Dead).
    pub status: &'static str,
    /// Classifier label such as "Exalted, Own Sign".
    pub combined_state: String,
}

/// Output of [`crate::compute_strengths`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StrengthReport {
    /// Sorted by descending percent.
    pub rows: Vec<StrengthRow>,
    pub breakdown: StrengthBreakdown,
}

impl StrengthReport {
    pub fn row(&self, graha: Graha) -> Option<&StrengthRow> {
        self.rows.iter().find(|r| r.graha == graha)
    }
}
