//! Yoga detection engine.
//!
//! This crate provides:
//! - A derived chart view (houses, lords, conjunctions, aspects)
//! - A name-keyed table of classical yoga conditions
//! - The static yoga definition table
//! - Parallel detection with a Shadbala-based strength estimate per yoga
//!
//! Clean-room implementation from classical combinations (BPHS, Phaladeepika).

pub mod chart_state;
pub mod condition;
pub mod config;
pub mod detect;
pub mod error;
pub mod yoga_strength;
pub mod yoga_table;

pub use chart_state::{AspectTarget, ChartState, KENDRA, TRIKONA, YogaInputs, nth_house_from};
pub use condition::{
    ConditionFn, condition_display, condition_names, evaluate_condition, is_known_condition,
};
pub use config::{EstimatorThresholds, YogaConfig};
pub use detect::{DetectedYoga, detect_yogas, met_conditions, sort_by_strength};
pub use error::ConditionError;
pub use yoga_strength::{
    InvolvementTier, StrengthLabel, YogaDiagnostics, estimate_yoga_strength, involved_planets,
};
pub use yoga_table::{PlanetSelector, YOGA_COUNT, YOGA_DEFINITIONS, YogaDefinition, yoga_definition};
