//! Shadbala strength engine.
//!
//! This crate provides:
//! - The six strength components (Sthana, Cheshta, Dig, Kala, Avastha, Drik)
//! - Ishta and Kashta Phala
//! - A parallel aggregator that ranks every graha of a chart
//! - Jaimini Chara Karakas
//!
//! Clean-room implementation from BPHS conventions.

pub mod config;
pub mod karaka;
pub mod phala;
pub mod shadbala;
pub mod shadbala_types;
pub mod strength;
pub mod strength_types;

pub use config::{KarakaConfig, NodeDigBala, PhalaWeights, StrengthConfig};
pub use karaka::{
    EIGHT_KARAKAS, Karaka, SEVEN_KARAKAS, chara_karakas, karaka_degree, karaka_of,
};
pub use phala::{PHALA_TOTAL, Phala, combustion_penalty, ishta_kashta};
pub use shadbala::{
    DIG_BALA_BHAVA, MAX_COMPONENT, avastha_bala, cheshta_bala, dig_bala, drik_bala,
    graha_dig_bala, kala_bala, sthana_bala,
};
pub use shadbala_types::{
    AvasthaBalaBreakdown, DrikBalaBreakdown, KalaBalaBreakdown, SthanaBalaBreakdown,
    StrengthInputs,
};
pub use strength::{compute_strengths, graha_strength, rank_rows};
pub use strength_types::{
    ALL_COMPONENTS, GrahaBreakdown, MAX_SHADBALA, StrengthBreakdown, StrengthComponent,
    StrengthReport, StrengthRow,
};
