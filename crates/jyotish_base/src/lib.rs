//! Core chart vocabulary for Vedic strength and yoga analysis.
//!
//! This crate provides:
//! - Grahas, rashis and sign lordship
//! - Dignity tables (exaltation, moolatrikona, own signs, sign relationships)
//! - Combustion and aspect geometry
//! - Chart positions, whole-sign houses and house lords
//! - Divisional dignities and the dignity & state classifier
//! - Baladi / Jagradadi / Deeptadi avasthas
//!
//! All implementations are clean-room, derived from BPHS conventions.

pub mod avastha;
pub mod chart;
pub mod combustion;
pub mod drishti;
pub mod error;
pub mod graha;
pub mod graha_relationships;
pub mod planet_state;
pub mod rashi;
pub mod util;
pub mod varga;

pub use avastha::{
    BALADI_SEGMENT_FACTORS, BaladiAvastha, DeeptadiAvastha, JagradadiAvastha,
    baladi_avastha, baladi_segment, deeptadi_avastha, jagradadi_avastha,
};
pub use chart::{HouseLords, Positions, house_number, is_daytime};
pub use combustion::{combustion_threshold, is_combust};
pub use drishti::{aspect_houses, aspect_point, aspect_points, casts_aspect};
pub use error::JyotishError;
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS, rashi_lord, rashi_lord_by_index};
pub use graha_relationships::{
    BENEFICS, BeneficNature, MALEFICS, SignRelation, debilitation_degree, exaltation_degree,
    is_benefic, is_malefic, moolatrikona_range, natural_benefic_malefic, own_signs,
    sign_relationship,
};
pub use planet_state::{EXALTATION_ORB, PlanetState, PrimaryState, SignDignity, planet_state};
pub use rashi::{ALL_RASHIS, Rashi, RashiInfo, rashi_from_longitude};
pub use util::{angular_distance, normalize_360, round2};
pub use varga::{DignityLabel, DivisionalDignities, SAPTAVARGA, Varga};
