//! Dignity & state classification of a single graha.
//!
//! Combines proximity to the Sun, closeness to the exaltation or
//! debilitation point, and the sign-level dignity into one multiplier.
//!
//! Primary checks run in order combust → exalted → debilitated. The last
//! one that fires names the primary state, while every fired check
//! contributes its multiplier.

use crate::chart::Positions;
use crate::combustion::is_combust;
use crate::error::JyotishError;
use crate::graha::Graha;
use crate::graha_relationships::{
    SignRelation, debilitation_degree, exaltation_degree, moolatrikona_range, own_signs,
    sign_relationship,
};
use crate::util::{angular_distance, degrees_in_sign, is_valid_longitude, sign_index};
use crate::varga::{DivisionalDignities, Varga};

/// Orb around the exaltation and debilitation points.
pub const EXALTATION_ORB: f64 = 3.0;

const COMBUST_MULTIPLIER: f64 = 0.25;
const EXALTED_MULTIPLIER: f64 = 1.5;
const DEBILITATED_MULTIPLIER: f64 = 0.5;

/// Instantaneous condition that overrides sign dignity in labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimaryState {
    Combust,
    Exalted,
    Debilitated,
}

impl PrimaryState {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Combust => "Combust",
            Self::Exalted => "Exalted",
            Self::Debilitated => "Debilitated",
        }
    }
}

/// Sign-level dignity of a graha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignDignity {
    Normal,
    Moolatrikona,
    OwnSign,
    Vargottama,
    Friendly,
    Neutral,
    Enemy,
}

impl SignDignity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Moolatrikona => "Moolatrikona",
            Self::OwnSign => "Own Sign",
            Self::Vargottama => "Vargottama",
            Self::Friendly => "Friendly",
            Self::Neutral => "Neutral",
            Self::Enemy => "Enemy",
        }
    }

    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Normal | Self::Neutral => 1.0,
            Self::Moolatrikona => 1.4,
            Self::OwnSign => 1.3,
            Self::Vargottama => 1.35,
            Self::Friendly => 1.2,
            Self::Enemy => 0.8,
        }
    }
}

/// Result of [`planet_state`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetState {
    /// Last primary check that fired, if any.
    pub primary: Option<PrimaryState>,
    pub combust: bool,
    pub exalted: bool,
    pub debilitated: bool,
    pub sign_dignity: SignDignity,
    /// Product of every applicable multiplier.
    pub multiplier: f64,
}

impl PlanetState {
    /// State used when a longitude is unavailable.
    pub const NEUTRAL: PlanetState = PlanetState {
        primary: None,
        combust: false,
        exalted: false,
        debilitated: false,
        sign_dignity: SignDignity::Normal,
        multiplier: 1.0,
    };

    /// "Exalted, Own Sign" or just "Own Sign".
    pub fn combined_label(&self) -> String {
        match self.primary {
            Some(p) => format!("{}, {}", p.label(), self.sign_dignity.label()),
            None => self.sign_dignity.label().to_string(),
        }
    }
}

/// Classify a graha from its longitude in `positions`.
///
/// A missing longitude yields [`PlanetState::NEUTRAL`]; an out-of-range
/// longitude is an error.
pub fn planet_state(
    graha: Graha,
    positions: &Positions,
    dignities: &DivisionalDignities,
) -> Result<PlanetState, JyotishError> {
    let Some(lon) = positions.get(graha) else {
        return Ok(PlanetState::NEUTRAL);
    };
    if !is_valid_longitude(lon) {
        return Err(JyotishError::InvalidLongitude {
            body: graha.english_name(),
            value: lon,
        });
    }

    let mut state = PlanetState::NEUTRAL;

    let sun = positions.get(Graha::Surya);
    if sun.is_some_and(|sun| is_combust(graha, lon, sun)) {
        state.combust = true;
        state.primary = Some(PrimaryState::Combust);
        state.multiplier *= COMBUST_MULTIPLIER;
    }
    if angular_distance(lon, exaltation_degree(graha)) <= EXALTATION_ORB {
        state.exalted = true;
        state.primary = Some(PrimaryState::Exalted);
        state.multiplier *= EXALTED_MULTIPLIER;
    }
    if angular_distance(lon, debilitation_degree(graha)) <= EXALTATION_ORB {
        state.debilitated = true;
        state.primary = Some(PrimaryState::Debilitated);
        state.multiplier *= DEBILITATED_MULTIPLIER;
    }

    state.sign_dignity = sign_dignity(graha, lon, dignities);
    state.multiplier *= state.sign_dignity.multiplier();
    Ok(state)
}

/// Sign dignity: moolatrikona, own sign, vargottama, then the sign table.
pub fn sign_dignity(graha: Graha, lon: f64, dignities: &DivisionalDignities) -> SignDignity {
    let sign = sign_index(lon);
    let deg = degrees_in_sign(lon);

    if let Some((mt_sign, start, end)) = moolatrikona_range(graha) {
        if sign == mt_sign && (start..=end).contains(&deg) {
            return SignDignity::Moolatrikona;
        }
    }
    if own_signs(graha).contains(&sign) {
        return SignDignity::OwnSign;
    }
    let d1 = dignities.get(graha, Varga::D1);
    if d1.is_some() && d1 == dignities.get(graha, Varga::D9) {
        return SignDignity::Vargottama;
    }
    match sign_relationship(graha, sign) {
        SignRelation::Friendly => SignDignity::Friendly,
        SignRelation::Neutral => SignDignity::Neutral,
        SignRelation::Enemy => SignDignity::Enemy,
    }
}
