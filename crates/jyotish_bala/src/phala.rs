//! Ishta and Kashta Phala (benefic and malefic potential).
//!
//! Ishta starts from `uchcha * cheshta / 100` and is shaped by dignity,
//! state, natural temperament, closeness to the Sun and retrogression.
//! Kashta is the complement to 60.

use jyotish_base::{Graha, PlanetState, round2};
use serde::Serialize;

use crate::config::PhalaWeights;

/// Ishta + Kashta always sums to this.
pub const PHALA_TOTAL: f64 = 60.0;

/// Ishta/Kashta pair for one graha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Phala {
    pub ishta: f64,
    pub kashta: f64,
}

/// Penalty for closeness to the Sun: <3 deg → 0.3, <6 deg → 0.6.
///
/// Mercury, when combust, never drops below 0.7.
pub fn combustion_penalty(graha: Graha, sun_distance: f64, combust: bool) -> f64 {
    if matches!(graha, Graha::Surya | Graha::Rahu | Graha::Ketu) {
        return 1.0;
    }
    let mut factor: f64 = if sun_distance < 3.0 {
        0.3
    } else if sun_distance < 6.0 {
        0.6
    } else {
        1.0
    };
    if graha == Graha::Buddh && combust {
        factor = factor.max(0.7);
    }
    factor
}

/// Ishta/Kashta for a graha from its Uchcha and Cheshta Bala.
pub fn ishta_kashta(
    graha: Graha,
    uchcha: f64,
    cheshta: f64,
    state: &PlanetState,
    sun_distance: Option<f64>,
    speed: f64,
    weights: &PhalaWeights,
) -> Phala {
    let mut ishta = uchcha * cheshta / 100.0;
    ishta *= weights.dignity_factor(state.sign_dignity);
    ishta *= weights.state_factor(state.primary);
    ishta *= weights.nature_factor(graha);
    if let Some(d) = sun_distance {
        ishta *= combustion_penalty(graha, d, state.combust);
    }
    if speed < 0.0 && !matches!(graha, Graha::Surya | Graha::Chandra) {
        ishta *= weights.retrograde;
    }

    let ishta = round2(ishta.clamp(0.0, PHALA_TOTAL));
    let kashta = round2(PHALA_TOTAL - ishta);
    let residual = PHALA_TOTAL - (ishta + kashta);
    Phala {
        ishta: ishta + residual / 2.0,
        kashta: kashta + residual / 2.0,
    }
}
