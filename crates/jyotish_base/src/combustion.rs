//! Combustion (Asta) detection for grahas.
//!
//! A graha is combust when it is too close to the Sun.

use crate::graha::Graha;
use crate::util::angular_distance;

/// Combustion orb (degrees from Sun) for a graha.
///
/// Returns `None` for Sun, Rahu, and Ketu (not applicable).
pub const fn combustion_threshold(graha: Graha) -> Option<f64> {
    match graha {
        Graha::Surya | Graha::Rahu | Graha::Ketu => None,
        Graha::Chandra => Some(11.0),
        Graha::Mangal => Some(17.0),
        Graha::Buddh => Some(14.0),
        Graha::Guru => Some(11.0),
        Graha::Shukra => Some(10.0),
        Graha::Shani => Some(8.0),
    }
}

/// Check if a single graha is combust.
///
/// A graha at exactly the threshold distance **is** combust (inclusive).
/// Returns `false` for Sun, Rahu, and Ketu.
pub fn is_combust(graha: Graha, graha_lon: f64, sun_lon: f64) -> bool {
    match combustion_threshold(graha) {
        Some(t) => angular_distance(graha_lon, sun_lon) <= t,
        None => false,
    }
}
