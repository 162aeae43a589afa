//! Graha drishti (planetary aspect) geometry.
//!
//! Every graha aspects the 7th house from itself. Mars, Jupiter, Saturn
//! and the nodes carry additional special aspects. A house aspect `n`
//! lands `(n - 1) * 30` degrees ahead of the caster.

use crate::graha::Graha;
use crate::util::{angular_distance, normalize_360};

/// House aspects cast by a graha (1-based house count from the graha).
pub const fn aspect_houses(graha: Graha) -> &'static [u8] {
    match graha {
        Graha::Surya | Graha::Chandra | Graha::Buddh | Graha::Shukra => &[7],
        Graha::Mangal => &[4, 7, 8],
        Graha::Guru => &[5, 7, 9],
        Graha::Shani => &[3, 7, 10],
        Graha::Rahu | Graha::Ketu => &[3, 7, 11],
    }
}

/// Longitude where the `house`-th aspect from `caster_lon` falls.
pub fn aspect_point(caster_lon: f64, house: u8) -> f64 {
    normalize_360(caster_lon + (house as f64 - 1.0) * 30.0)
}

/// Whether `caster` at `caster_lon` aspects the point `target_lon` within `orb` degrees.
pub fn casts_aspect(caster: Graha, caster_lon: f64, target_lon: f64, orb: f64) -> bool {
    aspect_houses(caster)
        .iter()
        .any(|&h| angular_distance(aspect_point(caster_lon, h), target_lon) <= orb)
}

/// All aspect points of a graha, in the order of [`aspect_houses`].
pub fn aspect_points(caster: Graha, caster_lon: f64) -> Vec<f64> {
    aspect_houses(caster)
        .iter()
        .map(|&h| aspect_point(caster_lon, h))
        .collect()
}
