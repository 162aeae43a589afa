//! Shared angle helpers.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Shortest arc between two ecliptic longitudes, in [0, 180].
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let diff = (normalize_360(a) - normalize_360(b)).abs();
    if diff > 180.0 { 360.0 - diff } else { diff }
}

/// 0-based sign index (0 = Mesha) of a longitude.
pub fn sign_index(lon: f64) -> u8 {
    ((normalize_360(lon) / 30.0).floor() as u8).min(11)
}

/// Degrees elapsed inside the sign, [0, 30).
pub fn degrees_in_sign(lon: f64) -> f64 {
    normalize_360(lon) % 30.0
}

/// True when `lon` lies in [0, 360) and is finite.
pub fn is_valid_longitude(lon: f64) -> bool {
    lon.is_finite() && (0.0..360.0).contains(&lon)
}

/// Round to two decimals, the precision used for all reported virupas.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero() {
        assert!((normalize_360(0.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_360_wraps() {
        assert!((normalize_360(360.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_large() {
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn distance_wraps_through_zero() {
        assert!((angular_distance(355.0, 5.0) - 10.0).abs() < 1e-10);
        assert!((angular_distance(5.0, 355.0) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn distance_opposition() {
        assert!((angular_distance(10.0, 190.0) - 180.0).abs() < 1e-10);
    }

    #[test]
    fn sign_index_boundaries() {
        assert_eq!(sign_index(0.0), 0);
        assert_eq!(sign_index(29.999), 0);
        assert_eq!(sign_index(30.0), 1);
        assert_eq!(sign_index(359.99), 11);
        assert_eq!(sign_index(-0.5), 11);
    }

    #[test]
    fn longitude_validity() {
        assert!(is_valid_longitude(0.0));
        assert!(is_valid_longitude(359.999));
        assert!(!is_valid_longitude(360.0));
        assert!(!is_valid_longitude(-1.0));
        assert!(!is_valid_longitude(f64::NAN));
    }

    #[test]
    fn rounding() {
        assert!((round2(12.3456) - 12.35).abs() < 1e-12);
        assert!((round2(-0.004) - 0.0).abs() < 1e-12);
    }
}
