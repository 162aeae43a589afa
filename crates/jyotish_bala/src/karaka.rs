//! Jaimini Chara Karakas.
//!
//! Grahas are ranked by degrees travelled within their sign, highest first.
//! Rahu moves backwards, so its degree is counted from the end of the sign
//! (`30 - deg`). Ketu never takes a karaka.

use jyotish_base::util::{degrees_in_sign, is_valid_longitude};
use jyotish_base::{Graha, JyotishError, Positions, SAPTA_GRAHAS};
use log::debug;
use serde::{Serialize, Serializer};

use crate::config::KarakaConfig;

/// Chara karaka roles, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Karaka {
    Atma,
    Amatya,
    Bhratri,
    Matri,
    Pitri,
    Putra,
    Gnati,
    Dara,
}

/// Eight-karaka scheme (Rahu included).
pub const EIGHT_KARAKAS: [Karaka; 8] = [
    Karaka::Atma,
    Karaka::Amatya,
    Karaka::Bhratri,
    Karaka::Matri,
    Karaka::Pitri,
    Karaka::Putra,
    Karaka::Gnati,
    Karaka::Dara,
];

/// Seven-karaka scheme; Pitri is read from the Matri karaka.
pub const SEVEN_KARAKAS: [Karaka; 7] = [
    Karaka::Atma,
    Karaka::Amatya,
    Karaka::Bhratri,
    Karaka::Matri,
    Karaka::Putra,
    Karaka::Gnati,
    Karaka::Dara,
];

impl Karaka {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Atma => "Atmakaraka",
            Self::Amatya => "Amatyakaraka",
            Self::Bhratri => "Bhratrikaraka",
            Self::Matri => "Matrikaraka",
            Self::Pitri => "Pitrikaraka",
            Self::Putra => "Putrakaraka",
            Self::Gnati => "Gnatikaraka",
            Self::Dara => "Darakaraka",
        }
    }

    /// Common abbreviation (AK, AmK, ...).
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Atma => "AK",
            Self::Amatya => "AmK",
            Self::Bhratri => "BK",
            Self::Matri => "MK",
            Self::Pitri => "PiK",
            Self::Putra => "PK",
            Self::Gnati => "GK",
            Self::Dara => "DK",
        }
    }
}

impl Serialize for Karaka {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Degrees a graha has covered in its sign, in its direction of travel.
pub fn karaka_degree(graha: Graha, lon: f64) -> f64 {
    let deg = degrees_in_sign(lon);
    if graha == Graha::Rahu {
        30.0 - deg
    } else {
        deg
    }
}

/// Assign chara karakas from D1 longitudes.
///
/// Candidates are the seven classical grahas, plus Rahu when
/// `config.include_nodes` is set. Roles come from [`EIGHT_KARAKAS`] or
/// [`SEVEN_KARAKAS`] per `config.include_eighth`; surplus candidates get
/// no role and a short candidate list leaves the last roles unassigned.
/// Equal degrees go to the graha earlier in traditional order.
///
/// Every candidate must be placed with a valid longitude.
pub fn chara_karakas(
    positions: &Positions,
    config: &KarakaConfig,
) -> Result<Vec<(Karaka, Graha)>, JyotishError> {
    let mut candidates: Vec<(Graha, f64)> = Vec::with_capacity(8);
    let nodes: &[Graha] = if config.include_nodes {
        &[Graha::Rahu]
    } else {
        &[]
    };
    for &g in SAPTA_GRAHAS.iter().chain(nodes) {
        let lon = positions.require(g)?;
        if !is_valid_longitude(lon) {
            return Err(JyotishError::InvalidLongitude {
                body: g.english_name(),
                value: lon,
            });
        }
        candidates.push((g, karaka_degree(g, lon)));
    }

    // Stable: ties keep traditional graha order.
    candidates.sort_by(|a, b| b.1.total_cmp(&a.1));

    let roles: &[Karaka] = if config.include_eighth {
        &EIGHT_KARAKAS
    } else {
        &SEVEN_KARAKAS
    };
    let assigned: Vec<(Karaka, Graha)> = roles
        .iter()
        .zip(&candidates)
        .map(|(&k, &(g, _))| (k, g))
        .collect();
    debug!(
        "Chara karakas: {}",
        assigned
            .iter()
            .map(|(k, g)| format!("{}={}", k.short_name(), g.english_name()))
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(assigned)
}

/// Graha holding `karaka`, if assigned.
pub fn karaka_of(assigned: &[(Karaka, Graha)], karaka: Karaka) -> Option<Graha> {
    assigned.iter().find(|(k, _)| *k == karaka).map(|&(_, g)| g)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    // Degrees in sign: Sun 29, Moon 5, Mars 18, Mercury 12, Jupiter 25,
    // Venus 2, Saturn 21, Rahu 10 (counts as 20).
    fn chart() -> Positions {
        Positions::new()
            .with(Graha::Surya, 29.0)
            .with(Graha::Chandra, 95.0)
            .with(Graha::Mangal, 228.0)
            .with(Graha::Buddh, 42.0)
            .with(Graha::Guru, 265.0)
            .with(Graha::Shukra, 302.0)
            .with(Graha::Shani, 171.0)
            .with(Graha::Rahu, 130.0)
            .with_ascendant(10.0)
    }

    #[test]
    fn eight_karakas_by_degree() {
        let k = chara_karakas(&chart(), &KarakaConfig::default()).unwrap();
        assert_eq!(
            k,
            vec![
                (Karaka::Atma, Graha::Surya),
                (Karaka::Amatya, Graha::Guru),
                (Karaka::Bhratri, Graha::Shani),
                (Karaka::Matri, Graha::Rahu),
                (Karaka::Pitri, Graha::Mangal),
                (Karaka::Putra, Graha::Buddh),
                (Karaka::Gnati, Graha::Chandra),
                (Karaka::Dara, Graha::Shukra),
            ]
        );
    }

    #[test]
    fn seven_scheme_without_nodes() {
        let config = KarakaConfig {
            include_nodes: false,
            include_eighth: false,
        };
        let k = chara_karakas(&chart(), &config).unwrap();
        assert_eq!(k.len(), 7);
        assert_eq!(karaka_of(&k, Karaka::Matri), Some(Graha::Mangal));
        assert_eq!(karaka_of(&k, Karaka::Pitri), None);
        assert_eq!(karaka_of(&k, Karaka::Dara), Some(Graha::Shukra));
        assert!(k.iter().all(|(_, g)| !g.is_node()));
    }

    #[test]
    fn seven_roles_with_rahu_drop_the_lowest() {
        let config = KarakaConfig {
            include_nodes: true,
            include_eighth: false,
        };
        let k = chara_karakas(&chart(), &config).unwrap();
        assert_eq!(k.len(), 7);
        assert_eq!(karaka_of(&k, Karaka::Matri), Some(Graha::Rahu));
        assert_eq!(karaka_of(&k, Karaka::Dara), Some(Graha::Chandra));
        assert!(!k.iter().any(|(_, g)| *g == Graha::Shukra));
    }

    #[test]
    fn rahu_counts_backwards() {
        assert!((karaka_degree(Graha::Rahu, 130.0) - 20.0).abs() < EPS);
        assert!((karaka_degree(Graha::Rahu, 121.0) - 29.0).abs() < EPS);
        assert!((karaka_degree(Graha::Shani, 121.0) - 1.0).abs() < EPS);
        // Rahu early in its sign outranks everyone.
        let p = chart().with(Graha::Rahu, 0.5);
        let k = chara_karakas(&p, &KarakaConfig::default()).unwrap();
        assert_eq!(karaka_of(&k, Karaka::Atma), Some(Graha::Rahu));
        assert_eq!(karaka_of(&k, Karaka::Amatya), Some(Graha::Surya));
    }

    #[test]
    fn equal_degrees_go_to_earlier_graha() {
        // Moon and Saturn both at 21 deg in sign.
        let p = chart().with(Graha::Chandra, 111.0);
        for _ in 0..5 {
            let k = chara_karakas(&p, &KarakaConfig::default()).unwrap();
            assert_eq!(karaka_of(&k, Karaka::Bhratri), Some(Graha::Chandra));
            assert_eq!(karaka_of(&k, Karaka::Matri), Some(Graha::Shani));
        }
    }

    #[test]
    fn missing_or_invalid_candidate_fails() {
        let mut p = Positions::new().with(Graha::Surya, 10.0).with_ascendant(0.0);
        assert_eq!(
            chara_karakas(&p, &KarakaConfig::default()),
            Err(JyotishError::MissingData(Graha::Chandra))
        );
        p = chart().with(Graha::Guru, 361.0);
        assert!(matches!(
            chara_karakas(&p, &KarakaConfig::default()),
            Err(JyotishError::InvalidLongitude { .. })
        ));
    }

    #[test]
    fn serializes_as_full_name() {
        let json = serde_json::to_string(&(Karaka::Atma, Graha::Surya)).unwrap();
        assert_eq!(json, r#"["Atmakaraka","Sun"]"#);
    }
}
