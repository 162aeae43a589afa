//! Graha dignity tables and natural classification.
//!
//! Provides exaltation/debilitation points, moolatrikona ranges, own-sign
//! ownership, the planet-to-sign relationship table and the natural
//! benefic/malefic split used by aspect and yoga rules.
//!
//! Clean-room implementation from BPHS.

use crate::graha::Graha;

// ---------------------------------------------------------------------------
// 1a. Exaltation & Debilitation
// ---------------------------------------------------------------------------

/// Exaltation point (sidereal degrees) for all 9 grahas.
///
/// Sun 10 Ari=10, Moon 3 Tau=33, Mars 28 Cap=298, Mercury 15 Vir=165,
/// Jupiter 5 Can=95, Venus 27 Pis=357, Saturn 20 Lib=200,
/// Rahu 15 Tau=45, Ketu 15 Sco=225.
pub const fn exaltation_degree(graha: Graha) -> f64 {
    match graha {
        Graha::Surya => 10.0,
        Graha::Chandra => 33.0,
        Graha::Mangal => 298.0,
        Graha::Buddh => 165.0,
        Graha::Guru => 95.0,
        Graha::Shukra => 357.0,
        Graha::Shani => 200.0,
        Graha::Rahu => 45.0,
        Graha::Ketu => 225.0,
    }
}

/// Debilitation point = exaltation + 180 mod 360.
pub const fn debilitation_degree(graha: Graha) -> f64 {
    let d = exaltation_degree(graha) + 180.0;
    if d >= 360.0 { d - 360.0 } else { d }
}

// ---------------------------------------------------------------------------
// 1a cont. Moolatrikona
// ---------------------------------------------------------------------------

/// Moolatrikona range: (rashi_index, start_deg_in_rashi, end_deg_in_rashi), both bounds inclusive.
/// Returns None for Rahu/Ketu.
///
/// Sun 0-20 Leo, Moon 3-30 Tau, Mars 0-12 Ari, Mercury 15-20 Vir,
/// Jupiter 0-10 Sag, Venus 0-15 Lib, Saturn 0-20 Aqu.
pub const fn moolatrikona_range(graha: Graha) -> Option<(u8, f64, f64)> {
    match graha {
        Graha::Surya => Some((4, 0.0, 20.0)),
        Graha::Chandra => Some((1, 3.0, 30.0)),
        Graha::Mangal => Some((0, 0.0, 12.0)),
        Graha::Buddh => Some((5, 15.0, 20.0)),
        Graha::Guru => Some((8, 0.0, 10.0)),
        Graha::Shukra => Some((6, 0.0, 15.0)),
        Graha::Shani => Some((10, 0.0, 20.0)),
        Graha::Rahu | Graha::Ketu => None,
    }
}

// ---------------------------------------------------------------------------
// 1a cont. Own Signs
// ---------------------------------------------------------------------------

/// Own-sign rashis (0-based). Empty for Rahu/Ketu.
pub fn own_signs(graha: Graha) -> &'static [u8] {
    match graha {
        Graha::Surya => &[4],
        Graha::Chandra => &[3],
        Graha::Mangal => &[0, 7],
        Graha::Buddh => &[2, 5],
        Graha::Guru => &[8, 11],
        Graha::Shukra => &[1, 6],
        Graha::Shani => &[9, 10],
        Graha::Rahu | Graha::Ketu => &[],
    }
}

// ---------------------------------------------------------------------------
// 1b. Planet-to-sign relationship
// ---------------------------------------------------------------------------

/// Relationship of a graha with the sign it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignRelation {
    Friendly,
    Neutral,
    Enemy,
}

/// Friendly/neutral/enemy standing of a graha in a rashi (0-based index).
///
/// Every graha has an entry for all 12 signs; indices >= 12 wrap.
pub fn sign_relationship(graha: Graha, rashi_index: u8) -> SignRelation {
    use SignRelation::*;
    // Mesha .. Meena
    const SUN: [SignRelation; 12] = [
        Friendly, Neutral, Enemy, Friendly, Friendly, Enemy, Neutral, Friendly, Friendly,
        Neutral, Neutral, Friendly,
    ];
    const MOON: [SignRelation; 12] = [
        Neutral, Neutral, Friendly, Friendly, Friendly, Friendly, Neutral, Neutral, Neutral,
        Neutral, Neutral, Neutral,
    ];
    const MARS: [SignRelation; 12] = [
        Friendly, Enemy, Neutral, Neutral, Friendly, Neutral, Enemy, Friendly, Friendly, Enemy,
        Enemy, Friendly,
    ];
    const MERCURY: [SignRelation; 12] = [
        Neutral, Friendly, Friendly, Enemy, Enemy, Friendly, Friendly, Neutral, Neutral, Enemy,
        Neutral, Neutral,
    ];
    const JUPITER: [SignRelation; 12] = [
        Friendly, Neutral, Enemy, Friendly, Friendly, Enemy, Neutral, Friendly, Friendly, Enemy,
        Enemy, Friendly,
    ];
    const VENUS: [SignRelation; 12] = [
        Enemy, Friendly, Friendly, Enemy, Enemy, Friendly, Friendly, Enemy, Neutral, Friendly,
        Friendly, Neutral,
    ];
    const SATURN: [SignRelation; 12] = [
        Enemy, Friendly, Neutral, Enemy, Enemy, Neutral, Friendly, Enemy, Enemy, Friendly,
        Friendly, Enemy,
    ];
    const NODES: [SignRelation; 12] = [
        Enemy, Friendly, Neutral, Enemy, Enemy, Neutral, Friendly, Enemy, Neutral, Friendly,
        Friendly, Neutral,
    ];

    let table = match graha {
        Graha::Surya => &SUN,
        Graha::Chandra => &MOON,
        Graha::Mangal => &MARS,
        Graha::Buddh => &MERCURY,
        Graha::Guru => &JUPITER,
        Graha::Shukra => &VENUS,
        Graha::Shani => &SATURN,
        Graha::Rahu | Graha::Ketu => &NODES,
    };
    table[(rashi_index % 12) as usize]
}

// ---------------------------------------------------------------------------
// 1c. Benefic / Malefic
// ---------------------------------------------------------------------------

/// Natural benefic/malefic classification used by aspects and yogas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeneficNature {
    Benefic,
    Malefic,
    /// Mercury takes on the nature of its associates.
    Neutral,
}

/// Jupiter, Venus and Moon are benefic; Sun, Mars, Saturn and the nodes
/// are malefic; Mercury is neutral.
pub const fn natural_benefic_malefic(graha: Graha) -> BeneficNature {
    match graha {
        Graha::Guru | Graha::Shukra | Graha::Chandra => BeneficNature::Benefic,
        Graha::Surya | Graha::Mangal | Graha::Shani | Graha::Rahu | Graha::Ketu => {
            BeneficNature::Malefic
        }
        Graha::Buddh => BeneficNature::Neutral,
    }
}

/// Natural benefics in the order aspect checks walk them.
pub const BENEFICS: [Graha; 3] = [Graha::Guru, Graha::Shukra, Graha::Chandra];

/// Natural malefics in the order aspect checks walk them.
pub const MALEFICS: [Graha; 5] = [
    Graha::Surya,
    Graha::Mangal,
    Graha::Shani,
    Graha::Ketu,
    Graha::Rahu,
];

pub const fn is_benefic(graha: Graha) -> bool {
    matches!(natural_benefic_malefic(graha), BeneficNature::Benefic)
}

pub const fn is_malefic(graha: Graha) -> bool {
    matches!(natural_benefic_malefic(graha), BeneficNature::Malefic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graha::{ALL_GRAHAS, SAPTA_GRAHAS};

    #[test]
    fn debilitation_opposite_exaltation() {
        for g in ALL_GRAHAS {
            let e = exaltation_degree(g);
            let d = debilitation_degree(g);
            let diff = (d - e).rem_euclid(360.0);
            assert!((diff - 180.0).abs() < 1e-10, "{}", g.name());
        }
    }

    #[test]
    fn node_exaltation_points() {
        assert!((exaltation_degree(Graha::Rahu) - 45.0).abs() < 1e-10);
        assert!((debilitation_degree(Graha::Rahu) - 225.0).abs() < 1e-10);
        assert!((debilitation_degree(Graha::Ketu) - 45.0).abs() < 1e-10);
    }

    #[test]
    fn moolatrikona_only_for_sapta() {
        for g in SAPTA_GRAHAS {
            assert!(moolatrikona_range(g).is_some(), "{}", g.name());
        }
        assert!(moolatrikona_range(Graha::Rahu).is_none());
        assert!(moolatrikona_range(Graha::Ketu).is_none());
    }

    #[test]
    fn moolatrikona_sign_is_an_own_sign_or_exaltation_sign() {
        for g in SAPTA_GRAHAS {
            let (sign, _, _) = moolatrikona_range(g).unwrap();
            let exalt_sign = (exaltation_degree(g) / 30.0).floor() as u8;
            assert!(
                own_signs(g).contains(&sign) || sign == exalt_sign,
                "{}",
                g.name()
            );
        }
    }

    #[test]
    fn own_signs_are_friendly() {
        for g in SAPTA_GRAHAS {
            for &s in own_signs(g) {
                assert_eq!(sign_relationship(g, s), SignRelation::Friendly, "{} in {s}", g.name());
            }
        }
    }

    #[test]
    fn sign_table_spot_checks() {
        assert_eq!(sign_relationship(Graha::Surya, 2), SignRelation::Enemy);
        assert_eq!(sign_relationship(Graha::Chandra, 7), SignRelation::Neutral);
        assert_eq!(sign_relationship(Graha::Buddh, 4), SignRelation::Enemy);
        assert_eq!(sign_relationship(Graha::Shani, 8), SignRelation::Enemy);
        assert_eq!(sign_relationship(Graha::Ketu, 9), SignRelation::Friendly);
    }

    #[test]
    fn moon_has_no_enemy_sign() {
        for s in 0..12 {
            assert_ne!(sign_relationship(Graha::Chandra, s), SignRelation::Enemy);
        }
    }

    #[test]
    fn benefic_malefic_partition() {
        for g in ALL_GRAHAS {
            assert!(!(is_benefic(g) && is_malefic(g)), "{}", g.name());
        }
        assert!(!is_benefic(Graha::Buddh) && !is_malefic(Graha::Buddh));
        assert_eq!(BENEFICS.len() + MALEFICS.len() + 1, ALL_GRAHAS.len());
    }
}
