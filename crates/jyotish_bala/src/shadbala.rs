//! Shadbala (six-fold planetary strength) component calculators.
//!
//! Pure math over chart data. Every component is clamped to [0, 60]
//! virupas and rounded to two decimals.
//!
//! The six components:
//! 1. Sthana Bala (positional): uchcha + saptavargaja + oja-yugma + dig + kendradi
//! 2. Cheshta Bala (motional)
//! 3. Dig Bala (directional)
//! 4. Kala Bala (temporal): natonnata, paksha, tribhaga, varsha, masa, dina, hora, ayana
//! 5. Avastha Bala (state): baladi, jagradadi, deeptadi
//! 6. Drik Bala (aspectual)
//!
//! Clean-room implementation from BPHS.

use std::f64::consts::PI;

use jyotish_base::util::{is_valid_longitude, sign_index};
use jyotish_base::{
    BALADI_SEGMENT_FACTORS, DignityLabel, DivisionalDignities, Graha, JyotishError, PlanetState,
    Positions, SAPTAVARGA, angular_distance, baladi_segment, casts_aspect, deeptadi_avastha,
    exaltation_degree, house_number, is_benefic, is_malefic, jagradadi_avastha,
    rashi_lord_by_index, round2,
};

use crate::config::NodeDigBala;
use crate::shadbala_types::{
    AvasthaBalaBreakdown, DrikBalaBreakdown, KalaBalaBreakdown, SthanaBalaBreakdown,
};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Upper bound of every component, in virupas.
pub const MAX_COMPONENT: f64 = 60.0;

/// Bhava of maximum directional strength for each sapta graha.
/// Sun=10, Moon=4, Mars=10, Mercury=1, Jupiter=1, Venus=4, Saturn=7.
pub const DIG_BALA_BHAVA: [u8; 7] = [10, 4, 10, 1, 1, 4, 7];

/// Orb for aspects counted by Drik Bala.
pub const DRIK_ASPECT_ORB: f64 = 3.0;

/// Orb for the ascendant and Moon proximity bonuses in Drik Bala.
pub const DRIK_PROXIMITY_ORB: f64 = 5.0;

/// Kala Bala blend weights: natonnata, paksha, tribhaga, varsha, masa, dina, hora, ayana.
pub const KALA_WEIGHTS: [f64; 8] = [0.30, 0.20, 0.15, 0.10, 0.10, 0.10, 0.05, 0.05];

/// Hora lords cycled by hour of the day fraction.
const HORA_SEQUENCE: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

fn finish(x: f64) -> f64 {
    round2(x.clamp(0.0, MAX_COMPONENT))
}

fn check_longitude(graha: Graha, lon: f64) -> Result<f64, JyotishError> {
    if is_valid_longitude(lon) {
        Ok(lon)
    } else {
        Err(JyotishError::InvalidLongitude {
            body: graha.english_name(),
            value: lon,
        })
    }
}

fn is_odd_sign(lon: f64) -> bool {
    sign_index(lon) % 2 == 0
}

fn sign_lord(lon: f64) -> Option<Graha> {
    rashi_lord_by_index(sign_index(lon))
}

// ---------------------------------------------------------------------------
// 1. Sthana Bala Sub-Components
// ---------------------------------------------------------------------------

/// Uchcha Bala: 60 * (1 - distance_from_exaltation / 180).
pub fn uchcha_bala(graha: Graha, lon: f64) -> f64 {
    finish(60.0 * (1.0 - angular_distance(lon, exaltation_degree(graha)) / 180.0))
}

/// Saptavargaja points for a dignity; a missing label counts as Neutral.
pub fn saptavargaja_points(label: Option<DignityLabel>) -> f64 {
    match label.unwrap_or(DignityLabel::Neutral) {
        DignityLabel::Exalted => 45.0,
        DignityLabel::Moolatrikona | DignityLabel::OwnSign => 30.0,
        DignityLabel::Friendly => 22.5,
        DignityLabel::Neutral => 15.0,
        DignityLabel::Enemy => 7.5,
        DignityLabel::Debilitated => 3.75,
    }
}

fn saptavargaja_of(graha: Graha, dignities: &DivisionalDignities) -> f64 {
    let sum: f64 = SAPTAVARGA
        .iter()
        .map(|&v| saptavargaja_points(dignities.get(graha, v)))
        .sum();
    let avg = sum / SAPTAVARGA.len() as f64;
    finish(avg * 60.0 / 45.0)
}

/// Saptavargaja Bala: average dignity points over D1, D2, D3, D7, D9, D12, D30,
/// scaled so that exaltation everywhere scores 60.
///
/// Nodes borrow half of their sign lord's score when the lord has dignity
/// data, else a flat 15.
pub fn saptavargaja_bala(graha: Graha, lon: f64, dignities: &DivisionalDignities) -> f64 {
    if !graha.is_node() {
        return saptavargaja_of(graha, dignities);
    }
    match sign_lord(lon) {
        Some(lord) if dignities.has_graha(lord) => finish(0.5 * saptavargaja_of(lord, dignities)),
        _ => 15.0,
    }
}

/// Oja-Yugma Bala: Moon and Venus gain in even signs, the other sapta
/// grahas in odd signs. Nodes score 0.
pub fn oja_yugma_bala(graha: Graha, lon: f64) -> f64 {
    let odd = is_odd_sign(lon);
    match graha {
        Graha::Chandra | Graha::Shukra if !odd => 15.0,
        Graha::Surya | Graha::Mangal | Graha::Buddh | Graha::Guru | Graha::Shani if odd => 15.0,
        _ => 0.0,
    }
}

/// Kendradi Bala: kendra 60, panaphara trines 45, 2/8/11 30, others 15.
pub fn kendradi_bala(bhava_number: u8) -> f64 {
    match bhava_number {
        1 | 4 | 7 | 10 => 60.0,
        5 | 9 => 45.0,
        2 | 8 | 11 => 30.0,
        _ => 15.0,
    }
}

/// Sthana Bala for a single graha.
///
/// Fails when the graha's longitude or the ascendant is missing or out of range.
pub fn sthana_bala(
    graha: Graha,
    positions: &Positions,
    dignities: &DivisionalDignities,
    node_policy: NodeDigBala,
) -> Result<SthanaBalaBreakdown, JyotishError> {
    let lon = check_longitude(graha, positions.require(graha)?)?;
    let asc = positions.require_ascendant()?;
    if !is_valid_longitude(asc) {
        return Err(JyotishError::InvalidLongitude {
            body: "Ascendant",
            value: asc,
        });
    }
    let bhava = house_number(lon, asc);

    let uchcha = uchcha_bala(graha, lon);
    let saptavargaja = saptavargaja_bala(graha, lon, dignities);
    let oja_yugma = oja_yugma_bala(graha, lon);
    let dig = graha_dig_bala(graha, lon, asc, node_policy);
    let kendradi = kendradi_bala(bhava);
    let raw_total = uchcha + saptavargaja + oja_yugma + dig + kendradi;

    Ok(SthanaBalaBreakdown {
        uchcha,
        saptavargaja,
        oja_yugma,
        dig,
        kendradi,
        raw_total,
        total: finish(raw_total),
    })
}

// ---------------------------------------------------------------------------
// 2. Cheshta Bala
// ---------------------------------------------------------------------------

/// Below this daily motion (deg/day) a graha counts as stationary.
pub const fn stationary_threshold(graha: Graha) -> f64 {
    match graha {
        Graha::Buddh => 0.15,
        Graha::Shukra => 0.25,
        Graha::Mangal => 0.08,
        Graha::Guru => 0.04,
        Graha::Shani => 0.02,
        _ => 0.1,
    }
}

/// Cheshta Bala from daily motion and elongation from the Sun.
///
/// Sun 0, nodes 30. The Moon peaks at 90 deg elongation. Other grahas:
/// stationary 60, retrograde 48..60, Mercury/Venus by elongation against
/// their maximum (46/48 deg), outer planets `45 * elong / 180`.
pub fn cheshta_bala(graha: Graha, speed: f64, elongation: f64) -> f64 {
    let value = match graha {
        Graha::Surya => 0.0,
        Graha::Chandra => 60.0 * (1.0 - (elongation - 90.0).abs() / 90.0),
        Graha::Rahu | Graha::Ketu => 30.0,
        _ if speed.abs() < stationary_threshold(graha) => 60.0,
        _ if speed < 0.0 => 60.0 * (0.8 + 0.2 * elongation / 180.0),
        Graha::Buddh => 60.0 * elongation.min(46.0) / 46.0,
        Graha::Shukra => 60.0 * elongation.min(48.0) / 48.0,
        _ => 60.0 * 0.75 * elongation / 180.0,
    };
    finish(value)
}

// ---------------------------------------------------------------------------
// 3. Dig Bala
// ---------------------------------------------------------------------------

/// Dig Bala: `60 * (cos(pi * d / 6) + 1) / 2`, d = shortest house distance
/// to the graha's strongest bhava. Returns 0 for nodes and invalid bhavas.
pub fn dig_bala(graha: Graha, bhava_number: u8) -> f64 {
    if graha.is_node() || !(1..=12).contains(&bhava_number) {
        return 0.0;
    }
    let best = DIG_BALA_BHAVA[graha.index() as usize];
    let diff = (bhava_number as i16 - best as i16).unsigned_abs();
    let dist = diff.min(12 - diff);
    finish(60.0 * ((PI * dist as f64 / 6.0).cos() + 1.0) / 2.0)
}

/// Dig Bala with the node policy applied.
pub fn graha_dig_bala(graha: Graha, lon: f64, asc: f64, node_policy: NodeDigBala) -> f64 {
    let bhava = house_number(lon, asc);
    if !graha.is_node() {
        return dig_bala(graha, bhava);
    }
    match (node_policy, sign_lord(lon)) {
        (NodeDigBala::HalfSignLord, Some(lord)) => finish(0.5 * dig_bala(lord, bhava)),
        _ => 0.0,
    }
}

// ---------------------------------------------------------------------------
// 4. Kala Bala Sub-Components
// ---------------------------------------------------------------------------

/// Natonnata Bala: Sun, Mars, Jupiter by day; Moon, Venus, Saturn by night;
/// Mercury always.
pub fn natonnata_bala(graha: Graha, is_daytime: bool) -> f64 {
    let strong = match graha {
        Graha::Buddh => true,
        Graha::Surya | Graha::Mangal | Graha::Guru => is_daytime,
        Graha::Chandra | Graha::Shukra | Graha::Shani => !is_daytime,
        Graha::Rahu | Graha::Ketu => false,
    };
    if strong { 60.0 } else { 0.0 }
}

/// Paksha Bala from elongation. Benefics gain 20%, malefics lose 20%.
pub fn paksha_bala(graha: Graha, elongation: f64) -> f64 {
    let base = elongation / 180.0 * 60.0;
    if graha == Graha::Chandra {
        (base * 2.0).min(120.0) / 2.0
    } else if is_benefic(graha) {
        base * 1.2
    } else if is_malefic(graha) {
        base * 0.8
    } else {
        base
    }
}

/// Tribhaga Bala: each third of the day fraction belongs to one graha
/// (Mercury, Sun, Jupiter by day; Moon, Venus, Saturn by night). Mars
/// rules the midday window [0.45, 0.55].
pub fn tribhaga_bala(graha: Graha, is_daytime: bool, fraction: f64) -> f64 {
    if graha == Graha::Mangal && (0.45..=0.55).contains(&fraction) {
        return 60.0;
    }
    let thirds = if is_daytime {
        [Graha::Buddh, Graha::Surya, Graha::Guru]
    } else {
        [Graha::Chandra, Graha::Shukra, Graha::Shani]
    };
    let part = ((fraction * 3.0).floor() as usize).min(2);
    if thirds[part] == graha { 60.0 } else { 0.0 }
}

/// Hora Bala: 60 for the lord of the current hour.
pub fn hora_bala(graha: Graha, fraction: f64) -> f64 {
    let idx = ((fraction * 24.0).floor() as usize) % HORA_SEQUENCE.len();
    if HORA_SEQUENCE[idx] == graha { 60.0 } else { 0.0 }
}

/// Ayana Bala: benefics gain 30 in the first half of the year, everything else 15.
pub fn ayana_bala(graha: Graha, jd: f64) -> f64 {
    if is_benefic(graha) && jd.rem_euclid(365.25) < 182.625 {
        30.0
    } else {
        15.0
    }
}

/// Kala Bala for a single graha. Nodes score 0.
pub fn kala_bala(graha: Graha, jd: f64, is_daytime: bool, elongation: f64) -> KalaBalaBreakdown {
    if graha.is_node() {
        return KalaBalaBreakdown::default();
    }
    let fraction = jd.rem_euclid(1.0);
    let parts = [
        natonnata_bala(graha, is_daytime),
        paksha_bala(graha, elongation),
        tribhaga_bala(graha, is_daytime, fraction),
        if graha == Graha::Guru { 15.0 } else { 0.0 },
        if graha == Graha::Chandra { 30.0 } else { 0.0 },
        if graha == Graha::Surya { 45.0 } else { 0.0 },
        hora_bala(graha, fraction),
        ayana_bala(graha, jd),
    ];
    let blend: f64 = parts.iter().zip(KALA_WEIGHTS).map(|(p, w)| p * w).sum();
    KalaBalaBreakdown {
        natonnata: parts[0],
        paksha: parts[1],
        tribhaga: parts[2],
        varsha: parts[3],
        masa: parts[4],
        dina: parts[5],
        hora: parts[6],
        ayana: parts[7],
        total: finish(blend),
    }
}

// ---------------------------------------------------------------------------
// 5. Avastha Bala
// ---------------------------------------------------------------------------

/// Avastha Bala: mean of the Baladi, Jagradadi and Deeptadi multipliers, x60.
///
/// Returns zero when the Moon is not placed.
pub fn avastha_bala(lon: f64, moon_lon: Option<f64>, state: &PlanetState) -> AvasthaBalaBreakdown {
    let Some(moon) = moon_lon else {
        return AvasthaBalaBreakdown::default();
    };
    let baladi = BALADI_SEGMENT_FACTORS[baladi_segment(lon) as usize];
    let jagradadi = jagradadi_avastha(lon, moon).strength_factor();
    let deeptadi = deeptadi_avastha(state).strength_factor();
    AvasthaBalaBreakdown {
        baladi,
        jagradadi,
        deeptadi,
        total: finish((baladi + jagradadi + deeptadi) / 3.0 * 60.0),
    }
}

// ---------------------------------------------------------------------------
// 6. Drik Bala
// ---------------------------------------------------------------------------

/// Drik Bala from aspects received.
///
/// Each other graha aspecting this one within 3 deg adds 15 (benefic) or
/// -10 (malefic). Closeness to the ascendant adds 20 and to the Moon 15.
/// The signed score is clamped to [-60, 60] and rescaled to [0, 60].
pub fn drik_bala(graha: Graha, positions: &Positions) -> DrikBalaBreakdown {
    let Some(lon) = positions.get(graha) else {
        return DrikBalaBreakdown::default();
    };
    let mut score = 0.0;
    for (other, other_lon) in positions.placed() {
        if other == graha || !casts_aspect(other, other_lon, lon, DRIK_ASPECT_ORB) {
            continue;
        }
        if is_benefic(other) {
            score += 15.0;
        } else if is_malefic(other) {
            score -= 10.0;
        }
    }
    if let Some(asc) = positions.ascendant() {
        if angular_distance(lon, asc) <= DRIK_PROXIMITY_ORB {
            score += 20.0;
        }
    }
    if graha != Graha::Chandra {
        if let Some(moon) = positions.get(Graha::Chandra) {
            if angular_distance(lon, moon) <= DRIK_PROXIMITY_ORB {
                score += 15.0;
            }
        }
    }
    let signed = round2(f64::clamp(score, -MAX_COMPONENT, MAX_COMPONENT));
    DrikBalaBreakdown {
        signed,
        total: finish((signed + MAX_COMPONENT) / 2.0),
    }
}
