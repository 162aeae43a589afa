//! Graha avasthas (planetary states) feeding Avastha Bala.
//!
//! 1. **Baladi** (age-based): 5 states from the 6-degree segment of the sign
//! 2. **Jagradadi** (alertness-based): 3 states from distance to the Moon
//! 3. **Deeptadi** (luminosity-based): 8 states from the classifier output

use crate::planet_state::{PlanetState, PrimaryState, SignDignity};
use crate::util::{angular_distance, degrees_in_sign, sign_index};

// ---------------------------------------------------------------------------
// Baladi
// ---------------------------------------------------------------------------

/// Baladi Avastha: age-based state from position within sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaladiAvastha {
    Bala,
    Kumara,
    Yuva,
    Vriddha,
    Mrita,
}

impl BaladiAvastha {
    pub const fn index(self) -> u8 {
        match self {
            Self::Bala => 0,
            Self::Kumara => 1,
            Self::Yuva => 2,
            Self::Vriddha => 3,
            Self::Mrita => 4,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Bala => "Bala",
            Self::Kumara => "Kumara",
            Self::Yuva => "Yuva",
            Self::Vriddha => "Vriddha",
            Self::Mrita => "Mrita",
        }
    }

    /// Status label shown in strength tables.
    pub const fn status_label(self) -> &'static str {
        match self {
            Self::Bala => "Child",
            Self::Kumara => "Youth",
            Self::Yuva => "Adult",
            Self::Vriddha => "Old",
            Self::Mrita => "Dead",
        }
    }
}

/// Strength factor per 6-degree segment, counted from the start of the sign.
pub const BALADI_SEGMENT_FACTORS: [f64; 5] = [1.0, 0.75, 0.5, 0.33, 0.25];

/// 6-degree segment (0..=4) of the sign.
pub fn baladi_segment(lon: f64) -> u8 {
    ((degrees_in_sign(lon) / 6.0).floor() as u8).min(4)
}

/// Baladi Avastha from the segment and odd/even sign.
///
/// Odd signs (Mesha, Mithuna, ...): Bala→Kumara→Yuva→Vriddha→Mrita.
/// Even signs: reversed.
pub fn baladi_avastha(lon: f64) -> BaladiAvastha {
    const ORDER: [BaladiAvastha; 5] = [
        BaladiAvastha::Bala,
        BaladiAvastha::Kumara,
        BaladiAvastha::Yuva,
        BaladiAvastha::Vriddha,
        BaladiAvastha::Mrita,
    ];
    let segment = baladi_segment(lon) as usize;
    if sign_index(lon) % 2 == 0 {
        ORDER[segment]
    } else {
        ORDER[4 - segment]
    }
}

// ---------------------------------------------------------------------------
// Jagradadi
// ---------------------------------------------------------------------------

/// Jagradadi Avastha: alertness from closeness to the Moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JagradadiAvastha {
    Jagrat,
    Swapna,
    Sushupta,
}

impl JagradadiAvastha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jagrat => "Jagrat",
            Self::Swapna => "Swapna",
            Self::Sushupta => "Sushupta",
        }
    }

    pub const fn strength_factor(self) -> f64 {
        match self {
            Self::Jagrat => 1.5,
            Self::Swapna => 1.0,
            Self::Sushupta => 0.75,
        }
    }
}

/// Within 60 deg of the Moon → Jagrat, within 120 → Swapna, else Sushupta.
pub fn jagradadi_avastha(lon: f64, moon_lon: f64) -> JagradadiAvastha {
    let d = angular_distance(lon, moon_lon);
    if d <= 60.0 {
        JagradadiAvastha::Jagrat
    } else if d <= 120.0 {
        JagradadiAvastha::Swapna
    } else {
        JagradadiAvastha::Sushupta
    }
}

// ---------------------------------------------------------------------------
// Deeptadi
// ---------------------------------------------------------------------------

/// Deeptadi Avastha: luminosity from dignity and state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeeptadiAvastha {
    /// Exalted
    Deepta,
    /// Moolatrikona
    Swastha,
    /// Own sign
    Pramudita,
    /// Friendly sign
    Shanta,
    /// Neutral sign
    Deena,
    /// Enemy sign
    Dukhita,
    /// Debilitated
    Khala,
    /// Combust
    Vikala,
}

impl DeeptadiAvastha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Deepta => "Deepta",
            Self::Swastha => "Swastha",
            Self::Pramudita => "Pramudita",
            Self::Shanta => "Shanta",
            Self::Deena => "Deena",
            Self::Dukhita => "Dukhita",
            Self::Khala => "Khala",
            Self::Vikala => "Vikala",
        }
    }

    pub const fn strength_factor(self) -> f64 {
        match self {
            Self::Deepta => 2.0,
            Self::Swastha => 1.5,
            Self::Pramudita => 1.3,
            Self::Shanta => 1.2,
            Self::Deena => 1.0,
            Self::Dukhita => 0.8,
            Self::Khala => 0.5,
            Self::Vikala => 0.3,
        }
    }
}

/// Deeptadi from the classifier: the primary state wins over sign dignity.
pub fn deeptadi_avastha(state: &PlanetState) -> DeeptadiAvastha {
    match state.primary {
        Some(PrimaryState::Exalted) => DeeptadiAvastha::Deepta,
        Some(PrimaryState::Debilitated) => DeeptadiAvastha::Khala,
        Some(PrimaryState::Combust) => DeeptadiAvastha::Vikala,
        None => match state.sign_dignity {
            SignDignity::Moolatrikona => DeeptadiAvastha::Swastha,
            SignDignity::OwnSign => DeeptadiAvastha::Pramudita,
            SignDignity::Friendly => DeeptadiAvastha::Shanta,
            SignDignity::Enemy => DeeptadiAvastha::Dukhita,
            SignDignity::Neutral | SignDignity::Normal | SignDignity::Vargottama => {
                DeeptadiAvastha::Deena
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baladi_odd_sign_progression() {
        assert_eq!(baladi_avastha(2.0), BaladiAvastha::Bala);
        assert_eq!(baladi_avastha(14.0), BaladiAvastha::Yuva);
        assert_eq!(baladi_avastha(29.9), BaladiAvastha::Mrita);
    }

    #[test]
    fn baladi_even_sign_reversed() {
        assert_eq!(baladi_avastha(32.0), BaladiAvastha::Mrita);
        assert_eq!(baladi_avastha(59.0), BaladiAvastha::Bala);
        assert_eq!(baladi_avastha(32.0).status_label(), "Dead");
    }

    #[test]
    fn segment_factor_lookup() {
        assert_eq!(baladi_segment(0.0), 0);
        assert_eq!(baladi_segment(6.0), 1);
        assert_eq!(baladi_segment(29.999), 4);
        assert!((BALADI_SEGMENT_FACTORS[baladi_segment(45.0) as usize] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn jagradadi_bands() {
        assert_eq!(jagradadi_avastha(10.0, 10.0), JagradadiAvastha::Jagrat);
        assert_eq!(jagradadi_avastha(70.0, 10.0), JagradadiAvastha::Jagrat);
        assert_eq!(jagradadi_avastha(130.0, 10.0), JagradadiAvastha::Swapna);
        assert_eq!(jagradadi_avastha(200.0, 10.0), JagradadiAvastha::Sushupta);
    }

    #[test]
    fn deeptadi_prefers_primary_state() {
        let mut s = PlanetState::NEUTRAL;
        s.sign_dignity = SignDignity::OwnSign;
        assert_eq!(deeptadi_avastha(&s), DeeptadiAvastha::Pramudita);
        s.primary = Some(PrimaryState::Combust);
        assert_eq!(deeptadi_avastha(&s), DeeptadiAvastha::Vikala);
        assert!((deeptadi_avastha(&s).strength_factor() - 0.3).abs() < 1e-12);
    }
}
