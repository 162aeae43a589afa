//! Grahas, their chart-file names, and sign lordship.

use serde::{Serialize, Serializer};

use crate::rashi::{ALL_RASHIS, Rashi};

/// A chart body. Declaration order is the tie-break order everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// Scored with nodes, and the row order of `Positions`.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// Scored by default; the only candidates for house lordship.
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

impl Graha {
    /// Sanskrit name, also accepted in chart files.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Name used in tables and JSON output.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Slot in speed arrays and `Positions`.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// Rahu or Ketu.
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }

    /// Parse an English or Sanskrit name, case-insensitively.
    pub fn from_name(s: &str) -> Option<Graha> {
        match s.trim().to_lowercase().as_str() {
            "sun" | "surya" => Some(Graha::Surya),
            "moon" | "chandra" => Some(Graha::Chandra),
            "mars" | "mangal" => Some(Graha::Mangal),
            "mercury" | "buddh" | "budha" => Some(Graha::Buddh),
            "jupiter" | "guru" => Some(Graha::Guru),
            "venus" | "shukra" => Some(Graha::Shukra),
            "saturn" | "shani" => Some(Graha::Shani),
            "rahu" => Some(Graha::Rahu),
            "ketu" => Some(Graha::Ketu),
            _ => None,
        }
    }
}

impl Serialize for Graha {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.english_name())
    }
}

/// Sign lord; house lords and dispositors are read from here.
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha => Graha::Mangal,
        Rashi::Vrishabha => Graha::Shukra,
        Rashi::Mithuna => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Kanya => Graha::Buddh,
        Rashi::Tula => Graha::Shukra,
        Rashi::Vrischika => Graha::Mangal,
        Rashi::Dhanu => Graha::Guru,
        Rashi::Makara => Graha::Shani,
        Rashi::Kumbha => Graha::Shani,
        Rashi::Meena => Graha::Guru,
    }
}

/// Lord of the sign at `rashi_index`, `None` past Meena.
pub fn rashi_lord_by_index(rashi_index: u8) -> Option<Graha> {
    if rashi_index >= 12 {
        return None;
    }
    Some(rashi_lord(ALL_RASHIS[rashi_index as usize]))
}
