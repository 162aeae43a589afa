//! Chart snapshot: planetary longitudes, the ascendant, house placement
//! and house lordship.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::JyotishError;
use crate::graha::{ALL_GRAHAS, Graha, rashi_lord_by_index};
use crate::util::{is_valid_longitude, normalize_360, sign_index};

/// Body names accepted for the ascendant in serialized charts.
const ASCENDANT_KEYS: [&str; 3] = ["asc", "ascendant", "lagna"];

/// Longitudes of the 9 grahas plus the ascendant.
///
/// Ketu is always exactly opposite Rahu: setting either node sets both.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>")]
pub struct Positions {
    grahas: [Option<f64>; 9],
    ascendant: Option<f64>,
}

impl Positions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Positions::set`].
    pub fn with(mut self, graha: Graha, lon: f64) -> Self {
        self.set(graha, lon);
        self
    }

    /// Builder form of [`Positions::set_ascendant`].
    pub fn with_ascendant(mut self, lon: f64) -> Self {
        self.set_ascendant(lon);
        self
    }

    /// Place a graha. Setting a node also places its partner 180 deg away.
    pub fn set(&mut self, graha: Graha, lon: f64) {
        self.grahas[graha.index() as usize] = Some(lon);
        let partner = match graha {
            Graha::Rahu => Graha::Ketu,
            Graha::Ketu => Graha::Rahu,
            _ => return,
        };
        self.grahas[partner.index() as usize] = Some(normalize_360(lon + 180.0));
    }

    pub fn set_ascendant(&mut self, lon: f64) {
        self.ascendant = Some(lon);
    }

    pub fn get(&self, graha: Graha) -> Option<f64> {
        self.grahas[graha.index() as usize]
    }

    pub fn ascendant(&self) -> Option<f64> {
        self.ascendant
    }

    /// Longitude of a graha, or `MissingData`.
    pub fn require(&self, graha: Graha) -> Result<f64, JyotishError> {
        self.get(graha).ok_or(JyotishError::MissingData(graha))
    }

    /// Ascendant longitude, or `MissingAscendant`.
    pub fn require_ascendant(&self) -> Result<f64, JyotishError> {
        self.ascendant.ok_or(JyotishError::MissingAscendant)
    }

    /// True when neither a graha nor the ascendant is placed.
    pub fn is_empty(&self) -> bool {
        self.ascendant.is_none() && self.grahas.iter().all(Option::is_none)
    }

    /// Placed grahas in traditional order.
    pub fn placed(&self) -> impl Iterator<Item = (Graha, f64)> + '_ {
        ALL_GRAHAS
            .into_iter()
            .filter_map(|g| self.get(g).map(|lon| (g, lon)))
    }

    /// Check every placed longitude lies in [0, 360).
    pub fn validate(&self) -> Result<(), JyotishError> {
        for (g, lon) in self.placed() {
            if !is_valid_longitude(lon) {
                return Err(JyotishError::InvalidLongitude {
                    body: g.english_name(),
                    value: lon,
                });
            }
        }
        match self.ascendant {
            Some(lon) if !is_valid_longitude(lon) => Err(JyotishError::InvalidLongitude {
                body: "Ascendant",
                value: lon,
            }),
            _ => Ok(()),
        }
    }

    /// Copy with every longitude wrapped into [0, 360).
    pub fn normalized(&self) -> Positions {
        Positions {
            grahas: self.grahas.map(|lon| lon.map(normalize_360)),
            ascendant: self.ascendant.map(normalize_360),
        }
    }

    /// House (1..=12) of a graha relative to the ascendant.
    pub fn house_of(&self, graha: Graha) -> Result<u8, JyotishError> {
        Ok(house_number(self.require(graha)?, self.require_ascendant()?))
    }
}

impl TryFrom<BTreeMap<String, f64>> for Positions {
    type Error = JyotishError;

    fn try_from(map: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        let mut positions = Positions::new();
        let mut rahu = None;
        for (name, lon) in map {
            if ASCENDANT_KEYS.contains(&name.trim().to_lowercase().as_str()) {
                positions.set_ascendant(lon);
                continue;
            }
            match Graha::from_name(&name) {
                // Rahu is applied last so it wins over an explicit Ketu.
                Some(Graha::Rahu) => rahu = Some(lon),
                Some(g) => positions.set(g, lon),
                None => return Err(JyotishError::UnknownBody(name)),
            }
        }
        if let Some(lon) = rahu {
            positions.set(Graha::Rahu, lon);
        }
        Ok(positions)
    }
}

/// House number (1..=12) of a planet, whole-sign from the ascendant.
///
/// `((planet_sign - asc_sign + 12) mod 12) + 1`. Invariant under adding
/// multiples of 360 to either input.
pub fn house_number(planet_lon: f64, asc_lon: f64) -> u8 {
    let planet_sign = sign_index(planet_lon);
    let asc_sign = sign_index(asc_lon);
    (planet_sign + 12 - asc_sign) % 12 + 1
}

/// Day chart when the Sun sits in houses 1-6 from the ascendant.
///
/// Returns None when the Sun or the ascendant is missing.
pub fn is_daytime(positions: &Positions) -> Option<bool> {
    let sun = positions.get(Graha::Surya)?;
    let asc = positions.ascendant()?;
    Some(house_number(sun, asc) <= 6)
}

// ---------------------------------------------------------------------------
// House lords
// ---------------------------------------------------------------------------

/// Lord of each of the 12 houses. Entries may be absent when supplied
/// externally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "BTreeMap<u8, String>")]
pub struct HouseLords {
    lords: [Option<Graha>; 12],
}

impl HouseLords {
    /// Whole-sign lordship: house `h` is ruled by the lord of the
    /// `h`-th sign from the ascendant sign.
    pub fn from_ascendant(asc_lon: f64) -> Self {
        let asc_sign = sign_index(asc_lon);
        let mut lords = [None; 12];
        for (h, slot) in lords.iter_mut().enumerate() {
            *slot = rashi_lord_by_index((asc_sign + h as u8) % 12);
        }
        Self { lords }
    }

    /// Lord of house `house` (1..=12).
    pub fn lord(&self, house: u8) -> Option<Graha> {
        if !(1..=12).contains(&house) {
            return None;
        }
        self.lords[(house - 1) as usize]
    }

    pub fn set(&mut self, house: u8, lord: Graha) -> Result<(), JyotishError> {
        if !(1..=12).contains(&house) {
            return Err(JyotishError::InvalidHouse(house));
        }
        self.lords[(house - 1) as usize] = Some(lord);
        Ok(())
    }

    /// Houses (1..=12) ruled by `graha`.
    pub fn houses_ruled_by(&self, graha: Graha) -> Vec<u8> {
        (1..=12u8).filter(|&h| self.lord(h) == Some(graha)).collect()
    }
}

impl TryFrom<BTreeMap<u8, String>> for HouseLords {
    type Error = JyotishError;

    fn try_from(map: BTreeMap<u8, String>) -> Result<Self, Self::Error> {
        let mut lords = HouseLords::default();
        for (house, name) in map {
            let graha = Graha::from_name(&name).ok_or(JyotishError::UnknownBody(name))?;
            lords.set(house, graha)?;
        }
        Ok(lords)
    }
}
