//! Divisional charts (vargas) and per-division dignity labels.
//!
//! Dignities are supplied by an external source as
//! planet → varga → label and validated here at the boundary.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use crate::error::JyotishError;
use crate::graha::Graha;

/// Shodashavarga divisional charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Varga {
    D1,
    D2,
    D3,
    D4,
    D7,
    D9,
    D10,
    D12,
    D16,
    D20,
    D24,
    D27,
    D30,
    D40,
    D45,
    D60,
}

/// The seven vargas scored by Saptavargaja Bala.
pub const SAPTAVARGA: [Varga; 7] = [
    Varga::D1,
    Varga::D2,
    Varga::D3,
    Varga::D7,
    Varga::D9,
    Varga::D12,
    Varga::D30,
];

impl Varga {
    /// Division number (1 for D1, 9 for D9, ...).
    pub const fn division(self) -> u8 {
        match self {
            Self::D1 => 1,
            Self::D2 => 2,
            Self::D3 => 3,
            Self::D4 => 4,
            Self::D7 => 7,
            Self::D9 => 9,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D16 => 16,
            Self::D20 => 20,
            Self::D24 => 24,
            Self::D27 => 27,
            Self::D30 => 30,
            Self::D40 => 40,
            Self::D45 => 45,
            Self::D60 => 60,
        }
    }

    /// Parse "D9", "d9" or "9".
    pub fn from_code(code: &str) -> Option<Varga> {
        let trimmed = code.trim();
        let digits = trimmed
            .strip_prefix('D')
            .or_else(|| trimmed.strip_prefix('d'))
            .unwrap_or(trimmed);
        let n: u8 = digits.parse().ok()?;
        Some(match n {
            1 => Self::D1,
            2 => Self::D2,
            3 => Self::D3,
            4 => Self::D4,
            7 => Self::D7,
            9 => Self::D9,
            10 => Self::D10,
            12 => Self::D12,
            16 => Self::D16,
            20 => Self::D20,
            24 => Self::D24,
            27 => Self::D27,
            30 => Self::D30,
            40 => Self::D40,
            45 => Self::D45,
            60 => Self::D60,
            _ => return None,
        })
    }
}

/// Dignity of a graha inside one divisional chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DignityLabel {
    Exalted,
    Moolatrikona,
    OwnSign,
    Friendly,
    Neutral,
    Enemy,
    Debilitated,
}

impl DignityLabel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Exalted => "Exalted",
            Self::Moolatrikona => "Moolatrikona",
            Self::OwnSign => "Own Sign",
            Self::Friendly => "Friendly",
            Self::Neutral => "Neutral",
            Self::Enemy => "Enemy",
            Self::Debilitated => "Debilitated",
        }
    }

    /// Parse a label, ignoring case, spaces and underscores.
    pub fn from_label(s: &str) -> Option<DignityLabel> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "exalted" | "exaltation" => Some(Self::Exalted),
            "moolatrikona" | "mooltrikona" | "moolatrikone" => Some(Self::Moolatrikona),
            "ownsign" | "own" => Some(Self::OwnSign),
            "friendly" | "friend" => Some(Self::Friendly),
            "neutral" => Some(Self::Neutral),
            "enemy" => Some(Self::Enemy),
            "debilitated" | "debilitation" => Some(Self::Debilitated),
            _ => None,
        }
    }
}

/// Dignity labels per graha per varga.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "BTreeMap<String, BTreeMap<String, String>>")]
pub struct DivisionalDignities {
    table: HashMap<Graha, BTreeMap<Varga, DignityLabel>>,
}

impl DivisionalDignities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, graha: Graha, varga: Varga, label: DignityLabel) {
        self.table.entry(graha).or_default().insert(varga, label);
    }

    /// Builder form of [`DivisionalDignities::insert`].
    pub fn with(mut self, graha: Graha, varga: Varga, label: DignityLabel) -> Self {
        self.insert(graha, varga, label);
        self
    }

    pub fn get(&self, graha: Graha, varga: Varga) -> Option<DignityLabel> {
        self.table.get(&graha)?.get(&varga).copied()
    }

    /// True when any varga carries a label for `graha`.
    pub fn has_graha(&self, graha: Graha) -> bool {
        self.table.get(&graha).is_some_and(|m| !m.is_empty())
    }

    pub fn for_graha(&self, graha: Graha) -> Option<&BTreeMap<Varga, DignityLabel>> {
        self.table.get(&graha)
    }

    pub fn is_empty(&self) -> bool {
        self.table.values().all(BTreeMap::is_empty)
    }
}

impl TryFrom<BTreeMap<String, BTreeMap<String, String>>> for DivisionalDignities {
    type Error = JyotishError;

    fn try_from(map: BTreeMap<String, BTreeMap<String, String>>) -> Result<Self, Self::Error> {
        let mut dignities = DivisionalDignities::new();
        for (body, vargas) in map {
            let graha = Graha::from_name(&body).ok_or(JyotishError::UnknownBody(body))?;
            for (code, label) in vargas {
                let varga = Varga::from_code(&code).ok_or(JyotishError::UnknownVarga(code))?;
                let label =
                    DignityLabel::from_label(&label).ok_or(JyotishError::UnknownDignity(label))?;
                dignities.insert(graha, varga, label);
            }
        }
        Ok(dignities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn varga_codes_parse() {
        assert_eq!(Varga::from_code("D9"), Some(Varga::D9));
        assert_eq!(Varga::from_code("d30"), Some(Varga::D30));
        assert_eq!(Varga::from_code("60"), Some(Varga::D60));
        assert_eq!(Varga::from_code("D5"), None);
        assert_eq!(Varga::from_code("navamsa"), None);
    }

    #[test]
    fn division_numbers_match_codes() {
        for v in SAPTAVARGA {
            assert_eq!(Varga::from_code(&format!("D{}", v.division())), Some(v));
        }
    }

    #[test]
    fn labels_parse_loosely() {
        assert_eq!(DignityLabel::from_label("Own Sign"), Some(DignityLabel::OwnSign));
        assert_eq!(DignityLabel::from_label("own_sign"), Some(DignityLabel::OwnSign));
        assert_eq!(DignityLabel::from_label("EXALTED"), Some(DignityLabel::Exalted));
        assert_eq!(DignityLabel::from_label("Great Friend"), None);
    }

    #[test]
    fn labels_round_trip() {
        for l in [
            DignityLabel::Exalted,
            DignityLabel::Moolatrikona,
            DignityLabel::OwnSign,
            DignityLabel::Friendly,
            DignityLabel::Neutral,
            DignityLabel::Enemy,
            DignityLabel::Debilitated,
        ] {
            assert_eq!(DignityLabel::from_label(l.label()), Some(l));
        }
    }

    #[test]
    fn lookup_by_graha_and_varga() {
        let d = DivisionalDignities::new()
            .with(Graha::Surya, Varga::D1, DignityLabel::Exalted)
            .with(Graha::Surya, Varga::D9, DignityLabel::Enemy);
        assert_eq!(d.get(Graha::Surya, Varga::D9), Some(DignityLabel::Enemy));
        assert_eq!(d.get(Graha::Surya, Varga::D3), None);
        assert!(d.has_graha(Graha::Surya));
        assert!(!d.has_graha(Graha::Chandra));
    }

    #[test]
    fn deserialize_validates_boundary() {
        let ok = r#"{"Sun": {"D1": "Exalted", "D9": "Own Sign"}}"#;
        let d: DivisionalDignities = serde_json::from_str(ok).unwrap();
        assert_eq!(d.get(Graha::Surya, Varga::D9), Some(DignityLabel::OwnSign));

        let bad_varga = r#"{"Sun": {"D5": "Exalted"}}"#;
        assert!(serde_json::from_str::<DivisionalDignities>(bad_varga).is_err());
        let bad_label = r#"{"Sun": {"D1": "Glorious"}}"#;
        assert!(serde_json::from_str::<DivisionalDignities>(bad_label).is_err());
    }
}
