//! Strength engine configuration.
//!
//! Every field has a default, so an empty TOML table is a valid config.

use jyotish_base::{Graha, PrimaryState, SignDignity};
use serde::Deserialize;

/// Dig Bala treatment for Rahu and Ketu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeDigBala {
    /// Nodes carry no directional strength.
    Zero,
    /// Half of the node's sign lord's Dig Bala at the node's house.
    #[default]
    HalfSignLord,
}

/// Multipliers applied when deriving Ishta Phala.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PhalaWeights {
    pub moolatrikona: f64,
    pub own_sign: f64,
    pub vargottama: f64,
    pub friendly: f64,
    pub neutral: f64,
    pub enemy: f64,
    pub exalted_state: f64,
    pub debilitated_state: f64,
    pub combust_state: f64,
    /// Moon, Mercury, Jupiter, Venus.
    pub benefic_nature: f64,
    /// Sun, Mars, Saturn, Rahu, Ketu.
    pub malefic_nature: f64,
    pub retrograde: f64,
}

impl Default for PhalaWeights {
    fn default() -> Self {
        Self {
            moolatrikona: 1.4,
            own_sign: 1.3,
            vargottama: 1.35,
            friendly: 1.1,
            neutral: 0.95,
            enemy: 0.8,
            exalted_state: 1.5,
            debilitated_state: 0.4,
            combust_state: 0.3,
            benefic_nature: 1.25,
            malefic_nature: 0.85,
            retrograde: 1.5,
        }
    }
}

impl PhalaWeights {
    pub fn dignity_factor(&self, dignity: SignDignity) -> f64 {
        match dignity {
            SignDignity::Moolatrikona => self.moolatrikona,
            SignDignity::OwnSign => self.own_sign,
            SignDignity::Vargottama => self.vargottama,
            SignDignity::Friendly => self.friendly,
            SignDignity::Neutral => self.neutral,
            SignDignity::Enemy => self.enemy,
            SignDignity::Normal => 1.0,
        }
    }

    pub fn state_factor(&self, primary: Option<PrimaryState>) -> f64 {
        match primary {
            Some(PrimaryState::Exalted) => self.exalted_state,
            Some(PrimaryState::Debilitated) => self.debilitated_state,
            Some(PrimaryState::Combust) => self.combust_state,
            None => 1.0,
        }
    }

    pub fn nature_factor(&self, graha: Graha) -> f64 {
        match graha {
            Graha::Chandra | Graha::Buddh | Graha::Guru | Graha::Shukra => self.benefic_nature,
            _ => self.malefic_nature,
        }
    }
}

/// Options for [`crate::compute_strengths`].
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct StrengthConfig {
    /// Score Rahu and Ketu alongside the seven classical grahas.
    pub include_nodes: bool,
    pub node_dig_bala: NodeDigBala,
    pub phala: PhalaWeights,
}

impl StrengthConfig {
    /// Same config with nodes switched on.
    pub fn with_nodes(&self) -> Self {
        Self {
            include_nodes: true,
            ..self.clone()
        }
    }
}

/// Options for [`crate::chara_karakas`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KarakaConfig {
    /// Rank Rahu alongside the seven classical grahas.
    pub include_nodes: bool,
    /// Eight roles (with Pitri) instead of seven.
    pub include_eighth: bool,
}

impl Default for KarakaConfig {
    fn default() -> Self {
        Self {
            include_nodes: true,
            include_eighth: true,
        }
    }
}
