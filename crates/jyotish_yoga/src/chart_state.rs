//! Derived chart view shared by every yoga condition.
//!
//! Built once per detection: longitudes are normalized, D1 and D9 house
//! placements are precomputed, and the orbs are fixed from config.

use std::collections::BTreeSet;

use jyotish_base::util::sign_index;
use jyotish_base::{
    BENEFICS, DivisionalDignities, Graha, HouseLords, JyotishError, PlanetState, Positions,
    SignDignity, angular_distance, aspect_points, casts_aspect, house_number, planet_state,
    rashi_lord_by_index,
};

use crate::config::YogaConfig;
use crate::error::ConditionError;

/// Angular houses.
pub const KENDRA: [u8; 4] = [1, 4, 7, 10];
/// Trinal houses.
pub const TRIKONA: [u8; 3] = [1, 5, 9];

/// The `n`-th house counted from `house`, both 1-based; the 1st is `house` itself.
pub fn nth_house_from(house: u8, n: u8) -> u8 {
    ((house as u16 + n as u16 + 22) % 12) as u8 + 1
}

/// Chart data handed to [`crate::detect_yogas`].
#[derive(Debug, Clone, Copy)]
pub struct YogaInputs<'a> {
    /// Julian day of the chart moment.
    pub jd: f64,
    /// D1 longitudes, including the ascendant.
    pub positions: &'a Positions,
    /// Daily motion in deg/day, indexed by `Graha::index()`.
    pub speeds: &'a [f64; 9],
    /// Navamsa longitudes, including the D9 ascendant when known.
    pub d9_positions: &'a Positions,
    pub house_lords: &'a HouseLords,
    pub dignities: &'a DivisionalDignities,
    pub is_day_birth: bool,
}

/// Where an aspect is aimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectTarget {
    Graha(Graha),
    /// Whole-sign house counted from the ascendant.
    House(u8),
}

#[derive(Debug, Clone)]
pub struct ChartState<'a> {
    jd: f64,
    speeds: [f64; 9],
    positions: Positions,
    d9_positions: Positions,
    ascendant: f64,
    houses: [Option<u8>; 9],
    d9_houses: [Option<u8>; 9],
    house_lords: HouseLords,
    is_day_birth: bool,
    dignities: &'a DivisionalDignities,
    conjunction_orb: f64,
    aspect_orb: f64,
}

fn house_table(positions: &Positions, asc: Option<f64>) -> [Option<u8>; 9] {
    let mut houses = [None; 9];
    if let Some(asc) = asc {
        for (g, lon) in positions.placed() {
            houses[g.index() as usize] = Some(house_number(lon, asc));
        }
    }
    houses
}

fn conjunct_in(positions: &Positions, a: Graha, b: Graha, orb: f64) -> bool {
    match (positions.get(a), positions.get(b)) {
        (Some(la), Some(lb)) => angular_distance(la, lb) <= orb,
        _ => false,
    }
}

fn aspect_in(positions: &Positions, caster: Graha, target: Graha, orb: f64) -> bool {
    match (positions.get(caster), positions.get(target)) {
        (Some(lc), Some(lt)) => casts_aspect(caster, lc, lt, orb),
        _ => false,
    }
}

impl<'a> ChartState<'a> {
    /// Fails on an empty chart, a missing D1 ascendant, or a longitude that
    /// is not finite.
    pub fn new(inputs: &YogaInputs<'a>, config: &YogaConfig) -> Result<Self, JyotishError> {
        if inputs.positions.is_empty() {
            return Err(JyotishError::EmptyPositions);
        }
        let positions = inputs.positions.normalized();
        let ascendant = positions.require_ascendant()?;
        positions.validate()?;
        let d9_positions = inputs.d9_positions.normalized();
        d9_positions.validate()?;

        Ok(Self {
            jd: inputs.jd,
            speeds: *inputs.speeds,
            houses: house_table(&positions, Some(ascendant)),
            d9_houses: house_table(&d9_positions, d9_positions.ascendant()),
            positions,
            d9_positions,
            ascendant,
            house_lords: *inputs.house_lords,
            is_day_birth: inputs.is_day_birth,
            dignities: inputs.dignities,
            conjunction_orb: config.conjunction_orb,
            aspect_orb: config.aspect_orb,
        })
    }

    // -----------------------------------------------------------------------
    // Raw chart data
    // -----------------------------------------------------------------------

    pub fn jd(&self) -> f64 {
        self.jd
    }

    pub fn speeds(&self) -> &[f64; 9] {
        &self.speeds
    }

    /// Normalized D1 positions.
    pub fn positions(&self) -> &Positions {
        &self.positions
    }

    pub fn d9_positions(&self) -> &Positions {
        &self.d9_positions
    }

    pub fn dignities(&self) -> &DivisionalDignities {
        self.dignities
    }

    pub fn house_lords(&self) -> &HouseLords {
        &self.house_lords
    }

    pub fn ascendant(&self) -> f64 {
        self.ascendant
    }

    pub fn is_day_birth(&self) -> bool {
        self.is_day_birth
    }

    pub fn lon(&self, graha: Graha) -> Option<f64> {
        self.positions.get(graha)
    }

    pub fn is_placed(&self, graha: Graha) -> bool {
        self.positions.get(graha).is_some()
    }

    /// Placed grahas in traditional order.
    pub fn placed_grahas(&self) -> impl Iterator<Item = Graha> + '_ {
        self.positions.placed().map(|(g, _)| g)
    }

    // -----------------------------------------------------------------------
    // Houses
    // -----------------------------------------------------------------------

    /// D1 house of a graha, None when not placed.
    pub fn house(&self, graha: Graha) -> Option<u8> {
        self.houses[graha.index() as usize]
    }

    /// D9 house of a graha, None when not placed or without a D9 ascendant.
    pub fn d9_house(&self, graha: Graha) -> Option<u8> {
        self.d9_houses[graha.index() as usize]
    }

    pub fn in_houses(&self, graha: Graha, houses: &[u8]) -> bool {
        self.house(graha).is_some_and(|h| houses.contains(&h))
    }

    pub fn in_kendra(&self, graha: Graha) -> bool {
        self.in_houses(graha, &KENDRA)
    }

    pub fn lord(&self, house: u8) -> Result<Graha, ConditionError> {
        self.house_lords
            .lord(house)
            .ok_or(ConditionError::MissingHouseLord(house))
    }

    /// House `n` counted from the house of `reference`.
    pub fn house_from(&self, reference: Graha, n: u8) -> Result<u8, ConditionError> {
        let h = self
            .house(reference)
            .ok_or(ConditionError::MissingData(reference))?;
        Ok(nth_house_from(h, n))
    }

    pub fn occupants(&self, house: u8) -> impl Iterator<Item = Graha> + '_ {
        self.placed_grahas()
            .filter(move |&g| self.house(g) == Some(house))
    }

    pub fn count_in_house(&self, house: u8) -> usize {
        self.occupants(house).count()
    }

    /// Distinct houses holding at least one graha outside `exclude`.
    pub fn occupied_houses(&self, exclude: &[Graha]) -> BTreeSet<u8> {
        self.placed_grahas()
            .filter(|g| !exclude.contains(g))
            .filter_map(|g| self.house(g))
            .collect()
    }

    /// Some run of `n` consecutive houses (wrapping 12 → 1) is fully occupied.
    pub fn has_consecutive_houses(&self, n: u8, exclude: &[Graha]) -> bool {
        let occupied = self.occupied_houses(exclude);
        occupied
            .iter()
            .any(|&start| (0..n).all(|k| occupied.contains(&nth_house_from(start, k + 1))))
    }

    // -----------------------------------------------------------------------
    // Conjunction and aspect
    // -----------------------------------------------------------------------

    /// Both placed and within the conjunction orb.
    pub fn conjunct(&self, a: Graha, b: Graha) -> bool {
        conjunct_in(&self.positions, a, b, self.conjunction_orb)
    }

    pub fn d9_conjunct(&self, a: Graha, b: Graha) -> bool {
        conjunct_in(&self.d9_positions, a, b, self.conjunction_orb)
    }

    /// Whether `caster` throws one of its drishti onto `target`.
    pub fn aspects(&self, caster: Graha, target: AspectTarget) -> bool {
        match target {
            AspectTarget::Graha(t) => aspect_in(&self.positions, caster, t, self.aspect_orb),
            AspectTarget::House(h) => {
                let Some(lon) = self.lon(caster) else {
                    return false;
                };
                (1..=12).contains(&h)
                    && aspect_points(caster, lon)
                        .into_iter()
                        .any(|p| house_number(p, self.ascendant) == h)
            }
        }
    }

    pub fn aspected_by_benefic(&self, target: Graha) -> bool {
        BENEFICS
            .iter()
            .any(|&b| self.aspects(b, AspectTarget::Graha(target)))
    }

    pub fn d9_aspected_by_benefic(&self, target: Graha) -> bool {
        BENEFICS
            .iter()
            .any(|&b| aspect_in(&self.d9_positions, b, target, self.aspect_orb))
    }

    /// Conjunct with a natural benefic other than itself.
    pub fn conjunct_benefic(&self, target: Graha) -> bool {
        BENEFICS
            .iter()
            .any(|&b| b != target && self.conjunct(b, target))
    }

    // -----------------------------------------------------------------------
    // Dignity
    // -----------------------------------------------------------------------

    pub fn state(&self, graha: Graha) -> Result<PlanetState, ConditionError> {
        Ok(planet_state(graha, &self.positions, self.dignities)?)
    }

    /// Placed and within the exaltation orb.
    pub fn is_exalted(&self, graha: Graha) -> Result<bool, ConditionError> {
        Ok(self.is_placed(graha) && self.state(graha)?.exalted)
    }

    /// Exalted, in own sign or angular, and not combust.
    pub fn is_strong(&self, graha: Graha) -> Result<bool, ConditionError> {
        if !self.is_placed(graha) {
            return Ok(false);
        }
        let state = self.state(graha)?;
        let dignified = state.exalted || state.sign_dignity == SignDignity::OwnSign;
        Ok((dignified || self.in_kendra(graha)) && !state.combust)
    }

    /// Pairs of classical grahas occupying each other's signs.
    pub fn exchange_pairs(&self) -> Vec<(Graha, Graha)> {
        let grahas: Vec<(Graha, f64)> = self
            .positions
            .placed()
            .filter(|(g, _)| !g.is_node())
            .collect();
        let mut pairs = Vec::new();
        for (i, &(a, la)) in grahas.iter().enumerate() {
            for &(b, lb) in &grahas[i + 1..] {
                if rashi_lord_by_index(sign_index(la)) == Some(b)
                    && rashi_lord_by_index(sign_index(lb)) == Some(a)
                {
                    pairs.push((a, b));
                }
            }
        }
        pairs
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Leo ascendant with a fixed set of placements used across the crate's tests.
    pub(crate) fn sample_positions() -> Positions {
        Positions::new()
            .with(Graha::Surya, 10.0) // Aries, 9th
            .with(Graha::Chandra, 95.0) // Cancer, 12th
            .with(Graha::Mangal, 298.0) // Capricorn, 6th
            .with(Graha::Buddh, 20.0) // Aries, 9th
            .with(Graha::Guru, 98.0) // Cancer, 12th
            .with(Graha::Shukra, 340.0) // Pisces, 8th
            .with(Graha::Shani, 200.0) // Libra, 3rd
            .with(Graha::Rahu, 60.0) // Gemini, 11th
            .with_ascendant(130.0)
    }

    pub(crate) fn state_for<'a>(
        positions: &'a Positions,
        d9: &'a Positions,
        lords: &'a HouseLords,
        dignities: &'a DivisionalDignities,
    ) -> ChartState<'a> {
        let inputs = YogaInputs {
            jd: 2451545.0,
            positions,
            speeds: &[0.0; 9],
            d9_positions: d9,
            house_lords: lords,
            dignities,
            is_day_birth: true,
        };
        ChartState::new(&inputs, &YogaConfig::default()).unwrap()
    }

    #[test]
    fn nth_house_counting() {
        assert_eq!(nth_house_from(1, 1), 1);
        assert_eq!(nth_house_from(1, 2), 2);
        assert_eq!(nth_house_from(1, 12), 12);
        assert_eq!(nth_house_from(12, 2), 1);
        assert_eq!(nth_house_from(5, 12), 4);
        assert_eq!(nth_house_from(10, 6), 3);
    }

    #[test]
    fn houses_from_leo_ascendant() {
        let p = sample_positions();
        let lords = HouseLords::from_ascendant(130.0);
        let d = DivisionalDignities::new();
        let d9 = Positions::new();
        let s = state_for(&p, &d9, &lords, &d);
        assert_eq!(s.house(Graha::Surya), Some(9));
        assert_eq!(s.house(Graha::Chandra), Some(12));
        assert_eq!(s.house(Graha::Ketu), Some(5));
        assert_eq!(s.d9_house(Graha::Surya), None);
        assert_eq!(s.count_in_house(9), 2);
        assert_eq!(s.house_from(Graha::Chandra, 2), Ok(1));
    }

    #[test]
    fn missing_ascendant_rejected() {
        let p = Positions::new().with(Graha::Surya, 10.0);
        let d = DivisionalDignities::new();
        let inputs = YogaInputs {
            jd: 0.0,
            positions: &p,
            speeds: &[0.0; 9],
            d9_positions: &Positions::new(),
            house_lords: &HouseLords::default(),
            dignities: &d,
            is_day_birth: true,
        };
        assert_eq!(
            ChartState::new(&inputs, &YogaConfig::default()).unwrap_err(),
            JyotishError::MissingAscendant
        );
    }

    #[test]
    fn longitudes_are_normalized() {
        let p = Positions::new()
            .with(Graha::Surya, 370.0)
            .with_ascendant(-20.0);
        let lords = HouseLords::from_ascendant(340.0);
        let d = DivisionalDignities::new();
        let d9 = Positions::new();
        let s = state_for(&p, &d9, &lords, &d);
        assert_eq!(s.lon(Graha::Surya), Some(10.0));
        assert_eq!(s.house(Graha::Surya), Some(2));
    }

    #[test]
    fn conjunction_uses_orb() {
        let p = sample_positions();
        let lords = HouseLords::from_ascendant(130.0);
        let d = DivisionalDignities::new();
        let d9 = Positions::new();
        let s = state_for(&p, &d9, &lords, &d);
        assert!(s.conjunct(Graha::Guru, Graha::Chandra));
        assert!(!s.conjunct(Graha::Surya, Graha::Shukra));
    }

    #[test]
    fn aspect_to_graha_and_house() {
        let p = sample_positions();
        let lords = HouseLords::from_ascendant(130.0);
        let d = DivisionalDignities::new();
        let d9 = Positions::new();
        let s = state_for(&p, &d9, &lords, &d);
        // Saturn at 200 casts its 10th aspect onto 110 and its 3rd onto 260.
        assert!(s.aspects(Graha::Shani, AspectTarget::House(12)));
        assert!(s.aspects(Graha::Shani, AspectTarget::House(5)));
        assert!(!s.aspects(Graha::Shani, AspectTarget::House(13)));
        // Mars at 298 casts its 7th aspect onto 118, 20 deg off Jupiter.
        assert!(!s.aspects(Graha::Mangal, AspectTarget::Graha(Graha::Guru)));
        // Sun at 10 opposes Saturn at 200 within 10 deg: outside the 5 deg orb.
        assert!(!s.aspects(Graha::Surya, AspectTarget::Graha(Graha::Shani)));
    }

    #[test]
    fn consecutive_houses_wrap() {
        let p = Positions::new()
            .with(Graha::Surya, 330.0)
            .with(Graha::Chandra, 5.0)
            .with(Graha::Mangal, 35.0)
            .with_ascendant(0.0);
        let lords = HouseLords::from_ascendant(0.0);
        let d = DivisionalDignities::new();
        let d9 = Positions::new();
        let s = state_for(&p, &d9, &lords, &d);
        assert!(s.has_consecutive_houses(3, &[]));
        assert!(!s.has_consecutive_houses(4, &[]));
    }

    #[test]
    fn exchange_between_mars_and_venus() {
        // Mars in Taurus, Venus in Aries.
        let p = Positions::new()
            .with(Graha::Mangal, 40.0)
            .with(Graha::Shukra, 10.0)
            .with_ascendant(0.0);
        let lords = HouseLords::from_ascendant(0.0);
        let d = DivisionalDignities::new();
        let d9 = Positions::new();
        let s = state_for(&p, &d9, &lords, &d);
        assert_eq!(s.exchange_pairs(), vec![(Graha::Mangal, Graha::Shukra)]);
    }

    #[test]
    fn strong_needs_no_combustion() {
        // Mercury in the 1st but 4 deg from the Sun.
        let p = Positions::new()
            .with(Graha::Surya, 10.0)
            .with(Graha::Buddh, 14.0)
            .with_ascendant(0.0);
        let lords = HouseLords::from_ascendant(0.0);
        let d = DivisionalDignities::new();
        let d9 = Positions::new();
        let s = state_for(&p, &d9, &lords, &d);
        assert_eq!(s.is_strong(Graha::Buddh), Ok(false));
        assert_eq!(s.is_strong(Graha::Surya), Ok(true));
        assert_eq!(s.is_strong(Graha::Guru), Ok(false));
    }
}
