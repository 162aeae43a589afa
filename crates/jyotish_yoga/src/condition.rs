//! Named yoga conditions and their dispatch table.
//!
//! Every condition is a pure predicate over [`ChartState`]. Lookup goes
//! through a name → fn pointer map built on first use; unknown names
//! evaluate to false.
//!
//! Houses are whole-sign from the ascendant. "From the Moon" counts are
//! inclusive: the Moon's own house is the 1st.

use std::collections::HashMap;
use std::sync::LazyLock;

use jyotish_base::util::sign_index;
use jyotish_base::{BENEFICS, Graha, MALEFICS, SignDignity, own_signs, rashi_lord_by_index};

use crate::chart_state::{AspectTarget, ChartState, KENDRA, TRIKONA, nth_house_from};
use crate::error::ConditionError;

pub type ConditionFn = fn(&ChartState<'_>) -> Result<bool, ConditionError>;

type Outcome = Result<bool, ConditionError>;

const KENDRA_TRIKONA: [u8; 6] = [1, 4, 7, 10, 5, 9];
const NODES: [Graha; 2] = [Graha::Rahu, Graha::Ketu];
/// Benefics that can stand apart from the Moon.
const NON_LUNAR_BENEFICS: [Graha; 2] = [Graha::Guru, Graha::Shukra];

// ---------------------------------------------------------------------------
// Shared shapes
// ---------------------------------------------------------------------------

fn lord_in(s: &ChartState<'_>, house: u8, targets: &[u8]) -> Outcome {
    Ok(s.in_houses(s.lord(house)?, targets))
}

/// Lord of `house` is conjunct `partner` and sits in a kendra.
fn lord_with_in_kendra(s: &ChartState<'_>, house: u8, partner: Graha) -> Outcome {
    let lord = s.lord(house)?;
    Ok(s.conjunct(lord, partner) && s.in_kendra(lord))
}

/// Lord of `house` occupies `house` and receives a benefic aspect.
fn lord_at_home_aspected(s: &ChartState<'_>, house: u8) -> Outcome {
    let lord = s.lord(house)?;
    Ok(s.house(lord) == Some(house) && s.aspected_by_benefic(lord))
}

/// Some graha occupies the `n`-th house from `reference`.
fn occupied_from(s: &ChartState<'_>, reference: Graha, n: u8) -> Outcome {
    Ok(s.count_in_house(s.house_from(reference, n)?) > 0)
}

fn occupied_on_both_sides(s: &ChartState<'_>, reference: Graha) -> Outcome {
    Ok(occupied_from(s, reference, 2)? && occupied_from(s, reference, 12)?)
}

fn any_in_house(s: &ChartState<'_>, grahas: &[Graha], house: u8) -> bool {
    grahas.iter().any(|&g| s.house(g) == Some(house))
}

fn all_in(s: &ChartState<'_>, grahas: &[Graha], houses: &[u8]) -> bool {
    grahas.iter().all(|&g| s.in_houses(g, houses))
}

fn houses_from_moon(s: &ChartState<'_>, counts: &[u8]) -> Result<Vec<u8>, ConditionError> {
    let moon = s
        .house(Graha::Chandra)
        .ok_or(ConditionError::MissingData(Graha::Chandra))?;
    Ok(counts.iter().map(|&n| nth_house_from(moon, n)).collect())
}

fn distinct_houses(s: &ChartState<'_>) -> usize {
    s.occupied_houses(&NODES).len()
}

/// Angular graha in one of the given signs (0-based).
fn mahapurusha(s: &ChartState<'_>, graha: Graha, signs: &[u8]) -> Outcome {
    Ok(s.in_kendra(graha) && s.lon(graha).is_some_and(|lon| signs.contains(&sign_index(lon))))
}

// ---------------------------------------------------------------------------
// Raj yoga
// ---------------------------------------------------------------------------

fn kendra_lord_in_trikona(s: &ChartState<'_>) -> Outcome {
    for h in KENDRA {
        if lord_in(s, h, &TRIKONA)? {
            return Ok(true);
        }
    }
    Ok(false)
}

fn trikona_lord_in_kendra(s: &ChartState<'_>) -> Outcome {
    for h in TRIKONA {
        if lord_in(s, h, &KENDRA)? {
            return Ok(true);
        }
    }
    Ok(false)
}

fn lord_aspects_lord(s: &ChartState<'_>, casters: &[u8], targets: &[u8]) -> Outcome {
    for &c in casters {
        let caster = s.lord(c)?;
        for &t in targets {
            let target = s.lord(t)?;
            if s.aspects(caster, AspectTarget::Graha(target)) {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

fn kendra_lord_aspects_trikona_lord(s: &ChartState<'_>) -> Outcome {
    lord_aspects_lord(s, &KENDRA, &TRIKONA)
}

fn trikona_lord_aspects_kendra_lord(s: &ChartState<'_>) -> Outcome {
    lord_aspects_lord(s, &TRIKONA, &KENDRA)
}

// ---------------------------------------------------------------------------
// Conjunctions
// ---------------------------------------------------------------------------

fn jupiter_moon_conjunction(s: &ChartState<'_>) -> Outcome {
    Ok(s.conjunct(Graha::Guru, Graha::Chandra))
}

fn jupiter_mars_conjunction(s: &ChartState<'_>) -> Outcome {
    Ok(s.conjunct(Graha::Guru, Graha::Mangal))
}

fn moon_mars_conjunction(s: &ChartState<'_>) -> Outcome {
    Ok(s.conjunct(Graha::Chandra, Graha::Mangal))
}

fn mercury_sun_conjunction(s: &ChartState<'_>) -> Outcome {
    Ok(s.conjunct(Graha::Buddh, Graha::Surya))
}

// ---------------------------------------------------------------------------
// Lunar and solar yogas
// ---------------------------------------------------------------------------

fn planets_in_2nd_from_moon(s: &ChartState<'_>) -> Outcome {
    occupied_from(s, Graha::Chandra, 2)
}

fn planets_in_12th_from_moon(s: &ChartState<'_>) -> Outcome {
    occupied_from(s, Graha::Chandra, 12)
}

fn planets_in_2nd_and_12th_from_moon(s: &ChartState<'_>) -> Outcome {
    occupied_on_both_sides(s, Graha::Chandra)
}

fn planets_in_2nd_from_sun(s: &ChartState<'_>) -> Outcome {
    occupied_from(s, Graha::Surya, 2)
}

fn planets_in_12th_from_sun(s: &ChartState<'_>) -> Outcome {
    occupied_from(s, Graha::Surya, 12)
}

fn planets_in_2nd_and_12th_from_sun(s: &ChartState<'_>) -> Outcome {
    occupied_on_both_sides(s, Graha::Surya)
}

/// Kemadruma: nothing but the Sun or the nodes flanks the Moon.
fn moon_without_planetary_support(s: &ChartState<'_>) -> Outcome {
    let flanks = [
        s.house_from(Graha::Chandra, 2)?,
        s.house_from(Graha::Chandra, 12)?,
    ];
    let supported = s
        .placed_grahas()
        .filter(|g| !matches!(g, Graha::Chandra | Graha::Surya | Graha::Rahu | Graha::Ketu))
        .any(|g| s.in_houses(g, &flanks));
    Ok(!supported)
}

fn moon_in_4th_with_benefics(s: &ChartState<'_>) -> Outcome {
    Ok(s.house(Graha::Chandra) == Some(4) && s.aspected_by_benefic(Graha::Chandra))
}

fn moon_in_4th_with_venus_and_jupiter(s: &ChartState<'_>) -> Outcome {
    Ok(all_in(s, &[Graha::Chandra, Graha::Shukra, Graha::Guru], &[4]))
}

fn benefics_in_6th_7th_8th_from_moon(s: &ChartState<'_>) -> Outcome {
    let houses = houses_from_moon(s, &[6, 7, 8])?;
    Ok(all_in(s, &NON_LUNAR_BENEFICS, &houses))
}

fn benefics_in_6th_7th_8th_from_moon_without_malefics(s: &ChartState<'_>) -> Outcome {
    let houses = houses_from_moon(s, &[6, 7, 8])?;
    Ok(all_in(s, &NON_LUNAR_BENEFICS, &houses)
        && !MALEFICS.iter().any(|&m| s.in_houses(m, &houses)))
}

fn benefics_in_3rd_6th_10th_11th_from_moon(s: &ChartState<'_>) -> Outcome {
    let houses = houses_from_moon(s, &[3, 6, 10, 11])?;
    Ok(all_in(s, &NON_LUNAR_BENEFICS, &houses))
}

fn sun_in_2nd_from_moon_with_jupiter(s: &ChartState<'_>) -> Outcome {
    let second = s.house_from(Graha::Chandra, 2)?;
    Ok(s.house(Graha::Surya) == Some(second) && s.conjunct(Graha::Guru, Graha::Surya))
}

/// Sakata: the Moon in the 6th, 8th or 12th from Jupiter.
fn moon_in_6th_8th_12th_from_jupiter(s: &ChartState<'_>) -> Outcome {
    let houses = [
        s.house_from(Graha::Guru, 6)?,
        s.house_from(Graha::Guru, 8)?,
        s.house_from(Graha::Guru, 12)?,
    ];
    Ok(s.in_houses(Graha::Chandra, &houses))
}

fn sun_in_10th_with_benefic_aspects(s: &ChartState<'_>) -> Outcome {
    Ok(s.house(Graha::Surya) == Some(10) && s.aspected_by_benefic(Graha::Surya))
}

fn day_birth_sun_moon_ascendant_in_odd_signs(s: &ChartState<'_>) -> Outcome {
    if !s.is_day_birth() {
        return Ok(false);
    }
    let odd = |lon: f64| sign_index(lon) % 2 == 0;
    Ok(s.lon(Graha::Surya).is_some_and(odd)
        && s.lon(Graha::Chandra).is_some_and(odd)
        && odd(s.ascendant()))
}

// ---------------------------------------------------------------------------
// Nabhasa (house distribution) yogas
// ---------------------------------------------------------------------------

fn planets_in_seven_houses(s: &ChartState<'_>) -> Outcome {
    Ok(distinct_houses(s) == 7)
}

fn planets_in_six_houses(s: &ChartState<'_>) -> Outcome {
    Ok(distinct_houses(s) == 6)
}

fn planets_in_five_houses(s: &ChartState<'_>) -> Outcome {
    Ok(distinct_houses(s) == 5)
}

fn planets_in_four_houses(s: &ChartState<'_>) -> Outcome {
    Ok(distinct_houses(s) == 4)
}

fn planets_in_three_houses(s: &ChartState<'_>) -> Outcome {
    Ok(distinct_houses(s) == 3)
}

fn planets_in_two_houses(s: &ChartState<'_>) -> Outcome {
    Ok(distinct_houses(s) == 2)
}

fn planets_distributed_in_multiple_houses(s: &ChartState<'_>) -> Outcome {
    Ok(distinct_houses(s) >= 4)
}

fn planets_in_first_four_houses(s: &ChartState<'_>) -> Outcome {
    let houses = s.occupied_houses(&NODES);
    Ok(!houses.is_empty() && houses.iter().all(|&h| h <= 4))
}

fn planets_in_two_adjacent_houses(s: &ChartState<'_>) -> Outcome {
    Ok(s.has_consecutive_houses(2, &NODES))
}

fn planets_in_three_consecutive_houses(s: &ChartState<'_>) -> Outcome {
    Ok(s.has_consecutive_houses(3, &NODES))
}

fn planets_in_four_consecutive_houses(s: &ChartState<'_>) -> Outcome {
    Ok(s.has_consecutive_houses(4, &NODES))
}

fn planets_in_five_consecutive_houses(s: &ChartState<'_>) -> Outcome {
    Ok(s.has_consecutive_houses(5, &NODES))
}

fn planets_in_single_house_except_sun_moon(s: &ChartState<'_>) -> Outcome {
    let houses =
        s.occupied_houses(&[Graha::Surya, Graha::Chandra, Graha::Rahu, Graha::Ketu]);
    Ok(houses.len() == 1)
}

fn all_kendras_occupied_by_planets(s: &ChartState<'_>) -> Outcome {
    let houses = s.occupied_houses(&NODES);
    Ok(KENDRA.iter().all(|h| houses.contains(h)))
}

// ---------------------------------------------------------------------------
// Benefic and malefic placement
// ---------------------------------------------------------------------------

fn benefic_in_10th(s: &ChartState<'_>) -> Outcome {
    Ok(any_in_house(s, &BENEFICS, 10))
}

fn benefics_flanking_ascendant(s: &ChartState<'_>) -> Outcome {
    Ok(any_in_house(s, &BENEFICS, 2) && any_in_house(s, &BENEFICS, 12))
}

fn malefics_flanking_ascendant(s: &ChartState<'_>) -> Outcome {
    Ok(any_in_house(s, &MALEFICS, 2) && any_in_house(s, &MALEFICS, 12))
}

fn benefics_in_3rd_and_11th_from_ascendant(s: &ChartState<'_>) -> Outcome {
    Ok(any_in_house(s, &BENEFICS, 3) && any_in_house(s, &BENEFICS, 11))
}

fn benefics_in_three_kendras(s: &ChartState<'_>) -> Outcome {
    let filled = KENDRA
        .iter()
        .filter(|&&h| any_in_house(s, &BENEFICS, h))
        .count();
    Ok(filled >= 3)
}

fn benefics_in_kendra_no_malefics_in_trikona(s: &ChartState<'_>) -> Outcome {
    let benefic_angular = BENEFICS.iter().any(|&b| s.in_kendra(b));
    let malefic_trinal = MALEFICS.iter().any(|&m| s.in_houses(m, &[5, 9]));
    Ok(benefic_angular && !malefic_trinal)
}

fn mars_in_3rd_with_benefic_aspects(s: &ChartState<'_>) -> Outcome {
    Ok(s.house(Graha::Mangal) == Some(3) && s.aspected_by_benefic(Graha::Mangal))
}

// ---------------------------------------------------------------------------
// Jupiter, Venus and Mercury placements
// ---------------------------------------------------------------------------

fn jupiter_in_9th_with_venus_in_kendra(s: &ChartState<'_>) -> Outcome {
    Ok(s.house(Graha::Guru) == Some(9) && s.in_kendra(Graha::Shukra))
}

fn jupiter_in_trikona_with_venus_in_kendra(s: &ChartState<'_>) -> Outcome {
    Ok(s.in_houses(Graha::Guru, &[5, 9]) && s.in_kendra(Graha::Shukra))
}

fn jupiter_in_5th_with_strong_mercury(s: &ChartState<'_>) -> Outcome {
    Ok(s.house(Graha::Guru) == Some(5) && s.is_strong(Graha::Buddh)?)
}

fn jupiter_with_venus_and_mercury_in(s: &ChartState<'_>, houses: &[u8]) -> Outcome {
    Ok(s.in_houses(Graha::Guru, houses)
        && s.conjunct(Graha::Shukra, Graha::Guru)
        && s.conjunct(Graha::Buddh, Graha::Guru))
}

fn jupiter_in_2nd_or_5th_with_venus_mercury(s: &ChartState<'_>) -> Outcome {
    jupiter_with_venus_and_mercury_in(s, &[2, 5])
}

fn jupiter_in_5th_or_9th_with_venus_mercury(s: &ChartState<'_>) -> Outcome {
    jupiter_with_venus_and_mercury_in(s, &[5, 9])
}

fn jupiter_venus_mercury_in_kendra_or_trikona(s: &ChartState<'_>) -> Outcome {
    Ok(all_in(
        s,
        &[Graha::Guru, Graha::Shukra, Graha::Buddh],
        &KENDRA_TRIKONA,
    ))
}

fn jupiter_mercury_venus_in_kendra_or_2nd(s: &ChartState<'_>) -> Outcome {
    Ok(all_in(
        s,
        &[Graha::Guru, Graha::Buddh, Graha::Shukra],
        &[1, 4, 7, 10, 2],
    ))
}

fn venus_in_5th_with_moon_and_jupiter(s: &ChartState<'_>) -> Outcome {
    Ok(s.house(Graha::Shukra) == Some(5)
        && s.conjunct(Graha::Chandra, Graha::Shukra)
        && s.conjunct(Graha::Guru, Graha::Shukra))
}

fn venus_in_kendra_with_moon_in_5th_or_9th(s: &ChartState<'_>) -> Outcome {
    Ok(s.in_kendra(Graha::Shukra) && s.in_houses(Graha::Chandra, &[5, 9]))
}

// ---------------------------------------------------------------------------
// Pancha Mahapurusha
// ---------------------------------------------------------------------------

fn mercury_in_kendra_in_own_or_exalted_sign(s: &ChartState<'_>) -> Outcome {
    mahapurusha(s, Graha::Buddh, &[2, 5])
}

fn venus_in_kendra_in_own_or_exalted_sign(s: &ChartState<'_>) -> Outcome {
    mahapurusha(s, Graha::Shukra, &[1, 6, 11])
}

fn mars_in_kendra_in_own_or_exalted_sign(s: &ChartState<'_>) -> Outcome {
    mahapurusha(s, Graha::Mangal, &[0, 7, 9])
}

fn jupiter_in_kendra_in_own_or_exalted_sign(s: &ChartState<'_>) -> Outcome {
    mahapurusha(s, Graha::Guru, &[8, 11, 3])
}

fn saturn_in_kendra_in_own_or_exalted_sign(s: &ChartState<'_>) -> Outcome {
    mahapurusha(s, Graha::Shani, &[9, 10, 6])
}

fn strong_planets_in_angular_houses(s: &ChartState<'_>) -> Outcome {
    for g in [
        Graha::Mangal,
        Graha::Buddh,
        Graha::Guru,
        Graha::Shukra,
        Graha::Shani,
    ] {
        if !s.in_kendra(g) {
            continue;
        }
        let state = s.state(g)?;
        if state.exalted || state.sign_dignity == SignDignity::OwnSign {
            return Ok(true);
        }
    }
    Ok(false)
}

// ---------------------------------------------------------------------------
// Ascendant lord
// ---------------------------------------------------------------------------

fn ascendant_lord_in_own_navamsa_with_benefics(s: &ChartState<'_>) -> Outcome {
    let lord = s.lord(1)?;
    if !s.is_placed(lord) {
        return Ok(false);
    }
    let Some(d9_lon) = s.d9_positions().get(lord) else {
        return Ok(false);
    };
    let own = own_signs(lord).contains(&sign_index(d9_lon));
    let associated = s.d9_aspected_by_benefic(lord)
        || BENEFICS.iter().any(|&b| b != lord && s.d9_conjunct(lord, b));
    Ok(own && associated)
}

fn ascendant_lord_in_1st_with_9th_lord_in_10th(s: &ChartState<'_>) -> Outcome {
    Ok(lord_in(s, 1, &[1])? && lord_in(s, 9, &[10])?)
}

fn ascendant_lord_in_kendra_with_jupiter_aspect(s: &ChartState<'_>) -> Outcome {
    let lord = s.lord(1)?;
    Ok(s.in_kendra(lord) && s.aspects(Graha::Guru, AspectTarget::Graha(lord)))
}

fn ascendant_lord_in_exaltation_with_9th_lord(s: &ChartState<'_>) -> Outcome {
    let lord = s.lord(1)?;
    let ninth = s.lord(9)?;
    Ok(s.is_exalted(lord)? && s.conjunct(lord, ninth))
}

fn ascendant_lord_venus_jupiter_in_kendra(s: &ChartState<'_>) -> Outcome {
    let lord = s.lord(1)?;
    Ok(all_in(s, &[lord, Graha::Shukra, Graha::Guru], &KENDRA))
}

fn lord_of_ascendant_with_moon_in_kendra(s: &ChartState<'_>) -> Outcome {
    lord_with_in_kendra(s, 1, Graha::Chandra)
}

// ---------------------------------------------------------------------------
// House-lord combinations
// ---------------------------------------------------------------------------

fn third_lord_in_6th_with_benefic_aspects(s: &ChartState<'_>) -> Outcome {
    let lord = s.lord(3)?;
    Ok(s.house(lord) == Some(6) && s.aspected_by_benefic(lord))
}

fn third_lord_with_mercury_in_kendra(s: &ChartState<'_>) -> Outcome {
    lord_with_in_kendra(s, 3, Graha::Buddh)
}

fn fourth_lord_in_kendra_with_strong_moon(s: &ChartState<'_>) -> Outcome {
    let lord = s.lord(4)?;
    Ok(s.in_kendra(lord)
        && s.is_strong(Graha::Chandra)?
        && s.conjunct(lord, Graha::Chandra))
}

fn fourth_lord_in_kendra_with_venus_or_jupiter(s: &ChartState<'_>) -> Outcome {
    let lord = s.lord(4)?;
    let Some(house) = s.house(lord) else {
        return Ok(false);
    };
    Ok(KENDRA.contains(&house)
        && (s.house(Graha::Shukra) == Some(house) || s.house(Graha::Guru) == Some(house)))
}

fn fourth_lord_with_moon_in_kendra(s: &ChartState<'_>) -> Outcome {
    lord_with_in_kendra(s, 4, Graha::Chandra)
}

fn fifth_lord_in_kendra_with_jupiter_in_5th(s: &ChartState<'_>) -> Outcome {
    Ok(lord_in(s, 5, &KENDRA)? && s.house(Graha::Guru) == Some(5))
}

fn sixth_lord_in_6th_with_benefic_aspects(s: &ChartState<'_>) -> Outcome {
    lord_at_home_aspected(s, 6)
}

fn seventh_lord_with_venus_in_kendra(s: &ChartState<'_>) -> Outcome {
    lord_with_in_kendra(s, 7, Graha::Shukra)
}

fn strong_7th_lord_in_kendra_with_jupiter(s: &ChartState<'_>) -> Outcome {
    let lord = s.lord(7)?;
    if !s.is_placed(Graha::Guru) || !s.in_kendra(lord) || !s.is_strong(lord)? {
        return Ok(false);
    }
    Ok(s.house(Graha::Guru) == s.house(lord)
        || s.aspects(Graha::Guru, AspectTarget::Graha(lord)))
}

fn eighth_lord_in_kendra_with_benefic_influence(s: &ChartState<'_>) -> Outcome {
    let lord = s.lord(8)?;
    Ok(s.in_kendra(lord) && (s.aspected_by_benefic(lord) || s.conjunct_benefic(lord)))
}

fn eighth_lord_in_8th_with_benefic_influence(s: &ChartState<'_>) -> Outcome {
    let lord = s.lord(8)?;
    Ok(s.house(lord) == Some(8) && (s.aspected_by_benefic(lord) || s.conjunct_benefic(lord)))
}

fn ninth_lord_in_exaltation(s: &ChartState<'_>) -> Outcome {
    s.is_exalted(s.lord(9)?)
}

fn ninth_lord_in_exaltation_with_ascendant_lord(s: &ChartState<'_>) -> Outcome {
    let ninth = s.lord(9)?;
    let first = s.lord(1)?;
    Ok(s.is_exalted(ninth)? && s.conjunct(ninth, first))
}

fn ninth_lord_with_venus_in_kendra_from_ascendant(s: &ChartState<'_>) -> Outcome {
    lord_with_in_kendra(s, 9, Graha::Shukra)
}

fn ninth_lord_with_sun_in_kendra(s: &ChartState<'_>) -> Outcome {
    lord_with_in_kendra(s, 9, Graha::Surya)
}

fn lord_of_9th_in_kendra_with_venus(s: &ChartState<'_>) -> Outcome {
    lord_with_in_kendra(s, 9, Graha::Shukra)
}

fn benefics_in_5th_with_9th_lord_in_kendra(s: &ChartState<'_>) -> Outcome {
    Ok(lord_in(s, 9, &KENDRA)? && any_in_house(s, &BENEFICS, 5))
}

fn tenth_lord_with_9th_lord_in_kendra(s: &ChartState<'_>) -> Outcome {
    let ninth = s.lord(9)?;
    lord_with_in_kendra(s, 10, ninth)
}

fn tenth_lord_in_1st_with_jupiter(s: &ChartState<'_>) -> Outcome {
    Ok(lord_in(s, 10, &[1])? && s.house(Graha::Guru) == Some(1))
}

fn tenth_lord_in_exaltation_with_6th_lord(s: &ChartState<'_>) -> Outcome {
    let tenth = s.lord(10)?;
    let sixth = s.lord(6)?;
    Ok(s.is_exalted(tenth)? && s.conjunct(tenth, sixth))
}

/// Dhwaja counts Mercury among the benefics that may fill the 9th.
fn tenth_lord_in_exaltation_with_benefic_in_9th(s: &ChartState<'_>) -> Outcome {
    let tenth = s.lord(10)?;
    let benefics = [Graha::Guru, Graha::Shukra, Graha::Buddh, Graha::Chandra];
    Ok(s.is_exalted(tenth)? && any_in_house(s, &benefics, 9))
}

fn twelfth_lord_in_12th_with_benefic_aspects(s: &ChartState<'_>) -> Outcome {
    lord_at_home_aspected(s, 12)
}

fn lords_of_2_11_in_kendra_or_trikona(s: &ChartState<'_>) -> Outcome {
    Ok(lord_in(s, 2, &KENDRA_TRIKONA)? || lord_in(s, 11, &KENDRA_TRIKONA)?)
}

fn lords_of_5th_6th_in_kendra_with_strong_ascendant(s: &ChartState<'_>) -> Outcome {
    let fifth = s.lord(5)?;
    let sixth = s.lord(6)?;
    let first = s.lord(1)?;
    Ok(s.conjunct(fifth, sixth) && s.in_kendra(fifth) && s.is_strong(first)?)
}

fn malefic_lords_of_6_8_12_in_6_8_12(s: &ChartState<'_>) -> Outcome {
    for h in [6, 8, 12] {
        if lord_in(s, h, &[6, 8, 12])? {
            return Ok(true);
        }
    }
    Ok(false)
}

fn malefic_lords_of_6_8_12_in_kendra(s: &ChartState<'_>) -> Outcome {
    for h in [6, 8, 12] {
        if lord_in(s, h, &KENDRA)? {
            return Ok(true);
        }
    }
    Ok(false)
}

// ---------------------------------------------------------------------------
// Cancellation and exchange
// ---------------------------------------------------------------------------

/// Neecha Bhanga: an angular debilitated graha whose sign lord sits,
/// uncombust, in a kendra or trikona.
fn debilitated_planet_in_kendra_with_strong_owner(s: &ChartState<'_>) -> Outcome {
    for (g, lon) in s.positions().placed() {
        if !s.in_kendra(g) || !s.state(g)?.debilitated {
            continue;
        }
        let Some(owner) = rashi_lord_by_index(sign_index(lon)) else {
            continue;
        };
        if s.is_placed(owner) && s.in_houses(owner, &KENDRA_TRIKONA) && !s.state(owner)?.combust
        {
            return Ok(true);
        }
    }
    Ok(false)
}

fn mutual_exchange_between_planets(s: &ChartState<'_>) -> Outcome {
    Ok(!s.exchange_pairs().is_empty())
}

// ---------------------------------------------------------------------------
// Dispatch table
// ---------------------------------------------------------------------------

const CONDITIONS: &[(&str, ConditionFn)] = &[
    ("kendra_lord_in_trikona", kendra_lord_in_trikona),
    ("trikona_lord_in_kendra", trikona_lord_in_kendra),
    ("kendra_lord_aspects_trikona_lord", kendra_lord_aspects_trikona_lord),
    ("trikona_lord_aspects_kendra_lord", trikona_lord_aspects_kendra_lord),
    ("jupiter_moon_conjunction", jupiter_moon_conjunction),
    ("jupiter_mars_conjunction", jupiter_mars_conjunction),
    ("moon_mars_conjunction", moon_mars_conjunction),
    ("mercury_sun_conjunction", mercury_sun_conjunction),
    ("planets_in_2nd_from_moon", planets_in_2nd_from_moon),
    ("planets_in_12th_from_moon", planets_in_12th_from_moon),
    ("planets_in_2nd_and_12th_from_moon", planets_in_2nd_and_12th_from_moon),
    ("planets_in_2nd_from_sun", planets_in_2nd_from_sun),
    ("planets_in_12th_from_sun", planets_in_12th_from_sun),
    ("planets_in_2nd_and_12th_from_sun", planets_in_2nd_and_12th_from_sun),
    ("moon_without_planetary_support", moon_without_planetary_support),
    ("moon_in_4th_with_benefics", moon_in_4th_with_benefics),
    ("moon_in_4th_with_venus_and_jupiter", moon_in_4th_with_venus_and_jupiter),
    ("benefics_in_6th_7th_8th_from_moon", benefics_in_6th_7th_8th_from_moon),
    (
        "benefics_in_6th_7th_8th_from_moon_without_malefics",
        benefics_in_6th_7th_8th_from_moon_without_malefics,
    ),
    (
        "benefics_in_3rd_6th_10th_11th_from_moon",
        benefics_in_3rd_6th_10th_11th_from_moon,
    ),
    ("sun_in_2nd_from_moon_with_jupiter", sun_in_2nd_from_moon_with_jupiter),
    ("moon_in_6th_8th_12th_from_jupiter", moon_in_6th_8th_12th_from_jupiter),
    ("sun_in_10th_with_benefic_aspects", sun_in_10th_with_benefic_aspects),
    (
        "day_birth_sun_moon_ascendant_in_odd_signs",
        day_birth_sun_moon_ascendant_in_odd_signs,
    ),
    ("planets_in_seven_houses", planets_in_seven_houses),
    ("planets_in_six_houses", planets_in_six_houses),
    ("planets_in_five_houses", planets_in_five_houses),
    ("planets_in_four_houses", planets_in_four_houses),
    ("planets_in_three_houses", planets_in_three_houses),
    ("planets_in_two_houses", planets_in_two_houses),
    ("planets_distributed_in_multiple_houses", planets_distributed_in_multiple_houses),
    ("planets_in_first_four_houses", planets_in_first_four_houses),
    ("planets_in_two_adjacent_houses", planets_in_two_adjacent_houses),
    ("planets_in_three_consecutive_houses", planets_in_three_consecutive_houses),
    ("planets_in_four_consecutive_houses", planets_in_four_consecutive_houses),
    ("planets_in_five_consecutive_houses", planets_in_five_consecutive_houses),
    (
        "planets_in_single_house_except_sun_moon",
        planets_in_single_house_except_sun_moon,
    ),
    ("all_kendras_occupied_by_planets", all_kendras_occupied_by_planets),
    ("benefic_in_10th", benefic_in_10th),
    ("benefics_flanking_ascendant", benefics_flanking_ascendant),
    ("malefics_flanking_ascendant", malefics_flanking_ascendant),
    ("benefics_in_3rd_and_11th_from_ascendant", benefics_in_3rd_and_11th_from_ascendant),
    ("benefics_in_three_kendras", benefics_in_three_kendras),
    (
        "benefics_in_kendra_no_malefics_in_trikona",
        benefics_in_kendra_no_malefics_in_trikona,
    ),
    ("mars_in_3rd_with_benefic_aspects", mars_in_3rd_with_benefic_aspects),
    ("jupiter_in_9th_with_venus_in_kendra", jupiter_in_9th_with_venus_in_kendra),
    ("jupiter_in_trikona_with_venus_in_kendra", jupiter_in_trikona_with_venus_in_kendra),
    ("jupiter_in_5th_with_strong_mercury", jupiter_in_5th_with_strong_mercury),
    ("jupiter_in_2nd_or_5th_with_venus_mercury", jupiter_in_2nd_or_5th_with_venus_mercury),
    ("jupiter_in_5th_or_9th_with_venus_mercury", jupiter_in_5th_or_9th_with_venus_mercury),
    (
        "jupiter_venus_mercury_in_kendra_or_trikona",
        jupiter_venus_mercury_in_kendra_or_trikona,
    ),
    ("jupiter_mercury_venus_in_kendra_or_2nd", jupiter_mercury_venus_in_kendra_or_2nd),
    ("venus_in_5th_with_moon_and_jupiter", venus_in_5th_with_moon_and_jupiter),
    ("venus_in_kendra_with_moon_in_5th_or_9th", venus_in_kendra_with_moon_in_5th_or_9th),
    (
        "mercury_in_kendra_in_own_or_exalted_sign",
        mercury_in_kendra_in_own_or_exalted_sign,
    ),
    ("venus_in_kendra_in_own_or_exalted_sign", venus_in_kendra_in_own_or_exalted_sign),
    ("mars_in_kendra_in_own_or_exalted_sign", mars_in_kendra_in_own_or_exalted_sign),
    (
        "jupiter_in_kendra_in_own_or_exalted_sign",
        jupiter_in_kendra_in_own_or_exalted_sign,
    ),
    ("saturn_in_kendra_in_own_or_exalted_sign", saturn_in_kendra_in_own_or_exalted_sign),
    ("strong_planets_in_angular_houses", strong_planets_in_angular_houses),
    (
        "ascendant_lord_in_own_navamsa_with_benefics",
        ascendant_lord_in_own_navamsa_with_benefics,
    ),
    (
        "ascendant_lord_in_1st_with_9th_lord_in_10th",
        ascendant_lord_in_1st_with_9th_lord_in_10th,
    ),
    (
        "ascendant_lord_in_kendra_with_jupiter_aspect",
        ascendant_lord_in_kendra_with_jupiter_aspect,
    ),
    (
        "ascendant_lord_in_exaltation_with_9th_lord",
        ascendant_lord_in_exaltation_with_9th_lord,
    ),
    ("ascendant_lord_venus_jupiter_in_kendra", ascendant_lord_venus_jupiter_in_kendra),
    ("lord_of_ascendant_with_moon_in_kendra", lord_of_ascendant_with_moon_in_kendra),
    ("3rd_lord_in_6th_with_benefic_aspects", third_lord_in_6th_with_benefic_aspects),
    ("3rd_lord_with_mercury_in_kendra", third_lord_with_mercury_in_kendra),
    ("4th_lord_in_kendra_with_strong_moon", fourth_lord_in_kendra_with_strong_moon),
    (
        "4th_lord_in_kendra_with_venus_or_jupiter",
        fourth_lord_in_kendra_with_venus_or_jupiter,
    ),
    ("4th_lord_with_moon_in_kendra", fourth_lord_with_moon_in_kendra),
    ("5th_lord_in_kendra_with_jupiter_in_5th", fifth_lord_in_kendra_with_jupiter_in_5th),
    ("6th_lord_in_6th_with_benefic_aspects", sixth_lord_in_6th_with_benefic_aspects),
    ("7th_lord_with_venus_in_kendra", seventh_lord_with_venus_in_kendra),
    ("strong_7th_lord_in_kendra_with_jupiter", strong_7th_lord_in_kendra_with_jupiter),
    (
        "8th_lord_in_kendra_with_benefic_influence",
        eighth_lord_in_kendra_with_benefic_influence,
    ),
    ("8th_lord_in_8th_with_benefic_influence", eighth_lord_in_8th_with_benefic_influence),
    ("9th_lord_in_exaltation", ninth_lord_in_exaltation),
    (
        "9th_lord_in_exaltation_with_ascendant_lord",
        ninth_lord_in_exaltation_with_ascendant_lord,
    ),
    (
        "9th_lord_with_venus_in_kendra_from_ascendant",
        ninth_lord_with_venus_in_kendra_from_ascendant,
    ),
    ("9th_lord_with_sun_in_kendra", ninth_lord_with_sun_in_kendra),
    ("lord_of_9th_in_kendra_with_venus", lord_of_9th_in_kendra_with_venus),
    ("benefics_in_5th_with_9th_lord_in_kendra", benefics_in_5th_with_9th_lord_in_kendra),
    ("10th_lord_with_9th_lord_in_kendra", tenth_lord_with_9th_lord_in_kendra),
    ("10th_lord_in_1st_with_jupiter", tenth_lord_in_1st_with_jupiter),
    ("10th_lord_in_exaltation_with_6th_lord", tenth_lord_in_exaltation_with_6th_lord),
    (
        "10th_lord_in_exaltation_with_benefic_in_9th",
        tenth_lord_in_exaltation_with_benefic_in_9th,
    ),
    ("12th_lord_in_12th_with_benefic_aspects", twelfth_lord_in_12th_with_benefic_aspects),
    ("lords_of_2_11_in_kendra_or_trikona", lords_of_2_11_in_kendra_or_trikona),
    (
        "lords_of_5th_6th_in_kendra_with_strong_ascendant",
        lords_of_5th_6th_in_kendra_with_strong_ascendant,
    ),
    ("malefic_lords_of_6_8_12_in_6_8_12", malefic_lords_of_6_8_12_in_6_8_12),
    ("malefic_lords_of_6_8_12_in_kendra", malefic_lords_of_6_8_12_in_kendra),
    (
        "debilitated_planet_in_kendra_with_strong_owner",
        debilitated_planet_in_kendra_with_strong_owner,
    ),
    ("mutual_exchange_between_planets", mutual_exchange_between_planets),
];

static DISPATCH: LazyLock<HashMap<&'static str, ConditionFn>> =
    LazyLock::new(|| CONDITIONS.iter().copied().collect());

/// Evaluate a named condition. Unknown names are not met.
pub fn evaluate_condition(name: &str, state: &ChartState<'_>) -> Result<bool, ConditionError> {
    match DISPATCH.get(name) {
        Some(f) => f(state),
        None => {
            log::debug!("Unknown condition: {name}");
            Ok(false)
        }
    }
}

pub fn is_known_condition(name: &str) -> bool {
    DISPATCH.contains_key(name)
}

/// Every known condition name, in registration order.
pub fn condition_names() -> impl Iterator<Item = &'static str> {
    CONDITIONS.iter().map(|(name, _)| *name)
}

/// Display form of a condition name: "4th_lord_with_moon" → "4th Lord With Moon".
pub fn condition_display(name: &str) -> String {
    name.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(c) => c.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart_state::tests::{sample_positions, state_for};
    use jyotish_base::{DivisionalDignities, HouseLords, Positions};

    fn eval(name: &str, positions: &Positions) -> Outcome {
        let asc = positions.ascendant().unwrap_or(0.0);
        let lords = HouseLords::from_ascendant(asc);
        let d = DivisionalDignities::new();
        let d9 = Positions::new();
        let s = state_for(positions, &d9, &lords, &d);
        evaluate_condition(name, &s)
    }

    #[test]
    fn registry_has_no_duplicates() {
        let names: Vec<_> = condition_names().collect();
        assert_eq!(names.len(), DISPATCH.len());
        assert!(names.len() >= 94);
    }

    #[test]
    fn unknown_condition_is_false() {
        assert_eq!(eval("no_such_condition", &sample_positions()), Ok(false));
        assert!(!is_known_condition("no_such_condition"));
    }

    #[test]
    fn gajakesari_orb_boundary() {
        let base = Positions::new().with(Graha::Chandra, 100.0).with_ascendant(0.0);
        let at_orb = base.clone().with(Graha::Guru, 108.0);
        let past_orb = base.clone().with(Graha::Guru, 108.5);
        let across_zero = Positions::new()
            .with(Graha::Chandra, 357.0)
            .with(Graha::Guru, 3.0)
            .with_ascendant(0.0);
        assert_eq!(eval("jupiter_moon_conjunction", &at_orb), Ok(true));
        assert_eq!(eval("jupiter_moon_conjunction", &past_orb), Ok(false));
        assert_eq!(eval("jupiter_moon_conjunction", &across_zero), Ok(true));
    }

    #[test]
    fn lunar_flanks() {
        // Moon in the 12th (Cancer from Leo); Sun and Mercury sit in the 9th.
        let p = sample_positions();
        // 2nd from the Moon is the 1st house: empty.
        assert_eq!(eval("planets_in_2nd_from_moon", &p), Ok(false));
        // 12th from the Moon is the 11th house: Rahu.
        assert_eq!(eval("planets_in_12th_from_moon", &p), Ok(true));
        assert_eq!(eval("planets_in_2nd_and_12th_from_moon", &p), Ok(false));
        // Only Rahu flanks the Moon, which does not count as support.
        assert_eq!(eval("moon_without_planetary_support", &p), Ok(true));
    }

    #[test]
    fn moon_relative_needs_moon() {
        let p = Positions::new().with(Graha::Surya, 10.0).with_ascendant(0.0);
        assert_eq!(
            eval("planets_in_2nd_from_moon", &p),
            Err(ConditionError::MissingData(Graha::Chandra))
        );
    }

    #[test]
    fn house_distribution() {
        let p = sample_positions();
        // Non-node houses: 9 (Su, Me), 12 (Mo, Ju), 6, 8, 3 → five houses.
        assert_eq!(eval("planets_in_five_houses", &p), Ok(true));
        assert_eq!(eval("planets_in_four_houses", &p), Ok(false));
        assert_eq!(eval("planets_distributed_in_multiple_houses", &p), Ok(true));
        // The 8th and 9th are adjacent; nothing extends them to three.
        assert_eq!(eval("planets_in_two_adjacent_houses", &p), Ok(true));
        assert_eq!(eval("planets_in_three_consecutive_houses", &p), Ok(false));
        assert_eq!(eval("all_kendras_occupied_by_planets", &p), Ok(false));
    }

    #[test]
    fn mahapurusha_in_own_sign_kendra() {
        // Libra ascendant, Saturn in Libra (1st), Jupiter in Cancer (10th).
        let p = Positions::new()
            .with(Graha::Shani, 200.0)
            .with(Graha::Guru, 95.0)
            .with(Graha::Shukra, 40.0)
            .with_ascendant(190.0);
        assert_eq!(eval("saturn_in_kendra_in_own_or_exalted_sign", &p), Ok(true));
        assert_eq!(eval("jupiter_in_kendra_in_own_or_exalted_sign", &p), Ok(true));
        // Venus in Taurus is the 8th house.
        assert_eq!(eval("venus_in_kendra_in_own_or_exalted_sign", &p), Ok(false));
        assert_eq!(eval("strong_planets_in_angular_houses", &p), Ok(true));
    }

    #[test]
    fn raj_yoga_lords() {
        // Aries ascendant: Mars rules 1 (a trikona and kendra) and sits in the 5th.
        let p = Positions::new().with(Graha::Mangal, 125.0).with_ascendant(5.0);
        assert_eq!(eval("kendra_lord_in_trikona", &p), Ok(true));
        assert_eq!(eval("trikona_lord_in_kendra", &p), Ok(false));
    }

    #[test]
    fn missing_house_lord_is_an_error() {
        let p = sample_positions();
        let lords = HouseLords::default();
        let d = DivisionalDignities::new();
        let d9 = Positions::new();
        let s = state_for(&p, &d9, &lords, &d);
        assert_eq!(
            evaluate_condition("kendra_lord_in_trikona", &s),
            Err(ConditionError::MissingHouseLord(1))
        );
    }

    #[test]
    fn vipareeta_lords_loop_over_all_three() {
        // Aries ascendant: 6th lord Mercury, 8th Mars, 12th Jupiter.
        // Mercury in the 1st; Jupiter in the 12th.
        let p = Positions::new()
            .with(Graha::Buddh, 10.0)
            .with(Graha::Mangal, 100.0)
            .with(Graha::Guru, 350.0)
            .with_ascendant(0.0);
        assert_eq!(eval("malefic_lords_of_6_8_12_in_6_8_12", &p), Ok(true));
        assert_eq!(eval("malefic_lords_of_6_8_12_in_kendra", &p), Ok(true));
    }

    #[test]
    fn neecha_bhanga() {
        // Aries ascendant. Sun debilitated in Libra (7th); Venus owns Libra
        // and sits in Cancer (4th), far from the Sun.
        let p = Positions::new()
            .with(Graha::Surya, 190.0)
            .with(Graha::Shukra, 100.0)
            .with_ascendant(0.0);
        assert_eq!(eval("debilitated_planet_in_kendra_with_strong_owner", &p), Ok(true));
        let weak_owner = Positions::new()
            .with(Graha::Surya, 190.0)
            .with(Graha::Shukra, 70.0)
            .with_ascendant(0.0);
        assert_eq!(
            eval("debilitated_planet_in_kendra_with_strong_owner", &weak_owner),
            Ok(false)
        );
    }

    #[test]
    fn maha_bhagya_needs_day_and_odd_signs() {
        let p = Positions::new()
            .with(Graha::Surya, 10.0)
            .with(Graha::Chandra, 70.0)
            .with_ascendant(130.0);
        assert_eq!(eval("day_birth_sun_moon_ascendant_in_odd_signs", &p), Ok(true));
        let even_moon = p.clone().with(Graha::Chandra, 40.0);
        assert_eq!(
            eval("day_birth_sun_moon_ascendant_in_odd_signs", &even_moon),
            Ok(false)
        );
    }

    #[test]
    fn kartari_around_ascendant() {
        let p = Positions::new()
            .with(Graha::Guru, 40.0)
            .with(Graha::Shukra, 350.0)
            .with(Graha::Shani, 45.0)
            .with_ascendant(10.0);
        assert_eq!(eval("benefics_flanking_ascendant", &p), Ok(true));
        assert_eq!(eval("malefics_flanking_ascendant", &p), Ok(false));
    }

    #[test]
    fn display_titles_words() {
        assert_eq!(
            condition_display("4th_lord_with_moon_in_kendra"),
            "4th Lord With Moon In Kendra"
        );
        assert_eq!(condition_display("benefic_in_10th"), "Benefic In 10th");
    }
}
