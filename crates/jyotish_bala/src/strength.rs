//! Strength aggregator: all six components per graha, Ishta/Kashta, and
//! a dense ranking by descending percentage.
//!
//! Per-graha work runs on the rayon pool; the ordered collect keeps the
//! traditional graha order so the final stable sort is deterministic.

use jyotish_base::util::is_valid_longitude;
use jyotish_base::{
    ALL_GRAHAS, Graha, JyotishError, SAPTA_GRAHAS, angular_distance, baladi_avastha, is_daytime,
    planet_state, round2,
};
use log::{debug, warn};
use rayon::prelude::*;

use crate::config::StrengthConfig;
use crate::phala::ishta_kashta;
use crate::shadbala::{avastha_bala, cheshta_bala, drik_bala, kala_bala, sthana_bala};
use crate::shadbala_types::StrengthInputs;
use crate::strength_types::{
    GrahaBreakdown, MAX_SHADBALA, StrengthBreakdown, StrengthReport, StrengthRow,
};

/// Compute, rank and explain the strength of every graha in the chart.
///
/// The seven classical grahas are always scored; Rahu and Ketu join when
/// `config.include_nodes` is set. A graha without a position, or whose
/// computation fails, is skipped with a warning.
///
/// Fails only when the chart is empty or the ascendant is missing or invalid.
pub fn compute_strengths(
    inputs: &StrengthInputs<'_>,
    config: &StrengthConfig,
) -> Result<StrengthReport, JyotishError> {
    let positions = inputs.positions;
    if positions.is_empty() {
        return Err(JyotishError::EmptyPositions);
    }
    let asc = positions.require_ascendant()?;
    if !is_valid_longitude(asc) {
        return Err(JyotishError::InvalidLongitude {
            body: "Ascendant",
            value: asc,
        });
    }

    let grahas: &[Graha] = if config.include_nodes {
        &ALL_GRAHAS
    } else {
        &SAPTA_GRAHAS
    };
    let is_day = is_daytime(positions).unwrap_or_else(|| {
        warn!("Sun not placed; elongation terms use 0 and the chart is treated as diurnal");
        true
    });

    let computed: Vec<Option<(StrengthRow, GrahaBreakdown)>> = grahas
        .par_iter()
        .map(|&graha| match graha_strength(graha, inputs, config, is_day) {
            Ok(pair) => Some(pair),
            Err(JyotishError::MissingData(g)) => {
                warn!("Skipping {}: no position data", g.english_name());
                None
            }
            Err(e) => {
                warn!("Skipping {}: {e}", graha.english_name());
                None
            }
        })
        .collect();

    let (mut rows, breakdowns): (Vec<StrengthRow>, Vec<GrahaBreakdown>) =
        computed.into_iter().flatten().unzip();

    rank_rows(&mut rows);
    debug!("Ranked {} of {} grahas", rows.len(), grahas.len());

    Ok(StrengthReport {
        rows,
        breakdown: StrengthBreakdown { grahas: breakdowns },
    })
}

/// Sort rows by descending percent and assign dense ranks from 1.
///
/// The sort is stable: equal percentages keep their incoming order.
pub fn rank_rows(rows: &mut [StrengthRow]) {
    rows.sort_by(|a, b| b.percent.total_cmp(&a.percent));
    for (i, row) in rows.iter_mut().enumerate() {
        row.rank = i + 1;
    }
}

/// Row and breakdown for a single graha.
pub fn graha_strength(
    graha: Graha,
    inputs: &StrengthInputs<'_>,
    config: &StrengthConfig,
    is_day: bool,
) -> Result<(StrengthRow, GrahaBreakdown), JyotishError> {
    let positions = inputs.positions;
    let sthana = sthana_bala(graha, positions, inputs.dignities, config.node_dig_bala)?;
    let lon = positions.require(graha)?;
    let sun_distance = positions.get(Graha::Surya).map(|s| angular_distance(lon, s));
    let elongation = sun_distance.unwrap_or(0.0);
    let speed = inputs.speed(graha);
    let state = planet_state(graha, positions, inputs.dignities)?;

    let cheshta = cheshta_bala(graha, speed, elongation);
    let breakdown = GrahaBreakdown {
        graha,
        sthana,
        cheshta,
        dig: sthana.dig,
        kala: kala_bala(graha, inputs.jd, is_day, elongation),
        avastha: avastha_bala(lon, positions.get(Graha::Chandra), &state),
        drik: drik_bala(graha, positions),
    };

    let total = round2(breakdown.total());
    let phala = ishta_kashta(
        graha,
        sthana.uchcha,
        cheshta,
        &state,
        sun_distance,
        speed,
        &config.phala,
    );
    let row = StrengthRow {
        graha,
        rank: 0,
        total,
        percent: round2(100.0 * total / MAX_SHADBALA),
        ishta: phala.ishta,
        kashta: phala.kashta,
        status: baladi_avastha(lon).status_label(),
        combined_state: state.combined_label(),
    };
    Ok((row, breakdown))
}
