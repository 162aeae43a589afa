//! Error types for chart data and classification.

use thiserror::Error;

use crate::graha::Graha;

/// Errors from chart construction, validation and classification.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum JyotishError {
    /// A planet required by the computation has no longitude.
    #[error("missing position for {}", .0.english_name())]
    MissingData(Graha),
    /// A longitude outside [0, 360) or not finite.
    #[error("invalid longitude for {body}: {value} (expected [0, 360))")]
    InvalidLongitude { body: &'static str, value: f64 },
    /// The chart carries no ascendant degree.
    #[error("ascendant missing from chart")]
    MissingAscendant,
    /// No planet positions supplied at all.
    #[error("empty position map")]
    EmptyPositions,
    /// A body name that is neither a graha nor the ascendant.
    #[error("unknown body: {0}")]
    UnknownBody(String),
    /// A divisional chart code outside D1..D60.
    #[error("unknown varga code: {0}")]
    UnknownVarga(String),
    /// A dignity label outside the fixed vocabulary.
    #[error("unknown dignity label: {0}")]
    UnknownDignity(String),
    /// A house number outside 1..=12.
    #[error("invalid house number: {0}")]
    InvalidHouse(u8),
}
