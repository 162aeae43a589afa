//! Error type for condition evaluation.

use jyotish_base::{Graha, JyotishError};
use thiserror::Error;

/// Failure while evaluating one named condition.
///
/// The detector logs these and counts the condition as not met.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ConditionError {
    /// A planet the condition is anchored on is not placed.
    #[error("condition needs {}, which is not placed", .0.english_name())]
    MissingData(Graha),
    /// The house-lord table has no entry for this house.
    #[error("no lord recorded for house {0}")]
    MissingHouseLord(u8),
    #[error(transparent)]
    Chart(#[from] JyotishError),
}
