//! Final consistency judgment.
//!
//! Aggregates per-claim verdicts into the binary prediction. The rule is a
//! hard threshold on the contradicted-claim count; mixed and supported
//! claims never contribute.

use crate::claims::{Claim, ClaimVerdict};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of contradicted claims at which the judgment flips.
pub const CONTRADICTION_THRESHOLD: usize = 2;

/// Raised when deserializing a prediction value other than 0 or 1.
#[derive(Debug, Error)]
#[error("invalid prediction value {0}, expected 0 or 1")]
pub struct InvalidPrediction(pub u8);

/// The binary consistency prediction.
///
/// Serializes as `0` (contradicted) or `1` (consistent) for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Consistency {
    Contradicted,
    Consistent,
}

impl Consistency {
    /// The wire value: 0 for contradicted, 1 for consistent.
    pub fn value(&self) -> u8 {
        match self {
            Consistency::Contradicted => 0,
            Consistency::Consistent => 1,
        }
    }

    /// Whether the character was judged consistent.
    pub fn is_consistent(&self) -> bool {
        matches!(self, Consistency::Consistent)
    }

    /// Upper-case status word for prose templates.
    pub fn status(&self) -> &'static str {
        match self {
            Consistency::Contradicted => "CONTRADICTED",
            Consistency::Consistent => "CONSISTENT",
        }
    }
}

impl From<Consistency> for u8 {
    fn from(value: Consistency) -> Self {
        value.value()
    }
}

impl TryFrom<u8> for Consistency {
    type Error = InvalidPrediction;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Consistency::Contradicted),
            1 => Ok(Consistency::Consistent),
            other => Err(InvalidPrediction(other)),
        }
    }
}

/// Count the contradicted claims in a sequence.
pub fn contradiction_count(claims: &[Claim]) -> usize {
    claims
        .iter()
        .filter(|claim| claim.verdict == ClaimVerdict::Contradicted)
        .count()
}

/// Aggregate per-claim verdicts into the final prediction.
///
/// Zero claims vacuously aggregate to consistent.
pub fn aggregate(claims: &[Claim]) -> Consistency {
    if contradiction_count(claims) >= CONTRADICTION_THRESHOLD {
        Consistency::Contradicted
    } else {
        Consistency::Consistent
    }
}
