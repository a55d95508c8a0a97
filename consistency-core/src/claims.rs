//! Claim extraction from backstory text.
//!
//! A claim is an atomic assertion about the character, produced by sentence
//! segmentation of the backstory. Claims are created once, evaluated once,
//! and never mutated. The same segmentation applied to the story yields the
//! "chapter" chunks used for evidence citations.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Fragments whose trimmed length is at or below this are discarded as noise.
const MIN_FRAGMENT_LEN: usize = 10;

/// Unique identifier for a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClaimId(Uuid);

impl ClaimId {
    /// Create a new unique claim ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ClaimId {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of evaluating one claim against the story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimVerdict {
    Supported,
    Contradicted,
    Mixed,
}

impl ClaimVerdict {
    /// Get the display name for this verdict.
    pub fn name(&self) -> &'static str {
        match self {
            ClaimVerdict::Supported => "supported",
            ClaimVerdict::Contradicted => "contradicted",
            ClaimVerdict::Mixed => "mixed",
        }
    }
}

impl fmt::Display for ClaimVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A backstory claim with its evaluated verdict and evidence text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier.
    pub id: ClaimId,
    /// The claim statement, trimmed, as extracted from the backstory.
    pub text: String,
    /// How the story bears on this claim.
    pub verdict: ClaimVerdict,
    /// Human-readable justification for the verdict.
    pub evidence: String,
}

impl Claim {
    /// Create a new evaluated claim.
    pub fn new(text: impl Into<String>, verdict: ClaimVerdict, evidence: impl Into<String>) -> Self {
        Self {
            id: ClaimId::new(),
            text: text.into(),
            verdict,
            evidence: evidence.into(),
        }
    }
}

/// Split text on sentence-terminal punctuation into trimmed fragments,
/// keeping only those long enough to carry a statement.
fn segment(text: &str) -> Vec<String> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|fragment| fragment.chars().count() > MIN_FRAGMENT_LEN)
        .map(str::to_string)
        .collect()
}

/// Segment a backstory into ordered claim statements.
///
/// An empty backstory, or one with no qualifying fragment, yields an empty
/// sequence; the rest of the pipeline tolerates zero claims.
pub fn segment_claims(backstory: &str) -> Vec<String> {
    segment(backstory)
}

/// Segment a story into chapter chunks for evidence citation indices.
pub fn segment_chapters(story: &str) -> Vec<String> {
    segment(story)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segmentation_splits_on_terminal_punctuation() {
        let claims = segment_claims(
            "He guarded the northern gate. He feared nothing at all! Would he ever leave home?",
        );
        assert_eq!(
            claims,
            [
                "He guarded the northern gate",
                "He feared nothing at all",
                "Would he ever leave home",
            ]
        );
    }

    #[test]
    fn test_short_fragments_are_discarded() {
        let claims = segment_claims("Yes. No! He wandered the old roads for years.");
        assert_eq!(claims, ["He wandered the old roads for years"]);
    }

    #[test]
    fn test_boundary_length_fragment_is_discarded() {
        // Exactly ten characters trimmed, which does not qualify.
        assert!(segment_claims("ten chars,.").is_empty());
        // Eleven characters qualifies.
        assert_eq!(segment_claims("ten chars,,.").len(), 1);
    }

    #[test]
    fn test_empty_backstory_yields_no_claims() {
        assert!(segment_claims("").is_empty());
        assert!(segment_claims("   ").is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        let claims = segment_claims("First he sailed west. Later he settled inland.");
        assert_eq!(claims[0], "First he sailed west");
        assert_eq!(claims[1], "Later he settled inland");
    }

    #[test]
    fn test_resegmentation_adds_no_new_fragments() {
        let backstory = "He was raised among smiths. He trusted very few people.";
        let first = segment_claims(backstory);
        let rejoined = first.join(". ");
        let second = segment_claims(&rejoined);
        for fragment in &second {
            assert!(
                backstory.contains(fragment.as_str()),
                "unexpected fragment: {fragment}"
            );
        }
    }

    #[test]
    fn test_claim_ids_are_unique() {
        let a = Claim::new("He kept his word", ClaimVerdict::Supported, "seen in text");
        let b = Claim::new("He kept his word", ClaimVerdict::Supported, "seen in text");
        assert_ne!(a.id, b.id);
    }
}
