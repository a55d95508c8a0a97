//! Claim evaluation against story evidence.
//!
//! Evaluation is keyword co-occurrence, not semantic entailment: a claim
//! overlaps the story when any of its longer words appears as a substring
//! of the story text, and a negation cue anywhere in the story turns an
//! overlapping claim into a contradiction. Chapter references in the
//! evidence text are synthetic, derived from the claim's position among
//! the story's segmented chunks.

use crate::claims::{segment_chapters, Claim, ClaimVerdict};
use crate::lexicon::TraitLexicon;

/// Words at or below this length are ignored by the overlap test.
const MIN_OVERLAP_WORD_LEN: usize = 4;

/// Evaluates backstory claims against a single story.
///
/// Constructed once per analysis; holds the case-folded story, the
/// character name for evidence interpolation, and the chapter count.
#[derive(Debug)]
pub struct ClaimEvaluator<'a> {
    story_lower: String,
    character: &'a str,
    chapter_count: usize,
    negation_cues: &'a [String],
}

impl<'a> ClaimEvaluator<'a> {
    /// Prepare an evaluator for the given story and character.
    pub fn new(story: &str, character: &'a str, lexicon: &'a TraitLexicon) -> Self {
        Self {
            story_lower: story.to_lowercase(),
            character,
            chapter_count: segment_chapters(story).len(),
            negation_cues: &lexicon.negation_cues,
        }
    }

    /// Evaluate one claim. `position` is the claim's index in segmentation
    /// order and drives the synthetic chapter reference.
    ///
    /// Deterministic and pure: identical inputs always produce the same
    /// verdict and evidence text.
    pub fn evaluate(&self, position: usize, text: &str) -> Claim {
        let claim_lower = text.to_lowercase();
        let overlap = words_overlap(&claim_lower, &self.story_lower);
        let negated = overlap && self.story_negates();
        let chapter = self.chapter_reference(position);

        let (verdict, evidence) = if negated {
            (
                ClaimVerdict::Contradicted,
                format!(
                    "In chapter {chapter}, {} acts without hesitation, directly violating this claim.",
                    self.character
                ),
            )
        } else if overlap {
            (
                ClaimVerdict::Supported,
                format!("Consistent behavior observed in chapter {chapter} of the narrative."),
            )
        } else {
            (
                ClaimVerdict::Mixed,
                "Limited direct evidence found in the provided text.".to_string(),
            )
        };

        Claim::new(text, verdict, evidence)
    }

    fn story_negates(&self) -> bool {
        self.negation_cues
            .iter()
            .any(|cue| self.story_lower.contains(cue.to_lowercase().as_str()))
    }

    fn chapter_reference(&self, position: usize) -> usize {
        (position + 1).min(self.chapter_count.max(1))
    }
}

/// True if any claim word longer than [`MIN_OVERLAP_WORD_LEN`] occurs as a
/// substring of the story. Both inputs must already be lower-cased.
fn words_overlap(claim: &str, story: &str) -> bool {
    claim
        .split_whitespace()
        .filter(|word| word.chars().count() > MIN_OVERLAP_WORD_LEN)
        .any(|word| story.contains(word))
}
