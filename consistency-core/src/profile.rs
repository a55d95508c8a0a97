//! Behavioral trait scoring.
//!
//! Traits are scored by counting which keywords from a trait's lexicon
//! appear anywhere in the combined backstory and story text. Each keyword
//! contributes at most once regardless of how often it repeats.

use crate::lexicon::TraitLexicon;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hit counts strictly above this map to [`TraitLevel::High`].
const HIGH_THRESHOLD: usize = 3;

/// Hit counts strictly above this (and at or below [`HIGH_THRESHOLD`])
/// map to [`TraitLevel::Medium`].
const MEDIUM_THRESHOLD: usize = 1;

/// The fixed set of behavioral dimensions scored from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitKind {
    Violence,
    RiskTaking,
    Trustworthiness,
    AuthorityRespect,
}

impl TraitKind {
    /// All traits, in display order.
    pub const ALL: [TraitKind; 4] = [
        TraitKind::Violence,
        TraitKind::RiskTaking,
        TraitKind::Trustworthiness,
        TraitKind::AuthorityRespect,
    ];

    /// Get the display name for this trait.
    pub fn name(&self) -> &'static str {
        match self {
            TraitKind::Violence => "violence",
            TraitKind::RiskTaking => "risk_taking",
            TraitKind::Trustworthiness => "trustworthiness",
            TraitKind::AuthorityRespect => "authority_respect",
        }
    }
}

impl fmt::Display for TraitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordinal intensity level for a trait.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum TraitLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl TraitLevel {
    /// Map a keyword hit count to a level.
    pub fn from_hits(hits: usize) -> Self {
        if hits > HIGH_THRESHOLD {
            TraitLevel::High
        } else if hits > MEDIUM_THRESHOLD {
            TraitLevel::Medium
        } else {
            TraitLevel::Low
        }
    }

    /// Get the display name for this level.
    pub fn name(&self) -> &'static str {
        match self {
            TraitLevel::Low => "low",
            TraitLevel::Medium => "medium",
            TraitLevel::High => "high",
        }
    }
}

impl fmt::Display for TraitLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Score a single trait from the combined backstory and story text.
///
/// Concatenation order is irrelevant: the test is substring presence over
/// the case-folded whole. Empty text always scores [`TraitLevel::Low`].
pub fn trait_level(backstory: &str, story: &str, keywords: &[String]) -> TraitLevel {
    let text = format!("{backstory} {story}").to_lowercase();
    let hits = keywords
        .iter()
        .filter(|keyword| text.contains(keyword.to_lowercase().as_str()))
        .count();
    TraitLevel::from_hits(hits)
}

/// A character's scored trait profile. Created once per analysis and
/// never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitProfile {
    pub violence: TraitLevel,
    pub risk_taking: TraitLevel,
    pub trustworthiness: TraitLevel,
    pub authority_respect: TraitLevel,
}

impl TraitProfile {
    /// Score all four traits against the given lexicon.
    pub fn score(backstory: &str, story: &str, lexicon: &TraitLexicon) -> Self {
        let level = |kind| trait_level(backstory, story, lexicon.keywords(kind));
        Self {
            violence: level(TraitKind::Violence),
            risk_taking: level(TraitKind::RiskTaking),
            trustworthiness: level(TraitKind::Trustworthiness),
            authority_respect: level(TraitKind::AuthorityRespect),
        }
    }

    /// Get the level for a trait.
    pub fn level(&self, kind: TraitKind) -> TraitLevel {
        match kind {
            TraitKind::Violence => self.violence,
            TraitKind::RiskTaking => self.risk_taking,
            TraitKind::Trustworthiness => self.trustworthiness,
            TraitKind::AuthorityRespect => self.authority_respect,
        }
    }
}
