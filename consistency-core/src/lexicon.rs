//! Keyword configuration for trait scoring and claim evaluation.
//!
//! Keyword tables are data, not logic: callers can swap in their own
//! `TraitLexicon` without touching the scoring or evaluation code.

use crate::profile::TraitKind;
use serde::{Deserialize, Serialize};

/// Keyword cues for each behavioral trait, plus the negation cues used
/// during claim evaluation.
///
/// Matching is case-insensitive substring containment; every entry is
/// folded to lower case before comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitLexicon {
    pub violence: Vec<String>,
    pub risk_taking: Vec<String>,
    pub trustworthiness: Vec<String>,
    pub authority_respect: Vec<String>,
    /// Cues that, together with word overlap, mark a claim contradicted.
    pub negation_cues: Vec<String>,
}

impl TraitLexicon {
    /// Get the keyword list for a trait.
    pub fn keywords(&self, kind: TraitKind) -> &[String] {
        match kind {
            TraitKind::Violence => &self.violence,
            TraitKind::RiskTaking => &self.risk_taking,
            TraitKind::Trustworthiness => &self.trustworthiness,
            TraitKind::AuthorityRespect => &self.authority_respect,
        }
    }
}

impl Default for TraitLexicon {
    fn default() -> Self {
        DEFAULT_LEXICON.clone()
    }
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

lazy_static::lazy_static! {
    /// Canonical keyword tables.
    pub static ref DEFAULT_LEXICON: TraitLexicon = TraitLexicon {
        violence: words(&["violent", "aggressive", "angry", "kills", "attacks"]),
        risk_taking: words(&["risk", "dangerous", "gamble", "reckless", "bold"]),
        trustworthiness: words(&["trust", "loyal", "honest", "betrayal", "secret"]),
        authority_respect: words(&["law", "rule", "king", "police", "obey", "rebel"]),
        negation_cues: words(&["never", "didn't", "did not", "refused"]),
    };
}
