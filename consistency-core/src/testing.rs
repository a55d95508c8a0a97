//! Testing utilities for the consistency engine.
//!
//! Deterministic scenario fixtures for integration tests. Each fixture
//! produces a known outcome end-to-end: contradicted, consistent, or
//! evidence-starved.

use crate::session::AnalysisRequest;

/// A scenario expected to produce prediction 0 (contradicted).
///
/// Both backstory claims share long words with a story that carries
/// negation cues, so both are flagged contradicted and cross the
/// aggregation threshold.
pub fn contradicted_scenario() -> AnalysisRequest {
    AnalysisRequest::new(
        "Kael refused to follow the king's law, never loyal to his old allies for even a day. \
         He was reckless and took risks without hesitation at every turn.",
        "Kael was known for being extremely loyal and law-abiding. \
         He never took unnecessary risks.",
        "Kael",
    )
    .expect("fixture inputs satisfy the length preconditions")
}

/// A scenario expected to produce prediction 1 with every claim supported.
pub fn consistent_scenario() -> AnalysisRequest {
    AnalysisRequest::new(
        "Mira kept her word to the villagers and guarded the bridge through the storm. \
         She spoke gently with strangers and traded fairly at the market.",
        "Mira always kept her word to the villagers nearby. \
         She guarded the weak whenever trouble arrived.",
        "Mira",
    )
    .expect("fixture inputs satisfy the length preconditions")
}

/// A scenario whose single claim shares no qualifying word with the story,
/// yielding a mixed verdict and a vacuously consistent prediction.
pub fn sparse_evidence_scenario() -> AnalysisRequest {
    AnalysisRequest::new(
        "The sun rose over the quiet harbor and gulls wheeled above the empty pier.",
        "Zara spent years mastering blades in remote mountain temples.",
        "Zara",
    )
    .expect("fixture inputs satisfy the length preconditions")
}

/// A scenario whose backstory segments into zero qualifying claims.
pub fn empty_claim_scenario() -> AnalysisRequest {
    AnalysisRequest::new(
        "The caravan crossed the dunes for nine days before reaching water.",
        "Stoic. Quiet. Brief.",
        "Imra",
    )
    .expect("fixture inputs satisfy the length preconditions")
}
