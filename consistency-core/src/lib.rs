//! Heuristic character-consistency reasoning over narrative text.
//!
//! This crate provides:
//! - Trait scoring across four behavioral dimensions
//! - Backstory claim segmentation and evidence matching
//! - A binary consistency judgment with a prose explanation
//! - A forward-looking behavior projection
//! - Follow-up question answering
//!
//! Everything is local keyword heuristics: no model, no network, no
//! persistence. The caller supplies three strings and renders the
//! returned structured result.
//!
//! # Quick Start
//!
//! ```
//! use consistency_core::{AnalysisError, AnalysisRequest, AnalysisSession};
//!
//! fn main() -> Result<(), AnalysisError> {
//!     let request = AnalysisRequest::new(
//!         "He refused the crown and never guarded the border again.",
//!         "He guarded the border loyally. He never once left his post.",
//!         "Kael",
//!     )?;
//!
//!     let session = AnalysisSession::new(request);
//!     let result = session.run()?;
//!     println!("{}", result.explanation);
//!
//!     let exchange = session.ask("Why did he change?");
//!     println!("{}", exchange.answer);
//!     Ok(())
//! }
//! ```

pub mod claims;
pub mod evidence;
pub mod judgment;
pub mod lexicon;
pub mod profile;
pub mod session;
pub mod synthesis;
pub mod testing;

// Primary public API
pub use claims::{segment_claims, Claim, ClaimId, ClaimVerdict};
pub use judgment::{aggregate, Consistency, CONTRADICTION_THRESHOLD};
pub use lexicon::TraitLexicon;
pub use profile::{TraitKind, TraitLevel, TraitProfile};
pub use session::{
    ask_follow_up, run_analysis, AnalysisError, AnalysisRequest, AnalysisResult, AnalysisSession,
    FollowUpExchange, ReasoningStage, ValidationError,
};
pub use synthesis::{Projection, Scenarios};
