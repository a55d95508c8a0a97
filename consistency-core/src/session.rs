//! AnalysisSession - the primary public API for consistency analysis.
//!
//! This module wraps validation, trait scoring, claim evaluation,
//! aggregation, and synthesis into a single request/response cycle. One
//! session holds one set of inputs; analysis runs as one atomic unit of
//! work and follow-up answering is reentrant against the same inputs.

use crate::claims::Claim;
use crate::evidence::ClaimEvaluator;
use crate::judgment::{aggregate, contradiction_count, Consistency};
use crate::lexicon::TraitLexicon;
use crate::profile::TraitProfile;
use crate::synthesis::projection::Projection;
use crate::synthesis::{explanation, followup, projection};
use crate::{claims, synthesis};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use thiserror::Error;
use tokio::sync::mpsc::UnboundedSender;

/// Minimum trimmed story length, exclusive.
pub const MIN_STORY_LEN: usize = 10;

/// Minimum trimmed backstory length, exclusive.
pub const MIN_BACKSTORY_LEN: usize = 5;

/// Minimum trimmed character-name length, exclusive.
pub const MIN_NAME_LEN: usize = 1;

/// Input precondition failures. Surfaced before any analysis work begins;
/// no partial result is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("story must be longer than {MIN_STORY_LEN} characters after trimming, got {0}")]
    StoryTooShort(usize),

    #[error("backstory must be longer than {MIN_BACKSTORY_LEN} characters after trimming, got {0}")]
    BackstoryTooShort(usize),

    #[error("character name must be longer than {MIN_NAME_LEN} character after trimming, got {0}")]
    NameTooShort(usize),
}

/// Errors from analysis operations.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An unexpected fault inside the pipeline, contained at the session
    /// boundary. The session stays usable afterwards.
    #[error("analysis failed: {0}")]
    Internal(String),
}

/// The cosmetic reasoning stages, in emission order.
///
/// Stage notifications are presentation pacing only; they never alter the
/// computed result, which is produced synchronously.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReasoningStage {
    TimelineExtraction,
    BehavioralMapping,
    ClaimIsolation,
    EvidenceCrossReference,
    FinalSynthesis,
}

impl ReasoningStage {
    /// All stages, in emission order.
    pub const ALL: [ReasoningStage; 5] = [
        ReasoningStage::TimelineExtraction,
        ReasoningStage::BehavioralMapping,
        ReasoningStage::ClaimIsolation,
        ReasoningStage::EvidenceCrossReference,
        ReasoningStage::FinalSynthesis,
    ];

    /// User-facing status label for this stage.
    pub fn label(&self) -> &'static str {
        match self {
            ReasoningStage::TimelineExtraction => {
                "Extracting narrative timeline and character events"
            }
            ReasoningStage::BehavioralMapping => "Mapping behavioral patterns",
            ReasoningStage::ClaimIsolation => "Isolating claims from the backstory profile",
            ReasoningStage::EvidenceCrossReference => {
                "Cross-referencing claims with story evidence"
            }
            ReasoningStage::FinalSynthesis => "Generating the final consistency judgment",
        }
    }
}

impl fmt::Display for ReasoningStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One validated analysis request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// The narrative the character acts in.
    pub story: String,

    /// The character's established backstory.
    pub backstory: String,

    /// The character's name.
    pub character: String,
}

impl AnalysisRequest {
    /// Create a request, enforcing the minimum trimmed lengths.
    pub fn new(
        story: impl Into<String>,
        backstory: impl Into<String>,
        character: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let request = Self {
            story: story.into(),
            backstory: backstory.into(),
            character: character.into(),
        };
        request.validate()?;
        Ok(request)
    }

    /// Re-check the length preconditions.
    ///
    /// Fields are public, so the pipeline re-validates before running
    /// rather than trusting construction-time checks alone.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let story_len = self.story.trim().chars().count();
        if story_len <= MIN_STORY_LEN {
            return Err(ValidationError::StoryTooShort(story_len));
        }

        let backstory_len = self.backstory.trim().chars().count();
        if backstory_len <= MIN_BACKSTORY_LEN {
            return Err(ValidationError::BackstoryTooShort(backstory_len));
        }

        let name_len = self.character.trim().chars().count();
        if name_len <= MIN_NAME_LEN {
            return Err(ValidationError::NameTooShort(name_len));
        }

        Ok(())
    }
}

/// The complete result of one analysis. Built once, immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Binary judgment: 1 consistent, 0 contradicted (wire form).
    pub prediction: Consistency,

    /// The character's scored trait profile.
    pub profile: TraitProfile,

    /// Evaluated claims, in backstory order.
    pub claims: Vec<Claim>,

    /// Prose justification of the judgment. Opaque display text.
    pub explanation: String,

    /// Forward-looking behavior forecast.
    pub projection: Projection,
}

impl AnalysisResult {
    /// Render the result as pretty JSON for a browser-side collaborator.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// A single follow-up question and its answer. Independent of any
/// [`AnalysisResult`]; the caller owns display and storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUpExchange {
    pub question: String,
    pub answer: String,
}

/// A consistency-analysis session.
///
/// Retains the validated inputs so follow-up questions can be answered
/// any number of times after the analysis itself has completed.
#[derive(Debug, Clone)]
pub struct AnalysisSession {
    request: AnalysisRequest,
    lexicon: TraitLexicon,
}

impl AnalysisSession {
    /// Create a session over a validated request, using the canonical
    /// keyword tables.
    pub fn new(request: AnalysisRequest) -> Self {
        Self {
            request,
            lexicon: TraitLexicon::default(),
        }
    }

    /// Swap in a custom keyword lexicon.
    pub fn with_lexicon(mut self, lexicon: TraitLexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// Get the request this session analyzes.
    pub fn request(&self) -> &AnalysisRequest {
        &self.request
    }

    /// Run the full analysis pipeline.
    pub fn run(&self) -> Result<AnalysisResult, AnalysisError> {
        self.run_inner(None)
    }

    /// Run the full analysis pipeline, emitting ordered stage labels on
    /// `progress` as each phase begins.
    ///
    /// Dropping the receiver cancels notification silently; the computed
    /// result is identical with or without a listener.
    pub fn run_with_progress(
        &self,
        progress: &UnboundedSender<ReasoningStage>,
    ) -> Result<AnalysisResult, AnalysisError> {
        self.run_inner(Some(progress))
    }

    /// Answer a follow-up question against the session's inputs.
    ///
    /// Pure in (question, inputs): repeated calls never influence each
    /// other or any prior result.
    pub fn ask(&self, question: impl Into<String>) -> FollowUpExchange {
        let question = question.into();
        let answer = followup::answer(
            &question,
            &self.request.story,
            &self.request.backstory,
            &self.request.character,
        );
        FollowUpExchange { question, answer }
    }

    fn run_inner(
        &self,
        progress: Option<&UnboundedSender<ReasoningStage>>,
    ) -> Result<AnalysisResult, AnalysisError> {
        self.request.validate()?;

        // Contain any synthesis fault at the session boundary so the
        // caller sees a single failure and the session stays usable.
        panic::catch_unwind(AssertUnwindSafe(|| self.analyze(progress)))
            .map_err(|payload| AnalysisError::Internal(panic_message(payload)))
    }

    fn analyze(&self, progress: Option<&UnboundedSender<ReasoningStage>>) -> AnalysisResult {
        let request = &self.request;

        notify(progress, ReasoningStage::TimelineExtraction);

        notify(progress, ReasoningStage::BehavioralMapping);
        let profile = TraitProfile::score(&request.backstory, &request.story, &self.lexicon);

        notify(progress, ReasoningStage::ClaimIsolation);
        let fragments = claims::segment_claims(&request.backstory);

        notify(progress, ReasoningStage::EvidenceCrossReference);
        let evaluator = ClaimEvaluator::new(&request.story, &request.character, &self.lexicon);
        let claims: Vec<Claim> = fragments
            .iter()
            .enumerate()
            .map(|(position, text)| evaluator.evaluate(position, text))
            .collect();

        notify(progress, ReasoningStage::FinalSynthesis);
        let prediction = aggregate(&claims);
        tracing::debug!(
            claims = claims.len(),
            contradictions = contradiction_count(&claims),
            "claim evaluation complete"
        );

        let explanation =
            explanation::explain(prediction, &request.character, &profile, &claims);
        let projection = projection::project(prediction, &request.character, &profile);

        tracing::info!(
            character = %request.character,
            prediction = prediction.value(),
            "analysis complete"
        );

        AnalysisResult {
            prediction,
            profile,
            claims,
            explanation,
            projection,
        }
    }
}

/// Run one analysis over raw inputs.
///
/// Convenience wrapper for one-shot callers; equivalent to building an
/// [`AnalysisRequest`] and [`AnalysisSession`] by hand.
pub fn run_analysis(
    story: &str,
    backstory: &str,
    character: &str,
) -> Result<AnalysisResult, AnalysisError> {
    let request = AnalysisRequest::new(story, backstory, character)?;
    AnalysisSession::new(request).run()
}

/// Answer a follow-up question over raw inputs.
///
/// Independent of any prior analysis; callable any number of times.
pub fn ask_follow_up(question: &str, story: &str, backstory: &str, character: &str) -> String {
    synthesis::answer(question, story, backstory, character)
}

fn notify(progress: Option<&UnboundedSender<ReasoningStage>>, stage: ReasoningStage) {
    if let Some(sender) = progress {
        // A dropped receiver means the caller abandoned the request;
        // there is nothing to clean up.
        let _ = sender.send(stage);
    }
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "analysis pipeline panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claims::ClaimVerdict;

    fn request() -> AnalysisRequest {
        AnalysisRequest::new(
            "He guarded the bridge through the winter and traded fairly in town.",
            "He guarded whatever he was given. He traded fairly with strangers.",
            "Aldric",
        )
        .unwrap()
    }

    #[test]
    fn test_request_validation_bounds() {
        // Story of exactly ten trimmed characters fails the exclusive bound.
        let err = AnalysisRequest::new("abcdefghij", "a backstory", "Kael").unwrap_err();
        assert_eq!(err, ValidationError::StoryTooShort(10));

        let err = AnalysisRequest::new("a long enough story", "12345", "Kael").unwrap_err();
        assert_eq!(err, ValidationError::BackstoryTooShort(5));

        let err = AnalysisRequest::new("a long enough story", "a backstory", "K").unwrap_err();
        assert_eq!(err, ValidationError::NameTooShort(1));

        // Whitespace does not count toward the minimums.
        let err =
            AnalysisRequest::new("  abcdefghij  ", "a backstory", "Kael").unwrap_err();
        assert_eq!(err, ValidationError::StoryTooShort(10));
    }

    #[test]
    fn test_validation_happens_before_any_work() {
        let mut req = request();
        req.story = "too short".to_string();
        let err = AnalysisSession::new(req).run().unwrap_err();
        assert!(matches!(err, AnalysisError::Validation(_)));
    }

    #[test]
    fn test_run_produces_ordered_claims() {
        let result = AnalysisSession::new(request()).run().unwrap();
        assert_eq!(result.claims.len(), 2);
        assert!(result.claims[0].text.starts_with("He guarded"));
        assert!(result.claims[1].text.starts_with("He traded"));
        assert_eq!(result.claims[0].verdict, ClaimVerdict::Supported);
        assert_eq!(result.prediction, Consistency::Consistent);
    }

    #[test]
    fn test_progress_stages_emit_in_order() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let session = AnalysisSession::new(request());
        let with_progress = session.run_with_progress(&tx).unwrap();

        let mut stages = Vec::new();
        while let Ok(stage) = rx.try_recv() {
            stages.push(stage);
        }
        assert_eq!(stages, ReasoningStage::ALL);

        // A listener never changes the outcome.
        let without_progress = session.run().unwrap();
        assert_eq!(with_progress.prediction, without_progress.prediction);
        assert_eq!(with_progress.explanation, without_progress.explanation);
    }

    #[test]
    fn test_dropped_receiver_does_not_fail_the_run() {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel::<ReasoningStage>();
        drop(rx);
        let result = AnalysisSession::new(request()).run_with_progress(&tx);
        assert!(result.is_ok());
    }

    #[test]
    fn test_follow_up_is_reentrant() {
        let session = AnalysisSession::new(request());
        let first = session.ask("Why did he change?");
        let second = session.ask("Why did he change?");
        assert_eq!(first, second);
        assert_eq!(first.question, "Why did he change?");
        assert!(!first.answer.is_empty());
    }

    #[test]
    fn test_session_reusable_after_run() {
        let session = AnalysisSession::new(request());
        let first = session.run().unwrap();
        let second = session.run().unwrap();
        assert_eq!(first.prediction, second.prediction);
        assert_eq!(first.claims.len(), second.claims.len());
    }

    #[test]
    fn test_stage_labels_are_nonempty_and_distinct() {
        let mut labels: Vec<&str> = ReasoningStage::ALL.iter().map(|s| s.label()).collect();
        assert!(labels.iter().all(|label| !label.is_empty()));
        labels.dedup();
        assert_eq!(labels.len(), ReasoningStage::ALL.len());
    }

    #[test]
    fn test_one_shot_entry_points() {
        let result = run_analysis(
            "He guarded the bridge through the winter and traded fairly in town.",
            "He guarded whatever he was given.",
            "Aldric",
        )
        .unwrap();
        assert!(result.prediction.is_consistent());

        let answer = ask_follow_up(
            "Why did he stay?",
            "He guarded the bridge through the winter.",
            "He guarded whatever he was given.",
            "Aldric",
        );
        assert!(answer.contains("tension"));
    }
}
