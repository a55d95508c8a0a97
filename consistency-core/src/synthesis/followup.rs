//! Follow-up question answering.
//!
//! Dispatch is ordered keyword matching over the lower-cased question,
//! first match wins. The small conditional fragments woven into each
//! template are illustrative heuristics over the inputs, nothing more.
//! Every call is stateless and pure.

/// Stories longer than this read as "complex" in the templates.
const COMPLEX_STORY_LEN: usize = 500;

/// Answer a freeform question about a finished analysis.
pub fn answer(question: &str, story: &str, backstory: &str, character: &str) -> String {
    let question = question.to_lowercase();
    if question.contains("why") || question.contains("reason") {
        causal_tension(story, backstory, character)
    } else if question.contains("motive") || question.contains("feeling") {
        emotional_dissonance(story, backstory, character)
    } else {
        narrative_consistency(story, backstory, character)
    }
}

fn causal_tension(story: &str, backstory: &str, character: &str) -> String {
    format!(
        "The tension traces back to the gap between who {character} claims to be and what \
         the {} narrative shows. The backstory projects {}, yet the story confronts them \
         with {}, and that collision is where the reasoning anchors its judgment.",
        arc_shape(story),
        self_image(backstory),
        catalyst(story),
    )
}

fn emotional_dissonance(story: &str, backstory: &str, character: &str) -> String {
    format!(
        "{character}'s motives read as dissonant: the backstory projects {}, while the \
         events surround them with {}. That emotional gap, not any single action, drives \
         how their feelings register across the {} arc.",
        self_image(backstory),
        pressure(story),
        arc_shape(story),
    )
}

fn narrative_consistency(story: &str, backstory: &str, character: &str) -> String {
    format!(
        "Across this {} narrative, {character}'s consistency comes down to whether the \
         backstory's picture of {} survives contact with {}. The claim table above is the \
         evidence trail for that comparison.",
        arc_shape(story),
        self_image(backstory),
        catalyst(story),
    )
}

fn self_image(backstory: &str) -> &'static str {
    if backstory.to_lowercase().contains("brave") {
        "a brave, forward-leaning self-image"
    } else {
        "a guarded, self-contained self-image"
    }
}

fn pressure(story: &str) -> &'static str {
    if story.to_lowercase().contains("fear") {
        "fear pressing in from the events around them"
    } else {
        "steady external pressure"
    }
}

fn catalyst(story: &str) -> &'static str {
    if story.to_lowercase().contains("dragon") {
        "the dragon at the heart of the tale"
    } else {
        "the forces driving the plot forward"
    }
}

fn arc_shape(story: &str) -> &'static str {
    if story.chars().count() > COMPLEX_STORY_LEN {
        "complex"
    } else {
        "simple"
    }
}
