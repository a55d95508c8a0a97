//! Natural-language justification of the final judgment.

use crate::claims::{Claim, ClaimVerdict};
use crate::judgment::Consistency;
use crate::profile::TraitProfile;

/// Fallback quote when no contradicted claim exists. Aggregation requires
/// two contradictions before the contradicted branch is reachable, so this
/// should never surface.
const NO_BROKEN_CLAIM: &str = "the character is consistent";

/// Produce the prose explanation for a finished analysis.
///
/// The output is opaque display text; downstream consumers must not parse it.
pub fn explain(
    prediction: Consistency,
    character: &str,
    profile: &TraitProfile,
    claims: &[Claim],
) -> String {
    let opening = format!(
        "After deep narrative analysis, {character}'s behavior in the story is judged as {} \
         with their established backstory, across {} compared claims. ",
        prediction.status(),
        claims.len()
    );

    let summary = match prediction {
        Consistency::Consistent => consistent_summary(profile),
        Consistency::Contradicted => contradicted_summary(claims),
    };

    opening + &summary
}

fn consistent_summary(profile: &TraitProfile) -> String {
    format!(
        "The character maintains a {} disposition toward violence throughout the events, \
         and no critical personality breaks were detected between the backstory and the \
         narrated decisions.",
        profile.violence
    )
}

fn contradicted_summary(claims: &[Claim]) -> String {
    let broken = claims
        .iter()
        .find(|claim| claim.verdict == ClaimVerdict::Contradicted)
        .map(|claim| claim.text.as_str())
        .unwrap_or(NO_BROKEN_CLAIM);

    format!(
        "Significant behavioral drift was detected. The backstory claim that \"{broken}\" \
         was directly violated by actions in the story, reflecting a fundamental break \
         from the character's established psychological profile.",
    )
}
