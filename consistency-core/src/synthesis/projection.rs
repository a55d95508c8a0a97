//! Forward-looking behavior projection.
//!
//! The forecast reuses the prediction and trait profile only; it computes
//! no new evidence. Each field branches on one input so the template set
//! stays small and enumerable.

use crate::judgment::Consistency;
use crate::profile::{TraitLevel, TraitProfile};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Best- and worst-case narrative scenarios.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenarios {
    pub best_case: String,
    pub worst_case: String,
}

/// Structured forecast of the character's future behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projection {
    /// Where the character's arc is headed.
    pub core_arc: String,
    /// The expected mode of action going forward.
    pub action_forecast: String,
    pub scenarios: Scenarios,
}

impl fmt::Display for Projection {
    /// Flatten the structured forecast to display prose.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} Best case: {} Worst case: {}",
            self.core_arc, self.action_forecast, self.scenarios.best_case, self.scenarios.worst_case
        )
    }
}

/// Build the forecast from the finished judgment and trait profile.
pub fn project(prediction: Consistency, character: &str, profile: &TraitProfile) -> Projection {
    Projection {
        core_arc: core_arc(prediction, character, profile.risk_taking),
        action_forecast: action_forecast(character, profile.violence),
        scenarios: Scenarios {
            best_case: best_case(prediction, character, profile.trustworthiness),
            worst_case: worst_case(prediction, character, profile.authority_respect),
        },
    }
}

fn core_arc(prediction: Consistency, character: &str, risk: TraitLevel) -> String {
    match prediction {
        Consistency::Consistent => format!(
            "{character} is set to continue a stable arc, holding to established patterns \
             while showing a {risk} appetite for risk."
        ),
        Consistency::Contradicted => format!(
            "{character} has entered a transition phase; expect decisions that break old \
             patterns, carried by a {risk} appetite for risk."
        ),
    }
}

fn action_forecast(character: &str, violence: TraitLevel) -> String {
    if violence == TraitLevel::High {
        format!(
            "Escalating conflict is likely: {character} will meet obstacles with force \
             before words."
        )
    } else {
        format!(
            "Expect diplomatic, non-violent resolutions: {character} favors words over \
             force when obstacles arise."
        )
    }
}

fn best_case(prediction: Consistency, character: &str, trust: TraitLevel) -> String {
    match prediction {
        Consistency::Consistent => format!(
            "{character} deepens existing social bonds, and a {trust} capacity for trust \
             keeps old loyalties holding firm."
        ),
        Consistency::Contradicted => format!(
            "{character} forges a renewed identity, rebuilding social bonds from the ground \
             up on a {trust} capacity for trust."
        ),
    }
}

fn worst_case(prediction: Consistency, character: &str, authority: TraitLevel) -> String {
    match prediction {
        Consistency::Consistent => format!(
            "{character} becomes trapped by duty, as a {authority} respect for authority \
             hardens into rigidity and crowds out freedom."
        ),
        Consistency::Contradicted => format!(
            "{character} abandons duty entirely; with a {authority} respect for authority, \
             the pull of freedom severs every remaining obligation."
        ),
    }
}
