//! Templated natural-language synthesis.
//!
//! Everything here is text generation from already-computed state: the
//! prediction, the trait profile, and the evaluated claims. No new
//! evidence is derived in this module tree.

pub mod explanation;
pub mod followup;
pub mod projection;

pub use explanation::explain;
pub use followup::answer;
pub use projection::{project, Projection, Scenarios};
