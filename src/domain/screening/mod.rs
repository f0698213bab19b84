//! Screening module - Disqualification rules, stored flags, and gates.

mod evaluator;
mod flags;
mod gate;
mod rule;
mod section;

pub use evaluator::DqEvaluator;
pub use flags::{FlagDelta, FlagSet};
pub use gate::{GateDecision, SectionGate};
pub use rule::RuleId;
pub use section::Section;
