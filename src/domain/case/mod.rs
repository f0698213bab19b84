//! Case module - The screening case aggregate root and its events.

mod aggregate;
mod events;
mod view;

pub use aggregate::{
    AdvanceOutcome, AnswerOutcome, EndpointReport, RetreatOutcome, ScreeningCase, StepOutcome,
};
pub use events::CaseEvent;
pub use view::DqView;
