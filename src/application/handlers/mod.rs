//! Command handlers.
//!
//! Each handler loads the case, invokes one aggregate operation,
//! persists the result, and hands the drained domain events to the
//! sink. Handlers are where the engine logs; the domain stays silent.

mod acknowledge_disqualification;
mod advance_screen;
mod record_answer;
mod reset_questionnaire;
mod retreat_screen;
mod rewind_questionnaire;
mod start_case;
mod submit_questionnaire_step;

pub use acknowledge_disqualification::{
    AcknowledgeDisqualificationCommand, AcknowledgeDisqualificationHandler,
};
pub use advance_screen::{AdvanceScreenCommand, AdvanceScreenHandler, AdvanceScreenResult};
pub use record_answer::{RecordAnswerCommand, RecordAnswerHandler, RecordAnswerResult};
pub use reset_questionnaire::{ResetQuestionnaireCommand, ResetQuestionnaireHandler};
pub use retreat_screen::{RetreatScreenCommand, RetreatScreenHandler, RetreatScreenResult};
pub use rewind_questionnaire::{
    RewindQuestionnaireCommand, RewindQuestionnaireHandler, RewindQuestionnaireResult,
};
pub use start_case::{StartCaseCommand, StartCaseHandler, StartCaseResult};
pub use submit_questionnaire_step::{
    SubmitQuestionnaireStepCommand, SubmitQuestionnaireStepHandler, SubmitQuestionnaireStepResult,
};

use std::sync::Arc;

use crate::domain::case::ScreeningCase;
use crate::domain::foundation::{CaseId, DomainError, ErrorCode};
use crate::ports::{CaseEventSink, CaseRepository};

/// Loads a case or produces the standard not-found error.
fn load_case(
    repository: &Arc<dyn CaseRepository>,
    case_id: CaseId,
) -> Result<ScreeningCase, DomainError> {
    repository.find_by_id(&case_id)?.ok_or_else(|| {
        DomainError::new(ErrorCode::CaseNotFound, format!("Case not found: {}", case_id))
    })
}

/// Persists the case and forwards its drained events to the sink.
fn commit(
    repository: &Arc<dyn CaseRepository>,
    sink: &Arc<dyn CaseEventSink>,
    case: &mut ScreeningCase,
) -> Result<(), DomainError> {
    repository.update(case)?;
    let events = case.take_events();
    if !events.is_empty() {
        sink.publish(case.id(), &events);
    }
    Ok(())
}
