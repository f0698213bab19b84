//! ResetQuestionnaireHandler - Returns the income questionnaire to mode
//! selection.
//!
//! Only the walk and the chosen tax-year mode are cleared; answers
//! already given stay recorded and pre-fill a repeated walk.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::{CaseId, DomainError};
use crate::ports::{CaseEventSink, CaseRepository};

use super::{commit, load_case};

/// Command to reset the questionnaire walk.
#[derive(Debug, Clone, Copy)]
pub struct ResetQuestionnaireCommand {
    pub case_id: CaseId,
}

/// Handler for questionnaire resets.
pub struct ResetQuestionnaireHandler {
    repository: Arc<dyn CaseRepository>,
    event_sink: Arc<dyn CaseEventSink>,
}

impl ResetQuestionnaireHandler {
    pub fn new(repository: Arc<dyn CaseRepository>, event_sink: Arc<dyn CaseEventSink>) -> Self {
        Self {
            repository,
            event_sink,
        }
    }

    pub fn handle(&self, cmd: ResetQuestionnaireCommand) -> Result<(), DomainError> {
        let mut case = load_case(&self.repository, cmd.case_id)?;

        case.questionnaire_reset();
        commit(&self.repository, &self.event_sink, &mut case)?;

        debug!(case_id = %cmd.case_id, "questionnaire reset");
        Ok(())
    }
}
