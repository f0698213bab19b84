//! AdvanceScreenHandler - Command handler for forward navigation.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::case::AdvanceOutcome;
use crate::domain::foundation::{CaseId, DomainError};
use crate::ports::{CaseEventSink, CaseRepository};

use super::{commit, load_case};

/// Command to move the case forward one screen.
#[derive(Debug, Clone, Copy)]
pub struct AdvanceScreenCommand {
    pub case_id: CaseId,
}

/// Result of an advance attempt.
#[derive(Debug, Clone)]
pub struct AdvanceScreenResult {
    pub outcome: AdvanceOutcome,
}

/// Handler for forward navigation.
pub struct AdvanceScreenHandler {
    repository: Arc<dyn CaseRepository>,
    event_sink: Arc<dyn CaseEventSink>,
}

impl AdvanceScreenHandler {
    pub fn new(repository: Arc<dyn CaseRepository>, event_sink: Arc<dyn CaseEventSink>) -> Self {
        Self {
            repository,
            event_sink,
        }
    }

    pub fn handle(&self, cmd: AdvanceScreenCommand) -> Result<AdvanceScreenResult, DomainError> {
        let mut case = load_case(&self.repository, cmd.case_id)?;

        let outcome = case.advance();
        commit(&self.repository, &self.event_sink, &mut case)?;

        match &outcome {
            AdvanceOutcome::Moved(to) => {
                debug!(case_id = %cmd.case_id, to = %to, "advanced");
            }
            AdvanceOutcome::Blocked { messages } => {
                warn!(
                    case_id = %cmd.case_id,
                    screen = %case.current_screen(),
                    rule_count = messages.len(),
                    "section exit blocked"
                );
            }
            AdvanceOutcome::MissingAnswers | AdvanceOutcome::EndOfFlow => {}
        }

        Ok(AdvanceScreenResult { outcome })
    }
}
