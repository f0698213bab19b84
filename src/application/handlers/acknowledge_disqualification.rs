//! AcknowledgeDisqualificationHandler - Dismisses the standalone
//! disqualification view.
//!
//! Acknowledging is purely presentational: the flags and the answers
//! behind them are untouched, and the section exit gate will block
//! again if the flags still stand.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::{CaseId, DomainError};
use crate::ports::{CaseEventSink, CaseRepository};

use super::{commit, load_case};

/// Command to dismiss a showing disqualification view.
#[derive(Debug, Clone, Copy)]
pub struct AcknowledgeDisqualificationCommand {
    pub case_id: CaseId,
}

/// Handler for acknowledgements.
pub struct AcknowledgeDisqualificationHandler {
    repository: Arc<dyn CaseRepository>,
    event_sink: Arc<dyn CaseEventSink>,
}

impl AcknowledgeDisqualificationHandler {
    pub fn new(repository: Arc<dyn CaseRepository>, event_sink: Arc<dyn CaseEventSink>) -> Self {
        Self {
            repository,
            event_sink,
        }
    }

    pub fn handle(&self, cmd: AcknowledgeDisqualificationCommand) -> Result<(), DomainError> {
        let mut case = load_case(&self.repository, cmd.case_id)?;

        case.acknowledge_disqualification();
        commit(&self.repository, &self.event_sink, &mut case)?;

        debug!(case_id = %cmd.case_id, "disqualification acknowledged");
        Ok(())
    }
}
