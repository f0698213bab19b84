//! RecordAnswerHandler - Command handler for writing one answer.
//!
//! The aggregate recomputes every disqualification flag inside the same
//! call, so by the time this handler returns, any gate or navigation
//! check sees flags consistent with the new answer.

use std::sync::Arc;

use tracing::debug;

use crate::domain::answers::Answer;
use crate::domain::case::{AnswerOutcome, DqView};
use crate::domain::foundation::{CaseId, DomainError};
use crate::ports::{CaseEventSink, CaseRepository};

use super::{commit, load_case};

/// Command to record an answer on the current screen.
#[derive(Debug, Clone)]
pub struct RecordAnswerCommand {
    pub case_id: CaseId,
    pub answer: Answer,
}

/// Result of recording an answer.
#[derive(Debug, Clone)]
pub struct RecordAnswerResult {
    /// Flag flips caused by this write.
    pub outcome: AnswerOutcome,
    /// The disqualification view to render, if any.
    pub view: Option<DqView>,
}

/// Handler for answer writes.
pub struct RecordAnswerHandler {
    repository: Arc<dyn CaseRepository>,
    event_sink: Arc<dyn CaseEventSink>,
}

impl RecordAnswerHandler {
    pub fn new(repository: Arc<dyn CaseRepository>, event_sink: Arc<dyn CaseEventSink>) -> Self {
        Self {
            repository,
            event_sink,
        }
    }

    pub fn handle(&self, cmd: RecordAnswerCommand) -> Result<RecordAnswerResult, DomainError> {
        let mut case = load_case(&self.repository, cmd.case_id)?;

        let outcome = case.record_answer(cmd.answer)?;
        commit(&self.repository, &self.event_sink, &mut case)?;

        if !outcome.delta.is_empty() {
            debug!(
                case_id = %cmd.case_id,
                raised = ?outcome.delta.raised,
                cleared = ?outcome.delta.cleared,
                "flags recomputed"
            );
        }

        let view = outcome.view.clone();
        Ok(RecordAnswerResult { outcome, view })
    }
}
