//! RetreatScreenHandler - Command handler for backward navigation.

use std::sync::Arc;

use tracing::debug;

use crate::domain::case::RetreatOutcome;
use crate::domain::foundation::{CaseId, DomainError};
use crate::ports::{CaseEventSink, CaseRepository};

use super::{commit, load_case};

/// Command to move the case back one screen.
#[derive(Debug, Clone, Copy)]
pub struct RetreatScreenCommand {
    pub case_id: CaseId,
}

/// Result of a retreat attempt.
#[derive(Debug, Clone, Copy)]
pub struct RetreatScreenResult {
    pub outcome: RetreatOutcome,
}

/// Handler for backward navigation. Back never validates and never
/// blocks; it either moves or reports that the flow has no earlier
/// screen.
pub struct RetreatScreenHandler {
    repository: Arc<dyn CaseRepository>,
    event_sink: Arc<dyn CaseEventSink>,
}

impl RetreatScreenHandler {
    pub fn new(repository: Arc<dyn CaseRepository>, event_sink: Arc<dyn CaseEventSink>) -> Self {
        Self {
            repository,
            event_sink,
        }
    }

    pub fn handle(&self, cmd: RetreatScreenCommand) -> Result<RetreatScreenResult, DomainError> {
        let mut case = load_case(&self.repository, cmd.case_id)?;

        let outcome = case.retreat();
        commit(&self.repository, &self.event_sink, &mut case)?;

        if let RetreatOutcome::Moved(to) = outcome {
            debug!(case_id = %cmd.case_id, to = %to, "retreated");
        }

        Ok(RetreatScreenResult { outcome })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryCaseRepository, RecordingEventSink};
    use crate::domain::case::ScreeningCase;
    use crate::domain::foundation::{Role, ScreeningPolicy};
    use crate::domain::navigation::ScreenId;
    use chrono::NaiveDate;

    fn setup(advances: usize) -> (Arc<InMemoryCaseRepository>, RetreatScreenHandler, CaseId) {
        let repository = Arc::new(InMemoryCaseRepository::new());
        let handler =
            RetreatScreenHandler::new(repository.clone(), Arc::new(RecordingEventSink::new()));

        let mut case = ScreeningCase::new(
            Role::Sponsor,
            ScreeningPolicy::default(),
            NaiveDate::from_ymd_opt(2026, 6, 15).unwrap(),
        );
        for _ in 0..advances {
            case.advance();
        }
        case.take_events();
        let case_id = case.id();
        repository.save(&case).unwrap();

        (repository, handler, case_id)
    }

    #[test]
    fn retreat_moves_back_and_persists() {
        let (repository, handler, case_id) = setup(1);

        let result = handler.handle(RetreatScreenCommand { case_id }).unwrap();
        assert_eq!(result.outcome, RetreatOutcome::Moved(ScreenId::Welcome));

        let stored = repository.find_by_id(&case_id).unwrap().unwrap();
        assert_eq!(stored.current_screen(), ScreenId::Welcome);
    }

    #[test]
    fn retreat_from_the_first_screen_reports_at_start() {
        let (_, handler, case_id) = setup(0);
        let result = handler.handle(RetreatScreenCommand { case_id }).unwrap();
        assert_eq!(result.outcome, RetreatOutcome::AtStart);
    }
}
