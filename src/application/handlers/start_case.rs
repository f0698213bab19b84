//! StartCaseHandler - Command handler for opening a new screening case.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::domain::foundation::{CaseId, DomainError, Role, ScreeningPolicy};
use crate::domain::navigation::ScreenId;
use crate::domain::case::ScreeningCase;
use crate::ports::{CaseEventSink, CaseRepository};

/// Command to start a new screening case.
#[derive(Debug, Clone)]
pub struct StartCaseCommand {
    /// Which party the wizard interviews.
    pub role: Role,
    /// Anchor for window arithmetic; typically the intended filing date.
    pub reference_date: NaiveDate,
    /// Policy figures pinned into the case for its whole lifetime.
    pub policy: ScreeningPolicy,
}

/// Result of starting a case.
#[derive(Debug, Clone)]
pub struct StartCaseResult {
    pub case_id: CaseId,
    /// The screen to render first.
    pub first_screen: ScreenId,
}

/// Handler for starting cases.
pub struct StartCaseHandler {
    repository: Arc<dyn CaseRepository>,
    event_sink: Arc<dyn CaseEventSink>,
}

impl StartCaseHandler {
    pub fn new(repository: Arc<dyn CaseRepository>, event_sink: Arc<dyn CaseEventSink>) -> Self {
        Self {
            repository,
            event_sink,
        }
    }

    pub fn handle(&self, cmd: StartCaseCommand) -> Result<StartCaseResult, DomainError> {
        cmd.policy.validate()?;

        let mut case = ScreeningCase::new(cmd.role, cmd.policy, cmd.reference_date);
        self.repository.save(&case)?;

        let events = case.take_events();
        self.event_sink.publish(case.id(), &events);

        info!(case_id = %case.id(), role = %cmd.role, "screening case started");

        Ok(StartCaseResult {
            case_id: case.id(),
            first_screen: case.current_screen(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryCaseRepository, RecordingEventSink};
    use crate::domain::case::CaseEvent;
    use crate::domain::foundation::Money;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()
    }

    #[test]
    fn start_saves_the_case_and_publishes_created() {
        let repository = Arc::new(InMemoryCaseRepository::new());
        let sink = Arc::new(RecordingEventSink::new());
        let handler = StartCaseHandler::new(repository.clone(), sink.clone());

        let result = handler
            .handle(StartCaseCommand {
                role: Role::Sponsor,
                reference_date: reference(),
                policy: ScreeningPolicy::default(),
            })
            .unwrap();

        assert_eq!(result.first_screen, ScreenId::Welcome);
        assert!(repository.exists(&result.case_id).unwrap());
        assert!(matches!(
            sink.events_for(result.case_id)[0],
            CaseEvent::Created { .. }
        ));
    }

    #[test]
    fn start_rejects_an_invalid_policy() {
        let handler = StartCaseHandler::new(
            Arc::new(InMemoryCaseRepository::new()),
            Arc::new(RecordingEventSink::new()),
        );

        let mut policy = ScreeningPolicy::default();
        policy.income.additional_member_increment = Money::ZERO;

        let err = handler
            .handle(StartCaseCommand {
                role: Role::Sponsor,
                reference_date: reference(),
                policy,
            })
            .unwrap_err();
        assert_eq!(err.code, crate::domain::foundation::ErrorCode::OutOfRange);
    }

    #[test]
    fn beneficiary_cases_start_at_welcome_too() {
        let handler = StartCaseHandler::new(
            Arc::new(InMemoryCaseRepository::new()),
            Arc::new(RecordingEventSink::new()),
        );

        let result = handler
            .handle(StartCaseCommand {
                role: Role::Beneficiary,
                reference_date: reference(),
                policy: ScreeningPolicy::default(),
            })
            .unwrap();
        assert_eq!(result.first_screen, ScreenId::Welcome);
    }
}
