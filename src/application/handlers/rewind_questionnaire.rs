//! RewindQuestionnaireHandler - Steps the income questionnaire back one
//! level, or resets it when already at the bottom.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::{CaseId, DomainError};
use crate::domain::income_proof::{StepId, StepPrompt};
use crate::ports::{CaseEventSink, CaseRepository};

use super::{commit, load_case};

/// Command to step the questionnaire back.
#[derive(Debug, Clone, Copy)]
pub struct RewindQuestionnaireCommand {
    pub case_id: CaseId,
}

/// Result of a rewind.
#[derive(Debug, Clone)]
pub struct RewindQuestionnaireResult {
    pub step: StepId,
    pub prompt: StepPrompt,
}

/// Handler for questionnaire rewinds.
pub struct RewindQuestionnaireHandler {
    repository: Arc<dyn CaseRepository>,
    event_sink: Arc<dyn CaseEventSink>,
}

impl RewindQuestionnaireHandler {
    pub fn new(repository: Arc<dyn CaseRepository>, event_sink: Arc<dyn CaseEventSink>) -> Self {
        Self {
            repository,
            event_sink,
        }
    }

    pub fn handle(
        &self,
        cmd: RewindQuestionnaireCommand,
    ) -> Result<RewindQuestionnaireResult, DomainError> {
        let mut case = load_case(&self.repository, cmd.case_id)?;

        let step = case.questionnaire_back();
        let prompt = case.questionnaire_prompt();
        commit(&self.repository, &self.event_sink, &mut case)?;

        debug!(case_id = %cmd.case_id, step = %step.key(), "questionnaire rewound");
        Ok(RewindQuestionnaireResult { step, prompt })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryCaseRepository, RecordingEventSink};
    use crate::domain::answers::{QuestionnaireAnswer, TaxYearMode, YesNo};
    use crate::domain::case::{CaseEvent, ScreeningCase};
    use crate::domain::foundation::{Role, ScreeningPolicy};
    use chrono::NaiveDate;

    fn setup() -> (
        Arc<InMemoryCaseRepository>,
        Arc<RecordingEventSink>,
        RewindQuestionnaireHandler,
        CaseId,
    ) {
        let repository = Arc::new(InMemoryCaseRepository::new());
        let sink = Arc::new(RecordingEventSink::new());
        let handler = RewindQuestionnaireHandler::new(repository.clone(), sink.clone());

        let mut case = ScreeningCase::new(
            Role::Sponsor,
            ScreeningPolicy::default(),
            NaiveDate::from_ymd_opt(2026, 6, 15).unwrap(),
        );
        case.questionnaire_submit(QuestionnaireAnswer::TaxYearMode(TaxYearMode::Prior))
            .unwrap();
        case.questionnaire_submit(QuestionnaireAnswer::FiledReturn(YesNo::Yes))
            .unwrap();
        case.take_events();
        let case_id = case.id();
        repository.save(&case).unwrap();

        (repository, sink, handler, case_id)
    }

    #[test]
    fn rewind_pops_one_step() {
        let (repository, _, handler, case_id) = setup();

        let result = handler
            .handle(RewindQuestionnaireCommand { case_id })
            .unwrap();
        assert_eq!(result.step, StepId::FiledReturn);

        let stored = repository.find_by_id(&case_id).unwrap().unwrap();
        assert_eq!(stored.questionnaire().current, StepId::FiledReturn);
    }

    #[test]
    fn rewind_at_the_bottom_resets_the_walk() {
        let (repository, sink, handler, case_id) = setup();

        handler
            .handle(RewindQuestionnaireCommand { case_id })
            .unwrap();
        handler
            .handle(RewindQuestionnaireCommand { case_id })
            .unwrap();
        let result = handler
            .handle(RewindQuestionnaireCommand { case_id })
            .unwrap();

        assert_eq!(result.step, StepId::ModeSelection);
        assert_eq!(result.prompt.reference_year, None);

        let stored = repository.find_by_id(&case_id).unwrap().unwrap();
        assert_eq!(stored.answers().questionnaire.tax_year_mode, None);
        assert!(sink
            .events_for(case_id)
            .iter()
            .any(|e| matches!(e, CaseEvent::QuestionnaireReset { .. })));
    }
}
