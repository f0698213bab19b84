//! SubmitQuestionnaireStepHandler - Records one income-proof answer and
//! advances the questionnaire walk.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::answers::QuestionnaireAnswer;
use crate::domain::case::StepOutcome;
use crate::domain::foundation::{CaseId, DomainError};
use crate::domain::income_proof::StepPrompt;
use crate::ports::{CaseEventSink, CaseRepository};

use super::{commit, load_case};

/// Command carrying the answer for the questionnaire's current step.
#[derive(Debug, Clone)]
pub struct SubmitQuestionnaireStepCommand {
    pub case_id: CaseId,
    pub answer: QuestionnaireAnswer,
}

/// Result of a questionnaire submission.
#[derive(Debug, Clone)]
pub struct SubmitQuestionnaireStepResult {
    pub outcome: StepOutcome,
    /// Prompt context for rendering the step just landed on.
    pub prompt: StepPrompt,
}

/// Handler for questionnaire submissions.
pub struct SubmitQuestionnaireStepHandler {
    repository: Arc<dyn CaseRepository>,
    event_sink: Arc<dyn CaseEventSink>,
}

impl SubmitQuestionnaireStepHandler {
    pub fn new(repository: Arc<dyn CaseRepository>, event_sink: Arc<dyn CaseEventSink>) -> Self {
        Self {
            repository,
            event_sink,
        }
    }

    pub fn handle(
        &self,
        cmd: SubmitQuestionnaireStepCommand,
    ) -> Result<SubmitQuestionnaireStepResult, DomainError> {
        let mut case = load_case(&self.repository, cmd.case_id)?;

        let outcome = case.questionnaire_submit(cmd.answer)?;
        let prompt = case.questionnaire_prompt();
        commit(&self.repository, &self.event_sink, &mut case)?;

        if let Some(report) = &outcome.endpoint {
            info!(
                case_id = %cmd.case_id,
                endpoint = %outcome.step.key(),
                documents = report.documents.len(),
                "questionnaire completed"
            );
        } else {
            debug!(case_id = %cmd.case_id, step = %outcome.step.key(), "questionnaire advanced");
        }

        Ok(SubmitQuestionnaireStepResult { outcome, prompt })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryCaseRepository, RecordingEventSink};
    use crate::domain::answers::{TaxYearMode, YesNo};
    use crate::domain::case::ScreeningCase;
    use crate::domain::foundation::{ErrorCode, Money, Role, ScreeningPolicy};
    use crate::domain::income_proof::{DocumentKind, StepId};
    use chrono::NaiveDate;

    fn setup() -> (
        Arc<InMemoryCaseRepository>,
        SubmitQuestionnaireStepHandler,
        CaseId,
    ) {
        let repository = Arc::new(InMemoryCaseRepository::new());
        let handler = SubmitQuestionnaireStepHandler::new(
            repository.clone(),
            Arc::new(RecordingEventSink::new()),
        );

        let mut case = ScreeningCase::new(
            Role::Sponsor,
            ScreeningPolicy::default(),
            NaiveDate::from_ymd_opt(2026, 6, 15).unwrap(),
        );
        case.take_events();
        let case_id = case.id();
        repository.save(&case).unwrap();

        (repository, handler, case_id)
    }

    #[test]
    fn submission_advances_and_persists_the_walk() {
        let (repository, handler, case_id) = setup();

        let result = handler
            .handle(SubmitQuestionnaireStepCommand {
                case_id,
                answer: QuestionnaireAnswer::TaxYearMode(TaxYearMode::MostRecent),
            })
            .unwrap();
        assert_eq!(result.outcome.step, StepId::FiledReturn);
        assert_eq!(result.prompt.reference_year, Some(2024));

        let stored = repository.find_by_id(&case_id).unwrap().unwrap();
        assert_eq!(stored.questionnaire().current, StepId::FiledReturn);
    }

    #[test]
    fn sufficient_income_walk_ends_with_the_tax_documents() {
        let (_, handler, case_id) = setup();

        handler
            .handle(SubmitQuestionnaireStepCommand {
                case_id,
                answer: QuestionnaireAnswer::TaxYearMode(TaxYearMode::MostRecent),
            })
            .unwrap();
        handler
            .handle(SubmitQuestionnaireStepCommand {
                case_id,
                answer: QuestionnaireAnswer::FiledReturn(YesNo::Yes),
            })
            .unwrap();
        handler
            .handle(SubmitQuestionnaireStepCommand {
                case_id,
                answer: QuestionnaireAnswer::ReportedAgi(Money::from_dollars(60000)),
            })
            .unwrap();
        let result = handler
            .handle(SubmitQuestionnaireStepCommand {
                case_id,
                answer: QuestionnaireAnswer::Employment(
                    crate::domain::answers::EmploymentKind::W2Employee,
                ),
            })
            .unwrap();

        assert_eq!(result.outcome.step, StepId::EndEmployed);
        let report = result.outcome.endpoint.unwrap();
        assert_eq!(report.assets_needed, None);
        assert!(report
            .documents
            .contains(&DocumentKind::TaxReturnOrTranscript));
        assert!(report.documents.contains(&DocumentKind::W2Forms));
    }

    #[test]
    fn wrong_shaped_answer_is_rejected_before_anything_moves() {
        let (repository, handler, case_id) = setup();

        let err = handler
            .handle(SubmitQuestionnaireStepCommand {
                case_id,
                answer: QuestionnaireAnswer::FiledReturn(YesNo::Yes),
            })
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::UnexpectedStepAnswer);

        // Neither the walk nor the stored answers moved.
        let stored = repository.find_by_id(&case_id).unwrap().unwrap();
        assert_eq!(stored.questionnaire().current, StepId::ModeSelection);
        assert_eq!(stored.answers().questionnaire.filed_return, None);
    }
}
