//! ScreeningCase aggregate - The root entity for one screening session.
//!
//! The case owns the answer store, the current screen, the standalone
//! disqualification view, and the income questionnaire walk. Every
//! answer write recomputes the whole flag catalog before the write
//! returns, so navigation and gate checks can never observe a flag
//! older than the answers.

use chrono::NaiveDate;

use crate::domain::answers::{Answer, AnswerStore, QuestionnaireAnswer};
use crate::domain::foundation::{
    CaseId, DomainError, ErrorCode, Money, Role, ScreeningPolicy, Timestamp,
};
use crate::domain::household::{HouseholdCalculator, HouseholdSnapshot};
use crate::domain::income_proof::{
    recommended_documents, DecisionTree, DocumentKind, QuestionnaireState, StepId, StepPrompt,
};
use crate::domain::navigation::{Navigator, ScreenId};
use crate::domain::screening::{DqEvaluator, FlagDelta, SectionGate};

use super::{CaseEvent, DqView};

/// What an answer write changed.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerOutcome {
    /// Rules whose flags flipped during the synchronous recompute.
    pub delta: FlagDelta,
    /// The disqualification view after the write, if one is showing.
    pub view: Option<DqView>,
}

/// What happened when the applicant pressed Next.
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceOutcome {
    /// The current screen is missing required answers; stay put.
    MissingAnswers,
    /// The section exit gate refused; stay put, view raised.
    Blocked { messages: Vec<String> },
    /// Navigation moved to the given screen.
    Moved(ScreenId),
    /// Already on the last screen of the flow.
    EndOfFlow,
}

/// What happened when the applicant pressed Back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RetreatOutcome {
    Moved(ScreenId),
    AtStart,
}

/// Terminal summary attached when the questionnaire reaches an endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointReport {
    pub documents: Vec<DocumentKind>,
    /// Set on shortfall endpoints: the gap times the policy multiplier.
    pub assets_needed: Option<Money>,
}

/// The step a questionnaire submission landed on.
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub step: StepId,
    pub endpoint: Option<EndpointReport>,
}

/// The ScreeningCase aggregate root.
#[derive(Debug, Clone)]
pub struct ScreeningCase {
    id: CaseId,
    role: Role,
    /// Pinned at creation; config reloads never rewrite an open case.
    policy: ScreeningPolicy,
    /// Anchor for window arithmetic (intended filing date).
    reference_date: NaiveDate,
    answers: AnswerStore,
    current_screen: ScreenId,
    dq_view: Option<DqView>,
    questionnaire: QuestionnaireState,
    created_at: Timestamp,
    updated_at: Timestamp,
    domain_events: Vec<CaseEvent>,
}

impl ScreeningCase {
    /// Starts a new case at the role's first screen.
    pub fn new(role: Role, policy: ScreeningPolicy, reference_date: NaiveDate) -> Self {
        let id = CaseId::new();
        let now = Timestamp::now();

        let mut answers = AnswerStore::new();
        // Materialize every flag as false so snapshots always carry the
        // full key set.
        DqEvaluator::recompute_all(&mut answers, &policy, reference_date);

        let current_screen = Navigator::new(role).first_screen(&answers);

        let mut case = Self {
            id,
            role,
            policy,
            reference_date,
            answers,
            current_screen,
            dq_view: None,
            questionnaire: QuestionnaireState::new(),
            created_at: now,
            updated_at: now,
            domain_events: Vec::new(),
        };

        case.record_event(CaseEvent::Created {
            case_id: id,
            created_at: now,
        });

        case
    }

    /// Reconstitutes a case from persisted data without recording events.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: CaseId,
        role: Role,
        policy: ScreeningPolicy,
        reference_date: NaiveDate,
        answers: AnswerStore,
        current_screen: ScreenId,
        dq_view: Option<DqView>,
        questionnaire: QuestionnaireState,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            role,
            policy,
            reference_date,
            answers,
            current_screen,
            dq_view,
            questionnaire,
            created_at,
            updated_at,
            domain_events: Vec::new(),
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn id(&self) -> CaseId {
        self.id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn policy(&self) -> &ScreeningPolicy {
        &self.policy
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    pub fn current_screen(&self) -> ScreenId {
        self.current_screen
    }

    pub fn dq_view(&self) -> Option<&DqView> {
        self.dq_view.as_ref()
    }

    pub fn questionnaire(&self) -> &QuestionnaireState {
        &self.questionnaire
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Whether the applicant can leave the current screen forward.
    pub fn can_advance(&self) -> bool {
        self.current_screen.is_answered(&self.answers)
    }

    /// Whether the current screen starts the role's flow.
    pub fn is_first_screen(&self) -> bool {
        Navigator::new(self.role)
            .is_first_screen(self.current_screen, &self.answers)
    }

    /// The derived household figures, computed fresh on every call.
    pub fn household(&self) -> HouseholdSnapshot {
        HouseholdCalculator::compute(&self.answers, &self.policy)
    }

    /// Drains and returns recorded domain events.
    pub fn take_events(&mut self) -> Vec<CaseEvent> {
        std::mem::take(&mut self.domain_events)
    }

    // ───────────────────────────────────────────────────────────────
    // Answer recording
    // ───────────────────────────────────────────────────────────────

    /// Writes one answer and synchronously recomputes every flag.
    ///
    /// A rule newly raised by this write raises the standalone
    /// disqualification view when the current screen hosts it; rules
    /// tripped from elsewhere wait for their section's exit gate.
    pub fn record_answer(&mut self, answer: Answer) -> Result<AnswerOutcome, DomainError> {
        self.answers.apply(answer)?;
        let delta =
            DqEvaluator::recompute_all(&mut self.answers, &self.policy, self.reference_date);

        let case_id = self.id;
        self.record_event(CaseEvent::AnswerRecorded {
            case_id,
            screen: self.current_screen,
        });
        for rule in &delta.raised {
            self.record_event(CaseEvent::FlagRaised {
                case_id,
                rule: *rule,
            });
        }
        for rule in &delta.cleared {
            self.record_event(CaseEvent::FlagCleared {
                case_id,
                rule: *rule,
            });
        }

        if let Some(rule) = delta
            .raised
            .iter()
            .find(|rule| self.current_screen.hosted_rules().contains(rule))
        {
            self.dq_view = Some(DqView::Rule(*rule));
        } else if let Some(DqView::Rule(rule)) = &self.dq_view {
            // The rule behind a showing view may just have cleared.
            if delta.cleared.contains(rule) {
                self.dq_view = None;
            }
        }

        self.touch();
        Ok(AnswerOutcome {
            delta,
            view: self.dq_view.clone(),
        })
    }

    // ───────────────────────────────────────────────────────────────
    // Navigation
    // ───────────────────────────────────────────────────────────────

    /// Attempts to move forward one screen.
    ///
    /// Exit-gate screens consult the section's aggregate flags before
    /// any navigation happens; a block raises the section view and the
    /// screen does not change.
    pub fn advance(&mut self) -> AdvanceOutcome {
        if !self.current_screen.is_answered(&self.answers) {
            return AdvanceOutcome::MissingAnswers;
        }

        if self.current_screen.is_exit_gate() {
            let section = self.current_screen.section();
            let decision = SectionGate::should_block(section, &self.answers);
            if decision.blocked {
                let case_id = self.id;
                self.record_event(CaseEvent::SectionBlocked {
                    case_id,
                    section,
                    rule_count: decision.messages.len(),
                });
                self.dq_view = Some(DqView::Section {
                    section,
                    messages: decision.messages.clone(),
                });
                self.touch();
                return AdvanceOutcome::Blocked {
                    messages: decision.messages,
                };
            }
        }

        match Navigator::new(self.role).next_screen(self.current_screen, &self.answers) {
            Some(next) => {
                self.move_to(next);
                AdvanceOutcome::Moved(next)
            }
            None => AdvanceOutcome::EndOfFlow,
        }
    }

    /// Moves back one screen; never validates answers, never blocks.
    pub fn retreat(&mut self) -> RetreatOutcome {
        match Navigator::new(self.role).previous_screen(self.current_screen, &self.answers) {
            Some(previous) => {
                self.move_to(previous);
                RetreatOutcome::Moved(previous)
            }
            None => RetreatOutcome::AtStart,
        }
    }

    /// Dismisses the disqualification view; answers are untouched.
    pub fn acknowledge_disqualification(&mut self) {
        if self.dq_view.take().is_some() {
            let case_id = self.id;
            self.record_event(CaseEvent::DisqualificationAcknowledged { case_id });
            self.touch();
        }
    }

    fn move_to(&mut self, to: ScreenId) {
        let from = self.current_screen;
        self.current_screen = to;
        // The view follows its section; leaving the section hides it.
        if let Some(view) = &self.dq_view {
            if view.section() != to.section() {
                self.dq_view = None;
            }
        }
        let case_id = self.id;
        self.record_event(CaseEvent::ScreenChanged { case_id, from, to });
        self.touch();
    }

    // ───────────────────────────────────────────────────────────────
    // Income questionnaire
    // ───────────────────────────────────────────────────────────────

    /// Records a questionnaire answer and advances the walk.
    pub fn questionnaire_submit(
        &mut self,
        answer: QuestionnaireAnswer,
    ) -> Result<StepOutcome, DomainError> {
        let from = self.questionnaire.current;
        if !from.is_endpoint() && !from.accepts(&answer) {
            return Err(DomainError::new(
                ErrorCode::UnexpectedStepAnswer,
                format!("step '{}' does not take this kind of answer", from),
            ));
        }
        let required = self.household().minimum_income;

        self.answers.questionnaire.apply(answer)?;
        let next = DecisionTree::transition(from, &self.answers.questionnaire, required)?;
        self.questionnaire.go_to(next);

        let case_id = self.id;
        self.record_event(CaseEvent::QuestionnaireAdvanced {
            case_id,
            from,
            to: next,
        });
        self.touch();

        let endpoint = next.is_endpoint().then(|| EndpointReport {
            documents: recommended_documents(next, &self.answers.questionnaire),
            assets_needed: match self.answers.questionnaire.reported_agi {
                Some(agi) if agi < required => {
                    Some(DecisionTree::assets_needed(agi, required, &self.policy))
                }
                _ => None,
            },
        });

        Ok(StepOutcome {
            step: next,
            endpoint,
        })
    }

    /// Steps the questionnaire back one level.
    ///
    /// At the bottom of the history this becomes a reset: the walk
    /// returns to mode selection and the chosen mode is cleared.
    pub fn questionnaire_back(&mut self) -> StepId {
        let case_id = self.id;
        if self.questionnaire.history.is_empty() {
            self.questionnaire.reset();
            self.answers.questionnaire.tax_year_mode = None;
            self.record_event(CaseEvent::QuestionnaireReset { case_id });
        } else {
            let to = self.questionnaire.back();
            self.record_event(CaseEvent::QuestionnaireRewound { case_id, to });
        }
        self.touch();
        self.questionnaire.current
    }

    /// Returns the questionnaire to mode selection.
    ///
    /// Only the walk and the mode are cleared; answers already given
    /// stay recorded and pre-fill a repeated walk.
    pub fn questionnaire_reset(&mut self) {
        self.questionnaire.reset();
        self.answers.questionnaire.tax_year_mode = None;
        let case_id = self.id;
        self.record_event(CaseEvent::QuestionnaireReset { case_id });
        self.touch();
    }

    /// Prompt context for the questionnaire's current step.
    pub fn questionnaire_prompt(&self) -> StepPrompt {
        DecisionTree::prompt(
            self.questionnaire.current,
            &self.answers.questionnaire,
            self.household().minimum_income,
            &self.policy,
        )
    }

    fn record_event(&mut self, event: CaseEvent) {
        self.domain_events.push(event);
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::answers::{TaxYearMode, YesNo};
    use crate::domain::screening::RuleId;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()
    }

    fn sponsor_case() -> ScreeningCase {
        ScreeningCase::new(Role::Sponsor, ScreeningPolicy::default(), reference())
    }

    fn answer_requirements_clean(case: &mut ScreeningCase) {
        case.record_answer(Answer::SponsorName("Jordan".to_string()))
            .unwrap();
        case.record_answer(Answer::BeneficiaryName("Sam".to_string()))
            .unwrap();
        case.record_answer(Answer::LegallyFreeToMarry(YesNo::Yes))
            .unwrap();
        case.record_answer(Answer::MetInPerson(YesNo::Yes)).unwrap();
        case.record_answer(Answer::MetThroughBroker(YesNo::No))
            .unwrap();
        case.record_answer(Answer::IntendsMarriageWithinWindow(YesNo::Yes))
            .unwrap();
        case.record_answer(Answer::MeetingDescription("We met hiking.".to_string()))
            .unwrap();
    }

    #[test]
    fn new_case_starts_at_welcome_with_a_created_event() {
        let mut case = sponsor_case();
        assert_eq!(case.current_screen(), ScreenId::Welcome);
        assert!(case.is_first_screen());
        assert!(case.dq_view().is_none());

        let events = case.take_events();
        assert!(matches!(events[0], CaseEvent::Created { .. }));
        // Draining leaves nothing behind.
        assert!(case.take_events().is_empty());
    }

    #[test]
    fn record_answer_recomputes_flags_before_returning() {
        let mut case = sponsor_case();
        let outcome = case
            .record_answer(Answer::LegallyFreeToMarry(YesNo::No))
            .unwrap();

        assert_eq!(outcome.delta.raised, vec![RuleId::LegallyFree]);
        assert!(case.answers().flags.is_raised(RuleId::LegallyFree));

        let outcome = case
            .record_answer(Answer::LegallyFreeToMarry(YesNo::Yes))
            .unwrap();
        assert_eq!(outcome.delta.cleared, vec![RuleId::LegallyFree]);
        assert!(!case.answers().flags.is_raised(RuleId::LegallyFree));
    }

    #[test]
    fn rule_view_raises_only_on_the_hosting_screen() {
        let mut case = sponsor_case();
        // Still on the welcome screen; legally-free is not hosted here.
        let outcome = case
            .record_answer(Answer::LegallyFreeToMarry(YesNo::No))
            .unwrap();
        assert!(outcome.view.is_none());
    }

    #[test]
    fn rule_view_raises_and_clears_with_its_answer() {
        let mut case = sponsor_case();
        case.record_answer(Answer::SponsorName("Jordan".to_string()))
            .unwrap();
        case.record_answer(Answer::BeneficiaryName("Sam".to_string()))
            .unwrap();
        case.advance();
        case.advance();
        assert_eq!(case.current_screen(), ScreenId::LegallyFree);

        let outcome = case
            .record_answer(Answer::LegallyFreeToMarry(YesNo::No))
            .unwrap();
        assert_eq!(outcome.view, Some(DqView::Rule(RuleId::LegallyFree)));

        // Correcting the answer clears the showing view.
        let outcome = case
            .record_answer(Answer::LegallyFreeToMarry(YesNo::Yes))
            .unwrap();
        assert!(outcome.view.is_none());
        assert!(case.dq_view().is_none());
    }

    #[test]
    fn advance_refuses_an_unanswered_screen() {
        let mut case = sponsor_case();
        case.advance(); // welcome needs nothing
        assert_eq!(case.current_screen(), ScreenId::FilingBasics);
        assert_eq!(case.advance(), AdvanceOutcome::MissingAnswers);
        assert_eq!(case.current_screen(), ScreenId::FilingBasics);
    }

    #[test]
    fn exit_gate_blocks_on_a_flag_raised_screens_earlier() {
        let mut case = sponsor_case();
        case.record_answer(Answer::SponsorName("Jordan".to_string()))
            .unwrap();
        case.record_answer(Answer::BeneficiaryName("Sam".to_string()))
            .unwrap();
        case.record_answer(Answer::LegallyFreeToMarry(YesNo::No))
            .unwrap();
        case.record_answer(Answer::MetInPerson(YesNo::Yes)).unwrap();
        case.record_answer(Answer::MetThroughBroker(YesNo::No))
            .unwrap();
        case.record_answer(Answer::IntendsMarriageWithinWindow(YesNo::Yes))
            .unwrap();
        case.record_answer(Answer::MeetingDescription("At a conference.".to_string()))
            .unwrap();

        // Jump straight to the section's exit gate.
        while case.current_screen() != ScreenId::MeetingDescription {
            match case.advance() {
                AdvanceOutcome::Moved(_) => {}
                other => panic!("unexpected outcome before the gate: {:?}", other),
            }
        }

        let outcome = case.advance();
        match outcome {
            AdvanceOutcome::Blocked { messages } => {
                assert_eq!(messages, vec![RuleId::LegallyFree.message().to_string()]);
            }
            other => panic!("expected Blocked, got {:?}", other),
        }
        assert_eq!(case.current_screen(), ScreenId::MeetingDescription);
        assert!(matches!(
            case.dq_view(),
            Some(DqView::Section { section, .. }) if *section == crate::domain::screening::Section::Requirements
        ));
    }

    #[test]
    fn acknowledge_hides_the_view_without_clearing_answers() {
        let mut case = sponsor_case();
        case.record_answer(Answer::LegallyFreeToMarry(YesNo::No))
            .unwrap();
        case.dq_view = Some(DqView::Rule(RuleId::LegallyFree));

        case.acknowledge_disqualification();
        assert!(case.dq_view().is_none());
        assert_eq!(
            case.answers().requirements.legally_free_to_marry,
            Some(YesNo::No)
        );
    }

    #[test]
    fn navigating_out_of_the_section_hides_the_view() {
        let mut case = sponsor_case();
        answer_requirements_clean(&mut case);
        // Walk to the end of section 2.
        while case.current_screen() != ScreenId::MeetingDescription {
            case.advance();
        }
        case.dq_view = Some(DqView::Rule(RuleId::MarriageBroker));

        // Backing up within the section keeps the view.
        case.retreat();
        assert!(case.dq_view().is_some());

        // Moving to section 1 drops it.
        while case.current_screen().section() == crate::domain::screening::Section::Requirements {
            case.retreat();
        }
        assert!(case.dq_view().is_none());
    }

    #[test]
    fn clean_section_advances_through_the_gate() {
        let mut case = sponsor_case();
        answer_requirements_clean(&mut case);
        while case.current_screen() != ScreenId::MeetingDescription {
            case.advance();
        }
        assert_eq!(
            case.advance(),
            AdvanceOutcome::Moved(ScreenId::SponsorBasicInfo)
        );
    }

    #[test]
    fn retreat_stops_at_the_first_screen() {
        let mut case = sponsor_case();
        assert_eq!(case.retreat(), RetreatOutcome::AtStart);
        assert!(case.is_first_screen());
    }

    #[test]
    fn beneficiary_flow_ends_at_the_legal_summary() {
        let mut case =
            ScreeningCase::new(Role::Beneficiary, ScreeningPolicy::default(), reference());
        case.record_answer(Answer::SponsorName("Jordan".to_string()))
            .unwrap();
        case.record_answer(Answer::BeneficiaryName("Sam".to_string()))
            .unwrap();
        case.record_answer(Answer::BeneficiaryBirthDate(
            NaiveDate::from_ymd_opt(1994, 2, 2).unwrap(),
        ))
        .unwrap();
        case.record_answer(Answer::BeneficiaryCitizenshipCountry("Chile".to_string()))
            .unwrap();
        case.record_answer(Answer::BeneficiaryResidenceAddress(
            "12 Calle Mayor".to_string(),
        ))
        .unwrap();
        case.record_answer(Answer::BeneficiaryCriminalHistory(YesNo::No))
            .unwrap();
        case.record_answer(Answer::BeneficiaryImmigrationViolations(YesNo::No))
            .unwrap();
        case.record_answer(Answer::BeneficiaryHealthConcerns(YesNo::No))
            .unwrap();
        case.record_answer(Answer::BeneficiarySecurityConcerns(YesNo::No))
            .unwrap();
        case.record_answer(Answer::BeneficiaryCurrentlyInUs(YesNo::No))
            .unwrap();

        while let AdvanceOutcome::Moved(_) = case.advance() {}
        assert_eq!(case.current_screen(), ScreenId::BeneficiaryLegalSummary);
        assert_eq!(case.advance(), AdvanceOutcome::EndOfFlow);
    }

    #[test]
    fn questionnaire_walks_the_gap_branch() {
        let mut case = sponsor_case();
        // Household of 2 -> requirement $21,150.
        let outcome = case
            .questionnaire_submit(QuestionnaireAnswer::TaxYearMode(TaxYearMode::MostRecent))
            .unwrap();
        assert_eq!(outcome.step, StepId::FiledReturn);

        case.questionnaire_submit(QuestionnaireAnswer::FiledReturn(YesNo::Yes))
            .unwrap();
        let outcome = case
            .questionnaire_submit(QuestionnaireAnswer::ReportedAgi(Money::from_dollars(15150)))
            .unwrap();
        assert_eq!(outcome.step, StepId::AssetCoverage);

        let outcome = case
            .questionnaire_submit(QuestionnaireAnswer::AssetsCoverGap(YesNo::Yes))
            .unwrap();
        assert_eq!(outcome.step, StepId::EndAssets);
        let report = outcome.endpoint.unwrap();
        // Gap of $6,000 times three.
        assert_eq!(report.assets_needed, Some(Money::from_dollars(18000)));
        assert!(report
            .documents
            .contains(&DocumentKind::AssetRecords));
    }

    #[test]
    fn questionnaire_back_pops_and_bottoms_out_at_reset() {
        let mut case = sponsor_case();
        case.questionnaire_submit(QuestionnaireAnswer::TaxYearMode(TaxYearMode::Prior))
            .unwrap();
        case.questionnaire_submit(QuestionnaireAnswer::FiledReturn(YesNo::Yes))
            .unwrap();
        assert_eq!(case.questionnaire().current, StepId::ReportedAgi);

        assert_eq!(case.questionnaire_back(), StepId::FiledReturn);
        assert_eq!(case.questionnaire_back(), StepId::ModeSelection);

        // One more back resets and clears the mode.
        assert_eq!(case.questionnaire_back(), StepId::ModeSelection);
        assert_eq!(case.answers().questionnaire.tax_year_mode, None);
        // Answers other than the mode survive for a re-walk.
        assert_eq!(
            case.answers().questionnaire.filed_return,
            Some(YesNo::Yes)
        );
    }

    #[test]
    fn questionnaire_submit_requires_the_steps_answer_shape() {
        let mut case = sponsor_case();
        // An AGI submitted while mode selection is showing is rejected
        // outright; nothing gets recorded.
        let err = case
            .questionnaire_submit(QuestionnaireAnswer::ReportedAgi(Money::from_dollars(40000)))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::UnexpectedStepAnswer);
        assert_eq!(case.questionnaire().current, StepId::ModeSelection);
        assert_eq!(case.answers().questionnaire.reported_agi, None);
    }

    #[test]
    fn questionnaire_prompt_reflects_mode_and_requirement() {
        let mut case = sponsor_case();
        let prompt = case.questionnaire_prompt();
        assert_eq!(prompt.reference_year, None);
        assert_eq!(prompt.required_income, Money::from_dollars(21150));

        case.questionnaire_submit(QuestionnaireAnswer::TaxYearMode(TaxYearMode::Prior))
            .unwrap();
        assert_eq!(case.questionnaire_prompt().reference_year, Some(2023));
    }

    #[test]
    fn household_snapshot_tracks_answer_changes() {
        let mut case = sponsor_case();
        assert_eq!(case.household().household_size, 2);

        case.record_answer(Answer::HasChildren(YesNo::Yes)).unwrap();
        case.record_answer(Answer::AddChild(crate::domain::answers::Child {
            given_name: "Ada".to_string(),
            birth_date: None,
            immigrating: true,
        }))
        .unwrap();
        assert_eq!(case.household().household_size, 3);
        assert_eq!(case.household().minimum_income, Money::from_dollars(26650));
    }

    #[test]
    fn events_accumulate_in_order_and_drain_once() {
        let mut case = sponsor_case();
        case.take_events();

        case.record_answer(Answer::LegallyFreeToMarry(YesNo::No))
            .unwrap();
        let events = case.take_events();
        assert!(matches!(events[0], CaseEvent::AnswerRecorded { .. }));
        assert!(matches!(
            events[1],
            CaseEvent::FlagRaised {
                rule: RuleId::LegallyFree,
                ..
            }
        ));
        assert!(case.take_events().is_empty());
    }
}
