//! Screening case domain events.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CaseId, Timestamp};
use crate::domain::income_proof::StepId;
use crate::domain::navigation::ScreenId;
use crate::domain::screening::{RuleId, Section};

/// Events that can occur over a screening case's lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CaseEvent {
    /// A new case was started.
    Created {
        case_id: CaseId,
        created_at: Timestamp,
    },

    /// An answer was written while a screen was showing.
    AnswerRecorded { case_id: CaseId, screen: ScreenId },

    /// A rule's flag flipped from false to true.
    FlagRaised { case_id: CaseId, rule: RuleId },

    /// A rule's flag flipped from true to false.
    FlagCleared { case_id: CaseId, rule: RuleId },

    /// Navigation moved to a different screen.
    ScreenChanged {
        case_id: CaseId,
        from: ScreenId,
        to: ScreenId,
    },

    /// A section exit gate refused forward navigation.
    SectionBlocked {
        case_id: CaseId,
        section: Section,
        rule_count: usize,
    },

    /// The applicant dismissed the disqualification view.
    DisqualificationAcknowledged { case_id: CaseId },

    /// The income questionnaire moved forward one step.
    QuestionnaireAdvanced {
        case_id: CaseId,
        from: StepId,
        to: StepId,
    },

    /// The income questionnaire stepped back one level.
    QuestionnaireRewound { case_id: CaseId, to: StepId },

    /// The income questionnaire returned to mode selection.
    QuestionnaireReset { case_id: CaseId },
}

impl CaseEvent {
    /// The case this event belongs to.
    pub fn case_id(&self) -> CaseId {
        match self {
            CaseEvent::Created { case_id, .. }
            | CaseEvent::AnswerRecorded { case_id, .. }
            | CaseEvent::FlagRaised { case_id, .. }
            | CaseEvent::FlagCleared { case_id, .. }
            | CaseEvent::ScreenChanged { case_id, .. }
            | CaseEvent::SectionBlocked { case_id, .. }
            | CaseEvent::DisqualificationAcknowledged { case_id }
            | CaseEvent::QuestionnaireAdvanced { case_id, .. }
            | CaseEvent::QuestionnaireRewound { case_id, .. }
            | CaseEvent::QuestionnaireReset { case_id } => *case_id,
        }
    }
}
