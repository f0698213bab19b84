//! Step transitions for the income-proof questionnaire.
//!
//! One tree serves both tax-year modes; the chosen mode only changes
//! which calendar year the prompts name, never the shape of the walk.
//! Each transition reads the answer recorded for the current step and
//! the derived income requirement, nothing else.

use serde::{Deserialize, Serialize};

use crate::domain::answers::{EmploymentKind, QuestionnaireAnswers, TaxYearMode, YesNo};
use crate::domain::foundation::{DomainError, ErrorCode, Money, ScreeningPolicy};

use super::StepId;

/// Context the rendering layer needs to phrase a step's question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepPrompt {
    pub step: StepId,
    /// The concrete year the question refers to; `None` until a mode is
    /// chosen on the first step.
    pub reference_year: Option<i32>,
    /// The income requirement the thresholds compare against.
    pub required_income: Money,
}

/// Routes questionnaire steps from recorded answers.
pub struct DecisionTree;

impl DecisionTree {
    /// Computes the step after `current` from the recorded answers.
    ///
    /// The answer for the current step must already be written into the
    /// questionnaire namespace; a missing answer is a
    /// `MissingRequiredAnswer` error and an endpoint refuses further
    /// submissions with `QuestionnaireComplete`.
    pub fn transition(
        current: StepId,
        answers: &QuestionnaireAnswers,
        required_income: Money,
    ) -> Result<StepId, DomainError> {
        if current.is_endpoint() {
            return Err(DomainError::new(
                ErrorCode::QuestionnaireComplete,
                format!("Step '{}' is an endpoint; reset or go back to continue", current),
            ));
        }

        match current {
            StepId::ModeSelection => {
                require(answers.tax_year_mode, StepId::ModeSelection)?;
                Ok(StepId::FiledReturn)
            }
            StepId::FiledReturn => {
                match require(answers.filed_return, StepId::FiledReturn)? {
                    YesNo::Yes => Ok(StepId::ReportedAgi),
                    YesNo::No => Ok(StepId::FilingException),
                }
            }
            StepId::FilingException => {
                match require(answers.had_filing_exception, StepId::FilingException)? {
                    YesNo::Yes => Ok(StepId::EndException),
                    YesNo::No => Ok(StepId::EndMustFile),
                }
            }
            StepId::ReportedAgi => {
                let agi = require(answers.reported_agi, StepId::ReportedAgi)?;
                if agi >= required_income {
                    Ok(StepId::Employment)
                } else {
                    Ok(StepId::AssetCoverage)
                }
            }
            StepId::Employment => {
                match require(answers.employment, StepId::Employment)? {
                    EmploymentKind::W2Employee => Ok(StepId::EndEmployed),
                    EmploymentKind::SelfEmployed => Ok(StepId::EndSelfEmployed),
                    EmploymentKind::Mixed => Ok(StepId::EndMixed),
                }
            }
            StepId::AssetCoverage => {
                match require(answers.assets_cover_gap, StepId::AssetCoverage)? {
                    YesNo::Yes => Ok(StepId::EndAssets),
                    YesNo::No => Ok(StepId::CurrentIncome),
                }
            }
            StepId::CurrentIncome => {
                match require(answers.current_income_sufficient, StepId::CurrentIncome)? {
                    YesNo::Yes => Ok(StepId::EndCurrentIncome),
                    YesNo::No => Ok(StepId::EndInsufficient),
                }
            }
            // Endpoints were rejected above.
            _ => unreachable!("endpoint transitions are rejected before matching"),
        }
    }

    /// The assets needed to bridge an income shortfall.
    ///
    /// Zero when the reported income meets the requirement; otherwise
    /// the gap times the policy multiplier.
    pub fn assets_needed(
        reported_agi: Money,
        required_income: Money,
        policy: &ScreeningPolicy,
    ) -> Money {
        required_income
            .saturating_sub(reported_agi)
            .times(policy.income.asset_gap_multiplier)
    }

    /// Builds the prompt context for a step.
    pub fn prompt(
        step: StepId,
        answers: &QuestionnaireAnswers,
        required_income: Money,
        policy: &ScreeningPolicy,
    ) -> StepPrompt {
        StepPrompt {
            step,
            reference_year: answers
                .tax_year_mode
                .map(|mode| mode.resolve_year(&policy.income)),
            required_income,
        }
    }
}

fn require<T>(answer: Option<T>, step: StepId) -> Result<T, DomainError> {
    answer.ok_or_else(|| {
        DomainError::new(
            ErrorCode::MissingRequiredAnswer,
            format!("Step '{}' has no recorded answer", step),
        )
        .with_detail("step", step.key())
    })
}
