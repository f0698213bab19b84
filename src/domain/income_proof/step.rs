//! Questionnaire steps and the visited-step history.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::answers::QuestionnaireAnswer;

/// One step of the income-proof questionnaire.
///
/// Serializes to the step keys the rendering layer routes on. Question
/// steps collect one answer each; endpoint steps terminate the walk
/// with a document recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepId {
    /// Pick which tax year to interview about.
    #[serde(rename = "mode-selection")]
    ModeSelection,
    /// Did you file a federal return for the chosen year?
    #[serde(rename = "q1")]
    FiledReturn,
    /// What adjusted gross income does the return show?
    #[serde(rename = "q2")]
    ReportedAgi,
    /// How was the income earned?
    #[serde(rename = "q3")]
    Employment,
    /// Do assets cover the shortfall times the multiplier?
    #[serde(rename = "q4")]
    AssetCoverage,
    /// Does current income meet the requirement even though the return fell short?
    #[serde(rename = "q5")]
    CurrentIncome,
    /// Were you exempt from filing for the chosen year?
    #[serde(rename = "q6")]
    FilingException,

    #[serde(rename = "end-employed")]
    EndEmployed,
    #[serde(rename = "end-self-employed")]
    EndSelfEmployed,
    #[serde(rename = "end-mixed")]
    EndMixed,
    #[serde(rename = "end-assets")]
    EndAssets,
    #[serde(rename = "end-current-income")]
    EndCurrentIncome,
    #[serde(rename = "end-insufficient")]
    EndInsufficient,
    #[serde(rename = "end-exception")]
    EndException,
    #[serde(rename = "end-must-file")]
    EndMustFile,
}

impl StepId {
    /// The routing key the rendering layer uses for this step.
    pub fn key(&self) -> &'static str {
        match self {
            StepId::ModeSelection => "mode-selection",
            StepId::FiledReturn => "q1",
            StepId::ReportedAgi => "q2",
            StepId::Employment => "q3",
            StepId::AssetCoverage => "q4",
            StepId::CurrentIncome => "q5",
            StepId::FilingException => "q6",
            StepId::EndEmployed => "end-employed",
            StepId::EndSelfEmployed => "end-self-employed",
            StepId::EndMixed => "end-mixed",
            StepId::EndAssets => "end-assets",
            StepId::EndCurrentIncome => "end-current-income",
            StepId::EndInsufficient => "end-insufficient",
            StepId::EndException => "end-exception",
            StepId::EndMustFile => "end-must-file",
        }
    }

    /// Whether `answer` is the kind of answer this step collects.
    ///
    /// Endpoints collect nothing, so they accept nothing.
    pub fn accepts(&self, answer: &QuestionnaireAnswer) -> bool {
        matches!(
            (self, answer),
            (StepId::ModeSelection, QuestionnaireAnswer::TaxYearMode(_))
                | (StepId::FiledReturn, QuestionnaireAnswer::FiledReturn(_))
                | (StepId::ReportedAgi, QuestionnaireAnswer::ReportedAgi(_))
                | (StepId::Employment, QuestionnaireAnswer::Employment(_))
                | (StepId::AssetCoverage, QuestionnaireAnswer::AssetsCoverGap(_))
                | (
                    StepId::CurrentIncome,
                    QuestionnaireAnswer::CurrentIncomeSufficient(_)
                )
                | (
                    StepId::FilingException,
                    QuestionnaireAnswer::HadFilingException(_)
                )
        )
    }

    /// Whether this step terminates the questionnaire.
    pub fn is_endpoint(&self) -> bool {
        matches!(
            self,
            StepId::EndEmployed
                | StepId::EndSelfEmployed
                | StepId::EndMixed
                | StepId::EndAssets
                | StepId::EndCurrentIncome
                | StepId::EndInsufficient
                | StepId::EndException
                | StepId::EndMustFile
        )
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Where the questionnaire walk currently stands.
///
/// History is a plain stack of visited steps. Back pops one level; at
/// the bottom of the stack it falls through to a reset, and resetting
/// an already-reset state changes nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireState {
    pub current: StepId,
    pub history: Vec<StepId>,
}

impl QuestionnaireState {
    pub fn new() -> Self {
        Self {
            current: StepId::ModeSelection,
            history: Vec::new(),
        }
    }

    /// Moves to `next`, pushing the current step onto history.
    pub fn go_to(&mut self, next: StepId) {
        self.history.push(self.current);
        self.current = next;
    }

    /// Pops one level of history.
    ///
    /// Returns the step landed on. With no history left this resets to
    /// mode selection, so backing out of the first question behaves the
    /// same as an explicit reset.
    pub fn back(&mut self) -> StepId {
        match self.history.pop() {
            Some(previous) => self.current = previous,
            None => self.reset(),
        }
        self.current
    }

    /// Returns to mode selection and forgets the walk.
    pub fn reset(&mut self) {
        self.current = StepId::ModeSelection;
        self.history.clear();
    }
}

impl Default for QuestionnaireState {
    fn default() -> Self {
        Self::new()
    }
}
