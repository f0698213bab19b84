//! Document recommendations for questionnaire endpoints.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::answers::QuestionnaireAnswers;

use super::StepId;

/// A document the sponsor should gather for the income-proof packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// The federal return or an IRS transcript for the chosen year.
    TaxReturnOrTranscript,
    /// W-2 forms from every employer for the chosen year.
    W2Forms,
    /// 1099 forms reporting non-wage income.
    Forms1099,
    /// Schedules substantiating self-employment income.
    SelfEmploymentSchedules,
    /// Statements proving asset ownership and value.
    AssetRecords,
    /// A letter from the current employer stating salary and start date.
    EmployerLetter,
    /// Recent pay stubs showing current income.
    PayStubs,
    /// A written statement explaining why no return was required.
    NonFilingExplanation,
    /// The missing return, filed late before the petition goes in.
    BelatedTaxReturn,
    /// A household member or joint sponsor's support commitment.
    JointSponsorSupport,
}

impl DocumentKind {
    /// Short label for checklists.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::TaxReturnOrTranscript => "Federal tax return or IRS transcript",
            DocumentKind::W2Forms => "W-2 forms",
            DocumentKind::Forms1099 => "1099 forms",
            DocumentKind::SelfEmploymentSchedules => "Self-employment schedules",
            DocumentKind::AssetRecords => "Asset ownership and value records",
            DocumentKind::EmployerLetter => "Employer letter",
            DocumentKind::PayStubs => "Recent pay stubs",
            DocumentKind::NonFilingExplanation => "Statement of non-filing",
            DocumentKind::BelatedTaxReturn => "Late-filed federal tax return",
            DocumentKind::JointSponsorSupport => "Joint sponsor support documents",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Assembles the document bundle for an endpoint.
///
/// The bundle reflects which branch conditions held on the way in: a
/// mixed-income filer collects both wage and self-employment evidence,
/// an asset endpoint adds asset records on top of the return, and so
/// on. Question steps have no bundle and return an empty list.
pub fn recommended_documents(
    endpoint: StepId,
    answers: &QuestionnaireAnswers,
) -> Vec<DocumentKind> {
    match endpoint {
        StepId::EndEmployed => vec![
            DocumentKind::TaxReturnOrTranscript,
            DocumentKind::W2Forms,
        ],
        StepId::EndSelfEmployed => vec![
            DocumentKind::TaxReturnOrTranscript,
            DocumentKind::SelfEmploymentSchedules,
            DocumentKind::Forms1099,
        ],
        StepId::EndMixed => vec![
            DocumentKind::TaxReturnOrTranscript,
            DocumentKind::W2Forms,
            DocumentKind::Forms1099,
            DocumentKind::SelfEmploymentSchedules,
        ],
        StepId::EndAssets => vec![
            DocumentKind::TaxReturnOrTranscript,
            DocumentKind::AssetRecords,
        ],
        StepId::EndCurrentIncome => vec![
            DocumentKind::TaxReturnOrTranscript,
            DocumentKind::EmployerLetter,
            DocumentKind::PayStubs,
        ],
        StepId::EndInsufficient => vec![
            DocumentKind::TaxReturnOrTranscript,
            DocumentKind::JointSponsorSupport,
        ],
        StepId::EndException => {
            let mut docs = vec![DocumentKind::NonFilingExplanation];
            // An exempt non-filer with recorded current income still
            // benefits from documenting it.
            if answers.current_income_sufficient.is_some() {
                docs.push(DocumentKind::PayStubs);
            }
            docs
        }
        StepId::EndMustFile => vec![DocumentKind::BelatedTaxReturn],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::answers::YesNo;

    #[test]
    fn employed_endpoint_bundles_return_and_w2s() {
        let docs = recommended_documents(StepId::EndEmployed, &QuestionnaireAnswers::default());
        assert_eq!(
            docs,
            vec![DocumentKind::TaxReturnOrTranscript, DocumentKind::W2Forms]
        );
    }

    #[test]
    fn mixed_endpoint_bundles_both_income_kinds() {
        let docs = recommended_documents(StepId::EndMixed, &QuestionnaireAnswers::default());
        assert!(docs.contains(&DocumentKind::W2Forms));
        assert!(docs.contains(&DocumentKind::SelfEmploymentSchedules));
    }

    #[test]
    fn exception_endpoint_adds_pay_stubs_when_income_was_discussed() {
        let mut answers = QuestionnaireAnswers::default();
        assert_eq!(
            recommended_documents(StepId::EndException, &answers),
            vec![DocumentKind::NonFilingExplanation]
        );

        answers.current_income_sufficient = Some(YesNo::Yes);
        let docs = recommended_documents(StepId::EndException, &answers);
        assert!(docs.contains(&DocumentKind::PayStubs));
    }

    #[test]
    fn question_steps_recommend_nothing() {
        assert!(
            recommended_documents(StepId::ReportedAgi, &QuestionnaireAnswers::default())
                .is_empty()
        );
    }

    #[test]
    fn document_kind_serializes_snake_case() {
        let json = serde_json::to_string(&DocumentKind::W2Forms).unwrap();
        assert_eq!(json, "\"w2_forms\"");
    }
}
