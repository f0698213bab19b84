//! Answers module - The typed answer store and its write commands.

mod command;
mod records;
mod store;
mod value;

pub use command::{Answer, QuestionnaireAnswer};
pub use records::{Child, Dependent, ObligationEnd, OtherObligation, PriorPetition, SupportObligation};
pub use store::{
    AnswerStore, BeneficiaryLegalAnswers, BeneficiaryProfileAnswers, GettingStartedAnswers,
    HouseholdAnswers, IncomeAnswers, QuestionnaireAnswers, RequirementsAnswers,
    SponsorLegalAnswers, SponsorProfileAnswers,
};
pub use value::{EmploymentKind, TaxYearMode, YesNo};
