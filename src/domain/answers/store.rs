//! The answer store - typed records of everything the applicant has said.
//!
//! One record per section instead of a flat string-keyed map, so every
//! read is field access rather than key lookup and parse. Answers are
//! never erased when a controlling radio is toggled back; consumers gate
//! on the controlling answer instead (see the household calculator and
//! the screen preconditions).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, Money, ValidationError};
use crate::domain::screening::FlagSet;

use super::{
    Answer, Child, Dependent, EmploymentKind, ObligationEnd, OtherObligation, PriorPetition,
    QuestionnaireAnswer, SupportObligation, TaxYearMode, YesNo,
};

/// Section 1 answers - who the parties are.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GettingStartedAnswers {
    pub sponsor_name: Option<String>,
    pub beneficiary_name: Option<String>,
}

/// Section 2 answers - relationship requirements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequirementsAnswers {
    pub legally_free_to_marry: Option<YesNo>,
    pub met_in_person: Option<YesNo>,
    /// Asked only when `met_in_person` is "yes"; compared against the
    /// policy meeting window.
    pub last_met_on: Option<NaiveDate>,
    /// Asked only when `met_in_person` is "no".
    pub plans_to_meet: Option<YesNo>,
    pub met_through_broker: Option<YesNo>,
    pub intends_marriage_within_window: Option<YesNo>,
    pub meeting_description: Option<String>,
}

/// Section 3 answers - sponsor profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SponsorProfileAnswers {
    pub birth_date: Option<NaiveDate>,
    pub occupation: Option<String>,
    pub mailing_address: Option<String>,
    pub email: Option<String>,
}

/// Section 4 answers - sponsor legal history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SponsorLegalAnswers {
    pub criminal_history: Option<YesNo>,
    pub security_concerns: Option<YesNo>,
}

/// Section 5 answers - beneficiary profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BeneficiaryProfileAnswers {
    pub birth_date: Option<NaiveDate>,
    pub citizenship_country: Option<String>,
    pub residence_address: Option<String>,
    pub email: Option<String>,
}

/// Section 6 answers - beneficiary legal history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BeneficiaryLegalAnswers {
    pub criminal_history: Option<YesNo>,
    pub immigration_violations: Option<YesNo>,
    pub health_concerns: Option<YesNo>,
    pub security_concerns: Option<YesNo>,
    pub currently_in_us: Option<YesNo>,
}

/// Section 7 answers - household composition and prior petitions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HouseholdAnswers {
    pub has_prior_petitions: Option<YesNo>,
    pub prior_petitions: Vec<PriorPetition>,
    pub has_children: Option<YesNo>,
    pub children: Vec<Child>,
    pub has_other_dependents: Option<YesNo>,
    pub dependents: Vec<Dependent>,
    pub has_support_obligations: Option<YesNo>,
    pub support_obligations: Vec<SupportObligation>,
    /// Free-form obligations with no controlling radio.
    pub other_obligations: Vec<OtherObligation>,
}

/// Section 8 answers - income.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncomeAnswers {
    pub current_annual_income: Option<Money>,
}

/// Income-proof questionnaire answers, namespaced apart from the main
/// sections so a reset of the questionnaire cannot touch wizard data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionnaireAnswers {
    pub tax_year_mode: Option<TaxYearMode>,
    pub filed_return: Option<YesNo>,
    pub had_filing_exception: Option<YesNo>,
    pub reported_agi: Option<Money>,
    pub employment: Option<EmploymentKind>,
    pub assets_cover_gap: Option<YesNo>,
    pub current_income_sufficient: Option<YesNo>,
}

impl QuestionnaireAnswers {
    /// Applies one questionnaire write.
    pub fn apply(&mut self, answer: QuestionnaireAnswer) -> Result<(), DomainError> {
        match answer {
            QuestionnaireAnswer::TaxYearMode(mode) => self.tax_year_mode = Some(mode),
            QuestionnaireAnswer::FiledReturn(v) => self.filed_return = Some(v),
            QuestionnaireAnswer::HadFilingException(v) => self.had_filing_exception = Some(v),
            QuestionnaireAnswer::ReportedAgi(agi) => {
                if agi < Money::ZERO {
                    return Err(ValidationError::out_of_range(
                        "reported_agi",
                        0,
                        i64::MAX,
                        agi.dollars(),
                    )
                    .into());
                }
                self.reported_agi = Some(agi);
            }
            QuestionnaireAnswer::Employment(kind) => self.employment = Some(kind),
            QuestionnaireAnswer::AssetsCoverGap(v) => self.assets_cover_gap = Some(v),
            QuestionnaireAnswer::CurrentIncomeSufficient(v) => {
                self.current_income_sufficient = Some(v)
            }
        }
        Ok(())
    }
}

/// Everything the applicant has answered, plus the stored rule flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerStore {
    pub getting_started: GettingStartedAnswers,
    pub requirements: RequirementsAnswers,
    pub sponsor_profile: SponsorProfileAnswers,
    pub sponsor_legal: SponsorLegalAnswers,
    pub beneficiary_profile: BeneficiaryProfileAnswers,
    pub beneficiary_legal: BeneficiaryLegalAnswers,
    pub household: HouseholdAnswers,
    pub income: IncomeAnswers,
    pub questionnaire: QuestionnaireAnswers,
    pub flags: FlagSet,
}

impl AnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one answer write.
    ///
    /// Untypeable input is rejected with an error rather than stored:
    /// blank required text, negative money, and out-of-range list
    /// indices never reach the store. Typeable-but-partial input (a
    /// petition missing its filing date, say) is stored as-is and left
    /// to the hosting screen's completeness check.
    pub fn apply(&mut self, answer: Answer) -> Result<(), DomainError> {
        match answer {
            Answer::SponsorName(name) => {
                self.getting_started.sponsor_name = Some(require_text("sponsor_name", name)?);
            }
            Answer::BeneficiaryName(name) => {
                self.getting_started.beneficiary_name =
                    Some(require_text("beneficiary_name", name)?);
            }

            Answer::LegallyFreeToMarry(v) => self.requirements.legally_free_to_marry = Some(v),
            Answer::MetInPerson(v) => self.requirements.met_in_person = Some(v),
            Answer::LastMetOn(date) => self.requirements.last_met_on = Some(date),
            Answer::PlansToMeet(v) => self.requirements.plans_to_meet = Some(v),
            Answer::MetThroughBroker(v) => self.requirements.met_through_broker = Some(v),
            Answer::IntendsMarriageWithinWindow(v) => {
                self.requirements.intends_marriage_within_window = Some(v)
            }
            Answer::MeetingDescription(text) => {
                self.requirements.meeting_description =
                    Some(require_text("meeting_description", text)?);
            }

            Answer::SponsorBirthDate(date) => self.sponsor_profile.birth_date = Some(date),
            Answer::SponsorOccupation(text) => {
                self.sponsor_profile.occupation = Some(require_text("occupation", text)?);
            }
            Answer::SponsorMailingAddress(text) => {
                self.sponsor_profile.mailing_address =
                    Some(require_text("mailing_address", text)?);
            }
            Answer::SponsorEmail(text) => {
                self.sponsor_profile.email = Some(require_text("email", text)?);
            }

            Answer::SponsorCriminalHistory(v) => self.sponsor_legal.criminal_history = Some(v),
            Answer::SponsorSecurityConcerns(v) => self.sponsor_legal.security_concerns = Some(v),

            Answer::BeneficiaryBirthDate(date) => self.beneficiary_profile.birth_date = Some(date),
            Answer::BeneficiaryCitizenshipCountry(text) => {
                self.beneficiary_profile.citizenship_country =
                    Some(require_text("citizenship_country", text)?);
            }
            Answer::BeneficiaryResidenceAddress(text) => {
                self.beneficiary_profile.residence_address =
                    Some(require_text("residence_address", text)?);
            }
            Answer::BeneficiaryEmail(text) => {
                self.beneficiary_profile.email = Some(require_text("email", text)?);
            }

            Answer::BeneficiaryCriminalHistory(v) => {
                self.beneficiary_legal.criminal_history = Some(v)
            }
            Answer::BeneficiaryImmigrationViolations(v) => {
                self.beneficiary_legal.immigration_violations = Some(v)
            }
            Answer::BeneficiaryHealthConcerns(v) => {
                self.beneficiary_legal.health_concerns = Some(v)
            }
            Answer::BeneficiarySecurityConcerns(v) => {
                self.beneficiary_legal.security_concerns = Some(v)
            }
            Answer::BeneficiaryCurrentlyInUs(v) => {
                self.beneficiary_legal.currently_in_us = Some(v)
            }

            Answer::HasPriorPetitions(v) => self.household.has_prior_petitions = Some(v),
            Answer::AddPriorPetition(petition) => {
                require_text("beneficiary_name", petition.beneficiary_name.clone())?;
                self.household.prior_petitions.push(petition);
            }
            Answer::UpdatePriorPetition { index, petition } => {
                require_text("beneficiary_name", petition.beneficiary_name.clone())?;
                let len = self.household.prior_petitions.len();
                let slot = self
                    .household
                    .prior_petitions
                    .get_mut(index)
                    .ok_or_else(|| {
                        DomainError::index_out_of_bounds("prior_petitions", index, len)
                    })?;
                *slot = petition;
            }
            Answer::RemovePriorPetition { index } => {
                remove_at(&mut self.household.prior_petitions, "prior_petitions", index)?;
            }

            Answer::HasChildren(v) => self.household.has_children = Some(v),
            Answer::AddChild(child) => {
                require_text("given_name", child.given_name.clone())?;
                self.household.children.push(child);
            }
            Answer::UpdateChild { index, child } => {
                require_text("given_name", child.given_name.clone())?;
                let len = self.household.children.len();
                let slot = self
                    .household
                    .children
                    .get_mut(index)
                    .ok_or_else(|| DomainError::index_out_of_bounds("children", index, len))?;
                *slot = child;
            }
            Answer::RemoveChild { index } => {
                remove_at(&mut self.household.children, "children", index)?;
            }

            Answer::HasOtherDependents(v) => self.household.has_other_dependents = Some(v),
            Answer::AddDependent(dependent) => {
                require_text("name", dependent.name.clone())?;
                require_text("relationship", dependent.relationship.clone())?;
                self.household.dependents.push(dependent);
            }
            Answer::RemoveDependent { index } => {
                remove_at(&mut self.household.dependents, "dependents", index)?;
            }

            Answer::HasSupportObligations(v) => {
                self.household.has_support_obligations = Some(v)
            }
            Answer::AddSupportObligation(obligation) => {
                require_text("person_name", obligation.person_name.clone())?;
                self.household.support_obligations.push(obligation);
            }
            Answer::EndSupportObligation { index, reason } => {
                let len = self.household.support_obligations.len();
                let slot = self
                    .household
                    .support_obligations
                    .get_mut(index)
                    .ok_or_else(|| {
                        DomainError::index_out_of_bounds("support_obligations", index, len)
                    })?;
                slot.ended = Some(reason);
            }
            Answer::RemoveSupportObligation { index } => {
                remove_at(
                    &mut self.household.support_obligations,
                    "support_obligations",
                    index,
                )?;
            }
            Answer::AddOtherObligation(obligation) => {
                require_text("description", obligation.description.clone())?;
                self.household.other_obligations.push(obligation);
            }
            Answer::RemoveOtherObligation { index } => {
                remove_at(
                    &mut self.household.other_obligations,
                    "other_obligations",
                    index,
                )?;
            }

            Answer::CurrentAnnualIncome(amount) => {
                if amount < Money::ZERO {
                    return Err(ValidationError::out_of_range(
                        "current_annual_income",
                        0,
                        i64::MAX,
                        amount.dollars(),
                    )
                    .into());
                }
                self.income.current_annual_income = Some(amount);
            }
        }
        Ok(())
    }
}

fn require_text(field: &'static str, value: String) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field).into());
    }
    Ok(trimmed.to_string())
}

fn remove_at<T>(list: &mut Vec<T>, field: &'static str, index: usize) -> Result<T, DomainError> {
    if index >= list.len() {
        return Err(DomainError::index_out_of_bounds(field, index, list.len()));
    }
    Ok(list.remove(index))
}
