//! Answer commands - every write the wizard can make to the store.
//!
//! One variant per writable field, plus add/update/remove operations
//! for the repeating-row lists. Applying a command is the only way the
//! store changes, which is what lets flag recomputation hook every
//! write.

use chrono::NaiveDate;

use crate::domain::foundation::Money;

use super::{
    Child, Dependent, EmploymentKind, ObligationEnd, OtherObligation, PriorPetition,
    SupportObligation, TaxYearMode, YesNo,
};

/// A single answer write against the main store.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    // Section 1 - getting started
    SponsorName(String),
    BeneficiaryName(String),

    // Section 2 - relationship requirements
    LegallyFreeToMarry(YesNo),
    MetInPerson(YesNo),
    LastMetOn(NaiveDate),
    PlansToMeet(YesNo),
    MetThroughBroker(YesNo),
    IntendsMarriageWithinWindow(YesNo),
    MeetingDescription(String),

    // Section 3 - sponsor profile
    SponsorBirthDate(NaiveDate),
    SponsorOccupation(String),
    SponsorMailingAddress(String),
    SponsorEmail(String),

    // Section 4 - sponsor legal history
    SponsorCriminalHistory(YesNo),
    SponsorSecurityConcerns(YesNo),

    // Section 5 - beneficiary profile
    BeneficiaryBirthDate(NaiveDate),
    BeneficiaryCitizenshipCountry(String),
    BeneficiaryResidenceAddress(String),
    BeneficiaryEmail(String),

    // Section 6 - beneficiary legal history
    BeneficiaryCriminalHistory(YesNo),
    BeneficiaryImmigrationViolations(YesNo),
    BeneficiaryHealthConcerns(YesNo),
    BeneficiarySecurityConcerns(YesNo),
    BeneficiaryCurrentlyInUs(YesNo),

    // Section 7 - household and prior petitions
    HasPriorPetitions(YesNo),
    AddPriorPetition(PriorPetition),
    UpdatePriorPetition { index: usize, petition: PriorPetition },
    RemovePriorPetition { index: usize },
    HasChildren(YesNo),
    AddChild(Child),
    UpdateChild { index: usize, child: Child },
    RemoveChild { index: usize },
    HasOtherDependents(YesNo),
    AddDependent(Dependent),
    RemoveDependent { index: usize },
    HasSupportObligations(YesNo),
    AddSupportObligation(SupportObligation),
    EndSupportObligation { index: usize, reason: ObligationEnd },
    RemoveSupportObligation { index: usize },
    AddOtherObligation(OtherObligation),
    RemoveOtherObligation { index: usize },

    // Section 8 - income
    CurrentAnnualIncome(Money),
}

/// A single answer write against the income questionnaire namespace.
///
/// Questionnaire answers are kept apart from [`Answer`] because each
/// submission also drives a decision-tree transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuestionnaireAnswer {
    TaxYearMode(TaxYearMode),
    FiledReturn(YesNo),
    HadFilingException(YesNo),
    ReportedAgi(Money),
    Employment(EmploymentKind),
    AssetsCoverGap(YesNo),
    CurrentIncomeSufficient(YesNo),
}
