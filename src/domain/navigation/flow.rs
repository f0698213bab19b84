//! Per-role screen orderings.
//!
//! The arrays are the single source of truth for which screens a role
//! sees and in what order. Preconditions hide screens at walk time
//! without removing them from the arrays.

use crate::domain::foundation::Role;

use super::screen::ScreenId;

/// Screens a sponsor walks, in order.
pub const SPONSOR_FLOW: [ScreenId; 24] = [
    ScreenId::Welcome,
    ScreenId::FilingBasics,
    ScreenId::LegallyFree,
    ScreenId::MetInPerson,
    ScreenId::MeetingPlan,
    ScreenId::MarriageBroker,
    ScreenId::IntentToMarry,
    ScreenId::MeetingDescription,
    ScreenId::SponsorBasicInfo,
    ScreenId::SponsorContactInfo,
    ScreenId::SponsorCriminalHistory,
    ScreenId::SponsorSecurityMatters,
    ScreenId::SponsorLegalSummary,
    ScreenId::PreviousPetitions,
    ScreenId::PetitionDetails,
    ScreenId::Children,
    ScreenId::ChildrenDetails,
    ScreenId::Dependents,
    ScreenId::SupportObligations,
    ScreenId::HouseholdMembers,
    ScreenId::IncomeOverview,
    ScreenId::IncomeProof,
    ScreenId::Documents,
    ScreenId::Review,
];

/// Screens a beneficiary walks, in order.
pub const BENEFICIARY_FLOW: [ScreenId; 10] = [
    ScreenId::Welcome,
    ScreenId::FilingBasics,
    ScreenId::BeneficiaryBasicInfo,
    ScreenId::BeneficiaryContactInfo,
    ScreenId::BeneficiaryCriminalHistory,
    ScreenId::BeneficiaryImmigrationIssues,
    ScreenId::BeneficiaryHealthConcerns,
    ScreenId::BeneficiarySecurityMatters,
    ScreenId::UsPresence,
    ScreenId::BeneficiaryLegalSummary,
];

/// The flow for a role.
pub fn flow(role: Role) -> &'static [ScreenId] {
    match role {
        Role::Sponsor => &SPONSOR_FLOW,
        Role::Beneficiary => &BENEFICIARY_FLOW,
    }
}
