//! Wizard sections and the section-to-rule registry.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::RuleId;

/// A numbered section of the screening wizard.
///
/// Numbering is global across both roles: the sponsor flow visits
/// sections 1, 2, 3, 4, 7, and 8; the beneficiary flow visits 1, 5,
/// and 6. The registry in [`Section::rules`] is the single mapping
/// between sections and the rules their exit gates aggregate; nothing
/// is inferred from flag-key spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    GettingStarted,
    Requirements,
    SponsorProfile,
    LegalSponsor,
    BeneficiaryProfile,
    LegalBeneficiary,
    Household,
    Income,
}

impl Section {
    /// All sections in numeric order.
    pub const ORDER: [Section; 8] = [
        Section::GettingStarted,
        Section::Requirements,
        Section::SponsorProfile,
        Section::LegalSponsor,
        Section::BeneficiaryProfile,
        Section::LegalBeneficiary,
        Section::Household,
        Section::Income,
    ];

    /// Returns all sections in numeric order.
    pub fn all() -> &'static [Section; 8] {
        &Self::ORDER
    }

    /// The section's global number.
    pub fn number(&self) -> u8 {
        match self {
            Section::GettingStarted => 1,
            Section::Requirements => 2,
            Section::SponsorProfile => 3,
            Section::LegalSponsor => 4,
            Section::BeneficiaryProfile => 5,
            Section::LegalBeneficiary => 6,
            Section::Household => 7,
            Section::Income => 8,
        }
    }

    /// The route prefix all of the section's screens share.
    pub fn path_prefix(&self) -> &'static str {
        match self {
            Section::GettingStarted => "/section-1-getting-started",
            Section::Requirements => "/section-2-requirements",
            Section::SponsorProfile => "/section-3-sponsor-profile",
            Section::LegalSponsor => "/section-4-legal-sponsor",
            Section::BeneficiaryProfile => "/section-5-beneficiary-profile",
            Section::LegalBeneficiary => "/section-6-legal-beneficiary",
            Section::Household => "/section-7-household",
            Section::Income => "/section-8-income",
        }
    }

    /// Human-readable section title.
    pub fn title(&self) -> &'static str {
        match self {
            Section::GettingStarted => "Getting Started",
            Section::Requirements => "Relationship Requirements",
            Section::SponsorProfile => "Sponsor Profile",
            Section::LegalSponsor => "Sponsor Legal History",
            Section::BeneficiaryProfile => "Beneficiary Profile",
            Section::LegalBeneficiary => "Beneficiary Legal History",
            Section::Household => "Household and Prior Petitions",
            Section::Income => "Income and Documents",
        }
    }

    /// The rules this section's exit gate aggregates.
    ///
    /// Sections without rules gate on nothing and always let the user
    /// through.
    pub fn rules(&self) -> &'static [RuleId] {
        match self {
            Section::Requirements => &[
                RuleId::LegallyFree,
                RuleId::MeetingWindow,
                RuleId::MarriageBroker,
                RuleId::IntentToMarry,
            ],
            Section::LegalSponsor => &[RuleId::SponsorCriminal, RuleId::SponsorSecurity],
            Section::LegalBeneficiary => &[
                RuleId::BeneficiaryCriminal,
                RuleId::BeneficiaryImmigration,
                RuleId::BeneficiaryHealth,
                RuleId::BeneficiarySecurity,
                RuleId::UsPresence,
            ],
            Section::Household => &[
                RuleId::PetitionLimit,
                RuleId::PetitionCooldown,
                RuleId::PriorBeneficiarySpouse,
            ],
            Section::GettingStarted
            | Section::SponsorProfile
            | Section::BeneficiaryProfile
            | Section::Income => &[],
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}
