//! Screen registry - every route the wizard can show.
//!
//! Each screen knows its route path, owning section, visibility
//! precondition, completeness check, and which rules it hosts. The
//! flow arrays in [`super::flow`] pick the per-role ordering; nothing
//! here depends on position.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::answers::{AnswerStore, YesNo};
use crate::domain::screening::{RuleId, Section};

/// One screen of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScreenId {
    // Section 1 - getting started
    Welcome,
    FilingBasics,

    // Section 2 - relationship requirements
    LegallyFree,
    MetInPerson,
    MeetingPlan,
    MarriageBroker,
    IntentToMarry,
    MeetingDescription,

    // Section 3 - sponsor profile
    SponsorBasicInfo,
    SponsorContactInfo,

    // Section 4 - sponsor legal history
    SponsorCriminalHistory,
    SponsorSecurityMatters,
    SponsorLegalSummary,

    // Section 5 - beneficiary profile
    BeneficiaryBasicInfo,
    BeneficiaryContactInfo,

    // Section 6 - beneficiary legal history
    BeneficiaryCriminalHistory,
    BeneficiaryImmigrationIssues,
    BeneficiaryHealthConcerns,
    BeneficiarySecurityMatters,
    UsPresence,
    BeneficiaryLegalSummary,

    // Section 7 - household and prior petitions
    PreviousPetitions,
    PetitionDetails,
    Children,
    ChildrenDetails,
    Dependents,
    SupportObligations,
    HouseholdMembers,

    // Section 8 - income
    IncomeOverview,
    IncomeProof,
    Documents,
    Review,
}

/// Every screen, grouped by section.
pub const ALL_SCREENS: [ScreenId; 32] = [
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
    ScreenId::BeneficiaryBasicInfo,
    ScreenId::BeneficiaryContactInfo,
    ScreenId::BeneficiaryCriminalHistory,
    ScreenId::BeneficiaryImmigrationIssues,
    ScreenId::BeneficiaryHealthConcerns,
    ScreenId::BeneficiarySecurityMatters,
    ScreenId::UsPresence,
    ScreenId::BeneficiaryLegalSummary,
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

static PATH_INDEX: Lazy<HashMap<&'static str, ScreenId>> = Lazy::new(|| {
    ALL_SCREENS
        .iter()
        .map(|screen| (screen.path(), *screen))
        .collect()
});

impl ScreenId {
    /// Returns every screen.
    pub fn all() -> &'static [ScreenId; 32] {
        &ALL_SCREENS
    }

    /// Looks a screen up by its full route path.
    pub fn from_path(path: &str) -> Option<ScreenId> {
        PATH_INDEX.get(path).copied()
    }

    /// The screen's full route path.
    pub fn path(&self) -> &'static str {
        match self {
            ScreenId::Welcome => "/section-1-getting-started/welcome",
            ScreenId::FilingBasics => "/section-1-getting-started/filing-basics",
            ScreenId::LegallyFree => "/section-2-requirements/legally-free",
            ScreenId::MetInPerson => "/section-2-requirements/met-in-person",
            ScreenId::MeetingPlan => "/section-2-requirements/meeting-plan",
            ScreenId::MarriageBroker => "/section-2-requirements/marriage-broker",
            ScreenId::IntentToMarry => "/section-2-requirements/intent-to-marry",
            ScreenId::MeetingDescription => "/section-2-requirements/meeting-description",
            ScreenId::SponsorBasicInfo => "/section-3-sponsor-profile/basic-info",
            ScreenId::SponsorContactInfo => "/section-3-sponsor-profile/contact-info",
            ScreenId::SponsorCriminalHistory => "/section-4-legal-sponsor/criminal-history",
            ScreenId::SponsorSecurityMatters => "/section-4-legal-sponsor/security-matters",
            ScreenId::SponsorLegalSummary => "/section-4-legal-sponsor/legal-summary",
            ScreenId::BeneficiaryBasicInfo => "/section-5-beneficiary-profile/basic-info",
            ScreenId::BeneficiaryContactInfo => "/section-5-beneficiary-profile/contact-info",
            ScreenId::BeneficiaryCriminalHistory => "/section-6-legal-beneficiary/criminal-history",
            ScreenId::BeneficiaryImmigrationIssues => {
                "/section-6-legal-beneficiary/immigration-issues"
            }
            ScreenId::BeneficiaryHealthConcerns => "/section-6-legal-beneficiary/health-concerns",
            ScreenId::BeneficiarySecurityMatters => "/section-6-legal-beneficiary/security-matters",
            ScreenId::UsPresence => "/section-6-legal-beneficiary/us-presence",
            ScreenId::BeneficiaryLegalSummary => "/section-6-legal-beneficiary/legal-summary",
            ScreenId::PreviousPetitions => "/section-7-household/previous-petitions",
            ScreenId::PetitionDetails => "/section-7-household/petition-details",
            ScreenId::Children => "/section-7-household/children",
            ScreenId::ChildrenDetails => "/section-7-household/children-details",
            ScreenId::Dependents => "/section-7-household/dependents",
            ScreenId::SupportObligations => "/section-7-household/support-obligations",
            ScreenId::HouseholdMembers => "/section-7-household/household-members",
            ScreenId::IncomeOverview => "/section-8-income/income-overview",
            ScreenId::IncomeProof => "/section-8-income/income-proof",
            ScreenId::Documents => "/section-8-income/documents",
            ScreenId::Review => "/section-8-income/review",
        }
    }

    /// The section this screen belongs to.
    pub fn section(&self) -> Section {
        match self {
            ScreenId::Welcome | ScreenId::FilingBasics => Section::GettingStarted,
            ScreenId::LegallyFree
            | ScreenId::MetInPerson
            | ScreenId::MeetingPlan
            | ScreenId::MarriageBroker
            | ScreenId::IntentToMarry
            | ScreenId::MeetingDescription => Section::Requirements,
            ScreenId::SponsorBasicInfo | ScreenId::SponsorContactInfo => Section::SponsorProfile,
            ScreenId::SponsorCriminalHistory
            | ScreenId::SponsorSecurityMatters
            | ScreenId::SponsorLegalSummary => Section::LegalSponsor,
            ScreenId::BeneficiaryBasicInfo | ScreenId::BeneficiaryContactInfo => {
                Section::BeneficiaryProfile
            }
            ScreenId::BeneficiaryCriminalHistory
            | ScreenId::BeneficiaryImmigrationIssues
            | ScreenId::BeneficiaryHealthConcerns
            | ScreenId::BeneficiarySecurityMatters
            | ScreenId::UsPresence
            | ScreenId::BeneficiaryLegalSummary => Section::LegalBeneficiary,
            ScreenId::PreviousPetitions
            | ScreenId::PetitionDetails
            | ScreenId::Children
            | ScreenId::ChildrenDetails
            | ScreenId::Dependents
            | ScreenId::SupportObligations
            | ScreenId::HouseholdMembers => Section::Household,
            ScreenId::IncomeOverview
            | ScreenId::IncomeProof
            | ScreenId::Documents
            | ScreenId::Review => Section::Income,
        }
    }

    /// Human-readable screen title.
    pub fn title(&self) -> &'static str {
        match self {
            ScreenId::Welcome => "Welcome",
            ScreenId::FilingBasics => "Filing Basics",
            ScreenId::LegallyFree => "Legally Free to Marry",
            ScreenId::MetInPerson => "Meeting in Person",
            ScreenId::MeetingPlan => "Plan to Meet",
            ScreenId::MarriageBroker => "International Marriage Broker",
            ScreenId::IntentToMarry => "Intent to Marry",
            ScreenId::MeetingDescription => "How You Met",
            ScreenId::SponsorBasicInfo => "Sponsor Basics",
            ScreenId::SponsorContactInfo => "Sponsor Contact",
            ScreenId::SponsorCriminalHistory => "Criminal History",
            ScreenId::SponsorSecurityMatters => "Security Matters",
            ScreenId::SponsorLegalSummary => "Legal Summary",
            ScreenId::BeneficiaryBasicInfo => "Beneficiary Basics",
            ScreenId::BeneficiaryContactInfo => "Beneficiary Contact",
            ScreenId::BeneficiaryCriminalHistory => "Criminal History",
            ScreenId::BeneficiaryImmigrationIssues => "Immigration History",
            ScreenId::BeneficiaryHealthConcerns => "Health",
            ScreenId::BeneficiarySecurityMatters => "Security Matters",
            ScreenId::UsPresence => "Current U.S. Presence",
            ScreenId::BeneficiaryLegalSummary => "Legal Summary",
            ScreenId::PreviousPetitions => "Previous Petitions",
            ScreenId::PetitionDetails => "Petition Details",
            ScreenId::Children => "Children",
            ScreenId::ChildrenDetails => "Children Details",
            ScreenId::Dependents => "Other Dependents",
            ScreenId::SupportObligations => "Support Obligations",
            ScreenId::HouseholdMembers => "Household Members",
            ScreenId::IncomeOverview => "Income Overview",
            ScreenId::IncomeProof => "Income Proof",
            ScreenId::Documents => "Documents",
            ScreenId::Review => "Review",
        }
    }

    /// Whether the screen should appear at all, given current answers.
    ///
    /// Hidden screens are skipped in both directions; they are still in
    /// the flow arrays and reappear the moment the controlling answer
    /// flips back.
    pub fn precondition(&self, store: &AnswerStore) -> bool {
        match self {
            ScreenId::MeetingPlan => store.requirements.met_in_person == Some(YesNo::No),
            ScreenId::PetitionDetails => {
                store.household.has_prior_petitions == Some(YesNo::Yes)
            }
            ScreenId::ChildrenDetails => store.household.has_children == Some(YesNo::Yes),
            _ => true,
        }
    }

    /// Whether the screen's required answers are present.
    ///
    /// Forward navigation refuses to leave an incomplete screen;
    /// backward navigation does not care.
    pub fn is_answered(&self, store: &AnswerStore) -> bool {
        match self {
            // Informational and summary screens require nothing.
            ScreenId::Welcome
            | ScreenId::SponsorLegalSummary
            | ScreenId::BeneficiaryLegalSummary
            | ScreenId::HouseholdMembers
            | ScreenId::IncomeProof
            | ScreenId::Documents
            | ScreenId::Review => true,

            ScreenId::FilingBasics => {
                store.getting_started.sponsor_name.is_some()
                    && store.getting_started.beneficiary_name.is_some()
            }
            ScreenId::LegallyFree => store.requirements.legally_free_to_marry.is_some(),
            ScreenId::MetInPerson => store.requirements.met_in_person.is_some(),
            ScreenId::MeetingPlan => store.requirements.plans_to_meet.is_some(),
            ScreenId::MarriageBroker => store.requirements.met_through_broker.is_some(),
            ScreenId::IntentToMarry => {
                store.requirements.intends_marriage_within_window.is_some()
            }
            ScreenId::MeetingDescription => store.requirements.meeting_description.is_some(),

            ScreenId::SponsorBasicInfo => store.sponsor_profile.birth_date.is_some(),
            ScreenId::SponsorContactInfo => store.sponsor_profile.mailing_address.is_some(),
            ScreenId::SponsorCriminalHistory => store.sponsor_legal.criminal_history.is_some(),
            ScreenId::SponsorSecurityMatters => store.sponsor_legal.security_concerns.is_some(),

            ScreenId::BeneficiaryBasicInfo => {
                store.beneficiary_profile.birth_date.is_some()
                    && store.beneficiary_profile.citizenship_country.is_some()
            }
            ScreenId::BeneficiaryContactInfo => {
                store.beneficiary_profile.residence_address.is_some()
            }
            ScreenId::BeneficiaryCriminalHistory => {
                store.beneficiary_legal.criminal_history.is_some()
            }
            ScreenId::BeneficiaryImmigrationIssues => {
                store.beneficiary_legal.immigration_violations.is_some()
            }
            ScreenId::BeneficiaryHealthConcerns => {
                store.beneficiary_legal.health_concerns.is_some()
            }
            ScreenId::BeneficiarySecurityMatters => {
                store.beneficiary_legal.security_concerns.is_some()
            }
            ScreenId::UsPresence => store.beneficiary_legal.currently_in_us.is_some(),

            ScreenId::PreviousPetitions => store.household.has_prior_petitions.is_some(),
            // Rows must exist and each needs a filing date before the
            // cooldown rule can be trusted.
            ScreenId::PetitionDetails => {
                !store.household.prior_petitions.is_empty()
                    && store
                        .household
                        .prior_petitions
                        .iter()
                        .all(|p| p.filed_on.is_some())
            }
            ScreenId::Children => store.household.has_children.is_some(),
            ScreenId::ChildrenDetails => !store.household.children.is_empty(),
            ScreenId::Dependents => match store.household.has_other_dependents {
                Some(YesNo::Yes) => !store.household.dependents.is_empty(),
                Some(YesNo::No) => true,
                None => false,
            },
            ScreenId::SupportObligations => match store.household.has_support_obligations {
                Some(YesNo::Yes) => !store.household.support_obligations.is_empty(),
                Some(YesNo::No) => true,
                None => false,
            },

            ScreenId::IncomeOverview => store.income.current_annual_income.is_some(),
        }
    }

    /// The rules whose triggering questions live on this screen.
    ///
    /// Used to raise the standalone disqualification view when an answer
    /// on this screen flips one of its own rules on.
    pub fn hosted_rules(&self) -> &'static [RuleId] {
        match self {
            ScreenId::LegallyFree => &[RuleId::LegallyFree],
            // Both screens feed the meeting rule; the flip can happen on
            // either one when the other answer is already recorded.
            ScreenId::MetInPerson | ScreenId::MeetingPlan => &[RuleId::MeetingWindow],
            ScreenId::MarriageBroker => &[RuleId::MarriageBroker],
            ScreenId::IntentToMarry => &[RuleId::IntentToMarry],
            ScreenId::SponsorCriminalHistory => &[RuleId::SponsorCriminal],
            ScreenId::SponsorSecurityMatters => &[RuleId::SponsorSecurity],
            ScreenId::BeneficiaryCriminalHistory => &[RuleId::BeneficiaryCriminal],
            ScreenId::BeneficiaryImmigrationIssues => &[RuleId::BeneficiaryImmigration],
            ScreenId::BeneficiaryHealthConcerns => &[RuleId::BeneficiaryHealth],
            ScreenId::BeneficiarySecurityMatters => &[RuleId::BeneficiarySecurity],
            ScreenId::UsPresence => &[RuleId::UsPresence],
            ScreenId::PreviousPetitions | ScreenId::PetitionDetails => &[
                RuleId::PetitionLimit,
                RuleId::PetitionCooldown,
                RuleId::PriorBeneficiarySpouse,
            ],
            _ => &[],
        }
    }

    /// Whether this screen is its section's exit gate.
    ///
    /// Leaving forward from an exit gate consults the section's
    /// aggregate flags; every other screen advances on completeness
    /// alone.
    pub fn is_exit_gate(&self) -> bool {
        matches!(
            self,
            ScreenId::MeetingDescription
                | ScreenId::SponsorLegalSummary
                | ScreenId::BeneficiaryLegalSummary
                | ScreenId::HouseholdMembers
        )
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::answers::Answer;

    #[test]
    fn paths_are_unique() {
        // The lazy index would lose entries if two screens shared a path.
        assert_eq!(PATH_INDEX.len(), ALL_SCREENS.len());
    }

    #[test]
    fn from_path_round_trips_every_screen() {
        for screen in ScreenId::all() {
            assert_eq!(ScreenId::from_path(screen.path()), Some(*screen));
        }
        assert_eq!(ScreenId::from_path("/section-9-unknown/nope"), None);
    }

    #[test]
    fn from_path_resolves_pinned_routes() {
        assert_eq!(
            ScreenId::from_path("/section-2-requirements/legally-free"),
            Some(ScreenId::LegallyFree)
        );
        assert_eq!(
            ScreenId::from_path("/section-6-legal-beneficiary/criminal-history"),
            Some(ScreenId::BeneficiaryCriminalHistory)
        );
    }

    #[test]
    fn paths_carry_their_section_prefix() {
        for screen in ScreenId::all() {
            assert!(
                screen.path().starts_with(screen.section().path_prefix()),
                "{} not under {}",
                screen.path(),
                screen.section().path_prefix()
            );
        }
    }

    #[test]
    fn hosted_rules_belong_to_the_screen_section() {
        for screen in ScreenId::all() {
            for rule in screen.hosted_rules() {
                assert_eq!(rule.section(), screen.section());
            }
        }
    }

    #[test]
    fn every_rule_is_hosted_somewhere() {
        for rule in RuleId::all() {
            let hosted = ScreenId::all()
                .iter()
                .any(|screen| screen.hosted_rules().contains(rule));
            assert!(hosted, "{} has no hosting screen", rule);
        }
    }

    #[test]
    fn exit_gates_exist_only_in_rule_bearing_sections() {
        for screen in ScreenId::all() {
            if screen.is_exit_gate() {
                assert!(!screen.section().rules().is_empty());
            }
        }
        // And each rule-bearing section has exactly one gate.
        for section in Section::all() {
            let gates = ScreenId::all()
                .iter()
                .filter(|s| s.section() == *section && s.is_exit_gate())
                .count();
            if section.rules().is_empty() {
                assert_eq!(gates, 0, "{} should have no gate", section);
            } else {
                assert_eq!(gates, 1, "{} should have one gate", section);
            }
        }
    }

    #[test]
    fn meeting_plan_appears_only_after_answering_no() {
        let mut store = AnswerStore::new();
        assert!(!ScreenId::MeetingPlan.precondition(&store));

        store.apply(Answer::MetInPerson(YesNo::No)).unwrap();
        assert!(ScreenId::MeetingPlan.precondition(&store));

        store.apply(Answer::MetInPerson(YesNo::Yes)).unwrap();
        assert!(!ScreenId::MeetingPlan.precondition(&store));
    }

    #[test]
    fn petition_details_requires_complete_rows() {
        let mut store = AnswerStore::new();
        store.apply(Answer::HasPriorPetitions(YesNo::Yes)).unwrap();
        assert!(!ScreenId::PetitionDetails.is_answered(&store));

        store
            .apply(Answer::AddPriorPetition(crate::domain::answers::PriorPetition {
                beneficiary_name: "A. Prior".to_string(),
                filed_on: None,
                approved: None,
                now_current_spouse: false,
            }))
            .unwrap();
        // A row without a filing date keeps the screen incomplete.
        assert!(!ScreenId::PetitionDetails.is_answered(&store));

        store
            .apply(Answer::UpdatePriorPetition {
                index: 0,
                petition: crate::domain::answers::PriorPetition {
                    beneficiary_name: "A. Prior".to_string(),
                    filed_on: chrono::NaiveDate::from_ymd_opt(2020, 3, 1),
                    approved: None,
                    now_current_spouse: false,
                },
            })
            .unwrap();
        assert!(ScreenId::PetitionDetails.is_answered(&store));
    }

    #[test]
    fn dependents_screen_accepts_no_without_rows() {
        let mut store = AnswerStore::new();
        assert!(!ScreenId::Dependents.is_answered(&store));

        store.apply(Answer::HasOtherDependents(YesNo::No)).unwrap();
        assert!(ScreenId::Dependents.is_answered(&store));

        store.apply(Answer::HasOtherDependents(YesNo::Yes)).unwrap();
        assert!(!ScreenId::Dependents.is_answered(&store));
    }
}
