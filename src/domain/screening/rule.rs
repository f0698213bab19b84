//! The disqualification rule catalog.
//!
//! Every automatic disqualification the wizard can raise is declared
//! here, one variant per rule. Predicates live in the evaluator; this
//! enum carries the identity: the stored flag key, the owning section,
//! and the message fragment shown when a section gate blocks.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Section;

/// Identity of a single disqualification rule.
///
/// Serializes as the stored flag key so snapshots read as the familiar
/// `section{N}_{topic}_DQ` booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RuleId {
    /// A party is not legally free to marry.
    #[serde(rename = "section2_legallyFree_DQ")]
    LegallyFree,
    /// No in-person meeting within the window and no plan to meet.
    #[serde(rename = "section2_meeting_DQ")]
    MeetingWindow,
    /// The couple met through an international marriage broker.
    #[serde(rename = "section2_broker_DQ")]
    MarriageBroker,
    /// No intent to marry within the required window after entry.
    #[serde(rename = "section2_intent_DQ")]
    IntentToMarry,
    /// Sponsor reported disqualifying criminal history.
    #[serde(rename = "section4_criminal_DQ")]
    SponsorCriminal,
    /// Sponsor reported security-related matters.
    #[serde(rename = "section4_security_DQ")]
    SponsorSecurity,
    /// Beneficiary reported criminal history.
    #[serde(rename = "section6_criminal_DQ")]
    BeneficiaryCriminal,
    /// Beneficiary reported prior immigration violations.
    #[serde(rename = "section6_immigration_DQ")]
    BeneficiaryImmigration,
    /// Beneficiary reported inadmissible health conditions.
    #[serde(rename = "section6_health_DQ")]
    BeneficiaryHealth,
    /// Beneficiary reported security-related matters.
    #[serde(rename = "section6_security_DQ")]
    BeneficiarySecurity,
    /// Beneficiary is currently inside the United States.
    #[serde(rename = "section6_usPresence_DQ")]
    UsPresence,
    /// More prior fiance(e) petitions than permitted without a waiver.
    #[serde(rename = "section7_petitionLimit_DQ")]
    PetitionLimit,
    /// A prior petition falls inside the cooling-off window.
    #[serde(rename = "section7_cooldown_DQ")]
    PetitionCooldown,
    /// A prior petition beneficiary is now the sponsor's spouse.
    #[serde(rename = "section7_priorSpouse_DQ")]
    PriorBeneficiarySpouse,
}

impl RuleId {
    /// All rules, in stable catalog order.
    pub const CATALOG: [RuleId; 14] = [
        RuleId::LegallyFree,
        RuleId::MeetingWindow,
        RuleId::MarriageBroker,
        RuleId::IntentToMarry,
        RuleId::SponsorCriminal,
        RuleId::SponsorSecurity,
        RuleId::BeneficiaryCriminal,
        RuleId::BeneficiaryImmigration,
        RuleId::BeneficiaryHealth,
        RuleId::BeneficiarySecurity,
        RuleId::UsPresence,
        RuleId::PetitionLimit,
        RuleId::PetitionCooldown,
        RuleId::PriorBeneficiarySpouse,
    ];

    /// Returns all rules in catalog order.
    pub fn all() -> &'static [RuleId; 14] {
        &Self::CATALOG
    }

    /// The flag key this rule stores its boolean under.
    pub fn flag_key(&self) -> &'static str {
        match self {
            RuleId::LegallyFree => "section2_legallyFree_DQ",
            RuleId::MeetingWindow => "section2_meeting_DQ",
            RuleId::MarriageBroker => "section2_broker_DQ",
            RuleId::IntentToMarry => "section2_intent_DQ",
            RuleId::SponsorCriminal => "section4_criminal_DQ",
            RuleId::SponsorSecurity => "section4_security_DQ",
            RuleId::BeneficiaryCriminal => "section6_criminal_DQ",
            RuleId::BeneficiaryImmigration => "section6_immigration_DQ",
            RuleId::BeneficiaryHealth => "section6_health_DQ",
            RuleId::BeneficiarySecurity => "section6_security_DQ",
            RuleId::UsPresence => "section6_usPresence_DQ",
            RuleId::PetitionLimit => "section7_petitionLimit_DQ",
            RuleId::PetitionCooldown => "section7_cooldown_DQ",
            RuleId::PriorBeneficiarySpouse => "section7_priorSpouse_DQ",
        }
    }

    /// The section whose exit gate aggregates this rule.
    pub fn section(&self) -> Section {
        match self {
            RuleId::LegallyFree
            | RuleId::MeetingWindow
            | RuleId::MarriageBroker
            | RuleId::IntentToMarry => Section::Requirements,
            RuleId::SponsorCriminal | RuleId::SponsorSecurity => Section::LegalSponsor,
            RuleId::BeneficiaryCriminal
            | RuleId::BeneficiaryImmigration
            | RuleId::BeneficiaryHealth
            | RuleId::BeneficiarySecurity
            | RuleId::UsPresence => Section::LegalBeneficiary,
            RuleId::PetitionLimit | RuleId::PetitionCooldown | RuleId::PriorBeneficiarySpouse => {
                Section::Household
            }
        }
    }

    /// The message fragment shown when this rule contributes to a block.
    pub fn message(&self) -> &'static str {
        match self {
            RuleId::LegallyFree => "One or both parties are not legally free to marry.",
            RuleId::MeetingWindow => {
                "The couple has not met in person within the required window and has no plan to meet."
            }
            RuleId::MarriageBroker => {
                "The relationship was arranged through an international marriage broker."
            }
            RuleId::IntentToMarry => {
                "There is no intent to marry within the required window after entry."
            }
            RuleId::SponsorCriminal => {
                "The sponsor reported criminal history that requires review before filing."
            }
            RuleId::SponsorSecurity => {
                "The sponsor reported security-related matters that require review before filing."
            }
            RuleId::BeneficiaryCriminal => {
                "The beneficiary reported criminal history that may make them inadmissible."
            }
            RuleId::BeneficiaryImmigration => {
                "The beneficiary reported prior immigration violations that may make them inadmissible."
            }
            RuleId::BeneficiaryHealth => {
                "The beneficiary reported health conditions that may make them inadmissible."
            }
            RuleId::BeneficiarySecurity => {
                "The beneficiary reported security-related matters that may make them inadmissible."
            }
            RuleId::UsPresence => {
                "The beneficiary is currently in the United States; a K-1 visa is issued abroad through a consulate."
            }
            RuleId::PetitionLimit => {
                "The sponsor has filed more prior fiance(e) petitions than permitted without a waiver."
            }
            RuleId::PetitionCooldown => {
                "The sponsor filed a fiance(e) petition within the cooling-off window and needs a waiver."
            }
            RuleId::PriorBeneficiarySpouse => {
                "A prior petition beneficiary is recorded as the sponsor's current spouse."
            }
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.flag_key())
    }
}
