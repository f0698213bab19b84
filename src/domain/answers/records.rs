//! Repeating-row records collected on the household screens.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// A child of the sponsor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Child {
    pub given_name: String,
    pub birth_date: Option<NaiveDate>,
    /// Whether the child will immigrate with the beneficiary.
    pub immigrating: bool,
}

/// A dependent claimed on the sponsor's tax return who is neither the
/// beneficiary nor one of the listed children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependent {
    pub name: String,
    pub relationship: String,
}

/// A prior fiance(e) or spousal petition the sponsor has filed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorPetition {
    pub beneficiary_name: String,
    /// Filing date; partial entries leave this unset and block the screen.
    pub filed_on: Option<NaiveDate>,
    pub approved: Option<super::YesNo>,
    /// True when the prior beneficiary is now the sponsor's current spouse.
    pub now_current_spouse: bool,
}

impl PriorPetition {
    /// Returns true when the petition was filed inside the cooldown window
    /// ending at `reference`.
    ///
    /// A petition filed exactly `years` before the reference date is
    /// outside the window. A petition with no filing date recorded
    /// cannot match; the hosting screen refuses to advance until the
    /// date is supplied.
    pub fn filed_within_years(&self, reference: NaiveDate, years: u32) -> bool {
        match self.filed_on {
            Some(filed) => {
                let cutoff = reference
                    .checked_sub_months(Months::new(years * 12))
                    .unwrap_or(NaiveDate::MIN);
                filed > cutoff
            }
            None => false,
        }
    }
}

/// Why a past support obligation no longer binds the sponsor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObligationEnd {
    /// The sponsored immigrant became a U.S. citizen.
    BecameCitizen,
    /// The sponsored immigrant was credited with 40 quarters of work.
    CreditedFortyQuarters,
    /// The sponsored immigrant died.
    Deceased,
    /// The sponsored immigrant left the U.S. and abandoned residency.
    DepartedAndLostStatus,
    /// A later affidavit from another sponsor superseded this one.
    Superseded,
}

/// A support obligation from a previously signed affidavit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportObligation {
    pub person_name: String,
    pub agreed_on: Option<NaiveDate>,
    /// `None` while the obligation still binds the sponsor.
    pub ended: Option<ObligationEnd>,
}

impl SupportObligation {
    /// Returns true while the obligation still counts toward household size.
    pub fn is_binding(&self) -> bool {
        self.ended.is_none()
    }
}

/// Any other financial obligation the sponsor reports supporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherObligation {
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn petition_inside_cooldown_window_matches() {
        let petition = PriorPetition {
            beneficiary_name: "A. Prior".to_string(),
            filed_on: Some(date(2025, 3, 1)),
            approved: Some(super::super::YesNo::Yes),
            now_current_spouse: false,
        };
        assert!(petition.filed_within_years(date(2026, 6, 15), 2));
    }

    #[test]
    fn petition_filed_exactly_at_window_edge_is_outside() {
        let petition = PriorPetition {
            beneficiary_name: "A. Prior".to_string(),
            filed_on: Some(date(2024, 6, 15)),
            approved: None,
            now_current_spouse: false,
        };
        // Exactly two years before the reference date.
        assert!(!petition.filed_within_years(date(2026, 6, 15), 2));
        // One day later falls inside.
        let petition = PriorPetition {
            filed_on: Some(date(2024, 6, 16)),
            ..petition
        };
        assert!(petition.filed_within_years(date(2026, 6, 15), 2));
    }

    #[test]
    fn petition_without_filing_date_never_matches() {
        let petition = PriorPetition {
            beneficiary_name: "A. Prior".to_string(),
            filed_on: None,
            approved: None,
            now_current_spouse: false,
        };
        assert!(!petition.filed_within_years(date(2026, 6, 15), 2));
    }

    #[test]
    fn obligation_binds_until_an_end_reason_is_recorded() {
        let mut obligation = SupportObligation {
            person_name: "B. Sponsored".to_string(),
            agreed_on: Some(date(2020, 1, 10)),
            ended: None,
        };
        assert!(obligation.is_binding());

        obligation.ended = Some(ObligationEnd::BecameCitizen);
        assert!(!obligation.is_binding());
    }

    #[test]
    fn obligation_end_serializes_snake_case() {
        let json = serde_json::to_string(&ObligationEnd::CreditedFortyQuarters).unwrap();
        assert_eq!(json, "\"credited_forty_quarters\"");
    }
}
