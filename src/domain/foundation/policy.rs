//! Screening policy - the tunable figures behind eligibility rules.
//!
//! Poverty guideline tables and petition limits change year to year, so
//! they are carried as data rather than hard-coded into the rule
//! predicates. A case pins the policy it was started with; editing
//! configuration never rewrites in-flight cases.

use serde::{Deserialize, Serialize};

use super::{Money, ValidationError};

/// Income and poverty guideline figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomePolicy {
    /// Minimum required income by household size, index 0 = household of 1.
    #[serde(default = "default_poverty_guidelines")]
    pub poverty_guidelines: Vec<Money>,

    /// Added per household member beyond the table.
    #[serde(default = "default_additional_member_increment")]
    pub additional_member_increment: Money,

    /// Assets must cover the income shortfall times this factor.
    #[serde(default = "default_asset_gap_multiplier")]
    pub asset_gap_multiplier: i64,

    /// The most recent tax year documents can be drawn from.
    #[serde(default = "default_most_recent_tax_year")]
    pub most_recent_tax_year: i32,
}

// 2025 HHS poverty guidelines for the 48 contiguous states, at 100%.
fn default_poverty_guidelines() -> Vec<Money> {
    [15650, 21150, 26650, 32150, 37650, 43150, 48650, 54150]
        .into_iter()
        .map(Money::from_dollars)
        .collect()
}

fn default_additional_member_increment() -> Money {
    Money::from_dollars(5500)
}

fn default_asset_gap_multiplier() -> i64 {
    3
}

fn default_most_recent_tax_year() -> i32 {
    2024
}

impl Default for IncomePolicy {
    fn default() -> Self {
        Self {
            poverty_guidelines: default_poverty_guidelines(),
            additional_member_increment: default_additional_member_increment(),
            asset_gap_multiplier: default_asset_gap_multiplier(),
            most_recent_tax_year: default_most_recent_tax_year(),
        }
    }
}

/// Limits on the sponsor's prior K-1 filing history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetitionPolicy {
    /// Prior petitions beyond this count require a waiver.
    #[serde(default = "default_max_prior_petitions")]
    pub max_prior_petitions: u32,

    /// A petition filed within this many years of the reference date
    /// requires a waiver.
    #[serde(default = "default_cooldown_years")]
    pub cooldown_years: u32,
}

fn default_max_prior_petitions() -> u32 {
    2
}

fn default_cooldown_years() -> u32 {
    2
}

impl Default for PetitionPolicy {
    fn default() -> Self {
        Self {
            max_prior_petitions: default_max_prior_petitions(),
            cooldown_years: default_cooldown_years(),
        }
    }
}

/// Relationship timing requirements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationshipPolicy {
    /// The couple must have met in person within this many years of the
    /// reference date; an older recorded meeting trips the meeting rule.
    #[serde(default = "default_meeting_window_years")]
    pub meeting_window_years: u32,
}

fn default_meeting_window_years() -> u32 {
    2
}

impl Default for RelationshipPolicy {
    fn default() -> Self {
        Self {
            meeting_window_years: default_meeting_window_years(),
        }
    }
}

/// Root policy object consumed by rule evaluation and the calculators.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScreeningPolicy {
    #[serde(default)]
    pub income: IncomePolicy,

    #[serde(default)]
    pub petitions: PetitionPolicy,

    #[serde(default)]
    pub relationship: RelationshipPolicy,
}

impl ScreeningPolicy {
    /// Validates the policy figures are internally consistent.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let table = &self.income.poverty_guidelines;
        if table.len() != 8 {
            return Err(ValidationError::out_of_range(
                "income.poverty_guidelines",
                8,
                8,
                table.len() as i64,
            ));
        }
        for pair in table.windows(2) {
            if pair[1] <= pair[0] {
                return Err(ValidationError::invalid_format(
                    "income.poverty_guidelines",
                    "guideline figures must strictly increase with household size",
                ));
            }
        }
        if table[0] <= Money::ZERO {
            return Err(ValidationError::out_of_range(
                "income.poverty_guidelines",
                1,
                i64::MAX,
                table[0].dollars(),
            ));
        }
        if self.income.additional_member_increment <= Money::ZERO {
            return Err(ValidationError::out_of_range(
                "income.additional_member_increment",
                1,
                i64::MAX,
                self.income.additional_member_increment.dollars(),
            ));
        }
        if self.income.asset_gap_multiplier < 1 {
            return Err(ValidationError::out_of_range(
                "income.asset_gap_multiplier",
                1,
                i64::MAX,
                self.income.asset_gap_multiplier,
            ));
        }
        if self.relationship.meeting_window_years == 0 {
            return Err(ValidationError::out_of_range(
                "relationship.meeting_window_years",
                1,
                i64::MAX,
                0,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_passes_validation() {
        assert!(ScreeningPolicy::default().validate().is_ok());
    }

    #[test]
    fn default_guideline_table_matches_published_figures() {
        let policy = ScreeningPolicy::default();
        let table = &policy.income.poverty_guidelines;
        assert_eq!(table[0], Money::from_dollars(15650));
        assert_eq!(table[3], Money::from_dollars(32150));
        assert_eq!(table[7], Money::from_dollars(54150));
        assert_eq!(policy.income.additional_member_increment, Money::from_dollars(5500));
    }

    #[test]
    fn validate_rejects_short_guideline_table() {
        let mut policy = ScreeningPolicy::default();
        policy.income.poverty_guidelines.truncate(5);
        assert!(policy.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_increasing_guidelines() {
        let mut policy = ScreeningPolicy::default();
        policy.income.poverty_guidelines[4] = policy.income.poverty_guidelines[3];
        assert!(policy.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_asset_multiplier() {
        let mut policy = ScreeningPolicy::default();
        policy.income.asset_gap_multiplier = 0;
        assert!(policy.validate().is_err());
    }

    #[test]
    fn validate_rejects_a_zero_meeting_window() {
        let mut policy = ScreeningPolicy::default();
        policy.relationship.meeting_window_years = 0;
        assert!(policy.validate().is_err());
    }

    #[test]
    fn policy_deserializes_with_partial_overrides() {
        let json = r#"{"petitions": {"cooldown_years": 3}}"#;
        let policy: ScreeningPolicy = serde_json::from_str(json).unwrap();
        assert_eq!(policy.petitions.cooldown_years, 3);
        assert_eq!(policy.petitions.max_prior_petitions, 2);
        assert_eq!(policy.income.poverty_guidelines.len(), 8);
    }
}
