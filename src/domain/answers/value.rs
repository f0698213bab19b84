//! Small enums used as answer values.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::IncomePolicy;

/// A yes/no radio answer.
///
/// Kept as an explicit enum rather than `bool` so an unanswered question
/// (`None`) is distinguishable from an answered "no".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn is_yes(&self) -> bool {
        matches!(self, YesNo::Yes)
    }

    pub fn is_no(&self) -> bool {
        matches!(self, YesNo::No)
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YesNo::Yes => write!(f, "yes"),
            YesNo::No => write!(f, "no"),
        }
    }
}

/// Which tax year the income questionnaire interviews about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxYearMode {
    /// The most recent tax year with published forms.
    MostRecent,
    /// The year before, for filers whose latest return is not yet due.
    Prior,
}

impl TaxYearMode {
    /// Resolves the mode to a concrete calendar year.
    pub fn resolve_year(&self, policy: &IncomePolicy) -> i32 {
        match self {
            TaxYearMode::MostRecent => policy.most_recent_tax_year,
            TaxYearMode::Prior => policy.most_recent_tax_year - 1,
        }
    }
}

/// How the sponsor earned the income on their return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentKind {
    /// Wages reported on W-2 forms only.
    W2Employee,
    /// Self-employment income only.
    SelfEmployed,
    /// Both wage and self-employment income.
    Mixed,
}

impl fmt::Display for EmploymentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EmploymentKind::W2Employee => "W-2 employee",
            EmploymentKind::SelfEmployed => "self-employed",
            EmploymentKind::Mixed => "mixed employment",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_no_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&YesNo::Yes).unwrap(), "\"yes\"");
        assert_eq!(serde_json::to_string(&YesNo::No).unwrap(), "\"no\"");
    }

    #[test]
    fn yes_no_predicates_work() {
        assert!(YesNo::Yes.is_yes());
        assert!(!YesNo::Yes.is_no());
        assert!(YesNo::No.is_no());
    }

    #[test]
    fn tax_year_mode_resolves_against_policy() {
        let policy = IncomePolicy::default();
        assert_eq!(TaxYearMode::MostRecent.resolve_year(&policy), 2024);
        assert_eq!(TaxYearMode::Prior.resolve_year(&policy), 2023);
    }

    #[test]
    fn employment_kind_round_trips_through_json() {
        let json = serde_json::to_string(&EmploymentKind::SelfEmployed).unwrap();
        assert_eq!(json, "\"self_employed\"");
        let back: EmploymentKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, EmploymentKind::SelfEmployed);
    }
}
