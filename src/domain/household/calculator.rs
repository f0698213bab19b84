//! Household size and minimum income derivation.
//!
//! Both figures are recomputed from the answer store on every read.
//! Nothing here is cached or stored, so the snapshot can never drift
//! from the answers it was derived from. The guideline table and the
//! per-member increment come from policy, never from code.

use serde::{Deserialize, Serialize};

use crate::domain::answers::{AnswerStore, YesNo};
use crate::domain::foundation::{Money, ScreeningPolicy};

/// Per-category counts behind a household size.
///
/// Rendered read-only next to the derived figures so the applicant can
/// see what each row contributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseholdBreakdown {
    /// Always 1; the sponsor counts themselves.
    pub sponsor: u32,
    /// Always 1; the beneficiary joins the household on approval.
    pub beneficiary: u32,
    /// Prior affidavit obligations that still legally bind the sponsor.
    pub active_support_obligations: u32,
    /// Court-ordered and other reported financial obligations.
    pub other_obligations: u32,
    /// Children the sponsor marked as immigrating with the beneficiary.
    pub qualifying_children: u32,
    /// Other dependents claimed on the sponsor's tax return.
    pub other_dependents: u32,
}

impl HouseholdBreakdown {
    /// Total of every category.
    pub fn total(&self) -> u32 {
        self.sponsor
            + self.beneficiary
            + self.active_support_obligations
            + self.other_obligations
            + self.qualifying_children
            + self.other_dependents
    }
}

/// The derived household figures shown on the household-members screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseholdSnapshot {
    pub household_size: u32,
    pub minimum_income: Money,
    pub breakdown: HouseholdBreakdown,
}

/// Derives household size and the minimum income requirement.
pub struct HouseholdCalculator;

impl HouseholdCalculator {
    /// Computes the snapshot for the current answers.
    ///
    /// Every list-derived count is gated on its controlling radio:
    /// child rows recorded under `has_children = yes` stop counting the
    /// moment the radio flips back, even though the rows are retained.
    pub fn compute(store: &AnswerStore, policy: &ScreeningPolicy) -> HouseholdSnapshot {
        let household = &store.household;

        let active_support_obligations =
            if household.has_support_obligations == Some(YesNo::Yes) {
                household
                    .support_obligations
                    .iter()
                    .filter(|o| o.is_binding())
                    .count() as u32
            } else {
                0
            };

        let qualifying_children = if household.has_children == Some(YesNo::Yes) {
            household.children.iter().filter(|c| c.immigrating).count() as u32
        } else {
            0
        };

        let other_dependents = if household.has_other_dependents == Some(YesNo::Yes) {
            household.dependents.len() as u32
        } else {
            0
        };

        let breakdown = HouseholdBreakdown {
            sponsor: 1,
            beneficiary: 1,
            active_support_obligations,
            other_obligations: household.other_obligations.len() as u32,
            qualifying_children,
            other_dependents,
        };

        let household_size = breakdown.total();

        HouseholdSnapshot {
            household_size,
            minimum_income: Self::minimum_income(household_size, policy),
            breakdown,
        }
    }

    /// Looks up the minimum required income for a household size.
    ///
    /// Sizes within the table read directly; beyond the table the last
    /// entry grows by the fixed per-member increment.
    pub fn minimum_income(household_size: u32, policy: &ScreeningPolicy) -> Money {
        let table = &policy.income.poverty_guidelines;
        let size = household_size.max(1) as usize;
        if size <= table.len() {
            table[size - 1]
        } else {
            let beyond = (size - table.len()) as i64;
            table[table.len() - 1] + policy.income.additional_member_increment.times(beyond)
        }
    }
}
