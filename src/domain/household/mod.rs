//! Household module - Derived household size and minimum income.

mod calculator;

pub use calculator::{HouseholdBreakdown, HouseholdCalculator, HouseholdSnapshot};
