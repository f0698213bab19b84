//! Money value object for whole-dollar USD amounts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use super::ValidationError;

/// A whole-dollar USD amount.
///
/// Poverty guideline figures are published in whole dollars and applicant
/// incomes are collected the same way, so no cent precision is carried.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero dollars.
    pub const ZERO: Money = Money(0);

    /// Creates a money amount from whole dollars.
    pub fn from_dollars(dollars: i64) -> Self {
        Self(dollars)
    }

    /// Creates a money amount, rejecting negative values.
    ///
    /// Use for user-supplied figures (incomes, asset values) where a
    /// negative amount indicates bad input.
    pub fn try_non_negative(dollars: i64) -> Result<Self, ValidationError> {
        if dollars < 0 {
            return Err(ValidationError::out_of_range("amount", 0, i64::MAX, dollars));
        }
        Ok(Self(dollars))
    }

    /// Returns the amount in whole dollars.
    pub fn dollars(&self) -> i64 {
        self.0
    }

    /// Returns true if the amount is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Subtracts, flooring at zero.
    ///
    /// Shortfall arithmetic never goes negative: an income at or above
    /// the requirement has a zero gap.
    pub fn saturating_sub(self, other: Money) -> Money {
        Money((self.0 - other.0).max(0))
    }

    /// Multiplies the amount by a whole-number factor.
    pub fn times(self, factor: i64) -> Money {
        Money(self.0 * factor)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        if self.0 < 0 {
            write!(f, "-${}", grouped)
        } else {
            write!(f, "${}", grouped)
        }
    }
}
