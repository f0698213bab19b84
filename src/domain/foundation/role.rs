//! Screening roles - which party the questionnaire is interviewing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The party a screening flow interviews.
///
/// The sponsor is the U.S. petitioner; the beneficiary is the foreign
/// fiance(e). Each role walks a different subset of sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Sponsor,
    Beneficiary,
}

impl Role {
    /// Returns all roles.
    pub fn all() -> &'static [Role; 2] {
        &[Role::Sponsor, Role::Beneficiary]
    }

    /// Returns a human-readable name for display.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Sponsor => "Sponsor",
            Role::Beneficiary => "Beneficiary",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
