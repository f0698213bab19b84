//! Stored rule outcomes and recomputation deltas.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::RuleId;

/// The stored boolean outcome of every catalog rule.
///
/// Backed by an ordered map keyed by rule, so JSON snapshots list the
/// flag keys in catalog order. A key that has never been written reads
/// as false.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlagSet {
    flags: BTreeMap<RuleId, bool>,
}

impl FlagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a flag; unset flags read as false.
    pub fn is_raised(&self, rule: RuleId) -> bool {
        self.flags.get(&rule).copied().unwrap_or(false)
    }

    /// Writes a flag, returning the previous effective value.
    pub fn set(&mut self, rule: RuleId, raised: bool) -> bool {
        self.flags.insert(rule, raised).unwrap_or(false)
    }

    /// Iterates currently raised rules in catalog order.
    pub fn raised(&self) -> impl Iterator<Item = RuleId> + '_ {
        self.flags
            .iter()
            .filter(|(_, raised)| **raised)
            .map(|(rule, _)| *rule)
    }

    /// True if any rule is currently raised.
    pub fn any_raised(&self) -> bool {
        self.flags.values().any(|raised| *raised)
    }
}

/// Which flags changed during one recomputation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagDelta {
    /// Rules that flipped from false to true.
    pub raised: Vec<RuleId>,
    /// Rules that flipped from true to false.
    pub cleared: Vec<RuleId>,
}

impl FlagDelta {
    /// True when the pass changed nothing.
    pub fn is_empty(&self) -> bool {
        self.raised.is_empty() && self.cleared.is_empty()
    }
}
