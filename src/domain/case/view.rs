//! The standalone disqualification view.

use serde::{Deserialize, Serialize};

use crate::domain::screening::{RuleId, Section};

/// A full-screen disqualification explanation awaiting acknowledgement.
///
/// Raised either by a single rule flipping on its own screen or by a
/// section exit gate aggregating the whole section. The view is pure
/// presentation state: acknowledging it, or navigating outside the
/// section that raised it, hides it without touching any answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DqView {
    /// One rule tripped by the answer just given.
    Rule(RuleId),
    /// A section exit was blocked; one message per raised rule.
    Section {
        section: Section,
        messages: Vec<String>,
    },
}

impl DqView {
    /// The section this view was raised for.
    pub fn section(&self) -> Section {
        match self {
            DqView::Rule(rule) => rule.section(),
            DqView::Section { section, .. } => *section,
        }
    }

    /// The explanation fragments to render.
    pub fn messages(&self) -> Vec<String> {
        match self {
            DqView::Rule(rule) => vec![rule.message().to_string()],
            DqView::Section { messages, .. } => messages.clone(),
        }
    }
}
