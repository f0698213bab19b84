//! Section exit gates.
//!
//! A gate inspects the stored flags for exactly one section and decides
//! whether forward navigation out of that section is allowed. It never
//! re-runs predicates; the evaluator keeps the flags current, the gate
//! only reads them.

use crate::domain::answers::AnswerStore;

use super::Section;

/// The outcome of asking a section gate whether to block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateDecision {
    pub blocked: bool,
    /// One pre-built fragment per raised rule, in catalog order.
    pub messages: Vec<String>,
}

impl GateDecision {
    /// Joins the fragments into one explanation for a full-screen view.
    pub fn narrative(&self) -> String {
        self.messages.join("\n\n")
    }
}

/// Aggregate disqualification gate for section exits.
pub struct SectionGate;

impl SectionGate {
    /// Decides whether leaving `section` forward should be blocked.
    ///
    /// Blocked is true exactly when at least one of the section's
    /// registered rules is raised, and the messages cover every raised
    /// rule. Flags belonging to other sections never contribute.
    pub fn should_block(section: Section, store: &AnswerStore) -> GateDecision {
        let messages: Vec<String> = section
            .rules()
            .iter()
            .filter(|rule| store.flags.is_raised(**rule))
            .map(|rule| rule.message().to_string())
            .collect();

        GateDecision {
            blocked: !messages.is_empty(),
            messages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::screening::RuleId;

    #[test]
    fn gate_passes_when_no_flags_are_raised() {
        let store = AnswerStore::new();
        let decision = SectionGate::should_block(Section::Requirements, &store);
        assert!(!decision.blocked);
        assert!(decision.messages.is_empty());
    }

    #[test]
    fn gate_blocks_with_one_message_per_raised_rule() {
        let mut store = AnswerStore::new();
        store.flags.set(RuleId::LegallyFree, true);
        store.flags.set(RuleId::MarriageBroker, true);

        let decision = SectionGate::should_block(Section::Requirements, &store);
        assert!(decision.blocked);
        assert_eq!(
            decision.messages,
            vec![
                RuleId::LegallyFree.message().to_string(),
                RuleId::MarriageBroker.message().to_string(),
            ]
        );
    }

    #[test]
    fn gate_ignores_flags_from_other_sections() {
        let mut store = AnswerStore::new();
        store.flags.set(RuleId::UsPresence, true);

        let decision = SectionGate::should_block(Section::Requirements, &store);
        assert!(!decision.blocked);

        let decision = SectionGate::should_block(Section::LegalBeneficiary, &store);
        assert!(decision.blocked);
        assert_eq!(decision.messages.len(), 1);
    }

    #[test]
    fn sections_without_rules_never_block() {
        let mut store = AnswerStore::new();
        for rule in RuleId::all() {
            store.flags.set(*rule, true);
        }

        assert!(!SectionGate::should_block(Section::GettingStarted, &store).blocked);
        assert!(!SectionGate::should_block(Section::SponsorProfile, &store).blocked);
        assert!(!SectionGate::should_block(Section::Income, &store).blocked);
    }

    #[test]
    fn narrative_joins_fragments_with_blank_lines() {
        let mut store = AnswerStore::new();
        store.flags.set(RuleId::SponsorCriminal, true);
        store.flags.set(RuleId::SponsorSecurity, true);

        let decision = SectionGate::should_block(Section::LegalSponsor, &store);
        let narrative = decision.narrative();
        assert!(narrative.contains(RuleId::SponsorCriminal.message()));
        assert!(narrative.contains("\n\n"));
    }
}
