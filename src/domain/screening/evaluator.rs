//! Rule predicate evaluation and wholesale flag recomputation.
//!
//! Each catalog rule has one pure predicate over the answer store.
//! After every store write the whole catalog is re-evaluated and the
//! outcomes written back, so a stored flag can never disagree with the
//! answers it was derived from. The catalog is small enough that a
//! full pass costs nothing measurable.

use chrono::{Months, NaiveDate};

use crate::domain::answers::{AnswerStore, YesNo};
use crate::domain::foundation::ScreeningPolicy;

use super::{FlagDelta, RuleId};

/// Evaluates disqualification rules against the answer store.
pub struct DqEvaluator;

impl DqEvaluator {
    /// Evaluates a single rule's predicate.
    ///
    /// Predicates read the controlling answer first: rows recorded under
    /// a radio that has since been toggled back to "no" cannot trigger
    /// anything, even though the rows themselves are retained.
    pub fn evaluate(
        rule: RuleId,
        store: &AnswerStore,
        policy: &ScreeningPolicy,
        reference_date: NaiveDate,
    ) -> bool {
        match rule {
            RuleId::LegallyFree => {
                store.requirements.legally_free_to_marry == Some(YesNo::No)
            }
            RuleId::MeetingWindow => match store.requirements.met_in_person {
                Some(YesNo::No) => store.requirements.plans_to_meet == Some(YesNo::No),
                // A recorded meeting older than the policy window does
                // not satisfy the in-person requirement either.
                Some(YesNo::Yes) => match store.requirements.last_met_on {
                    Some(met) => !within_years(
                        met,
                        reference_date,
                        policy.relationship.meeting_window_years,
                    ),
                    None => false,
                },
                None => false,
            },
            RuleId::MarriageBroker => {
                store.requirements.met_through_broker == Some(YesNo::Yes)
            }
            RuleId::IntentToMarry => {
                store.requirements.intends_marriage_within_window == Some(YesNo::No)
            }
            RuleId::SponsorCriminal => {
                store.sponsor_legal.criminal_history == Some(YesNo::Yes)
            }
            RuleId::SponsorSecurity => {
                store.sponsor_legal.security_concerns == Some(YesNo::Yes)
            }
            RuleId::BeneficiaryCriminal => {
                store.beneficiary_legal.criminal_history == Some(YesNo::Yes)
            }
            RuleId::BeneficiaryImmigration => {
                store.beneficiary_legal.immigration_violations == Some(YesNo::Yes)
            }
            RuleId::BeneficiaryHealth => {
                store.beneficiary_legal.health_concerns == Some(YesNo::Yes)
            }
            RuleId::BeneficiarySecurity => {
                store.beneficiary_legal.security_concerns == Some(YesNo::Yes)
            }
            RuleId::UsPresence => {
                store.beneficiary_legal.currently_in_us == Some(YesNo::Yes)
            }
            RuleId::PetitionLimit => {
                store.household.has_prior_petitions == Some(YesNo::Yes)
                    && store.household.prior_petitions.len() as u32
                        > policy.petitions.max_prior_petitions
            }
            RuleId::PetitionCooldown => {
                store.household.has_prior_petitions == Some(YesNo::Yes)
                    && store.household.prior_petitions.iter().any(|p| {
                        p.filed_within_years(reference_date, policy.petitions.cooldown_years)
                    })
            }
            RuleId::PriorBeneficiarySpouse => {
                store.household.has_prior_petitions == Some(YesNo::Yes)
                    && store
                        .household
                        .prior_petitions
                        .iter()
                        .any(|p| p.now_current_spouse)
            }
        }
    }

    /// Re-evaluates the whole catalog and writes every outcome back.
    ///
    /// Returns the rules that flipped in either direction. Callers run
    /// this after every answer write; a flag raised by an earlier answer
    /// clears on the first pass after the answer stops satisfying the
    /// predicate.
    pub fn recompute_all(
        store: &mut AnswerStore,
        policy: &ScreeningPolicy,
        reference_date: NaiveDate,
    ) -> FlagDelta {
        let mut delta = FlagDelta::default();
        for rule in RuleId::all() {
            let outcome = Self::evaluate(*rule, store, policy, reference_date);
            let previous = store.flags.set(*rule, outcome);
            if outcome && !previous {
                delta.raised.push(*rule);
            } else if !outcome && previous {
                delta.cleared.push(*rule);
            }
        }
        delta
    }
}

/// True when `date` falls inside the window of `years` ending at
/// `reference`. A date exactly `years` before the reference is outside.
fn within_years(date: NaiveDate, reference: NaiveDate, years: u32) -> bool {
    let cutoff = reference
        .checked_sub_months(Months::new(years * 12))
        .unwrap_or(NaiveDate::MIN);
    date > cutoff
}
