//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `answers` - The typed answer store and its write commands
//! - `screening` - Disqualification rules, stored flags, and section gates
//! - `navigation` - Screen registry, per-role flows, and the navigator
//! - `household` - Derived household size and minimum income
//! - `income_proof` - The branching document-guidance questionnaire
//! - `case` - The screening case aggregate root and its events

pub mod answers;
pub mod case;
pub mod foundation;
pub mod household;
pub mod income_proof;
pub mod navigation;
pub mod screening;
