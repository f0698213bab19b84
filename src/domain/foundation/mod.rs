//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the K1 Screener domain.

mod errors;
mod ids;
mod money;
mod policy;
mod role;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::CaseId;
pub use money::Money;
pub use policy::{IncomePolicy, PetitionPolicy, RelationshipPolicy, ScreeningPolicy};
pub use role::Role;
pub use timestamp::Timestamp;
