//! Case repository port (write side).
//!
//! Defines the contract for persisting and retrieving ScreeningCase
//! aggregates. The engine runs synchronously inside a UI event loop, so
//! the trait is synchronous; implementations that persist remotely do
//! so behind their own buffering.

use crate::domain::case::ScreeningCase;
use crate::domain::foundation::{CaseId, DomainError};

/// Repository port for ScreeningCase aggregate persistence.
pub trait CaseRepository: Send + Sync {
    /// Save a new case.
    fn save(&self, case: &ScreeningCase) -> Result<(), DomainError>;

    /// Update an existing case.
    ///
    /// # Errors
    ///
    /// - `CaseNotFound` if the case doesn't exist
    fn update(&self, case: &ScreeningCase) -> Result<(), DomainError>;

    /// Find a case by its ID.
    ///
    /// Returns `None` if not found.
    fn find_by_id(&self, id: &CaseId) -> Result<Option<ScreeningCase>, DomainError>;

    /// Check if a case exists.
    fn exists(&self, id: &CaseId) -> Result<bool, DomainError>;

    /// Delete a case (primarily for testing).
    fn delete(&self, id: &CaseId) -> Result<(), DomainError>;
}
