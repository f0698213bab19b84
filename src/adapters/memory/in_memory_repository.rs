//! In-memory case repository.
//!
//! The reference embedder: a single-process wizard keeps its cases in a
//! map. Also the test double for every handler test.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::case::ScreeningCase;
use crate::domain::foundation::{CaseId, DomainError, ErrorCode};
use crate::ports::CaseRepository;

/// Mutex-guarded map of cases by ID.
#[derive(Default)]
pub struct InMemoryCaseRepository {
    cases: Mutex<HashMap<CaseId, ScreeningCase>>,
}

impl InMemoryCaseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored cases.
    pub fn len(&self) -> usize {
        self.cases.lock().expect("case store poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Locks the store, turning a poisoned mutex into a domain error
    /// instead of a panic.
    fn guard(&self) -> Result<MutexGuard<'_, HashMap<CaseId, ScreeningCase>>, DomainError> {
        self.cases.lock().map_err(|_| {
            DomainError::new(ErrorCode::InternalError, "case store mutex poisoned")
        })
    }
}

impl CaseRepository for InMemoryCaseRepository {
    fn save(&self, case: &ScreeningCase) -> Result<(), DomainError> {
        self.guard()?.insert(case.id(), case.clone());
        Ok(())
    }

    fn update(&self, case: &ScreeningCase) -> Result<(), DomainError> {
        let mut cases = self.guard()?;
        if !cases.contains_key(&case.id()) {
            return Err(DomainError::new(
                ErrorCode::CaseNotFound,
                format!("Case not found: {}", case.id()),
            ));
        }
        cases.insert(case.id(), case.clone());
        Ok(())
    }

    fn find_by_id(&self, id: &CaseId) -> Result<Option<ScreeningCase>, DomainError> {
        Ok(self.guard()?.get(id).cloned())
    }

    fn exists(&self, id: &CaseId) -> Result<bool, DomainError> {
        Ok(self.guard()?.contains_key(id))
    }

    fn delete(&self, id: &CaseId) -> Result<(), DomainError> {
        let mut cases = self.guard()?;
        if cases.remove(id).is_none() {
            return Err(DomainError::new(
                ErrorCode::CaseNotFound,
                format!("Case not found: {}", id),
            ));
        }
        Ok(())
    }
}
