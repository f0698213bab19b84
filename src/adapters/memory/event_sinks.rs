//! Event sink adapters.

use std::sync::Mutex;

use tracing::debug;

use crate::domain::case::CaseEvent;
use crate::domain::foundation::CaseId;
use crate::ports::CaseEventSink;

/// Records every published event; used by tests to assert on emissions.
#[derive(Default)]
pub struct RecordingEventSink {
    events: Mutex<Vec<CaseEvent>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events published so far, in delivery order.
    pub fn events(&self) -> Vec<CaseEvent> {
        self.events.lock().expect("event log poisoned").clone()
    }

    /// Events published for one case.
    pub fn events_for(&self, case_id: CaseId) -> Vec<CaseEvent> {
        self.events
            .lock()
            .expect("event log poisoned")
            .iter()
            .filter(|e| e.case_id() == case_id)
            .cloned()
            .collect()
    }
}

impl CaseEventSink for RecordingEventSink {
    fn publish(&self, _case_id: CaseId, events: &[CaseEvent]) {
        self.events
            .lock()
            .expect("event log poisoned")
            .extend_from_slice(events);
    }
}

/// Discards events; for embedders that don't consume them.
#[derive(Default)]
pub struct NullEventSink;

impl NullEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl CaseEventSink for NullEventSink {
    fn publish(&self, case_id: CaseId, events: &[CaseEvent]) {
        debug!(%case_id, count = events.len(), "discarding case events");
    }
}
