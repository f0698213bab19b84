//! Case event sink port.
//!
//! Domain events drained from the aggregate are handed to a sink after
//! each operation. The signature is infallible: the engine never waits
//! on or observes delivery; an implementation that forwards events to
//! analytics or persistence owns its own failure handling.

use crate::domain::case::CaseEvent;
use crate::domain::foundation::CaseId;

/// Fire-and-forget outlet for case domain events.
pub trait CaseEventSink: Send + Sync {
    /// Delivers a batch of events for one case.
    ///
    /// Events arrive in the order the aggregate recorded them.
    fn publish(&self, case_id: CaseId, events: &[CaseEvent]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sink_trait_is_object_safe() {
        fn assert_object_safe(_: Option<&dyn CaseEventSink>) {}
        assert_object_safe(None);
    }
}
