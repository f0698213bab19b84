//! In-memory adapters - reference embedder and test doubles.

mod event_sinks;
mod in_memory_repository;

pub use event_sinks::{NullEventSink, RecordingEventSink};
pub use in_memory_repository::InMemoryCaseRepository;
