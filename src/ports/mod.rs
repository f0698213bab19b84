//! Ports - Interfaces the engine's embedder implements.
//!
//! The engine core is a pure library; persistence and event delivery
//! are collaborators plugged in through these traits.

mod case_repository;
mod event_sink;

pub use case_repository::CaseRepository;
pub use event_sink::CaseEventSink;
