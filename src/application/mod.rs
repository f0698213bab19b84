//! Application layer - one command handler per user-facing operation.

pub mod handlers;
