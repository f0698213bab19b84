//! Adapters - Concrete implementations of the engine's ports.

pub mod memory;
