//! Adapters - concrete implementations of ports.

pub mod log;
