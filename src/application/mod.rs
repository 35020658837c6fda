//! Application layer - command handlers orchestrating domain and ports.

pub mod handlers;
