//! Command handlers.

pub mod diagnosis;
