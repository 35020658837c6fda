//! Diagarp - Cattle Disease Diagnostic Engine
//!
//! This crate implements a symptom-driven diagnostic advisor: a validated
//! knowledge base of cattle conditions, two evaluation strategies (decision
//! tree traversal and checklist ranking), and the session state machine that
//! drives a question-by-question run to a terminal verdict.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
