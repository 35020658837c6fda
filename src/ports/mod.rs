//! Ports - interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.

mod answer_log;

pub use answer_log::{AnswerLog, AnswerLogError, LogEntry, LoggedResponse};
