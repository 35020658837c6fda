//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the Diagarp domain.

mod errors;
mod ids;
mod likelihood;
mod session_phase;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ConditionKey, NodeKey, SessionId};
pub use likelihood::Likelihood;
pub use session_phase::SessionPhase;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
