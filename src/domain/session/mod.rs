//! Session module - one diagnostic run from first question to verdict.
//!
//! A session owns its answer trail and cursor. It never touches the
//! knowledge base directly; the evaluator reads both and drives the
//! session through its mutators.

mod aggregate;
mod answer;
mod cursor;
mod outcome;

pub use aggregate::Session;
pub use answer::AnswerRecord;
pub use cursor::{ChecklistCursor, ChecklistKind, Cursor};
pub use outcome::{Outcome, Verdict, NO_MATCH_KEY};
