//! Knowledge base module - static catalog of conditions and question nodes.
//!
//! The knowledge base is loaded once, validated eagerly, and treated as
//! immutable thereafter. Evaluation never fails on malformed data because
//! every structural invariant is checked at load time.

mod base;
mod catalog;
mod condition;
mod criterion;
mod node;

pub use base::{KnowledgeBase, KnowledgeBaseError};
pub use condition::{Condition, MediaRef};
pub use criterion::Criterion;
pub use node::{Diagnosis, QuestionNode, CHOICE_NO, CHOICE_YES};
