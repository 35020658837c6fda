//! Domain layer - the pure diagnostic engine.
//!
//! No I/O happens here. All engine operations are functions of
//! (KnowledgeBase, Session, input) -> (Session, Output).

pub mod evaluator;
pub mod foundation;
pub mod knowledge;
pub mod session;
