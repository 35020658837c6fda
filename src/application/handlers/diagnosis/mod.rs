//! Diagnosis handlers - the operational surface of the engine.
//!
//! One handler per operation: start, select symptom, submit answer,
//! restart. Handlers share the loaded knowledge base via `Arc` and hold
//! ports as trait objects; the caller owns the session between calls.

mod restart_session;
mod select_symptom;
mod start_diagnosis;
mod submit_answer;

pub use restart_session::{RestartSessionHandler, RestartSessionResult};
pub use select_symptom::{SelectSymptomCommand, SelectSymptomHandler, SelectSymptomResult};
pub use start_diagnosis::{
    DiagnosisMode, StartDiagnosisCommand, StartDiagnosisHandler, StartDiagnosisResult,
};
pub use submit_answer::{SubmitAnswerCommand, SubmitAnswerHandler, SubmitAnswerResult};

use crate::domain::evaluator::{checklist, tree, Prompt};
use crate::domain::foundation::DomainError;
use crate::domain::knowledge::KnowledgeBase;
use crate::domain::session::{Cursor, Session};

/// What to show for a freshly created (or restarted) session: either
/// the first question, or the symptom labels to choose from.
pub(crate) fn opening_view(
    kb: &KnowledgeBase,
    session: &Session,
) -> Result<(Option<Prompt>, Vec<String>), DomainError> {
    match session.cursor() {
        Cursor::SymptomSelection => {
            let symptoms = kb.symptom_labels().iter().map(|s| s.to_string()).collect();
            Ok((None, symptoms))
        }
        Cursor::Node(_) => Ok((Some(tree::current_prompt(kb, session)?), Vec::new())),
        Cursor::Checklist(_) => Ok((Some(checklist::current_prompt(kb, session)?), Vec::new())),
        Cursor::Done => Ok((None, Vec::new())),
    }
}
