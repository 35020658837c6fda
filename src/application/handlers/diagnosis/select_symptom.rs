//! SelectSymptomHandler - command handler for the checklist entry step.

use std::sync::Arc;

use tracing::info;

use crate::domain::evaluator::{checklist, Prompt};
use crate::domain::foundation::DomainError;
use crate::domain::knowledge::KnowledgeBase;
use crate::domain::session::Session;

/// Command naming the observed primary symptom.
#[derive(Debug, Clone)]
pub struct SelectSymptomCommand {
    pub symptom: String,
}

/// Result of a successful selection.
#[derive(Debug, Clone)]
pub struct SelectSymptomResult {
    /// First criterion question of the selected condition.
    pub prompt: Prompt,
}

/// Handler for resolving a primary symptom to its condition checklist.
pub struct SelectSymptomHandler {
    knowledge: Arc<KnowledgeBase>,
}

impl SelectSymptomHandler {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self { knowledge }
    }

    pub fn handle(
        &self,
        session: &mut Session,
        cmd: SelectSymptomCommand,
    ) -> Result<SelectSymptomResult, DomainError> {
        let prompt = checklist::select_symptom(&self.knowledge, session, &cmd.symptom)?;
        info!(session_id = %session.id(), symptom = %cmd.symptom, "symptom selected");
        Ok(SelectSymptomResult { prompt })
    }
}
