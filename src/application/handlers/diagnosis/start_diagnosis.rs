//! StartDiagnosisHandler - command handler for opening a diagnostic run.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::evaluator::{checklist, tree, Prompt};
use crate::domain::foundation::DomainError;
use crate::domain::knowledge::KnowledgeBase;
use crate::domain::session::Session;
use super::opening_view;

/// Which evaluation strategy the run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosisMode {
    /// Walk the branching question graph.
    #[default]
    Tree,
    /// Check one condition chosen by primary symptom.
    Checklist,
    /// Check every condition and rank the matches.
    RankAll,
}

/// Command to start a diagnostic run.
#[derive(Debug, Clone)]
pub struct StartDiagnosisCommand {
    pub mode: DiagnosisMode,
}

/// Result of starting a run.
#[derive(Debug, Clone)]
pub struct StartDiagnosisResult {
    /// The fresh session; the caller holds it between commands.
    pub session: Session,
    /// The first question, when the mode opens with one.
    pub prompt: Option<Prompt>,
    /// Symptom labels to choose from, in checklist mode.
    pub symptoms: Vec<String>,
}

/// Handler for starting diagnostic runs.
pub struct StartDiagnosisHandler {
    knowledge: Arc<KnowledgeBase>,
}

impl StartDiagnosisHandler {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self { knowledge }
    }

    pub fn handle(&self, cmd: StartDiagnosisCommand) -> Result<StartDiagnosisResult, DomainError> {
        let session = match cmd.mode {
            DiagnosisMode::Tree => tree::new_session(&self.knowledge),
            DiagnosisMode::Checklist => checklist::symptom_session(),
            DiagnosisMode::RankAll => checklist::rank_all_session(&self.knowledge),
        };
        let (prompt, symptoms) = opening_view(&self.knowledge, &session)?;

        info!(session_id = %session.id(), mode = ?cmd.mode, "diagnosis started");
        Ok(StartDiagnosisResult {
            session,
            prompt,
            symptoms,
        })
    }
}
