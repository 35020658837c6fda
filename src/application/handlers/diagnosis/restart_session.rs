//! RestartSessionHandler - command handler for starting over.
//!
//! Restart never reuses the old session: it produces a fresh one at the
//! same initial cursor, with a new id and an empty answer trail. The old
//! session (and its log entry, if it completed) is left as-is.

use std::sync::Arc;

use tracing::info;

use crate::domain::evaluator::Prompt;
use crate::domain::foundation::DomainError;
use crate::domain::knowledge::KnowledgeBase;
use crate::domain::session::Session;
use super::opening_view;

/// Result of restarting: a fresh session plus its opening view.
#[derive(Debug, Clone)]
pub struct RestartSessionResult {
    pub session: Session,
    pub prompt: Option<Prompt>,
    pub symptoms: Vec<String>,
}

/// Handler for restarting diagnostic runs.
pub struct RestartSessionHandler {
    knowledge: Arc<KnowledgeBase>,
}

impl RestartSessionHandler {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self { knowledge }
    }

    pub fn handle(&self, session: &Session) -> Result<RestartSessionResult, DomainError> {
        let fresh = session.restart();
        let (prompt, symptoms) = opening_view(&self.knowledge, &fresh)?;

        info!(
            old_session_id = %session.id(),
            session_id = %fresh.id(),
            "session restarted"
        );
        Ok(RestartSessionResult {
            session: fresh,
            prompt,
            symptoms,
        })
    }
}
