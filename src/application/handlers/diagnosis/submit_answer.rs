//! SubmitAnswerHandler - command handler for answering the current question.
//!
//! Dispatches to whichever strategy the session's cursor is in. When an
//! answer completes the run, the outcome is appended to the answer log;
//! log failures are retried a configured number of times and then only
//! warned about. A verdict is never withheld because logging failed.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::domain::evaluator::{checklist, tree, Transition};
use crate::domain::foundation::DomainError;
use crate::domain::knowledge::KnowledgeBase;
use crate::domain::session::{Cursor, Session};
use crate::ports::{AnswerLog, LogEntry};

/// Command carrying the chosen answer.
#[derive(Debug, Clone)]
pub struct SubmitAnswerCommand {
    pub choice: String,
}

/// Result of applying one answer.
#[derive(Debug, Clone)]
pub struct SubmitAnswerResult {
    pub transition: Transition,
}

/// Handler for submitting answers.
pub struct SubmitAnswerHandler {
    knowledge: Arc<KnowledgeBase>,
    answer_log: Arc<dyn AnswerLog>,
    engine: EngineConfig,
    log_retries: u32,
}

impl SubmitAnswerHandler {
    pub fn new(
        knowledge: Arc<KnowledgeBase>,
        answer_log: Arc<dyn AnswerLog>,
        engine: EngineConfig,
        log_retries: u32,
    ) -> Self {
        Self {
            knowledge,
            answer_log,
            engine,
            log_retries,
        }
    }

    pub async fn handle(
        &self,
        session: &mut Session,
        cmd: SubmitAnswerCommand,
    ) -> Result<SubmitAnswerResult, DomainError> {
        let transition = match session.cursor() {
            Cursor::Node(_) => tree::submit(&self.knowledge, session, &cmd.choice)?,
            Cursor::Checklist(_) => checklist::submit(
                &self.knowledge,
                session,
                &cmd.choice,
                self.engine.policy,
                self.engine.top_n,
            )?,
            Cursor::SymptomSelection | Cursor::Done => {
                return Err(DomainError::invalid_state("submit_answer", session.phase()))
            }
        };

        if transition.is_completed() {
            self.log_completion(session).await;
        }
        Ok(SubmitAnswerResult { transition })
    }

    async fn log_completion(&self, session: &Session) {
        let Some(entry) = LogEntry::from_session(session) else {
            return;
        };
        let attempts = self.log_retries.saturating_add(1);
        for attempt in 1..=attempts {
            match self.answer_log.append(entry.clone()).await {
                Ok(()) => return,
                Err(error) if attempt < attempts => {
                    debug!(%error, attempt, "answer log append failed, retrying");
                }
                Err(error) => {
                    warn!(%error, session_id = %session.id(), "answer log entry dropped");
                }
            }
        }
    }
}
