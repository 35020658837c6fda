//! Session aggregate entity.
//!
//! A session is one diagnostic run: a cursor into the knowledge base,
//! the ordered trail of answers given so far, and, once complete, an
//! outcome. Mutation goes through guarded methods; the evaluator is the
//! only caller of the crate-private ones.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    DomainError, SessionId, SessionPhase, StateMachine, Timestamp,
};
use super::answer::AnswerRecord;
use super::cursor::Cursor;
use super::outcome::Outcome;

/// Session aggregate - one diagnostic run from first question to verdict.
///
/// # Invariants
///
/// - answers accumulate in ask order and are never edited or removed
/// - `outcome` is `Some` exactly when `phase` is `Complete`
/// - a restarted run is a *new* session; this one stays complete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier for this run.
    id: SessionId,

    /// Lifecycle phase.
    phase: SessionPhase,

    /// Where evaluation currently stands.
    cursor: Cursor,

    /// Cursor the session was created with; restart reproduces it.
    initial_cursor: Cursor,

    /// Answer trail, in ask order.
    answers: Vec<AnswerRecord>,

    /// Verdict(s), present once complete.
    outcome: Option<Outcome>,

    /// When the session was created.
    started_at: Timestamp,

    /// When the session completed.
    completed_at: Option<Timestamp>,
}

impl Session {
    /// Creates a session positioned at the given initial cursor.
    ///
    /// A session opened on the symptom-selection screen awaits that
    /// choice; any other starting cursor has a question pending, so the
    /// run is in progress from the first moment.
    pub fn new(initial_cursor: Cursor) -> Self {
        let phase = match initial_cursor {
            Cursor::SymptomSelection => SessionPhase::AwaitingSymptomSelection,
            _ => SessionPhase::InProgress,
        };
        Self {
            id: SessionId::new(),
            phase,
            cursor: initial_cursor.clone(),
            initial_cursor,
            answers: Vec::new(),
            outcome: None,
            started_at: Timestamp::now(),
            completed_at: None,
        }
    }

    /// Discards this run and produces a fresh session at the same
    /// initial cursor. The new session has a new id and an empty answer
    /// trail; this one is left untouched.
    pub fn restart(&self) -> Self {
        Self::new(self.initial_cursor.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Answer trail, in the order questions were asked.
    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    pub fn completed_at(&self) -> Option<&Timestamp> {
        self.completed_at.as_ref()
    }

    pub fn is_complete(&self) -> bool {
        self.phase == SessionPhase::Complete
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations (evaluator-driven)
    // ─────────────────────────────────────────────────────────────────────────

    /// Moves an awaiting session into `InProgress`. No-op if already
    /// in progress.
    ///
    /// # Errors
    ///
    /// - `InvalidState` if the session is complete
    pub(crate) fn begin(&mut self) -> Result<(), DomainError> {
        match self.phase {
            SessionPhase::AwaitingSymptomSelection => {
                self.phase = self.phase.transition_to(SessionPhase::InProgress)?;
                Ok(())
            }
            SessionPhase::InProgress => Ok(()),
            SessionPhase::Complete => {
                Err(DomainError::invalid_state("begin", self.phase))
            }
        }
    }

    /// Appends an answer to the trail.
    ///
    /// # Errors
    ///
    /// - `InvalidState` unless the session is in progress
    pub(crate) fn record_answer(&mut self, record: AnswerRecord) -> Result<(), DomainError> {
        if !self.phase.accepts_answers() {
            return Err(DomainError::invalid_state("record_answer", self.phase));
        }
        self.answers.push(record);
        Ok(())
    }

    /// Repositions the cursor.
    pub(crate) fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }

    /// Completes the session with the given outcome.
    ///
    /// # Errors
    ///
    /// - `InvalidState` unless the session is in progress
    pub(crate) fn complete(&mut self, outcome: Outcome) -> Result<(), DomainError> {
        self.phase = self.phase.transition_to(SessionPhase::Complete)?;
        self.cursor = Cursor::Done;
        self.outcome = Some(outcome);
        self.completed_at = Some(Timestamp::now());
        Ok(())
    }
}
