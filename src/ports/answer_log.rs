//! Answer Log Port - interface for recording completed diagnostic runs.
//!
//! Every completed session appends one entry: the disease key it landed
//! on and the question/answer trail that led there. The log is advisory;
//! a failed append never blocks a verdict.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::session::{AnswerRecord, Outcome, Session};

/// Errors that can occur during answer log operations
#[derive(Debug, thiserror::Error)]
pub enum AnswerLogError {
    #[error("Failed to serialize log entry: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize log contents: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// One question/answer pair as it appears in the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggedResponse {
    pub question: String,
    pub answer: String,
}

impl From<&AnswerRecord> for LoggedResponse {
    fn from(record: &AnswerRecord) -> Self {
        Self {
            question: record.question().to_string(),
            answer: record.choice().to_string(),
        }
    }
}

/// One completed run: the disease key landed on and the answer trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub disease: String,
    pub responses: Vec<LoggedResponse>,
}

impl LogEntry {
    /// Builds the entry for a completed session.
    ///
    /// Returns `None` if the session has no outcome yet.
    pub fn from_session(session: &Session) -> Option<Self> {
        let outcome: &Outcome = session.outcome()?;
        Some(Self {
            disease: outcome.logged_key(),
            responses: session.answers().iter().map(LoggedResponse::from).collect(),
        })
    }
}

/// Port for appending and reading completed-run entries
#[async_trait]
pub trait AnswerLog: Send + Sync {
    /// Append one entry, preserving all existing entries and their order.
    ///
    /// # Errors
    /// Returns `AnswerLogError` if the entry could not be durably written
    async fn append(&self, entry: LogEntry) -> Result<(), AnswerLogError>;

    /// Read every entry, oldest first.
    ///
    /// # Errors
    /// Returns `AnswerLogError` if the log exists but cannot be read
    async fn read_all(&self) -> Result<Vec<LogEntry>, AnswerLogError>;
}
