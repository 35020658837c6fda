//! Answer record value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, ValidationError};

/// One answered question, in the order it was asked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    question: String,
    choice: String,
    recorded_at: Timestamp,
}

impl AnswerRecord {
    /// Creates a record, stamping the current time.
    pub fn new(
        question: impl Into<String>,
        choice: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let question = question.into();
        let choice = choice.into();
        if question.trim().is_empty() {
            return Err(ValidationError::empty_field("question"));
        }
        if choice.trim().is_empty() {
            return Err(ValidationError::empty_field("choice"));
        }
        Ok(Self {
            question,
            choice,
            recorded_at: Timestamp::now(),
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn choice(&self) -> &str {
        &self.choice
    }

    pub fn recorded_at(&self) -> &Timestamp {
        &self.recorded_at
    }
}
