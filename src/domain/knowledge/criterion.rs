//! Criterion value object - one check within a condition's checklist.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;
use super::node::{CHOICE_NO, CHOICE_YES};

/// One yes/no or multiple-choice check belonging to a condition.
///
/// # Invariants
///
/// - `question` is non-empty
/// - `choices` has at least two entries, no duplicates
/// - `positive` is a non-empty, proper-or-improper subset of `choices`
///
/// Checklist matching is conjunctive: a condition matches only if every
/// criterion's recorded answer is in that criterion's positive set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    question: String,
    choices: Vec<String>,
    positive: Vec<String>,
}

impl Criterion {
    /// Creates a criterion, validating the choice and positive sets.
    pub fn new(
        question: impl Into<String>,
        choices: Vec<String>,
        positive: Vec<String>,
    ) -> Result<Self, ValidationError> {
        let question = question.into();
        if question.trim().is_empty() {
            return Err(ValidationError::empty_field("question"));
        }
        if choices.len() < 2 {
            return Err(ValidationError::invalid_format(
                "choices",
                "a criterion needs at least two answer choices",
            ));
        }
        for (idx, choice) in choices.iter().enumerate() {
            if choices[..idx].contains(choice) {
                return Err(ValidationError::invalid_format(
                    "choices",
                    format!("duplicate choice '{}'", choice),
                ));
            }
        }
        if positive.is_empty() {
            return Err(ValidationError::empty_field("positive"));
        }
        for p in &positive {
            if !choices.contains(p) {
                return Err(ValidationError::invalid_format(
                    "positive",
                    format!("positive answer '{}' is not a declared choice", p),
                ));
            }
        }
        Ok(Self {
            question,
            choices,
            positive,
        })
    }

    /// Convenience constructor for the common Yes/No criterion where
    /// only "Yes" is positive.
    pub fn yes_no(question: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(
            question,
            vec![CHOICE_YES.to_string(), CHOICE_NO.to_string()],
            vec![CHOICE_YES.to_string()],
        )
    }

    /// Returns the question text.
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Returns the declared answer choices, in presentation order.
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// Returns the positive subset.
    pub fn positive(&self) -> &[String] {
        &self.positive
    }

    /// Returns true if the choice is in the declared set.
    pub fn accepts(&self, choice: &str) -> bool {
        self.choices.iter().any(|c| c == choice)
    }

    /// Returns true if the answer is consistent with the condition.
    pub fn is_positive(&self, answer: &str) -> bool {
        self.positive.iter().any(|p| p == answer)
    }
}
