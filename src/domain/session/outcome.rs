//! Session outcome - the verdict(s) a completed evaluation produced.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ConditionKey, Likelihood};
use crate::domain::knowledge::{Condition, Diagnosis};

/// Key logged when a run matched nothing.
pub const NO_MATCH_KEY: &str = "none";

/// One candidate diagnosis with its guidance text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    key: ConditionKey,
    condition_name: String,
    summary: Option<String>,
    treatment: String,
    prevention: String,
    matched: bool,
    likelihood: Option<Likelihood>,
}

impl Verdict {
    /// Verdict from a decision-tree terminal. A terminal is always a
    /// positive identification of whatever it names, including the
    /// catch-all "unclear" diagnosis.
    pub fn from_diagnosis(diagnosis: &Diagnosis) -> Self {
        Self {
            key: diagnosis.key().clone(),
            condition_name: diagnosis.name().to_string(),
            summary: None,
            treatment: diagnosis.treatment().to_string(),
            prevention: diagnosis.prevention().to_string(),
            matched: true,
            likelihood: Some(diagnosis.likelihood()),
        }
    }

    /// Verdict from a checklist condition.
    ///
    /// `matched` is false when any criterion answer fell outside the
    /// positive set; the guidance text is still carried so callers can
    /// show it alongside the "consult a veterinarian" advice.
    pub fn from_condition(condition: &Condition, matched: bool) -> Self {
        Self {
            key: condition.key().clone(),
            condition_name: condition.name().to_string(),
            summary: Some(condition.summary().to_string()),
            treatment: condition.treatment().to_string(),
            prevention: condition.prevention().to_string(),
            matched,
            likelihood: matched.then(|| condition.likelihood()),
        }
    }

    pub fn key(&self) -> &ConditionKey {
        &self.key
    }

    pub fn condition_name(&self) -> &str {
        &self.condition_name
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn treatment(&self) -> &str {
        &self.treatment
    }

    pub fn prevention(&self) -> &str {
        &self.prevention
    }

    pub fn matched(&self) -> bool {
        self.matched
    }

    pub fn likelihood(&self) -> Option<Likelihood> {
        self.likelihood
    }
}

/// Result of a completed session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Outcome {
    /// Tree terminal or single-condition checklist verdict.
    Diagnosis(Verdict),
    /// Ranked matches from a full-catalog checklist run. May be empty.
    Ranked(Vec<Verdict>),
}

impl Outcome {
    /// The disease key recorded in the answer log for this outcome.
    ///
    /// An unmatched single-condition check and an empty ranking both
    /// log [`NO_MATCH_KEY`]; a ranking logs its top match.
    pub fn logged_key(&self) -> String {
        match self {
            Outcome::Diagnosis(verdict) if verdict.matched() => verdict.key().to_string(),
            Outcome::Diagnosis(_) => NO_MATCH_KEY.to_string(),
            Outcome::Ranked(verdicts) => verdicts
                .first()
                .map(|v| v.key().to_string())
                .unwrap_or_else(|| NO_MATCH_KEY.to_string()),
        }
    }
}
