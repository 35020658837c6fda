//! Question node - one step in the decision-tree strategy.
//!
//! The original drafts distinguished node shapes by which dictionary keys
//! were present ("options" vs "yes"/"no" vs "diagnosis"). Here the shape is
//! a tagged variant validated at load time.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ConditionKey, Likelihood, NodeKey, ValidationError};

/// Canonical affirmative choice label for binary nodes.
pub const CHOICE_YES: &str = "Yes";

/// Canonical negative choice label for binary nodes.
pub const CHOICE_NO: &str = "No";

/// Diagnostic payload carried by a terminal node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnosis {
    key: ConditionKey,
    name: String,
    likelihood: Likelihood,
    treatment: String,
    prevention: String,
}

impl Diagnosis {
    pub fn new(
        key: ConditionKey,
        name: impl Into<String>,
        likelihood: Likelihood,
        treatment: impl Into<String>,
        prevention: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            key,
            name,
            likelihood,
            treatment: treatment.into(),
            prevention: prevention.into(),
        })
    }

    pub fn key(&self) -> &ConditionKey {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn likelihood(&self) -> Likelihood {
        self.likelihood
    }

    pub fn treatment(&self) -> &str {
        &self.treatment
    }

    pub fn prevention(&self) -> &str {
        &self.prevention
    }
}

/// One step in the branching decision-tree strategy.
///
/// Branch nodes may map multiple choices to the same next node: that is a
/// question kept for record-keeping, not dead data, and is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuestionNode {
    /// Yes/no question with one edge per answer.
    BranchBinary {
        prompt: String,
        yes: NodeKey,
        no: NodeKey,
    },
    /// Question with an ordered, labeled option set.
    BranchMultiway {
        prompt: String,
        options: Vec<(String, NodeKey)>,
    },
    /// Leaf carrying the diagnosis payload; ends the session.
    Terminal(Diagnosis),
}

impl QuestionNode {
    /// Returns the prompt text, or `None` for terminal nodes.
    pub fn prompt(&self) -> Option<&str> {
        match self {
            QuestionNode::BranchBinary { prompt, .. } => Some(prompt),
            QuestionNode::BranchMultiway { prompt, .. } => Some(prompt),
            QuestionNode::Terminal(_) => None,
        }
    }

    /// Returns the declared choice labels in presentation order.
    ///
    /// Empty for terminal nodes.
    pub fn choices(&self) -> Vec<String> {
        match self {
            QuestionNode::BranchBinary { .. } => {
                vec![CHOICE_YES.to_string(), CHOICE_NO.to_string()]
            }
            QuestionNode::BranchMultiway { options, .. } => {
                options.iter().map(|(label, _)| label.clone()).collect()
            }
            QuestionNode::Terminal(_) => Vec::new(),
        }
    }

    /// Resolves the next node for a choice, or `None` if the choice is
    /// not in this node's declared set (or the node is terminal).
    pub fn next_for(&self, choice: &str) -> Option<&NodeKey> {
        match self {
            QuestionNode::BranchBinary { yes, no, .. } => match choice {
                CHOICE_YES => Some(yes),
                CHOICE_NO => Some(no),
                _ => None,
            },
            QuestionNode::BranchMultiway { options, .. } => options
                .iter()
                .find(|(label, _)| label == choice)
                .map(|(_, key)| key),
            QuestionNode::Terminal(_) => None,
        }
    }

    /// Returns all outgoing edges, in declaration order.
    pub fn edges(&self) -> Vec<&NodeKey> {
        match self {
            QuestionNode::BranchBinary { yes, no, .. } => vec![yes, no],
            QuestionNode::BranchMultiway { options, .. } => {
                options.iter().map(|(_, key)| key).collect()
            }
            QuestionNode::Terminal(_) => Vec::new(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, QuestionNode::Terminal(_))
    }

    /// Returns the diagnosis payload for terminal nodes.
    pub fn diagnosis(&self) -> Option<&Diagnosis> {
        match self {
            QuestionNode::Terminal(d) => Some(d),
            _ => None,
        }
    }
}
