//! Cursor - where a session currently is in its evaluation.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ConditionKey, NodeKey};

/// Whether a checklist run evaluates one condition or ranks them all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistKind {
    /// One condition chosen by primary symptom; verdict is match or no match.
    Single,
    /// Every condition in catalog order; verdict is a ranked list of matches.
    RankAll,
}

/// Position within a checklist run.
///
/// `order` is fixed at construction. `condition_index` and
/// `criterion_index` walk it; `matched` accumulates conditions whose
/// every criterion was answered positively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistCursor {
    kind: ChecklistKind,
    order: Vec<ConditionKey>,
    condition_index: usize,
    criterion_index: usize,
    current_failed: bool,
    matched: Vec<ConditionKey>,
}

impl ChecklistCursor {
    pub fn new(kind: ChecklistKind, order: Vec<ConditionKey>) -> Self {
        Self {
            kind,
            order,
            condition_index: 0,
            criterion_index: 0,
            current_failed: false,
            matched: Vec::new(),
        }
    }

    pub fn kind(&self) -> ChecklistKind {
        self.kind
    }

    pub fn order(&self) -> &[ConditionKey] {
        &self.order
    }

    /// The condition currently being checked, or `None` when all are done.
    pub fn current_condition(&self) -> Option<&ConditionKey> {
        self.order.get(self.condition_index)
    }

    /// Index of the next criterion to ask within the current condition.
    pub fn criterion_index(&self) -> usize {
        self.criterion_index
    }

    /// True if a criterion of the current condition has already failed.
    pub fn current_failed(&self) -> bool {
        self.current_failed
    }

    /// Conditions whose criteria were all positive, in evaluation order.
    pub fn matched(&self) -> &[ConditionKey] {
        &self.matched
    }

    pub fn is_exhausted(&self) -> bool {
        self.condition_index >= self.order.len()
    }

    /// Records the outcome of one criterion answer and steps forward.
    pub(crate) fn note_answer(&mut self, positive: bool) {
        if !positive {
            self.current_failed = true;
        }
        self.criterion_index += 1;
    }

    /// Closes out the current condition and moves to the next one.
    pub(crate) fn finish_condition(&mut self) {
        if !self.current_failed {
            if let Some(key) = self.order.get(self.condition_index) {
                self.matched.push(key.clone());
            }
        }
        self.condition_index += 1;
        self.criterion_index = 0;
        self.current_failed = false;
    }
}

/// Where the session currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "state", rename_all = "snake_case")]
pub enum Cursor {
    /// Waiting for a primary-symptom selection (checklist single mode).
    SymptomSelection,
    /// At a node in the question graph (tree mode).
    Node(NodeKey),
    /// Mid-checklist.
    Checklist(ChecklistCursor),
    /// Evaluation finished; the outcome lives on the session.
    Done,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> ConditionKey {
        ConditionKey::new(s).unwrap()
    }

    #[test]
    fn cursor_walks_conditions_in_order() {
        let mut cursor =
            ChecklistCursor::new(ChecklistKind::RankAll, vec![key("fmd"), key("cbpp")]);
        assert_eq!(cursor.current_condition(), Some(&key("fmd")));

        cursor.note_answer(true);
        cursor.note_answer(true);
        cursor.finish_condition();
        assert_eq!(cursor.current_condition(), Some(&key("cbpp")));
        assert_eq!(cursor.matched(), &[key("fmd")]);
        assert_eq!(cursor.criterion_index(), 0);
    }

    #[test]
    fn failed_criterion_excludes_condition_from_matches() {
        let mut cursor = ChecklistCursor::new(ChecklistKind::Single, vec![key("fmd")]);
        cursor.note_answer(true);
        cursor.note_answer(false);
        assert!(cursor.current_failed());
        cursor.finish_condition();
        assert!(cursor.matched().is_empty());
        assert!(cursor.is_exhausted());
    }
}
