//! SessionPhase enum for tracking the lifecycle of a diagnostic run.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Lifecycle phase of a diagnostic session.
///
/// Valid transitions:
/// - `AwaitingSymptomSelection -> InProgress`
/// - `InProgress -> Complete`
///
/// Restart is not a transition: it discards the session and produces a
/// fresh one in its initial phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    #[default]
    AwaitingSymptomSelection,
    InProgress,
    Complete,
}

impl SessionPhase {
    /// Returns true if answers can still be submitted in this phase.
    pub fn accepts_answers(&self) -> bool {
        matches!(self, SessionPhase::InProgress)
    }
}

impl StateMachine for SessionPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SessionPhase::*;
        matches!(
            (self, target),
            (AwaitingSymptomSelection, InProgress) | (InProgress, Complete)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SessionPhase::*;
        match self {
            AwaitingSymptomSelection => vec![InProgress],
            InProgress => vec![Complete],
            Complete => vec![],
        }
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionPhase::AwaitingSymptomSelection => "AwaitingSymptomSelection",
            SessionPhase::InProgress => "InProgress",
            SessionPhase::Complete => "Complete",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_awaiting_symptom_selection() {
        assert_eq!(
            SessionPhase::default(),
            SessionPhase::AwaitingSymptomSelection
        );
    }

    #[test]
    fn only_in_progress_accepts_answers() {
        assert!(!SessionPhase::AwaitingSymptomSelection.accepts_answers());
        assert!(SessionPhase::InProgress.accepts_answers());
        assert!(!SessionPhase::Complete.accepts_answers());
    }

    #[test]
    fn awaiting_can_transition_to_in_progress() {
        assert!(SessionPhase::AwaitingSymptomSelection
            .can_transition_to(&SessionPhase::InProgress));
    }

    #[test]
    fn in_progress_can_transition_to_complete() {
        assert!(SessionPhase::InProgress.can_transition_to(&SessionPhase::Complete));
    }

    #[test]
    fn complete_has_no_outgoing_transitions() {
        assert!(!SessionPhase::Complete.can_transition_to(&SessionPhase::InProgress));
        assert!(!SessionPhase::Complete
            .can_transition_to(&SessionPhase::AwaitingSymptomSelection));
        assert!(SessionPhase::Complete.valid_transitions().is_empty());
    }

    #[test]
    fn awaiting_cannot_skip_to_complete() {
        assert!(!SessionPhase::AwaitingSymptomSelection
            .can_transition_to(&SessionPhase::Complete));
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&SessionPhase::AwaitingSymptomSelection).unwrap(),
            "\"awaiting_symptom_selection\""
        );
        assert_eq!(
            serde_json::to_string(&SessionPhase::Complete).unwrap(),
            "\"complete\""
        );
    }

    #[test]
    fn deserializes_from_snake_case_json() {
        let phase: SessionPhase = serde_json::from_str("\"in_progress\"").unwrap();
        assert_eq!(phase, SessionPhase::InProgress);
    }
}
