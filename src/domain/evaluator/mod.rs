//! Evaluator module - drives a session through the knowledge base.
//!
//! Two strategies share one operational surface:
//!
//! - [`tree`]: walk the branching question graph to a terminal.
//! - [`checklist`]: run condition criteria conjunctively, either for a
//!   single symptom-selected condition or ranking the whole catalog.
//!
//! Both are pure with respect to I/O. They mutate the session and
//! return either the next [`Prompt`] or the completed outcome.

pub mod checklist;
pub mod tree;

use serde::{Deserialize, Serialize};

use crate::domain::knowledge::MediaRef;
use crate::domain::session::Outcome;

/// The next question to put to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    text: String,
    choices: Vec<String>,
    media: Option<MediaRef>,
    /// `(current, total)` question counter, 1-based. Checklist only;
    /// tree depth is not known in advance.
    progress: Option<(usize, usize)>,
}

impl Prompt {
    pub(crate) fn new(
        text: impl Into<String>,
        choices: Vec<String>,
        media: Option<MediaRef>,
        progress: Option<(usize, usize)>,
    ) -> Self {
        Self {
            text: text.into(),
            choices,
            media,
            progress,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Declared choices, in presentation order.
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// Illustration to show with the question, if any.
    pub fn media(&self) -> Option<&MediaRef> {
        self.media.as_ref()
    }

    pub fn progress(&self) -> Option<(usize, usize)> {
        self.progress
    }
}

/// What a submitted answer led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// More to ask.
    Ask(Prompt),
    /// Evaluation finished; the session is now complete.
    Completed(Outcome),
}

impl Transition {
    pub fn is_completed(&self) -> bool {
        matches!(self, Transition::Completed(_))
    }
}
