//! Decision-tree strategy: walk the question graph to a terminal.

use crate::domain::foundation::{DomainError, ErrorCode, NodeKey};
use crate::domain::knowledge::{KnowledgeBase, QuestionNode};
use crate::domain::session::{AnswerRecord, Cursor, Outcome, Session, Verdict};
use super::{Prompt, Transition};

/// Creates a session positioned at the graph's start node.
pub fn new_session(kb: &KnowledgeBase) -> Session {
    Session::new(Cursor::Node(kb.start().clone()))
}

/// The question at the session's current node.
///
/// # Errors
///
/// - `InvalidState` if the session is not cursored on a node
/// - `NodeNotFound` if the cursor points at a key the base lacks
pub fn current_prompt(kb: &KnowledgeBase, session: &Session) -> Result<Prompt, DomainError> {
    let key = node_key(session)?;
    let node = lookup(kb, key)?;
    prompt_for(node)
}

/// Applies one answer: records it, advances the cursor, and completes
/// the session when a terminal is reached.
///
/// # Errors
///
/// - `UnknownChoice` if the choice is not declared on the current node;
///   the session is left unchanged and can be re-prompted
/// - `InvalidState` if the session is complete or not in tree mode
pub fn submit(
    kb: &KnowledgeBase,
    session: &mut Session,
    choice: &str,
) -> Result<Transition, DomainError> {
    let key = node_key(session)?.clone();
    let node = lookup(kb, &key)?;

    let question = match node.prompt() {
        Some(text) => text.to_string(),
        None => return Err(DomainError::invalid_state("submit_answer", session.phase())),
    };
    let next_key = node
        .next_for(choice)
        .ok_or_else(|| DomainError::unknown_choice(choice, &node.choices()))?
        .clone();

    session.begin()?;
    session.record_answer(AnswerRecord::new(question, choice)?)?;

    let next = lookup(kb, &next_key)?;
    if let Some(diagnosis) = next.diagnosis() {
        let outcome = Outcome::Diagnosis(Verdict::from_diagnosis(diagnosis));
        session.complete(outcome.clone())?;
        Ok(Transition::Completed(outcome))
    } else {
        let prompt = prompt_for(next)?;
        session.set_cursor(Cursor::Node(next_key));
        Ok(Transition::Ask(prompt))
    }
}

fn node_key(session: &Session) -> Result<&NodeKey, DomainError> {
    match session.cursor() {
        Cursor::Node(key) => Ok(key),
        _ => Err(DomainError::invalid_state("tree_evaluation", session.phase())),
    }
}

fn lookup<'a>(kb: &'a KnowledgeBase, key: &NodeKey) -> Result<&'a QuestionNode, DomainError> {
    kb.node(key).ok_or_else(|| {
        DomainError::new(ErrorCode::NodeNotFound, "Question node not found")
            .with_detail("node", key.to_string())
    })
}

fn prompt_for(node: &QuestionNode) -> Result<Prompt, DomainError> {
    match node.prompt() {
        Some(text) => Ok(Prompt::new(text, node.choices(), None, None)),
        None => Err(DomainError::new(
            ErrorCode::InternalError,
            "Cursor rested on a terminal node",
        )),
    }
}
