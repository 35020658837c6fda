//! Checklist strategy: conjunctive criteria, single condition or ranked.
//!
//! A condition matches only if every answered criterion fell in its
//! positive set. Single mode checks the condition chosen by primary
//! symptom; rank-all mode walks the whole catalog in declaration order
//! and ranks the matches by base likelihood.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ConditionKey, DomainError, ErrorCode};
use crate::domain::knowledge::{Condition, KnowledgeBase};
use crate::domain::session::{
    AnswerRecord, ChecklistCursor, ChecklistKind, Cursor, Outcome, Session, Verdict,
};
use super::{Prompt, Transition};

/// How a condition's criteria are traversed once one has failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationPolicy {
    /// Ask every criterion even after a failure. The full answer trail
    /// is logged either way.
    #[default]
    Exhaustive,
    /// Skip the rest of a condition's criteria after the first failure.
    ShortCircuit,
}

/// Creates a session awaiting a primary-symptom selection.
pub fn symptom_session() -> Session {
    Session::new(Cursor::SymptomSelection)
}

/// Creates a session checking one pre-selected condition, bypassing the
/// symptom map.
///
/// # Errors
///
/// `ConditionNotFound` if the key is not in the catalog.
pub fn condition_session(kb: &KnowledgeBase, key: &ConditionKey) -> Result<Session, DomainError> {
    let condition = kb.condition(key).ok_or_else(|| {
        DomainError::new(ErrorCode::ConditionNotFound, "Condition not found")
            .with_detail("condition", key.to_string())
    })?;
    Ok(Session::new(Cursor::Checklist(ChecklistCursor::new(
        ChecklistKind::Single,
        vec![condition.key().clone()],
    ))))
}

/// Creates a session that will check every condition in catalog order.
pub fn rank_all_session(kb: &KnowledgeBase) -> Session {
    let order: Vec<ConditionKey> = kb.conditions().iter().map(|c| c.key().clone()).collect();
    Session::new(Cursor::Checklist(ChecklistCursor::new(
        ChecklistKind::RankAll,
        order,
    )))
}

/// Resolves a primary-symptom label and starts the single-condition
/// checklist for it. Returns the first criterion prompt.
///
/// # Errors
///
/// - `InvalidState` unless the session is awaiting a selection
/// - `SymptomNotFound` if the label is not in the symptom map
pub fn select_symptom(
    kb: &KnowledgeBase,
    session: &mut Session,
    label: &str,
) -> Result<Prompt, DomainError> {
    if session.cursor() != &Cursor::SymptomSelection {
        return Err(DomainError::invalid_state("select_symptom", session.phase()));
    }
    let condition = kb.condition_for_symptom(label).ok_or_else(|| {
        DomainError::new(ErrorCode::SymptomNotFound, "Primary symptom not recognized")
            .with_detail("symptom", label)
    })?;

    session.begin()?;
    let cursor = ChecklistCursor::new(ChecklistKind::Single, vec![condition.key().clone()]);
    let prompt = prompt_for(kb, &cursor)?;
    session.set_cursor(Cursor::Checklist(cursor));
    Ok(prompt)
}

/// The criterion question the session is currently waiting on.
pub fn current_prompt(kb: &KnowledgeBase, session: &Session) -> Result<Prompt, DomainError> {
    match session.cursor() {
        Cursor::Checklist(cursor) => prompt_for(kb, cursor),
        _ => Err(DomainError::invalid_state(
            "checklist_evaluation",
            session.phase(),
        )),
    }
}

/// Applies one criterion answer under the given policy.
///
/// Completes the session once the last condition is closed out. For
/// rank-all runs the outcome keeps at most `top_n` matches, ordered by
/// likelihood descending with catalog order breaking ties.
///
/// # Errors
///
/// - `UnknownChoice` if the choice is not declared on the criterion;
///   the session is left unchanged
/// - `InvalidState` if the session is complete or not in checklist mode
pub fn submit(
    kb: &KnowledgeBase,
    session: &mut Session,
    choice: &str,
    policy: EvaluationPolicy,
    top_n: usize,
) -> Result<Transition, DomainError> {
    let mut cursor = match session.cursor() {
        Cursor::Checklist(cursor) => cursor.clone(),
        _ => {
            return Err(DomainError::invalid_state(
                "checklist_evaluation",
                session.phase(),
            ))
        }
    };
    let condition = current_condition(kb, &cursor)?;
    let criterion = condition
        .criteria()
        .get(cursor.criterion_index())
        .ok_or_else(|| {
            DomainError::new(ErrorCode::InternalError, "Criterion index out of bounds")
        })?;

    if !criterion.accepts(choice) {
        return Err(DomainError::unknown_choice(choice, criterion.choices()));
    }

    session.begin()?;
    session.record_answer(AnswerRecord::new(criterion.question(), choice)?)?;

    cursor.note_answer(criterion.is_positive(choice));
    let condition_done = cursor.criterion_index() >= condition.criteria().len()
        || (policy == EvaluationPolicy::ShortCircuit && cursor.current_failed());
    if condition_done {
        cursor.finish_condition();
    }

    if cursor.is_exhausted() {
        let outcome = build_outcome(kb, &cursor, top_n)?;
        session.complete(outcome.clone())?;
        Ok(Transition::Completed(outcome))
    } else {
        let prompt = prompt_for(kb, &cursor)?;
        session.set_cursor(Cursor::Checklist(cursor));
        Ok(Transition::Ask(prompt))
    }
}

fn current_condition<'a>(
    kb: &'a KnowledgeBase,
    cursor: &ChecklistCursor,
) -> Result<&'a Condition, DomainError> {
    let key = cursor.current_condition().ok_or_else(|| {
        DomainError::new(ErrorCode::InternalError, "Checklist cursor already exhausted")
    })?;
    kb.condition(key).ok_or_else(|| {
        DomainError::new(ErrorCode::ConditionNotFound, "Condition not found")
            .with_detail("condition", key.to_string())
    })
}

fn prompt_for(kb: &KnowledgeBase, cursor: &ChecklistCursor) -> Result<Prompt, DomainError> {
    let condition = current_condition(kb, cursor)?;
    let idx = cursor.criterion_index();
    let criterion = condition.criteria().get(idx).ok_or_else(|| {
        DomainError::new(ErrorCode::InternalError, "Criterion index out of bounds")
    })?;
    // Rotate through the condition's illustrations, one per question.
    let media = if condition.media().is_empty() {
        None
    } else {
        Some(condition.media()[idx % condition.media().len()].clone())
    };
    Ok(Prompt::new(
        criterion.question(),
        criterion.choices().to_vec(),
        media,
        Some((idx + 1, condition.criteria().len())),
    ))
}

fn build_outcome(
    kb: &KnowledgeBase,
    cursor: &ChecklistCursor,
    top_n: usize,
) -> Result<Outcome, DomainError> {
    match cursor.kind() {
        ChecklistKind::Single => {
            let key = cursor.order().first().ok_or_else(|| {
                DomainError::new(ErrorCode::InternalError, "Empty checklist order")
            })?;
            let condition = kb.condition(key).ok_or_else(|| {
                DomainError::new(ErrorCode::ConditionNotFound, "Condition not found")
                    .with_detail("condition", key.to_string())
            })?;
            let matched = cursor.matched().contains(key);
            Ok(Outcome::Diagnosis(Verdict::from_condition(condition, matched)))
        }
        ChecklistKind::RankAll => {
            let mut verdicts: Vec<Verdict> = cursor
                .matched()
                .iter()
                .filter_map(|key| kb.condition(key))
                .map(|condition| Verdict::from_condition(condition, true))
                .collect();
            // Stable sort: catalog declaration order breaks ties.
            verdicts.sort_by(|a, b| b.likelihood().cmp(&a.likelihood()));
            verdicts.truncate(top_n);
            Ok(Outcome::Ranked(verdicts))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SessionPhase;
    use crate::domain::knowledge::{CHOICE_NO, CHOICE_YES};

    fn kb() -> KnowledgeBase {
        KnowledgeBase::load().unwrap()
    }

    fn answer(
        kb: &KnowledgeBase,
        session: &mut Session,
        choice: &str,
        policy: EvaluationPolicy,
    ) -> Transition {
        submit(kb, session, choice, policy, 3).unwrap()
    }

    /// Answers every remaining criterion of the current condition.
    fn answer_condition(
        kb: &KnowledgeBase,
        session: &mut Session,
        choices: &[&str],
        policy: EvaluationPolicy,
    ) -> Transition {
        let mut last = None;
        for choice in choices {
            last = Some(answer(kb, session, choice, policy));
        }
        last.unwrap()
    }

    #[test]
    fn all_positive_answers_match_the_condition() {
        let kb = kb();
        let mut session = symptom_session();
        let prompt = select_symptom(&kb, &mut session, "Drooling & blisters").unwrap();
        assert_eq!(prompt.text(), "Is the cow drooling or foaming at the mouth?");
        assert_eq!(prompt.progress(), Some((1, 5)));
        assert_eq!(session.phase(), SessionPhase::InProgress);

        let transition = answer_condition(
            &kb,
            &mut session,
            &[CHOICE_YES; 5],
            EvaluationPolicy::Exhaustive,
        );
        match transition {
            Transition::Completed(Outcome::Diagnosis(verdict)) => {
                assert!(verdict.matched());
                assert_eq!(verdict.key().as_str(), "fmd");
                assert_eq!(verdict.condition_name(), "Foot-and-Mouth Disease");
                assert!(verdict.likelihood().is_some());
            }
            other => panic!("expected completion, got {:?}", other),
        }
    }

    #[test]
    fn one_negative_answer_breaks_the_match() {
        let kb = kb();
        let mut session = symptom_session();
        select_symptom(&kb, &mut session, "Drooling & blisters").unwrap();

        let transition = answer_condition(
            &kb,
            &mut session,
            &[CHOICE_YES, CHOICE_NO, CHOICE_YES, CHOICE_YES, CHOICE_YES],
            EvaluationPolicy::Exhaustive,
        );
        match transition {
            Transition::Completed(Outcome::Diagnosis(verdict)) => {
                assert!(!verdict.matched());
                assert!(verdict.likelihood().is_none());
                // Guidance text is still available for display.
                assert!(!verdict.treatment().is_empty());
            }
            other => panic!("expected completion, got {:?}", other),
        }
        assert_eq!(session.answers().len(), 5);
    }

    #[test]
    fn short_circuit_skips_rest_of_failed_condition() {
        let kb = kb();
        let mut session = symptom_session();
        select_symptom(&kb, &mut session, "Drooling & blisters").unwrap();

        let transition = answer(&kb, &mut session, CHOICE_NO, EvaluationPolicy::ShortCircuit);
        match transition {
            Transition::Completed(Outcome::Diagnosis(verdict)) => assert!(!verdict.matched()),
            other => panic!("expected completion, got {:?}", other),
        }
        assert_eq!(session.answers().len(), 1);
    }

    #[test]
    fn preselected_condition_runs_without_symptom_selection() {
        let kb = kb();
        let key = ConditionKey::new("blackleg").unwrap();
        let mut session = condition_session(&kb, &key).unwrap();

        let prompt = current_prompt(&kb, &session).unwrap();
        assert_eq!(prompt.progress().map(|(n, _)| n), Some(1));

        let count = kb.condition(&key).unwrap().criteria().len();
        let transition = answer_condition(
            &kb,
            &mut session,
            &vec![CHOICE_YES; count],
            EvaluationPolicy::Exhaustive,
        );
        match transition {
            Transition::Completed(Outcome::Diagnosis(verdict)) => {
                assert!(verdict.matched());
                assert_eq!(verdict.key().as_str(), "blackleg");
            }
            other => panic!("expected completion, got {:?}", other),
        }
    }

    #[test]
    fn preselected_condition_must_exist() {
        let kb = kb();
        let key = ConditionKey::new("dragon_pox").unwrap();
        let err = condition_session(&kb, &key).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConditionNotFound);
    }

    #[test]
    fn unknown_symptom_label_is_rejected() {
        let kb = kb();
        let mut session = symptom_session();
        let err = select_symptom(&kb, &mut session, "Glowing horns").unwrap_err();
        assert_eq!(err.code, ErrorCode::SymptomNotFound);
        assert_eq!(session.cursor(), &Cursor::SymptomSelection);
    }

    #[test]
    fn symptom_selection_cannot_be_repeated() {
        let kb = kb();
        let mut session = symptom_session();
        select_symptom(&kb, &mut session, "Skin nodules").unwrap();
        let err = select_symptom(&kb, &mut session, "Skin nodules").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidState);
    }

    #[test]
    fn unknown_choice_leaves_cursor_in_place() {
        let kb = kb();
        let mut session = symptom_session();
        select_symptom(&kb, &mut session, "Red or dark urine").unwrap();
        let before = session.cursor().clone();

        let err = submit(&kb, &mut session, "Perhaps", EvaluationPolicy::Exhaustive, 3)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownChoice);
        assert_eq!(session.cursor(), &before);
        assert!(session.answers().is_empty());
    }

    #[test]
    fn enumerated_criterion_accepts_its_extra_choice() {
        let kb = kb();
        let mut session = symptom_session();
        select_symptom(&kb, &mut session, "Red or dark urine").unwrap();

        // Four yes/no criteria, then the tick question with a third choice.
        let transition = answer_condition(
            &kb,
            &mut session,
            &[CHOICE_YES, CHOICE_YES, CHOICE_YES, CHOICE_YES, "Not checked"],
            EvaluationPolicy::Exhaustive,
        );
        match transition {
            Transition::Completed(Outcome::Diagnosis(verdict)) => {
                // "Not checked" is not in the positive set.
                assert!(!verdict.matched());
            }
            other => panic!("expected completion, got {:?}", other),
        }
    }

    #[test]
    fn rank_all_orders_matches_by_likelihood() {
        let kb = kb();
        let mut session = rank_all_session(&kb);

        // Match every condition: answer Yes to everything.
        let mut transition = None;
        loop {
            let prompt = current_prompt(&kb, &session).unwrap();
            assert!(prompt.choices().iter().any(|c| c == CHOICE_YES));
            let t = answer(&kb, &mut session, CHOICE_YES, EvaluationPolicy::Exhaustive);
            if t.is_completed() {
                transition = Some(t);
                break;
            }
        }

        match transition {
            Some(Transition::Completed(Outcome::Ranked(verdicts))) => {
                assert_eq!(verdicts.len(), 3);
                // fmd 80, babesiosis 75, then cbpp/lsd tie at 70 broken
                // by catalog order.
                assert_eq!(verdicts[0].key().as_str(), "fmd");
                assert_eq!(verdicts[1].key().as_str(), "babesiosis");
                assert_eq!(verdicts[2].key().as_str(), "cbpp");
            }
            other => panic!("expected ranking, got {:?}", other),
        }
    }

    #[test]
    fn rank_all_with_no_matches_yields_empty_ranking() {
        let kb = kb();
        let mut session = rank_all_session(&kb);

        // Short-circuit: one No per condition ends it quickly.
        let mut last;
        loop {
            last = answer(&kb, &mut session, CHOICE_NO, EvaluationPolicy::ShortCircuit);
            if last.is_completed() {
                break;
            }
        }
        match last {
            Transition::Completed(Outcome::Ranked(verdicts)) => assert!(verdicts.is_empty()),
            other => panic!("expected ranking, got {:?}", other),
        }
        // One answer per condition under short-circuit.
        assert_eq!(session.answers().len(), kb.conditions().len());
    }

    #[test]
    fn exhaustive_rank_all_asks_every_criterion() {
        let kb = kb();
        let mut session = rank_all_session(&kb);
        let total: usize = kb.conditions().iter().map(|c| c.criteria().len()).sum();

        let mut answered = 0;
        loop {
            let t = answer(&kb, &mut session, CHOICE_NO, EvaluationPolicy::Exhaustive);
            answered += 1;
            if t.is_completed() {
                break;
            }
        }
        assert_eq!(answered, total);
    }
}
