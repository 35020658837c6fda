//! End-to-end flows through the handlers: start, answer, complete, log.

use std::sync::Arc;

use proptest::prelude::*;
use tempfile::TempDir;

use diagarp::adapters::log::FileAnswerLog;
use diagarp::application::handlers::diagnosis::{
    DiagnosisMode, RestartSessionHandler, SelectSymptomCommand, SelectSymptomHandler,
    StartDiagnosisCommand, StartDiagnosisHandler, SubmitAnswerCommand, SubmitAnswerHandler,
};
use diagarp::config::{AppConfig, EngineConfig};
use diagarp::domain::evaluator::Transition;
use diagarp::domain::foundation::SessionPhase;
use diagarp::domain::knowledge::{KnowledgeBase, CHOICE_NO, CHOICE_YES};
use diagarp::domain::session::{Outcome, Session};
use diagarp::ports::AnswerLog;

struct Fixture {
    knowledge: Arc<KnowledgeBase>,
    log: Arc<FileAnswerLog>,
    start: StartDiagnosisHandler,
    select: SelectSymptomHandler,
    submit: SubmitAnswerHandler,
    restart: RestartSessionHandler,
    _dir: TempDir,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn fixture(engine: EngineConfig) -> Fixture {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let knowledge = Arc::new(KnowledgeBase::load().unwrap());
    let log = Arc::new(FileAnswerLog::new(dir.path().join("symptom_logs.json")));
    Fixture {
        start: StartDiagnosisHandler::new(Arc::clone(&knowledge)),
        select: SelectSymptomHandler::new(Arc::clone(&knowledge)),
        submit: SubmitAnswerHandler::new(
            Arc::clone(&knowledge),
            Arc::clone(&log) as Arc<dyn AnswerLog>,
            engine,
            1,
        ),
        restart: RestartSessionHandler::new(Arc::clone(&knowledge)),
        knowledge,
        log,
        _dir: dir,
    }
}

async fn answer(fx: &Fixture, session: &mut Session, choice: &str) -> Transition {
    fx.submit
        .handle(
            session,
            SubmitAnswerCommand {
                choice: choice.to_string(),
            },
        )
        .await
        .unwrap()
        .transition
}

#[tokio::test]
async fn tree_run_from_start_to_logged_verdict() {
    let fx = fixture(EngineConfig::default());
    let started = fx
        .start
        .handle(StartDiagnosisCommand {
            mode: DiagnosisMode::Tree,
        })
        .unwrap();
    let mut session = started.session;
    assert_eq!(
        started.prompt.unwrap().text(),
        "What is the primary symptom observed?"
    );

    answer(&fx, &mut session, "Coughing or laboured breathing").await;
    for _ in 0..3 {
        answer(&fx, &mut session, CHOICE_YES).await;
    }
    let last = answer(&fx, &mut session, CHOICE_YES).await;

    match last {
        Transition::Completed(Outcome::Diagnosis(verdict)) => {
            assert_eq!(verdict.key().as_str(), "brd");
            assert_eq!(verdict.condition_name(), "Bovine Respiratory Disease (BRD)");
        }
        other => panic!("expected completion, got {:?}", other),
    }
    assert!(session.is_complete());

    let entries = fx.log.read_all().await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].disease, "brd");
    assert_eq!(entries[0].responses.len(), 5);
}

#[tokio::test]
async fn checklist_run_matches_and_logs_the_condition() {
    let fx = fixture(EngineConfig::default());
    let started = fx
        .start
        .handle(StartDiagnosisCommand {
            mode: DiagnosisMode::Checklist,
        })
        .unwrap();
    let mut session = started.session;
    assert!(started.symptoms.contains(&"Drooling & blisters".to_string()));

    let first = fx
        .select
        .handle(
            &mut session,
            SelectSymptomCommand {
                symptom: "Drooling & blisters".to_string(),
            },
        )
        .unwrap();
    assert_eq!(first.prompt.progress(), Some((1, 5)));

    let mut last = None;
    for _ in 0..5 {
        last = Some(answer(&fx, &mut session, CHOICE_YES).await);
    }
    match last {
        Some(Transition::Completed(Outcome::Diagnosis(verdict))) => {
            assert!(verdict.matched());
            assert_eq!(verdict.key().as_str(), "fmd");
        }
        other => panic!("expected completion, got {:?}", other),
    }

    let entries = fx.log.read_all().await.unwrap();
    assert_eq!(entries[0].disease, "fmd");
    assert_eq!(entries[0].responses.len(), 5);
}

#[tokio::test]
async fn unmatched_checklist_run_logs_none() {
    let fx = fixture(EngineConfig::default());
    let mut session = fx
        .start
        .handle(StartDiagnosisCommand {
            mode: DiagnosisMode::Checklist,
        })
        .unwrap()
        .session;
    fx.select
        .handle(
            &mut session,
            SelectSymptomCommand {
                symptom: "Drooling & blisters".to_string(),
            },
        )
        .unwrap();

    loop {
        if answer(&fx, &mut session, CHOICE_NO).await.is_completed() {
            break;
        }
    }

    let entries = fx.log.read_all().await.unwrap();
    assert_eq!(entries[0].disease, "none");
    // The full answer trail is still kept for the herd-health record.
    assert_eq!(entries[0].responses.len(), 5);
}

#[tokio::test]
async fn rank_all_run_reports_top_matches_in_order() {
    let fx = fixture(EngineConfig::default());
    let mut session = fx
        .start
        .handle(StartDiagnosisCommand {
            mode: DiagnosisMode::RankAll,
        })
        .unwrap()
        .session;

    let mut last;
    loop {
        last = answer(&fx, &mut session, CHOICE_YES).await;
        if last.is_completed() {
            break;
        }
    }
    match last {
        Transition::Completed(Outcome::Ranked(verdicts)) => {
            assert_eq!(verdicts.len(), 3);
            assert_eq!(verdicts[0].key().as_str(), "fmd");
            assert_eq!(verdicts[1].key().as_str(), "babesiosis");
        }
        other => panic!("expected ranking, got {:?}", other),
    }

    let entries = fx.log.read_all().await.unwrap();
    assert_eq!(entries[0].disease, "fmd");
}

#[tokio::test]
async fn rank_all_without_matches_logs_none() {
    let fx = fixture(EngineConfig {
        policy: diagarp::domain::evaluator::checklist::EvaluationPolicy::ShortCircuit,
        top_n: 3,
    });
    let mut session = fx
        .start
        .handle(StartDiagnosisCommand {
            mode: DiagnosisMode::RankAll,
        })
        .unwrap()
        .session;

    loop {
        if answer(&fx, &mut session, CHOICE_NO).await.is_completed() {
            break;
        }
    }
    assert_eq!(
        session.answers().len(),
        fx.knowledge.conditions().len(),
        "short-circuit asks one criterion per condition"
    );

    let entries = fx.log.read_all().await.unwrap();
    assert_eq!(entries[0].disease, "none");
}

#[tokio::test]
async fn restart_discards_answers_and_keeps_the_old_log_entry() {
    let fx = fixture(EngineConfig::default());
    let mut session = fx
        .start
        .handle(StartDiagnosisCommand {
            mode: DiagnosisMode::Tree,
        })
        .unwrap()
        .session;

    answer(&fx, &mut session, "Eye discharge or cloudiness").await;
    answer(&fx, &mut session, CHOICE_YES).await;
    assert!(session.is_complete());

    let restarted = fx.restart.handle(&session).unwrap();
    let mut fresh = restarted.session;
    assert_ne!(fresh.id(), session.id());
    assert_eq!(fresh.phase(), SessionPhase::InProgress);
    assert!(fresh.answers().is_empty());

    // The fresh session runs independently and appends its own entry.
    answer(&fx, &mut fresh, "Eye discharge or cloudiness").await;
    answer(&fx, &mut fresh, CHOICE_NO).await;

    let entries = fx.log.read_all().await.unwrap();
    let diseases: Vec<&str> = entries.iter().map(|e| e.disease.as_str()).collect();
    assert_eq!(diseases, vec!["ibk", "unknown"]);
}

#[tokio::test]
async fn successive_runs_append_in_completion_order() {
    let fx = fixture(EngineConfig::default());
    for symptom in ["Skin nodules", "Late-term abortion"] {
        let mut session = fx
            .start
            .handle(StartDiagnosisCommand {
                mode: DiagnosisMode::Checklist,
            })
            .unwrap()
            .session;
        fx.select
            .handle(
                &mut session,
                SelectSymptomCommand {
                    symptom: symptom.to_string(),
                },
            )
            .unwrap();
        loop {
            if answer(&fx, &mut session, CHOICE_YES).await.is_completed() {
                break;
            }
        }
    }

    let entries = fx.log.read_all().await.unwrap();
    let diseases: Vec<&str> = entries.iter().map(|e| e.disease.as_str()).collect();
    assert_eq!(diseases, vec!["lsd", "brucellosis"]);
}

#[test]
fn stock_configuration_is_valid() {
    let config = AppConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.contacts.contact_for("Nowhere"), Some("N/A"));
}

proptest! {
    /// Flipping any single positive answer to a negative one flips a
    /// full checklist match into a non-match.
    #[test]
    fn any_negative_answer_breaks_a_full_match(flip in 0usize..5) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let fx = fixture(EngineConfig::default());
            let mut session = fx
                .start
                .handle(StartDiagnosisCommand { mode: DiagnosisMode::Checklist })
                .unwrap()
                .session;
            fx.select
                .handle(&mut session, SelectSymptomCommand {
                    symptom: "Deep cough & labored breathing".to_string(),
                })
                .unwrap();

            let mut last = None;
            for idx in 0..5 {
                let choice = if idx == flip { CHOICE_NO } else { CHOICE_YES };
                last = Some(answer(&fx, &mut session, choice).await);
            }
            match last {
                Some(Transition::Completed(Outcome::Diagnosis(verdict))) => {
                    prop_assert!(!verdict.matched());
                    prop_assert!(verdict.likelihood().is_none());
                    Ok(())
                }
                other => {
                    prop_assert!(false, "expected completion, got {:?}", other);
                    Ok(())
                }
            }
        })?;
    }
}
