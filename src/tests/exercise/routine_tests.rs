use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

use crate::config::ExerciseConfig;
use crate::error::{Outcome, Stage};
use crate::exercise::{Exercise, FaultAt, Mode, NoFault};
use crate::sink::{RecordingSink, SinkEvent};

fn write_poem(dir: &Path, count: usize) {
    std::fs::create_dir_all(dir.join("poem-two")).unwrap();
    for n in 1..=count {
        std::fs::write(
            dir.join(format!("poem-two/stanza-{n:02}.txt")),
            format!("stanza {n}"),
        )
        .unwrap();
    }
}

fn make_exercise(dir: &Path) -> Exercise {
    let config = ExerciseConfig::default()
        .with_base_dir(dir)
        .with_jitter_ms(0);
    Exercise::from_config(config)
}

#[tokio::test]
async fn problem_a_reads_first_two_stanzas() {
    let dir = tempfile::tempdir().unwrap();
    write_poem(dir.path(), 8);
    let sink = RecordingSink::new();

    make_exercise(dir.path()).problem_a(&sink).await;

    let mut displayed = sink.displayed();
    displayed.sort();
    assert_eq!(displayed, vec!["stanza 1", "stanza 2"]);
    assert_eq!(sink.events().last(), Some(&SinkEvent::Done));
}

#[tokio::test]
async fn problem_b_reads_all_stanzas_with_jitter() {
    let dir = tempfile::tempdir().unwrap();
    write_poem(dir.path(), 8);
    let config = ExerciseConfig::default()
        .with_base_dir(dir.path())
        .with_jitter_ms(20);
    let sink = RecordingSink::new();

    Exercise::from_config(config).problem_b(&sink).await;

    assert_eq!(sink.displayed().len(), 8);
    assert_eq!(sink.done_count(), 1);
    assert_eq!(sink.events().last(), Some(&SinkEvent::Done));
}

#[tokio::test]
async fn problem_c_reads_in_order() {
    let dir = tempfile::tempdir().unwrap();
    write_poem(dir.path(), 8);
    let sink = RecordingSink::new();

    make_exercise(dir.path()).problem_c(&sink).await.unwrap();

    let expected: Vec<String> = (1..=8).map(|n| format!("stanza {n}")).collect();
    assert_eq!(sink.displayed(), expected);
    assert_eq!(sink.done_count(), 1);
}

#[tokio::test]
async fn problem_c_propagates_missing_stanza() {
    let dir = tempfile::tempdir().unwrap();
    write_poem(dir.path(), 5);
    let sink = RecordingSink::new();

    let exercise = make_exercise(dir.path());
    let err = exercise.problem_c(&sink).await.unwrap_err();
    assert_eq!(err.target, "poem-two/stanza-06.txt");
    assert_eq!(sink.displayed().len(), 5);
    assert_eq!(sink.done_count(), 0);

    // `run` lets the failure escape for C.
    assert!(exercise.run(Mode::C, &RecordingSink::new()).await.is_err());
}

#[tokio::test]
async fn problem_d_reports_injected_fault_and_stops() {
    let dir = tempfile::tempdir().unwrap();
    write_poem(dir.path(), 8);
    let sink = RecordingSink::new();

    let exercise = make_exercise(dir.path()).with_fault_plan(Arc::new(FaultAt(2)));
    let outcome = exercise.problem_d(&sink).await;

    let err = match outcome {
        Outcome::Failure(e) => e,
        Outcome::Success => panic!("fault should have been injected"),
    };
    assert_eq!(err.target, "wrong-file-name-3.txt");
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(
        sink.events(),
        vec![
            SinkEvent::Display("stanza 1".into()),
            SinkEvent::Display("stanza 2".into()),
            SinkEvent::Report {
                stage: Stage::Read,
                target: "wrong-file-name-3.txt".into(),
                kind: ErrorKind::NotFound,
            },
            SinkEvent::Done,
        ]
    );
}

#[tokio::test]
async fn problem_d_fault_index_from_config() {
    let dir = tempfile::tempdir().unwrap();
    write_poem(dir.path(), 8);
    let config = ExerciseConfig::default()
        .with_base_dir(dir.path())
        .with_jitter_ms(0)
        .with_fault_index(0);
    let sink = RecordingSink::new();

    let outcome = Exercise::from_config(config).problem_d(&sink).await;

    assert_eq!(
        outcome.failure().map(|e| e.target.as_str()),
        Some("wrong-file-name-1.txt")
    );
    assert!(sink.displayed().is_empty());
}

#[tokio::test]
async fn problem_d_without_fault_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    write_poem(dir.path(), 8);
    let sink = RecordingSink::new();

    let exercise = make_exercise(dir.path()).with_fault_plan(Arc::new(NoFault));
    assert!(exercise.problem_d(&sink).await.is_success());
    assert_eq!(sink.displayed().len(), 8);
}

#[tokio::test]
async fn problem_e_writes_and_notes() {
    let dir = tempfile::tempdir().unwrap();
    let sink = RecordingSink::new();

    let name = make_exercise(dir.path()).problem_e(&sink).await.unwrap();

    assert_eq!(name, "poem-three.txt");
    let written = std::fs::read_to_string(dir.path().join("poem-three.txt")).unwrap();
    assert_eq!(written, "Lina and Caryn say hi");
    assert_eq!(
        sink.events(),
        vec![SinkEvent::Note("poem-three.txt has finished writing".into())]
    );
}

#[tokio::test]
async fn problem_e_reports_unwritable_target() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = ExerciseConfig::default()
        .with_base_dir(dir.path())
        .with_jitter_ms(0);
    config.write_target = "missing-dir/poem-three.txt".into();
    let exercise = Exercise::from_config(config);
    let sink = RecordingSink::new();

    let err = exercise.problem_e(&sink).await.unwrap_err();
    assert_eq!(err.stage, Stage::Write);
    assert_eq!(sink.report_count(), 1);

    // `run` swallows it after reporting.
    assert!(exercise.run(Mode::E, &sink).await.is_ok());
    assert_eq!(sink.report_count(), 2);
}

#[tokio::test]
async fn run_all_executes_modes_in_given_order() {
    let dir = tempfile::tempdir().unwrap();
    write_poem(dir.path(), 8);
    let sink = RecordingSink::new();

    let exercise = make_exercise(dir.path()).with_fault_plan(Arc::new(FaultAt(0)));
    exercise
        .run_all(&[Mode::E, Mode::D, Mode::A], &sink)
        .await
        .unwrap();

    let events = sink.events();
    assert_eq!(
        events[0],
        SinkEvent::Note("poem-three.txt has finished writing".into())
    );
    assert!(matches!(events[1], SinkEvent::Report { .. }));
    assert_eq!(events[2], SinkEvent::Done);
    // A: two stanzas and its own done.
    assert_eq!(events.len(), 6);
    assert_eq!(sink.done_count(), 2);
}
