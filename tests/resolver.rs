use milestones_test_utils::builders::linear_chain;
use milestones_test_utils::{date, init_tracing};

use std::error::Error;

use chrono::NaiveDate;
use milestones::errors::TimelineError;
use milestones::schedule::{SkipReason, TaskDefinition, resolve, resolve_str};

type TestResult = Result<(), Box<dyn Error>>;

fn names(result: &milestones::schedule::ResolutionResult) -> Vec<&str> {
    result.resolved.iter().map(|t| t.name.as_str()).collect()
}

#[test]
fn simple_chain_adds_offsets_from_anchor() -> TestResult {
    init_tracing();

    let tasks = vec![
        TaskDefinition::root("Root"),
        TaskDefinition::after("A", "Root", 7),
        TaskDefinition::after("B", "A", 2),
    ];

    let result = resolve_str("2025-01-01", &tasks)?;

    assert_eq!(result.date_of("Root"), Some(date(2025, 1, 1)));
    assert_eq!(result.date_of("A"), Some(date(2025, 1, 8)));
    assert_eq!(result.date_of("B"), Some(date(2025, 1, 10)));
    assert!(result.diagnostics.is_empty());
    assert!(result.is_complete());

    Ok(())
}

#[test]
fn missing_dependency_skips_task_and_its_dependents() -> TestResult {
    init_tracing();

    let tasks = vec![
        TaskDefinition::root("Root"),
        TaskDefinition::after("Orphan", "Missing", 5),
        TaskDefinition::after("Child", "Orphan", 3),
    ];

    let result = resolve_str("2025-01-01", &tasks)?;

    assert_eq!(names(&result), vec!["Root"]);
    assert_eq!(result.diagnostics.len(), 2);

    assert_eq!(result.diagnostics[0].task_name, "Orphan");
    assert_eq!(
        result.diagnostics[0].reason,
        SkipReason::UnresolvedDependency {
            dependency: "Missing".to_string()
        }
    );
    assert_eq!(result.diagnostics[0].reason.to_string(), "unresolved dependency");

    assert_eq!(result.diagnostics[1].task_name, "Child");
    assert_eq!(result.diagnostics[1].reason.to_string(), "unresolved dependency");
    assert!(!result.is_complete());

    Ok(())
}

#[test]
fn root_offset_is_ignored() {
    init_tracing();

    let mut root = TaskDefinition::root("Kickoff");
    root.offset_days = 30;
    let tasks = vec![root, TaskDefinition::after("Next", "Kickoff", 1)];

    let result = resolve(date(2024, 2, 28), &tasks);

    assert_eq!(result.date_of("Kickoff"), Some(date(2024, 2, 28)));
    assert_eq!(result.date_of("Next"), Some(date(2024, 2, 29)));
}

#[test]
fn offsets_cross_month_and_year_boundaries() {
    init_tracing();

    let tasks = vec![
        TaskDefinition::root("Start"),
        TaskDefinition::after("NewYear", "Start", 2),
        TaskDefinition::after("Leap", "NewYear", 59),
    ];

    let result = resolve(date(2023, 12, 30), &tasks);

    assert_eq!(result.date_of("NewYear"), Some(date(2024, 1, 1)));
    assert_eq!(result.date_of("Leap"), Some(date(2024, 2, 29)));
}

#[test]
fn forward_reference_is_not_reordered() {
    init_tracing();

    let tasks = vec![
        TaskDefinition::root("Root"),
        TaskDefinition::after("Early", "Late", 1),
        TaskDefinition::after("Late", "Root", 2),
    ];

    let result = resolve(date(2025, 1, 1), &tasks);

    assert_eq!(
        result.resolved.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(),
        vec!["Root", "Late"]
    );
    assert!(result.is_skipped("Early"));
    assert_eq!(result.date_of("Late"), Some(date(2025, 1, 3)));
}

#[test]
fn siblings_share_a_dependency_without_affecting_each_other() {
    init_tracing();

    let tasks = vec![
        TaskDefinition::root("Root"),
        TaskDefinition::after("Hub", "Root", 10),
        TaskDefinition::after("Left", "Hub", 1),
        TaskDefinition::after("Broken", "Nowhere", 1),
        TaskDefinition::after("Right", "Hub", 5),
    ];

    let result = resolve(date(2025, 6, 1), &tasks);

    assert_eq!(names(&result), vec!["Root", "Hub", "Left", "Right"]);
    assert_eq!(result.date_of("Left"), Some(date(2025, 6, 12)));
    assert_eq!(result.date_of("Right"), Some(date(2025, 6, 16)));
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].task_name, "Broken");
}

#[test]
fn every_root_sits_on_the_anchor() {
    init_tracing();

    let tasks = vec![
        TaskDefinition::root("First"),
        TaskDefinition::root("Second"),
        TaskDefinition::after("AfterSecond", "Second", 4),
    ];

    let result = resolve(date(2025, 3, 1), &tasks);

    assert_eq!(result.date_of("First"), Some(date(2025, 3, 1)));
    assert_eq!(result.date_of("Second"), Some(date(2025, 3, 1)));
    assert_eq!(result.date_of("AfterSecond"), Some(date(2025, 3, 5)));
}

#[test]
fn overflowing_date_is_reported_and_propagates() {
    init_tracing();

    let tasks = vec![
        TaskDefinition::root("Root"),
        TaskDefinition::after("TooFar", "Root", 1),
        TaskDefinition::after("Beyond", "TooFar", 0),
    ];

    let result = resolve(NaiveDate::MAX, &tasks);

    assert_eq!(names(&result), vec!["Root"]);
    assert_eq!(result.diagnostics[0].task_name, "TooFar");
    assert_eq!(result.diagnostics[0].reason, SkipReason::DateOutOfRange);
    assert_eq!(result.diagnostics[1].task_name, "Beyond");
    assert!(matches!(
        result.diagnostics[1].reason,
        SkipReason::UnresolvedDependency { .. }
    ));
}

#[test]
fn empty_table_yields_empty_result() {
    init_tracing();

    let result = resolve(date(2025, 1, 1), &[]);
    assert!(result.resolved.is_empty());
    assert!(result.is_complete());
}

#[test]
fn invalid_anchor_aborts_without_result() {
    init_tracing();

    let tasks = vec![TaskDefinition::root("Root")];

    for bad in ["", "   ", "not-a-date", "2025-02-30", "2025/01/01"] {
        match resolve_str(bad, &tasks) {
            Err(TimelineError::InvalidAnchorDate(_)) => {}
            Err(e) => panic!("Expected InvalidAnchorDate for {bad:?}, got: {e:?}"),
            Ok(r) => panic!("Expected error for {bad:?}, got result: {r:?}"),
        }
    }
}

#[test]
fn repeated_calls_give_identical_results() -> TestResult {
    init_tracing();

    let tasks = vec![
        TaskDefinition::root("Root"),
        TaskDefinition::after("A", "Root", 3),
        TaskDefinition::after("Lost", "Ghost", 3),
    ];

    let first = resolve_str("2025-01-01", &tasks)?;
    let second = resolve_str("2025-01-01", &tasks)?;
    assert_eq!(first, second);

    Ok(())
}

#[test]
fn long_chain_accumulates_every_offset() {
    init_tracing();

    let tasks = linear_chain(100, 3);
    let result = resolve(date(2025, 1, 1), &tasks);

    assert_eq!(result.resolved.len(), 100);
    assert_eq!(result.date_of("task_99"), Some(date(2025, 10, 25)));
}
