//! Domain-focused tests for task records and their value types.

use crate::task::domain::{
    DueDate, NewTask, ParseTaskStatusError, Task, TaskDomainError, TaskId, TaskPatch, TaskStatus,
};
use chrono::NaiveDate;
use rstest::rstest;
use uuid::Uuid;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

fn task(id: &str, status: TaskStatus, due_date: &str) -> Task {
    Task::new(
        TaskId::new(id).expect("valid task id"),
        format!("Task {id}"),
        None,
        status,
        DueDate::new(due_date),
    )
    .expect("valid task")
}

#[rstest]
#[case("")]
#[case("   ")]
fn task_id_rejects_blank_values(#[case] raw: &str) {
    assert_eq!(TaskId::new(raw), Err(TaskDomainError::EmptyTaskId));
}

#[rstest]
fn task_id_preserves_remote_value() {
    let id = TaskId::new("a1b2").expect("valid task id");
    assert_eq!(id.as_str(), "a1b2");
    assert_eq!(id.to_string(), "a1b2");
}

#[rstest]
fn task_id_from_uuid_is_never_blank() {
    let id = TaskId::from_uuid(Uuid::new_v4());
    assert!(!id.as_str().trim().is_empty());
}

#[rstest]
#[case("pending", TaskStatus::Pending)]
#[case("Completed", TaskStatus::Completed)]
#[case(" PENDING ", TaskStatus::Pending)]
fn status_from_remote_recognises_documented_values(
    #[case] raw: &str,
    #[case] expected: TaskStatus,
) {
    assert_eq!(TaskStatus::from_remote(raw), expected);
}

#[rstest]
fn status_from_remote_preserves_unknown_values_verbatim() {
    let status = TaskStatus::from_remote("urgent");
    assert_eq!(status, TaskStatus::Other("urgent".to_owned()));
    assert_eq!(status.as_str(), "urgent");
    assert!(!status.is_completed());
}

#[rstest]
fn status_strict_parse_rejects_unknown_values() {
    let result = TaskStatus::try_from("urgent");
    assert_eq!(result, Err(ParseTaskStatusError("urgent".to_owned())));
}

#[rstest]
fn status_serde_round_trips_through_the_wire_string() {
    let json = serde_json::to_string(&TaskStatus::Completed).expect("serialise status");
    assert_eq!(json, "\"completed\"");
    let decoded: TaskStatus = serde_json::from_str("\"urgent\"").expect("deserialise status");
    assert_eq!(decoded, TaskStatus::Other("urgent".to_owned()));
}

#[rstest]
fn due_date_parses_iso_calendar_dates() {
    let due = DueDate::new("2025-01-10");
    assert_eq!(due.date(), Some(date(2025, 1, 10)));
    assert!(due.is_valid());
}

#[rstest]
fn due_date_parses_rfc3339_timestamps() {
    let due = DueDate::new("2025-01-10T09:30:00.000Z");
    assert_eq!(due.date(), Some(date(2025, 1, 10)));
}

#[rstest]
#[case("not-a-date")]
#[case("")]
#[case("2025-13-40")]
fn due_date_tolerates_unparseable_values(#[case] raw: &str) {
    let due = DueDate::new(raw);
    assert!(!due.is_valid());
    assert_eq!(due.date(), None);
    assert_eq!(due.raw(), raw);
}

#[rstest]
fn new_task_rejects_empty_title() {
    let result = NewTask::new("   ", TaskStatus::Pending, DueDate::new("2025-01-10"));
    assert_eq!(result, Err(TaskDomainError::EmptyTitle));
}

#[rstest]
fn new_task_into_task_carries_every_field() {
    let new_task = NewTask::new("Write report", TaskStatus::Pending, DueDate::new("2025-01-10"))
        .expect("valid payload")
        .with_description("Quarterly numbers");
    let id = TaskId::new("7").expect("valid task id");
    let built = new_task.into_task(id.clone()).expect("task from payload");

    assert_eq!(built.id(), &id);
    assert_eq!(built.title(), "Write report");
    assert_eq!(built.description(), Some("Quarterly numbers"));
    assert_eq!(built.status(), &TaskStatus::Pending);
    assert_eq!(built.due_date().raw(), "2025-01-10");
}

#[rstest]
fn task_collapses_blank_description_to_absent() {
    let built = Task::new(
        TaskId::new("7").expect("valid task id"),
        "Write report",
        Some("   ".to_owned()),
        TaskStatus::Pending,
        DueDate::new("2025-01-10"),
    )
    .expect("valid task");
    assert_eq!(built.description(), None);
}

#[rstest]
fn open_task_past_its_due_date_is_overdue() {
    let subject = task("1", TaskStatus::Pending, "2025-01-10");
    assert!(subject.is_overdue_on(date(2025, 2, 1)));
}

#[rstest]
fn completed_task_past_its_due_date_is_not_overdue() {
    let subject = task("1", TaskStatus::Completed, "2025-01-10");
    assert!(!subject.is_overdue_on(date(2025, 2, 1)));
}

#[rstest]
fn task_due_today_is_not_overdue() {
    let subject = task("1", TaskStatus::Pending, "2025-01-10");
    assert!(!subject.is_overdue_on(date(2025, 1, 10)));
}

#[rstest]
fn task_without_a_parseable_due_date_is_never_overdue() {
    let subject = task("1", TaskStatus::Pending, "not-a-date");
    assert!(!subject.is_overdue_on(date(2025, 2, 1)));
}

#[rstest]
fn apply_patch_updates_only_patched_fields() {
    let mut subject = task("1", TaskStatus::Pending, "2025-01-10");
    let patch = TaskPatch::new()
        .with_status(TaskStatus::Completed)
        .with_description("done early".to_owned());

    subject.apply_patch(&patch);

    assert_eq!(subject.title(), "Task 1");
    assert_eq!(subject.status(), &TaskStatus::Completed);
    assert_eq!(subject.description(), Some("done early"));
    assert_eq!(subject.due_date().raw(), "2025-01-10");
}

#[rstest]
fn apply_patch_ignores_blank_titles() {
    let mut subject = task("1", TaskStatus::Pending, "2025-01-10");
    subject.apply_patch(&TaskPatch::new().with_title("  "));
    assert_eq!(subject.title(), "Task 1");
}

#[rstest]
fn empty_patch_reports_itself_empty() {
    assert!(TaskPatch::new().is_empty());
    assert!(!TaskPatch::new().with_title("x").is_empty());
}
