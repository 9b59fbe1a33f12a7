//! Property and scenario tests for the task collection snapshot.

use super::helpers::{id, task, task_titled};
use crate::dashboard::domain::{SortOrder, StatusFilter, TaskCollection};
use crate::task::domain::{Task, TaskId, TaskStatus};
use rstest::{fixture, rstest};

fn ids(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|task| task.id().as_str()).collect()
}

#[fixture]
fn mixed_snapshot() -> Vec<Task> {
    vec![
        task("a", TaskStatus::Pending, "2025-01-10"),
        task("b", TaskStatus::Completed, "not-a-date"),
        task("c", TaskStatus::Pending, "2025-01-05"),
        task("d", TaskStatus::Completed, ""),
        task("e", TaskStatus::Pending, "2025-01-20"),
    ]
}

#[rstest]
fn by_status_all_returns_the_snapshot_in_original_order(mixed_snapshot: Vec<Task>) {
    let mut collection = TaskCollection::new();
    collection.load(mixed_snapshot.clone());

    assert_eq!(collection.by_status(&StatusFilter::All), mixed_snapshot);
}

#[rstest]
fn by_status_partitions_on_equality(mixed_snapshot: Vec<Task>) {
    let mut collection = TaskCollection::new();
    collection.load(mixed_snapshot);

    let pending = collection.by_status(&StatusFilter::Only(TaskStatus::Pending));
    assert_eq!(ids(&pending), vec!["a", "c", "e"]);

    let completed = collection.by_status(&StatusFilter::Only(TaskStatus::Completed));
    assert_eq!(ids(&completed), vec!["b", "d"]);
}

#[rstest]
fn unknown_statuses_appear_only_under_the_all_filter() {
    let mut collection = TaskCollection::new();
    collection.load(vec![
        task("a", TaskStatus::Pending, "2025-01-10"),
        task("b", TaskStatus::Other("urgent".to_owned()), "2025-01-05"),
    ]);

    assert_eq!(collection.by_status(&StatusFilter::All).len(), 2);
    let pending = collection.by_status(&StatusFilter::Only(TaskStatus::Pending));
    assert_eq!(ids(&pending), vec!["a"]);
}

#[rstest]
fn ascending_sort_places_undated_tasks_last(mixed_snapshot: Vec<Task>) {
    let mut collection = TaskCollection::new();
    collection.load(mixed_snapshot);

    let sorted = collection.sorted_by_due_date(SortOrder::Ascending);
    assert_eq!(ids(&sorted), vec!["c", "a", "e", "b", "d"]);
}

#[rstest]
fn descending_sort_places_undated_tasks_first(mixed_snapshot: Vec<Task>) {
    let mut collection = TaskCollection::new();
    collection.load(mixed_snapshot);

    let sorted = collection.sorted_by_due_date(SortOrder::Descending);
    assert_eq!(ids(&sorted), vec!["b", "d", "e", "a", "c"]);
}

#[rstest]
fn descending_mirrors_ascending_for_distinct_dated_tasks(mixed_snapshot: Vec<Task>) {
    let mut collection = TaskCollection::new();
    collection.load(mixed_snapshot);

    let dated_ascending: Vec<TaskId> = collection
        .sorted_by_due_date(SortOrder::Ascending)
        .iter()
        .filter(|task| task.due_date().is_valid())
        .map(|task| task.id().clone())
        .collect();
    let dated_descending: Vec<TaskId> = collection
        .sorted_by_due_date(SortOrder::Descending)
        .iter()
        .filter(|task| task.due_date().is_valid())
        .map(|task| task.id().clone())
        .collect();

    let mut reversed = dated_ascending;
    reversed.reverse();
    assert_eq!(reversed, dated_descending);
}

#[rstest]
fn equal_due_dates_keep_snapshot_order_in_both_directions() {
    let mut collection = TaskCollection::new();
    collection.load(vec![
        task("a", TaskStatus::Pending, "2025-01-05"),
        task("b", TaskStatus::Pending, "2025-01-05"),
        task("c", TaskStatus::Pending, "2025-01-01"),
    ]);

    let ascending = collection.sorted_by_due_date(SortOrder::Ascending);
    assert_eq!(ids(&ascending), vec!["c", "a", "b"]);

    let descending = collection.sorted_by_due_date(SortOrder::Descending);
    assert_eq!(ids(&descending), vec!["a", "b", "c"]);
}

#[rstest]
fn undated_tasks_keep_snapshot_order_among_themselves(mixed_snapshot: Vec<Task>) {
    let mut collection = TaskCollection::new();
    collection.load(mixed_snapshot);

    let ascending = collection.sorted_by_due_date(SortOrder::Ascending);
    let undated: Vec<&str> = ascending
        .iter()
        .filter(|task| !task.due_date().is_valid())
        .map(|task| task.id().as_str())
        .collect();
    assert_eq!(undated, vec!["b", "d"]);
}

#[rstest]
fn remove_is_idempotent() {
    let mut collection = TaskCollection::new();
    collection.load(vec![
        task("a", TaskStatus::Pending, "2025-01-10"),
        task("b", TaskStatus::Pending, "2025-01-05"),
    ]);

    collection.remove(&id("a"));
    let after_first: Vec<String> = collection
        .iter()
        .map(|task| task.id().as_str().to_owned())
        .collect();
    collection.remove(&id("a"));
    let after_second: Vec<String> = collection
        .iter()
        .map(|task| task.id().as_str().to_owned())
        .collect();

    assert_eq!(after_first, after_second);
    assert_eq!(collection.len(), 1);
    assert!(!collection.contains(&id("a")));
}

#[rstest]
fn load_replaces_the_previous_snapshot() {
    let mut collection = TaskCollection::new();
    collection.load(vec![task("a", TaskStatus::Pending, "2025-01-10")]);
    collection.load(vec![task("b", TaskStatus::Pending, "2025-01-05")]);

    assert!(!collection.contains(&id("a")));
    assert!(collection.contains(&id("b")));
    assert_eq!(collection.len(), 1);
}

#[rstest]
fn load_keeps_first_position_and_last_value_for_duplicate_ids() {
    let mut collection = TaskCollection::new();
    collection.load(vec![
        task_titled("a", "Early copy", TaskStatus::Pending, "2025-01-10"),
        task("b", TaskStatus::Pending, "2025-01-05"),
        task_titled("a", "Late copy", TaskStatus::Pending, "2025-01-10"),
    ]);

    assert_eq!(collection.len(), 2);
    let snapshot = collection.by_status(&StatusFilter::All);
    assert_eq!(ids(&snapshot), vec!["a", "b"]);
    let kept = collection.get(&id("a")).expect("duplicate id kept");
    assert_eq!(kept.title(), "Late copy");
}

#[rstest]
fn mixed_status_pair_sorts_by_due_date_and_filters_by_status() {
    let first = task("1", TaskStatus::Pending, "2025-01-10");
    let second = task("2", TaskStatus::Completed, "2025-01-05");
    let mut collection = TaskCollection::new();
    collection.load(vec![first, second.clone()]);

    let sorted = collection.sorted_by_due_date(SortOrder::Ascending);
    assert_eq!(ids(&sorted), vec!["2", "1"]);

    let completed = collection.by_status(&StatusFilter::Only(TaskStatus::Completed));
    assert_eq!(completed, vec![second]);
}

#[rstest]
fn unparseable_due_date_sorts_after_the_dated_task() {
    let mut collection = TaskCollection::new();
    collection.load(vec![
        task("1", TaskStatus::Pending, "not-a-date"),
        task("2", TaskStatus::Pending, "2025-02-01"),
    ]);

    let sorted = collection.sorted_by_due_date(SortOrder::Ascending);
    assert_eq!(ids(&sorted), vec!["2", "1"]);
}
