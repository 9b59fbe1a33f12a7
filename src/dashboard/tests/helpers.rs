//! Shared builders and doubles for dashboard tests.

use crate::dashboard::services::ConfirmDelete;
use crate::task::domain::{DueDate, Task, TaskId, TaskStatus};

pub fn id(raw: &str) -> TaskId {
    TaskId::new(raw).expect("valid task id")
}

pub fn task(raw_id: &str, status: TaskStatus, due_date: &str) -> Task {
    task_titled(raw_id, &format!("Task {raw_id}"), status, due_date)
}

pub fn task_titled(raw_id: &str, title: &str, status: TaskStatus, due_date: &str) -> Task {
    Task::new(id(raw_id), title, None, status, DueDate::new(due_date)).expect("valid task")
}

/// Confirmation gate that always proceeds.
pub struct AcceptAll;

impl ConfirmDelete for AcceptAll {
    fn confirm(&self, _id: &TaskId) -> bool {
        true
    }
}

/// Confirmation gate that always declines.
pub struct DeclineAll;

impl ConfirmDelete for DeclineAll {
    fn confirm(&self, _id: &TaskId) -> bool {
        false
    }
}
