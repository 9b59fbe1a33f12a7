//! Wire models for the remote task service.
//!
//! The record-to-domain conversion is the validating decode gate: ad-hoc
//! remote shapes never cross into the domain. A record that lacks a
//! usable identifier or title fails the decode; unknown status values and
//! missing or unparseable due dates are tolerated by design so defensive
//! rendering can still function.

use crate::task::domain::{DueDate, NewTask, Task, TaskId, TaskPatch, TaskStatus};
use crate::task::ports::{TaskRepositoryError, TaskRepositoryResult};
use serde::{Deserialize, Serialize};

/// Task record as transported by the remote service.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskRecord {
    /// Remote-assigned identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Free-text description; absent in some remote variants.
    #[serde(default)]
    pub description: Option<String>,
    /// Status string, not guaranteed to be in the documented enumeration.
    #[serde(default)]
    pub status: String,
    /// Due date string, not guaranteed to parse.
    #[serde(default)]
    pub due_date: String,
}

impl TaskRecord {
    /// Converts the record into a domain task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Decode`] when the identifier or
    /// title is empty.
    pub fn into_task(self) -> TaskRepositoryResult<Task> {
        let id = TaskId::new(self.id).map_err(TaskRepositoryError::decode)?;
        let status = TaskStatus::from_remote(&self.status);
        let due_date = DueDate::new(self.due_date);
        Task::new(id, self.title, self.description, status, due_date)
            .map_err(TaskRepositoryError::decode)
    }
}

/// Creation payload as transported to the remote service.
#[derive(Debug, Clone, Serialize)]
pub struct NewTaskRecord {
    /// Display title.
    pub title: String,
    /// Free-text description, empty when absent.
    pub description: String,
    /// Canonical status string.
    pub status: String,
    /// Due date string.
    pub due_date: String,
}

impl From<&NewTask> for NewTaskRecord {
    fn from(new_task: &NewTask) -> Self {
        Self {
            title: new_task.title().to_owned(),
            description: new_task.description().unwrap_or_default().to_owned(),
            status: new_task.status().as_str().to_owned(),
            due_date: new_task.due_date().raw().to_owned(),
        }
    }
}

/// Partial update payload; unset fields are omitted from the body.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskPatchRecord {
    /// Replacement title, when patched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Replacement description, when patched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Replacement status, when patched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Replacement due date, when patched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

impl From<&TaskPatch> for TaskPatchRecord {
    fn from(patch: &TaskPatch) -> Self {
        Self {
            title: patch.title().map(str::to_owned),
            description: patch.description().map(str::to_owned),
            status: patch.status().map(|status| status.as_str().to_owned()),
            due_date: patch.due_date().map(|due| due.raw().to_owned()),
        }
    }
}
