//! Task aggregate root and the create/update payload types.

use super::{DueDate, TaskDomainError, TaskId, TaskStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// A task exists only as a mirror of a record held by the remote task
/// service; the identifier is assigned there and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: Option<String>,
    status: TaskStatus,
    due_date: DueDate,
}

impl Task {
    /// Creates a task from remote record fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is empty or
    /// whitespace-only.
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        description: Option<String>,
        status: TaskStatus,
        due_date: DueDate,
    ) -> Result<Self, TaskDomainError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        Ok(Self {
            id,
            title,
            description: normalise_description(description),
            status,
            due_date,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the free-text description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the completion status.
    #[must_use]
    pub const fn status(&self) -> &TaskStatus {
        &self.status
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> &DueDate {
        &self.due_date
    }

    /// Returns `true` when the task is past due and still open.
    ///
    /// A task with a missing or unparseable due date is never overdue.
    #[must_use]
    pub fn is_overdue_on(&self, today: NaiveDate) -> bool {
        self.due_date
            .date()
            .is_some_and(|due| due < today && !self.status.is_completed())
    }

    /// Applies a partial update in place.
    ///
    /// Fields absent from the patch are left untouched. An empty patched
    /// title is ignored rather than violating the non-empty invariant;
    /// the remote store is the enforcement point for rejected payloads.
    pub fn apply_patch(&mut self, patch: &TaskPatch) {
        if let Some(title) = patch.title() {
            if !title.trim().is_empty() {
                self.title = title.to_owned();
            }
        }
        if let Some(description) = patch.description() {
            self.description = normalise_description(Some(description.to_owned()));
        }
        if let Some(status) = patch.status() {
            self.status = status.clone();
        }
        if let Some(due_date) = patch.due_date() {
            self.due_date = due_date.clone();
        }
    }
}

/// Payload for creating a task; the remote service assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: String,
    description: Option<String>,
    status: TaskStatus,
    due_date: DueDate,
}

impl NewTask {
    /// Creates a validated creation payload.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is empty or
    /// whitespace-only.
    pub fn new(
        title: impl Into<String>,
        status: TaskStatus,
        due_date: DueDate,
    ) -> Result<Self, TaskDomainError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        Ok(Self {
            title,
            description: None,
            status,
            due_date,
        })
    }

    /// Sets the free-text description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = normalise_description(Some(description.into()));
        self
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the free-text description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the completion status.
    #[must_use]
    pub const fn status(&self) -> &TaskStatus {
        &self.status
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> &DueDate {
        &self.due_date
    }

    /// Builds the task the remote service stored for this payload.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the payload title is
    /// empty, which a validated payload never is.
    pub fn into_task(self, id: TaskId) -> Result<Task, TaskDomainError> {
        let mut task = Task::new(id, self.title, None, self.status, self.due_date)?;
        task.description = self.description;
        Ok(task)
    }
}

/// Partial update payload; unset fields keep their stored values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    title: Option<String>,
    description: Option<String>,
    status: Option<TaskStatus>,
    due_date: Option<DueDate>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the completion status.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Replaces the due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: DueDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Returns the replacement title, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the replacement description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the replacement status, if any.
    #[must_use]
    pub const fn status(&self) -> Option<&TaskStatus> {
        self.status.as_ref()
    }

    /// Returns the replacement due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<&DueDate> {
        self.due_date.as_ref()
    }

    /// Returns `true` when the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.due_date.is_none()
    }
}

/// Collapses empty descriptions to the absent form.
fn normalise_description(description: Option<String>) -> Option<String> {
    description.filter(|text| !text.trim().is_empty())
}
