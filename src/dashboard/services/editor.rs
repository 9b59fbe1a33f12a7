//! Create/edit flows that bypass the collection snapshot.

use crate::dashboard::domain::{FieldErrors, TaskForm};
use crate::task::domain::{Task, TaskId};
use crate::task::ports::{TaskRepository, TaskRepositoryError};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Service-level errors for the create/edit flows.
#[derive(Debug, Error)]
pub enum TaskEditorError {
    /// Form validation failed; surfaced inline beside the inputs.
    #[error(transparent)]
    Form(#[from] FieldErrors),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Create/edit orchestration over the task repository.
///
/// These flows talk to the repository directly: the collection snapshot
/// is never mutated by a form submission, failed or successful. A list
/// session picks up the change on its next refresh.
#[derive(Clone)]
pub struct TaskEditor<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> TaskEditor<R>
where
    R: TaskRepository,
{
    /// Creates an editor over the repository.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Loads the prefilled form for the edit flow.
    ///
    /// # Errors
    ///
    /// Returns [`TaskEditorError::Repository`] when the record cannot be
    /// fetched.
    pub async fn load(&self, id: &TaskId) -> Result<TaskForm, TaskEditorError> {
        let task = self.repository.get(id).await?;
        Ok(TaskForm::from_task(&task))
    }

    /// Validates and submits a creation form.
    ///
    /// # Errors
    ///
    /// Returns [`TaskEditorError::Form`] when validation fails and
    /// [`TaskEditorError::Repository`] when the remote service rejects
    /// the payload.
    pub async fn create(&self, form: &TaskForm) -> Result<Task, TaskEditorError> {
        let new_task = form.validate()?;
        let task = self.repository.create(new_task).await?;
        debug!(task_id = %task.id(), "task created");
        Ok(task)
    }

    /// Validates and submits an edit form.
    ///
    /// # Errors
    ///
    /// Returns [`TaskEditorError::Form`] when validation fails and
    /// [`TaskEditorError::Repository`] when the remote service rejects
    /// the payload or no longer has the record.
    pub async fn update(&self, id: &TaskId, form: &TaskForm) -> Result<Task, TaskEditorError> {
        let patch = form.validate_patch()?;
        let task = self.repository.update(id, patch).await?;
        debug!(task_id = %task.id(), "task updated");
        Ok(task)
    }
}
