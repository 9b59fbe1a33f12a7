//! Repository port for the remote task service.

use crate::task::domain::{NewTask, Task, TaskId, TaskPatch, TaskStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Remote task storage contract.
///
/// Every operation issues at most one underlying request, performs no
/// retries, and carries no ordering guarantee relative to other calls;
/// retry and sequencing policy belong to the caller.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Fetches the task list, optionally narrowed to one status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Network`] on transport failure,
    /// [`TaskRepositoryError::Server`] on a non-2xx response, or
    /// [`TaskRepositoryError::Decode`] when the response body does not
    /// hold a task list.
    async fn list(&self, status: Option<TaskStatus>) -> TaskRepositoryResult<Vec<Task>>;

    /// Fetches a single task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the remote store has
    /// no such record, otherwise as [`TaskRepository::list`].
    async fn get(&self, id: &TaskId) -> TaskRepositoryResult<Task>;

    /// Creates a task; the remote service assigns the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Validation`] when the service
    /// rejects the payload, otherwise as [`TaskRepository::list`].
    async fn create(&self, new_task: NewTask) -> TaskRepositoryResult<Task>;

    /// Applies a partial update and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the record is
    /// missing and [`TaskRepositoryError::Validation`] when the service
    /// rejects the payload, otherwise as [`TaskRepository::list`].
    async fn update(&self, id: &TaskId, patch: TaskPatch) -> TaskRepositoryResult<Task>;

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the record is
    /// already gone, otherwise as [`TaskRepository::list`].
    async fn delete(&self, id: &TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
///
/// None of these are swallowed inside an implementation: every failure
/// propagates to the caller as a rejected asynchronous result.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The transport was unreachable or timed out.
    #[error("task service unreachable: {0}")]
    Network(Arc<dyn std::error::Error + Send + Sync>),

    /// The service answered with an unexpected non-2xx status.
    #[error("task service returned status {status}")]
    Server {
        /// HTTP status code of the response.
        status: u16,
    },

    /// The record does not exist remotely.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The service rejected a create or update payload.
    #[error("task payload rejected: {0}")]
    Validation(String),

    /// The response body could not be parsed into the task shape.
    #[error("malformed task service response: {0}")]
    Decode(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a transport-level failure.
    pub fn network(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Network(Arc::new(err))
    }

    /// Wraps a response-shape failure.
    pub fn decode(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Decode(Arc::new(err))
    }
}
