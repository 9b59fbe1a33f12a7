//! Orchestration services for the dashboard session.

mod deletion;
mod editor;
mod session;

pub use deletion::{ConfirmDelete, DeleteOutcome, DeletionCoordinator};
pub use editor::{TaskEditor, TaskEditorError};
pub use session::DashboardSession;

use crate::task::ports::TaskRepositoryError;
use thiserror::Error;

/// Service-level errors for dashboard operations.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// Shared session state was poisoned by a panicking writer.
    #[error("dashboard session state poisoned")]
    Poisoned,
}

/// Result type for dashboard service operations.
pub type DashboardResult<T> = Result<T, DashboardError>;
