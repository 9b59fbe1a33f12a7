//! Deletion coordination for the dashboard list session.

use super::{DashboardError, DashboardResult};
use crate::dashboard::domain::{Notification, TaskCollection};
use crate::task::domain::TaskId;
use crate::task::ports::{TaskRepository, TaskRepositoryError};
use std::sync::{Arc, Mutex, RwLock};
use tracing::{debug, warn};

/// Capability for confirming a deletion before it is requested.
///
/// Callers invoke this gate themselves — a declined prompt never reaches
/// the coordinator, which has no say in confirmation.
pub trait ConfirmDelete {
    /// Returns `true` when the deletion should proceed.
    fn confirm(&self, id: &TaskId) -> bool;
}

/// Result of one deletion request.
#[derive(Debug, Clone)]
pub enum DeleteOutcome {
    /// The remote service confirmed the deletion and the collection was
    /// updated.
    Deleted(TaskId),
    /// Another deletion was already in flight; nothing was issued.
    Rejected {
        /// The id whose deletion is still pending.
        in_flight: TaskId,
    },
    /// The remote service failed the deletion; the collection is
    /// untouched and the task must be treated as still present.
    Failed {
        /// The id whose deletion failed.
        id: TaskId,
        /// The repository failure.
        error: TaskRepositoryError,
    },
    /// The confirmation gate declined; nothing was issued. Produced by
    /// callers of [`ConfirmDelete`], never by the coordinator itself.
    Cancelled(TaskId),
}

impl DeleteOutcome {
    /// Returns the user-visible notification for this outcome, if any.
    #[must_use]
    pub const fn notification(&self) -> Option<Notification> {
        match self {
            Self::Deleted(_) => Some(Notification::TaskDeleted),
            Self::Failed { .. } => Some(Notification::DeleteFailed),
            Self::Rejected { .. } | Self::Cancelled(_) => None,
        }
    }
}

/// Coordinates deletions against the repository and the shared collection.
///
/// At most one deletion is visible to the UI at a time, enforced by
/// checking the in-flight slot before issuing a request — never by
/// queueing. The collection is mutated only after the remote service
/// confirms, so a failed deletion needs no reconciliation; a full
/// re-fetch remains available to defensive callers.
pub struct DeletionCoordinator<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
    collection: Arc<RwLock<TaskCollection>>,
    in_flight: Arc<Mutex<Option<TaskId>>>,
}

impl<R> Clone for DeletionCoordinator<R>
where
    R: TaskRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            collection: Arc::clone(&self.collection),
            in_flight: Arc::clone(&self.in_flight),
        }
    }
}

impl<R> DeletionCoordinator<R>
where
    R: TaskRepository,
{
    /// Creates a coordinator over the shared collection.
    #[must_use]
    pub fn new(repository: Arc<R>, collection: Arc<RwLock<TaskCollection>>) -> Self {
        Self {
            repository,
            collection,
            in_flight: Arc::new(Mutex::new(None)),
        }
    }

    /// Returns the id whose deletion is currently in flight, if any.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Poisoned`] when the session state lock
    /// is poisoned.
    pub fn pending(&self) -> DashboardResult<Option<TaskId>> {
        let slot = self.in_flight.lock().map_err(|_| DashboardError::Poisoned)?;
        Ok(slot.clone())
    }

    /// Requests the deletion of one task.
    ///
    /// Rejects without issuing a request while any deletion is pending.
    /// Once issued, the request runs to completion; there is no
    /// cancellation.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Poisoned`] when the session state lock
    /// is poisoned. Remote failures are not errors here: they surface as
    /// [`DeleteOutcome::Failed`] so the caller can notify and move on.
    pub async fn request_delete(&self, id: TaskId) -> DashboardResult<DeleteOutcome> {
        {
            let mut slot = self.in_flight.lock().map_err(|_| DashboardError::Poisoned)?;
            if let Some(pending) = slot.as_ref() {
                return Ok(DeleteOutcome::Rejected {
                    in_flight: pending.clone(),
                });
            }
            *slot = Some(id.clone());
        }

        let result = self.repository.delete(&id).await;

        {
            let mut slot = self.in_flight.lock().map_err(|_| DashboardError::Poisoned)?;
            *slot = None;
        }

        match result {
            Ok(()) => {
                self.collection
                    .write()
                    .map_err(|_| DashboardError::Poisoned)?
                    .remove(&id);
                debug!(task_id = %id, "task deleted");
                Ok(DeleteOutcome::Deleted(id))
            }
            Err(error) => {
                warn!(task_id = %id, %error, "task deletion failed");
                Ok(DeleteOutcome::Failed { id, error })
            }
        }
    }
}
