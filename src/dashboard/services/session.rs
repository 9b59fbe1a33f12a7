//! Dashboard list session over a task repository.

use super::{ConfirmDelete, DashboardError, DashboardResult, DeleteOutcome, DeletionCoordinator};
use crate::dashboard::domain::{
    DashboardView, DashboardViewModel, SortOrder, StatusFilter, TaskCollection, project,
};
use crate::task::domain::{Task, TaskId};
use crate::task::ports::TaskRepository;
use mockable::Clock;
use std::sync::{Arc, RwLock};
use tracing::debug;

/// One list rendering session: the shared snapshot, its deletion
/// coordinator, and the fetch-and-project read path.
///
/// Derived views always reflect the latest completed `load`/`remove`;
/// the relative completion order of independently issued requests is
/// not constrained.
pub struct DashboardSession<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    collection: Arc<RwLock<TaskCollection>>,
    deletion: DeletionCoordinator<R>,
}

impl<R, C> Clone for DashboardSession<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
            collection: Arc::clone(&self.collection),
            deletion: self.deletion.clone(),
        }
    }
}

impl<R, C> DashboardSession<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a session with an empty snapshot.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        let collection = Arc::new(RwLock::new(TaskCollection::new()));
        let deletion = DeletionCoordinator::new(Arc::clone(&repository), Arc::clone(&collection));
        Self {
            repository,
            clock,
            collection,
            deletion,
        }
    }

    /// Returns the deletion coordinator for this session.
    #[must_use]
    pub const fn deletion(&self) -> &DeletionCoordinator<R> {
        &self.deletion
    }

    /// Replaces the snapshot with a fresh full fetch.
    ///
    /// Filtering stays client-side so every derived view reads one
    /// authoritative snapshot. This is also the reconciliation path a
    /// defensive caller may run after a failed mutation.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Repository`] when the fetch fails; the
    /// previous snapshot is kept in that case.
    pub async fn refresh(&self) -> DashboardResult<usize> {
        let tasks = self.repository.list(None).await?;
        let count = tasks.len();
        self.collection
            .write()
            .map_err(|_| DashboardError::Poisoned)?
            .load(tasks);
        debug!(count, "dashboard snapshot refreshed");
        Ok(count)
    }

    /// Returns the filtered snapshot ordered by due date.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Poisoned`] when the session state lock
    /// is poisoned.
    pub fn visible(&self, filter: &StatusFilter, order: SortOrder) -> DashboardResult<Vec<Task>> {
        let collection = self
            .collection
            .read()
            .map_err(|_| DashboardError::Poisoned)?;
        Ok(collection.visible(filter, order))
    }

    /// Returns one task from the snapshot, if present.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Poisoned`] when the session state lock
    /// is poisoned.
    pub fn task(&self, id: &TaskId) -> DashboardResult<Option<Task>> {
        let collection = self
            .collection
            .read()
            .map_err(|_| DashboardError::Poisoned)?;
        Ok(collection.get(id).cloned())
    }

    /// Returns the number of tasks in the snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Poisoned`] when the session state lock
    /// is poisoned.
    pub fn len(&self) -> DashboardResult<usize> {
        let collection = self
            .collection
            .read()
            .map_err(|_| DashboardError::Poisoned)?;
        Ok(collection.len())
    }

    /// Returns `true` when the snapshot holds no tasks.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Poisoned`] when the session state lock
    /// is poisoned.
    pub fn is_empty(&self) -> DashboardResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Projects the current snapshot into a render-ready view.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Poisoned`] when the session state lock
    /// is poisoned.
    pub fn project(&self, model: &DashboardViewModel) -> DashboardResult<DashboardView> {
        let tasks = self.visible(&model.filter, model.sort)?;
        let pending = self.deletion.pending()?;
        let today = self.clock.utc().date_naive();
        Ok(project(&tasks, model, pending.as_ref(), today))
    }

    /// Deletes a task after consulting the confirmation gate.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Poisoned`] when the session state lock
    /// is poisoned. Remote failures surface as
    /// [`DeleteOutcome::Failed`].
    pub async fn delete_task(
        &self,
        id: &TaskId,
        gate: &impl ConfirmDelete,
    ) -> DashboardResult<DeleteOutcome> {
        if !gate.confirm(id) {
            return Ok(DeleteOutcome::Cancelled(id.clone()));
        }
        self.deletion.request_delete(id.clone()).await
    }
}
