//! In-memory task repository with remote-style semantics.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::task::{
    domain::{NewTask, Task, TaskId, TaskPatch, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Mirrors the remote service's behaviour — identifiers are assigned on
/// create, partial updates are validated, deletes of absent records fail
/// with not-found — so tests and offline callers exercise the same
/// contract as the HTTP adapter.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryState>>,
}

#[derive(Debug, Default)]
struct InMemoryState {
    tasks: HashMap<TaskId, Task>,
    order: Vec<TaskId>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// The in-process store's transport is its lock; poisoning makes the
/// store unreachable.
fn poisoned() -> TaskRepositoryError {
    TaskRepositoryError::network(std::io::Error::other("task store lock poisoned"))
}

fn matches_filter(task: &Task, status: Option<&TaskStatus>) -> bool {
    status.is_none_or(|filter| task.status() == filter)
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn list(&self, status: Option<TaskStatus>) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|_| poisoned())?;
        let tasks = state
            .order
            .iter()
            .filter_map(|id| state.tasks.get(id))
            .filter(|task| matches_filter(task, status.as_ref()))
            .cloned()
            .collect();
        Ok(tasks)
    }

    async fn get(&self, id: &TaskId) -> TaskRepositoryResult<Task> {
        let state = self.state.read().map_err(|_| poisoned())?;
        state
            .tasks
            .get(id)
            .cloned()
            .ok_or_else(|| TaskRepositoryError::NotFound(id.clone()))
    }

    async fn create(&self, new_task: NewTask) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(|_| poisoned())?;
        let id = TaskId::from_uuid(Uuid::new_v4());
        let task = new_task
            .into_task(id.clone())
            .map_err(|err| TaskRepositoryError::Validation(err.to_string()))?;
        state.order.push(id.clone());
        state.tasks.insert(id, task.clone());
        Ok(task)
    }

    async fn update(&self, id: &TaskId, patch: TaskPatch) -> TaskRepositoryResult<Task> {
        if patch.title().is_some_and(|title| title.trim().is_empty()) {
            return Err(TaskRepositoryError::Validation(
                "task title must not be empty".to_owned(),
            ));
        }
        let mut state = self.state.write().map_err(|_| poisoned())?;
        let task = state
            .tasks
            .get_mut(id)
            .ok_or_else(|| TaskRepositoryError::NotFound(id.clone()))?;
        task.apply_patch(&patch);
        Ok(task.clone())
    }

    async fn delete(&self, id: &TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|_| poisoned())?;
        if state.tasks.remove(id).is_none() {
            return Err(TaskRepositoryError::NotFound(id.clone()));
        }
        state.order.retain(|existing| existing != id);
        Ok(())
    }
}
