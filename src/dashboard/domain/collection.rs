//! Authoritative in-memory snapshot of the fetched task set.

use crate::task::domain::{Task, TaskId, TaskStatus};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Status filter over a collection view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// Every task in the snapshot.
    #[default]
    All,
    /// Only tasks whose status equals the given value.
    Only(TaskStatus),
}

impl StatusFilter {
    /// Returns `true` when a task with the given status passes the filter.
    #[must_use]
    pub fn matches(&self, status: &TaskStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

/// Direction of the due-date ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Earliest due date first; undated tasks last.
    #[default]
    Ascending,
    /// Latest due date first; undated tasks first.
    Descending,
}

/// In-memory mapping of task id to task record, in snapshot order.
///
/// The collection never invents or discards an identifier on its own: it
/// is replaced wholesale by [`TaskCollection::load`] after a list fetch
/// and shrinks only through [`TaskCollection::remove`] mirroring a
/// confirmed remote deletion.
#[derive(Debug, Clone, Default)]
pub struct TaskCollection {
    entries: HashMap<TaskId, Task>,
    order: Vec<TaskId>,
}

impl TaskCollection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the snapshot with the given tasks.
    ///
    /// Should the feed repeat an identifier, the first occurrence keeps
    /// its position and the last occurrence supplies the value, so the
    /// no-duplicate-keys invariant holds without failing the load.
    pub fn load(&mut self, tasks: impl IntoIterator<Item = Task>) {
        self.entries.clear();
        self.order.clear();
        for task in tasks {
            let id = task.id().clone();
            if self.entries.insert(id.clone(), task).is_none() {
                self.order.push(id);
            }
        }
    }

    /// Removes one entry if present; removing an absent id is a no-op.
    pub fn remove(&mut self, id: &TaskId) {
        if self.entries.remove(id).is_some() {
            self.order.retain(|existing| existing != id);
        }
    }

    /// Returns the task with the given id, if present.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.entries.get(id)
    }

    /// Returns `true` when the id is present.
    #[must_use]
    pub fn contains(&self, id: &TaskId) -> bool {
        self.entries.contains_key(id)
    }

    /// Returns the number of tasks in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` when the snapshot holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates the snapshot in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.order.iter().filter_map(|id| self.entries.get(id))
    }

    /// Returns the tasks passing the filter, in snapshot order.
    #[must_use]
    pub fn by_status(&self, filter: &StatusFilter) -> Vec<Task> {
        self.iter()
            .filter(|task| filter.matches(task.status()))
            .cloned()
            .collect()
    }

    /// Returns the snapshot ordered by due date.
    ///
    /// Valid dates compare numerically; tasks with a missing or
    /// unparseable date sort after all dated tasks ascending and before
    /// them descending. Ties keep their snapshot order in both
    /// directions.
    #[must_use]
    pub fn sorted_by_due_date(&self, order: SortOrder) -> Vec<Task> {
        sort_by_due_date(self.iter().cloned().collect(), order)
    }

    /// Returns the filtered snapshot ordered by due date.
    #[must_use]
    pub fn visible(&self, filter: &StatusFilter, order: SortOrder) -> Vec<Task> {
        sort_by_due_date(self.by_status(filter), order)
    }
}

/// Stable due-date sort shared by the collection views.
fn sort_by_due_date(mut tasks: Vec<Task>, order: SortOrder) -> Vec<Task> {
    tasks.sort_by(|a, b| compare_due_dates(order, a, b));
    tasks
}

fn compare_due_dates(order: SortOrder, a: &Task, b: &Task) -> Ordering {
    match (a.due_date().date(), b.due_date().date()) {
        (Some(left), Some(right)) => match order {
            SortOrder::Ascending => left.cmp(&right),
            SortOrder::Descending => right.cmp(&left),
        },
        (Some(_), None) => match order {
            SortOrder::Ascending => Ordering::Less,
            SortOrder::Descending => Ordering::Greater,
        },
        (None, Some(_)) => match order {
            SortOrder::Ascending => Ordering::Greater,
            SortOrder::Descending => Ordering::Less,
        },
        (None, None) => Ordering::Equal,
    }
}
