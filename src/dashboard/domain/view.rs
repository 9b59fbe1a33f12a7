//! Pure projection of the collection state into display elements.
//!
//! Nothing here mutates state or talks to the repository; every function
//! maps domain values onto the shapes a rendering front end consumes.

use super::{Notification, SortOrder, StatusFilter};
use crate::task::domain::{DueDate, Task, TaskId, TaskStatus};
use chrono::NaiveDate;

/// Label shown in place of a date that failed to parse.
pub const INVALID_DATE_LABEL: &str = "Invalid date";

/// Heading of the empty-list state.
pub const EMPTY_STATE_HEADING: &str = "No tasks found";

/// Prompt of the empty-list state.
pub const EMPTY_STATE_PROMPT: &str = "Get started by creating your first task";

/// Layout the list renders in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LayoutMode {
    /// Wide-viewport table rows.
    #[default]
    Table,
    /// Narrow-viewport stacked cards.
    Cards,
}

/// Colour tone of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    /// Completed work.
    Green,
    /// Open work.
    Blue,
    /// A status outside the documented enumeration.
    Amber,
}

/// Display badge for a task status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    /// Capitalised status label.
    pub label: String,
    /// Badge colour tone.
    pub tone: BadgeTone,
}

impl StatusBadge {
    /// Builds the badge for a status, tolerating unknown values.
    #[must_use]
    pub fn for_status(status: &TaskStatus) -> Self {
        let tone = match status {
            TaskStatus::Completed => BadgeTone::Green,
            TaskStatus::Pending => BadgeTone::Blue,
            TaskStatus::Other(_) => BadgeTone::Amber,
        };
        Self {
            label: capitalise(status.as_str()),
            tone,
        }
    }
}

/// Ambient UI state of one dashboard rendering pass.
///
/// All of it lives here as explicit fields — loading flags and the
/// layout switch included — rather than as free-floating mutable state.
#[derive(Debug, Clone, Default)]
pub struct DashboardViewModel {
    /// Status filter applied to the snapshot.
    pub filter: StatusFilter,
    /// Due-date ordering of the visible tasks.
    pub sort: SortOrder,
    /// Layout the list renders in.
    pub layout: LayoutMode,
    /// `true` while a list fetch is outstanding.
    pub loading: bool,
    /// Pending user-visible notification, if any.
    pub notification: Option<Notification>,
}

/// One task projected for the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    /// Identifier of the projected task.
    pub id: TaskId,
    /// Display title.
    pub title: String,
    /// Description, or its fallback text.
    pub description: String,
    /// Status badge.
    pub badge: StatusBadge,
    /// Formatted due date.
    pub due_label: String,
    /// `true` when the task is past due and still open.
    pub overdue: bool,
    /// `true` while this task's deletion is in flight.
    pub deleting: bool,
}

/// Empty-list placeholder content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyState {
    /// Placeholder heading.
    pub heading: &'static str,
    /// Call-to-action prompt.
    pub prompt: &'static str,
}

/// Render-ready dashboard list state.
#[derive(Debug, Clone)]
pub struct DashboardView {
    /// Layout the rows render in.
    pub layout: LayoutMode,
    /// `true` while a list fetch is outstanding.
    pub loading: bool,
    /// Pending user-visible notification, if any.
    pub notification: Option<Notification>,
    /// Projected task rows, filtered and ordered.
    pub rows: Vec<TaskRow>,
}

impl DashboardView {
    /// Returns the empty-list placeholder when there is nothing to show.
    #[must_use]
    pub fn empty_state(&self) -> Option<EmptyState> {
        if self.rows.is_empty() && !self.loading {
            return Some(EmptyState {
                heading: EMPTY_STATE_HEADING,
                prompt: EMPTY_STATE_PROMPT,
            });
        }
        None
    }
}

/// Task projected for the detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDetail {
    /// Display title.
    pub title: String,
    /// Status badge.
    pub badge: StatusBadge,
    /// Long-form formatted due date.
    pub due_label: String,
    /// Description, or its fallback text.
    pub description: String,
}

/// Formats a due date for list rows, e.g. `Jan 05, 2025`.
#[must_use]
pub fn format_due_date(due_date: &DueDate) -> String {
    due_date.date().map_or_else(
        || INVALID_DATE_LABEL.to_owned(),
        |date| date.format("%b %d, %Y").to_string(),
    )
}

/// Formats a due date for the detail page, e.g. `January 05, 2025`.
#[must_use]
pub fn format_due_date_long(due_date: &DueDate) -> String {
    due_date.date().map_or_else(
        || INVALID_DATE_LABEL.to_owned(),
        |date| date.format("%B %d, %Y").to_string(),
    )
}

/// Projects one task into a list row.
#[must_use]
pub fn task_row(task: &Task, pending_delete: Option<&TaskId>, today: NaiveDate) -> TaskRow {
    TaskRow {
        id: task.id().clone(),
        title: task.title().to_owned(),
        description: task
            .description()
            .unwrap_or("No description provided")
            .to_owned(),
        badge: StatusBadge::for_status(task.status()),
        due_label: format_due_date(task.due_date()),
        overdue: task.is_overdue_on(today),
        deleting: pending_delete == Some(task.id()),
    }
}

/// Projects the visible tasks into a render-ready view.
#[must_use]
pub fn project(
    tasks: &[Task],
    model: &DashboardViewModel,
    pending_delete: Option<&TaskId>,
    today: NaiveDate,
) -> DashboardView {
    DashboardView {
        layout: model.layout,
        loading: model.loading,
        notification: model.notification.clone(),
        rows: tasks
            .iter()
            .map(|task| task_row(task, pending_delete, today))
            .collect(),
    }
}

/// Projects one task for the detail page.
#[must_use]
pub fn task_detail(task: &Task) -> TaskDetail {
    TaskDetail {
        title: task.title().to_owned(),
        badge: StatusBadge::for_status(task.status()),
        due_label: format_due_date_long(task.due_date()),
        description: task
            .description()
            .unwrap_or("No description provided.")
            .to_owned(),
    }
}

/// Uppercases the first character, leaving the rest untouched.
fn capitalise(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
