//! Domain model for the dashboard session.
//!
//! Pure state and projection logic: the task collection snapshot, its
//! filtered and sorted views, form validation, and the display types the
//! rendering front end consumes. No infrastructure concerns cross this
//! boundary.

mod collection;
mod form;
mod notification;
mod view;

pub use collection::{SortOrder, StatusFilter, TaskCollection};
pub use form::{
    DUE_DATE_INVALID, DUE_DATE_REQUIRED, FieldErrors, STATUS_INVALID, STATUS_REQUIRED, TaskForm,
    TITLE_REQUIRED,
};
pub use notification::Notification;
pub use view::{
    BadgeTone, DashboardView, DashboardViewModel, EMPTY_STATE_HEADING, EMPTY_STATE_PROMPT,
    EmptyState, INVALID_DATE_LABEL, LayoutMode, StatusBadge, TaskDetail, TaskRow, format_due_date,
    format_due_date_long, project, task_detail, task_row,
};
