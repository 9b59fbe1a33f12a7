//! Create/edit form state and validation.

use crate::task::domain::{DueDate, NewTask, Task, TaskPatch, TaskStatus};
use thiserror::Error;

/// Message shown beside an empty title field.
pub const TITLE_REQUIRED: &str = "Title is required";

/// Message shown beside an empty status field.
pub const STATUS_REQUIRED: &str = "Status is required";

/// Message shown beside a status outside the documented enumeration.
pub const STATUS_INVALID: &str = "Status must be pending or completed";

/// Message shown beside an empty due-date field.
pub const DUE_DATE_REQUIRED: &str = "Due date is required";

/// Message shown beside a due date that is not a calendar date.
pub const DUE_DATE_INVALID: &str = "Due date must be a valid calendar date";

/// Per-field validation messages, surfaced inline beside the inputs.
///
/// Form failures never touch the task collection; the form either yields
/// a payload for the repository or these messages for the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("task form validation failed")]
pub struct FieldErrors {
    /// Message for the title field, if it failed.
    pub title: Option<&'static str>,
    /// Message for the status field, if it failed.
    pub status: Option<&'static str>,
    /// Message for the due-date field, if it failed.
    pub due_date: Option<&'static str>,
}

impl FieldErrors {
    /// Returns `true` when no field failed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.status.is_none() && self.due_date.is_none()
    }
}

/// Raw create/edit form state, one string per input.
///
/// The form is the strict gate for status values: unlike the decode
/// boundary it accepts only the documented enumeration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    title: String,
    description: String,
    status: String,
    due_date: String,
}

impl TaskForm {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefills the form from an existing task, for the edit flow.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title().to_owned(),
            description: task.description().unwrap_or_default().to_owned(),
            status: task.status().as_str().to_owned(),
            due_date: task.due_date().raw().to_owned(),
        }
    }

    /// Sets the title input.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the description input.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the status input.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the due-date input.
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = due_date.into();
        self
    }

    /// Returns the title input.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description input.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the status input.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns the due-date input.
    #[must_use]
    pub fn due_date(&self) -> &str {
        &self.due_date
    }

    /// Validates the form into a creation payload.
    ///
    /// # Errors
    ///
    /// Returns [`FieldErrors`] naming every failing field.
    pub fn validate(&self) -> Result<NewTask, FieldErrors> {
        let fields = self.validated_fields()?;
        let mut new_task = NewTask::new(fields.title, fields.status, fields.due_date)
            .map_err(|_| FieldErrors {
                title: Some(TITLE_REQUIRED),
                ..FieldErrors::default()
            })?;
        if let Some(description) = fields.description {
            new_task = new_task.with_description(description);
        }
        Ok(new_task)
    }

    /// Validates the form into a full update payload for the edit flow.
    ///
    /// # Errors
    ///
    /// Returns [`FieldErrors`] naming every failing field.
    pub fn validate_patch(&self) -> Result<TaskPatch, FieldErrors> {
        let fields = self.validated_fields()?;
        Ok(TaskPatch::new()
            .with_title(fields.title)
            .with_description(fields.description.unwrap_or_default())
            .with_status(fields.status)
            .with_due_date(fields.due_date))
    }

    fn validated_fields(&self) -> Result<ValidatedFields, FieldErrors> {
        let mut errors = FieldErrors::default();

        let title = self.title.trim();
        if title.is_empty() {
            errors.title = Some(TITLE_REQUIRED);
        }

        let status_input = self.status.trim();
        let status = if status_input.is_empty() {
            errors.status = Some(STATUS_REQUIRED);
            None
        } else {
            match TaskStatus::try_from(status_input) {
                Ok(parsed) => Some(parsed),
                Err(_) => {
                    errors.status = Some(STATUS_INVALID);
                    None
                }
            }
        };

        let due_input = self.due_date.trim();
        let due_date = if due_input.is_empty() {
            errors.due_date = Some(DUE_DATE_REQUIRED);
            None
        } else {
            let parsed = DueDate::new(due_input);
            if parsed.is_valid() {
                Some(parsed)
            } else {
                errors.due_date = Some(DUE_DATE_INVALID);
                None
            }
        };

        let (Some(status_value), Some(due_value)) = (status, due_date) else {
            return Err(errors);
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        let description = self.description.trim();
        Ok(ValidatedFields {
            title: title.to_owned(),
            description: if description.is_empty() {
                None
            } else {
                Some(self.description.clone())
            },
            status: status_value,
            due_date: due_value,
        })
    }
}

struct ValidatedFields {
    title: String,
    description: Option<String>,
    status: TaskStatus,
    due_date: DueDate,
}
