//! User-visible notifications raised by dashboard operations.

use std::fmt;

/// Transient notification for the toast-equivalent surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// A deletion was confirmed by the remote service.
    TaskDeleted,
    /// A deletion failed; the task is still present.
    DeleteFailed,
}

impl Notification {
    /// Returns the display message.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::TaskDeleted => "Task deleted successfully",
            Self::DeleteFailed => "Failed to delete task",
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
