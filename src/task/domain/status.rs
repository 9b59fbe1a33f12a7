//! Task completion status.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Completion status of a task record.
///
/// The documented enumeration is `pending` and `completed`, but the remote
/// store does not enforce it, so values outside the enumeration are
/// preserved verbatim in [`TaskStatus::Other`] and rendered defensively
/// instead of failing the decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    /// Work on the task has not finished.
    Pending,
    /// The task has been completed.
    Completed,
    /// A status value outside the documented enumeration, kept verbatim.
    Other(String),
}

impl TaskStatus {
    /// Returns the canonical wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Other(raw) => raw,
        }
    }

    /// Converts a remote status value without failing.
    ///
    /// Recognised values are matched case-insensitively; anything else is
    /// preserved verbatim as [`TaskStatus::Other`].
    #[must_use]
    pub fn from_remote(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Self::Pending,
            "completed" => Self::Completed,
            _ => Self::Other(value.to_owned()),
        }
    }

    /// Returns `true` when the task no longer counts towards open work.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl From<String> for TaskStatus {
    fn from(value: String) -> Self {
        Self::from_remote(&value)
    }
}

impl From<TaskStatus> for String {
    fn from(value: TaskStatus) -> Self {
        value.as_str().to_owned()
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    /// Strict parse used for caller input such as form submissions.
    ///
    /// Unlike [`TaskStatus::from_remote`], values outside the documented
    /// enumeration are rejected.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}
