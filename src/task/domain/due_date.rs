//! Due date values that survive malformed remote data.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Due date of a task record.
///
/// The remote store transports due dates as strings and does not validate
/// them, so a `DueDate` keeps the raw value alongside the parsed calendar
/// date. A missing or unparseable value is representable rather than an
/// error: sorting and filtering still function, and the display layer
/// falls back to an "Invalid date" label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct DueDate {
    raw: String,
    parsed: Option<NaiveDate>,
}

impl DueDate {
    /// Creates a due date from the remote wire value.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let parsed = parse_calendar_date(&raw);
        Self { raw, parsed }
    }

    /// Creates the absent due date some remote variants produce.
    #[must_use]
    pub fn missing() -> Self {
        Self::new(String::new())
    }

    /// Returns the raw wire value.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns the parsed calendar date, when the raw value holds one.
    #[must_use]
    pub const fn date(&self) -> Option<NaiveDate> {
        self.parsed
    }

    /// Returns `true` when the raw value parsed to a calendar date.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.parsed.is_some()
    }
}

impl From<String> for DueDate {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<DueDate> for String {
    fn from(value: DueDate) -> Self {
        value.raw
    }
}

impl From<NaiveDate> for DueDate {
    fn from(value: NaiveDate) -> Self {
        Self::new(value.format("%Y-%m-%d").to_string())
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Accepts ISO-8601 calendar dates and RFC 3339 timestamps.
fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|timestamp| timestamp.date_naive())
        })
}
