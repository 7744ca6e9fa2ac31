use std::fmt;

use chrono::NaiveDateTime;

use crate::time::format_timestamp;

/// One line of the reminder log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderEntry {
    timestamp: String,
    body: String,
}

impl ReminderEntry {
    /// Build an entry stamped at `at`, truncated to the minute.
    #[must_use]
    pub fn new(at: NaiveDateTime, body: impl Into<String>) -> Self {
        Self {
            timestamp: format_timestamp(at),
            body: body.into(),
        }
    }

    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// The stored line, without its terminator.
    #[must_use]
    pub fn to_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ReminderEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.timestamp, self.body)
    }
}

/// Acknowledgment that a reminder reached the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    entry: ReminderEntry,
}

impl Receipt {
    #[must_use]
    pub fn new(entry: ReminderEntry) -> Self {
        Self { entry }
    }

    #[must_use]
    pub fn entry(&self) -> &ReminderEntry {
        &self.entry
    }
}
