use std::sync::{Arc, Mutex};

use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Append-only log of reminder lines.
///
/// Implementations never rewrite or reorder what is already stored.
pub trait ReminderLog: Send + Sync {
    /// Append one line. The terminator is added by the implementation.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the line cannot be stored.
    fn append_line(&self, line: &str) -> Result<(), StorageError>;

    /// Every stored line in insertion order. A log that was never written is empty.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the log exists but cannot be read.
    fn read_lines(&self) -> Result<Vec<String>, StorageError>;
}

/// Simple in-memory log for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryReminderLog {
    lines: Arc<Mutex<Vec<String>>>,
}

impl InMemoryReminderLog {
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl ReminderLog for InMemoryReminderLog {
    fn append_line(&self, line: &str) -> Result<(), StorageError> {
        let mut guard = self
            .lines
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        // Mirror the file layout: embedded terminators split into separate lines.
        guard.extend(format!("{line}\n").lines().map(str::to_owned));
        Ok(())
    }

    fn read_lines(&self) -> Result<Vec<String>, StorageError> {
        let guard = self
            .lines
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(guard.clone())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub reminders: Arc<dyn ReminderLog>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let reminders: Arc<dyn ReminderLog> = Arc::new(InMemoryReminderLog::new());
        Self { reminders }
    }
}
