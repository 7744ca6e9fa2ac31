use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use crate::repository::{ReminderLog, Storage, StorageError};

mod config_file;

pub use config_file::ConfigFile;

/// Reminder log backed by a plain UTF-8 text file, one entry per line.
#[derive(Clone, Debug)]
pub struct FileReminderLog {
    path: PathBuf,
}

impl FileReminderLog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReminderLog for FileReminderLog {
    fn append_line(&self, line: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        // Opened per call and dropped on every exit path.
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        // A single write keeps the line contiguous as far as the OS allows.
        file.write_all(format!("{line}\n").as_bytes())?;
        file.flush()?;
        Ok(())
    }

    fn read_lines(&self) -> Result<Vec<String>, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        Ok(contents.lines().map(str::to_owned).collect())
    }
}

impl Storage {
    /// Build a `Storage` backed by flat files.
    ///
    /// Nothing is created until the first write.
    #[must_use]
    pub fn files(reminders_path: impl Into<PathBuf>) -> Self {
        let reminders: Arc<dyn ReminderLog> = Arc::new(FileReminderLog::new(reminders_path));
        Self { reminders }
    }
}
