use std::sync::Arc;

use edubot_core::Clock;
use edubot_core::model::{Receipt, ReminderEntry};
use storage::repository::ReminderLog;
use tracing::info;

use crate::error::ReminderServiceError;

/// Stamps reminders with the local time and appends them to the log.
#[derive(Clone)]
pub struct ReminderService {
    clock: Clock,
    log: Arc<dyn ReminderLog>,
}

impl ReminderService {
    #[must_use]
    pub fn new(clock: Clock, log: Arc<dyn ReminderLog>) -> Self {
        Self { clock, log }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Append a reminder stamped `YYYY-MM-DD HH:MM`.
    ///
    /// Line breaks inside `body` are folded into spaces so each entry stays on
    /// one line of the log.
    ///
    /// # Errors
    ///
    /// Returns `ReminderServiceError::Storage` if the log cannot be written.
    pub fn append(&self, body: &str) -> Result<Receipt, ReminderServiceError> {
        let body = fold_line_breaks(body);
        let entry = ReminderEntry::new(self.clock.now(), body);
        self.log.append_line(&entry.to_line())?;
        info!(timestamp = entry.timestamp(), "reminder saved");
        Ok(Receipt::new(entry))
    }

    /// Every stored reminder line, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `ReminderServiceError::Storage` if the log exists but cannot be read.
    pub fn list_all(&self) -> Result<Vec<String>, ReminderServiceError> {
        Ok(self.log.read_lines()?)
    }
}

fn fold_line_breaks(body: &str) -> String {
    body.split(['\r', '\n'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use edubot_core::time::{fixed_clock, fixed_now};
    use storage::repository::InMemoryReminderLog;

    fn service() -> ReminderService {
        ReminderService::new(fixed_clock(), Arc::new(InMemoryReminderLog::new()))
    }

    #[test]
    fn append_then_list_returns_stamped_line() {
        let service = service();
        let receipt = service.append("Finish homework").unwrap();
        assert_eq!(receipt.entry().timestamp(), "2024-01-01 09:00");
        assert_eq!(
            service.list_all().unwrap(),
            vec!["2024-01-01 09:00 - Finish homework"]
        );
    }

    #[test]
    fn entries_keep_insertion_order() {
        let service = service();
        service.append("first").unwrap();
        let later = service
            .clone()
            .with_clock(Clock::fixed(fixed_now() + Duration::minutes(90)));
        later.append("second").unwrap();

        assert_eq!(
            service.list_all().unwrap(),
            vec!["2024-01-01 09:00 - first", "2024-01-01 10:30 - second"]
        );
    }

    #[test]
    fn multiline_body_stays_on_one_line() {
        let service = service();
        service.append("read ch 4\r\nthen quiz").unwrap();
        assert_eq!(
            service.list_all().unwrap(),
            vec!["2024-01-01 09:00 - read ch 4 then quiz"]
        );
    }

    #[test]
    fn empty_log_lists_nothing() {
        assert!(service().list_all().unwrap().is_empty());
    }
}
