mod alarm;
mod app_config;
mod document;
mod quiz_item;
mod reminder;

pub use alarm::{AlarmError, AlarmTime};
pub use app_config::{
    AppConfig, AppConfigDraft, AppConfigError, DEFAULT_CITY, DEFAULT_REMINDERS_FILE,
};
pub use document::{DocumentText, DocumentTextError, Topic, TopicError};
pub use quiz_item::QuizItem;
pub use reminder::{Receipt, ReminderEntry};
