use thiserror::Error;

pub const DEFAULT_CITY: &str = "Delhi";
pub const DEFAULT_REMINDERS_FILE: &str = "reminders.txt";

/// Startup configuration, loaded once and handed to the components that need it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    weather_api_key: Option<String>,
    city: String,
    news_api_key: Option<String>,
    reminders_file: String,
}

#[derive(Clone, Debug, Default)]
pub struct AppConfigDraft {
    pub weather_api_key: Option<String>,
    pub city: Option<String>,
    pub news_api_key: Option<String>,
    pub reminders_file: Option<String>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AppConfigError {
    #[error("reminders file path must not contain a line break")]
    InvalidRemindersFile,
}

impl AppConfigDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and normalize the draft into a usable config.
    ///
    /// Blank values fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `AppConfigError` if the reminders path is malformed.
    pub fn validate(self) -> Result<AppConfig, AppConfigError> {
        let reminders_file = normalize_optional(self.reminders_file)
            .unwrap_or_else(|| DEFAULT_REMINDERS_FILE.to_string());
        if reminders_file.contains(['\n', '\r']) {
            return Err(AppConfigError::InvalidRemindersFile);
        }

        Ok(AppConfig {
            weather_api_key: normalize_optional(self.weather_api_key),
            city: normalize_optional(self.city).unwrap_or_else(|| DEFAULT_CITY.to_string()),
            news_api_key: normalize_optional(self.news_api_key),
            reminders_file,
        })
    }
}

impl AppConfig {
    #[must_use]
    pub fn weather_api_key(&self) -> Option<&str> {
        self.weather_api_key.as_deref()
    }

    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    #[must_use]
    pub fn news_api_key(&self) -> Option<&str> {
        self.news_api_key.as_deref()
    }

    #[must_use]
    pub fn reminders_file(&self) -> &str {
        &self.reminders_file
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            weather_api_key: None,
            city: DEFAULT_CITY.to_string(),
            news_api_key: None,
            reminders_file: DEFAULT_REMINDERS_FILE.to_string(),
        }
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
