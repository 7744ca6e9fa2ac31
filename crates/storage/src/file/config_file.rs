use std::fs;
use std::io;
use std::path::PathBuf;

use edubot_core::model::{AppConfig, AppConfigDraft, DEFAULT_CITY};
use serde::{Deserialize, Serialize};

use crate::repository::StorageError;

/// Persisted shape of `config.json`.
#[derive(Debug, Serialize, Deserialize)]
struct ConfigRecord {
    #[serde(rename = "OPENWEATHER_API_KEY", default)]
    weather_api_key: String,
    #[serde(rename = "CITY", default = "default_city")]
    city: String,
    #[serde(
        rename = "GNEWS_API_KEY",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    news_api_key: Option<String>,
    #[serde(
        rename = "REMINDERS_FILE",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    reminders_file: Option<String>,
}

impl Default for ConfigRecord {
    fn default() -> Self {
        Self {
            weather_api_key: String::new(),
            city: default_city(),
            news_api_key: None,
            reminders_file: None,
        }
    }
}

fn default_city() -> String {
    DEFAULT_CITY.to_string()
}

/// JSON configuration file read once at startup.
#[derive(Clone, Debug)]
pub struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the config, writing the default file first if none exists.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the file cannot be read, written, or parsed.
    pub fn load_or_create(&self) -> Result<AppConfig, StorageError> {
        let record = match fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str::<ConfigRecord>(&raw)
                .map_err(|err| StorageError::Serialization(err.to_string()))?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                let record = ConfigRecord::default();
                self.write(&record)?;
                record
            }
            Err(err) => return Err(err.into()),
        };

        AppConfigDraft {
            weather_api_key: Some(record.weather_api_key),
            city: Some(record.city),
            news_api_key: record.news_api_key,
            reminders_file: record.reminders_file,
        }
        .validate()
        .map_err(|err| StorageError::Serialization(err.to_string()))
    }

    fn write(&self, record: &ConfigRecord) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(record)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
