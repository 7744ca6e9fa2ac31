use std::path::Path;
use std::sync::Arc;

use edubot_core::model::AppConfig;
use storage::file::ConfigFile;
use storage::repository::Storage;
use tracing::info;

use crate::error::AppServicesError;
use crate::feeds::{NewsClient, NewsConfig, QuoteClient, WeatherClient, WeatherConfig};
use crate::reminder_service::ReminderService;
use crate::Clock;

/// Assembles app-facing services from one startup configuration.
#[derive(Clone)]
pub struct AppServices {
    config: AppConfig,
    reminders: Arc<ReminderService>,
    weather: Arc<WeatherClient>,
    news: Arc<NewsClient>,
    quotes: Arc<QuoteClient>,
}

impl AppServices {
    /// Load (or create) the config file and build file-backed services.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the config file cannot be read or written.
    pub fn bootstrap(config_path: &Path, clock: Clock) -> Result<Self, AppServicesError> {
        let config = ConfigFile::new(config_path).load_or_create()?;
        info!(
            config = %config_path.display(),
            city = config.city(),
            reminders = config.reminders_file(),
            "configuration loaded"
        );
        let storage = Storage::files(config.reminders_file());
        Ok(Self::new(config, clock, storage))
    }

    #[must_use]
    pub fn new(config: AppConfig, clock: Clock, storage: Storage) -> Self {
        let reminders = Arc::new(ReminderService::new(clock, Arc::clone(&storage.reminders)));
        let weather = Arc::new(WeatherClient::new(WeatherConfig::from_app_config(&config)));
        let news = Arc::new(NewsClient::new(NewsConfig::from_app_config(&config)));
        let quotes = Arc::new(QuoteClient::default());

        Self {
            config,
            reminders,
            weather,
            news,
            quotes,
        }
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[must_use]
    pub fn reminders(&self) -> Arc<ReminderService> {
        Arc::clone(&self.reminders)
    }

    #[must_use]
    pub fn weather(&self) -> Arc<WeatherClient> {
        Arc::clone(&self.weather)
    }

    #[must_use]
    pub fn news(&self) -> Arc<NewsClient> {
        Arc::clone(&self.news)
    }

    #[must_use]
    pub fn quotes(&self) -> Arc<QuoteClient> {
        Arc::clone(&self.quotes)
    }
}
