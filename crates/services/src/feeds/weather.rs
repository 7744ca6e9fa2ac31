use std::fmt;
use std::time::Duration;

use edubot_core::model::AppConfig;
use reqwest::Client;
use serde::Deserialize;
use tracing::warn;

use super::endpoint;
use crate::error::FeedError;

pub const OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org";
const TIMEOUT: Duration = Duration::from_secs(8);

#[derive(Clone, Debug)]
pub struct WeatherConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub city: String,
}

impl WeatherConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            base_url: OPENWEATHER_BASE_URL.into(),
            api_key: config.weather_api_key().map(str::to_owned),
            city: config.city().to_owned(),
        }
    }
}

/// Current conditions for the configured city.
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherReport {
    pub city: String,
    pub temp_c: f64,
    pub description: String,
}

impl fmt::Display for WeatherReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug keeps the fraction on whole numbers ("30.0", not "30").
        write!(
            f,
            "Weather in {}: {:?}°C, {}",
            self.city, self.temp_c, self.description
        )
    }
}

#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    config: WeatherConfig,
}

impl WeatherClient {
    #[must_use]
    pub fn new(config: WeatherConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Fetch current conditions from OpenWeather.
    ///
    /// # Errors
    ///
    /// Returns `FeedError::MissingApiKey` without touching the network when no
    /// key is configured, or a transport/status error from the request.
    pub async fn fetch(&self) -> Result<WeatherReport, FeedError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(FeedError::MissingApiKey)?;

        let response = self
            .client
            .get(endpoint(&self.config.base_url, "data/2.5/weather"))
            .query(&[
                ("q", self.config.city.as_str()),
                ("appid", api_key),
                ("units", "metric"),
            ])
            .timeout(TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FeedError::HttpStatus(response.status()));
        }

        let body: WeatherResponse = response.json().await?;
        body.into_report(&self.config.city)
    }

    /// One display line, never failing.
    pub async fn display(&self) -> String {
        match self.fetch().await {
            Ok(report) => format!("🌤️ {report}"),
            Err(FeedError::MissingApiKey) => "⚠️ Weather API key missing in config.json.".into(),
            Err(FeedError::HttpStatus(status)) => {
                warn!(%status, "weather request rejected");
                "❌ Could not fetch weather.".into()
            }
            Err(err) => {
                warn!(error = %err, "weather request failed");
                format!("⚠️ Error fetching weather: {err}")
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    main: WeatherMain,
    #[serde(default)]
    weather: Vec<WeatherCondition>,
}

#[derive(Debug, Deserialize)]
struct WeatherMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct WeatherCondition {
    description: String,
}

impl WeatherResponse {
    fn into_report(self, city: &str) -> Result<WeatherReport, FeedError> {
        let description = self
            .weather
            .into_iter()
            .next()
            .map(|condition| capitalize(&condition.description))
            .ok_or(FeedError::EmptyResponse)?;
        Ok(WeatherReport {
            city: city.to_owned(),
            temp_c: self.main.temp,
            description,
        })
    }
}

/// Upper-case the first character and lower-case the rest.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
