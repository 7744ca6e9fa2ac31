use std::time::Duration;

use edubot_core::model::AppConfig;
use reqwest::Client;
use serde::Deserialize;
use tracing::warn;

use super::endpoint;
use crate::error::FeedError;

pub const GNEWS_BASE_URL: &str = "https://gnews.io";
const TIMEOUT: Duration = Duration::from_secs(8);
const MAX_HEADLINES: &str = "5";

#[derive(Clone, Debug)]
pub struct NewsConfig {
    pub base_url: String,
    pub api_key: Option<String>,
}

impl NewsConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            base_url: GNEWS_BASE_URL.into(),
            api_key: config.news_api_key().map(str::to_owned),
        }
    }
}

#[derive(Clone)]
pub struct NewsClient {
    client: Client,
    config: NewsConfig,
}

impl NewsClient {
    #[must_use]
    pub fn new(config: NewsConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Fetch top headline titles.
    ///
    /// # Errors
    ///
    /// Returns `FeedError::MissingApiKey` when no key is configured, or a
    /// transport/status error from the request.
    pub async fn fetch_headlines(&self) -> Result<Vec<String>, FeedError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(FeedError::MissingApiKey)?;

        let response = self
            .client
            .get(endpoint(&self.config.base_url, "api/v4/top-headlines"))
            .query(&[
                ("lang", "en"),
                ("country", "in"),
                ("max", MAX_HEADLINES),
                ("apikey", api_key),
            ])
            .timeout(TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FeedError::HttpStatus(response.status()));
        }

        let body: NewsResponse = response.json().await?;
        Ok(body.titles())
    }

    /// Display lines, never failing and never empty.
    pub async fn display(&self) -> Vec<String> {
        match self.fetch_headlines().await {
            Ok(titles) if titles.is_empty() => vec!["No news articles found.".into()],
            Ok(titles) => titles,
            Err(FeedError::MissingApiKey) => vec!["⚠️ News API key missing in config.json.".into()],
            Err(FeedError::HttpStatus(status)) => {
                warn!(%status, "news request rejected");
                vec!["⚠️ Could not fetch news.".into()]
            }
            Err(err) => {
                warn!(error = %err, "news request failed");
                vec!["⚠️ Failed to fetch news.".into()]
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct NewsResponse {
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
struct Article {
    title: String,
}

impl NewsResponse {
    fn titles(self) -> Vec<String> {
        self.articles.into_iter().map(|article| article.title).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_keep_feed_order() {
        let body: NewsResponse = serde_json::from_str(
            r#"{"totalArticles": 2, "articles": [{"title": "Exams moved", "url": "x"}, {"title": "New syllabus"}]}"#,
        )
        .unwrap();
        assert_eq!(body.titles(), vec!["Exams moved", "New syllabus"]);
    }

    #[test]
    fn missing_articles_is_empty() {
        let body: NewsResponse = serde_json::from_str("{}").unwrap();
        assert!(body.titles().is_empty());
    }

    #[tokio::test]
    async fn missing_key_is_reported_as_a_line() {
        let client = NewsClient::new(NewsConfig::from_app_config(&AppConfig::default()));
        assert_eq!(
            client.display().await,
            vec!["⚠️ News API key missing in config.json."]
        );
    }
}
