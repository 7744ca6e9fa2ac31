use std::fmt;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::warn;

use super::endpoint;
use crate::error::FeedError;

pub const QUOTABLE_BASE_URL: &str = "https://api.quotable.io";
pub const FALLBACK_QUOTE: &str = "💬 Keep going — you’re doing great!";
const TIMEOUT: Duration = Duration::from_secs(6);

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Quote {
    pub content: String,
    pub author: String,
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "“{}” — {}", self.content, self.author)
    }
}

#[derive(Clone)]
pub struct QuoteClient {
    client: Client,
    base_url: String,
}

impl Default for QuoteClient {
    fn default() -> Self {
        Self::new(QUOTABLE_BASE_URL)
    }
}

impl QuoteClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch a random quote.
    ///
    /// # Errors
    ///
    /// Returns a transport/status error, or `EmptyResponse` for a blank quote.
    pub async fn fetch(&self) -> Result<Quote, FeedError> {
        let response = self
            .client
            .get(endpoint(&self.base_url, "random"))
            .timeout(TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FeedError::HttpStatus(response.status()));
        }

        let quote: Quote = response.json().await?;
        if quote.content.trim().is_empty() {
            return Err(FeedError::EmptyResponse);
        }
        Ok(quote)
    }

    /// One display line; falls back to a fixed encouragement on any failure.
    pub async fn display(&self) -> String {
        match self.fetch().await {
            Ok(quote) => format!("💡 {quote}"),
            Err(err) => {
                warn!(error = %err, "quote request failed");
                FALLBACK_QUOTE.into()
            }
        }
    }
}
