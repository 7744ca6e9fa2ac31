//! Clients for the web collaborators: weather, news and quotes.
//!
//! Each client has a fallible `fetch` and an infallible display method that
//! turns any `FeedError` into an apology line. Nothing is retried.

mod news;
mod quote;
mod weather;

pub use news::{GNEWS_BASE_URL, NewsClient, NewsConfig};
pub use quote::{FALLBACK_QUOTE, QUOTABLE_BASE_URL, Quote, QuoteClient};
pub use weather::{OPENWEATHER_BASE_URL, WeatherClient, WeatherConfig, WeatherReport};

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::endpoint;

    #[test]
    fn endpoint_joins_without_double_slashes() {
        assert_eq!(endpoint("https://a.io/", "/random"), "https://a.io/random");
        assert_eq!(endpoint("https://a.io", "random"), "https://a.io/random");
    }
}
