use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::error;

use crate::app::Result;
use crate::domain::Story;
use crate::fetcher::ApiClient;

pub const DEFAULT_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0";

pub struct HttpApiClient {
    client: Client,
    base_url: String,
}

impl HttpApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .user_agent(concat!("gazette/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    // Body is parsed separately from the transfer so network failures and
    // malformed payloads surface as distinct error variants.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await?;
        response.error_for_status_ref()?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl Default for HttpApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, Duration::from_secs(10))
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn top_story_ids(&self) -> Result<Vec<u64>> {
        let url = format!("{}/topstories.json", self.base_url);
        self.get_json(&url).await.map_err(|e| {
            error!("Failed to fetch top stories: {}", e);
            e
        })
    }

    async fn item(&self, id: u64) -> Result<Option<Story>> {
        let url = format!("{}/item/{}.json", self.base_url, id);
        self.get_json(&url).await.map_err(|e| {
            error!("Failed to fetch story {}: {}", id, e);
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let client = HttpApiClient::new("https://example.com/v0/", Duration::from_secs(1));
        assert_eq!(client.base_url, "https://example.com/v0");
    }
}
