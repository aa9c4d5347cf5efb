use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::domain::{FetchError, Item, ItemCollection, ItemFetcher};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Item fetcher talking to the upstream JSON API over HTTP
#[derive(Debug, Clone)]
pub struct HttpItemFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpItemFetcher {
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::connection(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Upstream URL for `segments`; each segment is percent-encoded on its own
    fn endpoint(&self, segments: &[&str]) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            FetchError::connection(format!("Invalid upstream base URL {}: {}", self.base_url, e))
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                FetchError::connection(format!("Upstream base URL {} cannot carry a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, FetchError> {
        let url = self.endpoint(segments)?;
        tracing::debug!(url = %url, "Requesting upstream");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| classify_transport_error(url.as_str(), e))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::not_found(url.to_string()));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(url = %url, status = status.as_u16(), "Upstream returned error status");
            return Err(FetchError::status(status.as_u16(), body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| classify_transport_error(url.as_str(), e))?;

        serde_json::from_str(&body)
            .map_err(|e| FetchError::parse(format!("{} returned unexpected payload: {}", url, e)))
    }
}

fn classify_transport_error(url: &str, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::timeout(format!("{}: {}", url, error))
    } else if error.is_decode() {
        FetchError::parse(format!("{}: {}", url, error))
    } else {
        FetchError::connection(format!("{}: {}", url, error))
    }
}

#[async_trait]
impl ItemFetcher for HttpItemFetcher {
    async fn random(&self) -> Result<Item, FetchError> {
        self.get_json(&["random_joke"]).await
    }

    async fn random_batch(&self, count: usize) -> Result<ItemCollection, FetchError> {
        self.get_json(&["jokes", "random", &count.to_string()]).await
    }

    async fn by_id(&self, id: u64) -> Result<Item, FetchError> {
        self.get_json(&["jokes", &id.to_string()]).await
    }

    async fn by_category(&self, category: &str) -> Result<ItemCollection, FetchError> {
        self.get_json(&["jokes", category, "random"]).await
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
