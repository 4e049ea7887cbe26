//! HTTP page fetching
//!
//! Issues GET requests with a browser-identifying user agent and surfaces
//! bad statuses as typed errors.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::config::PageCacheConfig;
use crate::error::FetchError;

/// HTTP client wrapper for fetching pages
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Build a fetcher from the configuration
    pub fn new(config: &PageCacheConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;
        Ok(Self { client })
    }

    /// GET a URL and return the response body
    ///
    /// Fails with [`FetchError::Http`] when the status is 4xx/5xx and
    /// [`FetchError::Network`] on transport failures. The URL is used as
    /// given, with no validation.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!("fetching: {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
