use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::time::Duration;
use url::Url;

use crate::app_config::EtymologyConfig;
use crate::errors::ProviderError;
use crate::providers::PageSource;

/// HTTP page source backed by a pooled reqwest client
#[derive(Debug, Clone)]
pub struct HttpSource {
    /// HTTP client for making requests
    client: Client,
}

impl HttpSource {
    /// Create a new source with the given timeout and user agent
    pub fn new(timeout_secs: u64, user_agent: &str) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .user_agent(user_agent.to_string())
                .pool_idle_timeout(Duration::from_secs(90))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Create a source from the etymology site settings
    pub fn from_config(config: &EtymologyConfig) -> Self {
        Self::new(config.timeout_secs, &config.user_agent)
    }

    fn build_url(url: &str, query: &[(&str, &str)]) -> Result<Url, ProviderError> {
        let mut parsed = Url::parse(url)
            .map_err(|e| ProviderError::RequestFailed(format!("Invalid URL {}: {}", url, e)))?;

        if !query.is_empty() {
            parsed.query_pairs_mut().extend_pairs(query.iter());
        }

        Ok(parsed)
    }
}

#[async_trait]
impl PageSource for HttpSource {
    async fn fetch(&self, url: &str, query: &[(&str, &str)]) -> Result<String, ProviderError> {
        let url = Self::build_url(url, query)?;
        debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ProviderError::ConnectionError(format!("{}: {}", url, e))
            } else {
                ProviderError::RequestFailed(format!("{}: {}", url, e))
            }
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::RequestFailed(format!("Failed to read body of {}: {}", url, e)))?;

        if !status.is_success() {
            debug!("Request to {} failed with status {}", url, status);
            return Err(ProviderError::ApiError {
                url: url.to_string(),
                status_code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                body,
            });
        }

        Ok(body)
    }
}
