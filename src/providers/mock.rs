/*!
 * Mock page source for testing.
 *
 * Pages are registered per URL (query string included, e.g.
 * `https://site/search?q=nation`). Unregistered URLs answer 404, which is
 * how a missing dedicated word page looks on the real site.
 */

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::errors::ProviderError;
use crate::providers::PageSource;

/// Canned answer for one URL
#[derive(Debug, Clone)]
pub enum MockPage {
    /// 200 with this body
    Body(String),
    /// Non-success status with a short body
    Status(u16),
    /// Transport failure before any status
    Unreachable,
}

/// Mock page source with a shared request log
#[derive(Debug, Default, Clone)]
pub struct MockSource {
    pages: HashMap<String, MockPage>,
    request_count: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockSource {
    /// Create an empty source; every request answers 404
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a body for a URL
    pub fn with_page(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.pages.insert(url.into(), MockPage::Body(body.into()));
        self
    }

    /// Register a non-success status for a URL
    pub fn with_status(mut self, url: impl Into<String>, status_code: u16) -> Self {
        self.pages.insert(url.into(), MockPage::Status(status_code));
        self
    }

    /// Register a transport failure for a URL
    pub fn with_unreachable(mut self, url: impl Into<String>) -> Self {
        self.pages.insert(url.into(), MockPage::Unreachable);
        self
    }

    /// Number of fetches performed so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Every requested URL, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }

    /// Key under which a request is looked up
    pub fn request_key(url: &str, query: &[(&str, &str)]) -> String {
        if query.is_empty() {
            return url.to_string();
        }

        let query = query
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", url, query)
    }
}

#[async_trait]
impl PageSource for MockSource {
    async fn fetch(&self, url: &str, query: &[(&str, &str)]) -> Result<String, ProviderError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);

        let key = Self::request_key(url, query);
        self.requests.lock().push(key.clone());

        match self.pages.get(&key) {
            Some(MockPage::Body(body)) => Ok(body.clone()),
            Some(MockPage::Status(status_code)) => Err(ProviderError::ApiError {
                url: key,
                status_code: *status_code,
                reason: "Simulated failure".to_string(),
                body: String::new(),
            }),
            Some(MockPage::Unreachable) => Err(ProviderError::ConnectionError(format!(
                "Simulated connection failure for {}",
                key
            ))),
            None => Err(ProviderError::ApiError {
                url: key,
                status_code: 404,
                reason: "Not Found".to_string(),
                body: String::new(),
            }),
        }
    }
}
