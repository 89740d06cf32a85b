/*!
 * Page sources for the scraping layer.
 *
 * This module contains the boundary between the classifier and the web:
 * - `http`: reqwest-backed source talking to the real sites
 * - `mock`: canned responses for tests and offline runs
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for everything that can hand back a page body for a URL
///
/// Implementations must treat any non-success status as an error so callers
/// can tell "the site answered" apart from "the site refused".
#[async_trait]
pub trait PageSource: Send + Sync + Debug {
    /// Fetch the body at `url` with the given query pairs appended
    ///
    /// # Arguments
    /// * `url` - Absolute URL without query string
    /// * `query` - Query parameters, in order
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - Page body or the failure
    async fn fetch(&self, url: &str, query: &[(&str, &str)]) -> Result<String, ProviderError>;
}

#[async_trait]
impl<T: PageSource + ?Sized> PageSource for std::sync::Arc<T> {
    async fn fetch(&self, url: &str, query: &[(&str, &str)]) -> Result<String, ProviderError> {
        (**self).fetch(url, query).await
    }
}

pub mod http;
pub mod mock;

pub use self::http::HttpSource;
pub use self::mock::MockSource;
