/*!
 * Word origin resolution against an online etymology dictionary.
 *
 * - `origin`: origin records and marker detection
 * - `distance`: edit distances used for ranking and review ordering
 * - `scrape`: HTML extraction for word, search and wordbook pages
 * - `resolver`: the cached two-tier resolver
 */

use async_trait::async_trait;

use crate::errors::ProviderError;

pub use self::origin::{find_marker, is_foreign, OriginRecord, StoreEntry};
pub use self::resolver::{first_origin, rank_candidates, Candidate, OriginResolver};

pub mod distance;
pub mod origin;
pub mod resolver;
pub mod scrape;

/// Anything that can say where a word comes from
///
/// Implemented by the resolver itself and by the store-backed tagger, so a
/// translation can run either straight against the site or through a
/// persisted classification store.
#[async_trait]
pub trait OriginLookup: Send {
    /// Origin of `word`, `None` when no origin marker was found
    async fn origin_of(&mut self, word: &str) -> Result<Option<OriginRecord>, ProviderError>;
}
