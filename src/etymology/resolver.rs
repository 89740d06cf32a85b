/*!
 * Two-tier origin resolver.
 *
 * A word is first looked up on its dedicated page. If that page cannot be
 * fetched or parsed, the site search is queried and its hits are tried
 * closest headword first. Results, including "no record", are memoized for
 * the lifetime of the resolver; failures are not.
 */

use async_trait::async_trait;
use log::{debug, warn};
use parking_lot::Mutex;
use std::collections::HashMap;

use crate::app_config::EtymologyConfig;
use crate::errors::ProviderError;
use crate::etymology::distance::weighted_edit_distance;
use crate::etymology::origin::{find_marker, OriginRecord};
use crate::etymology::scrape;
use crate::etymology::OriginLookup;
use crate::providers::PageSource;
use crate::text_utils::tokenize;

/// A headword with the etymology text describing it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub headword: String,
    pub description: String,
}

impl From<scrape::SearchHit> for Candidate {
    fn from(hit: scrape::SearchHit) -> Self {
        Self {
            headword: hit.headword,
            description: hit.description,
        }
    }
}

/// Cached resolver of word origins
#[derive(Debug)]
pub struct OriginResolver<S: PageSource> {
    source: S,
    config: EtymologyConfig,
    cache: Mutex<HashMap<String, Option<OriginRecord>>>,
}

impl<S: PageSource> OriginResolver<S> {
    /// Create a resolver fetching through `source`
    pub fn new(source: S, config: EtymologyConfig) -> Self {
        Self {
            source,
            config,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Origin markers, in priority order
    pub fn markers(&self) -> &[String] {
        &self.config.markers
    }

    /// Cached outcome for `word`, without fetching
    ///
    /// The outer `Option` is a cache miss, the inner one "no record".
    pub fn cached(&self, word: &str) -> Option<Option<OriginRecord>> {
        self.cache.lock().get(word).cloned()
    }

    /// Number of memoized words
    pub fn cached_len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Resolve the origin of `word`
    ///
    /// # Returns
    /// * `Ok(Some(record))` - first marker found over the candidates
    /// * `Ok(None)` - no candidate mentions a marker
    /// * `Err(_)` - the search fallback failed
    pub async fn resolve(&self, word: &str) -> Result<Option<OriginRecord>, ProviderError> {
        let cached = self.cached(word);
        if let Some(hit) = cached {
            debug!("Origin cache hit for '{}'", word);
            return Ok(hit);
        }

        debug!("Origin cache miss for '{}'", word);
        let record = self.lookup(word).await?;

        self.cache.lock().insert(word.to_string(), record.clone());
        Ok(record)
    }

    async fn lookup(&self, word: &str) -> Result<Option<OriginRecord>, ProviderError> {
        let candidates = match self.direct_lookup(word).await {
            Ok(candidate) => vec![candidate],
            Err(e) => {
                warn!("Direct lookup for '{}' failed, searching instead: {}", word, e);
                self.search_lookup(word).await?
            }
        };

        let record = first_origin(&candidates, &self.config.markers);
        if record.is_none() {
            debug!("No origin marker found for '{}'", word);
        }
        Ok(record)
    }

    async fn direct_lookup(&self, word: &str) -> Result<Candidate, ProviderError> {
        let body = self.source.fetch(&self.config.word_url(word), &[]).await?;
        let description = scrape::parse_word_page(&body)?;

        Ok(Candidate {
            headword: word.to_string(),
            description,
        })
    }

    async fn search_lookup(&self, word: &str) -> Result<Vec<Candidate>, ProviderError> {
        let body = self
            .source
            .fetch(&self.config.search_url(), &[(self.config.search_param.as_str(), word)])
            .await?;

        let candidates = scrape::parse_search_page(&body)
            .into_iter()
            .map(Candidate::from)
            .collect();

        Ok(rank_candidates(word, candidates))
    }
}

#[async_trait]
impl<S: PageSource> OriginLookup for OriginResolver<S> {
    async fn origin_of(&mut self, word: &str) -> Result<Option<OriginRecord>, ProviderError> {
        self.resolve(word).await
    }
}

/// Order candidates by weighted edit distance to `query`, closest first
///
/// Comparison is case-insensitive. Ties keep their scrape order.
pub fn rank_candidates(query: &str, candidates: Vec<Candidate>) -> Vec<Candidate> {
    let query = query.to_lowercase();

    let mut scored: Vec<(usize, Candidate)> = candidates
        .into_iter()
        .map(|candidate| {
            let distance = weighted_edit_distance(&query, &candidate.headword.to_lowercase());
            (distance, candidate)
        })
        .collect();

    scored.sort_by_key(|(distance, _)| *distance);
    scored.into_iter().map(|(_, candidate)| candidate).collect()
}

/// Origin from the first candidate whose description mentions a marker
pub fn first_origin(candidates: &[Candidate], markers: &[String]) -> Option<OriginRecord> {
    candidates.iter().find_map(|candidate| {
        let tokens = tokenize(&candidate.description.to_lowercase(), true);
        find_marker(&tokens, markers)
            .map(|language| OriginRecord::new(candidate.headword.clone(), language))
    })
}
