/*!
 * Store-backed language tagging.
 *
 * Wraps an origin lookup with the durable classification store: stored
 * answers are reused, new ones are looked up and recorded under the token
 * that was asked for.
 */

use anyhow::Result;
use async_trait::async_trait;
use indicatif::ProgressBar;
use log::info;
use std::path::Path;

use crate::errors::ProviderError;
use crate::etymology::{OriginLookup, OriginRecord, StoreEntry};

pub use self::audit::{audit_candidates, AuditCandidate, AuditCommand, AuditSummary, Reviewer, TerminalReviewer};
pub use self::store::LanguageStore;

pub mod audit;
pub mod store;

/// Token counts after which progress is reported: 10%, 20%, ... 100%
pub fn progress_milestones(len: usize) -> Vec<usize> {
    let mut milestones: Vec<usize> = (1..=10).map(|i| len * i / 10).filter(|m| *m > 0).collect();
    milestones.dedup();
    milestones
}

/// Tags tokens with their language of origin
#[derive(Debug)]
pub struct LanguageTagger<L: OriginLookup> {
    store: LanguageStore,
    lookup: L,
    markers: Vec<String>,
}

impl<L: OriginLookup> LanguageTagger<L> {
    /// Tagger over an empty store
    pub fn new(lookup: L, markers: Vec<String>) -> Self {
        Self::with_store(LanguageStore::new(), lookup, markers)
    }

    pub fn with_store(store: LanguageStore, lookup: L, markers: Vec<String>) -> Self {
        Self {
            store,
            lookup,
            markers,
        }
    }

    /// Tagger over the store at `path`, if given and present
    pub fn load(path: Option<&Path>, lookup: L, markers: Vec<String>) -> Result<Self> {
        let store = LanguageStore::load_or_default(path)?;
        if let Some(path) = path {
            info!("Loaded {} classified words from {:?}", store.len(), path);
        }
        Ok(Self::with_store(store, lookup, markers))
    }

    pub fn store(&self) -> &LanguageStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut LanguageStore {
        &mut self.store
    }

    pub fn lookup_mut(&mut self) -> &mut L {
        &mut self.lookup
    }

    /// Origin markers accepted as direct language answers during review
    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    /// Write the store to `path`
    pub fn dump<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.store.dump(path)
    }

    /// Origin of one token, consulting the store first
    ///
    /// Stored records are answered without a lookup. Missing words and
    /// explicit nones are looked up only when `lookup_new` is set; a found
    /// origin replaces an explicit none, no origin leaves it in place.
    pub async fn origin(&mut self, token: &str, lookup_new: bool) -> Result<Option<OriginRecord>, ProviderError> {
        if let Some(StoreEntry::Record(record)) = self.store.get(token) {
            return Ok(Some(record.clone()));
        }

        if !lookup_new {
            return Ok(None);
        }

        let origin = self.lookup.origin_of(token).await?;
        if let Some(record) = &origin {
            self.store.insert(token, record.clone());
        }
        Ok(origin)
    }

    /// Language of every token, in input order
    pub async fn tag(
        &mut self,
        tokens: &[String],
        lookup_new: bool,
        report_progress: bool,
    ) -> Result<Vec<Option<String>>, ProviderError> {
        self.tag_with_progress(tokens, lookup_new, report_progress, &ProgressBar::hidden())
            .await
    }

    /// Same as [`tag`](Self::tag), advancing `progress` once per token
    pub async fn tag_with_progress(
        &mut self,
        tokens: &[String],
        lookup_new: bool,
        report_progress: bool,
        progress: &ProgressBar,
    ) -> Result<Vec<Option<String>>, ProviderError> {
        let milestones = progress_milestones(tokens.len());
        let mut languages = Vec::with_capacity(tokens.len());
        progress.set_length(tokens.len() as u64);

        for (i, token) in tokens.iter().enumerate() {
            let origin = self.origin(token, lookup_new).await?;
            languages.push(origin.map(|record| record.language));
            progress.inc(1);

            let done = i + 1;
            if report_progress && milestones.contains(&done) {
                info!("{:.2}% completed...", done as f64 / tokens.len() as f64 * 100.0);
            }
        }

        progress.finish_and_clear();
        Ok(languages)
    }
}

#[async_trait]
impl<L: OriginLookup> OriginLookup for LanguageTagger<L> {
    async fn origin_of(&mut self, word: &str) -> Result<Option<OriginRecord>, ProviderError> {
        self.origin(word, true).await
    }
}
