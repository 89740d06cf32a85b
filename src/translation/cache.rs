/*!
 * Translation caching functionality.
 *
 * Remembers the substitute chosen for each word during one translation
 * pass, keyed by the exact-case word. Nothing here is persisted.
 */

use std::collections::HashMap;
use log::debug;

/// Translation cache for storing and retrieving chosen substitutes
#[derive(Debug, Default, Clone)]
pub struct TranslationCache {
    /// Internal cache storage
    cache: HashMap<String, String>,

    /// Cache hit counter
    hits: usize,

    /// Cache miss counter
    misses: usize,
}

impl TranslationCache {
    /// Create a new, empty translation cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the substitute chosen earlier for `word`
    pub fn get(&mut self, word: &str) -> Option<String> {
        match self.cache.get(word) {
            Some(substitute) => {
                self.hits += 1;
                debug!("Cache hit for '{}'", word);
                Some(substitute.clone())
            }
            None => {
                self.misses += 1;
                debug!("Cache miss for '{}'", word);
                None
            }
        }
    }

    /// Store the substitute chosen for `word`
    pub fn store(&mut self, word: &str, substitute: &str) {
        self.cache.insert(word.to_string(), substitute.to_string());
        debug!("Cached substitute '{}' for '{}'", substitute, word);
    }

    /// Get cache statistics
    pub fn stats(&self) -> (usize, usize, f64) {
        let total = self.hits + self.misses;

        let hit_rate = if total > 0 {
            self.hits as f64 / total as f64
        } else {
            0.0
        };

        (self.hits, self.misses, hit_rate)
    }

    /// Get the number of entries in the cache
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
