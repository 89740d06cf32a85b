use log::warn;

use crate::errors::DecisionError;
use crate::translation::cache::TranslationCache;
use crate::translation::decision::DecisionSource;
use crate::wordbook::Wordbook;

/// Output for a word whose substitute could not be decided
pub const ERROR_PLACEHOLDER: &str = "****";

/// Output for a word with no known substitute
pub fn untranslated_placeholder(word: &str) -> String {
    format!("**{}**", word)
}

/// Chooses substitutes for single words, remembering each choice for the run
#[derive(Debug, Default)]
pub struct TranslationDecider {
    cache: TranslationCache,
}

impl TranslationDecider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choices made so far
    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }

    /// Decide the substitute for `word`
    ///
    /// A word listed in the wordbook (case-insensitively) gets one of its
    /// candidates; any other word gets a free-text substitute or the
    /// untranslated placeholder. Failed decisions are not remembered.
    pub fn decide(
        &mut self,
        word: &str,
        wordbook: &Wordbook,
        decisions: &mut dyn DecisionSource,
    ) -> Result<String, DecisionError> {
        if let Some(substitute) = self.cache.get(word) {
            return Ok(substitute);
        }

        let substitute = match wordbook.candidates(word) {
            Some(candidates) => {
                let index = decisions.choose(word, candidates)?;
                candidates
                    .get(index)
                    .cloned()
                    .ok_or(DecisionError::ChoiceOutOfRange {
                        index,
                        available: candidates.len(),
                    })?
            }
            None => decisions
                .supply(word)?
                .unwrap_or_else(|| untranslated_placeholder(word)),
        };

        self.cache.store(word, &substitute);
        Ok(substitute)
    }

    /// Like [`decide`](Self::decide), with any failure replaced by [`ERROR_PLACEHOLDER`]
    pub fn translate_word(
        &mut self,
        word: &str,
        wordbook: &Wordbook,
        decisions: &mut dyn DecisionSource,
    ) -> String {
        match self.decide(word, wordbook, decisions) {
            Ok(substitute) => substitute,
            Err(e) => {
                warn!("Could not decide a substitute for '{}': {}", word, e);
                ERROR_PLACEHOLDER.to_string()
            }
        }
    }
}
