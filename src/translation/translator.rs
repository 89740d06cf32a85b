use log::debug;

use crate::errors::TranslationError;
use crate::etymology::{is_foreign, OriginLookup};
use crate::text_utils::tokenize;
use crate::translation::decider::{untranslated_placeholder, TranslationDecider, ERROR_PLACEHOLDER};
use crate::translation::decision::DecisionSource;
use crate::wordbook::Wordbook;

/// Counters for one or more translation passes
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TranslationStats {
    /// Word tokens seen
    pub tokens: usize,
    /// Tokens whose origin matched a foreign marker
    pub foreign: usize,
    /// Foreign tokens replaced by a substitute
    pub substituted: usize,
    /// Foreign tokens left as the untranslated placeholder
    pub untranslated: usize,
    /// Foreign tokens whose decision failed
    pub failed: usize,
}

/// Rewrites text, substituting words of foreign origin
#[derive(Debug)]
pub struct TextTranslator {
    decider: TranslationDecider,
    foreign_markers: Vec<String>,
    stats: TranslationStats,
}

impl Default for TextTranslator {
    fn default() -> Self {
        Self::new(vec!["french".to_string(), "latin".to_string()])
    }
}

impl TextTranslator {
    pub fn new(foreign_markers: Vec<String>) -> Self {
        Self {
            decider: TranslationDecider::new(),
            foreign_markers,
            stats: TranslationStats::default(),
        }
    }

    pub fn decider(&self) -> &TranslationDecider {
        &self.decider
    }

    pub fn stats(&self) -> &TranslationStats {
        &self.stats
    }

    /// Translate `text`, one word token at a time
    ///
    /// Punctuation is dropped and the output tokens are joined by single
    /// spaces. Tokens without a foreign origin pass through unchanged.
    /// Lookup failures abort the translation; decision failures only
    /// replace the word with [`ERROR_PLACEHOLDER`].
    pub async fn translate(
        &mut self,
        text: &str,
        wordbook: &Wordbook,
        lookup: &mut dyn OriginLookup,
        decisions: &mut dyn DecisionSource,
    ) -> Result<String, TranslationError> {
        let mut output = Vec::new();

        for token in tokenize(text, true) {
            self.stats.tokens += 1;

            let origin = lookup.origin_of(&token).await?;
            let foreign = origin
                .as_ref()
                .is_some_and(|record| is_foreign(&record.language, &self.foreign_markers));

            if !foreign {
                output.push(token);
                continue;
            }

            self.stats.foreign += 1;
            let substitute = self.decider.translate_word(&token, wordbook, decisions);
            debug!("'{}' -> '{}'", token, substitute);

            if substitute == ERROR_PLACEHOLDER {
                self.stats.failed += 1;
            } else if substitute == untranslated_placeholder(&token) {
                self.stats.untranslated += 1;
            } else {
                self.stats.substituted += 1;
            }

            output.push(substitute);
        }

        Ok(output.join(" "))
    }
}
