/*!
 * Anglicization of text.
 *
 * - `cache`: per-run memo of chosen substitutes
 * - `decision`: where substitute choices come from (batch or a human)
 * - `decider`: picks the substitute for one word
 * - `translator`: rewrites a whole text word by word
 */

pub use self::cache::TranslationCache;
pub use self::decider::{untranslated_placeholder, TranslationDecider, ERROR_PLACEHOLDER};
pub use self::decision::{BatchDecisions, DecisionSource, TerminalDecisions};
pub use self::translator::{TextTranslator, TranslationStats};

pub mod cache;
pub mod decider;
pub mod decision;
pub mod translator;
