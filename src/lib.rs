/*!
 * # anglicize - etymology-driven English anglicizer
 *
 * A Rust library that classifies English words by language of origin,
 * using an online etymology dictionary, and rewrites text by replacing
 * words of French or Latin origin with native-English alternatives from a
 * community wordbook.
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `etymology`: Origin resolution:
 *   - `etymology::resolver`: Cached direct-page/search resolver
 *   - `etymology::scrape`: HTML extraction
 *   - `etymology::distance`: Edit distances for ranking and review
 * - `wordbook`: Substitute wordbook scraping and caching
 * - `translation`: Word-level substitute decisions and text rewriting
 * - `tagger`: Persisted classification store, batch tagging and review
 * - `providers`: Page sources (HTTP and mock)
 * - `text_utils`: Tokenization
 * - `file_utils`: File system operations
 * - `prompt`: Line-based human input
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod errors;
pub mod etymology;
pub mod file_utils;
pub mod prompt;
pub mod providers;
pub mod tagger;
pub mod text_utils;
pub mod translation;
pub mod wordbook;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{AppError, DecisionError, ProviderError, TranslationError};
pub use etymology::{OriginLookup, OriginRecord, OriginResolver, StoreEntry};
pub use tagger::{LanguageStore, LanguageTagger};
pub use translation::{TextTranslator, TranslationDecider};
pub use wordbook::{Wordbook, WordbookBuilder};
