/*!
 * Tokenization helpers.
 *
 * Splits raw text into word and punctuation tokens. Hyphenated and
 * apostrophised words stay whole, so a description mentioning
 * "anglo-french" yields that single token.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\w+(?:['\-]\w+)*|[^\w\s]").expect("token pattern is valid")
});

static WORD_START_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\w").expect("word start pattern is valid"));

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
        "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers",
        "herself", "it", "its", "itself", "they", "them", "their", "theirs", "themselves",
        "what", "which", "who", "whom", "this", "that", "these", "those", "am", "is", "are",
        "was", "were", "be", "been", "being", "have", "has", "had", "having", "do", "does",
        "did", "doing", "a", "an", "the", "and", "but", "if", "or", "because", "as", "until",
        "while", "of", "at", "by", "for", "with", "about", "against", "between", "into",
        "through", "during", "before", "after", "above", "below", "to", "from", "up", "down",
        "in", "out", "on", "off", "over", "under", "again", "further", "then", "once", "here",
        "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
        "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so",
        "than", "too", "very", "s", "t", "can", "will", "just", "don", "should", "now",
    ]
    .into_iter()
    .collect()
});

/// Split text into tokens, optionally keeping only tokens that start with a word character
pub fn tokenize(text: &str, skip_punctuation: bool) -> Vec<String> {
    TOKEN_REGEX
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|token| !skip_punctuation || WORD_START_REGEX.is_match(token))
        .map(str::to_string)
        .collect()
}

/// Options for document-level tokenization
#[derive(Debug, Clone, Default)]
pub struct TokenizeOptions {
    /// Lowercase every token
    pub lower: bool,
    /// Strip punctuation characters and drop tokens left empty
    pub rm_punct: bool,
    /// Drop common English stop words
    pub rm_stop_words: bool,
    /// Drop purely numeric tokens
    pub rm_numbers: bool,
}

/// Tokenize a whole document applying the requested filters
///
/// Filters run in a fixed order: numbers, case, punctuation, stop words.
/// Stop words are matched case-sensitively, so combine with `lower`.
pub fn tokenize_document(text: &str, options: &TokenizeOptions) -> Vec<String> {
    let mut tokens = tokenize(text, false);

    if options.rm_numbers {
        tokens.retain(|tok| !tok.chars().all(|c| c.is_numeric()));
    }

    if options.lower {
        tokens = tokens.into_iter().map(|tok| tok.to_lowercase()).collect();
    }

    if options.rm_punct {
        tokens = tokens
            .into_iter()
            .map(|tok| tok.chars().filter(|c| !c.is_ascii_punctuation()).collect::<String>())
            .filter(|tok| !tok.is_empty())
            .collect();
    }

    if options.rm_stop_words {
        tokens.retain(|tok| !STOP_WORDS.contains(tok.as_str()));
    }

    tokens
}
