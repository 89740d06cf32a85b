/*!
 * Native-English substitute wordbook.
 *
 * Built by scraping one table page per initial letter. Each row maps a
 * headword to its ranked substitute candidates; the first candidate is the
 * preferred one.
 */

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::app_config::WordbookConfig;
use crate::errors::ProviderError;
use crate::etymology::scrape::{parse_table_rows, TableCell};
use crate::file_utils::FileManager;
use crate::providers::PageSource;

static CANDIDATE_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s;,:]+").expect("separator pattern is valid"));

/// Headword to ranked substitute candidates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wordbook {
    entries: BTreeMap<String, Vec<String>>,
}

impl Wordbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry under the lowercased headword, returning the one it replaced
    pub fn insert(&mut self, headword: &str, candidates: Vec<String>) -> Option<Vec<String>> {
        self.entries.insert(headword.to_lowercase(), candidates)
    }

    /// Candidates for `word`, looked up by its lowercase form
    pub fn candidates(&self, word: &str) -> Option<&[String]> {
        self.entries.get(&word.to_lowercase()).map(Vec::as_slice)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read a wordbook previously written with [`Wordbook::save`]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = FileManager::read_to_string(&path)?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse wordbook cache: {:?}", path.as_ref()))
    }

    /// Write the wordbook as JSON, replacing any existing file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize wordbook")?;
        FileManager::write_to_file(path, &json)
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<String>)> for Wordbook {
    fn from_iter<I: IntoIterator<Item = (K, Vec<String>)>>(iter: I) -> Self {
        let mut wordbook = Wordbook::new();
        for (headword, candidates) in iter {
            let headword: String = headword.into();
            wordbook.insert(&headword, candidates);
        }
        wordbook
    }
}

/// Split a candidate cell on runs of whitespace, semicolons, commas and colons
pub fn split_candidates(text: &str) -> Vec<String> {
    CANDIDATE_SEPARATOR
        .split(text)
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_row(cells: &[TableCell], sentinel: &str) -> Option<(String, Vec<String>)> {
    if cells.len() < 3 {
        return None;
    }

    let head_cell = &cells[0];
    let headword = head_cell
        .bold
        .as_deref()
        .unwrap_or(&head_cell.text)
        .trim()
        .to_lowercase();
    if headword.is_empty() {
        return None;
    }

    let candidate_text = cells[2].text.trim();
    if candidate_text == sentinel {
        return None;
    }

    let candidates = split_candidates(candidate_text);
    if candidates.is_empty() {
        return None;
    }

    Some((headword, candidates))
}

/// Entries of one wordbook page, in row order
pub fn parse_wordbook_rows(html: &str, config: &WordbookConfig) -> Vec<(String, Vec<String>)> {
    parse_table_rows(html)
        .iter()
        .skip(config.header_rows)
        .filter_map(|cells| parse_row(cells, &config.sentinel))
        .collect()
}

/// Scrapes the alphabetic wordbook pages into one [`Wordbook`]
#[derive(Debug)]
pub struct WordbookBuilder<S: PageSource> {
    source: S,
    config: WordbookConfig,
}

impl<S: PageSource> WordbookBuilder<S> {
    pub fn new(source: S, config: WordbookConfig) -> Self {
        Self { source, config }
    }

    /// Fetch and merge the pages A to Z
    pub async fn build(&self) -> Result<Wordbook, ProviderError> {
        self.build_with_progress(&ProgressBar::hidden()).await
    }

    /// Same as [`build`](Self::build), advancing `progress` once per page
    ///
    /// Pages are fetched one at a time. A headword seen on an earlier page
    /// is replaced by the later one, with a warning.
    pub async fn build_with_progress(&self, progress: &ProgressBar) -> Result<Wordbook, ProviderError> {
        let mut wordbook = Wordbook::new();
        progress.set_length(26);

        for letter in 'A'..='Z' {
            progress.set_message(format!("Wordbook page {}", letter));

            let body = self.source.fetch(&self.config.page_url(letter), &[]).await?;
            let rows = parse_wordbook_rows(&body, &self.config);
            debug!("Wordbook page {}: {} entries", letter, rows.len());

            for (headword, candidates) in rows {
                if let Some(previous) = wordbook.insert(&headword, candidates) {
                    warn!(
                        "Wordbook headword '{}' on page {} replaces an earlier entry {:?}",
                        headword, letter, previous
                    );
                }
            }

            progress.inc(1);
        }

        progress.finish_and_clear();
        info!("Wordbook built with {} entries", wordbook.len());
        Ok(wordbook)
    }
}
