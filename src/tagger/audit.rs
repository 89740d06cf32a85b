/*!
 * Human review of suspicious store entries.
 *
 * Entries are suspicious when they are explicit nones or when the stored
 * word differs from the headword its origin came from. The distance
 * between the two is only a guess at how wrong the match may be.
 */

use anyhow::Result;
use log::{info, warn};
use std::io;

use crate::etymology::distance::edit_distance;
use crate::etymology::{OriginLookup, OriginRecord, StoreEntry};
use crate::prompt::Prompter;
use crate::tagger::store::LanguageStore;
use crate::tagger::LanguageTagger;

/// A store entry queued for review
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditCandidate {
    pub word: String,
    pub entry: StoreEntry,
    /// Edit distance between the word and its index word, `None` for explicit nones
    pub distance: Option<usize>,
}

impl AuditCandidate {
    fn priority(&self) -> usize {
        self.distance.unwrap_or(usize::MAX)
    }
}

/// Entries worth reviewing, most suspicious first
///
/// Explicit nones come first, then mismatched records by descending
/// distance. Ties keep store order.
pub fn audit_candidates(store: &LanguageStore) -> Vec<AuditCandidate> {
    let mut candidates: Vec<AuditCandidate> = store
        .iter()
        .filter_map(|(word, entry)| match entry {
            StoreEntry::ExplicitNone => Some(AuditCandidate {
                word: word.clone(),
                entry: entry.clone(),
                distance: None,
            }),
            StoreEntry::Record(record) if record.index_word != *word => Some(AuditCandidate {
                word: word.clone(),
                entry: entry.clone(),
                distance: Some(edit_distance(word, &record.index_word)),
            }),
            StoreEntry::Record(_) => None,
        })
        .collect();

    candidates.sort_by(|a, b| b.priority().cmp(&a.priority()));
    candidates
}

/// What the reviewer asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditCommand {
    /// Leave the entry as it is (`s`, or an empty answer)
    Skip,
    /// Mark the word as having no origin (`n`)
    MarkNone,
    /// Stop reviewing, keeping earlier edits (`q`)
    Quit,
    /// A known origin marker, stored as the word's language
    Language(String),
    /// Any other text: a word whose origin should be looked up instead
    Lookup(String),
}

impl AuditCommand {
    pub fn parse(input: &str, markers: &[String]) -> Self {
        let answer = input.trim();
        match answer {
            "" | "s" => Self::Skip,
            "n" => Self::MarkNone,
            "q" => Self::Quit,
            _ => {
                let lowered = answer.to_lowercase();
                if markers.iter().any(|marker| *marker == lowered) {
                    Self::Language(lowered)
                } else {
                    Self::Lookup(answer.to_string())
                }
            }
        }
    }
}

/// Counts of what happened during a review
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AuditSummary {
    pub candidates: usize,
    pub reviewed: usize,
    pub skipped: usize,
    pub marked_none: usize,
    pub relabelled: usize,
    pub re_resolved: usize,
    /// Lookups the reviewer gave up on with `q`
    pub abandoned: usize,
    pub quit_early: bool,
}

/// The human side of a review
pub trait Reviewer: Send {
    /// Answer for an entry: `s`, `n`, `q`, a language or a word to look up
    fn review(&mut self, word: &str, entry: &StoreEntry) -> io::Result<String>;

    /// Another word to look up after `attempted` gave no origin, or `q`
    fn retry(&mut self, word: &str, attempted: &str) -> io::Result<String>;
}

/// Reviewer answering on the terminal
#[derive(Debug)]
pub struct TerminalReviewer {
    prompter: Prompter,
}

impl TerminalReviewer {
    pub fn new(prompter: Prompter) -> Self {
        Self { prompter }
    }

    pub fn stdio() -> Self {
        Self::new(Prompter::stdio())
    }
}

impl Reviewer for TerminalReviewer {
    fn review(&mut self, word: &str, entry: &StoreEntry) -> io::Result<String> {
        self.prompter.say(&format!("\n{} {}", word, entry))?;
        self.prompter.ask(&format!(
            "type 's' to skip, 'n' for none, 'q' to quit, otherwise provide a language of origin for {}\n",
            word
        ))
    }

    fn retry(&mut self, _word: &str, attempted: &str) -> io::Result<String> {
        self.prompter.ask(&format!(
            "No origin detected for {}... 'q' to quit or try again\n",
            attempted
        ))
    }
}

impl<L: OriginLookup> LanguageTagger<L> {
    /// Walk the suspicious entries with a reviewer, editing the store in place
    ///
    /// Quitting keeps every edit made so far. A failed lookup aborts the
    /// review with the edits made so far still in the store.
    pub async fn audit(&mut self, reviewer: &mut dyn Reviewer) -> Result<AuditSummary> {
        let candidates = audit_candidates(self.store());
        let mut summary = AuditSummary {
            candidates: candidates.len(),
            ..AuditSummary::default()
        };
        info!("{} entries to review", candidates.len());

        for candidate in candidates {
            let answer = reviewer.review(&candidate.word, &candidate.entry)?;
            summary.reviewed += 1;

            match AuditCommand::parse(&answer, self.markers()) {
                AuditCommand::Skip => summary.skipped += 1,
                AuditCommand::MarkNone => {
                    self.store_mut().mark_none(&candidate.word);
                    summary.marked_none += 1;
                }
                AuditCommand::Quit => {
                    summary.quit_early = true;
                    break;
                }
                AuditCommand::Language(language) => {
                    let record = OriginRecord::new(candidate.word.clone(), language);
                    self.store_mut().insert(&candidate.word, record);
                    summary.relabelled += 1;
                }
                AuditCommand::Lookup(query) => {
                    let mut query = query;
                    loop {
                        let found = self.lookup_mut().origin_of(&query).await?;
                        if let Some(record) = found {
                            self.store_mut().insert(&candidate.word, record);
                            summary.re_resolved += 1;
                            break;
                        }

                        warn!("No origin detected for '{}'", query);
                        let next = reviewer.retry(&candidate.word, &query)?;
                        let next = next.trim();
                        if next == "q" {
                            summary.abandoned += 1;
                            break;
                        }
                        query = next.to_string();
                    }
                }
            }
        }

        Ok(summary)
    }
}
