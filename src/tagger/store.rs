/*!
 * Durable word classification store.
 *
 * A JSON object keyed by word. Each value is either an origin record or
 * `null`, the latter meaning a reviewer decided the word has no origin
 * worth tracking. Words never looked up are simply absent.
 */

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

use crate::etymology::{OriginRecord, StoreEntry};
use crate::file_utils::FileManager;

/// In-memory view of the classification store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageStore {
    entries: BTreeMap<String, StoreEntry>,
}

impl LanguageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a store file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = FileManager::read_to_string(&path)?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse language store: {:?}", path.as_ref()))
    }

    /// Read the store at `path` if one is given and exists, else start empty
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if FileManager::file_exists(path) => Self::load(path),
            _ => Ok(Self::new()),
        }
    }

    /// Write the whole store to `path`, replacing its previous content
    pub fn dump<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let parent_dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent_dir)
            .with_context(|| format!("Failed to create directory: {:?}", parent_dir))?;

        let temp_file = NamedTempFile::new_in(parent_dir)
            .with_context(|| format!("Failed to create temporary file in {:?}", parent_dir))?;
        {
            let mut writer = BufWriter::new(&temp_file);
            serde_json::to_writer(&mut writer, self).context("Failed to serialize language store")?;
            writer.flush().context("Failed to flush language store")?;
        }

        temp_file
            .persist(path)
            .with_context(|| format!("Failed to write language store: {:?}", path))?;
        Ok(())
    }

    pub fn get(&self, word: &str) -> Option<&StoreEntry> {
        self.entries.get(word)
    }

    /// Stored language for `word`, if it has a record
    pub fn language_of(&self, word: &str) -> Option<&str> {
        self.get(word)
            .and_then(StoreEntry::record)
            .map(|record| record.language.as_str())
    }

    /// Record the origin of `word`
    pub fn insert(&mut self, word: &str, record: OriginRecord) {
        self.entries.insert(word.to_string(), StoreEntry::Record(record));
    }

    /// Mark `word` as having no origin
    pub fn mark_none(&mut self, word: &str) {
        self.entries.insert(word.to_string(), StoreEntry::ExplicitNone);
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &StoreEntry)> {
        self.entries.iter()
    }
}
