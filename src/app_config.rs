use anyhow::{anyhow, Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::Path;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    /// Etymology reference site settings
    #[serde(default)]
    pub etymology: EtymologyConfig,

    /// Wordbook scraping settings
    #[serde(default)]
    pub wordbook: WordbookConfig,

    /// Text translation settings
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Etymology site configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EtymologyConfig {
    // @field: Site root, no trailing slash
    #[serde(default = "default_etymology_base_url")]
    pub base_url: String,

    // @field: Path prefix of the per-word page
    #[serde(default = "default_word_path")]
    pub word_path: String,

    // @field: Path of the search endpoint
    #[serde(default = "default_search_path")]
    pub search_path: String,

    // @field: Query parameter carrying the search text
    #[serde(default = "default_search_param")]
    pub search_param: String,

    // @field: Origin markers, in scan priority order
    #[serde(default = "default_markers")]
    pub markers: Vec<String>,

    // @field: Timeout seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    // @field: User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for EtymologyConfig {
    fn default() -> Self {
        Self {
            base_url: default_etymology_base_url(),
            word_path: default_word_path(),
            search_path: default_search_path(),
            search_param: default_search_param(),
            markers: default_markers(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl EtymologyConfig {
    /// URL of the dedicated page for a word
    pub fn word_url(&self, word: &str) -> String {
        format!("{}{}{}", self.base_url, self.word_path, word)
    }

    /// URL of the search endpoint (query passed separately)
    pub fn search_url(&self) -> String {
        format!("{}{}", self.base_url, self.search_path)
    }
}

/// Wordbook configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WordbookConfig {
    /// Page URL with a `{letter}` placeholder for the uppercase initial
    #[serde(default = "default_wordbook_url_template")]
    pub url_template: String,

    /// Number of leading table rows that are headers
    #[serde(default = "default_header_rows")]
    pub header_rows: usize,

    /// Candidate cell value meaning "no substitute known"
    #[serde(default = "default_sentinel")]
    pub sentinel: String,
}

impl Default for WordbookConfig {
    fn default() -> Self {
        Self {
            url_template: default_wordbook_url_template(),
            header_rows: default_header_rows(),
            sentinel: default_sentinel(),
        }
    }
}

impl WordbookConfig {
    /// URL of the page listing headwords starting with `letter`
    pub fn page_url(&self, letter: char) -> String {
        self.url_template
            .replace("{letter}", &letter.to_ascii_uppercase().to_string())
    }
}

/// Translation configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Markers whose presence in a language tag makes a word a substitution target
    #[serde(default = "default_foreign_markers")]
    pub foreign_markers: Vec<String>,

    /// Inserted between the input file stem and its extension
    #[serde(default = "default_output_suffix")]
    pub output_suffix: String,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            foreign_markers: default_foreign_markers(),
            output_suffix: default_output_suffix(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Matching filter for the `log` facade
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_etymology_base_url() -> String {
    "https://www.etymonline.com".to_string()
}

fn default_word_path() -> String {
    "/word/".to_string()
}

fn default_search_path() -> String {
    "/search".to_string()
}

fn default_search_param() -> String {
    "q".to_string()
}

fn default_markers() -> Vec<String> {
    ["french", "latin", "german", "english"]
        .iter()
        .map(|m| m.to_string())
        .collect()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("anglicize/{}", env!("CARGO_PKG_VERSION"))
}

fn default_wordbook_url_template() -> String {
    "https://anglish.fandom.com/wiki/English_Wordbook/{letter}".to_string()
}

fn default_header_rows() -> usize {
    1
}

fn default_sentinel() -> String {
    "-".to_string()
}

fn default_foreign_markers() -> Vec<String> {
    vec!["french".to_string(), "latin".to_string()]
}

fn default_output_suffix() -> String {
    "_anglicized".to_string()
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.etymology.base_url.trim().is_empty() {
            return Err(anyhow!("Etymology base URL must not be empty"));
        }

        if self.etymology.markers.iter().all(|m| m.trim().is_empty()) {
            return Err(anyhow!("At least one origin marker is required"));
        }

        if !self.wordbook.url_template.contains("{letter}") {
            return Err(anyhow!(
                "Wordbook URL template must contain a {{letter}} placeholder: {}",
                self.wordbook.url_template
            ));
        }

        if self.translation.foreign_markers.iter().all(|m| m.trim().is_empty()) {
            return Err(anyhow!("At least one foreign marker is required"));
        }

        if self.translation.output_suffix.is_empty() {
            return Err(anyhow!("Output suffix must not be empty"));
        }

        Ok(())
    }

    /// Load the configuration at `path`, writing a default one first if it is missing
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to open config file: {:?}", path))?;

            return serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path));
        }

        warn!("Config file not found at {:?}, creating default config.", path);

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write default config to file: {:?}", path))?;

        Ok(config)
    }
}
