// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use anglicize::app_config::{self, Config};
use anglicize::file_utils::FileManager;
use anglicize::providers::HttpSource;
use anglicize::tagger::TerminalReviewer;
use anglicize::text_utils::{tokenize_document, TokenizeOptions};
use anglicize::translation::{BatchDecisions, DecisionSource, TerminalDecisions};
use anglicize::{LanguageTagger, OriginResolver, TextTranslator, Wordbook, WordbookBuilder};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rewrite a text file, replacing words of French and Latin origin
    Translate(TranslateArgs),

    /// Tag every word of a text file with its language of origin
    Tag(TagArgs),

    /// Review suspicious entries of a classification store
    Review(ReviewArgs),

    /// Generate shell completions for anglicize
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Text file to anglicize
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Ask for substitute choices instead of taking the first candidate
    #[arg(short, long)]
    interactive: bool,

    /// Classification store to read origins from and record new ones in
    #[arg(short, long)]
    store: Option<PathBuf>,

    /// JSON file caching the scraped wordbook between runs
    #[arg(short, long)]
    wordbook_cache: Option<PathBuf>,

    /// Force overwrite of an existing output file
    #[arg(short, long)]
    force_overwrite: bool,
}

#[derive(Parser, Debug)]
struct TagArgs {
    /// Text file whose words are tagged
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Classification store to update
    #[arg(short, long)]
    store: PathBuf,

    /// Only use origins already in the store
    #[arg(long)]
    no_lookup: bool,

    /// Lowercase every token before tagging
    #[arg(long)]
    lower: bool,

    /// Skip common English stop words
    #[arg(long)]
    rm_stop_words: bool,

    /// Skip purely numeric tokens
    #[arg(long)]
    rm_numbers: bool,
}

#[derive(Parser, Debug)]
struct ReviewArgs {
    /// Existing classification store to review
    #[arg(value_name = "STORE_PATH")]
    store: PathBuf,
}

/// anglicize - replace French and Latin borrowings with native English words
#[derive(Parser, Debug)]
#[command(name = "anglicize")]
#[command(version)]
#[command(about = "Etymology-driven English anglicizer")]
#[command(long_about = "anglicize looks up where each word of a text comes from and swaps words of
French or Latin origin for native-English alternatives from a community wordbook.

EXAMPLES:
    anglicize translate speech.txt                      # Writes speech_anglicized.txt
    anglicize translate -i speech.txt                   # Pick substitutes by hand
    anglicize translate -s origins.json speech.txt      # Reuse and grow a classification store
    anglicize tag -s origins.json speech.txt            # Classify every word of a text
    anglicize tag -s origins.json --lower --rm-stop-words speech.txt
    anglicize review origins.json                       # Review doubtful classifications
    anglicize completions bash > anglicize.bash         # Generate bash completions

CONFIGURATION:
    Configuration is stored in anglicize.json by default. If the file doesn't
    exist, a default one is created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long = "config", default_value = "anglicize.json", global = true)]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour and label for level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "ERROR"),
            Level::Warn => ("\x1B[1;33m", "WARN "),
            Level::Info => ("\x1B[1;32m", "INFO "),
            Level::Debug => ("\x1B[1;36m", "DEBUG"),
            Level::Trace => ("\x1B[1;35m", "TRACE"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (colour, label) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", colour, now, label, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Filtering happens through log::max_level only
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell.clone(), &mut cmd, "anglicize", &mut std::io::stdout());
        return Ok(());
    }

    let mut config = Config::load_or_create(&cli.config_path)?;
    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }
    config.validate().context("Configuration validation failed")?;
    log::set_max_level(config.log_level.to_level_filter());

    let result = match cli.command {
        Commands::Translate(args) => run_translate(args, &config).await,
        Commands::Tag(args) => run_tag(args, &config).await,
        Commands::Review(args) => run_review(args, &config).await,
        Commands::Completions { .. } => Ok(()),
    };

    if let Err(e) = &result {
        error!("{:#}", e);
    }
    result
}

async fn run_translate(args: TranslateArgs, config: &Config) -> Result<()> {
    if !FileManager::file_exists(&args.input_path) {
        return Err(anyhow!("Input file does not exist: {:?}", args.input_path));
    }

    let output_path = FileManager::generate_output_path(&args.input_path, &config.translation.output_suffix);
    if output_path.exists() && !args.force_overwrite {
        warn!("Output file already exists: {:?}. Use -f to force overwrite.", output_path);
        return Ok(());
    }

    let text = FileManager::read_document(&args.input_path)?;
    let source = HttpSource::from_config(&config.etymology);
    let wordbook = load_wordbook(config, source.clone(), args.wordbook_cache.as_deref()).await?;
    let resolver = OriginResolver::new(source, config.etymology.clone());

    let mut decisions: Box<dyn DecisionSource> = if args.interactive {
        Box::new(TerminalDecisions::stdio())
    } else {
        Box::new(BatchDecisions)
    };
    let mut translator = TextTranslator::new(config.translation.foreign_markers.clone());

    let translated = match &args.store {
        Some(store_path) => {
            let mut tagger = LanguageTagger::load(Some(store_path.as_path()), resolver, config.etymology.markers.clone())?;
            let result = translator
                .translate(&text, &wordbook, &mut tagger, decisions.as_mut())
                .await;
            tagger.dump(store_path)?;
            info!("Saved {} classified words to {:?}", tagger.store().len(), store_path);
            result?
        }
        None => {
            let mut resolver = resolver;
            translator
                .translate(&text, &wordbook, &mut resolver, decisions.as_mut())
                .await?
        }
    };

    FileManager::write_to_file(&output_path, &translated)?;

    let stats = translator.stats();
    info!(
        "{} words, {} foreign: {} substituted, {} without substitute, {} failed",
        stats.tokens, stats.foreign, stats.substituted, stats.untranslated, stats.failed
    );
    info!("Success: {:?}", output_path);
    Ok(())
}

async fn run_tag(args: TagArgs, config: &Config) -> Result<()> {
    if !FileManager::file_exists(&args.input_path) {
        return Err(anyhow!("Input file does not exist: {:?}", args.input_path));
    }

    let text = FileManager::read_document(&args.input_path)?;
    let options = TokenizeOptions {
        lower: args.lower,
        rm_punct: true,
        rm_stop_words: args.rm_stop_words,
        rm_numbers: args.rm_numbers,
    };
    let tokens = tokenize_document(&text, &options);

    let resolver = OriginResolver::new(HttpSource::from_config(&config.etymology), config.etymology.clone());
    let mut tagger = LanguageTagger::load(Some(args.store.as_path()), resolver, config.etymology.markers.clone())?;

    let progress = ProgressBar::new(tokens.len() as u64);
    progress.set_style(progress_style()?);

    let result = tagger
        .tag_with_progress(&tokens, !args.no_lookup, false, &progress)
        .await;
    tagger.dump(&args.store)?;
    let languages = result?;

    let mut histogram: BTreeMap<&str, usize> = BTreeMap::new();
    for language in &languages {
        *histogram.entry(language.as_deref().unwrap_or("(none)")).or_default() += 1;
    }
    for (language, count) in &histogram {
        info!("{:>16}: {}", language, count);
    }

    info!("Saved {} classified words to {:?}", tagger.store().len(), args.store);
    Ok(())
}

async fn run_review(args: ReviewArgs, config: &Config) -> Result<()> {
    if !FileManager::file_exists(&args.store) {
        return Err(anyhow!("Could not locate store file: {:?}", args.store));
    }

    let resolver = OriginResolver::new(HttpSource::from_config(&config.etymology), config.etymology.clone());
    let mut tagger = LanguageTagger::load(Some(args.store.as_path()), resolver, config.etymology.markers.clone())?;

    let mut reviewer = TerminalReviewer::stdio();
    let result = tagger.audit(&mut reviewer).await;

    tagger.dump(&args.store)?;
    let summary = result?;

    info!(
        "Reviewed {} of {} entries: {} skipped, {} marked none, {} relabelled, {} re-resolved, {} abandoned",
        summary.reviewed,
        summary.candidates,
        summary.skipped,
        summary.marked_none,
        summary.relabelled,
        summary.re_resolved,
        summary.abandoned
    );
    Ok(())
}

async fn load_wordbook(config: &Config, source: HttpSource, cache_path: Option<&Path>) -> Result<Wordbook> {
    if let Some(path) = cache_path {
        if FileManager::file_exists(path) {
            let wordbook = Wordbook::load(path)?;
            info!("Loaded {} wordbook entries from {:?}", wordbook.len(), path);
            return Ok(wordbook);
        }
    }

    let progress = ProgressBar::new(26);
    progress.set_style(progress_style()?);

    let wordbook = WordbookBuilder::new(source, config.wordbook.clone())
        .build_with_progress(&progress)
        .await?;

    if let Some(path) = cache_path {
        wordbook.save(path)?;
        info!("Cached wordbook to {:?}", path);
    }

    Ok(wordbook)
}

fn progress_style() -> Result<ProgressStyle> {
    Ok(
        ProgressStyle::with_template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("=> "),
    )
}
