//! CLI command implementations

use crate::config::{CliConfig, OutputConfig};
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use anyhow::{Context, Result};
use bambara_core::{Tokenizer, TokenizerConfig};
use clap::{Args, Subcommand};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

pub mod frequency;
pub mod ngrams;
pub mod sentences;
pub mod tokenize;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Tokenize text into words, numbers, and punctuation
    Tokenize(tokenize::TokenizeArgs),

    /// Split text into sentences
    Sentences(sentences::SentencesArgs),

    /// Count token frequencies
    Frequency(frequency::FrequencyArgs),

    /// Generate character n-grams
    Ngrams(ngrams::NgramsArgs),

    /// List fixed rule tables and output formats
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List contraction prefixes and their expansions
    Contractions,

    /// List morphology suffixes
    Suffixes,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Tokenize(args) => args.execute(),
            Commands::Sentences(args) => args.execute(),
            Commands::Frequency(args) => args.execute(),
            Commands::Ngrams(args) => args.execute(),
            Commands::List { subcommand } => list(subcommand),
        }
    }
}

fn list(subcommand: &ListCommands) -> Result<()> {
    match subcommand {
        ListCommands::Contractions => {
            for (prefix, expansion) in bambara_core::CONTRACTIONS {
                println!("{prefix} -> {expansion}");
            }
        }
        ListCommands::Suffixes => {
            for suffix in bambara_core::MORPH_SUFFIXES {
                println!("{suffix}");
            }
        }
        ListCommands::Formats => {
            println!("text");
            println!("json");
        }
    }
    Ok(())
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one item per line
    Text,
    /// JSON array
    Json,
}

/// Arguments shared by every processing command
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Input files or glob patterns; `-` reads stdin
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommonArgs {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }

    /// Build the tokenizer from the configuration file and flag overrides
    pub fn build_tokenizer(&self, flags: &TokenizerFlags) -> Result<(Tokenizer, OutputConfig)> {
        let file = CliConfig::load(self.config.as_deref())?;

        let mut config = file.tokenizer;
        flags.apply(&mut config);

        let tokenizer = Tokenizer::with_config(config)?;
        Ok((tokenizer, file.output))
    }

    /// Create the formatter for the selected format and destination
    pub fn formatter(&self, output: &OutputConfig) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(
                File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?,
            ),
            None => Box::new(io::stdout()),
        };

        Ok(match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, output.pretty_json)),
        })
    }
}

/// Tokenizer options; flags overlay values from the configuration file
#[derive(Debug, Default, Args)]
pub struct TokenizerFlags {
    /// Lowercase every token
    #[arg(long)]
    pub lowercase: bool,

    /// Drop tokens that are not entirely alphabetic
    #[arg(long)]
    pub remove_punct: bool,

    /// Expand contracted forms instead of keeping them
    #[arg(long)]
    pub expand_contractions: bool,

    /// Split hyphenated compounds
    #[arg(long)]
    pub split_compounds: bool,

    /// Stopword to exclude (repeatable)
    #[arg(long = "stopword", value_name = "WORD")]
    pub stopwords: Vec<String>,
}

impl TokenizerFlags {
    /// Overlay flags onto a configuration loaded from file. Switches only
    /// force options on; an absent switch leaves the file value alone.
    pub fn apply(&self, config: &mut TokenizerConfig) {
        if self.lowercase {
            config.lowercase = true;
        }
        if self.remove_punct {
            config.remove_punct = true;
        }
        if self.expand_contractions {
            config.keep_contractions = false;
        }
        if self.split_compounds {
            config.split_compounds = true;
        }
        config.stopwords.extend(self.stopwords.iter().cloned());
    }
}
