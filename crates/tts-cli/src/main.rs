//! Kokoro text front-end command-line interface.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::info;
use tts_core::{BackendKind, EncoderConfig, Locale};

mod commands;

/// Kokoro text front-end CLI
#[derive(Debug, Parser)]
#[command(name = "kokoro-text")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level (overrides the config file)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Log format (overrides the config file)
    #[arg(long, global = true)]
    log_format: Option<LogFormatArg>,

    /// Encoder configuration file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormatArg {
    Json,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LocaleArg {
    /// American English
    #[value(name = "a", alias = "en-us")]
    American,
    /// British English
    #[value(name = "b", alias = "en-gb")]
    British,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::American => Locale::AmericanEnglish,
            LocaleArg::British => Locale::BritishEnglish,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BackendArg {
    Espeak,
    Mock,
}

impl From<BackendArg> for BackendKind {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Espeak => BackendKind::Espeak,
            BackendArg::Mock => BackendKind::Mock,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Normalize text (dry run)
    Normalize {
        /// Input text (use @file.txt for file input)
        input: String,

        /// Print the text after every rule
        #[arg(long)]
        steps: bool,
    },

    /// Split text into punctuation and phonemizable segments
    Segment {
        /// Input text (use @file.txt for file input)
        input: String,

        /// Skip text normalization
        #[arg(long)]
        no_normalize: bool,
    },

    /// Encode text into model token ids
    Encode {
        /// Input text (use @file.txt for file input)
        input: String,

        /// Locale: a (American English) or b (British English)
        #[arg(long)]
        locale: Option<LocaleArg>,

        /// Skip text normalization
        #[arg(long)]
        no_normalize: bool,

        /// Phoneme backend (overrides the config file)
        #[arg(long)]
        backend: Option<BackendArg>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the symbol vocabulary
    Vocab {
        /// Look up a single symbol
        #[arg(long)]
        symbol: Option<char>,
    },

    /// Show version and configuration info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EncoderConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => EncoderConfig::default(),
    };

    // Initialize logging
    let mut logging = config.logging.clone();
    if let Some(level) = &cli.log_level {
        logging.level = level.clone();
    }
    match cli.log_format {
        Some(LogFormatArg::Json) => logging.format = "json".to_string(),
        Some(LogFormatArg::Text) => logging.format = "text".to_string(),
        None => {}
    }
    runtime::logging::init_logging_from_config(&logging);

    info!(version = env!("CARGO_PKG_VERSION"), "Starting kokoro-text");

    match cli.command {
        Commands::Normalize { input, steps } => {
            let text = commands::read_input(&input)?;
            commands::normalize::run(&text, steps).context("normalization failed")?;
        }
        Commands::Segment {
            input,
            no_normalize,
        } => {
            let text = commands::read_input(&input)?;
            let normalize = config.normalize && !no_normalize;
            commands::segment::run(&config, &text, normalize).context("segmentation failed")?;
        }
        Commands::Encode {
            input,
            locale,
            no_normalize,
            backend,
            json,
        } => {
            let options = commands::encode::EncodeOptions {
                text: commands::read_input(&input)?,
                locale: locale.map(Locale::from),
                no_normalize,
                backend: backend.map(BackendKind::from),
                json,
            };
            commands::encode::run(&config, options)
                .await
                .context("encoding failed")?;
        }
        Commands::Vocab { symbol } => {
            commands::vocab::run(&config, symbol).context("vocabulary lookup failed")?;
        }
        Commands::Info => {
            commands::info::run(&config).await;
        }
    }

    Ok(())
}
