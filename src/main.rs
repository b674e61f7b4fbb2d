// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, warn};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use app_controller::Controller;

mod app_config;
mod app_controller;
mod detection;
mod errors;
mod file_utils;
mod language_utils;
mod pdf_extractor;
mod pipeline;
mod preprocessing;
mod providers;
mod summarization;
mod translation;
mod validation;

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
    /// Summarize a document or a directory of documents (default command)
    #[command(alias = "sum")]
    Summarize(SummarizeArgs),

    /// Generate shell completions for polysum
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct SummarizeArgs {
    /// Input document (PDF, txt, md) or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Force overwrite of existing summary files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Maximum summary length in tokens
    #[arg(long)]
    max_length: Option<usize>,

    /// Minimum summary length in tokens
    #[arg(long)]
    min_length: Option<usize>,

    /// Number of beams for beam search decoding
    #[arg(short = 'b', long)]
    beams: Option<usize>,

    /// Maximum number of input characters to process
    #[arg(long)]
    input_max_length: Option<usize>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Extract and clean the document text without summarizing
    #[arg(short, long)]
    extract_only: bool,
}

/// polysum - Multilingual Text and PDF Summarization
///
/// Summarizes documents in their original language. English text is
/// summarized directly; supported Romance languages are pivoted through
/// English.
#[derive(Parser, Debug)]
#[command(name = "polysum")]
#[command(author = "polysum contributors")]
#[command(version = "1.0.0")]
#[command(about = "Summarize text and PDF documents in their original language")]
#[command(long_about = "polysum extracts text from documents, detects the language and produces a
summary in that same language.

EXAMPLES:
    polysum report.pdf                         # Summarize using default config
    polysum -f report.pdf                      # Force overwrite an existing summary
    polysum --max-length 120 notes.txt         # Bound the summary length
    polysum -e report.pdf                      # Extract and clean text only
    polysum --log-level debug /documents/      # Process a directory with debug logging
    polysum completions bash > polysum.bash    # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically.

SUPPORTED LANGUAGES:
    en, ca, es, fr, it, pt, ro - English is summarized directly, the others are
    translated to English, summarized, and translated back.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input document (PDF, txt, md) or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Force overwrite of existing summary files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Maximum summary length in tokens
    #[arg(long)]
    max_length: Option<usize>,

    /// Minimum summary length in tokens
    #[arg(long)]
    min_length: Option<usize>,

    /// Number of beams for beam search decoding
    #[arg(short = 'b', long)]
    beams: Option<usize>,

    /// Maximum number of input characters to process
    #[arg(long)]
    input_max_length: Option<usize>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Extract and clean the document text without summarizing
    #[arg(short, long)]
    extract_only: bool,
}

// @struct: Custom logger implementation
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "polysum", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Summarize(args)) => run_summarize(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let input_path = cli
                .input_path
                .ok_or_else(|| anyhow!("INPUT_PATH is required when no subcommand is specified"))?;

            let args = SummarizeArgs {
                input_path,
                force_overwrite: cli.force_overwrite,
                max_length: cli.max_length,
                min_length: cli.min_length,
                beams: cli.beams,
                input_max_length: cli.input_max_length,
                config_path: cli.config_path,
                log_level: cli.log_level,
                extract_only: cli.extract_only,
            };
            run_summarize(args).await
        }
    }
}

async fn run_summarize(options: SummarizeArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(config_log_level.to_level_filter());
    }

    // Load or create configuration
    let config_path = Path::new(&options.config_path);
    let mut config = if config_path.exists() {
        Config::from_file(config_path)?
    } else {
        warn!(
            "Config file not found at '{}', creating default config.",
            options.config_path
        );
        let config = Config::default();
        config
            .save(config_path)
            .context("Failed to write default config")?;
        config
    };

    // Override config with CLI options if provided
    if let Some(max_length) = options.max_length {
        config.pipeline.sum_max_length = max_length;
    }
    if let Some(min_length) = options.min_length {
        config.pipeline.sum_min_length = min_length;
    }
    if let Some(beams) = options.beams {
        config.pipeline.num_beams = beams;
    }
    if let Some(input_max_length) = options.input_max_length {
        config.pipeline.input_max_length = input_max_length;
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config
        .validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }

    let controller = Controller::with_config(config)?;

    if options.extract_only {
        let text = controller.load_document(&options.input_path)?;
        println!("{}", text);
        return Ok(());
    }

    controller
        .run(options.input_path, options.force_overwrite)
        .await
}
