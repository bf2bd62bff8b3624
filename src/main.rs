// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use log::{warn, info, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::{Path, PathBuf};
use std::io::Write;
use std::fs::File;
use std::io::BufReader;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::app_config::{Config, TranslationProvider};
use app_controller::Controller;

mod app_config;
mod app_controller;
mod batch;
mod dataset;
mod errors;
mod language_utils;
mod pipeline;
mod providers;
mod translation;

/// CLI Wrapper for TranslationProvider to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliTranslationProvider {
    Gemini,
    OpenAI,
    Ollama,
}

impl From<CliTranslationProvider> for TranslationProvider {
    fn from(cli_provider: CliTranslationProvider) -> Self {
        match cli_provider {
            CliTranslationProvider::Gemini => TranslationProvider::Gemini,
            CliTranslationProvider::OpenAI => TranslationProvider::OpenAI,
            CliTranslationProvider::Ollama => TranslationProvider::Ollama,
        }
    }
}

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

fn to_level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate a tabular dataset using AI providers (default command)
    #[command(alias = "translate")]
    Translate(TranslateArgs),

    /// Generate shell completions for linguasheet
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Input CSV file to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Name of the column holding the source text (default "Original Text")
    #[arg(short = 'c', long)]
    source_column: Option<String>,

    /// Output CSV file path (default: translations_<timestamp>.csv)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Batch size, reserved for future streaming/progress use
    #[arg(short, long, default_value_t = 10)]
    batch_size: usize,

    /// Translation provider to use
    #[arg(short, long, value_enum)]
    provider: Option<CliTranslationProvider>,

    /// Model name to use for translation
    #[arg(short, long)]
    model: Option<String>,

    /// API key for the selected provider
    #[arg(short, long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Configuration file path
    #[arg(long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// linguasheet - AI-powered tabular translation
///
/// Translates the source column of a CSV dataset into an ordered set of
/// target languages, one column per language, using AI providers
/// (Gemini, OpenAI, Ollama).
#[derive(Parser, Debug)]
#[command(name = "linguasheet")]
#[command(version = "1.0.0")]
#[command(about = "AI-powered tabular translation tool")]
#[command(long_about = "linguasheet reads one column of a CSV file and translates every row into the configured target languages, writing one output column per language.

EXAMPLES:
    linguasheet input.csv                              # Translate using default config
    linguasheet -c \"Source\" input.csv                  # Use a different source column
    linguasheet -p openai -m gpt-4o-mini input.csv     # Use specific provider and model
    linguasheet -o out.csv input.csv                   # Write to an explicit output path
    linguasheet --log-level debug input.csv            # Verbose logging
    linguasheet completions bash > linguasheet.bash    # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically. Target languages and their column names
    are configured there as an ordered list of {code, display_name} entries.

SUPPORTED PROVIDERS:
    gemini - Google Generative Language API (requires API key; default: gemini-2.5-flash)
    openai - OpenAI API (requires API key)
    ollama - Local Ollama server (default: llama3.2:3b)")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input CSV file to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Name of the column holding the source text (default "Original Text")
    #[arg(short = 'c', long)]
    source_column: Option<String>,

    /// Output CSV file path (default: translations_<timestamp>.csv)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Batch size, reserved for future streaming/progress use
    #[arg(short, long, default_value_t = 10)]
    batch_size: usize,

    /// Translation provider to use
    #[arg(short, long, value_enum)]
    provider: Option<CliTranslationProvider>,

    /// Model name to use for translation
    #[arg(short, long)]
    model: Option<String>,

    /// API key for the selected provider
    #[arg(short, long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Configuration file path
    #[arg(long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
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

    // @returns: ANSI color code for log level
    fn get_color_for_level(level: Level) -> &'static str {
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
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::get_color_for_level(record.level());

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
            generate(shell, &mut cmd, "linguasheet", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Translate(args)) => run_translate(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let input_path = cli.input_path.ok_or_else(|| {
                anyhow!("INPUT_PATH is required when no subcommand is specified")
            })?;

            let translate_args = TranslateArgs {
                input_path,
                source_column: cli.source_column,
                output: cli.output,
                batch_size: cli.batch_size,
                provider: cli.provider,
                model: cli.model,
                api_key: cli.api_key,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_translate(translate_args).await
        }
    }
}

async fn run_translate(options: TranslateArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(to_level_filter(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader::<_, Config>(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(provider) = &options.provider {
        config.translation.provider = provider.clone().into();
    }

    if let Some(model) = &options.model {
        let provider = config.translation.provider.clone();
        if let Some(provider_config) = config.translation.get_provider_config_mut(&provider) {
            provider_config.model = model.clone();
        }
    }

    if let Some(api_key) = &options.api_key {
        let provider = config.translation.provider.clone();
        if let Some(provider_config) = config.translation.get_provider_config_mut(&provider) {
            provider_config.api_key = api_key.clone();
        }
    }

    if let Some(source_column) = &options.source_column {
        config.source_column = source_column.clone();
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config.validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(to_level_filter(&config.log_level));
    }

    if !options.input_path.is_file() {
        return Err(anyhow!("Input path does not exist: {:?}", options.input_path));
    }

    // The core processes records strictly sequentially; the batch size is
    // accepted for interface completeness only
    log::debug!("Batch size {} (unused by the sequential core)", options.batch_size);

    // Default output path carries a timestamp so repeated runs don't clobber
    let output_path = options.output.clone().unwrap_or_else(|| {
        PathBuf::from(format!(
            "translations_{}.csv",
            chrono::Local::now().format("%Y%m%d_%H%M%S")
        ))
    });

    // Create controller and run the batch
    let controller = Controller::with_config(config)?;
    controller.run(&options.input_path, &output_path).await?;

    info!("Done");
    Ok(())
}
