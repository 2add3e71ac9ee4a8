// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use log::{error, warn, info, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::{Path, PathBuf};
use std::io::Write;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};
use indicatif::{ProgressBar, ProgressStyle};

use bhashantar::app_config::{self, Config};
use bhashantar::language_utils::{get_language_name, normalize_language_code, supported_languages};
use bhashantar::providers::load_neural_translator;
use bhashantar::translation::TranslationService;

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
    /// Translate a single text and print the response as JSON
    Translate {
        /// Text to translate
        #[arg(value_name = "TEXT")]
        text: String,

        /// Source language code (e.g., 'en', 'hin', 'ta')
        #[arg(short, long)]
        source_language: Option<String>,

        /// Target language code (e.g., 'hi', 'tam', 'en')
        #[arg(short, long)]
        target_language: Option<String>,
    },

    /// Translate every non-empty line of a file and print a JSON array
    Batch {
        /// File with one text per line
        #[arg(value_name = "INPUT_FILE")]
        input_file: PathBuf,

        /// Source language code
        #[arg(short, long)]
        source_language: Option<String>,

        /// Target language code
        #[arg(short, long)]
        target_language: Option<String>,
    },

    /// List supported language codes
    Languages,

    /// Check that the translation model is reachable and produces output
    Health,

    /// Generate shell completions for bhashantar
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Bhashantar - Offline English/Indic text translation
///
/// Translates text between English and Indic languages using a phrase
/// dictionary, word substitution and a neural translation model.
#[derive(Parser, Debug)]
#[command(name = "bhashantar")]
#[command(version)]
#[command(about = "Offline English/Indic text translation")]
#[command(long_about = "Bhashantar translates short texts between English and Indic languages.

EXAMPLES:
    bhashantar translate \"hello\"                  # English to Hindi (default pair)
    bhashantar translate -t ta \"Good morning\"     # English to Tamil
    bhashantar batch -s en -t bn sentences.txt    # Translate one text per line
    bhashantar languages                          # List supported languages
    bhashantar health                             # Check the model backend
    bhashantar completions bash > bhashantar.bash # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "conf.json")]
    config: PathBuf,

    /// Set logging level
    #[arg(short, long, global = true, value_enum)]
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

    // @returns: Emoji and ANSI color for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("❌", "1;31"),
            Level::Warn => ("🚧", "1;33"),
            Level::Info => (" ", "1;32"),
            Level::Debug => ("🔍", "1;36"),
            Level::Trace => ("📋", "1;35"),
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
            let (emoji, color) = Self::style_for_level(record.level());

            // Logs go to stderr so stdout stays machine-readable JSON
            let _ = writeln!(
                std::io::stderr(),
                "\x1B[{}m{} {} {}\x1B[0m",
                color, now, emoji, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with trace level so the max level
    // can be lowered later from the config or the command line
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "bhashantar", &mut std::io::stdout());
        return Ok(());
    }

    let config = load_config(&cli.config, cli.log_level.clone())?;
    log::set_max_level(config.log_level.to_level_filter());

    match cli.command {
        Commands::Translate { text, source_language, target_language } => {
            let service = build_service(&config).await;
            let source = source_language.unwrap_or_else(|| config.source_language.clone());
            let target = target_language.unwrap_or_else(|| config.target_language.clone());

            let response = service.translate(&text, &source, &target).await;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Commands::Batch { input_file, source_language, target_language } => {
            run_batch(&config, &input_file, source_language, target_language).await?;
        }
        Commands::Languages => {
            for code in supported_languages() {
                let name = get_language_name(code).unwrap_or_else(|_| code.to_string());
                println!("{}\t{}", code, name);
            }
        }
        Commands::Health => {
            run_health_check(&config).await?;
        }
        // Handled before loading the config
        Commands::Completions { .. } => {}
    }

    Ok(())
}

/// Load the configuration file, creating a default one if it doesn't exist
fn load_config(config_path: &Path, log_level: Option<CliLogLevel>) -> Result<Config> {
    let mut config = if config_path.exists() {
        Config::from_file(config_path)?
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path.display());

        let config = Config::default();
        config.save(config_path)?;
        config
    };

    // Command line log level overrides the config
    if let Some(log_level) = log_level {
        config.log_level = log_level.into();
    }

    config.validate()
        .context("Configuration validation failed")?;

    Ok(config)
}

async fn build_service(config: &Config) -> TranslationService {
    let neural = load_neural_translator(&config.translation.model).await;
    TranslationService::new(neural, config.translation.cache.build())
}

async fn run_batch(
    config: &Config,
    input_file: &Path,
    source_language: Option<String>,
    target_language: Option<String>,
) -> Result<()> {
    let content = std::fs::read_to_string(input_file)
        .context(format!("Failed to read input file: {}", input_file.display()))?;

    let texts: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if texts.is_empty() {
        return Err(anyhow!("Input file contains no text: {}", input_file.display()));
    }

    let service = build_service(config).await;
    let source = source_language.unwrap_or_else(|| config.source_language.clone());
    let target = target_language.unwrap_or_else(|| config.target_language.clone());

    let progress_bar = ProgressBar::new(texts.len() as u64);
    let template_result = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} texts ({percent}%) {msg} {eta}")
        .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    progress_bar.set_style(template_result.progress_chars("█▓▒░"));
    progress_bar.set_message("Translating");

    let pb = progress_bar.clone();
    let responses = service
        .translate_batch_with_progress(&texts, &source, &target, move |completed, _total| {
            pb.set_position(completed as u64);
        })
        .await;

    progress_bar.finish_and_clear();

    let failures = responses.iter().filter(|response| !response.is_success()).count();
    if failures > 0 {
        warn!("{} of {} texts failed to translate", failures, responses.len());
    }

    let (hits, misses, hit_rate) = service.cache().stats();
    info!("Cache: {} hits, {} misses ({:.1}% hit rate)", hits, misses, hit_rate * 100.0);

    println!("{}", serde_json::to_string_pretty(&responses)?);
    Ok(())
}

async fn run_health_check(config: &Config) -> Result<()> {
    let neural = load_neural_translator(&config.translation.model).await;

    if let Err(e) = neural.test_connection().await {
        error!("Model backend check failed: {}", e);
        let status = serde_json::json!({
            "status": "unavailable",
            "model": config.translation.model.model_name,
            "error": e.to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Err(anyhow!("Translation model is not available"));
    }

    let target = normalize_language_code(&config.target_language);
    let status = match neural.warm_up(target).await {
        Ok(output) => {
            info!("Warm-up translation succeeded: Hello -> {}", output);
            serde_json::json!({
                "status": "ok",
                "model": config.translation.model.model_name,
                "target_language": target,
                "warm_up": output,
            })
        }
        Err(e) => {
            error!("Warm-up translation failed: {}", e);
            serde_json::json!({
                "status": "error",
                "model": config.translation.model.model_name,
                "target_language": target,
                "error": e.to_string(),
            })
        }
    };

    println!("{}", serde_json::to_string_pretty(&status)?);

    if status["status"] == "ok" {
        Ok(())
    } else {
        Err(anyhow!("Translation model failed the warm-up translation"))
    }
}
