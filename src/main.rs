// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use log::{warn, info, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::{Path, PathBuf};
use std::io::Write;
use std::fs::File;
use std::io::BufReader;
use clap::{Args, Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use corpus_translator::app_config::{self, AlignmentPolicy, Config};
use corpus_translator::app_controller::Controller;

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
    /// Translate a corpus file into a parallel CSV corpus (default command)
    Translate {
        /// Source corpus, one sentence per line
        #[arg(value_name = "INPUT_PATH")]
        input_path: PathBuf,

        #[command(flatten)]
        options: TranslateOptions,
    },

    /// Generate shell completions for corpus-translator
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone)]
struct TranslateOptions {
    /// Output CSV path (defaults to `output_file` from the config)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Fail instead of overwriting an existing output file
    #[arg(short, long)]
    no_clobber: bool,

    /// SentencePiece model for the source language
    #[arg(long)]
    source_model: Option<PathBuf>,

    /// SentencePiece model for the target language
    #[arg(long)]
    target_model: Option<PathBuf>,

    /// Translation engine model file
    #[arg(short, long)]
    model: Option<PathBuf>,

    /// Device for the engine (-1 for CPU)
    #[arg(long, allow_negative_numbers = true)]
    gpu: Option<i32>,

    /// Fail when the engine returns a different number of lines
    #[arg(long)]
    strict_alignment: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// corpus-translator - Build parallel corpora with an NMT engine
///
/// Encodes each sentence with SentencePiece, translates the batch with
/// OpenNMT and writes source/target pairs to a CSV file.
#[derive(Parser, Debug)]
#[command(name = "corpus-translator")]
#[command(version)]
#[command(about = "Batch translation of a corpus into a parallel CSV corpus")]
#[command(long_about = "corpus-translator encodes a corpus with a SentencePiece model, translates it with onmt_translate and writes a Source,Target CSV file.

EXAMPLES:
    corpus-translator sample.tm                          # Translate using default config
    corpus-translator -o out.csv -n sample.tm            # Write to out.csv, fail if it exists
    corpus-translator -m ta_ml.pt --gpu 0 sample.tm      # Use a specific model on GPU 0
    corpus-translator --strict-alignment sample.tm       # Fail on line-count mismatches
    corpus-translator completions bash > ct.bash         # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Source corpus, one sentence per line
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    #[command(flatten)]
    options: TranslateOptions,
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

    // @returns: ANSI color and emoji for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("1;31", "❌ "),
            Level::Warn => ("1;33", "🚧 "),
            Level::Info => ("1;32", " "),
            Level::Debug => ("1;36", "🔍 "),
            Level::Trace => ("1;35", "📋 "),
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
            let (color, emoji) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                color, now, emoji, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
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

#[tokio::main]
async fn main() -> Result<()> {
    // The logger is installed once; the level is adjusted after the config is loaded
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "corpus-translator", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Translate { input_path, options }) => run_translate(input_path, options).await,
        None => {
            let input_path = cli.input_path.ok_or_else(|| {
                anyhow!("INPUT_PATH is required when no subcommand is specified")
            })?;
            run_translate(input_path, cli.options).await
        }
    }
}

async fn run_translate(input_path: PathBuf, options: TranslateOptions) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(to_level_filter(&config_log_level));
    }

    let mut config = load_or_create_config(&options.config_path)?;
    apply_overrides(&mut config, &options);

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(to_level_filter(&config.log_level));
    }

    let controller = Controller::with_config(config)?;

    let report = controller.run(&input_path, options.output, options.no_clobber).await?;
    info!("✅ All done! Check '{}' for results.", report.output_path.display());

    Ok(())
}

fn load_or_create_config(config_path: &str) -> Result<Config> {
    if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;

        Ok(config)
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        Ok(config)
    }
}

// Command line flags win over the config file
fn apply_overrides(config: &mut Config, options: &TranslateOptions) {
    if let Some(source_model) = &options.source_model {
        config.source_model = source_model.clone();
    }

    if let Some(target_model) = &options.target_model {
        config.target_model = target_model.clone();
    }

    if let Some(model) = &options.model {
        config.backend.model = model.clone();
    }

    if let Some(gpu) = options.gpu {
        config.backend.gpu = gpu;
    }

    if options.strict_alignment {
        config.alignment = AlignmentPolicy::Strict;
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }
}
