use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::PathBuf;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// SentencePiece model for the source language
    #[serde(default = "default_source_model")]
    pub source_model: PathBuf,

    /// SentencePiece model for the target language
    #[serde(default = "default_target_model")]
    pub target_model: PathBuf,

    /// Default output CSV path when none is given on the command line
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,

    /// Translation engine config
    #[serde(default)]
    pub backend: BackendConfig,

    /// What to do when the engine returns a different number of lines
    #[serde(default)]
    pub alignment: AlignmentPolicy,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Settings for the external translation engine
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BackendConfig {
    // @field: Executable name or path
    #[serde(default = "default_command")]
    pub command: String,

    // @field: Trained engine model artifact
    #[serde(default = "default_engine_model")]
    pub model: PathBuf,

    // @field: Device selector, -1 runs on CPU
    #[serde(default = "default_gpu")]
    pub gpu: i32,

    // @field: Minimum output length in tokens
    #[serde(default = "default_min_length")]
    pub min_length: u32,

    // @field: Replace unknown tokens with the source token of highest attention
    #[serde(default = "default_true")]
    pub replace_unk: bool,

    // @field: Ask the engine for verbose diagnostics
    #[serde(default = "default_true")]
    pub verbose: bool,

    // @field: Directory for the temporary batch files (system temp dir if unset)
    #[serde(default)]
    pub temp_dir: Option<PathBuf>,

    // @field: Kill the engine after this many seconds (no limit if unset)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            model: default_engine_model(),
            gpu: default_gpu(),
            min_length: default_min_length(),
            replace_unk: true,
            verbose: true,
            temp_dir: None,
            timeout_secs: None,
        }
    }
}

/// Policy for pairing source lines with translated lines of a different count
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AlignmentPolicy {
    /// Pair up to the shorter length and log a warning
    #[default]
    Truncate,
    /// Fail the run
    Strict,
}

impl std::fmt::Display for AlignmentPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Truncate => write!(f, "truncate"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

impl std::str::FromStr for AlignmentPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "truncate" => Ok(Self::Truncate),
            "strict" => Ok(Self::Strict),
            _ => Err(anyhow!("Invalid alignment policy: {}", s)),
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

fn default_source_model() -> PathBuf {
    PathBuf::from("./sourceM.model")
}

fn default_target_model() -> PathBuf {
    PathBuf::from("./targetM.model")
}

fn default_output_file() -> PathBuf {
    PathBuf::from("parallel_corpus.csv")
}

fn default_command() -> String {
    "onmt_translate".to_string()
}

fn default_engine_model() -> PathBuf {
    PathBuf::from("model.pt")
}

fn default_gpu() -> i32 {
    -1
}

fn default_min_length() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.source_model.as_os_str().is_empty() {
            return Err(anyhow!("Source subword model path is required"));
        }

        if self.target_model.as_os_str().is_empty() {
            return Err(anyhow!("Target subword model path is required"));
        }

        if self.output_file.as_os_str().is_empty() {
            return Err(anyhow!("Output file path is required"));
        }

        self.backend.validate()
    }
}

impl BackendConfig {
    /// Validate the engine settings
    pub fn validate(&self) -> Result<()> {
        if self.command.trim().is_empty() {
            return Err(anyhow!("Translation engine command is required"));
        }

        if self.model.as_os_str().is_empty() {
            return Err(anyhow!("Translation engine model path is required"));
        }

        if self.timeout_secs == Some(0) {
            return Err(anyhow!("Engine timeout must be greater than zero when set"));
        }

        Ok(())
    }

    /// Whether the engine runs on CPU
    pub fn is_cpu(&self) -> bool {
        self.gpu < 0
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            source_model: default_source_model(),
            target_model: default_target_model(),
            output_file: default_output_file(),
            backend: BackendConfig::default(),
            alignment: AlignmentPolicy::default(),
            log_level: LogLevel::default(),
        }
    }
}
