/*!
 * Error types for the corpus-translator application.
 *
 * This module contains custom error types for each stage of the batch
 * translation pipeline, using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading the input corpus
#[derive(Error, Debug)]
pub enum CorpusError {
    /// The input corpus is missing or cannot be read
    #[error("Input corpus not found or unreadable: {path}: {message}")]
    InputNotFound {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O message
        message: String,
    },
}

/// Errors that can occur in the subword codec
#[derive(Error, Debug)]
pub enum CodecError {
    /// The subword model could not be loaded
    #[error("Failed to load subword model {path}: {message}")]
    ModelLoad {
        /// Model path
        path: PathBuf,
        /// Loader message
        message: String,
    },

    /// The model rejected the input during encoding
    #[error("Subword encoding failed: {0}")]
    Encode(String),

    /// The model rejected the pieces during decoding
    #[error("Subword decoding failed: {0}")]
    Decode(String),
}

/// Errors that can occur while running the translation engine
#[derive(Error, Debug)]
pub enum BackendError {
    /// The engine ran but exited with a non-zero status
    #[error("Translation engine failed ({}): {stderr}", describe_status(.status))]
    Execution {
        /// Exit code, if the process was not killed by a signal
        status: Option<i32>,
        /// Captured standard error text
        stderr: String,
    },

    /// The engine could not be started at all
    #[error("Failed to launch translation engine '{command}': {message}")]
    Spawn {
        /// Command that was launched
        command: String,
        /// OS error message
        message: String,
    },

    /// Reading or writing a batch file failed
    #[error("Batch file error: {0}")]
    Io(String),

    /// The engine did not finish within the configured timeout
    #[error("Translation engine timed out after {0} seconds")]
    Timeout(u64),
}

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    }
}

/// Errors that can occur when pairing source and translated lines
#[derive(Error, Debug)]
pub enum AlignmentError {
    /// The engine returned a different number of lines than it was given
    #[error("Alignment mismatch: {source_lines} source lines but {translated_lines} translated lines")]
    Mismatch {
        /// Number of source lines
        source_lines: usize,
        /// Number of translated lines
        translated_lines: usize,
    },
}

/// Errors that can occur during a pipeline run
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Error reading the input corpus
    #[error("Input error: {0}")]
    Input(#[from] CorpusError),

    /// Error from the subword codec
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    /// Error from the translation backend
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    /// Error aligning source and target lines
    #[error("Alignment error: {0}")]
    Alignment(#[from] AlignmentError),

    /// Error writing the output corpus
    #[error("Export error: {0}")]
    Export(String),

    /// The pipeline has already been run once
    #[error("Pipeline already ran; create a new pipeline for each run")]
    AlreadyRun,
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from the pipeline
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
