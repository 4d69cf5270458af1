/*!
 * Temporary batch files for a single engine call.
 *
 * Both files are `TempPath`s: they are removed when the job is dropped, so
 * every exit path of the caller (success, engine failure, early `?`) releases them.
 */

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::{Builder, TempPath};

use crate::errors::BackendError;

/// Input and output batch files for one translation run
#[derive(Debug)]
pub struct TranslationJob {
    input: TempPath,
    output: TempPath,
}

impl TranslationJob {
    /// Write `lines` to a new input file and allocate an empty output file
    ///
    /// Files are created in `temp_dir` when given, otherwise in the system temp directory.
    pub fn create(lines: &[String], temp_dir: Option<&Path>) -> Result<Self, BackendError> {
        let mut input_file = new_temp_file("onmt-src-", temp_dir)?;
        input_file
            .write_all(batch_payload(lines).as_bytes())
            .and_then(|_| input_file.flush())
            .map_err(|e| BackendError::Io(format!("Failed to write source batch: {}", e)))?;
        let input = input_file.into_temp_path();

        let output = new_temp_file("onmt-pred-", temp_dir)?.into_temp_path();

        Ok(Self { input, output })
    }

    pub fn input_path(&self) -> &Path {
        &self.input
    }

    pub fn output_path(&self) -> &Path {
        &self.output
    }

    /// Read the engine's output file as trimmed lines
    pub fn read_output(&self) -> Result<Vec<String>, BackendError> {
        let content = fs::read_to_string(&self.output).map_err(|e| {
            BackendError::Io(format!("Failed to read engine output {:?}: {}", self.output_path(), e))
        })?;

        Ok(content.lines().map(|line| line.trim().to_string()).collect())
    }
}

/// One encoded line per row, newline terminated
pub fn batch_payload(lines: &[String]) -> String {
    let mut payload = lines.join("\n");
    payload.push('\n');
    payload
}

fn new_temp_file(prefix: &str, temp_dir: Option<&Path>) -> Result<tempfile::NamedTempFile, BackendError> {
    let mut builder = Builder::new();
    builder.prefix(prefix).suffix(".txt");

    let file = match temp_dir {
        Some(dir) => builder.tempfile_in(dir),
        None => builder.tempfile(),
    };

    file.map_err(|e| BackendError::Io(format!("Failed to create batch file: {}", e)))
}
