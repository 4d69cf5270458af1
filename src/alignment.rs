/*!
 * Alignment of source and translated lines, and CSV export of the result.
 */

use log::{debug, warn};
use std::path::Path;

use crate::app_config::AlignmentPolicy;
use crate::errors::{AlignmentError, PipelineError};
use crate::file_utils::FileManager;

/// Header row of the exported corpus
pub const CSV_HEADER: [&str; 2] = ["Source", "Target"];

/// A source sentence paired with its translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParallelRecord {
    pub source: String,
    pub target: String,
}

impl ParallelRecord {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Pair the i-th source line with the i-th translated line
///
/// With `AlignmentPolicy::Truncate` pairing stops at the shorter of the two
/// sequences; with `AlignmentPolicy::Strict` a length difference is an error.
pub fn align(
    source_lines: &[String],
    translated_lines: &[String],
    policy: AlignmentPolicy,
) -> Result<Vec<ParallelRecord>, AlignmentError> {
    if source_lines.len() != translated_lines.len() {
        match policy {
            AlignmentPolicy::Strict => {
                return Err(AlignmentError::Mismatch {
                    source_lines: source_lines.len(),
                    translated_lines: translated_lines.len(),
                });
            }
            AlignmentPolicy::Truncate => {
                warn!(
                    "Engine returned {} lines for {} source lines, keeping {} pairs",
                    translated_lines.len(),
                    source_lines.len(),
                    source_lines.len().min(translated_lines.len())
                );
            }
        }
    }

    Ok(source_lines
        .iter()
        .zip(translated_lines)
        .map(|(source, target)| ParallelRecord::new(source.as_str(), target.as_str()))
        .collect())
}

/// Write the records as a `Source,Target` CSV file
///
/// Rows go to a temporary file next to `output_path` that is renamed into
/// place once complete, so the output is either the full corpus or untouched.
/// Returns the number of data rows written.
pub fn export<P: AsRef<Path>>(records: &[ParallelRecord], output_path: P) -> Result<usize, PipelineError> {
    let output_path = output_path.as_ref();

    let temp_file = FileManager::sibling_temp_file(output_path)
        .map_err(|e| PipelineError::Export(format!("{:#}", e)))?;

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(temp_file);

    writer
        .write_record(CSV_HEADER)
        .map_err(|e| PipelineError::Export(e.to_string()))?;
    for record in records {
        writer
            .write_record([record.source.as_str(), record.target.as_str()])
            .map_err(|e| PipelineError::Export(e.to_string()))?;
    }

    let temp_file = writer
        .into_inner()
        .map_err(|e| PipelineError::Export(e.error().to_string()))?;
    temp_file
        .as_file()
        .sync_all()
        .map_err(|e| PipelineError::Export(e.to_string()))?;
    temp_file.persist(output_path).map_err(|e| {
        PipelineError::Export(format!("Failed to write {:?}: {}", output_path, e.error))
    })?;

    debug!("Wrote {} records to {:?}", records.len(), output_path);
    Ok(records.len())
}
