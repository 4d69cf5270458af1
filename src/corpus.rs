/*!
 * Corpus reader for line-oriented source files.
 *
 * One sentence per line; surrounding whitespace is trimmed and blank lines
 * are dropped. The order of the returned lines is the alignment key for the
 * rest of the pipeline.
 */

use log::debug;
use std::fs;
use std::path::Path;

use crate::errors::CorpusError;

/// Read the input corpus into an ordered list of non-empty, trimmed sentences
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, CorpusError> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| CorpusError::InputNotFound {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let lines = parse_lines(&content);
    debug!("Read {} non-empty lines from {:?}", lines.len(), path);

    Ok(lines)
}

/// Split text into trimmed lines, skipping lines that are empty after trimming
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
pub fn parse_lines(content: &str) -> Vec<String> {
    content
        .split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
