/*!
 * Common test utilities for the corpus-translator test suite
 */

use std::path::{Path, PathBuf};
use std::fs;
use anyhow::Result;
use tempfile::TempDir;


/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample corpus with blank and padded lines
pub fn create_test_corpus(dir: &Path, filename: &str) -> Result<PathBuf> {
    let content = "hello world\n\n   good morning  \nfoo\n\t\nthe quick brown fox\n";
    create_test_file(dir, filename, content)
}

/// Route library logs through env_logger when RUST_LOG is set
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Read an exported CSV back as rows, header included
pub fn read_csv_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|field| field.to_string()).collect());
    }
    Ok(rows)
}

/// Number of entries in a directory
pub fn count_entries(dir: &Path) -> Result<usize> {
    Ok(fs::read_dir(dir)?.count())
}

/// Engine stub that copies its `-src` file to its `-output` file
#[cfg(unix)]
pub const ECHO_ENGINE: &str = r#"#!/bin/sh
while [ $# -gt 0 ]; do
  case "$1" in
    -src) src="$2"; shift ;;
    -output) out="$2"; shift ;;
  esac
  shift
done
echo "PRED AVG SCORE: -0.1000, PRED PPL: 1.1000" >&2
cp "$src" "$out"
"#;

/// Engine stub that keeps only the first three lines
#[cfg(unix)]
pub const TRUNCATING_ENGINE: &str = r#"#!/bin/sh
while [ $# -gt 0 ]; do
  case "$1" in
    -src) src="$2"; shift ;;
    -output) out="$2"; shift ;;
  esac
  shift
done
head -n 3 "$src" > "$out"
"#;

/// Engine stub that fails with a diagnostic on stderr
#[cfg(unix)]
pub const FAILING_ENGINE: &str = r#"#!/bin/sh
echo "RuntimeError: model file not found" >&2
exit 1
"#;

/// Engine stub that records its arguments, one per line, next to itself
#[cfg(unix)]
pub const RECORDING_ENGINE: &str = r#"#!/bin/sh
printf '%s\n' "$@" > "$(dirname "$0")/args.txt"
while [ $# -gt 0 ]; do
  case "$1" in
    -src) src="$2"; shift ;;
    -output) out="$2"; shift ;;
  esac
  shift
done
cp "$src" "$out"
"#;

/// Write an executable engine stub into `dir`
#[cfg(unix)]
pub fn write_engine_script(dir: &Path, name: &str, body: &str) -> Result<PathBuf> {
    use std::os::unix::fs::PermissionsExt;

    let path = create_test_file(dir, name, body)?;
    let mut permissions = fs::metadata(&path)?.permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(&path, permissions)?;
    Ok(path)
}
