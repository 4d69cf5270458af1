use anyhow::{Result, Context};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {:?}", path))?;
        }
        Ok(())
    }

    /// Directory a file will be written into, `.` for bare file names
    pub fn parent_dir<P: AsRef<Path>>(path: P) -> PathBuf {
        match path.as_ref().parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Create a temporary file next to `target` so it can later be renamed onto it
    pub fn sibling_temp_file<P: AsRef<Path>>(target: P) -> Result<NamedTempFile> {
        let dir = Self::parent_dir(&target);
        Self::ensure_dir(&dir)?;

        tempfile::Builder::new()
            .prefix(".corpus-")
            .suffix(".part")
            .tempfile_in(&dir)
            .with_context(|| format!("Failed to create temporary file in {:?}", dir))
    }
}
