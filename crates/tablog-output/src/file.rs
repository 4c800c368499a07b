//! Output-file path management.
//!
//! `LogFile` owns the destination path and performs the path-level operations
//! the CSV sink needs: parent-directory creation, (re)opening the file for
//! write, and the rename-to-sibling step of a schema migration.  Open handles
//! are returned to the caller; closing is by drop.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use crate::OutputResult;

/// The exclusively-owned destination of one output sink.
///
/// Construction creates parent directories but not the file itself, so a
/// sink that never writes a row never touches the filesystem beyond its
/// directory.
#[derive(Debug)]
pub struct LogFile {
    path: PathBuf,
}

impl LogFile {
    /// Record `path` as the destination, creating parent directories.
    pub fn new(path: impl Into<PathBuf>) -> OutputResult<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open the destination for write, truncating any existing content.
    pub fn create(&self) -> OutputResult<File> {
        Ok(File::create(&self.path)?)
    }

    /// The sibling path used to park the old file during a schema migration:
    /// `progress.csv` → `progress_temp.csv`.
    pub fn temp_path(&self) -> PathBuf {
        let stem = self
            .path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = match self.path.extension() {
            Some(ext) => format!("{stem}_temp.{}", ext.to_string_lossy()),
            None => format!("{stem}_temp"),
        };
        self.path.with_file_name(name)
    }

    /// Rename the current file to the temp sibling and return the temp path.
    ///
    /// The caller must have closed any open handle first.
    pub fn rename_to_temp(&self) -> OutputResult<PathBuf> {
        let temp = self.temp_path();
        fs::rename(&self.path, &temp)?;
        Ok(temp)
    }
}
