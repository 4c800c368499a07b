//! CSV output backend.
//!
//! Writes one header line plus one data row per emission to a single CSV
//! file.  The column set is not known in advance: it is derived from the
//! first non-empty record, and when a later record introduces new keys the
//! file is migrated in place — renamed to a temp sibling, streamed back row
//! by row under the grown header, old rows back-filled with empty cells.
//!
//! # Column order
//!
//! The header order is re-derived from the incoming record's flattened-key
//! order at every migration, not merged with the old order.  Column order can
//! therefore shuffle across migrations; consumers must address columns by
//! name.

use std::fs;

use tablog_core::{FlatRow, TabularInput};

use crate::file::LogFile;
use crate::output::LogOutput;
use crate::row::{ExtraKeys, RowWriter};
use crate::OutputResult;

/// Writes tabular records to a single CSV file, growing the header as new
/// metric names appear.
///
/// Not safe for concurrent `record` calls and assumes no other process
/// writes to the same path.
pub struct CsvOutput {
    file:             LogFile,
    writer:           Option<RowWriter>,
    finished:         bool,
    disable_warnings: bool,
}

impl CsvOutput {
    /// Bind the sink to `path`, creating parent directories.
    ///
    /// The file itself is created lazily on the first non-empty record, so a
    /// sink that never receives data never creates a file.
    pub fn new(path: impl Into<std::path::PathBuf>) -> OutputResult<Self> {
        Ok(Self {
            file:             LogFile::new(path)?,
            writer:           None,
            finished:         false,
            disable_warnings: false,
        })
    }

    /// Suppress the dropped-key warning.  Intended for tests.
    pub fn disable_warnings(&mut self) {
        self.disable_warnings = true;
    }

    /// The column names currently forming the header, in header order.
    /// Empty until the first non-empty record.
    pub fn columns(&self) -> &[String] {
        self.writer.as_ref().map(RowWriter::columns).unwrap_or(&[])
    }

    /// Grow the column set to the incoming snapshot's key set by rewriting
    /// the file: park the old file at a temp sibling path, write the new
    /// header, stream the old rows back with empty cells for columns they
    /// never had, then delete the temp file.
    ///
    /// The incoming row itself is not written here; `record` writes it after
    /// this returns.  I/O failures propagate and may leave the temp file
    /// behind — augmentation is not crash-safe.
    fn augment(&mut self, snapshot: &FlatRow) -> OutputResult<()> {
        if let Some(old) = self.writer.take() {
            old.finish()?;
        }
        let temp = self.file.rename_to_temp()?;

        // The new record's key order becomes the authoritative column order.
        let mut writer = RowWriter::new(self.file.create()?, column_order(snapshot), ExtraKeys::Fail);
        writer.write_header()?;

        let mut reader = csv::Reader::from_path(&temp)?;
        let old_header = reader.headers()?.clone();

        // Scratch buffer scoped to this migration: loaded from one old row,
        // written, then cleared, so no value can leak into a later row.
        let mut scratch = TabularInput::new();
        for record in reader.records() {
            let row = record?;
            for (key, cell) in old_header.iter().zip(row.iter()) {
                scratch.record(key, cell);
            }
            writer.write_row(&scratch.as_flat_primitive_map())?;
            scratch.reset();
        }
        drop(reader);
        fs::remove_file(&temp)?;

        // Steady-state writes go back to dropping unknown keys.
        writer.set_policy(ExtraKeys::Ignore);
        self.writer = Some(writer);
        Ok(())
    }
}

impl LogOutput for CsvOutput {
    fn record(&mut self, data: &mut TabularInput, _prefix: &str) -> OutputResult<()> {
        let snapshot = data.as_flat_primitive_map();

        // An empty record before any header exists must not create the file.
        if snapshot.is_empty() && self.writer.is_none() {
            return Ok(());
        }

        if self.writer.is_none() {
            let mut writer =
                RowWriter::new(self.file.create()?, column_order(&snapshot), ExtraKeys::Ignore);
            writer.write_header()?;
            self.writer = Some(writer);
        }

        let has_new = match &self.writer {
            Some(w) => snapshot.iter().any(|(key, _)| !w.contains(key)),
            None => false,
        };
        if has_new {
            self.augment(&snapshot)?;
        }

        let Some(writer) = self.writer.as_mut() else {
            return Ok(()); // unreachable: initialized above
        };
        let dropped = writer.write_row(&snapshot)?;
        writer.flush()?;
        if dropped > 0 && !self.disable_warnings {
            // Unreachable when augmentation converged; row alignment is
            // preserved either way.
            tracing::warn!(
                dropped,
                path = %self.file.path().display(),
                "dropped keys outside the CSV column set"
            );
        }

        for (key, _) in &snapshot {
            data.mark(key);
        }
        Ok(())
    }

    fn close(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        if let Some(writer) = self.writer.as_mut() {
            writer.flush()?;
        }
        Ok(())
    }
}

fn column_order(snapshot: &FlatRow) -> Vec<String> {
    snapshot.iter().map(|(key, _)| key.clone()).collect()
}
