//! Row serialization against a fixed column order.

use std::fs::File;

use rustc_hash::FxHashMap;
use tablog_core::FlatRow;

use crate::{OutputError, OutputResult};

/// What to do with a row key that is not in the column set.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ExtraKeys {
    /// Drop the key silently.  Used for steady-state writes, where a missing
    /// column means the caller's schema drifted without triggering a
    /// migration.
    Ignore,
    /// Return [`OutputError::UnknownColumn`].  Used during a schema
    /// migration, where every old key must exist in the new column set.
    Fail,
}

/// Serializes one flat mapping into one CSV line given a fixed column order.
///
/// Columns absent from a row render as empty cells; quoting and escaping of
/// delimiter, quote, and newline characters is handled by the underlying
/// `csv` writer.
#[derive(Debug)]
pub struct RowWriter {
    inner:   csv::Writer<File>,
    columns: Vec<String>,
    index:   FxHashMap<String, usize>,
    policy:  ExtraKeys,
}

impl RowWriter {
    /// Bind a writer to `file` with the given column order and policy.
    pub fn new(file: File, columns: Vec<String>, policy: ExtraKeys) -> Self {
        let index = columns
            .iter()
            .enumerate()
            .map(|(i, c)| (c.clone(), i))
            .collect();
        Self {
            inner: csv::Writer::from_writer(file),
            columns,
            index,
            policy,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn set_policy(&mut self, policy: ExtraKeys) {
        self.policy = policy;
    }

    /// Write the header line (the column names themselves).
    pub fn write_header(&mut self) -> OutputResult<()> {
        self.inner.write_record(&self.columns)?;
        Ok(())
    }

    /// Write one data row: values in column order, empty cell for any column
    /// absent from `row`.
    ///
    /// Returns the number of keys dropped under [`ExtraKeys::Ignore`].
    pub fn write_row(&mut self, row: &FlatRow) -> OutputResult<usize> {
        let mut cells = vec![String::new(); self.columns.len()];
        let mut dropped = 0;
        for (key, value) in row {
            match self.index.get(key) {
                Some(&i) => cells[i] = value.to_string(),
                None => match self.policy {
                    ExtraKeys::Ignore => dropped += 1,
                    ExtraKeys::Fail => {
                        return Err(OutputError::UnknownColumn(key.clone()));
                    }
                },
            }
        }
        self.inner.write_record(&cells)?;
        Ok(dropped)
    }

    /// Flush buffered output to the file.
    pub fn flush(&mut self) -> OutputResult<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Flush and release the underlying file handle.
    pub fn finish(mut self) -> OutputResult<()> {
        self.flush()
    }
}
