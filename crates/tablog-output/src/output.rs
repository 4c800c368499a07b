//! The `LogOutput` trait implemented by all output sinks.

use tablog_core::TabularInput;

use crate::OutputResult;

/// Trait implemented by sinks that persist one tabular record per emission
/// cycle.
///
/// The sink may mutate `data` only by marking keys it has persisted; values
/// and ordering belong to the caller.
pub trait LogOutput {
    /// Persist one record.
    ///
    /// `prefix` exists for sinks that namespace their output keys; sinks with
    /// a fixed on-disk schema (such as CSV) accept it for interface
    /// compatibility and ignore it.
    fn record(&mut self, data: &mut TabularInput, prefix: &str) -> OutputResult<()>;

    /// Flush and close the underlying destination.
    ///
    /// Idempotent — safe to call more than once.
    fn close(&mut self) -> OutputResult<()>;
}
