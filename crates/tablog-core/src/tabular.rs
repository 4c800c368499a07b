//! The mutable tabular record callers fill once per emission cycle.
//!
//! # Design
//!
//! `TabularInput` is an ordered mapping: the order in which keys are first
//! recorded is the order sinks see them, and the CSV sink derives its header
//! order from it.  Re-recording an existing key overwrites the value in place
//! without disturbing the order.
//!
//! Sinks call [`mark`][TabularInput::mark] for every key they persist.  The
//! mark set survives [`reset`][TabularInput::reset] so that at the end of a
//! run the owner can ask which metrics were recorded but never picked up by
//! any sink ([`unmarked_keys`][TabularInput::unmarked_keys]).

use rustc_hash::{FxHashMap, FxHashSet};

use crate::value::{ScalarValue, TabularValue};

/// An ordered flat snapshot of a record: dotted key → primitive value.
pub type FlatRow = Vec<(String, ScalarValue)>;

/// One emission cycle's worth of named metric values.
///
/// Created by the caller, filled with [`record`][TabularInput::record],
/// handed to each sink, then [`reset`][TabularInput::reset] for the next
/// cycle.  Sinks mutate it only via `mark`.
#[derive(Default, Debug)]
pub struct TabularInput {
    entries: Vec<(String, TabularValue)>,
    index:   FxHashMap<String, usize>,
    marked:  FxHashSet<String>,
}

impl TabularInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or overwrite the value for `key`.
    ///
    /// A new key is appended; an existing key keeps its original position.
    pub fn record<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<TabularValue>,
    {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    /// Flatten to an ordered dotted-key → scalar snapshot.
    ///
    /// Nested groups expand depth-first in insertion order, so the snapshot
    /// order is stable for a given sequence of `record` calls.
    pub fn as_flat_primitive_map(&self) -> FlatRow {
        let mut out = Vec::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            value.flatten_into(key, &mut out);
        }
        out
    }

    /// Mark a flattened key as consumed by a sink.
    pub fn mark(&mut self, key: &str) {
        self.marked.insert(key.to_owned());
    }

    /// Has `key` ever been marked by any sink?
    pub fn is_marked(&self, key: &str) -> bool {
        self.marked.contains(key)
    }

    /// Currently held flattened keys that no sink has ever marked.
    pub fn unmarked_keys(&self) -> Vec<String> {
        self.as_flat_primitive_map()
            .into_iter()
            .map(|(k, _)| k)
            .filter(|k| !self.marked.contains(k))
            .collect()
    }

    /// Clear all held values.  The mark set is kept: it answers "was this
    /// metric ever persisted", not "is it currently present".
    pub fn reset(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// True when no values are currently held.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
