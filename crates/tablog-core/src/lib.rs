//! `tablog-core` — foundational types for the `tablog` metric-logging
//! framework.
//!
//! This crate holds the in-memory tabular record that callers fill with
//! metric values once per emission cycle, and the primitive value model those
//! records carry.  Output sinks (see `tablog-output`) consume records through
//! a small, stable surface: flatten, write, mark.
//!
//! # What lives here
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`value`]   | `ScalarValue`, `TabularValue`, dotted-key flatten |
//! | [`tabular`] | `TabularInput`, `FlatRow`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                 |
//! |---------|--------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.    |

pub mod tabular;
pub mod value;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use tabular::{FlatRow, TabularInput};
pub use value::{ScalarValue, TabularValue};
