//! Primitive value model for tabular records.
//!
//! A CSV cell can only hold text, so every value a caller logs must reduce to
//! a scalar with an unambiguous text rendering.  `ScalarValue` is that
//! reduction target; `TabularValue` additionally allows nested groups, which
//! flatten into dotted keys (`"optimizer.lr"`) before any sink sees them.

use std::fmt;

// ── ScalarValue ───────────────────────────────────────────────────────────────

/// A single primitive cell value.
///
/// `Display` produces the exact text written to the output file.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScalarValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Int(v) => write!(f, "{v}"),
            ScalarValue::Float(v) => write!(f, "{v}"),
            ScalarValue::Bool(v) => write!(f, "{v}"),
            ScalarValue::Str(v) => f.write_str(v),
        }
    }
}

impl From<i64> for ScalarValue {
    fn from(v: i64) -> Self {
        ScalarValue::Int(v)
    }
}

impl From<i32> for ScalarValue {
    fn from(v: i32) -> Self {
        ScalarValue::Int(v as i64)
    }
}

impl From<u32> for ScalarValue {
    fn from(v: u32) -> Self {
        ScalarValue::Int(v as i64)
    }
}

impl From<f64> for ScalarValue {
    fn from(v: f64) -> Self {
        ScalarValue::Float(v)
    }
}

impl From<f32> for ScalarValue {
    fn from(v: f32) -> Self {
        ScalarValue::Float(v as f64)
    }
}

impl From<bool> for ScalarValue {
    fn from(v: bool) -> Self {
        ScalarValue::Bool(v)
    }
}

impl From<&str> for ScalarValue {
    fn from(v: &str) -> Self {
        ScalarValue::Str(v.to_owned())
    }
}

impl From<String> for ScalarValue {
    fn from(v: String) -> Self {
        ScalarValue::Str(v)
    }
}

// ── TabularValue ──────────────────────────────────────────────────────────────

/// A value held by a [`TabularInput`][crate::TabularInput] entry: either a
/// scalar or a nested group of named values.
///
/// Nested groups exist purely for caller convenience (logging a whole config
/// section under one key); they are flattened to dotted scalar keys before
/// reaching any sink.  Group member order is insertion order and is preserved
/// by flattening.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TabularValue {
    Scalar(ScalarValue),
    Nested(Vec<(String, TabularValue)>),
}

impl TabularValue {
    /// Build a nested group from `(name, value)` pairs.
    pub fn nested<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<TabularValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        TabularValue::Nested(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Append this value's scalar leaves to `out`, prefixing nested keys with
    /// `key` joined by `.`, depth-first in insertion order.
    pub(crate) fn flatten_into(&self, key: &str, out: &mut Vec<(String, ScalarValue)>) {
        match self {
            TabularValue::Scalar(v) => out.push((key.to_owned(), v.clone())),
            TabularValue::Nested(entries) => {
                for (name, value) in entries {
                    value.flatten_into(&format!("{key}.{name}"), out);
                }
            }
        }
    }
}

impl From<ScalarValue> for TabularValue {
    fn from(v: ScalarValue) -> Self {
        TabularValue::Scalar(v)
    }
}

macro_rules! scalar_into_tabular {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for TabularValue {
                fn from(v: $ty) -> Self {
                    TabularValue::Scalar(v.into())
                }
            }
        )*
    };
}

scalar_into_tabular!(i64, i32, u32, f64, f32, bool, &str, String);
