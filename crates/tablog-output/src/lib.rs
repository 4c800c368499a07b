//! `tablog-output` — output sinks for the tablog metric-logging framework.
//!
//! One sink ships today: [`CsvOutput`], which writes one data row per
//! emission cycle to a single CSV file and grows the header in place when a
//! record introduces columns the file has never seen.
//!
//! All sinks implement [`LogOutput`] and consume `tablog_core::TabularInput`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tablog_core::TabularInput;
//! use tablog_output::{CsvOutput, LogOutput};
//!
//! let mut out = CsvOutput::new("runs/progress.csv")?;
//! let mut tab = TabularInput::new();
//! tab.record("loss", 0.5);
//! out.record(&mut tab, "")?;
//! tab.reset();
//! ```

pub mod csv;
pub mod error;
pub mod file;
pub mod output;
pub mod row;


pub use self::csv::CsvOutput;
pub use error::{OutputError, OutputResult};
pub use file::LogFile;
pub use output::LogOutput;
pub use row::{ExtraKeys, RowWriter};
