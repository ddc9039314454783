//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, PositionRow, SeriesRow};

/// Trait implemented by CSV, SQLite, and Parquet writers.
pub trait OutputWriter {
    /// Write the full time series, one row per record.
    fn write_series(&mut self, rows: &[SeriesRow]) -> OutputResult<()>;

    /// Write one named position snapshot (e.g. `"final"`).
    ///
    /// `name` must not contain path separators; backends map it to a file
    /// or a key column.
    fn write_positions(&mut self, name: &str, rows: &[PositionRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
