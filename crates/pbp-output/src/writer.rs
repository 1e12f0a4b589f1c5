//! The `OutputWriter` trait implemented by all backend writers.

use pbp_engine::PlayRecord;

use crate::OutputResult;

/// Trait implemented by CSV, SQLite, and Parquet writers.
///
/// Writers see rows in `play_id` order.  When driven by
/// [`PlayOutputObserver`][crate::PlayOutputObserver] errors are stored and
/// retrieved afterwards with `take_error`.
pub trait OutputWriter {
    /// Append a batch of rows.  An empty batch is a no-op.
    fn write_plays(&mut self, rows: &[PlayRecord]) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
