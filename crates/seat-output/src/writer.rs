//! The `OutputWriter` trait implemented by export backends.

use crate::{OutputResult, RunSummaryRow, SampleRow};

/// An export backend.
///
/// From the observer's side writes never fail: errors are stored and
/// retrieved with [`SimOutputObserver::take_error`](crate::SimOutputObserver::take_error).
pub trait OutputWriter {
    /// Write a batch of per-tick samples.
    fn write_samples(&mut self, rows: &[SampleRow]) -> OutputResult<()>;

    /// Write one completed-run summary.
    fn write_run_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()>;

    /// Flush everything written so far.  Safe to call more than once; the
    /// writer stays usable afterwards.
    fn finish(&mut self) -> OutputResult<()>;
}
