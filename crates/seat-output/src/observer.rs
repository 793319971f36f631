//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use seat_core::Tick;
use seat_sim::{RunSummary, Sample, SimObserver};

use crate::row::{RunSummaryRow, SampleRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that exports every sample and the run summary to an
/// [`OutputWriter`].
///
/// Samples are buffered for the run and written as one batch when it ends,
/// followed by the summary row and a flush.  One observer can follow several
/// runs in a row; each gets the next run number.
///
/// Errors from the writer are stored because `SimObserver` methods have no
/// return value.  Check with [`take_error`][Self::take_error] after a run.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    run:        u32,
    pending:    Vec<SampleRow>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Observer backed by `writer`, numbering runs from 0.
    pub fn new(writer: W) -> Self {
        Self { writer, run: 0, pending: Vec::new(), last_error: None }
    }

    /// Number the next run `run`.
    #[must_use]
    pub fn starting_at(mut self, run: u32) -> Self {
        self.run = run;
        self
    }

    /// Number the next completed run will be written under.
    #[inline]
    pub fn run(&self) -> u32 {
        self.run
    }

    /// Take the stored write error (if any).  Only the first error of a
    /// sequence is kept.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, _tick: Tick, sample: &Sample) {
        self.pending.push(SampleRow::new(self.run, sample));
    }

    fn on_sim_end(&mut self, summary: &RunSummary) {
        let rows = std::mem::take(&mut self.pending);
        if !rows.is_empty() {
            let result = self.writer.write_samples(&rows);
            self.store_err(result);
        }
        let result = self.writer.write_run_summary(&RunSummaryRow::new(self.run, summary));
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
        self.run += 1;
    }
}
