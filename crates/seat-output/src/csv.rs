//! CSV output backend.
//!
//! Creates two files in the output directory:
//! - `tick_samples.csv`
//! - `run_summaries.csv`

use std::fs::File;
use std::path::Path;

use ::csv::Writer;
use tracing::debug;

use crate::writer::OutputWriter;
use crate::{OutputResult, RunSummaryRow, SampleRow};

pub const SAMPLES_FILE: &str = "tick_samples.csv";
pub const SUMMARIES_FILE: &str = "run_summaries.csv";

/// Writes samples and run summaries to two CSV files.
pub struct CsvWriter {
    samples:   Writer<File>,
    summaries: Writer<File>,
}

impl CsvWriter {
    /// Create (truncating) the two CSV files in `dir` and write the header
    /// rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut samples = Writer::from_path(dir.join(SAMPLES_FILE))?;
        samples.write_record(["run", "tick", "seated", "standing"])?;

        let mut summaries = Writer::from_path(dir.join(SUMMARIES_FILE))?;
        summaries.write_record([
            "run",
            "final_tick",
            "spawned",
            "seated",
            "standing",
            "seated_pct",
            "seating_speed",
            "faulted",
        ])?;

        debug!(dir = %dir.display(), "csv output opened");
        Ok(Self { samples, summaries })
    }
}

impl OutputWriter for CsvWriter {
    fn write_samples(&mut self, rows: &[SampleRow]) -> OutputResult<()> {
        for row in rows {
            self.samples.write_record(&[
                row.run.to_string(),
                row.tick.to_string(),
                row.seated.to_string(),
                row.standing.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_run_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.run.to_string(),
            row.final_tick.to_string(),
            row.spawned.to_string(),
            row.seated.to_string(),
            row.standing.to_string(),
            format!("{:.2}", row.seated_pct),
            format!("{:.4}", row.seating_speed),
            (row.faulted as u8).to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.samples.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
