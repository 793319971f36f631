//! `seat-output`: write-only export of simulation results.
//!
//! | Backend | Files created                             |
//! |---------|-------------------------------------------|
//! | CSV     | `tick_samples.csv`, `run_summaries.csv`   |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `seat_sim::SimObserver`.
//! Nothing written here is ever read back by the engine.
//!
//! # Usage
//!
//! ```rust,ignore
//! use seat_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{RunSummaryRow, SampleRow};
pub use writer::OutputWriter;
