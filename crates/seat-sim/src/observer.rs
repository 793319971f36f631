//! Simulation observer trait for progress reporting and data collection.

use seat_core::Tick;

use crate::{RunSummary, Sample};

/// Callbacks invoked by [`SeatingSim::run`][crate::SeatingSim::run] at key
/// points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, sample: &Sample) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: {} seated, {} standing", sample.seated, sample.standing);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before each tick, with the tick about to be processed.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after each completed tick with the sample it appended.
    fn on_tick_end(&mut self, _tick: Tick, _sample: &Sample) {}

    /// Called once when the run completes (normally or by fault).
    fn on_sim_end(&mut self, _summary: &RunSummary) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
