//! Plain data row types written by output backends.

use seat_sim::{RunSummary, Sample};

/// One `(tick, seated, standing)` sample, tagged with its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleRow {
    pub run:      u32,
    pub tick:     u64,
    pub seated:   u64,
    pub standing: u64,
}

impl SampleRow {
    pub fn new(run: u32, sample: &Sample) -> Self {
        Self {
            run,
            tick:     sample.tick.0,
            seated:   sample.seated as u64,
            standing: sample.standing as u64,
        }
    }
}

/// Outcome of one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummaryRow {
    pub run:           u32,
    pub final_tick:    u64,
    pub spawned:       u64,
    pub seated:        u64,
    pub standing:      u64,
    pub seated_pct:    f64,
    pub seating_speed: f64,
    pub faulted:       bool,
}

impl RunSummaryRow {
    pub fn new(run: u32, summary: &RunSummary) -> Self {
        Self {
            run,
            final_tick:    summary.final_tick.0,
            spawned:       summary.spawned as u64,
            seated:        summary.seated as u64,
            standing:      summary.standing as u64,
            seated_pct:    summary.seated_pct,
            seating_speed: summary.seating_speed,
            faulted:       summary.faulted,
        }
    }
}
