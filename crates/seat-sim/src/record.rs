//! Per-tick samples, aggregate stats, and the bounded run history.

use std::collections::VecDeque;

use seat_core::Tick;

/// Occupancy after one tick.  One per tick, appended in order.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    pub tick:     Tick,
    pub seated:   usize,
    pub standing: usize,
}

/// Point-in-time statistics for the current run.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimStats {
    pub tick:     Tick,
    pub spawned:  usize,
    pub seated:   usize,
    pub standing: usize,
    pub moving:   usize,
    /// `seated / spawned` in percent; 0 before the first spawn.
    pub seated_pct:    f64,
    /// Seated agents per elapsed tick; 0 at tick 0.
    pub seating_speed: f64,
}

impl SimStats {
    pub fn new(tick: Tick, spawned: usize, seated: usize, standing: usize, moving: usize) -> Self {
        let seated_pct = if spawned == 0 { 0.0 } else { seated as f64 * 100.0 / spawned as f64 };
        let seating_speed = if tick.0 == 0 { 0.0 } else { seated as f64 / tick.0 as f64 };
        Self { tick, spawned, seated, standing, moving, seated_pct, seating_speed }
    }
}

/// Outcome of one completed run.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSummary {
    pub final_tick:    Tick,
    pub spawned:       usize,
    pub seated:        usize,
    pub standing:      usize,
    pub seated_pct:    f64,
    pub seating_speed: f64,
    /// The run was cut short by an internal fault.
    pub faulted:       bool,
}

impl RunSummary {
    pub fn from_stats(stats: &SimStats, faulted: bool) -> Self {
        Self {
            final_tick:    stats.tick,
            spawned:       stats.spawned,
            seated:        stats.seated,
            standing:      stats.standing,
            seated_pct:    stats.seated_pct,
            seating_speed: stats.seating_speed,
            faulted,
        }
    }
}

/// The most recent completed runs, newest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunHistory {
    runs: VecDeque<RunSummary>,
}

impl RunHistory {
    /// Runs kept; older ones are dropped.
    pub const CAPACITY: usize = 10;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, summary: RunSummary) {
        self.runs.push_front(summary);
        self.runs.truncate(Self::CAPACITY);
    }

    #[inline]
    pub fn latest(&self) -> Option<&RunSummary> {
        self.runs.front()
    }

    /// Newest first.
    pub fn iter(&self) -> impl Iterator<Item = &RunSummary> {
        self.runs.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn clear(&mut self) {
        self.runs.clear();
    }
}
