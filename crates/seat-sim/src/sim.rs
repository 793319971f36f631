//! The `SeatingSim` engine and its tick loop.

use tracing::{error, info};

use seat_agent::{Agent, AgentStore, SpawnContext};
use seat_core::{Cell, CellSet, CellType, Grid, SimConfig, SimRng, Tick};
use seat_layout::{Layout, build_grid};
use seat_select::SeatPrefs;

use crate::{RunHistory, RunSummary, Sample, SimError, SimObserver, SimResult, SimStats};

// ── Phase / TickOutcome ───────────────────────────────────────────────────────

/// Engine lifecycle.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum Phase {
    #[default]
    Uninitialized,
    Running,
    Completed,
}

/// Result of one [`SeatingSim::tick`].
#[derive(Clone, PartialEq, Debug)]
pub enum TickOutcome {
    Running(SimStats),
    Completed(RunSummary),
}

impl TickOutcome {
    #[inline]
    pub fn is_completed(&self) -> bool {
        matches!(self, TickOutcome::Completed(_))
    }
}

/// `BACK_PREF` multiplier for an agent spawned after `spawned` of `total`
/// agents: early arrivals push further back.
pub(crate) fn arrival_phase_factor(spawned: usize, total: usize) -> f64 {
    let progress = if total == 0 { 1.0 } else { spawned as f64 / total as f64 };
    if progress < 0.3 {
        1.5
    } else if progress < 0.7 {
        1.0
    } else {
        0.5
    }
}

// ── SeatingSim ────────────────────────────────────────────────────────────────

/// The simulation engine.
///
/// One tick runs four phases in order:
///
/// 1. **Spawn**: every gate not occupied by a still-moving agent spawns one
///    new agent while the `NUM_AGENTS` budget lasts.  A will-stand agent's
///    target is marked `Standing` at once so no one else picks it.
/// 2. **Step**: every agent that existed before this tick's spawns moves one
///    cell or settles.  Agents are stepped in spawn order.
/// 3. **Sample**: the tick counter advances and `(tick, seated, standing)` is
///    appended.
/// 4. **Completion**: the run completes when every agent has settled and the
///    budget is spent, or when the tick counter reaches `MAX_TIME`.
///
/// Any error inside a tick ends the run: the engine moves to `Completed`
/// with the fault flag set and keeps the error for [`take_error`].
///
/// [`take_error`]: SeatingSim::take_error
pub struct SeatingSim {
    phase:  Phase,
    config: SimConfig,

    /// `None` until the first successful `initialize`.
    layout: Option<Layout>,

    agents: AgentStore,

    /// Seats reserved at spawn.  Entries outlive the walk; by then the cell
    /// is a `SeatedAgent` and no longer pickable anyway.
    assigned: CellSet,

    rng:  SimRng,
    tick: Tick,

    /// Per-row ceiling derived from `ROW_FILL_LIMIT` at initialize.
    row_threshold: usize,

    samples: Vec<Sample>,

    /// Summary of the current run once it has completed.
    summary: Option<RunSummary>,

    /// Completed runs across initializes.
    history: RunHistory,

    fault: Option<SimError>,
}

impl Default for SeatingSim {
    fn default() -> Self {
        Self::new()
    }
}

impl SeatingSim {
    /// An uninitialized engine.
    pub fn new() -> Self {
        Self {
            phase:         Phase::Uninitialized,
            config:        SimConfig::default(),
            layout:        None,
            agents:        AgentStore::new(),
            assigned:      CellSet::default(),
            rng:           SimRng::new(0),
            tick:          Tick::ZERO,
            row_threshold: 1,
            samples:       Vec::new(),
            summary:       None,
            history:       RunHistory::new(),
            fault:         None,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Validate `config`, build the floor plan, and reset every per-run
    /// collection.  The RNG is reseeded from `config.seed`, so initializing
    /// twice with the same config yields identical runs.  Run history is
    /// kept.
    ///
    /// # Errors
    ///
    /// [`SimError::Config`] or [`SimError::Layout`]; the engine is left
    /// `Uninitialized`.
    pub fn initialize(&mut self, config: &SimConfig) -> SimResult<()> {
        let built = config
            .clone()
            .validated()
            .map_err(SimError::Config)
            .and_then(|config| Ok((build_grid(&config)?, config)));

        let (layout, config) = match built {
            Ok(ok) => ok,
            Err(err) => {
                self.phase = Phase::Uninitialized;
                self.layout = None;
                return Err(err);
            }
        };

        self.row_threshold = layout.row_threshold(config.row_fill_limit);
        self.rng = SimRng::new(config.seed);
        self.agents.clear();
        self.assigned.clear();
        self.samples.clear();
        self.tick = Tick::ZERO;
        self.summary = None;
        self.fault = None;

        info!(
            rows = layout.rows(),
            cols = layout.cols(),
            blocks = layout.blocks.len(),
            seats = layout.seat_capacity(),
            gates = layout.gates.len(),
            agents = config.num_agents,
            max_time = config.max_time,
            seed = config.seed,
            "simulation initialized"
        );

        self.layout = Some(layout);
        self.config = config;
        self.phase = Phase::Running;
        Ok(())
    }

    /// Advance one tick.
    ///
    /// Once the run has completed this is a no-op returning the final
    /// summary again.
    ///
    /// # Errors
    ///
    /// [`SimError::NotInitialized`] before a successful `initialize`.
    /// Faults inside the tick are not returned here: they complete the run
    /// (see [`take_error`](Self::take_error)).
    pub fn tick(&mut self) -> SimResult<TickOutcome> {
        match self.phase {
            Phase::Uninitialized => return Err(SimError::NotInitialized),
            Phase::Completed => {
                let summary = self.summary.clone().unwrap_or_else(|| self.summarize(false));
                return Ok(TickOutcome::Completed(summary));
            }
            Phase::Running => {}
        }

        match self.process_tick() {
            Ok(true) => Ok(TickOutcome::Completed(self.complete(false))),
            Ok(false) => Ok(TickOutcome::Running(self.stats())),
            Err(err) => {
                error!(tick = %self.tick, %err, "tick failed, abandoning run");
                self.fault = Some(err);
                Ok(TickOutcome::Completed(self.complete(true)))
            }
        }
    }

    /// Tick until the run completes, invoking observer hooks.
    ///
    /// Returns the run summary; a faulted run still returns `Ok` with
    /// `faulted` set.  On an already completed run no hook fires and the
    /// stored summary is returned.
    ///
    /// # Errors
    ///
    /// [`SimError::NotInitialized`] before a successful `initialize`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunSummary> {
        if self.phase == Phase::Completed {
            return Ok(self.summary.clone().unwrap_or_else(|| self.summarize(false)));
        }
        loop {
            let now = self.tick;
            if self.phase == Phase::Running {
                observer.on_tick_start(now);
            }
            let outcome = self.tick()?;
            if let Some(sample) = self.samples.last().filter(|s| s.tick > now) {
                observer.on_tick_end(sample.tick, sample);
            }
            if let TickOutcome::Completed(summary) = outcome {
                observer.on_sim_end(&summary);
                return Ok(summary);
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.phase == Phase::Completed
    }

    /// The config of the current run (validated).
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.layout.as_ref().map(|l| &l.grid)
    }

    pub fn agents(&self) -> &[Agent] {
        self.agents.as_slice()
    }

    /// Seats reserved so far this run.
    pub fn assigned(&self) -> &CellSet {
        &self.assigned
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    pub fn history(&self) -> &RunHistory {
        &self.history
    }

    /// Counts for the current run.  Pure read.
    pub fn stats(&self) -> SimStats {
        let counts = self.agents.counts();
        SimStats::new(self.tick, self.agents.len(), counts.seated, counts.standing, counts.moving)
    }

    /// `true` if the last run ended on a fault.
    pub fn is_faulted(&self) -> bool {
        self.summary.as_ref().is_some_and(|s| s.faulted)
    }

    /// Take the fault that ended the run, if any.
    pub fn take_error(&mut self) -> Option<SimError> {
        self.fault.take()
    }

    #[cfg(test)]
    pub(crate) fn agents_mut(&mut self) -> &mut AgentStore {
        &mut self.agents
    }

    // ── Tick processing ───────────────────────────────────────────────────

    /// One tick.  Returns `true` when the run is done.
    fn process_tick(&mut self) -> SimResult<bool> {
        let layout = self.layout.as_mut().ok_or(SimError::NotInitialized)?;
        let pre_existing = self.agents.len();

        // ── Spawn ─────────────────────────────────────────────────────────
        let mut occupied: CellSet = self.agents.active_positions().collect();
        let gates: Vec<Cell> = layout.gate_cells().collect();
        let base_prefs = SeatPrefs::from_config(&self.config);

        for gate in gates {
            if self.agents.len() >= self.config.num_agents {
                break;
            }
            if occupied.contains(&gate) {
                continue;
            }

            let factor = arrival_phase_factor(self.agents.len(), self.config.num_agents);
            let mut ctx = SpawnContext {
                layout:        &*layout,
                assigned:      &mut self.assigned,
                prefs:         base_prefs.with_back_pref_scaled(factor),
                row_threshold: self.row_threshold,
            };
            let agent = Agent::spawn(self.agents.next_id(), gate, &mut ctx, &mut self.rng);

            if agent.will_stand {
                layout.grid.set(agent.target, CellType::Standing)?;
            }
            occupied.insert(gate);
            self.agents.push(agent);
        }

        // ── Step ──────────────────────────────────────────────────────────
        for agent in self.agents.first_mut(pre_existing) {
            agent.step(&mut layout.grid, &mut self.rng)?;
        }

        // ── Sample ────────────────────────────────────────────────────────
        self.tick.advance();
        let counts = self.agents.counts();
        self.samples.push(Sample { tick: self.tick, seated: counts.seated, standing: counts.standing });

        // ── Completion ────────────────────────────────────────────────────
        let budget_spent = self.agents.len() >= self.config.num_agents;
        Ok((budget_spent && self.agents.all_terminal()) || self.tick.0 >= self.config.max_time)
    }

    fn summarize(&self, faulted: bool) -> RunSummary {
        RunSummary::from_stats(&self.stats(), faulted)
    }

    fn complete(&mut self, faulted: bool) -> RunSummary {
        let summary = self.summarize(faulted);
        self.phase = Phase::Completed;
        self.summary = Some(summary.clone());
        self.history.push(summary.clone());
        info!(
            tick = %summary.final_tick,
            spawned = summary.spawned,
            seated = summary.seated,
            standing = summary.standing,
            faulted,
            "simulation completed"
        );
        summary
    }
}
