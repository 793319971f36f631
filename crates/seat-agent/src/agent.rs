//! The agent record and its per-tick state machine.

use std::fmt;

use tracing::{debug, warn};

use seat_core::{AgentId, BlockId, Cell, CellType, CoreResult, Grid, SimRng};
use seat_path::{Path, compute_path};
use seat_select::find_standing_position;

// ── AgentState ────────────────────────────────────────────────────────────────

/// Lifecycle state.  `Seated` and `Standing` are terminal.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum AgentState {
    #[default]
    Spawned,
    Moving,
    Seated,
    Standing,
}

impl AgentState {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, AgentState::Seated | AgentState::Standing)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AgentState::Spawned  => "spawned",
            AgentState::Moving   => "moving",
            AgentState::Seated   => "seated",
            AgentState::Standing => "standing",
        }
    }
}

impl fmt::Display for AgentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── StepOutcome ───────────────────────────────────────────────────────────────

/// What one call to [`Agent::step`] did.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StepOutcome {
    /// Already terminal; nothing changed.
    Idle,
    /// Moved one cell along the path.
    Moved(Cell),
    /// Reached the end of the path and settled in the given state.
    Settled(AgentState),
    /// Arrived on a cell someone else already settled on; now heading for
    /// the given standing cell instead.
    Rerouted(Cell),
}

// ── Agent ─────────────────────────────────────────────────────────────────────

/// One attendee.
///
/// Agents hold coordinates only; the grid they walk on is owned by the
/// engine and passed in to [`step`](Agent::step).
#[derive(Clone, Debug, PartialEq)]
pub struct Agent {
    pub id: AgentId,

    /// Current cell.  Starts on the spawn gate.
    pub position: Cell,

    pub state: AgentState,

    /// No seat was available at spawn (or the seat was lost on arrival);
    /// the agent is heading for standing room.
    pub will_stand: bool,

    /// Block chosen from the spawn gate.  For seated agents the seat may sit
    /// in another block if this one was full.
    pub block: BlockId,

    /// Column of the corridor the agent walks up.
    pub corridor_col: usize,

    /// Row on which the agent turns from its gate column toward the corridor.
    pub turn_row: usize,

    /// Final cell: a seat, or a standing position.
    pub target: Cell,

    /// Remaining cells, consumed one per tick.
    pub path: Path,
}

impl Agent {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Advance one tick.
    ///
    /// - terminal: no-op;
    /// - path exhausted: settle.  On a `Seat` cell the agent becomes
    ///   `Seated`; a will-stand agent becomes `Standing`; anything else
    ///   settles `Standing` where it is, unless that cell already holds a
    ///   settled agent, in which case the agent turns will-stand, reserves a
    ///   standing cell and is re-routed there;
    /// - otherwise: move to the next path cell.
    ///
    /// Moving never writes to the grid; settling and re-routing do.
    ///
    /// # Errors
    ///
    /// [`seat_core::CoreError::OutOfBounds`] if the agent's position is not
    /// a grid cell.
    pub fn step(&mut self, grid: &mut Grid, rng: &mut SimRng) -> CoreResult<StepOutcome> {
        if self.is_terminal() {
            return Ok(StepOutcome::Idle);
        }

        if let Some(next) = self.path.pop_next() {
            self.position = next;
            self.state = AgentState::Moving;
            return Ok(StepOutcome::Moved(next));
        }

        let here = grid.get(self.position);
        let settled = if here == Some(CellType::Seat) && !self.will_stand {
            grid.set(self.position, CellType::SeatedAgent)?;
            AgentState::Seated
        } else if self.will_stand {
            grid.set(self.position, CellType::Standing)?;
            AgentState::Standing
        } else if here.is_some_and(CellType::is_occupied) {
            return self.reroute_to_standing(grid, rng);
        } else {
            warn!(agent = %self.id, position = %self.position, "settling off-seat, standing instead");
            grid.set(self.position, CellType::Standing)?;
            AgentState::Standing
        };

        self.state = settled;
        debug!(agent = %self.id, position = %self.position, state = %settled, "agent settled");
        Ok(StepOutcome::Settled(settled))
    }

    /// Give up the current target and head for standing room.
    fn reroute_to_standing(&mut self, grid: &mut Grid, rng: &mut SimRng) -> CoreResult<StepOutcome> {
        let target = find_standing_position(grid, rng);
        grid.set(target, CellType::Standing)?;

        warn!(agent = %self.id, lost = %self.position, %target, "target taken on arrival, re-routing to stand");

        self.will_stand = true;
        self.target = target;
        self.path = compute_path(
            grid.rows(),
            grid.cols(),
            self.position,
            self.corridor_col,
            target,
            self.position.row,
        )
        .unwrap_or_else(|err| {
            warn!(agent = %self.id, %err, "re-route failed, standing in place");
            Path::empty()
        });
        self.state = AgentState::Moving;
        Ok(StepOutcome::Rerouted(target))
    }
}
