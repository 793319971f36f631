//! Spawn-time decisions: block, seat (or standing room), corridor, turn row.

use tracing::{debug, warn};

use seat_core::{AgentId, BlockId, Cell, CellSet, SimRng};
use seat_layout::Layout;
use seat_path::{Path, compute_path, pick_block_for_gate, pick_corridor_cell};
use seat_select::{SeatPrefs, find_standing_position, pick_seat_any_block, pick_seat_in_block};

use crate::{Agent, AgentState};

/// Everything an agent reads (and the one set it writes) while deciding
/// where to go.  Built by the engine for each spawn.
pub struct SpawnContext<'a> {
    pub layout: &'a Layout,

    /// Seats promised to agents still en route.  A picked seat is inserted
    /// here before `spawn` returns when `prefs.assigned_seats` is on.
    pub assigned: &'a mut CellSet,

    /// Preferences for this spawn, `back_pref` already phase-scaled.
    pub prefs: SeatPrefs,

    /// Per-row settled-agent ceiling (see `Layout::row_threshold`).
    pub row_threshold: usize,
}

impl Agent {
    /// Create an agent standing on `gate` with its whole route decided.
    ///
    /// The seat is looked for in the block the gate leads to, then in any
    /// block.  With no seat anywhere the agent is will-stand: its target is a
    /// standing cell, its corridor column is the corridor width and it turns
    /// on row `rows - 2`.  The caller marks a will-stand target on the grid.
    ///
    /// A path that cannot be built leaves the agent with an empty path; it
    /// settles at the gate on its first step.
    pub fn spawn(id: AgentId, gate: Cell, ctx: &mut SpawnContext<'_>, rng: &mut SimRng) -> Agent {
        let layout = ctx.layout;
        let num_blocks = layout.blocks.len();

        let block = pick_block_for_gate(gate.col, num_blocks, &layout.gates, rng);
        let block = BlockId::from_index(block.index().min(num_blocks.saturating_sub(1)));

        let seat = layout
            .block(block)
            .and_then(|b| {
                pick_seat_in_block(&layout.grid, b, ctx.assigned, &ctx.prefs, ctx.row_threshold, rng)
            })
            .or_else(|| {
                pick_seat_any_block(
                    &layout.grid,
                    &layout.blocks,
                    ctx.assigned,
                    &ctx.prefs,
                    ctx.row_threshold,
                    rng,
                )
            });

        let (target, will_stand, corridor_col, turn_row) = match seat {
            Some(seat) => {
                if ctx.prefs.assigned_seats {
                    ctx.assigned.insert(seat);
                }
                let seat_block = layout
                    .blocks
                    .iter()
                    .position(|b| b.contains_col(seat.col))
                    .map_or(block, BlockId::from_index);
                let corridor_col = pick_corridor_cell(
                    seat_block,
                    seat.col,
                    &layout.block_corridors,
                    &layout.corridors,
                    rng,
                )
                .unwrap_or(layout.corridor_width);
                let turn_row = rng.gen_range(layout.back_rows());
                (seat, false, corridor_col, turn_row)
            }
            None => {
                let target = find_standing_position(&layout.grid, rng);
                warn!(agent = %id, %target, "no seat in any block, agent will stand");
                (target, true, layout.corridor_width, layout.rows() - 2)
            }
        };

        let path = compute_path(layout.rows(), layout.cols(), gate, corridor_col, target, turn_row)
            .unwrap_or_else(|err| {
                warn!(agent = %id, %err, "no path from gate, agent stays put");
                Path::empty()
            });

        debug!(
            agent = %id,
            %gate,
            %block,
            %target,
            will_stand,
            corridor_col,
            turn_row,
            steps = path.len(),
            "agent spawned"
        );

        Agent {
            id,
            position: gate,
            state: AgentState::Spawned,
            will_stand,
            block,
            corridor_col,
            turn_row,
            target,
            path,
        }
    }
}
