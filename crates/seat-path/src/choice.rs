//! Block and corridor choice for a newly spawned agent.

use tracing::warn;

use seat_core::{BlockId, SimRng};
use seat_layout::CorridorSegment;

/// Weight of the block a gate faces.
const BASE_BLOCK_WEIGHT: f64 = 0.6;
/// Weight of each neighbour when the base block has two.
const NEIGHBOUR_WEIGHT_PAIR: f64 = 0.2;
/// Weight of the neighbour when the base block sits at an edge.
const NEIGHBOUR_WEIGHT_SINGLE: f64 = 0.3;

/// Choose the block an agent entering at `gate_col` will try first.
///
/// Gates map onto blocks by span: with `span = num_blocks / gates.len()`,
/// gate `g` faces block `floor(g * span)`.  That base block gets weight 0.6
/// and each existing neighbour 0.2 (0.3 if it is the only neighbour); the
/// weights are normalised and drawn with [`SimRng::weighted_choice`].
///
/// A `gate_col` not in `gates` is treated as the nearest gate.  The result
/// is always `< num_blocks` (or 0 when `num_blocks == 0`).
pub fn pick_block_for_gate(
    gate_col:   usize,
    num_blocks: usize,
    gates:      &[usize],
    rng:        &mut SimRng,
) -> BlockId {
    if num_blocks <= 1 {
        return BlockId(0);
    }
    let gate_index = gates
        .iter()
        .position(|&g| g == gate_col)
        .or_else(|| {
            gates
                .iter()
                .enumerate()
                .min_by_key(|&(_, &g)| g.abs_diff(gate_col))
                .map(|(i, _)| i)
        });
    let Some(gate_index) = gate_index else {
        return BlockId::from_index(rng.gen_range(0..num_blocks));
    };

    let span = num_blocks as f64 / gates.len() as f64;
    let base = ((gate_index as f64 * span).floor() as usize).min(num_blocks - 1);

    let left = base.checked_sub(1);
    let right = (base + 1 < num_blocks).then_some(base + 1);
    let neighbour_weight = if left.is_some() && right.is_some() {
        NEIGHBOUR_WEIGHT_PAIR
    } else {
        NEIGHBOUR_WEIGHT_SINGLE
    };

    let mut blocks = vec![base];
    let mut weights = vec![BASE_BLOCK_WEIGHT];
    for n in [left, right].into_iter().flatten() {
        blocks.push(n);
        weights.push(neighbour_weight);
    }
    let total: f64 = weights.iter().sum();
    weights.iter_mut().for_each(|w| *w /= total);

    let chosen = rng.weighted_choice(&blocks, &weights).copied().unwrap_or(base);
    BlockId::from_index(chosen.min(num_blocks - 1))
}

/// Choose the corridor column an agent uses to reach `seat_col` in `block`.
///
/// Each corridor segment adjacent to the block is weighted
/// `1 / (distance + 1)` where `distance` is the column gap from the segment
/// to the seat; one segment is drawn, and its column nearest the seat is
/// returned.  `None` if the block has no adjacent segment.
pub fn pick_corridor_cell(
    block:           BlockId,
    seat_col:        usize,
    block_corridors: &[Vec<usize>],
    corridors:       &[CorridorSegment],
    rng:             &mut SimRng,
) -> Option<usize> {
    let candidates: Vec<&CorridorSegment> = block_corridors
        .get(block.index())?
        .iter()
        .filter_map(|&i| corridors.get(i))
        .collect();
    if candidates.is_empty() {
        warn!(%block, "block has no adjacent corridor");
        return None;
    }

    let weights: Vec<f64> = candidates
        .iter()
        .map(|seg| 1.0 / (seg.distance_to(seat_col) as f64 + 1.0))
        .collect();
    rng.weighted_choice(&candidates, &weights)
        .map(|seg| seg.closest_col(seat_col))
}
