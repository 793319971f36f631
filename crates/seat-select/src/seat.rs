//! Weighted seat choice inside one block, and across all blocks.

use seat_core::{Cell, CellSet, CellType, Grid, SimRng};
use seat_layout::{SEAT_ROW_COUNT, SEAT_ROW_START, SeatBlock};

use crate::SeatPrefs;

/// Below this many front rows are hard-excluded: `[2.0, 4.0]` → 0, 1, 2.
const BACK_PREF_EXCLUDE_STEPS: [f64; 2] = [2.0, 4.0];

/// Seat weights never drop below this.
const MIN_SEAT_WEIGHT: f64 = 0.01;

/// Seat is free to pick: still a `Seat` cell and, with reservations on, not
/// promised to anyone.
#[inline]
fn is_open(grid: &Grid, assigned: &CellSet, prefs: &SeatPrefs, cell: Cell) -> bool {
    grid.is(cell, CellType::Seat) && !(prefs.assigned_seats && assigned.contains(&cell))
}

/// Seat-band rows of `block` that are below `row_threshold` settled agents
/// and still have an open seat.  Ascending (front first).
pub fn candidate_rows(
    grid:          &Grid,
    block:         &SeatBlock,
    assigned:      &CellSet,
    prefs:         &SeatPrefs,
    row_threshold: usize,
) -> Vec<usize> {
    (SEAT_ROW_START..SEAT_ROW_START + SEAT_ROW_COUNT)
        .filter(|&row| grid.occupied_in_span(row, block.start, block.end) < row_threshold)
        .filter(|&row| {
            block.columns().any(|col| is_open(grid, assigned, prefs, Cell::new(row, col)))
        })
        .collect()
}

/// Thin out front rows according to `back_pref`.  Never empties `rows`.
fn trim_front_rows(rows: &mut Vec<usize>, back_pref: f64, rng: &mut SimRng) {
    if back_pref <= 0.0 {
        return;
    }

    let excluded = BACK_PREF_EXCLUDE_STEPS.iter().filter(|&&step| back_pref >= step).count();
    if rows.iter().any(|&r| r >= SEAT_ROW_START + excluded) {
        rows.retain(|&r| r >= SEAT_ROW_START + excluded);
    }

    let (front, second) = (rows.first().copied(), rows.get(1).copied());

    let p_front = (0.15 + 0.15 * back_pref).min(0.85);
    if let Some(front) = front {
        if rows.len() > 1 && rng.gen_bool(p_front) {
            rows.retain(|&r| r != front);
        }
    }

    let p_second = if back_pref >= 4.0 {
        0.35
    } else if back_pref >= 3.0 {
        0.2
    } else {
        0.0
    };
    if let Some(second) = second {
        if p_second > 0.0 && rows.len() > 1 && rng.gen_bool(p_second) {
            rows.retain(|&r| r != second);
        }
    }
}

/// Pick a seat in `block`, or `None` if it has no candidate row.
///
/// 1. Candidate rows come from [`candidate_rows`].
/// 2. With `back_pref > 0`, front rows are hard-excluded (0, 1 or 2 of them
///    by `back_pref` bucket) and the frontmost remaining rows are randomly
///    dropped; `rows` never becomes empty.
/// 3. Row weight is `1 + back_pref * 2^(row - band start)`, uniform when
///    `back_pref == 0`.
/// 4. Seat weight is `1 + 3 * aisle_pref` (edge columns only) plus
///    `(8 - seated neighbours) * social_distance`, floored at 0.01.
pub fn pick_seat_in_block(
    grid:          &Grid,
    block:         &SeatBlock,
    assigned:      &CellSet,
    prefs:         &SeatPrefs,
    row_threshold: usize,
    rng:           &mut SimRng,
) -> Option<Cell> {
    let mut rows = candidate_rows(grid, block, assigned, prefs, row_threshold);
    if rows.is_empty() {
        return None;
    }
    trim_front_rows(&mut rows, prefs.back_pref, rng);

    let row = if prefs.back_pref > 0.0 {
        let weights: Vec<f64> = rows
            .iter()
            .map(|&r| 1.0 + prefs.back_pref * 2f64.powi((r - SEAT_ROW_START) as i32))
            .collect();
        *rng.weighted_choice(&rows, &weights)?
    } else {
        *rng.choose(&rows)?
    };

    let seats: Vec<Cell> = block
        .columns()
        .map(|col| Cell::new(row, col))
        .filter(|&cell| is_open(grid, assigned, prefs, cell))
        .collect();
    let weights: Vec<f64> = seats
        .iter()
        .map(|&cell| {
            let seated = grid
                .neighbours8(cell)
                .filter(|&n| grid.is(n, CellType::SeatedAgent))
                .count();
            let aisle = if block.is_aisle_col(cell.col) { 3.0 * prefs.aisle_pref } else { 0.0 };
            let weight = 1.0 + aisle + (8 - seated) as f64 * prefs.social_distance;
            weight.max(MIN_SEAT_WEIGHT)
        })
        .collect();

    rng.weighted_choice(&seats, &weights).copied()
}

/// Try every block in a random order and return the first seat found.
pub fn pick_seat_any_block(
    grid:          &Grid,
    blocks:        &[SeatBlock],
    assigned:      &CellSet,
    prefs:         &SeatPrefs,
    row_threshold: usize,
    rng:           &mut SimRng,
) -> Option<Cell> {
    let mut order: Vec<usize> = (0..blocks.len()).collect();
    rng.shuffle(&mut order);
    order
        .into_iter()
        .find_map(|i| pick_seat_in_block(grid, &blocks[i], assigned, prefs, row_threshold, rng))
}
