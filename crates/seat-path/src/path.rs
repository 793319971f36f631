//! The [`Path`] type and the four-leg [`compute_path`] template.

use std::collections::VecDeque;

use seat_core::Cell;

use crate::{PathError, PathResult};

// ── Path ──────────────────────────────────────────────────────────────────────

/// Cells still to visit, in order.  The agent's current cell is never part
/// of its path; one cell is consumed per tick.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Path {
    cells: VecDeque<Cell>,
}

impl Path {
    /// A path with no steps; the agent settles where it stands.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Remove and return the next cell.
    #[inline]
    pub fn pop_next(&mut self) -> Option<Cell> {
        self.cells.pop_front()
    }

    /// Final cell, if any steps remain.
    #[inline]
    pub fn destination(&self) -> Option<Cell> {
        self.cells.back().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }
}

impl FromIterator<Cell> for Path {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self { cells: iter.into_iter().collect() }
    }
}

// ── compute_path ──────────────────────────────────────────────────────────────

/// Integers strictly after `from` up to and including `to`, stepping toward
/// `to`.  Empty when `from == to`.
fn leg(from: usize, to: usize) -> Box<dyn Iterator<Item = usize>> {
    if to >= from {
        Box::new(from + 1..=to)
    } else {
        Box::new((to..from).rev())
    }
}

/// Build the four-leg path from `spawn` to `target`:
///
/// 1. vertical along `spawn.col` to `turn_row`;
/// 2. horizontal along `turn_row` to `corridor_col`;
/// 3. vertical along `corridor_col` to `target.row`;
/// 4. horizontal along `target.row` to `target.col`.
///
/// A leg whose start and end coincide contributes no cells.  The spawn cell
/// is excluded; the target cell is the last cell.
///
/// # Errors
///
/// [`PathError::OutOfBounds`] if any waypoint lies outside `rows × cols`.
/// Callers treat that as an empty path.
pub fn compute_path(
    rows:         usize,
    cols:         usize,
    spawn:        Cell,
    corridor_col: usize,
    target:       Cell,
    turn_row:     usize,
) -> PathResult<Path> {
    let waypoints = [
        spawn,
        Cell::new(turn_row, spawn.col),
        Cell::new(turn_row, corridor_col),
        Cell::new(target.row, corridor_col),
        target,
    ];
    if let Some(&cell) = waypoints.iter().find(|c| c.row >= rows || c.col >= cols) {
        return Err(PathError::OutOfBounds { cell, rows, cols });
    }

    let mut cells = VecDeque::with_capacity(
        spawn.row.abs_diff(turn_row)
            + spawn.col.abs_diff(corridor_col)
            + turn_row.abs_diff(target.row)
            + corridor_col.abs_diff(target.col),
    );
    cells.extend(leg(spawn.row, turn_row).map(|r| Cell::new(r, spawn.col)));
    cells.extend(leg(spawn.col, corridor_col).map(|c| Cell::new(turn_row, c)));
    cells.extend(leg(turn_row, target.row).map(|r| Cell::new(r, corridor_col)));
    cells.extend(leg(corridor_col, target.col).map(|c| Cell::new(target.row, c)));

    Ok(Path { cells })
}
