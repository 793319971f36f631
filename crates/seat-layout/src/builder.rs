//! Grid construction: [`build_grid`] turns a [`SimConfig`] into a [`Layout`].

use std::ops::RangeInclusive;

use tracing::debug;

use seat_core::{BlockId, Cell, CellType, Grid, SimConfig};

use crate::blocks::{block_corridor_map, generate_corridor_segments, generate_seat_blocks};
use crate::{CorridorSegment, LayoutError, LayoutResult, SeatBlock};

/// First row of the seat band (rows above it are the stage margin).
pub const SEAT_ROW_START: usize = 2;

/// Height of the seat band.
pub const SEAT_ROW_COUNT: usize = 8;

/// Fewest rows a venue keeps between the seat band and the gate row.
pub const MIN_BACK_ROWS: usize = 3;

/// Candidate gate columns; only those inside the grid are used.
pub const GATE_COLUMNS: [usize; 8] = [5, 20, 34, 48, 62, 76, 90, 104];

/// Smallest grid height that fits stage margin, seat band, back rows, and
/// the gate row without overlap.
pub const MIN_ROWS: usize = SEAT_ROW_START + SEAT_ROW_COUNT + MIN_BACK_ROWS + 1;

/// Gate columns that fit inside a `cols`-wide grid.
pub fn gate_columns(cols: usize) -> Vec<usize> {
    GATE_COLUMNS.into_iter().filter(|&c| c < cols).collect()
}

/// Standing rows for a `rows`-high grid: every row between the seat band and
/// the gate row, bottom-most (nearest the gates) first.
pub fn standing_rows(rows: usize) -> impl Iterator<Item = usize> {
    let front = SEAT_ROW_START + SEAT_ROW_COUNT;
    (front..rows.saturating_sub(1)).rev()
}

/// Cell used when every standing row is full.
pub fn standing_fallback(rows: usize) -> Cell {
    Cell::new(rows.saturating_sub(2), 0)
}

// ── Layout ────────────────────────────────────────────────────────────────────

/// A built floor plan: the cell grid plus the metadata derived while
/// building it.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    /// The cell arena.  Seats, corridors, and gates are fixed after
    /// construction; the engine writes only settled-agent states.
    pub grid: Grid,

    /// Gate columns on the bottom row, ascending.
    pub gates: Vec<usize>,

    /// Seat blocks, left to right.
    pub blocks: Vec<SeatBlock>,

    /// Corridor segments, left to right.
    pub corridors: Vec<CorridorSegment>,

    /// `block_corridors[b]`: indices into `corridors` adjacent to block `b`.
    pub block_corridors: Vec<Vec<usize>>,

    /// Corridor width the layout was built with.
    pub corridor_width: usize,
}

impl Layout {
    #[inline]
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Rows holding seats, front (lowest index) to back.
    #[inline]
    pub fn seat_rows(&self) -> RangeInclusive<usize> {
        SEAT_ROW_START..=SEAT_ROW_START + SEAT_ROW_COUNT - 1
    }

    /// Rows between the seat band and the gate row.
    pub fn back_rows(&self) -> RangeInclusive<usize> {
        let first = *self.seat_rows().end() + 1;
        first..=self.rows().saturating_sub(2).max(first)
    }

    #[inline]
    pub fn gate_row(&self) -> usize {
        self.rows() - 1
    }

    pub fn gate_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let row = self.gate_row();
        self.gates.iter().map(move |&c| Cell::new(row, c))
    }

    #[inline]
    pub fn block(&self, id: BlockId) -> Option<&SeatBlock> {
        self.blocks.get(id.index())
    }

    /// Total seats in the venue.
    pub fn seat_capacity(&self) -> usize {
        self.blocks.iter().map(|b| b.width() * SEAT_ROW_COUNT).sum()
    }

    /// Per-row occupancy ceiling for new seat picks: `ceil(width * limit)`,
    /// never below 1.
    pub fn row_threshold(&self, fill_limit: f64) -> usize {
        let width = self.blocks.first().map_or(0, SeatBlock::width);
        ((width as f64 * fill_limit).ceil() as usize).max(1)
    }
}

// ── build_grid ────────────────────────────────────────────────────────────────

/// Build the floor plan for `config`.  Deterministic.
///
/// Order of writes: seats for every block across the seat band, then
/// corridor on every still-empty cell of every corridor column, then gates
/// on the bottom row.
///
/// # Errors
///
/// [`LayoutError::TooFewRows`], [`LayoutError::NoBlocks`], or
/// [`LayoutError::NoRoomForBlocks`] when the config cannot hold a venue.
pub fn build_grid(config: &SimConfig) -> LayoutResult<Layout> {
    let (rows, cols) = (config.rows, config.cols);
    if rows < MIN_ROWS {
        return Err(LayoutError::TooFewRows { rows, min: MIN_ROWS });
    }

    let corridor_width = config.corridor_width();
    let blocks = generate_seat_blocks(cols, config.num_blocks, corridor_width)?;
    let corridors = generate_corridor_segments(cols, &blocks, corridor_width);

    let mut grid = Grid::new(rows, cols);

    for row in SEAT_ROW_START..SEAT_ROW_START + SEAT_ROW_COUNT {
        for block in &blocks {
            for col in block.columns() {
                grid.set(Cell::new(row, col), CellType::Seat)?;
            }
        }
    }

    for seg in &corridors {
        for col in seg.columns() {
            for row in 0..rows {
                let cell = Cell::new(row, col);
                if grid.is(cell, CellType::Empty) {
                    grid.set(cell, CellType::Corridor)?;
                }
            }
        }
    }

    let gates = gate_columns(cols);
    for &col in &gates {
        grid.set(Cell::new(rows - 1, col), CellType::Gate)?;
    }

    let block_corridors = block_corridor_map(&blocks, &corridors);

    debug!(
        rows,
        cols,
        blocks = blocks.len(),
        block_width = blocks[0].width(),
        corridor_width,
        gates = gates.len(),
        "floor plan built"
    );

    Ok(Layout { grid, gates, blocks, corridors, block_corridors, corridor_width })
}
