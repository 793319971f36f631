use tracing::warn;

use seat_core::{Cell, CellType, Grid, SimRng};
use seat_layout::{standing_fallback, standing_rows};

/// Standing room for an agent that found no seat.
///
/// Scans every row behind the seat band, nearest the gates first, and
/// returns a uniformly random free cell (not a seat, gate, or settled agent)
/// from the first row that has one.  Only when the whole back area is full
/// does it return the fallback cell `(rows - 2, 0)`.
pub fn find_standing_position(grid: &Grid, rng: &mut SimRng) -> Cell {
    for row in standing_rows(grid.rows()) {
        let free: Vec<Cell> = (0..grid.cols())
            .map(|col| Cell::new(row, col))
            .filter(|&cell| {
                !matches!(
                    grid.get(cell),
                    None | Some(CellType::Seat | CellType::Gate | CellType::SeatedAgent | CellType::Standing)
                )
            })
            .collect();
        if let Some(&cell) = rng.choose(&free) {
            return cell;
        }
    }

    let fallback = standing_fallback(grid.rows());
    warn!(%fallback, "no standing room left, using fallback cell");
    fallback
}
