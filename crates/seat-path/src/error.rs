use thiserror::Error;

use seat_core::Cell;

#[derive(Debug, Error)]
pub enum PathError {
    #[error("path waypoint {cell} lies outside the {rows}x{cols} grid")]
    OutOfBounds { cell: Cell, rows: usize, cols: usize },
}

pub type PathResult<T> = Result<T, PathError>;
