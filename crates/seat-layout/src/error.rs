//! Layout error type.

use thiserror::Error;

use seat_core::CoreError;

/// Errors produced while building a floor plan.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("block count must be at least 1")]
    NoBlocks,

    #[error("{cols} columns cannot fit {blocks} blocks with {corridor}-wide corridors")]
    NoRoomForBlocks { cols: usize, blocks: usize, corridor: usize },

    #[error("{rows} rows is too short for the seat band and back area (need {min})")]
    TooFewRows { rows: usize, min: usize },

    #[error("grid write failed: {0}")]
    Grid(#[from] CoreError),
}

pub type LayoutResult<T> = Result<T, LayoutError>;
