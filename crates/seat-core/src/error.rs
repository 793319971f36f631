//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

use crate::Cell;

/// The error type for `seat-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("cell {cell} is outside the {rows}x{cols} grid")]
    OutOfBounds { cell: Cell, rows: usize, cols: usize },

    #[error("unknown parameter `{0}`")]
    UnknownParam(String),

    #[error("invalid value `{value}` for parameter {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// Shorthand result type for `seat-core`.
pub type CoreResult<T> = Result<T, CoreError>;
