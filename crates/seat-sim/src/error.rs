use seat_core::CoreError;
use seat_layout::LayoutError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("tick called before a successful initialize")]
    NotInitialized,

    #[error("invalid configuration: {0}")]
    Config(#[source] CoreError),

    #[error("floor plan could not be built: {0}")]
    Layout(#[from] LayoutError),

    #[error("grid write failed: {0}")]
    Grid(#[from] CoreError),
}

pub type SimResult<T> = Result<T, SimError>;
