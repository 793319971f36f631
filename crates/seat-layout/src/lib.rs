//! `seat-layout`: venue floor plan and grid construction.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`blocks`]  | `SeatBlock`, `CorridorSegment`, block/corridor/adjacency generators |
//! | [`builder`] | `build_grid` → `Layout`; row-band and gate constants            |
//! | [`error`]   | `LayoutError`, `LayoutResult<T>`                                |
//!
//! # Floor plan
//!
//! ```text
//! row 0..2     stage margin
//! rows 2..=9   seat band:  |cc|bbbbbbbb|cc|bbbbbbbb|cc| … |cc|
//! rows 10..    back area (turn rows, standing rows)
//! last row     gates
//! ```
//!
//! `c` columns are corridor, `b` columns are seats of one block.  Corridor
//! columns are corridor on every row; gates overwrite the bottom row.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod blocks;
pub mod builder;
pub mod error;


pub use blocks::{
    CorridorSegment, SeatBlock, block_corridor_map, generate_corridor_segments,
    generate_seat_blocks,
};
pub use builder::{
    GATE_COLUMNS, Layout, MIN_BACK_ROWS, MIN_ROWS, SEAT_ROW_COUNT, SEAT_ROW_START,
    build_grid, gate_columns, standing_fallback, standing_rows,
};
pub use error::{LayoutError, LayoutResult};
