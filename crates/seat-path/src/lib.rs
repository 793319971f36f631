//! `seat-path`: where an agent heads and how it walks there.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`choice`] | `pick_block_for_gate`, `pick_corridor_cell`                 |
//! | [`path`]   | `Path`, `compute_path` (four-leg maneuver template)         |
//! | [`error`]  | `PathError`, `PathResult<T>`                                |
//!
//! # No search
//!
//! Paths are not searched for.  Every path follows the same template: walk
//! up from the gate to a turn row, across to a feeder corridor, up the
//! corridor to the target row, then along the row to the target cell.  The
//! template keeps agents off seat rows until their last leg and makes paths
//! predictable to watch; it is not the shortest route.

pub mod choice;
pub mod error;
pub mod path;


pub use choice::{pick_block_for_gate, pick_corridor_cell};
pub use error::{PathError, PathResult};
pub use path::{Path, compute_path};
