//! `seat-core`: foundational types for the `rust_seating` simulation.
//!
//! This crate is a dependency of every other `seat-*` crate.  It has no
//! `seat-*` dependencies and only a few external ones (`rand`, `thiserror`,
//! `tracing`, plus optional `serde` / `rustc-hash`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `BlockId`                                  |
//! | [`cell`]        | `Cell` coordinate, `CellType`, `CellSet`              |
//! | [`grid`]        | `Grid`: the single owned cell arena                  |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `SimRng` and the weighted-choice primitive            |
//! | [`config`]      | `SimConfig`, `ConfigStore`, `ParamKey`, `ParamValue`  |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `serde`   | Adds `Serialize`/`Deserialize` to public data types.     |
//! | `fx-hash` | `CellSet` becomes an `FxHashSet` instead of `HashSet`.   |

pub mod cell;
pub mod config;
pub mod error;
pub mod grid;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::{Cell, CellSet, CellType};
pub use config::{ConfigChange, ConfigStore, ListenerId, ParamKey, ParamValue, SimConfig};
pub use error::{CoreError, CoreResult};
pub use grid::Grid;
pub use ids::{AgentId, BlockId};
pub use rng::SimRng;
pub use time::Tick;
