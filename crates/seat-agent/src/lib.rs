//! `seat-agent`: attendee agents for the `rust_seating` simulation.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                       |
//! |-------------|----------------------------------------------------------------|
//! | [`agent`]   | `Agent`, `AgentState`, `StepOutcome`; the per-tick step        |
//! | [`spawn`]   | `SpawnContext`, `Agent::spawn` (block, seat, corridor, path)   |
//! | [`store`]   | `AgentStore` (spawn-ordered agents), `AgentCounts`             |
//!
//! # Lifecycle
//!
//! ```text
//! Spawned ──step──▶ Moving ──path exhausted──▶ Seated | Standing
//! ```
//!
//! All decisions are taken at spawn: where to go, which corridor to use,
//! where to turn.  Stepping only consumes the path and settles at its end,
//! so the engine can advance agents in spawn order without any planning.

pub mod agent;
pub mod spawn;
pub mod store;

#[cfg(test)]
mod tests;

pub use agent::{Agent, AgentState, StepOutcome};
pub use spawn::SpawnContext;
pub use store::{AgentCounts, AgentStore};
