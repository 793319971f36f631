//! `seat-sim`: tick loop orchestrator for the `rust_seating` simulation.
//!
//! # Tick loop
//!
//! ```text
//! initialize(config):  validate → build_grid → reset run state → reseed RNG
//! tick():
//!   ① Spawn     : one agent per free gate while NUM_AGENTS lasts;
//!                 BACK_PREF × 1.5 / 1.0 / 0.5 by arrival phase.
//!   ② Step      : pre-existing agents move one cell or settle.
//!   ③ Sample    : tick += 1; push (tick, seated, standing).
//!   ④ Complete  : all settled and budget spent, or tick == MAX_TIME.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use seat_core::SimConfig;
//! use seat_sim::{NoopObserver, SeatingSim};
//!
//! let mut sim = SeatingSim::new();
//! sim.initialize(&SimConfig::default())?;
//! let summary = sim.run(&mut NoopObserver)?;
//! println!("{} of {} seated", summary.seated, summary.spawned);
//! ```

pub mod error;
pub mod observer;
pub mod record;
pub mod sim;


pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use record::{RunHistory, RunSummary, Sample, SimStats};
pub use sim::{Phase, SeatingSim, TickOutcome};
