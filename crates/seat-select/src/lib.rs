//! `seat-select`: choosing where an agent will end up.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`prefs`]    | `SeatPrefs`: the preference knobs a pick is scored with   |
//! | [`seat`]     | `pick_seat_in_block`, `pick_seat_any_block`                |
//! | [`standing`] | `find_standing_position`                                   |
//!
//! # Reads only
//!
//! Every function here borrows the grid immutably.  Reserving a picked seat
//! (inserting into the assigned set) is the caller's job, so a pick and its
//! reservation happen in the same spawn step.
//!
//! "No seat" is an ordinary outcome (`None`), not an error: the caller moves
//! on to the next fallback.

pub mod prefs;
pub mod seat;
pub mod standing;

#[cfg(test)]
mod tests;

pub use prefs::SeatPrefs;
pub use seat::{candidate_rows, pick_seat_any_block, pick_seat_in_block};
pub use standing::find_standing_position;
