//! Grid coordinates and per-cell state.

use std::fmt;

/// A `(row, col)` grid coordinate.
///
/// Row 0 is the front of the venue (the stage); the last row holds the
/// gates.  Ordering is row-major so sorted `Cell`s read front-to-back,
/// left-to-right.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The state of one grid cell.
///
/// The only transitions the engine performs are
/// `Empty | Seat | Corridor → Standing | SeatedAgent`; nothing ever reverts.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellType {
    #[default]
    Empty,
    Seat,
    Corridor,
    Gate,
    Standing,
    SeatedAgent,
}

impl CellType {
    /// `true` for cells holding a settled agent.
    #[inline]
    pub fn is_occupied(self) -> bool {
        matches!(self, CellType::Standing | CellType::SeatedAgent)
    }

    /// One-character glyph used by text renderers.
    pub fn glyph(self) -> char {
        match self {
            CellType::Empty       => ' ',
            CellType::Seat        => '.',
            CellType::Corridor    => ':',
            CellType::Gate        => 'G',
            CellType::Standing    => 's',
            CellType::SeatedAgent => '#',
        }
    }

    /// Lower-case label for logs and CSV output.
    pub fn as_str(self) -> &'static str {
        match self {
            CellType::Empty       => "empty",
            CellType::Seat        => "seat",
            CellType::Corridor    => "corridor",
            CellType::Gate        => "gate",
            CellType::Standing    => "standing",
            CellType::SeatedAgent => "seated_agent",
        }
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of seat coordinates promised to en-route agents.
#[cfg(not(feature = "fx-hash"))]
pub type CellSet = std::collections::HashSet<Cell>;

/// Set of seat coordinates promised to en-route agents.
#[cfg(feature = "fx-hash")]
pub type CellSet = rustc_hash::FxHashSet<Cell>;
