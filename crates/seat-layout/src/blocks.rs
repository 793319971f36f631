//! Seat blocks, corridor segments, and their adjacency.

use std::ops::RangeInclusive;

use seat_core::BlockId;

use crate::{LayoutError, LayoutResult};

// ── SeatBlock ─────────────────────────────────────────────────────────────────

/// A contiguous run of seat columns, `start..=end`, spanning the seat band.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeatBlock {
    pub id:    BlockId,
    pub start: usize,
    pub end:   usize,
}

impl SeatBlock {
    #[inline]
    pub fn width(&self) -> usize {
        self.end - self.start + 1
    }

    #[inline]
    pub fn columns(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }

    #[inline]
    pub fn contains_col(&self, col: usize) -> bool {
        self.columns().contains(&col)
    }

    /// `true` if `col` is within one column of either block edge.
    #[inline]
    pub fn is_aisle_col(&self, col: usize) -> bool {
        col.abs_diff(self.start) <= 1 || col.abs_diff(self.end) <= 1
    }
}

/// Lay `num_blocks` equal-width blocks out left to right.
///
/// Block width is `floor((cols - (num_blocks + 1) * corridor) / num_blocks)`;
/// block `i` starts at `corridor + i * (width + corridor)`, so every block is
/// preceded by one corridor and the leftover columns form the right margin.
///
/// # Errors
///
/// [`LayoutError::NoBlocks`] for `num_blocks == 0`;
/// [`LayoutError::NoRoomForBlocks`] if the corridors leave no seat columns.
pub fn generate_seat_blocks(
    cols:       usize,
    num_blocks: usize,
    corridor:   usize,
) -> LayoutResult<Vec<SeatBlock>> {
    if num_blocks == 0 {
        return Err(LayoutError::NoBlocks);
    }
    let corridors = (num_blocks + 1) * corridor;
    let width = cols.checked_sub(corridors).map_or(0, |free| free / num_blocks);
    if width == 0 {
        return Err(LayoutError::NoRoomForBlocks { cols, blocks: num_blocks, corridor });
    }

    Ok((0..num_blocks)
        .map(|i| {
            let start = corridor + i * (width + corridor);
            SeatBlock { id: BlockId::from_index(i), start, end: start + width - 1 }
        })
        .collect())
}

// ── CorridorSegment ───────────────────────────────────────────────────────────

/// A contiguous run of corridor columns, `start..=end`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CorridorSegment {
    pub start: usize,
    pub end:   usize,
}

impl CorridorSegment {
    #[inline]
    pub fn columns(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }

    /// Smallest column distance from `col` to any column of the segment.
    #[inline]
    pub fn distance_to(&self, col: usize) -> usize {
        if col < self.start {
            self.start - col
        } else if col > self.end {
            col - self.end
        } else {
            0
        }
    }

    /// The segment column closest to `col`.
    #[inline]
    pub fn closest_col(&self, col: usize) -> usize {
        col.clamp(self.start, self.end)
    }
}

/// Corridor segments: the left margin `[0, corridor)`, then one segment right
/// after each block.
///
/// Segments are clipped to `cols`; a segment that clips to nothing or that
/// repeats the previous one is dropped.
pub fn generate_corridor_segments(
    cols:     usize,
    blocks:   &[SeatBlock],
    corridor: usize,
) -> Vec<CorridorSegment> {
    if corridor == 0 || cols == 0 {
        return Vec::new();
    }
    let starts = std::iter::once(0).chain(blocks.iter().map(|b| b.end + 1));

    let mut segments: Vec<CorridorSegment> = Vec::with_capacity(blocks.len() + 1);
    for start in starts {
        if start >= cols {
            continue;
        }
        let seg = CorridorSegment { start, end: (start + corridor - 1).min(cols - 1) };
        if segments.last() != Some(&seg) {
            segments.push(seg);
        }
    }
    segments
}

/// For each block, the indices (into `segments`) of the corridors it may
/// be reached from.
///
/// Block `i` is fed by segment `i` (its left corridor) and segment `i + 1`
/// (its right corridor).  The rightmost block, if it has no right corridor,
/// also borrows segment `i - 1`.
pub fn block_corridor_map(blocks: &[SeatBlock], segments: &[CorridorSegment]) -> Vec<Vec<usize>> {
    let n = segments.len();
    let last = blocks.len().saturating_sub(1);

    (0..blocks.len())
        .map(|i| {
            let mut adj: Vec<usize> = [i, i + 1].into_iter().filter(|&s| s < n).collect();
            if i == last && i + 1 >= n && i > 0 && i - 1 < n {
                adj.push(i - 1);
            }
            adj
        })
        .collect()
}
