//! Unit tests for seat-select.

#[cfg(test)]
mod helpers {
    use seat_core::{Cell, CellType, SimConfig};
    use seat_layout::{Layout, SeatBlock, build_grid};

    use crate::SeatPrefs;

    /// Default 20 × 68 venue, four blocks of width 14.
    pub fn venue() -> Layout {
        build_grid(&SimConfig::default()).unwrap()
    }

    pub fn seat_all(layout: &mut Layout, block: SeatBlock, row: usize) {
        for col in block.columns() {
            layout.grid.set(Cell::new(row, col), CellType::SeatedAgent).unwrap();
        }
    }

    pub fn prefs(back_pref: f64, aisle_pref: f64, social_distance: f64) -> SeatPrefs {
        SeatPrefs { back_pref, aisle_pref, social_distance, assigned_seats: true }
    }
}

// ── pick_seat_in_block ────────────────────────────────────────────────────────

#[cfg(test)]
mod seat_tests {
    use std::collections::HashSet;

    use seat_core::{CellSet, CellType, SimRng};

    use super::helpers::{prefs, seat_all, venue};
    use crate::{SeatPrefs, candidate_rows, pick_seat_in_block};

    #[test]
    fn pick_lands_on_a_seat_of_the_block() {
        let layout = venue();
        let block = layout.blocks[2];
        let mut rng = SimRng::new(1);
        for _ in 0..100 {
            let seat = pick_seat_in_block(&layout.grid, &block, &CellSet::default(), &SeatPrefs::default(), 14, &mut rng)
                .unwrap();
            assert!(block.contains_col(seat.col));
            assert!(layout.seat_rows().contains(&seat.row));
            assert_eq!(layout.grid.get(seat), Some(CellType::Seat));
        }
    }

    #[test]
    fn full_block_yields_none() {
        let mut layout = venue();
        let block = layout.blocks[0];
        for row in layout.seat_rows() {
            seat_all(&mut layout, block, row);
        }
        let mut rng = SimRng::new(1);
        let pick = pick_seat_in_block(&layout.grid, &block, &CellSet::default(), &SeatPrefs::default(), 14, &mut rng);
        assert_eq!(pick, None);
    }

    #[test]
    fn reserved_seats_are_never_picked_twice() {
        let layout = venue();
        let block = layout.blocks[1];
        let mut assigned = CellSet::default();
        let mut seen = HashSet::new();
        let mut rng = SimRng::new(17);
        while let Some(seat) = pick_seat_in_block(&layout.grid, &block, &assigned, &prefs(2.0, 1.0, 1.0), 14, &mut rng) {
            assert!(seen.insert(seat), "seat {seat} picked twice");
            assigned.insert(seat);
        }
        assert_eq!(seen.len(), block.width() * 8);
    }

    #[test]
    fn reservations_ignored_when_flag_off() {
        let layout = venue();
        let block = layout.blocks[0];
        let assigned: CellSet = layout
            .grid
            .iter()
            .filter(|&(c, ty)| ty == CellType::Seat && block.contains_col(c.col))
            .map(|(c, _)| c)
            .collect();
        let mut rng = SimRng::new(2);

        let on = prefs(0.0, 0.0, 0.0);
        assert_eq!(pick_seat_in_block(&layout.grid, &block, &assigned, &on, 14, &mut rng), None);

        let off = SeatPrefs { assigned_seats: false, ..on };
        assert!(pick_seat_in_block(&layout.grid, &block, &assigned, &off, 14, &mut rng).is_some());
    }

    #[test]
    fn rows_at_threshold_are_skipped() {
        let mut layout = venue();
        let block = layout.blocks[0];
        // Two settled agents in every row but the back one.
        for row in 2..=8 {
            for col in [block.start + 4, block.start + 6] {
                layout.grid.set(seat_core::Cell::new(row, col), CellType::SeatedAgent).unwrap();
            }
        }
        let rows = candidate_rows(&layout.grid, &block, &CellSet::default(), &SeatPrefs::default(), 2);
        assert_eq!(rows, vec![9]);

        let mut rng = SimRng::new(4);
        for _ in 0..20 {
            let seat = pick_seat_in_block(&layout.grid, &block, &CellSet::default(), &prefs(0.0, 1.0, 1.0), 2, &mut rng)
                .unwrap();
            assert_eq!(seat.row, 9);
        }
    }

    #[test]
    fn strong_back_pref_excludes_front_rows() {
        let layout = venue();
        let block = layout.blocks[0];
        let mut rng = SimRng::new(8);
        for _ in 0..500 {
            let seat = pick_seat_in_block(&layout.grid, &block, &CellSet::default(), &prefs(5.0, 0.0, 0.0), 14, &mut rng)
                .unwrap();
            assert!(seat.row >= 4, "row {}", seat.row);
        }
    }

    #[test]
    fn front_rows_kept_when_they_are_all_that_is_left() {
        let mut layout = venue();
        let block = layout.blocks[0];
        for row in 4..=9 {
            seat_all(&mut layout, block, row);
        }
        let mut rng = SimRng::new(8);
        for _ in 0..50 {
            let seat = pick_seat_in_block(&layout.grid, &block, &CellSet::default(), &prefs(5.0, 0.0, 0.0), 14, &mut rng)
                .unwrap();
            assert!(seat.row == 2 || seat.row == 3);
        }
    }

    #[test]
    fn back_pref_biases_toward_back() {
        let layout = venue();
        let block = layout.blocks[0];
        let mut rng = SimRng::new(21);
        let mut per_row = [0usize; 10];
        for _ in 0..2000 {
            let seat = pick_seat_in_block(&layout.grid, &block, &CellSet::default(), &prefs(1.0, 0.0, 0.0), 14, &mut rng)
                .unwrap();
            per_row[seat.row] += 1;
        }
        assert!(per_row[9] > per_row[3] * 4, "{per_row:?}");
    }

    #[test]
    fn no_back_pref_reaches_the_front_row() {
        let layout = venue();
        let block = layout.blocks[0];
        let mut rng = SimRng::new(21);
        let front = (0..500)
            .filter_map(|_| {
                pick_seat_in_block(&layout.grid, &block, &CellSet::default(), &prefs(0.0, 0.0, 0.0), 14, &mut rng)
            })
            .filter(|s| s.row == 2)
            .count();
        assert!(front > 20, "front {front}");
    }

    #[test]
    fn aisle_pref_favours_edge_columns() {
        let layout = venue();
        let block = layout.blocks[0];
        let mut rng = SimRng::new(13);
        let edge = (0..1000)
            .filter_map(|_| {
                pick_seat_in_block(&layout.grid, &block, &CellSet::default(), &prefs(0.0, 5.0, 0.0), 14, &mut rng)
            })
            .filter(|s| block.is_aisle_col(s.col))
            .count();
        // 4 edge columns at weight 16 vs 10 inner columns at weight 1.
        assert!(edge > 750, "edge {edge}");
    }
}

// ── pick_seat_any_block ───────────────────────────────────────────────────────

#[cfg(test)]
mod any_block_tests {
    use seat_core::{CellSet, SimRng};

    use super::helpers::{seat_all, venue};
    use crate::{SeatPrefs, pick_seat_any_block};

    #[test]
    fn falls_through_to_a_block_with_room() {
        let mut layout = venue();
        let blocks = layout.blocks.clone();
        for &block in &blocks[..3] {
            for row in layout.seat_rows() {
                seat_all(&mut layout, block, row);
            }
        }
        let mut rng = SimRng::new(5);
        for _ in 0..20 {
            let seat = pick_seat_any_block(&layout.grid, &blocks, &CellSet::default(), &SeatPrefs::default(), 14, &mut rng)
                .unwrap();
            assert!(blocks[3].contains_col(seat.col));
        }
    }

    #[test]
    fn all_full_is_none() {
        let mut layout = venue();
        let blocks = layout.blocks.clone();
        for &block in &blocks {
            for row in layout.seat_rows() {
                seat_all(&mut layout, block, row);
            }
        }
        let mut rng = SimRng::new(5);
        assert_eq!(
            pick_seat_any_block(&layout.grid, &blocks, &CellSet::default(), &SeatPrefs::default(), 14, &mut rng),
            None
        );
    }
}

// ── find_standing_position ────────────────────────────────────────────────────

#[cfg(test)]
mod standing_tests {
    use seat_core::{Cell, CellType, SimRng};

    use super::helpers::venue;
    use crate::find_standing_position;

    fn fill_row(grid: &mut seat_core::Grid, row: usize) {
        for col in 0..grid.cols() {
            let cell = Cell::new(row, col);
            if !grid.is(cell, CellType::Gate) {
                grid.set(cell, CellType::Standing).unwrap();
            }
        }
    }

    #[test]
    fn prefers_row_nearest_the_gates() {
        let layout = venue();
        let mut rng = SimRng::new(3);
        for _ in 0..50 {
            let cell = find_standing_position(&layout.grid, &mut rng);
            assert_eq!(cell.row, 18);
            let ty = layout.grid.get(cell).unwrap();
            assert!(!matches!(ty, CellType::Seat | CellType::Gate));
        }
    }

    #[test]
    fn moves_forward_when_a_row_is_full() {
        let mut layout = venue();
        fill_row(&mut layout.grid, 18);
        let mut rng = SimRng::new(3);
        assert_eq!(find_standing_position(&layout.grid, &mut rng).row, 17);
    }

    #[test]
    fn scans_past_the_last_three_rows() {
        let mut layout = venue();
        for row in 13..=18 {
            fill_row(&mut layout.grid, row);
        }
        let mut rng = SimRng::new(3);
        for _ in 0..20 {
            assert_eq!(find_standing_position(&layout.grid, &mut rng).row, 12);
        }
    }

    #[test]
    fn fallback_only_when_back_area_is_full() {
        let mut layout = venue();
        for row in 11..=18 {
            fill_row(&mut layout.grid, row);
        }
        let mut rng = SimRng::new(3);
        assert_eq!(find_standing_position(&layout.grid, &mut rng).row, 10);

        fill_row(&mut layout.grid, 10);
        assert_eq!(find_standing_position(&layout.grid, &mut rng), Cell::new(18, 0));
    }
}
