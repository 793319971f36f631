//! Unit tests for seat-agent.

#[cfg(test)]
mod helpers {
    use seat_core::{AgentId, BlockId, Cell, CellSet, CellType, SimConfig, SimRng};
    use seat_layout::{Layout, build_grid};
    use seat_path::Path;
    use seat_select::SeatPrefs;

    use crate::{Agent, AgentState, SpawnContext};

    pub fn venue() -> Layout {
        build_grid(&SimConfig::default()).unwrap()
    }

    pub fn spawn_at(layout: &Layout, assigned: &mut CellSet, prefs: SeatPrefs, rng: &mut SimRng, id: usize) -> Agent {
        let gate = layout.gate_cells().nth(id % layout.gates.len()).unwrap();
        let mut ctx = SpawnContext { layout, assigned, prefs, row_threshold: layout.row_threshold(1.0) };
        Agent::spawn(AgentId::from_index(id), gate, &mut ctx, rng)
    }

    pub fn fill_seats(layout: &mut Layout) {
        let seats: Vec<Cell> = layout
            .grid
            .iter()
            .filter(|&(_, ty)| ty == CellType::Seat)
            .map(|(c, _)| c)
            .collect();
        for seat in seats {
            layout.grid.set(seat, CellType::SeatedAgent).unwrap();
        }
    }

    /// An agent already at the end of its path on `cell`.
    pub fn arrived(cell: Cell, will_stand: bool) -> Agent {
        Agent {
            id: AgentId(0),
            position: cell,
            state: AgentState::Moving,
            will_stand,
            block: BlockId(0),
            corridor_col: 1,
            turn_row: 18,
            target: cell,
            path: Path::empty(),
        }
    }
}

// ── Spawn ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod spawn_tests {
    use seat_core::{CellSet, CellType, SimRng};
    use seat_select::SeatPrefs;

    use super::helpers::{fill_seats, spawn_at, venue};
    use crate::AgentState;

    #[test]
    fn seated_spawn_reserves_and_routes_to_its_seat() {
        let layout = venue();
        let mut assigned = CellSet::default();
        let mut rng = SimRng::new(42);
        let agent = spawn_at(&layout, &mut assigned, SeatPrefs::default(), &mut rng, 0);

        assert_eq!(agent.state, AgentState::Spawned);
        assert!(!agent.will_stand);
        assert_eq!(agent.position, layout.gate_cells().next().unwrap());
        assert_eq!(layout.grid.get(agent.target), Some(CellType::Seat));
        assert!(assigned.contains(&agent.target));
        assert_eq!(agent.path.destination(), Some(agent.target));
        assert!(layout.back_rows().contains(&agent.turn_row));
        assert_eq!(layout.grid.get(seat_core::Cell::new(10, agent.corridor_col)), Some(CellType::Corridor));
    }

    #[test]
    fn no_reservation_when_flag_off() {
        let layout = venue();
        let mut assigned = CellSet::default();
        let mut rng = SimRng::new(42);
        let prefs = SeatPrefs { assigned_seats: false, ..SeatPrefs::default() };
        let agent = spawn_at(&layout, &mut assigned, prefs, &mut rng, 1);
        assert!(!agent.will_stand);
        assert!(assigned.is_empty());
    }

    #[test]
    fn path_stays_off_seats_until_the_target_row() {
        let layout = venue();
        let mut assigned = CellSet::default();
        let mut rng = SimRng::new(9);
        for id in 0..40 {
            let agent = spawn_at(&layout, &mut assigned, SeatPrefs::default(), &mut rng, id);
            for cell in agent.path.iter().filter(|c| c.row != agent.target.row) {
                assert_ne!(layout.grid.get(cell), Some(CellType::Seat), "agent {id} crosses seat {cell}");
            }
        }
    }

    #[test]
    fn reserved_targets_are_distinct() {
        let layout = venue();
        let mut assigned = CellSet::default();
        let mut rng = SimRng::new(3);
        let targets: Vec<_> = (0..200)
            .map(|id| spawn_at(&layout, &mut assigned, SeatPrefs::default(), &mut rng, id).target)
            .collect();
        assert_eq!(assigned.len(), 200);
        let unique: std::collections::HashSet<_> = targets.iter().collect();
        assert_eq!(unique.len(), 200);
    }

    #[test]
    fn full_venue_makes_will_stand_agents() {
        let mut layout = venue();
        fill_seats(&mut layout);
        let mut assigned = CellSet::default();
        let mut rng = SimRng::new(5);
        let agent = spawn_at(&layout, &mut assigned, SeatPrefs::default(), &mut rng, 2);

        assert!(agent.will_stand);
        assert_eq!(agent.corridor_col, layout.corridor_width);
        assert_eq!(agent.turn_row, layout.rows() - 2);
        assert!(agent.target.row >= layout.rows() - 4 && agent.target.row <= layout.rows() - 2);
        assert!(!matches!(
            layout.grid.get(agent.target),
            Some(CellType::Seat | CellType::Gate | CellType::SeatedAgent)
        ));
        assert!(assigned.is_empty());
    }
}

// ── Step ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod step_tests {
    use seat_core::{Cell, CellSet, CellType, SimRng};
    use seat_select::SeatPrefs;

    use super::helpers::{arrived, fill_seats, spawn_at, venue};
    use crate::{AgentState, StepOutcome};

    #[test]
    fn walks_then_settles_seated() {
        let mut layout = venue();
        let mut assigned = CellSet::default();
        let mut rng = SimRng::new(42);
        let mut agent = spawn_at(&layout, &mut assigned, SeatPrefs::default(), &mut rng, 3);
        let steps = agent.path.len();

        for _ in 0..steps {
            assert!(matches!(agent.step(&mut layout.grid, &mut rng).unwrap(), StepOutcome::Moved(_)));
            assert_eq!(agent.state, AgentState::Moving);
        }
        assert_eq!(agent.position, agent.target);
        assert_eq!(
            agent.step(&mut layout.grid, &mut rng).unwrap(),
            StepOutcome::Settled(AgentState::Seated)
        );
        assert_eq!(layout.grid.get(agent.target), Some(CellType::SeatedAgent));
        assert_eq!(agent.step(&mut layout.grid, &mut rng).unwrap(), StepOutcome::Idle);
    }

    #[test]
    fn moving_does_not_touch_the_grid() {
        let mut layout = venue();
        let before = layout.grid.clone();
        let mut assigned = CellSet::default();
        let mut rng = SimRng::new(1);
        let mut agent = spawn_at(&layout, &mut assigned, SeatPrefs::default(), &mut rng, 0);
        agent.step(&mut layout.grid, &mut rng).unwrap();
        agent.step(&mut layout.grid, &mut rng).unwrap();
        assert_eq!(layout.grid, before);
    }

    #[test]
    fn will_stand_agent_settles_standing() {
        let mut layout = venue();
        fill_seats(&mut layout);
        let mut assigned = CellSet::default();
        let mut rng = SimRng::new(5);
        let mut agent = spawn_at(&layout, &mut assigned, SeatPrefs::default(), &mut rng, 4);
        while !agent.is_terminal() {
            agent.step(&mut layout.grid, &mut rng).unwrap();
        }
        assert_eq!(agent.state, AgentState::Standing);
        assert_eq!(agent.position, agent.target);
        assert_eq!(layout.grid.get(agent.target), Some(CellType::Standing));
    }

    #[test]
    fn off_seat_arrival_stands_in_place() {
        let mut layout = venue();
        let mut rng = SimRng::new(0);
        let mut agent = arrived(Cell::new(12, 0), false);
        assert_eq!(
            agent.step(&mut layout.grid, &mut rng).unwrap(),
            StepOutcome::Settled(AgentState::Standing)
        );
        assert_eq!(layout.grid.get(Cell::new(12, 0)), Some(CellType::Standing));
    }

    #[test]
    fn taken_seat_reroutes_to_standing_room() {
        let mut layout = venue();
        let seat = Cell::new(5, 4);
        layout.grid.set(seat, CellType::SeatedAgent).unwrap();
        let mut rng = SimRng::new(0);
        let mut agent = arrived(seat, false);

        let StepOutcome::Rerouted(target) = agent.step(&mut layout.grid, &mut rng).unwrap() else {
            panic!("expected a re-route");
        };
        assert!(agent.will_stand);
        assert_eq!(agent.target, target);
        assert_eq!(layout.grid.get(target), Some(CellType::Standing));
        assert_ne!(target, seat);

        while !agent.is_terminal() {
            agent.step(&mut layout.grid, &mut rng).unwrap();
        }
        assert_eq!(agent.state, AgentState::Standing);
        assert_eq!(agent.position, target);
        assert_eq!(layout.grid.get(seat), Some(CellType::SeatedAgent));
    }

    #[test]
    fn off_grid_position_is_an_error() {
        let mut layout = venue();
        let mut rng = SimRng::new(0);
        let mut agent = arrived(Cell::new(99, 99), true);
        assert!(agent.step(&mut layout.grid, &mut rng).is_err());
    }
}

// ── Store ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod store_tests {
    use seat_core::{AgentId, Cell};

    use super::helpers::arrived;
    use crate::{AgentCounts, AgentState, AgentStore};

    #[test]
    fn counts_by_state() {
        let mut store = AgentStore::new();
        for (i, state) in [AgentState::Spawned, AgentState::Moving, AgentState::Seated, AgentState::Standing, AgentState::Seated]
            .into_iter()
            .enumerate()
        {
            let mut agent = arrived(Cell::new(10, i), false);
            agent.id = store.next_id();
            agent.state = state;
            store.push(agent);
        }
        assert_eq!(store.len(), 5);
        assert_eq!(store.counts(), AgentCounts { seated: 2, standing: 1, moving: 2 });
        assert_eq!(store.counts().total(), store.len());
        assert_eq!(store.active_positions().count(), 2);
        assert!(!store.all_terminal());
        assert_eq!(store.get(AgentId(3)).unwrap().state, AgentState::Standing);
    }

    #[test]
    fn first_mut_is_clamped() {
        let mut store = AgentStore::new();
        let mut agent = arrived(Cell::new(10, 0), false);
        agent.id = store.next_id();
        store.push(agent);
        assert_eq!(store.first_mut(5).len(), 1);
        store.clear();
        assert!(store.is_empty());
        assert!(store.all_terminal());
    }
}
