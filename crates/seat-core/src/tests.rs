//! Unit tests for seat-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, BlockId};

    #[test]
    fn index_roundtrip() {
        assert_eq!(AgentId::from_index(42).index(), 42);
        assert_eq!(BlockId::from_index(3), BlockId(3));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId#7");
    }
}

#[cfg(test)]
mod grid {
    use crate::{Cell, CellType, CoreError, Grid};

    #[test]
    fn new_grid_is_empty() {
        let g = Grid::new(4, 5);
        assert_eq!(g.rows(), 4);
        assert_eq!(g.cols(), 5);
        assert_eq!(g.count(CellType::Empty), 20);
    }

    #[test]
    fn set_and_get() {
        let mut g = Grid::new(3, 3);
        g.set(Cell::new(1, 2), CellType::Seat).unwrap();
        assert_eq!(g.get(Cell::new(1, 2)), Some(CellType::Seat));
        assert!(g.is(Cell::new(1, 2), CellType::Seat));
        assert_eq!(g.get(Cell::new(3, 0)), None);
    }

    #[test]
    fn set_out_of_bounds_errors() {
        let mut g = Grid::new(2, 2);
        let err = g.set(Cell::new(2, 0), CellType::Seat).unwrap_err();
        assert!(matches!(err, CoreError::OutOfBounds { rows: 2, cols: 2, .. }));
    }

    #[test]
    fn neighbours_clip_at_edges() {
        let g = Grid::new(3, 3);
        assert_eq!(g.neighbours8(Cell::new(0, 0)).count(), 3);
        assert_eq!(g.neighbours8(Cell::new(1, 1)).count(), 8);
        assert_eq!(g.neighbours8(Cell::new(2, 1)).count(), 5);
        assert!(g.neighbours8(Cell::new(1, 1)).all(|c| c != Cell::new(1, 1)));
    }

    #[test]
    fn occupied_span_counts_only_settled_agents() {
        let mut g = Grid::new(2, 6);
        g.set(Cell::new(0, 1), CellType::SeatedAgent).unwrap();
        g.set(Cell::new(0, 2), CellType::Standing).unwrap();
        g.set(Cell::new(0, 3), CellType::Seat).unwrap();
        g.set(Cell::new(0, 5), CellType::SeatedAgent).unwrap();
        assert_eq!(g.occupied_in_span(0, 0, 4), 2);
        assert_eq!(g.occupied_in_span(0, 0, 5), 3);
        assert_eq!(g.occupied_in_span(1, 0, 5), 0);
    }

    #[test]
    fn display_uses_glyphs() {
        let mut g = Grid::new(1, 3);
        g.set(Cell::new(0, 0), CellType::Gate).unwrap();
        g.set(Cell::new(0, 2), CellType::SeatedAgent).unwrap();
        assert_eq!(g.to_string(), "G #\n");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn zero_weights_return_first() {
        let mut rng = SimRng::new(1);
        let items = ["a", "b", "c"];
        for _ in 0..100 {
            assert_eq!(rng.weighted_choice(&items, &[0.0, 0.0, 0.0]), Some(&"a"));
        }
    }

    #[test]
    fn single_nonzero_weight_always_wins() {
        let mut rng = SimRng::new(2);
        let items = [10, 20, 30, 40];
        for _ in 0..500 {
            assert_eq!(rng.weighted_choice(&items, &[0.0, 0.0, 3.5, 0.0]), Some(&30));
        }
    }

    #[test]
    fn empty_input_is_none() {
        let mut rng = SimRng::new(3);
        let items: [u8; 0] = [];
        assert_eq!(rng.weighted_choice(&items, &[]), None);
        assert_eq!(rng.weighted_index(&[]), None);
    }

    #[test]
    fn weights_bias_selection() {
        let mut rng = SimRng::new(4);
        let mut hits = [0usize; 2];
        for _ in 0..10_000 {
            hits[rng.weighted_index(&[1.0, 9.0]).unwrap()] += 1;
        }
        assert!(hits[1] > hits[0] * 5, "got {hits:?}");
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(99);
        let mut b = SimRng::new(99);
        let xs: Vec<u64> = (0..16).map(|_| a.random()).collect();
        let ys: Vec<u64> = (0..16).map(|_| b.random()).collect();
        assert_eq!(xs, ys);
    }
}

#[cfg(test)]
mod config {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::config::corridor_width_for;
    use crate::{ConfigStore, ParamKey, ParamValue, SimConfig};

    #[test]
    fn corridor_width_search() {
        // 68 cols, 4 blocks: w=2 → 14-wide blocks, every wider corridor is worse.
        assert_eq!(corridor_width_for(68, 4), 2);
        // Nothing fits → fallback.
        assert_eq!(corridor_width_for(10, 6), 2);
        assert_eq!(corridor_width_for(68, 0), 2);
    }

    #[test]
    fn corridor_width_picks_max_block_width() {
        for cols in 40..=120 {
            for blocks in 2..=6 {
                let w = corridor_width_for(cols, blocks);
                let bw = |w: usize| (cols - (blocks + 1) * w) / blocks;
                for other in 2..=6usize {
                    if (blocks + 1) * other < cols && bw(other) > 0 {
                        assert!(bw(w) >= bw(other), "cols={cols} blocks={blocks}");
                    }
                }
            }
        }
    }

    #[test]
    fn default_config_validates() {
        assert!(SimConfig::default().validated().is_ok());
    }

    #[test]
    fn out_of_range_config_rejected() {
        let cfg = SimConfig { num_agents: 10, ..SimConfig::default() };
        assert!(cfg.validated().is_err());
    }

    #[test]
    fn set_rejects_out_of_range_silently() {
        let mut store = ConfigStore::default();
        assert!(!store.set(ParamKey::NumAgents, ParamValue::Int(501)));
        assert!(!store.set(ParamKey::NumBlocks, ParamValue::Int(1)));
        assert!(!store.set(ParamKey::AssignedSeats, ParamValue::Int(1)));
        assert!(!store.set(ParamKey::CorridorWidth, ParamValue::Int(3)));
        assert_eq!(store.get(ParamKey::NumAgents), ParamValue::Int(200));
        assert_eq!(store.get(ParamKey::NumBlocks), ParamValue::Int(4));
    }

    #[test]
    fn float_keys_accept_ints() {
        let mut store = ConfigStore::default();
        assert!(store.set(ParamKey::BackPref, ParamValue::Int(4)));
        assert_eq!(store.get(ParamKey::BackPref), ParamValue::Float(4.0));
    }

    #[test]
    fn set_str_parses_and_validates() {
        let mut store = ConfigStore::default();
        assert!(store.set_str("num_agents", "300").unwrap());
        assert!(!store.set_str("NUM_AGENTS", "9000").unwrap());
        assert!(store.set_str("FEATURE_ASSIGNED_SEATS", "off").unwrap());
        assert!(store.set_str("BOGUS", "1").is_err());
        assert!(store.set_str("ROWS", "twenty").is_err());
        assert_eq!(store.config().num_agents, 300);
        assert!(!store.config().assigned_seats);
    }

    #[test]
    fn listeners_see_changes_and_corridor_width() {
        let mut store = ConfigStore::new(SimConfig { cols: 120, ..SimConfig::default() });
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |c| {
            sink.borrow_mut().push(c.key);
            Ok(())
        });

        let before = store.get(ParamKey::CorridorWidth);
        assert!(store.set(ParamKey::NumBlocks, ParamValue::Int(2)));
        let after = store.get(ParamKey::CorridorWidth);

        let keys = seen.borrow();
        assert_eq!(keys[0], ParamKey::NumBlocks);
        assert_eq!(keys.contains(&ParamKey::CorridorWidth), before != after);
    }

    #[test]
    fn unchanged_value_does_not_notify() {
        let mut store = ConfigStore::default();
        let count = Rc::new(RefCell::new(0));
        let c = Rc::clone(&count);
        store.subscribe(move |_| {
            *c.borrow_mut() += 1;
            Ok(())
        });
        assert!(store.set(ParamKey::Rows, ParamValue::Int(20)));
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn faulty_listeners_are_isolated() {
        let mut store = ConfigStore::default();
        let reached = Rc::new(RefCell::new(false));
        let r = Rc::clone(&reached);

        store.subscribe(|_| Err("listener refused".into()));
        store.subscribe(|_| panic!("listener blew up"));
        store.subscribe(move |_| {
            *r.borrow_mut() = true;
            Ok(())
        });

        assert!(store.set(ParamKey::Rows, ParamValue::Int(25)));
        assert!(*reached.borrow());
        assert_eq!(store.config().rows, 25);
    }

    #[test]
    fn unsubscribe_removes_listener() {
        let mut store = ConfigStore::default();
        let id = store.subscribe(|_| Ok(()));
        assert_eq!(store.listener_count(), 1);
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        assert_eq!(store.listener_count(), 0);
    }
}
