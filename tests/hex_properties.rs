//! Property tests for board geometry and resource bookkeeping

use ahash::AHashSet;
use proptest::prelude::*;

use hexhive::board::{movement_range, movement_range_with_paths, Board, HexCoord};
use hexhive::catalog::{UnitType, UpgradeId};
use hexhive::core::types::{PlayerId, Resources};
use hexhive::economy::{can_afford, deduct_cost, lay_egg, purchase_upgrade};
use hexhive::state::GameStateBuilder;

fn hex() -> impl Strategy<Value = HexCoord> {
    (-20i32..20, -20i32..20).prop_map(|(q, r)| HexCoord::new(q, r))
}

fn resources() -> impl Strategy<Value = Resources> {
    (0u32..300, 0u32..300).prop_map(|(f, m)| Resources::new(f, m))
}

proptest! {
    #[test]
    fn distance_to_self_is_zero(a in hex()) {
        prop_assert_eq!(a.distance(&a), 0);
    }

    #[test]
    fn distance_is_symmetric(a in hex(), b in hex()) {
        prop_assert_eq!(a.distance(&b), b.distance(&a));
    }

    #[test]
    fn neighbors_are_one_step(a in hex()) {
        for n in a.neighbors() {
            prop_assert_eq!(a.distance(&n), 1);
        }
    }

    #[test]
    fn triangle_inequality(a in hex(), b in hex(), c in hex()) {
        prop_assert!(a.distance(&c) <= a.distance(&b) + b.distance(&c));
    }

    #[test]
    fn movement_stays_in_range_and_off_blockers(
        origin in (-3i32..3, -3i32..3).prop_map(|(q, r)| HexCoord::new(q, r)),
        range in 0u32..4,
        blocked in proptest::collection::vec(hex(), 0..12),
    ) {
        let board = Board::new(6);
        let occupied: AHashSet<HexCoord> = blocked.into_iter().filter(|h| *h != origin).collect();

        for reach in movement_range_with_paths(origin, range, &occupied, &board) {
            prop_assert!(reach.path.len() as u32 <= range);
            prop_assert_eq!(reach.path.last().copied(), Some(reach.hex));
            prop_assert!(board.contains(reach.hex));
            for step in &reach.path {
                prop_assert!(!occupied.contains(step));
            }
        }
        prop_assert!(!movement_range(origin, range, &occupied, &board).contains(&origin));
    }

    #[test]
    fn deduct_after_check_never_underflows(have in resources(), cost in resources()) {
        if can_afford(&cost, &have) {
            let left = deduct_cost(have, &cost);
            prop_assert_eq!(left + cost, have);
        }
    }

    #[test]
    fn economy_actions_keep_stockpile_consistent(stock in resources(), pick in 0usize..9) {
        let me = PlayerId(0);
        let state = GameStateBuilder::new(6)
            .player(me, stock)
            .queen(me, HexCoord::ORIGIN)
            .build();
        let unit_type = UnitType::producible().nth(pick).unwrap();

        match lay_egg(&state, me, unit_type) {
            Ok((next, _)) => {
                let after = next.player(me).unwrap().resources;
                prop_assert_eq!(after + unit_type.stats().cost, stock);
            }
            Err(_) => prop_assert_eq!(&state.player(me).unwrap().resources, &stock),
        }

        for upgrade in UpgradeId::PRIORITY {
            if let Ok(next) = purchase_upgrade(&state, me, upgrade) {
                let after = next.player(me).unwrap().resources;
                let cost = upgrade.stats().cost_for(0).unwrap();
                prop_assert_eq!(after + cost, stock);
            }
        }
    }
}
