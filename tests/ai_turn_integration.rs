//! AI turn integration tests
//!
//! Drive whole turns through the public entry points and check the
//! guarantees callers rely on: phase ordering, occupancy, determinism and
//! the worked scenarios.

use std::collections::HashSet;

use hexhive::ai::{take_turn, AiConfig, AiController, Difficulty, NoPacing, TurnAi};
use hexhive::board::HexCoord;
use hexhive::catalog::{queen_tier, UnitType, UpgradeId};
use hexhive::combat::resolve_attack;
use hexhive::core::types::{PlayerId, ResourceKind, Resources};
use hexhive::state::{GameState, GameStateBuilder};
use hexhive::turn::{advance_turn, begin_turn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const ME: PlayerId = PlayerId(0);
const FOE: PlayerId = PlayerId(1);

fn run(state: &GameState, difficulty: Difficulty, seed: u64) -> GameState {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    take_turn(state, ME, &AiConfig::new(difficulty), &mut rng, &mut NoPacing)
}

/// Every unit and egg on its own hex
fn assert_exclusive_occupancy(state: &GameState) {
    let mut seen = HashSet::new();
    for pos in state
        .units()
        .map(|u| u.position)
        .chain(state.eggs().map(|e| e.position))
    {
        assert!(seen.insert(pos), "two pieces share ({}, {})", pos.q, pos.r);
    }
}

/// Play `rounds` full rounds of AI vs AI from a skirmish start
fn play(rounds: u32, seed: u64) -> GameState {
    let mut players = [
        (ME, AiController::with_seed(AiConfig::new(Difficulty::Hard), seed)),
        (FOE, AiController::with_seed(AiConfig::new(Difficulty::Medium), seed + 1)),
    ];
    let mut state = GameStateBuilder::skirmish(7);

    for _ in 0..rounds {
        for (player, ai) in players.iter_mut() {
            if state.is_eliminated(*player) {
                continue;
            }
            state = begin_turn(&state, *player);
            state = ai.take_turn(&state, *player);
            assert_exclusive_occupancy(&state);
        }
        state = advance_turn(&state);
    }
    state
}

/// Queen with 40 energy, two free spawn hexes, stock for two scouts: two scout eggs
#[test]
fn test_scenario_a_lay_loop() {
    let state = GameStateBuilder::new(8)
        .player(ME, Resources::new(30, 10))
        .player(FOE, Resources::ZERO)
        .unit_with(UnitType::Queen, ME, HexCoord::new(0, -6), |q| q.energy = Some(40))
        .queen(FOE, HexCoord::new(0, 6))
        .build();
    assert_eq!(queen_tier(1).lay_cost, 20);

    let next = run(&state, Difficulty::Medium, 1);

    assert_eq!(next.eggs_of(ME).count(), 2);
    assert!(next.eggs_of(ME).all(|e| e.unit_type == UnitType::Scout));
    assert_eq!(next.queen_of(ME).unwrap().energy, Some(0));
    assert_eq!(next.player(ME).unwrap().resources, Resources::ZERO);
}

/// Attacking soldier five hexes from the enemy queen closes to three
#[test]
fn test_scenario_b_advance() {
    let front = HexCoord::new(0, 0);
    let enemy_queen = HexCoord::new(0, 5);
    let mut builder = GameStateBuilder::new(8)
        .turn(40)
        .player(ME, Resources::ZERO)
        .player(FOE, Resources::ZERO)
        .queen(ME, HexCoord::new(0, -7))
        .queen(FOE, enemy_queen)
        .unit(UnitType::Soldier, ME, front);
    let soldier = builder.last_unit_id().unwrap();
    for q in 1..5 {
        builder = builder.unit(UnitType::Soldier, ME, HexCoord::new(q, -6));
    }
    let state = builder.build();

    let next = run(&state, Difficulty::Medium, 2);

    let unit = next.unit(soldier).unwrap();
    assert_eq!(unit.position.distance(&enemy_queen), 3);
    assert!(unit.has_moved);
    assert!(!unit.has_attacked);
}

/// A drone on a bare mineral node raises exactly one anthill at progress 1
#[test]
fn test_scenario_c_first_build() {
    let node = HexCoord::new(2, -2);
    let state = GameStateBuilder::new(8)
        .player(ME, Resources::ZERO)
        .player(FOE, Resources::ZERO)
        .queen(ME, HexCoord::new(0, -6))
        .queen(FOE, HexCoord::new(0, 6))
        .resource(ResourceKind::Mineral, node)
        .unit(UnitType::Drone, ME, node)
        .build();

    let next = run(&state, Difficulty::Medium, 3);

    assert_eq!(next.structures().count(), 1);
    let anthill = next.structure_at(node).unwrap();
    assert_eq!(anthill.build_progress, 1);
    assert_eq!(anthill.owner, ME);
}

/// Attack 12 against defense 1 deals 11 and kills a 10 health scout
#[test]
fn test_scenario_d_lethal_hit() {
    let state = GameStateBuilder::new(6)
        .player(ME, Resources::ZERO)
        .player(FOE, Resources::ZERO)
        .unit(UnitType::Juggernaut, ME, HexCoord::ORIGIN)
        .unit(UnitType::Scout, FOE, HexCoord::new(1, 0))
        .build();
    let attacker = state.unit_at(HexCoord::ORIGIN).unwrap().id;
    let scout = state.unit_at(HexCoord::new(1, 0)).unwrap().id;

    let report = resolve_attack(&state, attacker, scout).unwrap();
    assert_eq!(report.damage, 11);
    assert!(report.killed_target(scout));
    assert!(report.state.unit(scout).is_none());

    // The engine finds the same kill on its own
    let next = run(&state, Difficulty::Medium, 4);
    assert!(next.unit(scout).is_none());
    assert!(next.unit(attacker).unwrap().has_attacked);
}

#[test]
fn test_ready_egg_hatches_same_turn() {
    let pos = HexCoord::new(3, -3);
    let state = GameStateBuilder::new(8)
        .player(ME, Resources::ZERO)
        .player(FOE, Resources::ZERO)
        .queen(ME, HexCoord::new(0, -6))
        .queen(FOE, HexCoord::new(0, 6))
        .egg(UnitType::Major, ME, pos, 0)
        .build();
    let egg = state.egg_at(pos).unwrap().id;

    let next = run(&state, Difficulty::Easy, 5);

    assert!(next.egg(egg).is_none());
    let majors: Vec<_> = next
        .units_of(ME)
        .filter(|u| u.unit_type == UnitType::Major)
        .collect();
    assert_eq!(majors.len(), 1);
}

#[test]
fn test_lay_loop_bounded_by_spawn_hexes() {
    // Tier 2: four spawn hexes, 90 energy at 18 per egg
    let state = GameStateBuilder::new(8)
        .player_at_tier(ME, Resources::new(1000, 1000), 2)
        .player(FOE, Resources::ZERO)
        .queen(ME, HexCoord::new(0, -4))
        .queen(FOE, HexCoord::new(0, 6))
        .build();
    let tier = queen_tier(2);

    let next = run(&state, Difficulty::Hard, 6);

    assert_eq!(next.eggs_of(ME).count(), tier.spawn_count);
    assert_eq!(
        next.queen_of(ME).unwrap().energy,
        Some(tier.max_energy - tier.spawn_count as u32 * tier.lay_cost)
    );
}

#[test]
fn test_hard_buys_upgrades_when_rich() {
    let mut config = AiConfig::new(Difficulty::Hard);
    config.profile.upgrade_frequency = 1.0;
    let state = GameStateBuilder::new(8)
        .player(ME, Resources::new(1000, 1000))
        .player(FOE, Resources::ZERO)
        .queen(ME, HexCoord::new(0, -6))
        .queen(FOE, HexCoord::new(0, 6))
        .build();

    let mut ai = AiController::with_seed(config, 7);
    let next = ai.take_turn(&state, ME);
    assert_eq!(
        next.player(ME).unwrap().upgrade_tier(UpgradeId::MeleeAttack),
        1
    );
}

#[test]
fn test_same_seed_same_game() {
    assert_eq!(play(12, 99), play(12, 99));
}

#[test]
fn test_long_match_keeps_invariants() {
    let state = play(40, 2024);

    // Colonies grow past the starting queen and two drones
    assert!(state.units().count() + state.eggs().count() > 6);
    for unit in state.units() {
        assert!(unit.health > 0 && unit.health <= unit.max_health());
        if let Some(energy) = unit.energy {
            let tier = state.player(unit.owner).map(|p| p.queen_tier).unwrap_or(1);
            assert!(energy <= queen_tier(tier).max_energy);
        }
    }
}

#[test]
fn test_snapshot_survives_json() {
    let state = play(5, 3);
    let json = serde_json::to_string(&state).unwrap();
    let back: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);
}
