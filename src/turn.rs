//! Start-of-turn upkeep
//!
//! Run once at the start of each player's turn, before that player acts.

use crate::catalog::{queen_tier, UnitType, ANTHILL_INCOME, GATHER_RATE};
use crate::core::types::{PlayerId, Resources};
use crate::state::GameState;

/// Income a player collects at the start of their turn
///
/// Queen tier income (while the queen lives) + completed anthills + drones
/// standing on resource nodes.
pub fn income_for(state: &GameState, player: PlayerId) -> Resources {
    let Some(owner) = state.player(player) else {
        return Resources::ZERO;
    };

    let mut income = Resources::ZERO;
    if state.queen_of(player).is_some() {
        income += queen_tier(owner.queen_tier).income;
    }

    for structure in state.structures_of(player).filter(|s| s.is_complete()) {
        income += Resources::of(structure.resource_kind, ANTHILL_INCOME);
    }

    for drone in state
        .units_of(player)
        .filter(|u| u.unit_type == UnitType::Drone)
    {
        if let Some(node) = state.resource_at(drone.position) {
            income += Resources::of(node.kind, GATHER_RATE);
        }
    }

    income
}

/// Prepare a player's pieces for their turn
///
/// Clears unit flags, counts eggs down, regenerates queen energy and credits
/// income.
pub fn begin_turn(state: &GameState, player: PlayerId) -> GameState {
    let income = income_for(state, player);
    let tier = state.player(player).map(|p| p.queen_tier).unwrap_or(1);
    let tier_stats = queen_tier(tier);

    let mut next = state.clone();

    for unit in next.units_mut().filter(|u| u.owner == player) {
        unit.reset_turn_flags();
        if let Some(energy) = unit.energy {
            unit.energy = Some((energy + tier_stats.energy_regen).min(tier_stats.max_energy));
        }
    }

    for egg in next.eggs_mut().filter(|e| e.owner == player) {
        egg.turns_remaining = egg.turns_remaining.saturating_sub(1);
    }

    if let Ok(owner) = next.player_mut(player) {
        owner.resources += income;
    }

    tracing::debug!(
        "{} begins turn {} with +{} food, +{} minerals",
        player,
        next.turn,
        income.food,
        income.minerals
    );
    next
}

/// Advance the shared turn counter
pub fn advance_turn(state: &GameState) -> GameState {
    state.with_turn(state.turn + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::hex::HexCoord;
    use crate::core::types::ResourceKind;
    use crate::state::GameStateBuilder;

    const ME: PlayerId = PlayerId(0);
    const FOE: PlayerId = PlayerId(1);

    #[test]
    fn test_income_sources() {
        let node = HexCoord::new(2, 0);
        let state = GameStateBuilder::new(5)
            .player(ME, Resources::ZERO)
            .queen(ME, HexCoord::ORIGIN)
            .resource(ResourceKind::Food, node)
            .unit(UnitType::Drone, ME, node)
            .structure(ME, HexCoord::new(-2, 0), ResourceKind::Mineral, 2)
            .structure(ME, HexCoord::new(0, 2), ResourceKind::Mineral, 1)
            .build();

        let tier = queen_tier(1).income;
        let expected = tier + Resources::new(GATHER_RATE, ANTHILL_INCOME);
        assert_eq!(income_for(&state, ME), expected);
    }

    #[test]
    fn test_no_queen_no_tier_income() {
        let state = GameStateBuilder::new(5)
            .player(ME, Resources::ZERO)
            .build();
        assert_eq!(income_for(&state, ME), Resources::ZERO);
    }

    #[test]
    fn test_begin_turn_resets_only_own_units() {
        let state = GameStateBuilder::new(5)
            .player(ME, Resources::ZERO)
            .player(FOE, Resources::ZERO)
            .unit_with(UnitType::Soldier, ME, HexCoord::new(1, 0), |u| u.has_moved = true)
            .unit_with(UnitType::Soldier, FOE, HexCoord::new(2, 0), |u| u.has_moved = true)
            .build();

        let next = begin_turn(&state, ME);
        assert!(!next.unit_at(HexCoord::new(1, 0)).unwrap().has_moved);
        assert!(next.unit_at(HexCoord::new(2, 0)).unwrap().has_moved);
    }

    #[test]
    fn test_begin_turn_counts_eggs_down() {
        let state = GameStateBuilder::new(5)
            .player(ME, Resources::ZERO)
            .player(FOE, Resources::ZERO)
            .egg(UnitType::Soldier, ME, HexCoord::new(1, 0), 1)
            .egg(UnitType::Soldier, FOE, HexCoord::new(2, 0), 1)
            .build();

        let next = begin_turn(&state, ME);
        assert_eq!(next.egg_at(HexCoord::new(1, 0)).unwrap().turns_remaining, 0);
        assert_eq!(next.egg_at(HexCoord::new(2, 0)).unwrap().turns_remaining, 1);

        // Never below zero
        let again = begin_turn(&next, ME);
        assert_eq!(again.egg_at(HexCoord::new(1, 0)).unwrap().turns_remaining, 0);
    }

    #[test]
    fn test_queen_energy_regen_capped() {
        let state = GameStateBuilder::new(5)
            .player(ME, Resources::ZERO)
            .unit_with(UnitType::Queen, ME, HexCoord::ORIGIN, |q| q.energy = Some(50))
            .build();
        let next = begin_turn(&state, ME);
        assert_eq!(
            next.queen_of(ME).unwrap().energy,
            Some(queen_tier(1).max_energy)
        );
    }

    #[test]
    fn test_advance_turn() {
        let state = GameStateBuilder::new(3).turn(9).build();
        assert_eq!(advance_turn(&state).turn, 10);
    }
}
