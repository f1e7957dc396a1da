//! Egg laying and hatching

use crate::board::hex::HexCoord;
use crate::catalog::{queen_tier, UnitType};
use crate::core::error::ActionError;
use crate::core::types::{EggId, PlayerId, Turn, UnitId};
use crate::economy::costs::{can_afford_unit, deduct_cost};
use crate::state::{Egg, GameState, Unit};

/// Energy a queen spends per egg, set by her owner's tier
pub fn lay_cost(state: &GameState, queen: &Unit) -> u32 {
    let tier = state.player(queen.owner).map(|p| p.queen_tier).unwrap_or(1);
    queen_tier(tier).lay_cost
}

pub fn has_enough_energy(queen: &Unit, cost: u32) -> bool {
    queen.energy() >= cost
}

/// Place a new egg at `pos`
///
/// The countdown starts at the catalog hatch time. The id comes from the
/// snapshot's session counter.
pub fn create_egg(
    state: &GameState,
    unit_type: UnitType,
    owner: PlayerId,
    pos: HexCoord,
    turn: Turn,
) -> Result<(GameState, EggId), ActionError> {
    if !state.board.contains(pos) || state.is_occupied(pos) {
        return Err(ActionError::NoFreeHex);
    }

    let mut next = state.clone();
    let id = next.alloc_egg_id();
    next.put_egg(Egg {
        id,
        unit_type,
        owner,
        position: pos,
        turns_remaining: unit_type.stats().hatch_turns,
        laid_on_turn: turn,
    });
    Ok((next, id))
}

/// Hexes around the queen eligible for eggs, capped by tier, in neighbor order
pub fn spawning_hexes(state: &GameState, queen: &Unit, spawn_count: usize) -> Vec<HexCoord> {
    queen
        .position
        .neighbors()
        .into_iter()
        .take(spawn_count)
        .filter(|hex| state.board.contains(*hex))
        .collect()
}

/// Spawning hexes not currently holding a unit or egg
pub fn free_spawning_hexes(state: &GameState, queen: &Unit) -> Vec<HexCoord> {
    let tier = state.player(queen.owner).map(|p| p.queen_tier).unwrap_or(1);
    spawning_hexes(state, queen, queen_tier(tier).spawn_count)
        .into_iter()
        .filter(|hex| !state.is_occupied(*hex))
        .collect()
}

/// Have a player's queen lay one egg of `unit_type` in her first free spawn hex
///
/// Spends queen energy and the unit's resource cost.
pub fn lay_egg(
    state: &GameState,
    player: PlayerId,
    unit_type: UnitType,
) -> Result<(GameState, EggId), ActionError> {
    let queen = state
        .queen_of(player)
        .ok_or(ActionError::QueenNotFound(player))?;
    let owner = state
        .player(player)
        .ok_or(ActionError::PlayerNotFound(player))?;

    let cost = lay_cost(state, queen);
    if !has_enough_energy(queen, cost) {
        return Err(ActionError::InsufficientEnergy {
            needed: cost,
            available: queen.energy(),
        });
    }
    if !can_afford_unit(owner, unit_type) {
        return Err(ActionError::InsufficientResources);
    }
    let hex = free_spawning_hexes(state, queen)
        .first()
        .copied()
        .ok_or(ActionError::NoFreeHex)?;

    let queen_id = queen.id;
    let (mut next, egg_id) = create_egg(state, unit_type, player, hex, state.turn)?;
    let queen = next.unit_mut(queen_id)?;
    queen.energy = Some(queen.energy() - cost);
    let owner = next.player_mut(player)?;
    owner.resources = deduct_cost(owner.resources, &unit_type.stats().cost);

    tracing::debug!(
        "{} laid {:?} egg {} at ({}, {})",
        player,
        unit_type,
        egg_id,
        hex.q,
        hex.r
    );
    Ok((next, egg_id))
}

/// Replace a ready egg with a fresh unit of its type at the same hex
pub fn hatch_egg(state: &GameState, egg_id: EggId) -> Result<(GameState, UnitId), ActionError> {
    let egg = state.egg(egg_id).ok_or(ActionError::EggNotFound(egg_id))?;
    if !egg.is_ready() {
        return Err(ActionError::EggNotReady(egg_id));
    }

    let mut next = state.clone();
    let egg = next
        .remove_egg(egg_id)
        .ok_or(ActionError::EggNotFound(egg_id))?;
    let unit_id = next.alloc_unit_id();
    next.put_unit(Unit::new(unit_id, egg.unit_type, egg.owner, egg.position));

    tracing::debug!("{} hatched into {:?} {}", egg_id, egg.unit_type, unit_id);
    Ok((next, unit_id))
}
