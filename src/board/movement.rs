//! Movement range search and move execution
//!
//! Breadth-first over the six neighbors in their fixed order, so equal-length
//! paths always resolve the same way.

use std::collections::VecDeque;

use ahash::{AHashMap, AHashSet};

use crate::board::hex::{Board, HexCoord};
use crate::core::error::ActionError;
use crate::core::types::UnitId;
use crate::state::GameState;

/// A hex reachable this turn and the shortest path to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReachableHex {
    pub hex: HexCoord,
    /// Steps from the origin (exclusive) to `hex` (inclusive)
    pub path: Vec<HexCoord>,
}

/// Hexes reachable within `range` steps, in discovery order
///
/// Occupied hexes cannot be entered or passed through. The origin itself is
/// not part of the result. An origin off the board yields nothing.
pub fn movement_range(
    origin: HexCoord,
    range: u32,
    occupied: &AHashSet<HexCoord>,
    board: &Board,
) -> Vec<HexCoord> {
    search(origin, range, occupied, board)
        .into_iter()
        .map(|(hex, _)| hex)
        .collect()
}

/// Like [`movement_range`], with the path used to reach each hex
pub fn movement_range_with_paths(
    origin: HexCoord,
    range: u32,
    occupied: &AHashSet<HexCoord>,
    board: &Board,
) -> Vec<ReachableHex> {
    let discovered = search(origin, range, occupied, board);
    let came_from: AHashMap<HexCoord, HexCoord> = discovered.iter().copied().collect();

    discovered
        .iter()
        .map(|&(hex, _)| ReachableHex {
            hex,
            path: reconstruct_path(&came_from, origin, hex),
        })
        .collect()
}

/// Bounded BFS returning `(hex, parent)` pairs in discovery order
fn search(
    origin: HexCoord,
    range: u32,
    occupied: &AHashSet<HexCoord>,
    board: &Board,
) -> Vec<(HexCoord, HexCoord)> {
    if !board.contains(origin) {
        return Vec::new();
    }

    let mut discovered = Vec::new();
    let mut visited: AHashSet<HexCoord> = AHashSet::new();
    let mut frontier = VecDeque::new();

    visited.insert(origin);
    frontier.push_back((origin, 0u32));

    while let Some((current, steps)) = frontier.pop_front() {
        if steps == range {
            continue;
        }

        for neighbor in current.neighbors() {
            if !board.contains(neighbor) || occupied.contains(&neighbor) {
                continue;
            }
            if !visited.insert(neighbor) {
                continue;
            }

            discovered.push((neighbor, current));
            frontier.push_back((neighbor, steps + 1));
        }
    }

    discovered
}

/// Walk parents back to the origin
fn reconstruct_path(
    came_from: &AHashMap<HexCoord, HexCoord>,
    origin: HexCoord,
    mut current: HexCoord,
) -> Vec<HexCoord> {
    let mut path = vec![current];
    while let Some(&prev) = came_from.get(&current) {
        if prev == origin {
            break;
        }
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}

/// Hexes a unit could move to right now, honouring its flags
pub fn reachable_for(state: &GameState, unit_id: UnitId) -> Result<Vec<HexCoord>, ActionError> {
    reachable_within(state, unit_id, None)
}

fn reachable_within(
    state: &GameState,
    unit_id: UnitId,
    cap: Option<u32>,
) -> Result<Vec<HexCoord>, ActionError> {
    let unit = state
        .unit(unit_id)
        .ok_or(ActionError::UnitNotFound(unit_id))?;

    if unit.has_moved {
        return Err(ActionError::AlreadyMoved(unit_id));
    }
    if unit.burrowed || (unit.has_attacked && unit.stats().move_or_attack) {
        return Err(ActionError::CannotAct(unit_id));
    }

    let range = match cap {
        Some(cap) => unit.stats().movement.min(cap),
        None => unit.stats().movement,
    };
    Ok(movement_range(
        unit.position,
        range,
        &state.occupied_hexes(),
        &state.board,
    ))
}

/// Move a unit to `dest`, validating range and occupancy
///
/// Sets the unit's position and its movement flag.
pub fn execute_move(
    state: &GameState,
    unit_id: UnitId,
    dest: HexCoord,
) -> Result<GameState, ActionError> {
    let reachable = reachable_for(state, unit_id)?;
    if !reachable.contains(&dest) {
        return Err(ActionError::Unreachable);
    }

    let next = state.with_updated_unit(unit_id, |u| {
        u.position = dest;
        u.has_moved = true;
    })?;

    tracing::debug!("{} moved to ({}, {})", unit_id, dest.q, dest.r);
    Ok(next)
}

/// Move to the reachable hex closest to `target`
///
/// Fails with `Unreachable` if no reachable hex is closer than where the unit
/// already stands.
pub fn move_toward(
    state: &GameState,
    unit_id: UnitId,
    target: HexCoord,
) -> Result<GameState, ActionError> {
    approach(state, unit_id, target, None)
}

/// Take a single step closer to `target`
pub fn step_toward(
    state: &GameState,
    unit_id: UnitId,
    target: HexCoord,
) -> Result<GameState, ActionError> {
    approach(state, unit_id, target, Some(1))
}

/// Take a single step farther from `target`
pub fn step_away(
    state: &GameState,
    unit_id: UnitId,
    target: HexCoord,
) -> Result<GameState, ActionError> {
    let current = current_distance(state, unit_id, target)?;
    let candidates = reachable_within(state, unit_id, Some(1))?;

    let best = first_best(&candidates, |hex| hex.distance(&target) as i64)
        .filter(|hex| hex.distance(&target) > current)
        .ok_or(ActionError::Unreachable)?;

    execute_move(state, unit_id, best)
}

fn approach(
    state: &GameState,
    unit_id: UnitId,
    target: HexCoord,
    cap: Option<u32>,
) -> Result<GameState, ActionError> {
    let current = current_distance(state, unit_id, target)?;
    let candidates = reachable_within(state, unit_id, cap)?;

    let best = first_best(&candidates, |hex| -(hex.distance(&target) as i64))
        .filter(|hex| hex.distance(&target) < current)
        .ok_or(ActionError::Unreachable)?;

    execute_move(state, unit_id, best)
}

fn current_distance(
    state: &GameState,
    unit_id: UnitId,
    target: HexCoord,
) -> Result<u32, ActionError> {
    state
        .unit(unit_id)
        .map(|u| u.position.distance(&target))
        .ok_or(ActionError::UnitNotFound(unit_id))
}

/// Highest-scoring hex; the earliest one wins ties
fn first_best(candidates: &[HexCoord], score: impl Fn(&HexCoord) -> i64) -> Option<HexCoord> {
    let mut best: Option<(HexCoord, i64)> = None;
    for hex in candidates {
        let s = score(hex);
        if best.map_or(true, |(_, top)| s > top) {
            best = Some((*hex, s));
        }
    }
    best.map(|(hex, _)| hex)
}
