//! Per-unit action policies for the unit phase
//!
//! Units act in role order (builders, scouts, combat, support) and in id
//! order within a role. Each unit acts at most once; a failed action leaves
//! the unit where it stands.

use crate::ai::TurnContext;
use crate::board::hex::HexCoord;
use crate::board::{move_toward, step_away, step_toward};
use crate::catalog::{UnitRole, UnitType, HEAL_RANGE};
use crate::combat::{heal, resolve_attack, targets_in_range};
use crate::core::error::ActionError;
use crate::core::types::{ResourceKind, UnitId};
use crate::economy::build_structure;
use crate::state::{GameState, Unit};

const ROLE_ORDER: [UnitRole; 4] = [
    UnitRole::Builder,
    UnitRole::Scout,
    UnitRole::Combat,
    UnitRole::Support,
];

/// Units that get a turn this phase: owned, not yet moved, not the queen
pub fn ready_units(state: &GameState, ctx: &TurnContext, role: UnitRole) -> Vec<UnitId> {
    state
        .units_of(ctx.player)
        .filter(|u| !u.is_queen() && !u.has_moved && u.stats().role == role)
        .map(|u| u.id)
        .collect()
}

/// Run every eligible unit once, role by role
pub fn run_unit_phase(state: &GameState, ctx: &TurnContext) -> GameState {
    let mut current = state.clone();

    // Roster is fixed up front so units hatched or moved mid-phase act once
    let roster: Vec<(UnitRole, Vec<UnitId>)> = ROLE_ORDER
        .iter()
        .map(|&role| (role, ready_units(state, ctx, role)))
        .collect();

    for (role, ids) in roster {
        for id in ids {
            // Skip units lost earlier in the phase
            let Some(unit) = current.unit(id) else {
                continue;
            };
            if unit.has_moved {
                continue;
            }

            let outcome = match role {
                UnitRole::Builder => act_builder(&current, unit, ctx),
                UnitRole::Scout => act_scout(&current, unit, ctx),
                UnitRole::Combat => act_combat(&current, unit, ctx),
                UnitRole::Support => act_support(&current, unit),
                UnitRole::Queen => continue,
            };

            match outcome {
                Ok(next) => current = next,
                Err(err) => tracing::debug!("{} holds: {}", id, err),
            }
        }
    }

    current
}

/// Gather, build, or head for the nearest resource node
fn act_builder(state: &GameState, unit: &Unit, ctx: &TurnContext) -> Result<GameState, ActionError> {
    if let Some(node) = state.resource_at(unit.position) {
        if ctx.config.profile.building_enabled
            && node.kind == ResourceKind::Mineral
            && !unit.has_built
        {
            let result = build_structure(state, unit.id, node.id);
            if !result.is_rejected() {
                return Ok(result.state);
            }
        }
        // Passive gather: stay on the node for the rest of the turn
        return state.with_updated_unit(unit.id, |u| u.has_moved = true);
    }

    let target = nearest_free_node(state, unit, Some(ResourceKind::Mineral))
        .or_else(|| nearest_free_node(state, unit, None))
        .ok_or(ActionError::Unreachable)?;
    move_toward(state, unit.id, target)
}

/// Closest resource node no other unit is standing on
fn nearest_free_node(
    state: &GameState,
    unit: &Unit,
    kind: Option<ResourceKind>,
) -> Option<HexCoord> {
    state
        .resource_nodes()
        .filter(|n| kind.map_or(true, |k| n.kind == k))
        .filter(|n| state.unit_at(n.position).is_none())
        .min_by_key(|n| (n.position.distance(&unit.position), n.id))
        .map(|n| n.position)
}

/// Opportunistic attack, otherwise push toward the enemy queen
fn act_scout(state: &GameState, unit: &Unit, ctx: &TurnContext) -> Result<GameState, ActionError> {
    if let Some(&target) = targets_in_range(state, unit.id).first() {
        return resolve_attack(state, unit.id, target).map(|report| report.state);
    }

    let goal = ctx.enemy_queen.unwrap_or_else(|| state.board.center());
    move_toward(state, unit.id, goal)
}

/// Attack, retreat, advance, or hold formation around our queen
fn act_combat(state: &GameState, unit: &Unit, ctx: &TurnContext) -> Result<GameState, ActionError> {
    if let Some(target) = pick_target(state, unit) {
        return resolve_attack(state, unit.id, target).map(|report| report.state);
    }

    let strategy = &ctx.strategy;
    let tuning = &ctx.config.tuning;
    let home = state.queen_of(ctx.player).map(|q| q.position);
    let from_home = home.map(|h| unit.position.distance(&h));

    match (home, from_home) {
        (Some(home), Some(d)) if strategy.should_defend && d > tuning.retreat_distance => {
            move_toward(state, unit.id, home)
        }
        _ if strategy.should_attack => {
            let goal = ctx.enemy_queen.unwrap_or_else(|| state.board.center());
            move_toward(state, unit.id, goal)
        }
        (Some(home), Some(d)) if d <= tuning.formation_min_distance => {
            step_away(state, unit.id, home)
        }
        (Some(home), Some(d)) if d > tuning.formation_max_distance => {
            step_toward(state, unit.id, home)
        }
        _ => Ok(state.clone()),
    }
}

/// Enemy queen if in range, else the weakest target in range
fn pick_target(state: &GameState, unit: &Unit) -> Option<UnitId> {
    let targets: Vec<&Unit> = targets_in_range(state, unit.id)
        .into_iter()
        .filter_map(|id| state.unit(id))
        .collect();

    targets
        .iter()
        .find(|t| t.unit_type == UnitType::Queen)
        .or_else(|| targets.iter().min_by_key(|t| (t.health, t.id)))
        .map(|t| t.id)
}

/// Heal the most injured neighbour, otherwise tag along with the army
fn act_support(state: &GameState, unit: &Unit) -> Result<GameState, ActionError> {
    let patient = state
        .units_of(unit.owner)
        .filter(|ally| ally.id != unit.id && ally.is_injured())
        .filter(|ally| ally.position.distance(&unit.position) <= HEAL_RANGE)
        .min_by_key(|ally| (std::cmp::Reverse(ally.missing_health()), ally.id));

    if let Some(patient) = patient {
        return heal(state, unit.id, patient.id);
    }

    let escort = state
        .units_of(unit.owner)
        .find(|ally| ally.stats().role == UnitRole::Combat)
        .ok_or(ActionError::Unreachable)?;
    move_toward(state, unit.id, escort.position)
}
