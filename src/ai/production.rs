//! Queen production: what to lay and how many

use rand::Rng;

use crate::ai::selection::weighted_pick;
use crate::ai::TurnContext;
use crate::catalog::UnitType;
use crate::economy::{
    affordable_unit_types, can_afford_unit, free_spawning_hexes, has_enough_energy, lay_cost,
    lay_egg,
};
use crate::state::GameState;

/// Hatched units of `unit_type` the player owns; eggs do not count
fn owned_count(state: &GameState, ctx: &TurnContext, unit_type: UnitType) -> usize {
    state
        .units_of(ctx.player)
        .filter(|u| u.unit_type == unit_type)
        .count()
}

/// Choose the next unit type to lay
///
/// Priority: a first scout for vision, drones while expanding, a
/// combat-weighted draw under pressure, then the plain mix. `None` when
/// nothing is affordable.
pub fn pick_unit_type<R: Rng + ?Sized>(
    state: &GameState,
    ctx: &TurnContext,
    rng: &mut R,
) -> Option<UnitType> {
    let player = state.player(ctx.player)?;
    let affordable = |t: UnitType| can_afford_unit(player, t);
    let strategy = &ctx.strategy;

    if owned_count(state, ctx, UnitType::Scout) == 0 && affordable(UnitType::Scout) {
        return Some(UnitType::Scout);
    }

    if strategy.should_expand
        && owned_count(state, ctx, UnitType::Drone) < ctx.config.tuning.max_builders
        && affordable(UnitType::Drone)
    {
        return Some(UnitType::Drone);
    }

    let mix = &ctx.config.profile.unit_mix;

    if strategy.should_defend || strategy.should_attack {
        let army: Vec<(UnitType, u32)> = mix
            .iter()
            .filter(|e| !matches!(e.unit, UnitType::Drone | UnitType::Scout))
            .filter(|e| affordable(e.unit))
            .map(|e| {
                let weight = if e.unit.is_economic() {
                    e.weight
                } else {
                    e.weight.saturating_mul(2)
                };
                (e.unit, weight)
            })
            .collect();
        if let Some(pick) = weighted_pick(&army, rng) {
            return Some(pick);
        }
    }

    let general: Vec<(UnitType, u32)> = mix
        .iter()
        .filter(|e| affordable(e.unit))
        .map(|e| (e.unit, e.weight))
        .collect();
    weighted_pick(&general, rng).or_else(|| {
        if affordable(UnitType::Scout) {
            Some(UnitType::Scout)
        } else {
            affordable_unit_types(player).first().copied()
        }
    })
}

/// Lay eggs until energy, resources, or spawn hexes run out
///
/// Each egg costs the queen `lay_cost` energy, so the loop runs at most
/// `energy / lay_cost` times.
pub fn run_queen_phase<R: Rng + ?Sized>(
    state: &GameState,
    ctx: &TurnContext,
    rng: &mut R,
) -> GameState {
    let mut current = state.clone();
    let mut laid = 0;

    loop {
        let Some(queen) = current.queen_of(ctx.player) else {
            break;
        };
        let Some(player) = current.player(ctx.player) else {
            break;
        };

        if !has_enough_energy(queen, lay_cost(&current, queen))
            || affordable_unit_types(player).is_empty()
            || free_spawning_hexes(&current, queen).is_empty()
        {
            break;
        }

        let Some(unit_type) = pick_unit_type(&current, ctx, rng) else {
            break;
        };

        match lay_egg(&current, ctx.player, unit_type) {
            Ok((next, _)) => {
                current = next;
                laid += 1;
            }
            Err(err) => {
                tracing::debug!("{} stops laying: {}", ctx.player, err);
                break;
            }
        }
    }

    if laid > 0 {
        tracing::debug!("{} queen laid {} eggs", ctx.player, laid);
    }
    current
}
