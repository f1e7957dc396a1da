//! Attack eligibility and damage application
//!
//! Damage is `attack - defense`, floored at one point. Upgrades and burrowing
//! add flat points; there are no multipliers.

use crate::catalog::{
    UpgradeId, BURROW_DEFENSE_BONUS, CANNIBALISM_BONUS, HEAL_RANGE, MIN_DAMAGE,
    UPGRADE_ATTACK_PER_TIER, UPGRADE_DEFENSE_PER_TIER,
};
use crate::core::error::ActionError;
use crate::core::types::{Resources, UnitId};
use crate::state::{GameState, Unit};

/// Outcome of a successful attack
#[derive(Debug, Clone)]
pub struct AttackReport {
    pub state: GameState,
    pub damage: u32,
    /// Secondary hits as (unit, damage dealt)
    pub splash_hits: Vec<(UnitId, u32)>,
    pub killed: Vec<UnitId>,
    /// Resources granted by cannibalism, if it triggered
    pub bonus: Option<Resources>,
}

impl AttackReport {
    pub fn killed_target(&self, target: UnitId) -> bool {
        self.killed.contains(&target)
    }
}

/// Attack after upgrades
pub fn effective_attack(state: &GameState, unit: &Unit) -> u32 {
    let upgrade = if unit.unit_type.is_melee() {
        UpgradeId::MeleeAttack
    } else {
        UpgradeId::RangedAttack
    };
    let tier = upgrade_tier(state, unit, upgrade);
    unit.stats().attack + tier * UPGRADE_ATTACK_PER_TIER
}

/// Defense after upgrades and burrowing
pub fn effective_defense(state: &GameState, unit: &Unit) -> u32 {
    let tier = upgrade_tier(state, unit, UpgradeId::Defense);
    let burrow = if unit.burrowed { BURROW_DEFENSE_BONUS } else { 0 };
    unit.stats().defense + tier * UPGRADE_DEFENSE_PER_TIER + burrow
}

fn upgrade_tier(state: &GameState, unit: &Unit, upgrade: UpgradeId) -> u32 {
    state
        .player(unit.owner)
        .map(|p| p.upgrade_tier(upgrade) as u32)
        .unwrap_or(0)
}

/// `max(1, attack - defense)`
pub fn compute_damage(attack: u32, defense: u32) -> u32 {
    attack.saturating_sub(defense).max(MIN_DAMAGE)
}

/// Check whether `attacker` may attack `defender` right now
pub fn can_attack(
    state: &GameState,
    attacker_id: UnitId,
    defender_id: UnitId,
) -> Result<(), ActionError> {
    let attacker = state
        .unit(attacker_id)
        .ok_or(ActionError::UnitNotFound(attacker_id))?;
    let defender = state
        .unit(defender_id)
        .ok_or(ActionError::UnitNotFound(defender_id))?;

    if attacker.has_attacked {
        return Err(ActionError::AlreadyAttacked(attacker_id));
    }
    if attacker.owner == defender.owner {
        return Err(ActionError::FriendlyTarget);
    }
    if attacker.stats().move_or_attack && attacker.has_moved {
        return Err(ActionError::AlreadyMoved(attacker_id));
    }

    let (min_range, max_range) = attacker.unit_type.attack_band();
    let distance = attacker.position.distance(&defender.position);
    if distance < min_range || distance > max_range {
        return Err(ActionError::OutOfRange { distance });
    }

    Ok(())
}

/// Enemy units the attacker could hit this turn, in id order
pub fn targets_in_range(state: &GameState, attacker_id: UnitId) -> Vec<UnitId> {
    let Some(attacker) = state.unit(attacker_id) else {
        return Vec::new();
    };

    state
        .enemy_units_of(attacker.owner)
        .filter(|enemy| can_attack(state, attacker_id, enemy.id).is_ok())
        .map(|enemy| enemy.id)
        .collect()
}

/// Resolve one attack, returning the new snapshot and what happened
pub fn resolve_attack(
    state: &GameState,
    attacker_id: UnitId,
    defender_id: UnitId,
) -> Result<AttackReport, ActionError> {
    can_attack(state, attacker_id, defender_id)?;

    let mut next = state.clone();
    let attacker = next.unit_mut(attacker_id)?.clone();
    let defender = next.unit_mut(defender_id)?.clone();

    let damage = compute_damage(
        effective_attack(&next, &attacker),
        effective_defense(&next, &defender),
    );
    apply_damage(&mut next, defender_id, damage)?;

    let mut splash_hits = Vec::new();
    if let Some(splash) = attacker.stats().splash {
        for hex in defender.position.hexes_in_range(splash.radius) {
            if hex == defender.position {
                continue;
            }
            let Some(hit) = next.unit_at(hex).map(|u| u.id) else {
                continue;
            };
            if hit == attacker_id {
                continue;
            }
            apply_damage(&mut next, hit, splash.damage)?;
            splash_hits.push((hit, splash.damage));
        }
    }

    let killed = remove_dead(&mut next);

    let mut bonus = None;
    let killed_enemy = killed
        .iter()
        .any(|id| state.unit(*id).is_some_and(|u| u.owner != attacker.owner));
    let cannibal = next
        .player(attacker.owner)
        .is_some_and(|p| p.has_upgrade(UpgradeId::Cannibalism));
    if attacker.unit_type.is_melee() && cannibal && killed_enemy {
        next.player_mut(attacker.owner)?.resources += CANNIBALISM_BONUS;
        bonus = Some(CANNIBALISM_BONUS);
    }

    if let Ok(unit) = next.unit_mut(attacker_id) {
        unit.has_attacked = true;
        if unit.stats().move_or_attack {
            unit.has_moved = true;
        }
    }

    tracing::debug!(
        "{} hit {} for {} ({} splash, {} killed)",
        attacker_id,
        defender_id,
        damage,
        splash_hits.len(),
        killed.len()
    );

    Ok(AttackReport {
        state: next,
        damage,
        splash_hits,
        killed,
        bonus,
    })
}

fn apply_damage(state: &mut GameState, id: UnitId, damage: u32) -> Result<(), ActionError> {
    let unit = state.unit_mut(id)?;
    unit.health = unit.health.saturating_sub(damage);
    Ok(())
}

/// Remove every unit at zero health, returning their ids
fn remove_dead(state: &mut GameState) -> Vec<UnitId> {
    let dead: Vec<UnitId> = state
        .units()
        .filter(|u| u.health == 0)
        .map(|u| u.id)
        .collect();
    for id in &dead {
        state.remove_unit(*id);
    }
    dead
}

/// Restore health to an adjacent injured ally
///
/// Healing is the healer's action for the turn.
pub fn heal(state: &GameState, healer_id: UnitId, target_id: UnitId) -> Result<GameState, ActionError> {
    let healer = state
        .unit(healer_id)
        .ok_or(ActionError::UnitNotFound(healer_id))?;
    let target = state
        .unit(target_id)
        .ok_or(ActionError::UnitNotFound(target_id))?;

    let amount = healer.stats().heal;
    if amount == 0 {
        return Err(ActionError::MissingAbility(healer_id));
    }
    if healer.has_attacked || healer.has_moved {
        return Err(ActionError::CannotAct(healer_id));
    }
    if healer.owner != target.owner || healer_id == target_id {
        return Err(ActionError::CannotAct(healer_id));
    }
    let distance = healer.position.distance(&target.position);
    if distance > HEAL_RANGE {
        return Err(ActionError::OutOfRange { distance });
    }

    let mut next = state.clone();
    let patient = next.unit_mut(target_id)?;
    patient.health = (patient.health + amount).min(patient.max_health());
    let healer = next.unit_mut(healer_id)?;
    healer.has_attacked = true;
    healer.has_moved = true;

    tracing::debug!("{} healed {} for up to {}", healer_id, target_id, amount);
    Ok(next)
}
