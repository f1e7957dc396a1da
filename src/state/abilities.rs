//! Unit abilities that change a unit's own state

use crate::core::error::ActionError;
use crate::core::types::UnitId;
use crate::state::store::GameState;

/// Burrow or surface a burrow-capable unit
///
/// Toggling uses the unit's movement for the turn. Burrowed units cannot move
/// and gain a defense bonus in combat.
pub fn toggle_burrow(state: &GameState, unit_id: UnitId) -> Result<GameState, ActionError> {
    let unit = state
        .unit(unit_id)
        .ok_or(ActionError::UnitNotFound(unit_id))?;

    if !unit.stats().can_burrow {
        return Err(ActionError::MissingAbility(unit_id));
    }
    if unit.has_moved {
        return Err(ActionError::AlreadyMoved(unit_id));
    }

    let next = state.with_updated_unit(unit_id, |u| {
        u.burrowed = !u.burrowed;
        u.has_moved = true;
    })?;

    tracing::debug!("{} burrowed: {}", unit_id, !unit.burrowed);
    Ok(next)
}
