//! Upgrade purchases and queen evolution

use crate::catalog::{queen_tier, UpgradeId, MAX_QUEEN_TIER};
use crate::core::error::ActionError;
use crate::core::types::PlayerId;
use crate::economy::costs::{can_afford, deduct_cost};
use crate::state::GameState;

/// Buy the next tier of an upgrade
///
/// Fails without touching the snapshot if the upgrade is maxed, the queen
/// tier is too low, or the player cannot pay `costs[current_tier]`.
pub fn purchase_upgrade(
    state: &GameState,
    player_id: PlayerId,
    upgrade: UpgradeId,
) -> Result<GameState, ActionError> {
    let player = state
        .player(player_id)
        .ok_or(ActionError::PlayerNotFound(player_id))?;
    let stats = upgrade.stats();
    let current = player.upgrade_tier(upgrade);

    if current >= stats.max_tier() {
        return Err(ActionError::MaxTier);
    }
    let (Some(cost), Some(required)) = (stats.cost_for(current), stats.gate_for(current)) else {
        return Err(ActionError::MaxTier);
    };
    if player.queen_tier < required {
        return Err(ActionError::TierLocked { required });
    }
    if !can_afford(&cost, &player.resources) {
        return Err(ActionError::InsufficientResources);
    }

    let next = state.with_updated_player(player_id, |p| {
        p.resources = deduct_cost(p.resources, &cost);
        p.upgrades.insert(upgrade, current + 1);
    })?;

    tracing::info!("{} bought {:?} tier {}", player_id, upgrade, current + 1);
    Ok(next)
}

/// Evolve the player's queen to the next tier
///
/// Raises spawn count, energy capacity and income. Current energy carries over.
pub fn evolve_queen(state: &GameState, player_id: PlayerId) -> Result<GameState, ActionError> {
    let player = state
        .player(player_id)
        .ok_or(ActionError::PlayerNotFound(player_id))?;
    if state.queen_of(player_id).is_none() {
        return Err(ActionError::QueenNotFound(player_id));
    }
    if player.queen_tier >= MAX_QUEEN_TIER {
        return Err(ActionError::MaxTier);
    }

    let target = queen_tier(player.queen_tier + 1);
    if !can_afford(&target.evolve_cost, &player.resources) {
        return Err(ActionError::InsufficientResources);
    }

    let next = state.with_updated_player(player_id, |p| {
        p.resources = deduct_cost(p.resources, &target.evolve_cost);
        p.queen_tier = target.tier;
    })?;

    tracing::info!("{} queen evolved to tier {}", player_id, target.tier);
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::hex::HexCoord;
    use crate::core::types::Resources;
    use crate::state::GameStateBuilder;

    const ME: PlayerId = PlayerId(0);

    fn rich(tier: u8) -> GameState {
        GameStateBuilder::new(4)
            .player_at_tier(ME, Resources::new(1000, 1000), tier)
            .queen(ME, HexCoord::ORIGIN)
            .build()
    }

    #[test]
    fn test_purchase_deducts_and_increments() {
        let state = rich(1);
        let next = purchase_upgrade(&state, ME, UpgradeId::MeleeAttack).unwrap();
        let player = next.player(ME).unwrap();
        assert_eq!(player.upgrade_tier(UpgradeId::MeleeAttack), 1);
        assert_eq!(player.resources, Resources::new(970, 980));
    }

    #[test]
    fn test_tier_gate_blocks_second_tier() {
        let state = rich(1);
        let once = purchase_upgrade(&state, ME, UpgradeId::Defense).unwrap();
        assert_eq!(
            purchase_upgrade(&once, ME, UpgradeId::Defense).unwrap_err(),
            ActionError::TierLocked { required: 2 }
        );
    }

    #[test]
    fn test_cannibalism_needs_tier_two() {
        assert_eq!(
            purchase_upgrade(&rich(1), ME, UpgradeId::Cannibalism).unwrap_err(),
            ActionError::TierLocked { required: 2 }
        );
        let next = purchase_upgrade(&rich(2), ME, UpgradeId::Cannibalism).unwrap();
        assert!(next.player(ME).unwrap().has_upgrade(UpgradeId::Cannibalism));
        assert_eq!(
            purchase_upgrade(&next, ME, UpgradeId::Cannibalism).unwrap_err(),
            ActionError::MaxTier
        );
    }

    #[test]
    fn test_failed_purchase_is_noop() {
        let state = GameStateBuilder::new(4)
            .player(ME, Resources::new(10, 10))
            .build();
        assert_eq!(
            purchase_upgrade(&state, ME, UpgradeId::RangedAttack).unwrap_err(),
            ActionError::InsufficientResources
        );
        assert_eq!(state.player(ME).unwrap().resources, Resources::new(10, 10));
    }

    #[test]
    fn test_evolve_queen() {
        let state = rich(1);
        let next = evolve_queen(&state, ME).unwrap();
        assert_eq!(next.player(ME).unwrap().queen_tier, 2);
        assert_eq!(
            next.player(ME).unwrap().resources,
            Resources::new(900, 920)
        );

        let maxed = evolve_queen(&next, ME).unwrap();
        assert_eq!(evolve_queen(&maxed, ME).unwrap_err(), ActionError::MaxTier);
    }
}
