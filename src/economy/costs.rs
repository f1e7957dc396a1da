//! Affordability checks and resource deduction

use crate::catalog::UnitType;
use crate::core::types::Resources;
use crate::state::PlayerState;

/// True iff every resource dimension covers the cost
pub fn can_afford(cost: &Resources, resources: &Resources) -> bool {
    resources.covers(cost)
}

/// Subtract a cost from a stockpile
///
/// Callers check [`can_afford`] first. This never clamps: deducting more than
/// is held is a caller bug, not a recoverable condition.
pub fn deduct_cost(resources: Resources, cost: &Resources) -> Resources {
    debug_assert!(
        can_afford(cost, &resources),
        "deducting {:?} from {:?} without an affordability check",
        cost,
        resources
    );
    Resources {
        food: resources.food - cost.food,
        minerals: resources.minerals - cost.minerals,
    }
}

/// The player's queen tier unlocks the type and the stockpile covers its cost
pub fn can_afford_unit(player: &PlayerState, unit_type: UnitType) -> bool {
    let stats = unit_type.stats();
    unit_type != UnitType::Queen
        && player.queen_tier >= stats.required_queen_tier
        && can_afford(&stats.cost, &player.resources)
}

/// Every producible type the player can currently pay for, in catalog order
pub fn affordable_unit_types(player: &PlayerState) -> Vec<UnitType> {
    UnitType::producible()
        .filter(|t| can_afford_unit(player, *t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::PlayerId;

    #[test]
    fn test_can_afford_each_dimension() {
        let stock = Resources::new(20, 10);
        assert!(can_afford(&Resources::new(20, 10), &stock));
        assert!(!can_afford(&Resources::new(21, 0), &stock));
        assert!(!can_afford(&Resources::new(0, 11), &stock));
    }

    #[test]
    fn test_deduct_cost_exact() {
        let left = deduct_cost(Resources::new(20, 10), &Resources::new(20, 10));
        assert_eq!(left, Resources::ZERO);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic]
    fn test_deduct_without_check_is_a_bug() {
        let _ = deduct_cost(Resources::new(1, 1), &Resources::new(2, 0));
    }

    #[test]
    fn test_tier_gating() {
        let mut player = PlayerState::new(PlayerId(0), Resources::new(500, 500));
        assert!(!can_afford_unit(&player, UnitType::Bombardier));
        assert!(!can_afford_unit(&player, UnitType::Queen));
        player.queen_tier = 2;
        assert!(can_afford_unit(&player, UnitType::Bombardier));
        assert!(!can_afford_unit(&player, UnitType::Juggernaut));
    }

    #[test]
    fn test_affordable_types_ordered() {
        let player = PlayerState::new(PlayerId(0), Resources::new(15, 5));
        assert_eq!(
            affordable_unit_types(&player),
            vec![UnitType::Drone, UnitType::Scout]
        );
    }
}
