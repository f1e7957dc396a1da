//! Entities held by the state store

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::board::hex::HexCoord;
use crate::catalog::{queen_tier, UnitStats, UnitType, UpgradeId, ANTHILL_REQUIRED_PROGRESS};
use crate::core::types::{
    EggId, PlayerId, ResourceId, ResourceKind, Resources, StructureId, Turn, UnitId,
};

/// A unit on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub unit_type: UnitType,
    pub owner: PlayerId,
    pub position: HexCoord,
    pub health: u32,
    pub has_moved: bool,
    pub has_attacked: bool,
    pub has_built: bool,
    /// Only queens carry energy
    pub energy: Option<u32>,
    pub burrowed: bool,
}

impl Unit {
    /// Fresh unit at full health with clear turn flags
    pub fn new(id: UnitId, unit_type: UnitType, owner: PlayerId, position: HexCoord) -> Self {
        let energy = (unit_type == UnitType::Queen).then(|| queen_tier(1).max_energy);
        Self {
            id,
            unit_type,
            owner,
            position,
            health: unit_type.stats().max_health,
            has_moved: false,
            has_attacked: false,
            has_built: false,
            energy,
            burrowed: false,
        }
    }

    pub fn stats(&self) -> UnitStats {
        self.unit_type.stats()
    }

    pub fn max_health(&self) -> u32 {
        self.stats().max_health
    }

    pub fn missing_health(&self) -> u32 {
        self.max_health().saturating_sub(self.health)
    }

    pub fn is_injured(&self) -> bool {
        self.missing_health() > 0
    }

    pub fn is_queen(&self) -> bool {
        self.unit_type == UnitType::Queen
    }

    pub fn energy(&self) -> u32 {
        self.energy.unwrap_or(0)
    }

    /// Clear the per-turn action flags
    pub fn reset_turn_flags(&mut self) {
        self.has_moved = false;
        self.has_attacked = false;
        self.has_built = false;
    }
}

/// A pending unit counting down to hatch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Egg {
    pub id: EggId,
    pub unit_type: UnitType,
    pub owner: PlayerId,
    pub position: HexCoord,
    pub turns_remaining: u32,
    pub laid_on_turn: Turn,
}

impl Egg {
    pub fn is_ready(&self) -> bool {
        self.turns_remaining == 0
    }
}

/// An anthill raised on a resource node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Structure {
    pub id: StructureId,
    pub owner: PlayerId,
    pub position: HexCoord,
    pub resource_kind: ResourceKind,
    pub build_progress: u32,
}

impl Structure {
    /// Completed anthills produce income
    pub fn is_complete(&self) -> bool {
        self.build_progress >= ANTHILL_REQUIRED_PROGRESS
    }
}

/// A static, inexhaustible resource node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceNode {
    pub id: ResourceId,
    pub kind: ResourceKind,
    pub position: HexCoord,
}

/// Per-player economy and progression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub id: PlayerId,
    pub resources: Resources,
    pub queen_tier: u8,
    pub upgrades: BTreeMap<UpgradeId, u8>,
}

impl PlayerState {
    pub fn new(id: PlayerId, resources: Resources) -> Self {
        Self {
            id,
            resources,
            queen_tier: 1,
            upgrades: BTreeMap::new(),
        }
    }

    /// Purchased tier of an upgrade (0 if never bought)
    pub fn upgrade_tier(&self, upgrade: UpgradeId) -> u8 {
        self.upgrades.get(&upgrade).copied().unwrap_or(0)
    }

    pub fn has_upgrade(&self, upgrade: UpgradeId) -> bool {
        self.upgrade_tier(upgrade) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_unit_full_health() {
        let unit = Unit::new(UnitId(1), UnitType::Soldier, PlayerId(0), HexCoord::ORIGIN);
        assert_eq!(unit.health, unit.max_health());
        assert!(!unit.is_injured());
        assert_eq!(unit.energy, None);
    }

    #[test]
    fn test_new_queen_has_energy() {
        let queen = Unit::new(UnitId(1), UnitType::Queen, PlayerId(0), HexCoord::ORIGIN);
        assert_eq!(queen.energy, Some(queen_tier(1).max_energy));
        assert!(queen.is_queen());
    }

    #[test]
    fn test_reset_turn_flags() {
        let mut unit = Unit::new(UnitId(1), UnitType::Drone, PlayerId(0), HexCoord::ORIGIN);
        unit.has_moved = true;
        unit.has_attacked = true;
        unit.has_built = true;
        unit.reset_turn_flags();
        assert!(!unit.has_moved && !unit.has_attacked && !unit.has_built);
    }

    #[test]
    fn test_structure_completion() {
        let mut anthill = Structure {
            id: StructureId(1),
            owner: PlayerId(0),
            position: HexCoord::ORIGIN,
            resource_kind: ResourceKind::Mineral,
            build_progress: 1,
        };
        assert!(!anthill.is_complete());
        anthill.build_progress = ANTHILL_REQUIRED_PROGRESS;
        assert!(anthill.is_complete());
    }

    #[test]
    fn test_upgrade_tier_defaults_to_zero() {
        let player = PlayerState::new(PlayerId(0), Resources::ZERO);
        assert_eq!(player.upgrade_tier(UpgradeId::Defense), 0);
        assert!(!player.has_upgrade(UpgradeId::Cannibalism));
    }
}
