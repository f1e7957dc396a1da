//! Colony-wide upgrades

use serde::{Deserialize, Serialize};

use crate::core::types::Resources;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UpgradeId {
    MeleeAttack,
    Defense,
    RangedAttack,
    Cannibalism,
}

/// Tiered cost table for an upgrade
///
/// `costs[n]` buys tier `n + 1`, which needs queen tier `required_queen_tier[n]`.
#[derive(Debug, Clone, PartialEq)]
pub struct UpgradeStats {
    pub costs: &'static [Resources],
    pub required_queen_tier: &'static [u8],
}

impl UpgradeStats {
    pub fn max_tier(&self) -> u8 {
        self.costs.len() as u8
    }

    /// Cost of buying the tier after `current_tier`
    pub fn cost_for(&self, current_tier: u8) -> Option<Resources> {
        self.costs.get(current_tier as usize).copied()
    }

    /// Queen tier needed to buy the tier after `current_tier`
    pub fn gate_for(&self, current_tier: u8) -> Option<u8> {
        self.required_queen_tier.get(current_tier as usize).copied()
    }
}

const MELEE_ATTACK_COSTS: [Resources; 3] = [
    Resources::new(30, 20),
    Resources::new(60, 40),
    Resources::new(100, 70),
];
const DEFENSE_COSTS: [Resources; 3] = [
    Resources::new(30, 30),
    Resources::new(60, 50),
    Resources::new(100, 80),
];
const RANGED_ATTACK_COSTS: [Resources; 3] = [
    Resources::new(25, 25),
    Resources::new(50, 50),
    Resources::new(90, 80),
];
const CANNIBALISM_COSTS: [Resources; 1] = [Resources::new(40, 20)];

const THREE_TIER_GATES: [u8; 3] = [1, 2, 3];
const CANNIBALISM_GATES: [u8; 1] = [2];

impl UpgradeId {
    /// Order the AI tries purchases in
    pub const PRIORITY: [UpgradeId; 4] = [
        UpgradeId::MeleeAttack,
        UpgradeId::Defense,
        UpgradeId::RangedAttack,
        UpgradeId::Cannibalism,
    ];

    pub fn stats(&self) -> UpgradeStats {
        match self {
            UpgradeId::MeleeAttack => UpgradeStats {
                costs: &MELEE_ATTACK_COSTS,
                required_queen_tier: &THREE_TIER_GATES,
            },
            UpgradeId::Defense => UpgradeStats {
                costs: &DEFENSE_COSTS,
                required_queen_tier: &THREE_TIER_GATES,
            },
            UpgradeId::RangedAttack => UpgradeStats {
                costs: &RANGED_ATTACK_COSTS,
                required_queen_tier: &THREE_TIER_GATES,
            },
            UpgradeId::Cannibalism => UpgradeStats {
                costs: &CANNIBALISM_COSTS,
                required_queen_tier: &CANNIBALISM_GATES,
            },
        }
    }
}
