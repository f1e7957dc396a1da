//! Queen tiers: spawn capacity, energy and income

use crate::catalog::constants::MAX_QUEEN_TIER;
use crate::core::types::Resources;

/// Catalog entry for a queen tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueenTierStats {
    pub tier: u8,
    /// Adjacent hexes the queen may lay into
    pub spawn_count: usize,
    pub max_energy: u32,
    pub energy_regen: u32,
    pub lay_cost: u32,
    pub income: Resources,
    /// Price of evolving into this tier (zero for the starting tier)
    pub evolve_cost: Resources,
}

const TIERS: [QueenTierStats; MAX_QUEEN_TIER as usize] = [
    QueenTierStats {
        tier: 1,
        spawn_count: 2,
        max_energy: 60,
        energy_regen: 20,
        lay_cost: 20,
        income: Resources::new(5, 2),
        evolve_cost: Resources::ZERO,
    },
    QueenTierStats {
        tier: 2,
        spawn_count: 4,
        max_energy: 90,
        energy_regen: 25,
        lay_cost: 18,
        income: Resources::new(8, 4),
        evolve_cost: Resources::new(100, 80),
    },
    QueenTierStats {
        tier: 3,
        spawn_count: 6,
        max_energy: 120,
        energy_regen: 30,
        lay_cost: 15,
        income: Resources::new(12, 6),
        evolve_cost: Resources::new(200, 150),
    },
];

/// Stats for a queen tier, clamped into the catalog's range
pub fn queen_tier(tier: u8) -> QueenTierStats {
    let index = tier.clamp(1, MAX_QUEEN_TIER) - 1;
    TIERS[index as usize]
}
