//! Game rule constants - all tunable values in one place

use crate::core::types::Resources;

// Anthills
pub const ANTHILL_REQUIRED_PROGRESS: u32 = 2;
pub const ANTHILL_INCOME: u32 = 3; // Per completed anthill, of its resource kind

// Gathering
pub const GATHER_RATE: u32 = 2; // Per drone standing on a resource node

// Combat
pub const MIN_DAMAGE: u32 = 1;
pub const CANNIBALISM_BONUS: Resources = Resources::new(10, 5);
pub const BURROW_DEFENSE_BONUS: u32 = 2;
pub const UPGRADE_ATTACK_PER_TIER: u32 = 1;
pub const UPGRADE_DEFENSE_PER_TIER: u32 = 1;
pub const HEAL_RANGE: u32 = 1;

// Queen
pub const MAX_QUEEN_TIER: u8 = 3;
