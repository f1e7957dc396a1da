//! Unit types and their catalog stats

use serde::{Deserialize, Serialize};

use crate::core::types::Resources;

/// Type of unit a queen can field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UnitType {
    Queen,      // Lays eggs, never produced
    Drone,      // Gathers and builds anthills
    Scout,      // Fast, fragile, vision
    Soldier,    // Baseline melee
    Major,      // Slow, armored melee
    Spitter,    // Short-ranged acid
    Bombardier, // Artillery, splash, cannot fire after moving
    Nurse,      // Heals adjacent allies
    Marauder,   // Fast raider
    Juggernaut, // Siege beast
}

/// What the decision engine does with a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitRole {
    Queen,
    Builder,
    Scout,
    Combat,
    Support,
}

/// Secondary damage around a primary target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Splash {
    pub radius: u32,
    pub damage: u32,
}

/// Catalog entry for a unit type
#[derive(Debug, Clone, PartialEq)]
pub struct UnitStats {
    pub cost: Resources,
    pub hatch_turns: u32,
    pub max_health: u32,
    pub attack: u32,
    pub defense: u32,
    pub movement: u32,
    pub attack_range: u32,
    pub min_attack_range: Option<u32>,
    pub splash: Option<Splash>,
    /// Must choose between moving and attacking each turn
    pub move_or_attack: bool,
    pub required_queen_tier: u8,
    pub sight: u32,
    pub heal: u32,
    pub can_build: bool,
    pub can_burrow: bool,
    pub role: UnitRole,
}

impl UnitType {
    /// Every variant, in catalog order
    pub const ALL: [UnitType; 10] = [
        UnitType::Queen,
        UnitType::Drone,
        UnitType::Scout,
        UnitType::Soldier,
        UnitType::Major,
        UnitType::Spitter,
        UnitType::Bombardier,
        UnitType::Nurse,
        UnitType::Marauder,
        UnitType::Juggernaut,
    ];

    /// Every variant a queen can lay
    pub fn producible() -> impl Iterator<Item = UnitType> {
        Self::ALL.into_iter().filter(|t| *t != UnitType::Queen)
    }

    /// Get catalog stats for this unit type
    pub fn stats(&self) -> UnitStats {
        match self {
            UnitType::Queen => UnitStats {
                cost: Resources::ZERO,
                hatch_turns: 0,
                max_health: 40,
                attack: 3,
                defense: 3,
                movement: 1,
                attack_range: 1,
                min_attack_range: None,
                splash: None,
                move_or_attack: false,
                required_queen_tier: 1,
                sight: 3,
                heal: 0,
                can_build: false,
                can_burrow: false,
                role: UnitRole::Queen,
            },

            UnitType::Drone => UnitStats {
                cost: Resources::new(10, 0),
                hatch_turns: 1,
                max_health: 8,
                attack: 1,
                defense: 0,
                movement: 2,
                attack_range: 1,
                min_attack_range: None,
                splash: None,
                move_or_attack: false,
                required_queen_tier: 1,
                sight: 2,
                heal: 0,
                can_build: true,
                can_burrow: true,
                role: UnitRole::Builder,
            },

            UnitType::Scout => UnitStats {
                cost: Resources::new(15, 5),
                hatch_turns: 1,
                max_health: 10,
                attack: 2,
                defense: 1,
                movement: 4,
                attack_range: 1,
                min_attack_range: None,
                splash: None,
                move_or_attack: false,
                required_queen_tier: 1,
                sight: 5,
                heal: 0,
                can_build: false,
                can_burrow: false,
                role: UnitRole::Scout,
            },

            UnitType::Soldier => UnitStats {
                cost: Resources::new(20, 10),
                hatch_turns: 2,
                max_health: 16,
                attack: 5,
                defense: 2,
                movement: 2,
                attack_range: 1,
                min_attack_range: None,
                splash: None,
                move_or_attack: false,
                required_queen_tier: 1,
                sight: 3,
                heal: 0,
                can_build: false,
                can_burrow: true,
                role: UnitRole::Combat,
            },

            UnitType::Major => UnitStats {
                cost: Resources::new(30, 20),
                hatch_turns: 3,
                max_health: 24,
                attack: 6,
                defense: 4,
                movement: 1,
                attack_range: 1,
                min_attack_range: None,
                splash: None,
                move_or_attack: false,
                required_queen_tier: 1,
                sight: 2,
                heal: 0,
                can_build: false,
                can_burrow: false,
                role: UnitRole::Combat,
            },

            UnitType::Spitter => UnitStats {
                cost: Resources::new(20, 15),
                hatch_turns: 2,
                max_health: 12,
                attack: 5,
                defense: 1,
                movement: 2,
                attack_range: 2,
                min_attack_range: None,
                splash: None,
                move_or_attack: false,
                required_queen_tier: 1,
                sight: 4,
                heal: 0,
                can_build: false,
                can_burrow: false,
                role: UnitRole::Combat,
            },

            UnitType::Bombardier => UnitStats {
                cost: Resources::new(30, 30),
                hatch_turns: 3,
                max_health: 12,
                attack: 7,
                defense: 1,
                movement: 1,
                attack_range: 3,
                min_attack_range: Some(2),
                splash: Some(Splash {
                    radius: 1,
                    damage: 3,
                }),
                move_or_attack: true,
                required_queen_tier: 2,
                sight: 4,
                heal: 0,
                can_build: false,
                can_burrow: false,
                role: UnitRole::Combat,
            },

            UnitType::Nurse => UnitStats {
                cost: Resources::new(15, 10),
                hatch_turns: 2,
                max_health: 10,
                attack: 1,
                defense: 1,
                movement: 2,
                attack_range: 1,
                min_attack_range: None,
                splash: None,
                move_or_attack: false,
                required_queen_tier: 1,
                sight: 3,
                heal: 4,
                can_build: false,
                can_burrow: false,
                role: UnitRole::Support,
            },

            UnitType::Marauder => UnitStats {
                cost: Resources::new(25, 15),
                hatch_turns: 2,
                max_health: 14,
                attack: 6,
                defense: 1,
                movement: 3,
                attack_range: 1,
                min_attack_range: None,
                splash: None,
                move_or_attack: false,
                required_queen_tier: 2,
                sight: 3,
                heal: 0,
                can_build: false,
                can_burrow: true,
                role: UnitRole::Combat,
            },

            UnitType::Juggernaut => UnitStats {
                cost: Resources::new(50, 40),
                hatch_turns: 4,
                max_health: 40,
                attack: 12,
                defense: 5,
                movement: 1,
                attack_range: 1,
                min_attack_range: None,
                splash: Some(Splash {
                    radius: 1,
                    damage: 4,
                }),
                move_or_attack: false,
                required_queen_tier: 3,
                sight: 2,
                heal: 0,
                can_build: false,
                can_burrow: false,
                role: UnitRole::Combat,
            },
        }
    }

    pub fn role(&self) -> UnitRole {
        self.stats().role
    }

    /// Melee units fight at range 1 only
    pub fn is_melee(&self) -> bool {
        self.stats().attack_range <= 1
    }

    /// Builders and healers sustain the colony rather than fight
    pub fn is_economic(&self) -> bool {
        matches!(self.role(), UnitRole::Builder | UnitRole::Support)
    }

    /// Inclusive attack distance band
    pub fn attack_band(&self) -> (u32, u32) {
        let stats = self.stats();
        (stats.min_attack_range.unwrap_or(1), stats.attack_range)
    }
}
