//! AI tuning with documented thresholds
//!
//! Every threshold the strategy analyzer and decision engine compare against
//! lives here, so a difficulty profile can override any of them.

use serde::{Deserialize, Serialize};

use crate::core::types::Turn;

/// Thresholds that shape the computer opponent's behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiTuning {
    // === GAME PHASE ===
    /// Last turn (inclusive) of the early game
    ///
    /// During the early game the AI always expands and never attacks.
    pub early_phase_end: Turn,

    /// Last turn (inclusive) of the mid game; later turns are late game
    pub mid_phase_end: Turn,

    // === EXPANSION ===
    /// Mid game: keep expanding while owning fewer drones than this
    pub mid_min_drones: usize,

    /// Mid game: keep expanding while owning fewer structures than this
    pub mid_min_structures: usize,

    /// Late game: keep expanding while economic power is below this
    pub late_min_economic_power: u32,

    /// Production stops favouring drones once this many are owned
    pub max_builders: usize,

    // === AGGRESSION ===
    /// Mid game: attack once own combat units exceed the enemy's by more
    /// than this margin
    pub mid_attack_margin: usize,

    /// Late game: attack once this many combat units are owned
    pub late_attack_army: usize,

    /// Any enemy unit this close to our queen forces a defensive posture
    pub threat_radius: u32,

    // === POSITIONING ===
    /// Defending units farther than this from the queen fall back
    pub retreat_distance: u32,

    /// Idle units this close to the queen step away to make room
    pub formation_min_distance: u32,

    /// Idle units farther than this from the queen step back in
    pub formation_max_distance: u32,
}

impl Default for AiTuning {
    fn default() -> Self {
        Self {
            early_phase_end: 15,
            mid_phase_end: 30,

            mid_min_drones: 3,
            mid_min_structures: 2,
            late_min_economic_power: 8,
            max_builders: 4,

            mid_attack_margin: 3,
            late_attack_army: 5,
            threat_radius: 4,

            retreat_distance: 3,
            formation_min_distance: 2,
            formation_max_distance: 4,
        }
    }
}

impl AiTuning {
    /// Create tuning with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate tuning for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.early_phase_end >= self.mid_phase_end {
            return Err(format!(
                "early_phase_end ({}) should be < mid_phase_end ({})",
                self.early_phase_end, self.mid_phase_end
            ));
        }

        if self.formation_min_distance >= self.formation_max_distance {
            return Err(format!(
                "formation_min_distance ({}) should be < formation_max_distance ({})",
                self.formation_min_distance, self.formation_max_distance
            ));
        }

        if self.threat_radius == 0 {
            return Err("threat_radius must be positive".into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuning_is_valid() {
        assert!(AiTuning::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_phases_rejected() {
        let tuning = AiTuning {
            early_phase_end: 40,
            ..AiTuning::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_inverted_formation_rejected() {
        let tuning = AiTuning {
            formation_min_distance: 5,
            ..AiTuning::default()
        };
        assert!(tuning.validate().is_err());
    }
}
