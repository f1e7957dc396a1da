//! Strategy analyzer - phase and posture from a snapshot
//!
//! Pure: the same snapshot and tuning always give the same assessment.

use serde::{Deserialize, Serialize};

use crate::board::hex::HexCoord;
use crate::catalog::{UnitRole, UnitType};
use crate::core::config::AiTuning;
use crate::core::types::PlayerId;
use crate::state::{GameState, Unit};

/// Coarse stage of the game, a step function of the turn number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Early,
    Mid,
    Late,
}

/// Which enemy units the AI may take into account
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreatScan {
    /// Every enemy unit on the board
    #[default]
    Omniscient,
    /// Only enemies within sight of one of our own units
    SightLimited,
}

impl ThreatScan {
    /// Is `pos` known to `player` under this scan mode?
    pub fn sees(&self, state: &GameState, player: PlayerId, pos: HexCoord) -> bool {
        match self {
            ThreatScan::Omniscient => true,
            ThreatScan::SightLimited => state
                .units_of(player)
                .any(|u| u.position.distance(&pos) <= u.stats().sight),
        }
    }

    /// Enemy units known to `player`, in id order
    pub fn enemies<'a>(
        &'a self,
        state: &'a GameState,
        player: PlayerId,
    ) -> impl Iterator<Item = &'a Unit> + 'a {
        state
            .enemy_units_of(player)
            .filter(move |e| self.sees(state, player, e.position))
    }

    /// Position of the first known enemy queen
    pub fn enemy_queen(&self, state: &GameState, player: PlayerId) -> Option<HexCoord> {
        self.enemies(state, player)
            .find(|u| u.unit_type == UnitType::Queen)
            .map(|u| u.position)
    }
}

/// The AI's read of the game this turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strategy {
    pub phase: GamePhase,
    pub army_strength: u32,
    pub economic_power: u32,
    pub should_attack: bool,
    pub should_expand: bool,
    pub should_defend: bool,
    pub enemy_army_strength: u32,
}

pub fn game_phase(turn: u32, tuning: &AiTuning) -> GamePhase {
    if turn <= tuning.early_phase_end {
        GamePhase::Early
    } else if turn <= tuning.mid_phase_end {
        GamePhase::Mid
    } else {
        GamePhase::Late
    }
}

fn is_combat(unit: &Unit) -> bool {
    unit.stats().role == UnitRole::Combat
}

/// Sum of attack + defense over combat units
fn army_strength<'a>(units: impl Iterator<Item = &'a Unit>) -> u32 {
    units
        .filter(|u| is_combat(u))
        .map(|u| u.stats().attack + u.stats().defense)
        .sum()
}

/// Assess phase and posture for `player`
pub fn analyze(
    state: &GameState,
    player: PlayerId,
    tuning: &AiTuning,
    scan: ThreatScan,
) -> Strategy {
    let phase = game_phase(state.turn, tuning);

    let drones = state
        .units_of(player)
        .filter(|u| u.unit_type == UnitType::Drone)
        .count();
    let structures = state.structures_of(player).count();
    let completed = state
        .structures_of(player)
        .filter(|s| s.is_complete())
        .count();
    let economic_power = (drones + 2 * completed) as u32;

    let own_combat = state.units_of(player).filter(|u| is_combat(u)).count();
    let enemy_combat = scan
        .enemies(state, player)
        .filter(|u| is_combat(u))
        .count();

    let (should_expand, mut should_attack) = match phase {
        GamePhase::Early => (true, false),
        GamePhase::Mid => (
            drones < tuning.mid_min_drones || structures < tuning.mid_min_structures,
            own_combat > enemy_combat + tuning.mid_attack_margin,
        ),
        GamePhase::Late => (
            economic_power < tuning.late_min_economic_power,
            own_combat >= tuning.late_attack_army,
        ),
    };
    let mut should_defend = false;

    // Threat override comes last and beats the phase table
    if let Some(queen) = state.queen_of(player) {
        let threatened = scan
            .enemies(state, player)
            .any(|e| e.position.distance(&queen.position) <= tuning.threat_radius);
        if threatened {
            should_defend = true;
            should_attack = false;
        }
    }

    Strategy {
        phase,
        army_strength: army_strength(state.units_of(player)),
        economic_power,
        should_attack,
        should_expand,
        should_defend,
        enemy_army_strength: army_strength(scan.enemies(state, player)),
    }
}
