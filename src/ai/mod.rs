//! Computer opponent
//!
//! Architecture:
//! - `strategy` reads the snapshot into a posture (attack / expand / defend)
//! - `units` and `production` turn that posture into actions
//! - `engine` runs the phases of a turn in order
//! - `difficulty` holds the presets and their TOML overrides

pub mod difficulty;
pub mod engine;
pub mod pacing;
pub mod production;
pub mod selection;
pub mod strategy;
pub mod units;

pub use difficulty::{
    load_difficulty_profile, resolve_profile, AiConfig, Difficulty, DifficultyProfile, MixEntry,
};
pub use engine::{take_turn, AiController, TurnContext};
pub use pacing::{NoPacing, Pacer, SleepPacing};
pub use selection::weighted_pick;
pub use strategy::{analyze, GamePhase, Strategy, ThreatScan};

use crate::core::types::PlayerId;
use crate::state::GameState;

/// Anything that can play a turn for one player
pub trait TurnAi {
    /// Play one full turn, returning the new snapshot
    fn take_turn(&mut self, state: &GameState, player: PlayerId) -> GameState;

    /// Get the active configuration
    fn config(&self) -> &AiConfig;

    /// Check if the AI sees every enemy unit
    fn ignores_fog_of_war(&self) -> bool {
        self.config().threat_scan == ThreatScan::Omniscient
    }
}
