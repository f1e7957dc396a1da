//! Difficulty profiles: built-in presets, optionally overridden from TOML
//!
//! Profiles define pacing, whether drones raise anthills, how often the AI
//! shops for upgrades, and the unit mix production draws from.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ai::strategy::ThreatScan;
use crate::catalog::{UnitRole, UnitType};
use crate::core::config::AiTuning;
use crate::core::error::{HiveError, Result};

/// Fixed set of difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Built-in profile for this level
    pub fn profile(&self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                pacing_delay_ms: 1200,
                building_enabled: false,
                upgrade_frequency: 0.1,
                unit_mix: mix(&[
                    (UnitType::Drone, 3),
                    (UnitType::Scout, 1),
                    (UnitType::Soldier, 4),
                    (UnitType::Spitter, 1),
                ]),
            },
            Difficulty::Medium => DifficultyProfile {
                pacing_delay_ms: 800,
                building_enabled: true,
                upgrade_frequency: 0.3,
                unit_mix: mix(&[
                    (UnitType::Drone, 3),
                    (UnitType::Scout, 1),
                    (UnitType::Soldier, 4),
                    (UnitType::Major, 2),
                    (UnitType::Spitter, 2),
                    (UnitType::Nurse, 1),
                ]),
            },
            Difficulty::Hard => DifficultyProfile {
                pacing_delay_ms: 400,
                building_enabled: true,
                upgrade_frequency: 0.6,
                unit_mix: mix(&[
                    (UnitType::Drone, 2),
                    (UnitType::Scout, 1),
                    (UnitType::Soldier, 4),
                    (UnitType::Major, 3),
                    (UnitType::Spitter, 3),
                    (UnitType::Bombardier, 3),
                    (UnitType::Nurse, 1),
                    (UnitType::Marauder, 3),
                    (UnitType::Juggernaut, 2),
                ]),
            },
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = HiveError;

    fn from_str(s: &str) -> Result<Self> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| HiveError::InvalidConfig(format!("unknown difficulty '{}'", s)))
    }
}

fn mix(entries: &[(UnitType, u32)]) -> Vec<MixEntry> {
    entries
        .iter()
        .map(|&(unit, weight)| MixEntry { unit, weight })
        .collect()
}

/// One weighted entry of a production mix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixEntry {
    pub unit: UnitType,
    pub weight: u32,
}

/// Everything a difficulty level changes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Cosmetic delay between AI phases (milliseconds)
    pub pacing_delay_ms: u64,
    /// Whether drones raise anthills on mineral nodes
    pub building_enabled: bool,
    /// Chance per turn to shop for an upgrade (0.0 to 1.0)
    pub upgrade_frequency: f64,
    /// Production weights
    pub unit_mix: Vec<MixEntry>,
}

impl DifficultyProfile {
    /// Validate profile for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if !(0.0..=1.0).contains(&self.upgrade_frequency) {
            return Err(format!(
                "upgrade_frequency ({}) must be within 0.0..=1.0",
                self.upgrade_frequency
            ));
        }
        if self.unit_mix.iter().any(|e| e.unit == UnitType::Queen) {
            return Err("unit_mix cannot contain queens".into());
        }
        if self.unit_mix.iter().all(|e| e.weight == 0) {
            return Err("unit_mix needs at least one positive weight".into());
        }
        Ok(())
    }

    /// Share of mix weight spent on combat units
    pub fn combat_bias(&self) -> f64 {
        let total: u64 = self.unit_mix.iter().map(|e| e.weight as u64).sum();
        if total == 0 {
            return 0.0;
        }
        let combat: u64 = self
            .unit_mix
            .iter()
            .filter(|e| e.unit.role() == UnitRole::Combat)
            .map(|e| e.weight as u64)
            .sum();
        combat as f64 / total as f64
    }
}

/// Complete configuration for one computer opponent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiConfig {
    pub difficulty: Difficulty,
    pub profile: DifficultyProfile,
    #[serde(default)]
    pub tuning: AiTuning,
    #[serde(default)]
    pub threat_scan: ThreatScan,
}

impl AiConfig {
    /// Built-in configuration for a difficulty level
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            profile: difficulty.profile(),
            tuning: AiTuning::default(),
            threat_scan: ThreatScan::default(),
        }
    }

    pub fn with_threat_scan(mut self, threat_scan: ThreatScan) -> Self {
        self.threat_scan = threat_scan;
        self
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        self.profile.validate()?;
        self.tuning.validate()
    }
}

impl From<Difficulty> for AiConfig {
    fn from(difficulty: Difficulty) -> Self {
        Self::new(difficulty)
    }
}

/// Load a difficulty profile from TOML
///
/// Loads from `data/difficulty/{name}.toml`.
pub fn load_difficulty_profile(name: &str) -> Result<DifficultyProfile> {
    let path = profile_path(name);
    let contents = fs::read_to_string(&path)?;
    parse_difficulty_profile(&contents)
}

/// Parse and validate a TOML difficulty profile
pub fn parse_difficulty_profile(contents: &str) -> Result<DifficultyProfile> {
    let profile: DifficultyProfile = toml::from_str(contents)?;
    profile.validate().map_err(HiveError::InvalidConfig)?;
    Ok(profile)
}

/// Profile from `data/difficulty/`, falling back to the built-in preset
pub fn resolve_profile(difficulty: Difficulty) -> DifficultyProfile {
    load_difficulty_profile(difficulty.name()).unwrap_or_else(|e| {
        tracing::debug!(
            "Using built-in {} profile ({})",
            difficulty.name(),
            e
        );
        difficulty.profile()
    })
}

/// Get path to a profile file
fn profile_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data/difficulty")
        .join(format!("{}.toml", name))
}
