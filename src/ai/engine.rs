//! Decision engine - one complete AI turn
//!
//! Phases run strictly in order: hatch, unit actions, queen actions,
//! upgrades. Unit actions go first so units stepping off spawn hexes free
//! them for the queen in the same turn.

use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::ai::difficulty::AiConfig;
use crate::ai::pacing::{NoPacing, Pacer};
use crate::ai::production::run_queen_phase;
use crate::ai::strategy::{analyze, Strategy};
use crate::ai::units::run_unit_phase;
use crate::ai::TurnAi;
use crate::board::hex::HexCoord;
use crate::catalog::UpgradeId;
use crate::core::types::PlayerId;
use crate::economy::{evolve_queen, hatch_egg, purchase_upgrade};
use crate::state::GameState;

/// Everything the phases of one turn share
#[derive(Debug, Clone)]
pub struct TurnContext {
    pub player: PlayerId,
    pub config: AiConfig,
    pub strategy: Strategy,
    /// Enemy queen position, if the threat scan reveals one
    pub enemy_queen: Option<HexCoord>,
}

impl TurnContext {
    pub fn new(state: &GameState, player: PlayerId, config: AiConfig) -> Self {
        let strategy = analyze(state, player, &config.tuning, config.threat_scan);
        let enemy_queen = config.threat_scan.enemy_queen(state, player);
        Self {
            player,
            config,
            strategy,
            enemy_queen,
        }
    }
}

/// Play one full turn for `player` and return the resulting snapshot
pub fn take_turn<R: Rng + ?Sized>(
    state: &GameState,
    player: PlayerId,
    config: &AiConfig,
    rng: &mut R,
    pacer: &mut dyn Pacer,
) -> GameState {
    let ctx = TurnContext::new(state, player, config.clone());
    let delay = Duration::from_millis(config.profile.pacing_delay_ms);

    tracing::info!(
        "{} turn {}: {:?} phase, attack={}, expand={}, defend={}",
        player,
        state.turn,
        ctx.strategy.phase,
        ctx.strategy.should_attack,
        ctx.strategy.should_expand,
        ctx.strategy.should_defend
    );

    let state = run_hatch_phase(state, player);
    pacer.pause(delay);

    let state = run_unit_phase(&state, &ctx);
    pacer.pause(delay);

    let state = run_queen_phase(&state, &ctx, rng);
    pacer.pause(delay);

    run_upgrade_phase(&state, &ctx, rng)
}

/// Replace every ready egg with its unit
pub fn run_hatch_phase(state: &GameState, player: PlayerId) -> GameState {
    let ready: Vec<_> = state
        .eggs_of(player)
        .filter(|e| e.is_ready())
        .map(|e| e.id)
        .collect();

    ready
        .into_iter()
        .fold(state.clone(), |current, egg| match hatch_egg(&current, egg) {
            Ok((next, _)) => next,
            Err(err) => {
                tracing::debug!("{} failed to hatch: {}", egg, err);
                current
            }
        })
}

/// Maybe buy one upgrade, in priority order
///
/// When no upgrade is affordable the queen may evolve instead. Never more
/// than one purchase per turn.
pub fn run_upgrade_phase<R: Rng + ?Sized>(
    state: &GameState,
    ctx: &TurnContext,
    rng: &mut R,
) -> GameState {
    if rng.gen::<f64>() >= ctx.config.profile.upgrade_frequency {
        return state.clone();
    }

    UpgradeId::PRIORITY
        .iter()
        .find_map(|&upgrade| purchase_upgrade(state, ctx.player, upgrade).ok())
        .or_else(|| evolve_queen(state, ctx.player).ok())
        .unwrap_or_else(|| state.clone())
}

/// Stateful opponent owning its configuration, RNG, and pacing
pub struct AiController {
    config: AiConfig,
    rng: ChaCha8Rng,
    pacer: Box<dyn Pacer>,
}

impl AiController {
    /// Create a controller with a fixed default seed
    pub fn new(config: AiConfig) -> Self {
        Self::with_seed(config, 42)
    }

    /// Create with specific RNG seed for deterministic behavior
    pub fn with_seed(config: AiConfig, seed: u64) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            pacer: Box::new(NoPacing),
        }
    }

    /// Replace the pacing strategy
    pub fn with_pacer(mut self, pacer: impl Pacer + 'static) -> Self {
        self.pacer = Box::new(pacer);
        self
    }
}

impl TurnAi for AiController {
    fn take_turn(&mut self, state: &GameState, player: PlayerId) -> GameState {
        take_turn(state, player, &self.config, &mut self.rng, self.pacer.as_mut())
    }

    fn config(&self) -> &AiConfig {
        &self.config
    }
}
