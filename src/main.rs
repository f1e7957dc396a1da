//! Headless match runner
//!
//! Plays two computer opponents against each other on a skirmish map and
//! prints a JSON or text summary.

use clap::Parser;
use serde::Serialize;

use hexhive::ai::{
    resolve_profile, AiConfig, AiController, Difficulty, SleepPacing, ThreatScan, TurnAi,
};
use hexhive::core::error::{HiveError, Result};
use hexhive::core::types::{PlayerId, Turn};
use hexhive::state::{GameState, GameStateBuilder};
use hexhive::turn::{advance_turn, begin_turn};

/// Headless match runner - AI vs AI skirmishes
#[derive(Parser, Debug)]
#[command(name = "hexhive")]
#[command(about = "Run an AI vs AI skirmish and print the outcome")]
struct Args {
    /// Difficulty for player 0 (easy, medium, hard)
    #[arg(long, default_value = "medium")]
    first: Difficulty,

    /// Difficulty for player 1 (easy, medium, hard)
    #[arg(long, default_value = "medium")]
    second: Difficulty,

    /// Board radius in hexes
    #[arg(long, default_value_t = 8)]
    radius: u32,

    /// Maximum turns before the match is called a draw
    #[arg(long, default_value_t = 60)]
    max_turns: Turn,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,

    /// Only let each AI react to enemies its units can see
    #[arg(long)]
    sight_limited: bool,

    /// Honour each profile's pacing delay between phases
    #[arg(long)]
    paced: bool,

    /// Log every AI decision
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[derive(Serialize)]
struct PlayerSummary {
    player: String,
    difficulty: Difficulty,
    units: usize,
    eggs: usize,
    anthills: usize,
    food: u32,
    minerals: u32,
    queen_tier: u8,
    queen_alive: bool,
}

/// JSON output structure
#[derive(Serialize)]
struct MatchResult {
    outcome: String,
    turns: Turn,
    players: Vec<PlayerSummary>,
    seed: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "hexhive=debug" } else { "hexhive=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    let scan = if args.sight_limited {
        ThreatScan::SightLimited
    } else {
        ThreatScan::Omniscient
    };

    let lineup = [(PlayerId(0), args.first), (PlayerId(1), args.second)];
    let mut controllers: Vec<(PlayerId, AiController)> = Vec::new();
    for (i, &(player, difficulty)) in lineup.iter().enumerate() {
        let mut config = AiConfig::new(difficulty).with_threat_scan(scan);
        config.profile = resolve_profile(difficulty);
        config
            .validate()
            .map_err(HiveError::InvalidConfig)?;

        let mut controller = AiController::with_seed(config, seed.wrapping_add(i as u64));
        if args.paced {
            controller = controller.with_pacer(SleepPacing);
        }
        controllers.push((player, controller));
    }

    let mut state = GameStateBuilder::skirmish(args.radius);
    tracing::info!("Match started: {:?} vs {:?}, seed {}", args.first, args.second, seed);

    'game: while state.turn <= args.max_turns {
        for (player, controller) in controllers.iter_mut() {
            if state.is_eliminated(*player) {
                continue;
            }
            state = begin_turn(&state, *player);
            state = controller.take_turn(&state, *player);

            if state.winner().is_some() {
                break 'game;
            }
        }
        state = advance_turn(&state);
    }

    let result = MatchResult {
        outcome: match state.winner() {
            Some(player) => format!("{} wins", player),
            None => "draw".to_string(),
        },
        turns: state.turn.min(args.max_turns),
        players: lineup
            .iter()
            .map(|&(player, difficulty)| summarize(&state, player, difficulty))
            .collect(),
        seed,
    };

    match args.format.as_str() {
        "text" => print_text(&result),
        "json" => println!("{}", serde_json::to_string_pretty(&result)?),
        other => {
            eprintln!("Unknown format '{}', defaulting to json", other);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}

fn summarize(state: &GameState, player: PlayerId, difficulty: Difficulty) -> PlayerSummary {
    let owner = state.player(player);
    PlayerSummary {
        player: player.to_string(),
        difficulty,
        units: state.units_of(player).count(),
        eggs: state.eggs_of(player).count(),
        anthills: state
            .structures_of(player)
            .filter(|s| s.is_complete())
            .count(),
        food: owner.map(|p| p.resources.food).unwrap_or(0),
        minerals: owner.map(|p| p.resources.minerals).unwrap_or(0),
        queen_tier: owner.map(|p| p.queen_tier).unwrap_or(1),
        queen_alive: state.queen_of(player).is_some(),
    }
}

fn print_text(result: &MatchResult) {
    println!("Match Result");
    println!("============");
    println!("Outcome: {}", result.outcome);
    println!("Turns: {}", result.turns);
    for p in &result.players {
        println!();
        println!("{} ({:?})", p.player, p.difficulty);
        println!("  Units: {} (+{} eggs)", p.units, p.eggs);
        println!("  Anthills: {}", p.anthills);
        println!("  Stockpile: {} food, {} minerals", p.food, p.minerals);
        println!(
            "  Queen: tier {}{}",
            p.queen_tier,
            if p.queen_alive { "" } else { " (dead)" }
        );
    }
    println!();
    println!("Seed: {}", result.seed);
}
