//! Engine-vs-engine draughts runner.
//!
//! Run with:
//! `cargo run --release -- --light iterative --dark random --verbose`
//! `cargo run --release -- --games 10 --seed 1234 --opening-plies 4`

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use plum_draughts::engines::engine_iterative::IterativeEngine;
use plum_draughts::engines::engine_random::RandomEngine;
use plum_draughts::engines::engine_trait::Engine;
use plum_draughts::game_state::game_state::GameState;
use plum_draughts::move_generation::legal_move_generator::LegalMoveGenerator;
use plum_draughts::move_generation::move_generator::{MandatoryCaptureGenerator, MoveGenerator};
use plum_draughts::search::board_scoring::FeatureScorer;
use plum_draughts::search::iterative_deepening::SearchConfig;
use plum_draughts::utils::engine_match_harness::{
    play_engine_match, play_engine_match_from_state, play_engine_match_series, MatchConfig,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PlayerKind {
    Iterative,
    Random,
}

/// Play draughts engines against each other.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Engine playing Light (moves first).
    #[arg(long, value_enum, default_value_t = PlayerKind::Iterative)]
    light: PlayerKind,

    /// Engine playing Dark.
    #[arg(long, value_enum, default_value_t = PlayerKind::Random)]
    dark: PlayerKind,

    /// Maximum iterative deepening depth.
    #[arg(long, default_value_t = 5)]
    depth: u8,

    /// Search time budget per move, in milliseconds.
    #[arg(long, default_value_t = 5000)]
    time_ms: u64,

    /// Stop and call a draw after this many plies.
    #[arg(long, default_value_t = 200)]
    max_plies: u16,

    /// Random plies played before the engines take over.
    #[arg(long, default_value_t = 0)]
    opening_plies: u8,

    /// Number of games; players swap colors every game.
    #[arg(long, default_value_t = 1)]
    games: u16,

    /// Seed for random openings and random engines.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Start from a layout file instead of the standard position.
    #[arg(long)]
    layout: Option<std::path::PathBuf>,

    /// Only offer captures when one is available.
    #[arg(long)]
    mandatory_capture: bool,

    /// Print the board after every ply.
    #[arg(long, short)]
    verbose: bool,
}

fn build_engine<G>(kind: PlayerKind, generator: G, search: SearchConfig, seed: u64) -> Box<dyn Engine>
where
    G: MoveGenerator + 'static,
{
    match kind {
        PlayerKind::Iterative => Box::new(IterativeEngine::with_parts(
            search,
            generator,
            FeatureScorer::default(),
        )),
        PlayerKind::Random => Box::new(RandomEngine::with_generator(generator, Some(seed))),
    }
}

fn run<G>(cli: &Cli, generator: G) -> Result<()>
where
    G: MoveGenerator + Copy + 'static,
{
    let search = SearchConfig {
        max_depth: cli.depth,
        time_budget: Duration::from_millis(cli.time_ms),
    };
    let config = MatchConfig {
        max_plies: cli.max_plies,
        opening_plies: cli.opening_plies,
        verbose: cli.verbose,
    };

    if cli.games > 1 {
        let stats = play_engine_match_series(
            || build_engine(cli.light, generator, search, cli.seed),
            || build_engine(cli.dark, generator, search, cli.seed.wrapping_add(1)),
            &generator,
            cli.games,
            cli.seed,
            &config,
        )?;
        println!("{}", stats.report());
        println!("outcomes: {:?}", stats.outcomes);
        return Ok(());
    }

    let mut light = build_engine(cli.light, generator, search, cli.seed);
    let mut dark = build_engine(cli.dark, generator, search, cli.seed.wrapping_add(1));
    info!("{} (light) vs {} (dark)", light.name(), dark.name());

    let result = match &cli.layout {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read layout {}", path.display()))?;
            let start = GameState::from_layout(&text)
                .with_context(|| format!("failed to parse layout {}", path.display()))?;
            play_engine_match_from_state(light.as_mut(), dark.as_mut(), &generator, start, &config)?
        }
        None => play_engine_match(light.as_mut(), dark.as_mut(), &generator, cli.seed, &config)?,
    };

    println!("{}\n", result.final_state);
    println!(
        "outcome: {:?} after {} plies ({} opening)",
        result.outcome,
        result.played_moves.len(),
        result.opening_moves.len()
    );
    for (color, moves, time_ns) in [
        ("light", result.light_move_count, result.light_total_time_ns),
        ("dark", result.dark_move_count, result.dark_total_time_ns),
    ] {
        if moves > 0 {
            println!(
                "{color}: {moves} moves, {:.3} ms per move",
                time_ns as f64 / f64::from(moves) / 1_000_000.0
            );
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if cli.mandatory_capture {
        run(
            &cli,
            MandatoryCaptureGenerator {
                inner: LegalMoveGenerator,
            },
        )
    } else {
        run(&cli, LegalMoveGenerator)
    }
}
