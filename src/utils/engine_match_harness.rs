//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other, with an optional
//! seeded random opening prefix so repeated games do not all follow the same
//! line.

use log::{debug, info, warn};
use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Instant;

use crate::engines::engine_trait::Engine;
use crate::errors::{DraughtsError, DraughtsResult};
use crate::game_state::draughts_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::do_move;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::draughts_move::DraughtsMove;
use crate::search::game_result::{state_result, GameResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    LightWon,
    DarkWon,
    /// The side to move was blocked.
    Draw,
    DrawMaxPlies,
}

impl MatchOutcome {
    pub fn winner(self) -> Option<Color> {
        match self {
            MatchOutcome::LightWon => Some(Color::Light),
            MatchOutcome::DarkWon => Some(Color::Dark),
            MatchOutcome::Draw | MatchOutcome::DrawMaxPlies => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    /// Random plies played before the engines take over. Zero disables.
    pub opening_plies: u8,
    /// Print the board after every ply.
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            opening_plies: 0,
            verbose: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub opening_moves: Vec<DraughtsMove>,
    pub played_moves: Vec<DraughtsMove>,
    pub light_move_count: u32,
    pub dark_move_count: u32,
    pub light_total_time_ns: u128,
    pub dark_total_time_ns: u128,
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<MatchOutcome>,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={}",
            self.games, self.player1_wins, self.player2_wins, self.draws
        )
    }
}

/// Play a single seeded engine-vs-engine match from the standard start.
pub fn play_engine_match<G: MoveGenerator>(
    engine_light: &mut dyn Engine,
    engine_dark: &mut dyn Engine,
    generator: &G,
    seed: u64,
    config: &MatchConfig,
) -> DraughtsResult<MatchResult> {
    let mut state = GameState::new_game();
    let opening_moves = apply_seeded_random_opening(&mut state, generator, seed, config.opening_plies);
    play_from(state, opening_moves, engine_light, engine_dark, generator, config)
}

/// Play a match from a caller-provided state, skipping the random opening.
pub fn play_engine_match_from_state<G: MoveGenerator>(
    engine_light: &mut dyn Engine,
    engine_dark: &mut dyn Engine,
    generator: &G,
    start_state: GameState,
    config: &MatchConfig,
) -> DraughtsResult<MatchResult> {
    play_from(start_state, Vec::new(), engine_light, engine_dark, generator, config)
}

/// Play `games` matches, alternating which player takes Light.
pub fn play_engine_match_series<G, F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    generator: &G,
    games: u16,
    base_seed: u64,
    config: &MatchConfig,
) -> DraughtsResult<MatchSeriesStats>
where
    G: MoveGenerator,
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games,
        ..MatchSeriesStats::default()
    };

    for game in 0..games {
        let player1_is_light = game % 2 == 0;
        let seed = base_seed.wrapping_add(u64::from(game));
        let mut player1 = player1_factory();
        let mut player2 = player2_factory();

        let result = if player1_is_light {
            play_engine_match(player1.as_mut(), player2.as_mut(), generator, seed, config)?
        } else {
            play_engine_match(player2.as_mut(), player1.as_mut(), generator, seed, config)?
        };

        match result.outcome.winner() {
            Some(Color::Light) if player1_is_light => stats.player1_wins += 1,
            Some(Color::Dark) if !player1_is_light => stats.player1_wins += 1,
            Some(_) => stats.player2_wins += 1,
            None => stats.draws += 1,
        }
        stats.outcomes.push(result.outcome);
        info!(
            "game {}/{games} seed {seed}: {:?} ({})",
            game + 1,
            result.outcome,
            stats.report()
        );
    }

    Ok(stats)
}

fn play_from<G: MoveGenerator>(
    mut state: GameState,
    opening_moves: Vec<DraughtsMove>,
    engine_light: &mut dyn Engine,
    engine_dark: &mut dyn Engine,
    generator: &G,
    config: &MatchConfig,
) -> DraughtsResult<MatchResult> {
    engine_light.new_game();
    engine_dark.new_game();
    debug!(
        "match {} (light) vs {} (dark), max {} plies",
        engine_light.name(),
        engine_dark.name(),
        config.max_plies
    );

    let mut result = MatchResult {
        outcome: MatchOutcome::DrawMaxPlies,
        final_state: state.clone(),
        opening_moves,
        played_moves: Vec::new(),
        light_move_count: 0,
        dark_move_count: 0,
        light_total_time_ns: 0,
        dark_total_time_ns: 0,
    };

    for _ in 0..config.max_plies {
        if let Some(outcome) = finished(state_result(&state)) {
            result.outcome = outcome;
            result.final_state = state;
            return Ok(result);
        }

        let mover = state.side_to_move();
        let engine: &mut dyn Engine = match mover {
            Color::Light => &mut *engine_light,
            Color::Dark => &mut *engine_dark,
        };
        let started = Instant::now();
        let out = engine.choose_move(&state)?;
        let elapsed_ns = started.elapsed().as_nanos();
        for line in &out.info_lines {
            debug!("{} {line}", engine.name());
        }

        match mover {
            Color::Light => {
                result.light_move_count = result.light_move_count.saturating_add(1);
                result.light_total_time_ns = result.light_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Dark => {
                result.dark_move_count = result.dark_move_count.saturating_add(1);
                result.dark_total_time_ns = result.dark_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let legal_moves = generator.generate_legal_moves(&state);
        let chosen = match out.best_move {
            Some(mv) => mv,
            None => {
                warn!("{} returned no move, playing the first legal move", engine.name());
                legal_moves.first().cloned().ok_or(DraughtsError::NoLegalMoves)?
            }
        };
        if !legal_moves.contains(&chosen) {
            return Err(DraughtsError::IllegalMove { mv: chosen });
        }

        do_move(&mut state, &chosen);
        if config.verbose {
            println!("{mover} plays {chosen}\n{state}\n");
        }
        result.played_moves.push(chosen);
    }

    result.outcome = finished(state_result(&state)).unwrap_or(MatchOutcome::DrawMaxPlies);
    result.final_state = state;
    Ok(result)
}

fn finished(status: GameResult) -> Option<MatchOutcome> {
    match status {
        GameResult::InProgress => None,
        GameResult::Draw => Some(MatchOutcome::Draw),
        GameResult::LightWon => Some(MatchOutcome::LightWon),
        GameResult::DarkWon => Some(MatchOutcome::DarkWon),
    }
}

/// Plays up to `plies` uniformly random moves, stopping early if the game ends.
fn apply_seeded_random_opening<G: MoveGenerator>(
    state: &mut GameState,
    generator: &G,
    seed: u64,
    plies: u8,
) -> Vec<DraughtsMove> {
    if plies == 0 {
        return Vec::new();
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let target = rng.random_range(1..=plies);
    let mut opening = Vec::with_capacity(usize::from(target));

    for _ in 0..target {
        let legal_moves = generator.generate_legal_moves(state);
        let Some(mv) = legal_moves.choose(&mut rng) else {
            break;
        };
        do_move(state, mv);
        opening.push(mv.clone());
    }

    opening
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_iterative::IterativeEngine;
    use crate::engines::engine_random::RandomEngine;
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;
    use crate::search::iterative_deepening::SearchConfig;
    use std::time::Duration;

    #[test]
    fn random_match_is_reproducible() {
        let config = MatchConfig {
            max_plies: 60,
            opening_plies: 4,
            verbose: false,
        };
        let run = || {
            play_engine_match(
                &mut RandomEngine::seeded(11),
                &mut RandomEngine::seeded(12),
                &LegalMoveGenerator,
                3,
                &config,
            )
            .expect("match should complete")
        };
        let first = run();
        let second = run();

        assert!(!first.opening_moves.is_empty());
        assert!(first.opening_moves.len() <= 4);
        assert_eq!(first.opening_moves, second.opening_moves);
        assert_eq!(first.played_moves, second.played_moves);
        assert_eq!(first.outcome, second.outcome);
        assert!(first.played_moves.len() <= 60);
        assert_eq!(first.final_state.census(), first.final_state.counts());
    }

    #[test]
    fn searcher_converts_a_won_endgame() {
        let start = GameState::from_layout(
            "........
             ........
             ........
             ........
             ...d....
             ....l...
             ........
             ......l.
             light",
        )
        .expect("layout should parse");
        let mut light = IterativeEngine::new(SearchConfig {
            max_depth: 3,
            time_budget: Duration::from_secs(10),
        });
        let mut dark = RandomEngine::seeded(5);
        let result = play_engine_match_from_state(
            &mut light,
            &mut dark,
            &LegalMoveGenerator,
            start,
            &MatchConfig::default(),
        )
        .expect("match should complete");

        assert_eq!(result.outcome, MatchOutcome::LightWon);
        assert_eq!(result.played_moves.len(), 1);
        assert_eq!(result.light_move_count, 1);
        assert_eq!(result.dark_move_count, 0);
    }

    #[test]
    fn ply_limit_is_reported() {
        let config = MatchConfig {
            max_plies: 2,
            ..MatchConfig::default()
        };
        let result = play_engine_match(
            &mut RandomEngine::seeded(1),
            &mut RandomEngine::seeded(2),
            &LegalMoveGenerator,
            0,
            &config,
        )
        .expect("match should complete");
        assert_eq!(result.outcome, MatchOutcome::DrawMaxPlies);
        assert_eq!(result.played_moves.len(), 2);
    }

    #[test]
    fn series_tallies_every_game() {
        let config = MatchConfig {
            max_plies: 40,
            opening_plies: 2,
            verbose: false,
        };
        let stats = play_engine_match_series(
            || Box::new(RandomEngine::seeded(21)) as Box<dyn Engine>,
            || Box::new(RandomEngine::seeded(22)) as Box<dyn Engine>,
            &LegalMoveGenerator,
            4,
            100,
            &config,
        )
        .expect("series should complete");
        assert_eq!(stats.outcomes.len(), 4);
        assert_eq!(stats.player1_wins + stats.player2_wins + stats.draws, 4);
    }
}
