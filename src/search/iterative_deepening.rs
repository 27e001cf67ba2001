//! Iterative deepening search with minimax alpha-beta pruning.
//!
//! The whole tree is walked over a single `GameState` cloned once at the root,
//! descending with `do_move` and backtracking with `undo_move`. Light is the
//! maximizing side. Every recursive entry polls the deadline; running out of
//! time abandons the depth in progress, and only the last fully searched depth
//! is reported.

use std::time::{Duration, Instant};

use log::{debug, info, warn};
use thiserror::Error;

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{do_move, undo_move};
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::draughts_move::DraughtsMove;
use crate::search::board_scoring::{BoardScorer, FeatureScorer};
use crate::search::game_result::{state_result, GameResult};

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub max_depth: u8,
    pub time_budget: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 5,
            time_budget: Duration::from_secs(5),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    pub best_move: Option<DraughtsMove>,
    pub best_score: f64,
    pub reached_depth: u8,
    pub nodes: u64,
    pub cutoffs: u64,
    pub elapsed_ms: u64,
    pub timed_out: bool,
}

/// Raised when the deadline passes mid-depth. Never leaves this module.
#[derive(Debug, Error)]
#[error("search time budget exhausted")]
struct SearchInterrupted;

type SearchStep<T> = Result<T, SearchInterrupted>;

struct Searcher<'a, G, S> {
    generator: &'a G,
    scorer: &'a S,
    deadline: Option<Instant>,
    target_depth: u8,
    nodes: u64,
    cutoffs: u64,
}

/// Best move for the side to move with the default generator and scorer.
///
/// `None` means the position is terminal, or not even depth 1 finished in time.
pub fn get_next_best_move(
    game_state: &GameState,
    side_is_maximizing: bool,
    config: SearchConfig,
) -> Option<DraughtsMove> {
    iterative_deepening_search(
        game_state,
        side_is_maximizing,
        &LegalMoveGenerator,
        &FeatureScorer::default(),
        config,
    )
    .best_move
}

pub fn iterative_deepening_search<G: MoveGenerator, S: BoardScorer>(
    game_state: &GameState,
    side_is_maximizing: bool,
    generator: &G,
    scorer: &S,
    config: SearchConfig,
) -> SearchResult {
    let started_at = Instant::now();
    let deadline = started_at.checked_add(config.time_budget);
    let mut root_state = game_state.clone();
    let mut result = SearchResult::default();

    for depth in 1..=config.max_depth {
        let mut searcher = Searcher {
            generator,
            scorer,
            deadline,
            target_depth: depth,
            nodes: 0,
            cutoffs: 0,
        };

        match searcher.search_root(&mut root_state, side_is_maximizing) {
            Ok((best_move, best_score)) => {
                debug!(
                    "depth {depth} done: score {best_score} nodes {} cutoffs {} after {} ms",
                    searcher.nodes,
                    searcher.cutoffs,
                    started_at.elapsed().as_millis()
                );
                let terminal_root = best_move.is_none();
                result.best_move = best_move;
                result.best_score = best_score;
                result.reached_depth = depth;
                result.nodes += searcher.nodes;
                result.cutoffs += searcher.cutoffs;
                if terminal_root {
                    break;
                }
            }
            Err(SearchInterrupted) => {
                debug!(
                    "depth {depth} abandoned after {} nodes: time budget of {:?} exhausted",
                    searcher.nodes, config.time_budget
                );
                result.nodes += searcher.nodes;
                result.timed_out = true;
                break;
            }
        }
    }

    debug_assert_eq!(&root_state, game_state, "search must leave the root intact");
    result.elapsed_ms = started_at.elapsed().as_millis() as u64;

    match &result.best_move {
        Some(mv) => info!(
            "best move {mv} score {} depth {} nodes {} in {} ms",
            result.best_score, result.reached_depth, result.nodes, result.elapsed_ms
        ),
        None if result.reached_depth == 0 && config.max_depth > 0 => {
            warn!("search could not finish depth 1 within {:?}", config.time_budget)
        }
        None => debug!("no move: root position is terminal"),
    }

    result
}

/// Alpha-beta to a fixed depth with no time limit. Returns the root move and value.
pub fn alpha_beta_search<G: MoveGenerator, S: BoardScorer>(
    game_state: &GameState,
    depth: u8,
    side_is_maximizing: bool,
    generator: &G,
    scorer: &S,
) -> (Option<DraughtsMove>, f64) {
    let mut searcher = Searcher {
        generator,
        scorer,
        deadline: None,
        target_depth: depth,
        nodes: 0,
        cutoffs: 0,
    };
    let mut root_state = game_state.clone();
    match searcher.search_root(&mut root_state, side_is_maximizing) {
        Ok(found) => found,
        Err(SearchInterrupted) => unreachable!("search without a deadline cannot time out"),
    }
}

/// Plain minimax without pruning; the reference value for alpha-beta.
pub fn minimax_value<G: MoveGenerator, S: BoardScorer>(
    game_state: &mut GameState,
    depth: u8,
    maximizing: bool,
    generator: &G,
    scorer: &S,
) -> f64 {
    if let Some(value) = leaf_value(game_state, depth == 0, scorer) {
        return value;
    }
    let moves = generator.generate_legal_moves(game_state);
    if moves.is_empty() {
        return 0.0;
    }

    let mut best = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };
    for mv in &moves {
        do_move(game_state, mv);
        let value = minimax_value(game_state, depth - 1, !maximizing, generator, scorer);
        undo_move(game_state, mv);
        best = if maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }
    best
}

impl<G: MoveGenerator, S: BoardScorer> Searcher<'_, G, S> {
    fn check_deadline(&self) -> SearchStep<()> {
        match self.deadline {
            Some(limit) if Instant::now() >= limit => Err(SearchInterrupted),
            _ => Ok(()),
        }
    }

    fn search_root(
        &mut self,
        game_state: &mut GameState,
        maximizing: bool,
    ) -> SearchStep<(Option<DraughtsMove>, f64)> {
        self.check_deadline()?;
        self.nodes += 1;

        if self.target_depth == 0 {
            return Ok((None, horizon_value(game_state, self.scorer)));
        }
        if let Some(value) = terminal_value(state_result(game_state)) {
            return Ok((None, value));
        }
        let moves = self.generator.generate_legal_moves(game_state);
        if moves.is_empty() {
            return Ok((None, 0.0));
        }

        let mut alpha = f64::NEG_INFINITY;
        let mut beta = f64::INFINITY;
        let mut best_move: Option<DraughtsMove> = None;
        let mut best_score = if maximizing { alpha } else { beta };

        for mv in moves {
            do_move(game_state, &mv);
            let score = self.alpha_beta(game_state, 1, alpha, beta, !maximizing);
            undo_move(game_state, &mv);
            let score = score?;

            let improves = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if improves || best_move.is_none() {
                best_score = score;
                best_move = Some(mv);
            }
            if maximizing {
                alpha = alpha.max(best_score);
            } else {
                beta = beta.min(best_score);
            }
        }

        Ok((best_move, best_score))
    }

    fn alpha_beta(
        &mut self,
        game_state: &mut GameState,
        depth: u8,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> SearchStep<f64> {
        self.check_deadline()?;
        self.nodes += 1;

        if let Some(value) = leaf_value(game_state, depth >= self.target_depth, self.scorer) {
            return Ok(value);
        }
        let moves = self.generator.generate_legal_moves(game_state);
        if moves.is_empty() {
            return Ok(0.0);
        }

        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        for mv in &moves {
            do_move(game_state, mv);
            let score = self.alpha_beta(game_state, depth + 1, alpha, beta, !maximizing);
            undo_move(game_state, mv);
            let score = score?;

            if maximizing {
                best = best.max(score);
                if best >= beta {
                    self.cutoffs += 1;
                    break;
                }
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                if best <= alpha {
                    self.cutoffs += 1;
                    break;
                }
                beta = beta.min(best);
            }
        }

        Ok(best)
    }
}

/// Won/lost/drawn positions score ±infinity/0 regardless of depth; otherwise
/// the scorer is consulted only once the horizon is reached.
fn leaf_value<S: BoardScorer>(game_state: &GameState, at_horizon: bool, scorer: &S) -> Option<f64> {
    if game_state.total_light() == 0 {
        return Some(f64::NEG_INFINITY);
    }
    if game_state.total_dark() == 0 {
        return Some(f64::INFINITY);
    }
    if !at_horizon {
        return None;
    }
    Some(horizon_value(game_state, scorer))
}

/// Value of a position searched no further.
fn horizon_value<S: BoardScorer>(game_state: &GameState, scorer: &S) -> f64 {
    terminal_value(state_result(game_state)).unwrap_or_else(|| scorer.score(game_state))
}

fn terminal_value(result: GameResult) -> Option<f64> {
    match result {
        GameResult::LightWon => Some(f64::INFINITY),
        GameResult::DarkWon => Some(f64::NEG_INFINITY),
        GameResult::Draw => Some(0.0),
        GameResult::InProgress => None,
    }
}
