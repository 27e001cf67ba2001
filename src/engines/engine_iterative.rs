//! Iterative deepening alpha-beta engine.
//!
//! Thin adapter from the `Engine` trait onto
//! `search::iterative_deepening`: Light maximizes, Dark minimizes.

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::DraughtsResult;
use crate::game_state::draughts_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::search::board_scoring::{BoardScorer, FeatureScorer};
use crate::search::iterative_deepening::{iterative_deepening_search, SearchConfig};

pub struct IterativeEngine<G = LegalMoveGenerator, S = FeatureScorer> {
    config: SearchConfig,
    move_generator: G,
    scorer: S,
}

impl IterativeEngine<LegalMoveGenerator, FeatureScorer> {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_parts(config, LegalMoveGenerator, FeatureScorer::default())
    }
}

impl Default for IterativeEngine<LegalMoveGenerator, FeatureScorer> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl<G: MoveGenerator, S: BoardScorer> IterativeEngine<G, S> {
    pub fn with_parts(config: SearchConfig, move_generator: G, scorer: S) -> Self {
        Self {
            config,
            move_generator,
            scorer,
        }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }
}

impl<G: MoveGenerator, S: BoardScorer> Engine for IterativeEngine<G, S> {
    fn name(&self) -> &str {
        "PlumDraughts Iterative"
    }

    fn choose_move(&mut self, game_state: &GameState) -> DraughtsResult<EngineOutput> {
        let maximizing = game_state.side_to_move() == Color::Light;
        let result = iterative_deepening_search(
            game_state,
            maximizing,
            &self.move_generator,
            &self.scorer,
            self.config,
        );

        let mut out = EngineOutput {
            best_move: result.best_move,
            info_lines: Vec::new(),
        };
        out.info_lines.push(format!(
            "reached depth {}, score {}, {} nodes, {} cutoffs in {} ms",
            result.reached_depth, result.best_score, result.nodes, result.cutoffs, result.elapsed_ms
        ));
        if result.timed_out {
            out.info_lines.push(format!(
                "time budget of {} ms exhausted before depth {}",
                self.config.time_budget.as_millis(),
                result.reached_depth + 1
            ));
        }

        Ok(out)
    }
}
