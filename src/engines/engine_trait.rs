//! Engine abstraction layer used by the match harness and the CLI.
//!
//! Different move-selection strategies sit behind a single trait so players
//! can be chosen at runtime.

use crate::errors::DraughtsResult;
use crate::game_state::game_state::GameState;
use crate::moves::draughts_move::DraughtsMove;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// `None` when the side to move has nothing to play, or the engine ran
    /// out of time before finding anything.
    pub best_move: Option<DraughtsMove>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(&mut self, game_state: &GameState) -> DraughtsResult<EngineOutput>;
}
