//! Interactive game session with validated moves and undo history.
//!
//! Front ends (the CLI, a GUI, a test driver) talk to this type rather than
//! calling `do_move` directly, so a move that is not legal in the current
//! position comes back as an error instead of corrupting the board.

use log::trace;

use crate::errors::{DraughtsError, DraughtsResult};
use crate::game_state::draughts_rules::BOARD_SQUARES;
use crate::game_state::draughts_types::Square;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{do_move, undo_move};
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::draughts_move::DraughtsMove;
use crate::search::game_result::{state_result, GameResult};

#[derive(Debug, Clone)]
pub struct GameSession<G = LegalMoveGenerator> {
    state: GameState,
    history: Vec<DraughtsMove>,
    generator: G,
}

impl GameSession<LegalMoveGenerator> {
    pub fn new() -> Self {
        Self::from_state(GameState::new_game())
    }

    pub fn from_state(state: GameState) -> Self {
        Self::with_generator(state, LegalMoveGenerator)
    }
}

impl Default for GameSession<LegalMoveGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: MoveGenerator> GameSession<G> {
    pub fn with_generator(state: GameState, generator: G) -> Self {
        Self {
            state,
            history: Vec::new(),
            generator,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Moves played so far, oldest first.
    pub fn history(&self) -> &[DraughtsMove] {
        &self.history
    }

    pub fn result(&self) -> GameResult {
        state_result(&self.state)
    }

    pub fn legal_moves(&self) -> Vec<DraughtsMove> {
        self.generator.generate_legal_moves(&self.state)
    }

    /// Moves starting on `tile`; used to highlight reachable destinations.
    pub fn moves_for_tile(&self, tile: usize) -> DraughtsResult<Vec<DraughtsMove>> {
        let tile = checked_tile(tile)?;
        Ok(self.generator.generate_moves_for_tile(&self.state, tile))
    }

    /// Moves from `start` that land on `destination`. Several capture chains
    /// can share both endpoints, so the caller may have to disambiguate.
    pub fn moves_to(&self, start: usize, destination: usize) -> DraughtsResult<Vec<DraughtsMove>> {
        let destination = checked_tile(destination)?;
        Ok(self
            .moves_for_tile(start)?
            .into_iter()
            .filter(|mv| mv.destination() == destination)
            .collect())
    }

    pub fn play(&mut self, mv: &DraughtsMove) -> DraughtsResult<GameResult> {
        if self.result().is_over() {
            return Err(DraughtsError::NoLegalMoves);
        }
        if !self.legal_moves().contains(mv) {
            return Err(DraughtsError::IllegalMove { mv: mv.clone() });
        }

        trace!("{} plays {mv}", self.state.side_to_move());
        do_move(&mut self.state, mv);
        self.history.push(mv.clone());
        Ok(self.result())
    }

    /// Take back the most recent move and return it.
    pub fn undo_last(&mut self) -> DraughtsResult<DraughtsMove> {
        let mv = self.history.pop().ok_or(DraughtsError::NothingToUndo)?;
        undo_move(&mut self.state, &mv);
        trace!("took back {mv}, {} to move", self.state.side_to_move());
        Ok(mv)
    }
}

fn checked_tile(tile: usize) -> DraughtsResult<Square> {
    if tile >= BOARD_SQUARES {
        return Err(DraughtsError::TileOutOfBounds { tile });
    }
    Ok(tile as Square)
}
