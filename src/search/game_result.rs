//! Game result classification.

use std::fmt;

use crate::game_state::draughts_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::has_legal_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    InProgress,
    Draw,
    LightWon,
    DarkWon,
}

impl GameResult {
    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    #[inline]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameResult::LightWon => Some(Color::Light),
            GameResult::DarkWon => Some(Color::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::InProgress => write!(f, "in progress"),
            GameResult::Draw => write!(f, "draw"),
            GameResult::LightWon => write!(f, "light won"),
            GameResult::DarkWon => write!(f, "dark won"),
        }
    }
}

/// Classify `game_state`. A side left without pieces loses; a side to move
/// with pieces but no legal move draws.
pub fn state_result(game_state: &GameState) -> GameResult {
    if game_state.total_light() == 0 {
        return GameResult::DarkWon;
    }
    if game_state.total_dark() == 0 {
        return GameResult::LightWon;
    }
    if !has_legal_move(game_state) {
        return GameResult::Draw;
    }
    GameResult::InProgress
}

#[inline]
pub fn is_terminal(game_state: &GameState) -> bool {
    state_result(game_state).is_over()
}
