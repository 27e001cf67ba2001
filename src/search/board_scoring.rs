//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Search remains modular by delegating static position scoring to this trait,
//! allowing alternate heuristics to be swapped without altering search code.
//! Scores are from Light's point of view: positive favors Light.

use crate::game_state::draughts_rules::{BOARD_COLS, BOARD_ROWS};
use crate::game_state::draughts_types::*;
use crate::game_state::game_state::GameState;

pub trait BoardScorer: Send + Sync {
    /// Static score of a non-terminal position, positive favors Light.
    fn score(&self, game_state: &GameState) -> f64;
}

pub const FEATURE_COUNT: usize = 8;

/// Per-color feature tallies.
///
/// | slot | feature |
/// |---|---|
/// | 0 | base pieces |
/// | 1 | queens |
/// | 2 | pieces on the home row (also counted as protected) |
/// | 3 | pieces in the central box, rows 3-4 and cols 2-5 |
/// | 4 | pieces on rows 3-4 outside the box |
/// | 5 | pieces the opponent can capture right now (queens 1.5) |
/// | 6 | pieces with both rear diagonals covered (queens 2) |
/// | 7 | enemy pieces this piece can capture (queens 1.5) |
pub type FeatureVector = [f64; FEATURE_COUNT];

pub const DEFAULT_WEIGHTS: FeatureVector = [5.0, 7.5, 4.0, 2.5, 0.5, -3.0, 2.0, 2.5];

const SLOT_BASE: usize = 0;
const SLOT_QUEEN: usize = 1;
const SLOT_HOME_ROW: usize = 2;
const SLOT_CENTER_BOX: usize = 3;
const SLOT_CENTER_ROWS: usize = 4;
const SLOT_VULNERABLE: usize = 5;
const SLOT_PROTECTED: usize = 6;
const SLOT_ATTACKS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureScorer {
    pub weights: FeatureVector,
}

impl Default for FeatureScorer {
    fn default() -> Self {
        Self {
            weights: DEFAULT_WEIGHTS,
        }
    }
}

impl FeatureScorer {
    /// `(light, dark)` feature vectors.
    pub fn feature_vectors(game_state: &GameState) -> (FeatureVector, FeatureVector) {
        let mut light = [0.0; FEATURE_COUNT];
        let mut dark = [0.0; FEATURE_COUNT];

        for (square, piece) in game_state.occupied_tiles() {
            let stats = if piece.is_light() {
                &mut light
            } else {
                &mut dark
            };
            evaluate_piece(game_state, piece, square, stats);
        }

        (light, dark)
    }
}

impl BoardScorer for FeatureScorer {
    fn score(&self, game_state: &GameState) -> f64 {
        let (light, dark) = Self::feature_vectors(game_state);
        self.weights
            .iter()
            .zip(light.iter().zip(dark.iter()))
            .map(|(w, (l, d))| w * (l - d))
            .sum()
    }
}

/// Pure piece-count difference; handy as a baseline and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState) -> f64 {
        let counts = game_state.counts();
        let material =
            |color: Color| f64::from(counts.total(color)) + 0.5 * f64::from(counts.queens(color));
        material(Color::Light) - material(Color::Dark)
    }
}

fn evaluate_piece(game_state: &GameState, piece: Piece, square: Square, stats: &mut FeatureVector) {
    let Some(color) = piece.color() else {
        return;
    };
    let row = row_of(square) as i8;
    let col = col_of(square) as i8;

    if piece.is_base() {
        stats[SLOT_BASE] += 1.0;
    } else {
        stats[SLOT_QUEEN] += 1.0;
    }

    if row == color.home_row() as i8 {
        stats[SLOT_HOME_ROW] += 1.0;
        stats[SLOT_PROTECTED] += 1.0;
        return;
    }

    evaluate_positioning(row, col, stats);
    evaluate_if_can_be_taken(game_state, piece, color, row, col, stats);
    evaluate_protection(game_state, piece, color, row, col, stats);
    evaluate_attack(game_state, piece, color, row, col, stats);
}

fn evaluate_positioning(row: i8, col: i8, stats: &mut FeatureVector) {
    if row == 3 || row == 4 {
        if (2..=5).contains(&col) {
            stats[SLOT_CENTER_BOX] += 1.0;
        } else {
            stats[SLOT_CENTER_ROWS] += 1.0;
        }
    }
}

/// Single-jump threats only; chains are not followed.
fn evaluate_if_can_be_taken(
    game_state: &GameState,
    piece: Piece,
    color: Color,
    row: i8,
    col: i8,
    stats: &mut FeatureVector,
) {
    let last_row = BOARD_ROWS as i8 - 1;
    let last_col = BOARD_COLS as i8 - 1;
    if !(0 < row && row < last_row && 0 < col && col < last_col) {
        return;
    }

    let at = |r: i8, c: i8| game_state.piece_at_coords(r, c).unwrap_or_default();
    // "Ahead" is toward the opponent: enemy bases attack from there.
    let f = color.forward();
    let ahead_left = at(row + f, col - 1);
    let ahead_right = at(row + f, col + 1);
    let behind_left = at(row - f, col - 1);
    let behind_right = at(row - f, col + 1);

    let threatened = (ahead_left.enemy(piece) && behind_right.is_empty())
        || (ahead_right.enemy(piece) && behind_left.is_empty())
        || (behind_left.enemy(piece) && behind_left.is_queen() && ahead_right.is_empty())
        || (behind_right.enemy(piece) && behind_right.is_queen() && ahead_left.is_empty());

    if threatened {
        stats[SLOT_VULNERABLE] += if piece.is_queen() { 1.5 } else { 1.0 };
    }
}

/// Both rear diagonals hold a friend or an enemy base. An enemy queen there
/// could still jump forward over this piece, so it does not count as cover.
fn evaluate_protection(
    game_state: &GameState,
    piece: Piece,
    color: Color,
    row: i8,
    col: i8,
    stats: &mut FeatureVector,
) {
    let behind = row - color.forward();
    let (Some(left), Some(right)) = (
        game_state.piece_at_coords(behind, col - 1),
        game_state.piece_at_coords(behind, col + 1),
    ) else {
        return;
    };

    let covers = |p: Piece| p.friend(piece) || (p.enemy(piece) && p.is_base());
    if covers(left) && covers(right) {
        stats[SLOT_PROTECTED] += if piece.is_queen() { 2.0 } else { 1.0 };
    }
}

fn evaluate_attack(
    game_state: &GameState,
    piece: Piece,
    color: Color,
    row: i8,
    col: i8,
    stats: &mut FeatureVector,
) {
    let f = color.forward();
    let directions: &[(i8, i8)] = if piece.is_queen() {
        &[(-1, -1), (-1, 1), (1, -1), (1, 1)]
    } else {
        &[(f, -1), (f, 1)]
    };

    for &(dr, dc) in directions {
        let (Some(mid), Some(end)) = (
            game_state.piece_at_coords(row + dr, col + dc),
            game_state.piece_at_coords(row + 2 * dr, col + 2 * dc),
        ) else {
            continue;
        };
        if mid.enemy(piece) && end.is_empty() {
            stats[SLOT_ATTACKS] += if mid.is_queen() { 1.5 } else { 1.0 };
        }
    }
}
