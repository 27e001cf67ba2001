//! Text layout parser and generator.
//!
//! Eight board lines, row 0 first, then a side-to-move line:
//!
//! ```text
//! .d.d.d.d
//! ........
//! ...
//! light
//! ```
//!
//! `.` is empty, `l`/`L` Light base/queen, `d`/`D` Dark base/queen. Leading
//! and trailing whitespace on each line and blank lines are ignored. Pieces
//! must stand on playable squares (`row + col` odd), and a base piece can
//! never stand on the row where it would have been promoted.

use crate::errors::{DraughtsError, DraughtsResult};
use crate::game_state::draughts_rules::{BOARD_COLS, BOARD_ROWS};
use crate::game_state::draughts_types::*;
use crate::game_state::game_state::GameState;

pub fn parse_layout(layout: &str) -> DraughtsResult<GameState> {
    let lines: Vec<&str> = layout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let expected = BOARD_ROWS as usize + 1;
    if lines.len() != expected {
        return Err(DraughtsError::layout(format!(
            "expected {expected} non-empty lines, found {}",
            lines.len()
        )));
    }

    let mut game_state = GameState::new_empty();
    for (row, line) in lines[..BOARD_ROWS as usize].iter().enumerate() {
        let cells: Vec<char> = line.chars().collect();
        if cells.len() != BOARD_COLS as usize {
            return Err(DraughtsError::layout(format!(
                "row {row} has {} cells instead of {BOARD_COLS}",
                cells.len()
            )));
        }
        for (col, ch) in cells.into_iter().enumerate() {
            let piece = piece_from_char(ch).ok_or_else(|| {
                DraughtsError::layout(format!("invalid piece character '{ch}' at ({row}, {col})"))
            })?;
            let Some(color) = piece.color() else {
                continue;
            };
            let square = square_at(row as u8, col as u8);
            if !is_playable(square) {
                return Err(DraughtsError::layout(format!(
                    "piece '{ch}' at ({row}, {col}) is on an unplayable square"
                )));
            }
            if piece.is_base() && row as u8 == color.promotion_row() {
                return Err(DraughtsError::layout(format!(
                    "base piece '{ch}' at ({row}, {col}) already stands on its promotion row"
                )));
            }
            game_state.place_piece(square, piece);
        }
    }

    let side = lines[BOARD_ROWS as usize];
    game_state.set_side_to_move(match side.to_ascii_lowercase().as_str() {
        "light" | "l" => Color::Light,
        "dark" | "d" => Color::Dark,
        _ => {
            return Err(DraughtsError::layout(format!(
                "invalid side to move '{side}'"
            )))
        }
    });

    Ok(game_state)
}

pub fn generate_layout(game_state: &GameState) -> String {
    let mut out = String::with_capacity(80);
    for row in 0..BOARD_ROWS {
        for col in 0..BOARD_COLS {
            out.push(piece_to_char(game_state.piece_at(square_at(row, col))));
        }
        out.push('\n');
    }
    out.push_str(&game_state.side_to_move().to_string());
    out
}

fn piece_from_char(ch: char) -> Option<Piece> {
    match ch {
        '.' => Some(Piece::Empty),
        'l' => Some(Piece::base(Color::Light)),
        'L' => Some(Piece::queen(Color::Light)),
        'd' => Some(Piece::base(Color::Dark)),
        'D' => Some(Piece::queen(Color::Dark)),
        _ => None,
    }
}

fn piece_to_char(piece: Piece) -> char {
    match piece {
        Piece::Empty => '.',
        Piece::Occupied { color, rank } => match (color, rank) {
            (Color::Light, Rank::Base) => 'l',
            (Color::Light, Rank::Queen) => 'L',
            (Color::Dark, Rank::Base) => 'd',
            (Color::Dark, Rank::Queen) => 'D',
        },
    }
}
