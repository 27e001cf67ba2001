//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for the CLI, tests, and diagnostics in
//! text environments. Row 0 (Dark's home row) is printed at the top.

use crate::game_state::draughts_rules::{BOARD_COLS, BOARD_ROWS};
use crate::game_state::draughts_types::*;
use crate::game_state::game_state::GameState;

pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  0 1 2 3 4 5 6 7\n");

    for row in 0..BOARD_ROWS {
        out.push(char::from(b'0' + row));
        out.push(' ');

        for col in 0..BOARD_COLS {
            let square = square_at(row, col);
            out.push(piece_to_unicode(game_state.piece_at(square), is_playable(square)));
            if col < BOARD_COLS - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'0' + row));
        out.push('\n');
    }

    out.push_str("  0 1 2 3 4 5 6 7\n");
    out.push_str(&format!(
        "{} to move | light {} ({} queens) | dark {} ({} queens)",
        game_state.side_to_move(),
        game_state.total_light(),
        game_state.light_queens(),
        game_state.total_dark(),
        game_state.dark_queens()
    ));

    out
}

fn piece_to_unicode(piece: Piece, playable: bool) -> char {
    match piece {
        Piece::Empty if playable => '·',
        Piece::Empty => ' ',
        Piece::Occupied { color, rank } => match (color, rank) {
            (Color::Light, Rank::Base) => '⛀',
            (Color::Light, Rank::Queen) => '⛁',
            (Color::Dark, Rank::Base) => '⛂',
            (Color::Dark, Rank::Queen) => '⛃',
        },
    }
}
