//! Core incremental board state representation.
//!
//! `GameState` is the central model for the engine. It stores the 64 tiles,
//! the side to move, and per-color piece/queen counters that are updated
//! incrementally by every placement, capture, promotion, and undo so that
//! make/unmake never needs to rescan the board.

use std::fmt;

use crate::errors::DraughtsResult;
use crate::game_state::draughts_rules::*;
use crate::game_state::draughts_types::*;
use crate::move_generation::legal_move_apply;
use crate::move_generation::legal_move_generator;
use crate::moves::draughts_move::DraughtsMove;
use crate::search::game_result::{self, GameResult};
use crate::utils::layout::{generate_layout, parse_layout};
use crate::utils::render_game_state::render_game_state;

/// Live piece census for both colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PieceCounts {
    pub total_light: u8,
    pub light_queens: u8,
    pub total_dark: u8,
    pub dark_queens: u8,
}

impl PieceCounts {
    #[inline]
    pub const fn total(&self, color: Color) -> u8 {
        match color {
            Color::Light => self.total_light,
            Color::Dark => self.total_dark,
        }
    }

    #[inline]
    pub const fn queens(&self, color: Color) -> u8 {
        match color {
            Color::Light => self.light_queens,
            Color::Dark => self.dark_queens,
        }
    }
}

/// Incremental game state optimized for in-place move making/unmaking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    tiles: [Piece; BOARD_SQUARES],
    side_to_move: Color,
    counts: PieceCounts,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            tiles: [Piece::Empty; BOARD_SQUARES],
            side_to_move: Color::Light,
            counts: PieceCounts::default(),
        }
    }
}

impl GameState {
    /// Empty board, Light to move.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting layout: Dark on rows 0-2, Light on rows 5-7, playable squares only.
    pub fn new_game() -> Self {
        let mut state = Self::new_empty();
        for square in 0..BOARD_SQUARES as Square {
            if !is_playable(square) {
                continue;
            }
            let row = row_of(square);
            if DARK_START_ROWS.contains(&row) {
                state.place_piece(square, Piece::base(Color::Dark));
            } else if LIGHT_START_ROWS.contains(&row) {
                state.place_piece(square, Piece::base(Color::Light));
            }
        }
        state
    }

    #[inline]
    pub fn from_layout(layout: &str) -> DraughtsResult<Self> {
        parse_layout(layout)
    }

    #[inline]
    pub fn get_layout(&self) -> String {
        generate_layout(self)
    }

    // --- Read accessors ---

    /// Piece on `tile`. Panics when `tile` is outside `[0, 64)`.
    #[inline]
    pub fn piece_at(&self, tile: Square) -> Piece {
        assert_on_board(tile as usize);
        self.tiles[tile as usize]
    }

    /// Piece at `(row, col)`, `None` when off the board.
    #[inline]
    pub fn piece_at_coords(&self, row: i8, col: i8) -> Option<Piece> {
        if (0..BOARD_ROWS as i8).contains(&row) && (0..BOARD_COLS as i8).contains(&col) {
            Some(self.tiles[row as usize * BOARD_COLS as usize + col as usize])
        } else {
            None
        }
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn counts(&self) -> PieceCounts {
        self.counts
    }

    #[inline]
    pub fn total_light(&self) -> u8 {
        self.counts.total_light
    }

    #[inline]
    pub fn light_queens(&self) -> u8 {
        self.counts.light_queens
    }

    #[inline]
    pub fn total_dark(&self) -> u8 {
        self.counts.total_dark
    }

    #[inline]
    pub fn dark_queens(&self) -> u8 {
        self.counts.dark_queens
    }

    /// Occupied tiles in index order.
    pub fn occupied_tiles(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, piece)| !piece.is_empty())
            .map(|(square, piece)| (square as Square, *piece))
    }

    /// Recount pieces by scanning the whole board. Used to verify the incremental counters.
    pub fn census(&self) -> PieceCounts {
        let mut counts = PieceCounts::default();
        for (_, piece) in self.occupied_tiles() {
            bump_counts(&mut counts, piece, 1);
        }
        counts
    }

    // --- Command operations ---

    pub fn generate_moves_for_tile(&self, tile: Square) -> Vec<DraughtsMove> {
        legal_move_generator::generate_moves_for_tile(self, tile)
    }

    pub fn get_all_turn_moves(&self) -> Vec<DraughtsMove> {
        legal_move_generator::generate_all_moves(self)
    }

    pub fn do_move(&mut self, mv: &DraughtsMove) {
        legal_move_apply::do_move(self, mv);
    }

    pub fn undo_move(&mut self, mv: &DraughtsMove) {
        legal_move_apply::undo_move(self, mv);
    }

    pub fn state_result(&self) -> GameResult {
        game_result::state_result(self)
    }

    pub fn is_terminal(&self) -> bool {
        game_result::is_terminal(self)
    }

    // --- Setup ---

    /// Put `piece` on an empty `tile`, keeping the counters in step.
    pub fn place_piece(&mut self, tile: Square, piece: Piece) {
        assert_on_board(tile as usize);
        assert!(
            self.tiles[tile as usize].is_empty(),
            "tile {tile} is already occupied"
        );
        bump_counts(&mut self.counts, piece, 1);
        self.tiles[tile as usize] = piece;
    }

    #[inline]
    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    // --- Mutation primitives for do/undo ---

    /// Clear `tile` and return what was there.
    pub(crate) fn remove_piece(&mut self, tile: Square) -> Piece {
        assert_on_board(tile as usize);
        let piece = self.tiles[tile as usize];
        bump_counts(&mut self.counts, piece, -1);
        self.tiles[tile as usize].set_empty();
        piece
    }

    /// Relocate a piece without touching the counters.
    pub(crate) fn relocate_piece(&mut self, from: Square, to: Square) {
        assert_on_board(from as usize);
        assert_on_board(to as usize);
        let piece = self.tiles[from as usize];
        assert!(!piece.is_empty(), "no piece on tile {from} to relocate");
        assert!(
            self.tiles[to as usize].is_empty(),
            "tile {to} is already occupied"
        );
        self.tiles[to as usize] = piece;
        self.tiles[from as usize].set_empty();
    }

    pub(crate) fn promote_at(&mut self, tile: Square) {
        assert_on_board(tile as usize);
        let piece = &mut self.tiles[tile as usize];
        piece.promote();
        match piece.color() {
            Some(Color::Light) => self.counts.light_queens += 1,
            Some(Color::Dark) => self.counts.dark_queens += 1,
            None => unreachable!("promote succeeded on an empty tile"),
        }
    }

    pub(crate) fn demote_at(&mut self, tile: Square) {
        assert_on_board(tile as usize);
        let piece = &mut self.tiles[tile as usize];
        piece.demote();
        match piece.color() {
            Some(Color::Light) => self.counts.light_queens -= 1,
            Some(Color::Dark) => self.counts.dark_queens -= 1,
            None => unreachable!("demote succeeded on an empty tile"),
        }
    }

    #[inline]
    pub(crate) fn change_turn_color(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
    }
}

fn bump_counts(counts: &mut PieceCounts, piece: Piece, delta: i8) {
    let Piece::Occupied { color, rank } = piece else {
        return;
    };
    let (total, queens) = match color {
        Color::Light => (&mut counts.total_light, &mut counts.light_queens),
        Color::Dark => (&mut counts.total_dark, &mut counts.dark_queens),
    };
    adjust_counter(total, delta, color, "piece");
    if rank == Rank::Queen {
        adjust_counter(queens, delta, color, "queen");
    }
}

fn adjust_counter(counter: &mut u8, delta: i8, color: Color, what: &str) {
    *counter = counter
        .checked_add_signed(delta)
        .unwrap_or_else(|| panic!("{color} {what} counter out of range: {counter} {delta:+}"));
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render_game_state(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_has_twelve_base_pieces_per_side() {
        let game = GameState::new_game();
        assert_eq!(
            game.counts(),
            PieceCounts {
                total_light: 12,
                light_queens: 0,
                total_dark: 12,
                dark_queens: 0,
            }
        );
        assert_eq!(game.side_to_move(), Color::Light);
        assert_eq!(game.census(), game.counts());
        assert_eq!(game.counts().total(Color::Dark), 12);
        assert_eq!(game.counts().queens(Color::Light), 0);
    }

    #[test]
    fn new_game_only_uses_playable_squares() {
        let game = GameState::new_game();
        for (square, piece) in game.occupied_tiles() {
            assert!(is_playable(square), "piece on unplayable square {square}");
            if row_of(square) <= 2 {
                assert!(piece.is_dark());
            } else {
                assert!(piece.is_light());
            }
        }
    }

    #[test]
    fn place_and_remove_track_counters() {
        let mut game = GameState::new_empty();
        game.place_piece(square_at(3, 2), Piece::queen(Color::Dark));
        game.place_piece(square_at(4, 5), Piece::base(Color::Light));
        assert_eq!(game.dark_queens(), 1);
        assert_eq!(game.total_dark(), 1);
        assert_eq!(game.total_light(), 1);

        let removed = game.remove_piece(square_at(3, 2));
        assert_eq!(removed, Piece::queen(Color::Dark));
        assert_eq!(game.dark_queens(), 0);
        assert_eq!(game.total_dark(), 0);
        assert_eq!(game.census(), game.counts());
    }

    #[test]
    fn promote_and_demote_adjust_queen_counter() {
        let mut game = GameState::new_empty();
        let tile = square_at(0, 1);
        game.place_piece(tile, Piece::base(Color::Light));
        game.promote_at(tile);
        assert_eq!(game.light_queens(), 1);
        game.demote_at(tile);
        assert_eq!(game.light_queens(), 0);
        assert_eq!(game.total_light(), 1);
    }

    #[test]
    #[should_panic(expected = "dark queen counter out of range")]
    fn counter_underflow_panics() {
        let mut counts = PieceCounts {
            total_dark: 1,
            ..PieceCounts::default()
        };
        bump_counts(&mut counts, Piece::queen(Color::Dark), -1);
    }

    #[test]
    fn counters_track_queens_per_color() {
        let mut counts = PieceCounts::default();
        bump_counts(&mut counts, Piece::queen(Color::Light), 1);
        bump_counts(&mut counts, Piece::base(Color::Dark), 1);
        assert_eq!(counts.total(Color::Light), 1);
        assert_eq!(counts.queens(Color::Light), 1);
        assert_eq!(counts.total(Color::Dark), 1);
        assert_eq!(counts.queens(Color::Dark), 0);
    }

    #[test]
    #[should_panic(expected = "outside the board")]
    fn piece_at_rejects_out_of_range_tiles() {
        let game = GameState::new_game();
        let _ = game.piece_at(64);
    }

    #[test]
    fn piece_at_coords_returns_none_off_board() {
        let game = GameState::new_game();
        assert_eq!(game.piece_at_coords(-1, 0), None);
        assert_eq!(game.piece_at_coords(0, 8), None);
        assert_eq!(game.piece_at_coords(0, 1), Some(Piece::base(Color::Dark)));
    }
}
