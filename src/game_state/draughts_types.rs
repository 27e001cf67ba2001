//! Core value types shared by the board model, move generation, and search.
//!
//! Tiles are addressed as `row * 8 + col`. Row 0 is Dark's back rank and row 7
//! is Light's back rank, so Light advances toward decreasing rows.

use std::fmt;

use crate::game_state::draughts_rules::{BOARD_COLS, BOARD_ROWS, BOARD_SQUARES};

/// Tile index in `0..64`.
pub type Square = u8;

/// Side to move / owner of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Row delta of a forward step.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }

    /// Row on which a Base piece of this color becomes a Queen.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::Light => 0,
            Color::Dark => BOARD_ROWS - 1,
        }
    }

    /// Row this color starts from and defends.
    #[inline]
    pub const fn home_row(self) -> u8 {
        self.opposite().promotion_row()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => write!(f, "light"),
            Color::Dark => write!(f, "dark"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Base,
    Queen,
}

/// Content of one tile.
///
/// Color and rank only exist on occupied tiles, so an "empty queen" cannot be
/// represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Piece {
    #[default]
    Empty,
    Occupied { color: Color, rank: Rank },
}

impl Piece {
    #[inline]
    pub const fn base(color: Color) -> Self {
        Piece::Occupied {
            color,
            rank: Rank::Base,
        }
    }

    #[inline]
    pub const fn queen(color: Color) -> Self {
        Piece::Occupied {
            color,
            rank: Rank::Queen,
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Piece::Empty)
    }

    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            Piece::Empty => None,
            Piece::Occupied { color, .. } => Some(color),
        }
    }

    #[inline]
    pub const fn rank(self) -> Option<Rank> {
        match self {
            Piece::Empty => None,
            Piece::Occupied { rank, .. } => Some(rank),
        }
    }

    #[inline]
    pub fn is_light(self) -> bool {
        self.color() == Some(Color::Light)
    }

    #[inline]
    pub fn is_dark(self) -> bool {
        self.color() == Some(Color::Dark)
    }

    #[inline]
    pub fn is_base(self) -> bool {
        self.rank() == Some(Rank::Base)
    }

    #[inline]
    pub fn is_queen(self) -> bool {
        self.rank() == Some(Rank::Queen)
    }

    #[inline]
    pub fn is_owned_by(self, color: Color) -> bool {
        self.color() == Some(color)
    }

    /// Both tiles occupied by the same color.
    #[inline]
    pub fn friend(self, other: Piece) -> bool {
        matches!((self.color(), other.color()), (Some(a), Some(b)) if a == b)
    }

    /// Both tiles occupied, by opposite colors.
    #[inline]
    pub fn enemy(self, other: Piece) -> bool {
        matches!((self.color(), other.color()), (Some(a), Some(b)) if a != b)
    }

    pub fn promote(&mut self) {
        match self {
            Piece::Occupied { rank, .. } if *rank == Rank::Base => *rank = Rank::Queen,
            _ => panic!("only a base piece can be promoted, found {self:?}"),
        }
    }

    pub fn demote(&mut self) {
        match self {
            Piece::Occupied { rank, .. } if *rank == Rank::Queen => *rank = Rank::Base,
            _ => panic!("only a queen can be demoted, found {self:?}"),
        }
    }

    #[inline]
    pub fn set_empty(&mut self) {
        *self = Piece::Empty;
    }
}

#[inline]
pub const fn row_of(square: Square) -> u8 {
    square / BOARD_COLS
}

#[inline]
pub const fn col_of(square: Square) -> u8 {
    square % BOARD_COLS
}

#[inline]
pub fn square_at(row: u8, col: u8) -> Square {
    assert!(
        row < BOARD_ROWS && col < BOARD_COLS,
        "({row}, {col}) is outside the board"
    );
    row * BOARD_COLS + col
}

/// Step `steps` times along `(d_row, d_col)`, or `None` when that leaves the board.
#[inline]
pub fn offset_square(square: Square, d_row: i8, d_col: i8, steps: i8) -> Option<Square> {
    let row = row_of(square) as i8 + d_row * steps;
    let col = col_of(square) as i8 + d_col * steps;
    if (0..BOARD_ROWS as i8).contains(&row) && (0..BOARD_COLS as i8).contains(&col) {
        Some(row as u8 * BOARD_COLS + col as u8)
    } else {
        None
    }
}

/// Playable (dark) squares are those where `row + col` is odd.
#[inline]
pub const fn is_playable(square: Square) -> bool {
    (row_of(square) + col_of(square)) % 2 == 1
}

#[inline]
pub fn assert_on_board(square: usize) {
    assert!(
        square < BOARD_SQUARES,
        "tile {square} is outside the board"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn promote_then_demote_restores_base() {
        let mut piece = Piece::base(Color::Dark);
        piece.promote();
        assert_eq!(piece, Piece::queen(Color::Dark));
        piece.demote();
        assert_eq!(piece, Piece::base(Color::Dark));
    }

    #[test]
    #[should_panic(expected = "only a base piece can be promoted")]
    fn promoting_a_queen_panics() {
        let mut piece = Piece::queen(Color::Light);
        piece.promote();
    }

    #[test]
    #[should_panic(expected = "only a queen can be demoted")]
    fn demoting_empty_panics() {
        let mut piece = Piece::Empty;
        piece.demote();
    }

    #[test]
    fn predicates_are_false_on_empty() {
        let empty = Piece::Empty;
        assert!(!empty.is_light());
        assert!(!empty.is_dark());
        assert!(!empty.is_base());
        assert!(!empty.is_queen());
        assert!(!empty.friend(Piece::base(Color::Light)));
        assert!(!empty.enemy(Piece::base(Color::Light)));
        assert!(!Piece::base(Color::Dark).enemy(empty));
    }

    #[test]
    fn friend_and_enemy_ignore_rank() {
        let light = Piece::base(Color::Light);
        assert!(light.friend(Piece::queen(Color::Light)));
        assert!(light.enemy(Piece::queen(Color::Dark)));
        assert!(!light.enemy(Piece::base(Color::Light)));
    }

    #[test]
    fn set_empty_discards_color_and_rank() {
        let mut piece = Piece::queen(Color::Dark);
        piece.set_empty();
        assert!(piece.is_empty());
        assert_eq!(piece.rank(), None);
    }

    #[test]
    fn offset_square_clips_at_edges() {
        assert_eq!(offset_square(square_at(0, 1), -1, 1, 1), None);
        assert_eq!(offset_square(square_at(3, 7), 1, 1, 1), None);
        assert_eq!(offset_square(square_at(3, 4), 1, -1, 2), Some(square_at(5, 2)));
    }

    #[test]
    fn promotion_and_home_rows_face_each_other() {
        assert_eq!(Color::Light.promotion_row(), 0);
        assert_eq!(Color::Dark.promotion_row(), 7);
        assert_eq!(Color::Light.home_row(), 7);
        assert_eq!(Color::Dark.home_row(), 0);
    }
}
