//! Full-ply move record.
//!
//! A `DraughtsMove` covers one whole turn: a simple step, or a capture chain of
//! one or more jumps. Each captured tile keeps the piece that stood there so
//! undo can put it back exactly.

use std::fmt;

use crate::game_state::draughts_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CapturedPiece {
    pub tile: Square,
    pub color: Color,
    pub rank: Rank,
}

impl CapturedPiece {
    /// Record the piece on `tile`. Panics if the tile is empty.
    pub fn from_piece(tile: Square, piece: Piece) -> Self {
        match piece {
            Piece::Occupied { color, rank } => Self { tile, color, rank },
            Piece::Empty => panic!("cannot record a capture on empty tile {tile}"),
        }
    }

    #[inline]
    pub const fn piece(&self) -> Piece {
        Piece::Occupied {
            color: self.color,
            rank: self.rank,
        }
    }
}

/// Captured tiles are kept sorted by tile, so the derived equality and hash
/// treat them as a set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DraughtsMove {
    start: Square,
    destination: Square,
    captured: Vec<CapturedPiece>,
    promoted: bool,
}

impl DraughtsMove {
    pub fn new(
        start: Square,
        destination: Square,
        captured: impl IntoIterator<Item = CapturedPiece>,
        promoted: bool,
    ) -> Self {
        let mut captured: Vec<CapturedPiece> = captured.into_iter().collect();
        captured.sort_unstable();
        captured.dedup_by_key(|c| c.tile);
        Self {
            start,
            destination,
            captured,
            promoted,
        }
    }

    #[inline]
    pub fn simple(start: Square, destination: Square, promoted: bool) -> Self {
        Self::new(start, destination, [], promoted)
    }

    #[inline]
    pub fn start(&self) -> Square {
        self.start
    }

    #[inline]
    pub fn destination(&self) -> Square {
        self.destination
    }

    #[inline]
    pub fn captured(&self) -> &[CapturedPiece] {
        &self.captured
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }

    #[inline]
    pub fn promoted(&self) -> bool {
        self.promoted
    }

    #[inline]
    pub fn captures_tile(&self, tile: Square) -> bool {
        self.captured.binary_search_by_key(&tile, |c| c.tile).is_ok()
    }
}

impl fmt::Display for DraughtsMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) -> ({}, {})",
            row_of(self.start),
            col_of(self.start),
            row_of(self.destination),
            col_of(self.destination)
        )?;
        if !self.captured.is_empty() {
            write!(f, " x")?;
            for c in &self.captured {
                write!(f, " ({}, {})", row_of(c.tile), col_of(c.tile))?;
            }
        }
        if self.promoted {
            write!(f, " promoted")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(tile: Square) -> CapturedPiece {
        CapturedPiece::from_piece(tile, Piece::base(Color::Dark))
    }

    #[test]
    fn capture_order_does_not_affect_equality() {
        let a = DraughtsMove::new(40, 8, [capture(33), capture(17)], false);
        let b = DraughtsMove::new(40, 8, [capture(17), capture(33)], false);
        assert_eq!(a, b);
    }

    #[test]
    fn promoted_flag_is_part_of_identity() {
        let a = DraughtsMove::simple(10, 1, true);
        let b = DraughtsMove::simple(10, 1, false);
        assert_ne!(a, b);
    }

    #[test]
    fn captured_rank_is_part_of_identity() {
        let base = DraughtsMove::new(40, 26, [capture(33)], false);
        let queen = DraughtsMove::new(
            40,
            26,
            [CapturedPiece::from_piece(33, Piece::queen(Color::Dark))],
            false,
        );
        assert_ne!(base, queen);
    }

    #[test]
    fn display_lists_coordinates() {
        let mv = DraughtsMove::new(
            square_at(2, 3),
            square_at(0, 5),
            [CapturedPiece::from_piece(square_at(1, 4), Piece::base(Color::Dark))],
            true,
        );
        assert_eq!(mv.to_string(), "(2, 3) -> (0, 5) x (1, 4) promoted");
    }

    #[test]
    fn captures_tile_uses_sorted_records() {
        let mv = DraughtsMove::new(40, 8, [capture(33), capture(17)], false);
        assert!(mv.captures_tile(17));
        assert!(mv.captures_tile(33));
        assert!(!mv.captures_tile(24));
    }
}
