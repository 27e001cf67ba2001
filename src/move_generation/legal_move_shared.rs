use crate::game_state::draughts_types::*;

/// Diagonal step as `(d_row, d_col)`.
pub type Direction = (i8, i8);

/// Sentinel for "no previous jump", used outside capture chains.
pub const NO_DIRECTION: Direction = (0, 0);

/// Legal step directions for `piece`, forward pair first.
///
/// `arrived_by` is the jump that led into the current tile; its exact reverse
/// is left out so a chain cannot bounce straight back over the same diagonal.
/// Base pieces never see that reverse in their list anyway.
pub fn direction_vectors(piece: Piece, arrived_by: Direction) -> Vec<Direction> {
    let Some(color) = piece.color() else {
        return Vec::new();
    };
    let forward = color.forward();
    let reverse = (-arrived_by.0, -arrived_by.1);

    let mut candidates = vec![(forward, 1), (forward, -1)];
    if piece.is_queen() {
        candidates.push((-forward, 1));
        candidates.push((-forward, -1));
    }

    candidates.retain(|dir| arrived_by == NO_DIRECTION || *dir != reverse);
    candidates
}
