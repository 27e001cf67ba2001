//! Full legal move generation pipeline.
//!
//! Simple steps and capture chains for the side to move. Captures are not
//! mandatory, so both kinds coexist in the output. Every prefix of a capture
//! chain is emitted as its own move, ending on that prefix's landing tile.

use crate::game_state::draughts_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::{direction_vectors, Direction, NO_DIRECTION};
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::draughts_move::{CapturedPiece, DraughtsMove};

#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<DraughtsMove> {
        generate_all_moves(game_state)
    }

    fn generate_moves_for_tile(&self, game_state: &GameState, tile: Square) -> Vec<DraughtsMove> {
        generate_moves_for_tile(game_state, tile)
    }
}

/// All legal moves for the side to move, in tile order.
pub fn generate_all_moves(game_state: &GameState) -> Vec<DraughtsMove> {
    let side = game_state.side_to_move();
    let mut out = Vec::with_capacity(32);
    for (tile, piece) in game_state.occupied_tiles() {
        if piece.is_owned_by(side) {
            generate_into(game_state, tile, piece, &mut out);
        }
    }
    out
}

/// Legal moves of the piece on `tile`. Empty or foreign tiles yield nothing.
pub fn generate_moves_for_tile(game_state: &GameState, tile: Square) -> Vec<DraughtsMove> {
    let piece = game_state.piece_at(tile);
    let mut out = Vec::new();
    if piece.is_owned_by(game_state.side_to_move()) {
        generate_into(game_state, tile, piece, &mut out);
    }
    out
}

/// Whether the side to move has at least one legal move.
pub fn has_legal_move(game_state: &GameState) -> bool {
    let side = game_state.side_to_move();
    game_state.occupied_tiles().any(|(tile, piece)| {
        piece.is_owned_by(side) && {
            let mut found = Vec::new();
            generate_into(game_state, tile, piece, &mut found);
            !found.is_empty()
        }
    })
}

fn generate_into(game_state: &GameState, origin: Square, piece: Piece, out: &mut Vec<DraughtsMove>) {
    for dir in direction_vectors(piece, NO_DIRECTION) {
        let Some(step) = offset_square(origin, dir.0, dir.1, 1) else {
            continue;
        };
        let step_piece = game_state.piece_at(step);

        if step_piece.is_empty() {
            push_unique(
                out,
                DraughtsMove::simple(origin, step, promotes(piece, step)),
            );
            continue;
        }
        if !step_piece.enemy(piece) {
            continue;
        }

        let Some(landing) = offset_square(step, dir.0, dir.1, 1) else {
            continue;
        };
        if !game_state.piece_at(landing).is_empty() {
            continue;
        }

        let captured = vec![CapturedPiece::from_piece(step, step_piece)];
        push_unique(
            out,
            DraughtsMove::new(origin, landing, captured.iter().copied(), promotes(piece, landing)),
        );
        extend_chain(
            game_state,
            piece,
            origin,
            landing,
            dir,
            &captured,
            1u64 << origin,
            out,
        );
    }
}

/// Continue a capture chain from `current`.
///
/// `path` is a bitmask of tiles already stood on during this chain; a tile is
/// never expanded twice, which bounds the recursion on cyclic jump patterns.
#[allow(clippy::too_many_arguments)]
fn extend_chain(
    game_state: &GameState,
    piece: Piece,
    origin: Square,
    current: Square,
    arrived_by: Direction,
    captured: &[CapturedPiece],
    path: u64,
    out: &mut Vec<DraughtsMove>,
) {
    let current_mask = 1u64 << current;
    if path & current_mask != 0 {
        return;
    }
    let path = path | current_mask;

    for dir in direction_vectors(piece, arrived_by) {
        let Some(over) = offset_square(current, dir.0, dir.1, 1) else {
            continue;
        };
        let over_piece = game_state.piece_at(over);
        if !over_piece.enemy(piece) || captured.iter().any(|c| c.tile == over) {
            continue;
        }

        let Some(landing) = offset_square(over, dir.0, dir.1, 1) else {
            continue;
        };
        if !game_state.piece_at(landing).is_empty() {
            continue;
        }

        let mut chain = captured.to_vec();
        chain.push(CapturedPiece::from_piece(over, over_piece));
        push_unique(
            out,
            DraughtsMove::new(origin, landing, chain.iter().copied(), promotes(piece, landing)),
        );
        extend_chain(game_state, piece, origin, landing, dir, &chain, path, out);
    }
}

#[inline]
fn promotes(piece: Piece, landing: Square) -> bool {
    match piece {
        Piece::Occupied {
            color,
            rank: Rank::Base,
        } => row_of(landing) == color.promotion_row(),
        _ => false,
    }
}

#[inline]
fn push_unique(out: &mut Vec<DraughtsMove>, mv: DraughtsMove) {
    if !out.contains(&mv) {
        out.push(mv);
    }
}
