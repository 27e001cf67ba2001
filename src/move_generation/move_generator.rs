use crate::game_state::draughts_types::Square;
use crate::game_state::game_state::GameState;
use crate::moves::draughts_move::DraughtsMove;

/// Source of legal moves for search, perft, and engines.
///
/// Generation never fails: an empty or foreign-owned tile simply yields no moves.
pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<DraughtsMove>;

    fn generate_moves_for_tile(&self, game_state: &GameState, tile: Square) -> Vec<DraughtsMove> {
        self.generate_legal_moves(game_state)
            .into_iter()
            .filter(|mv| mv.start() == tile)
            .collect()
    }
}

/// Generator that only offers captures when any exist.
///
/// The default rules leave captures optional; this variant is available for
/// rule sets that make them mandatory.
#[derive(Debug, Clone, Copy, Default)]
pub struct MandatoryCaptureGenerator<G> {
    pub inner: G,
}

impl<G: MoveGenerator> MoveGenerator for MandatoryCaptureGenerator<G> {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<DraughtsMove> {
        let moves = self.inner.generate_legal_moves(game_state);
        if moves.iter().any(DraughtsMove::is_capture) {
            moves.into_iter().filter(DraughtsMove::is_capture).collect()
        } else {
            moves
        }
    }
}
