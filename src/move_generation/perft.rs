//! Perft node counting over the in-place do/undo tree.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{do_move, undo_move};
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub multi_captures: usize,
    pub promotions: usize,
}

pub fn perft<G: MoveGenerator>(generator: &G, game_state: &GameState, depth: u8) -> PerftCounts {
    let mut working = game_state.clone();
    let mut total = PerftCounts::default();
    if depth == 0 {
        total.nodes = 1;
        return total;
    }
    perft_recurse(generator, &mut working, depth, &mut total);
    total
}

/// Perft with the standard rule set.
pub fn perft_legal(game_state: &GameState, depth: u8) -> PerftCounts {
    perft(&LegalMoveGenerator, game_state, depth)
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    game_state: &mut GameState,
    depth: u8,
    counts: &mut PerftCounts,
) {
    let moves = generator.generate_legal_moves(game_state);

    if depth == 1 {
        for mv in &moves {
            counts.nodes += 1;
            if mv.is_capture() {
                counts.captures += 1;
            }
            if mv.captured().len() > 1 {
                counts.multi_captures += 1;
            }
            if mv.promoted() {
                counts.promotions += 1;
            }
        }
        return;
    }

    for mv in &moves {
        do_move(game_state, mv);
        perft_recurse(generator, game_state, depth - 1, counts);
        undo_move(game_state, mv);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let counts = perft_legal(&GameState::new_game(), 0);
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn start_position_shallow_counts() {
        let game = GameState::new_game();
        assert_eq!(perft_legal(&game, 1).nodes, 7);
        assert_eq!(perft_legal(&game, 1).captures, 0);
        assert_eq!(perft_legal(&game, 2).nodes, 49);
    }

    #[test]
    fn perft_leaves_input_untouched() {
        let game = GameState::new_game();
        let _ = perft_legal(&game, 3);
        assert_eq!(game, GameState::new_game());
    }

    #[test]
    fn perft_counts_promotions_and_chains() {
        let game = GameState::from_layout(
            "........
             ..l.....
             ........
             ........
             ........
             ..d.....
             .l......
             ........
             light",
        )
        .expect("layout should parse");
        let counts = perft_legal(&game, 1);
        // (1,2): two promoting steps. (6,1): one step, one capture.
        assert_eq!(counts.nodes, 4);
        assert_eq!(counts.promotions, 2);
        assert_eq!(counts.captures, 1);
        assert_eq!(counts.multi_captures, 0);
    }
}
