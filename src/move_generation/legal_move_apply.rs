//! In-place make/unmake.
//!
//! `do_move` and `undo_move` are exact inverses: tiles, counters, and side to
//! move all come back. Search walks the whole tree over one `GameState` with
//! these two calls instead of cloning per node.

use crate::game_state::game_state::GameState;
use crate::moves::draughts_move::DraughtsMove;

/// Apply `mv` to `game_state`.
///
/// Panics when the start tile does not hold a piece of the side to move; a
/// move is only valid against the position it was generated from.
pub fn do_move(game_state: &mut GameState, mv: &DraughtsMove) {
    let side = game_state.side_to_move();
    let moving = game_state.piece_at(mv.start());
    assert!(
        moving.is_owned_by(side),
        "move {mv} starts on {moving:?}, which is not a {side} piece"
    );

    game_state.relocate_piece(mv.start(), mv.destination());
    if mv.promoted() {
        game_state.promote_at(mv.destination());
    }

    for captured in mv.captured() {
        let removed = game_state.remove_piece(captured.tile);
        debug_assert_eq!(
            removed,
            captured.piece(),
            "captured tile {} held something else",
            captured.tile
        );
    }

    game_state.change_turn_color();
}

/// Revert `mv`, which must be the last move applied to `game_state`.
pub fn undo_move(game_state: &mut GameState, mv: &DraughtsMove) {
    let mover = game_state.side_to_move().opposite();
    let moved = game_state.piece_at(mv.destination());
    assert!(
        moved.is_owned_by(mover),
        "cannot undo {mv}: destination holds {moved:?}, expected a {mover} piece"
    );

    for captured in mv.captured() {
        game_state.place_piece(captured.tile, captured.piece());
    }
    if mv.promoted() {
        game_state.demote_at(mv.destination());
    }
    game_state.relocate_piece(mv.destination(), mv.start());

    game_state.change_turn_color();
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::seq::IndexedRandom;
    use rand::SeedableRng;

    use super::*;
    use crate::game_state::draughts_types::*;
    use crate::move_generation::legal_move_generator::{generate_all_moves, generate_moves_for_tile};

    #[test]
    fn do_then_undo_restores_start_position_for_every_move() {
        let game = GameState::new_game();
        for mv in generate_all_moves(&game) {
            let mut scratch = game.clone();
            do_move(&mut scratch, &mv);
            assert_ne!(scratch, game);
            assert_eq!(scratch.side_to_move(), Color::Dark);
            undo_move(&mut scratch, &mv);
            assert_eq!(scratch, game, "undo failed for {mv}");
        }
    }

    #[test]
    fn capture_chain_updates_counters_and_undoes() {
        let mut game = GameState::from_layout(
            "........
             ........
             ........
             ....D...
             ........
             ..d.....
             .l......
             ........
             light",
        )
        .expect("layout should parse");
        let before = game.clone();
        let chain = generate_moves_for_tile(&game, square_at(6, 1))
            .into_iter()
            .find(|mv| mv.captured().len() == 2)
            .expect("double jump should exist");

        do_move(&mut game, &chain);
        assert_eq!(game.total_dark(), 0);
        assert_eq!(game.dark_queens(), 0);
        assert_eq!(game.piece_at(square_at(2, 5)), Piece::base(Color::Light));
        assert!(game.piece_at(square_at(6, 1)).is_empty());
        assert_eq!(game.census(), game.counts());

        undo_move(&mut game, &chain);
        assert_eq!(game, before);
        assert_eq!(game.piece_at(square_at(3, 4)), Piece::queen(Color::Dark));
    }

    #[test]
    fn promotion_is_applied_and_reverted_once() {
        let mut game = GameState::from_layout(
            "........
             ..l.....
             ........
             ........
             ........
             ........
             ........
             D.......
             light",
        )
        .expect("layout should parse");
        let mv = generate_moves_for_tile(&game, square_at(1, 2))
            .into_iter()
            .next()
            .expect("piece should be able to step");
        assert!(mv.promoted());

        do_move(&mut game, &mv);
        assert_eq!(game.piece_at(mv.destination()), Piece::queen(Color::Light));
        assert_eq!(game.light_queens(), 1);

        undo_move(&mut game, &mv);
        assert_eq!(game.piece_at(square_at(1, 2)), Piece::base(Color::Light));
        assert_eq!(game.light_queens(), 0);
        assert_eq!(game.total_light(), 1);
    }

    #[test]
    #[should_panic(expected = "not a light piece")]
    fn moving_the_wrong_color_panics() {
        let mut game = GameState::new_game();
        let mut dark_view = game.clone();
        dark_view.set_side_to_move(Color::Dark);
        let dark_move = generate_all_moves(&dark_view)
            .into_iter()
            .next()
            .expect("dark has moves");
        do_move(&mut game, &dark_move);
    }

    #[test]
    fn random_playouts_keep_counters_and_inverse_law() {
        for seed in 0..16u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut game = GameState::new_game();
            let mut played = Vec::new();

            for _ in 0..120 {
                let moves = generate_all_moves(&game);
                for mv in &moves {
                    let snapshot = game.clone();
                    do_move(&mut game, mv);
                    assert_eq!(game.census(), game.counts(), "seed {seed} move {mv}");
                    undo_move(&mut game, mv);
                    assert_eq!(game, snapshot, "seed {seed} move {mv}");
                }
                let Some(mv) = moves.choose(&mut rng).cloned() else {
                    break;
                };
                do_move(&mut game, &mv);
                played.push(mv);
            }

            while let Some(mv) = played.pop() {
                undo_move(&mut game, &mv);
            }
            assert_eq!(game, GameState::new_game(), "seed {seed}");
        }
    }
}
