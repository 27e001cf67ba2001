//! Random-move engine.
//!
//! Selects uniformly from legal moves and is primarily used for diagnostics,
//! integration testing, and low-strength gameplay.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::DraughtsResult;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

pub struct RandomEngine<G = LegalMoveGenerator> {
    move_generator: G,
    rng: Option<StdRng>,
}

impl RandomEngine<LegalMoveGenerator> {
    /// Draws from the thread-local generator.
    pub fn new() -> Self {
        Self::with_generator(LegalMoveGenerator, None)
    }

    /// Reproducible move choices for tests and seeded matches.
    pub fn seeded(seed: u64) -> Self {
        Self::with_generator(LegalMoveGenerator, Some(seed))
    }
}

impl Default for RandomEngine<LegalMoveGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: MoveGenerator> RandomEngine<G> {
    pub fn with_generator(move_generator: G, seed: Option<u64>) -> Self {
        Self {
            move_generator,
            rng: seed.map(StdRng::seed_from_u64),
        }
    }
}

impl<G: MoveGenerator> Engine for RandomEngine<G> {
    fn name(&self) -> &str {
        "PlumDraughts Random"
    }

    fn choose_move(&mut self, game_state: &GameState) -> DraughtsResult<EngineOutput> {
        let legal_moves = self.move_generator.generate_legal_moves(game_state);

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("picked from {} legal moves", legal_moves.len()));

        let picked = match self.rng.as_mut() {
            Some(rng) => legal_moves.choose(rng),
            None => legal_moves.choose(&mut rand::rng()),
        };
        out.best_move = picked.cloned();
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_a_legal_move() {
        let game = GameState::new_game();
        let legal = game.get_all_turn_moves();
        let out = RandomEngine::new()
            .choose_move(&game)
            .expect("random engine should not fail");
        assert_eq!(out.info_lines, vec!["picked from 7 legal moves".to_owned()]);
        let picked = out.best_move.expect("start position has moves");
        assert!(legal.contains(&picked));
    }

    #[test]
    fn same_seed_same_choices() {
        let game = GameState::new_game();
        let mut a = RandomEngine::seeded(7);
        let mut b = RandomEngine::seeded(7);
        for _ in 0..5 {
            let left = a.choose_move(&game).expect("ok").best_move;
            let right = b.choose_move(&game).expect("ok").best_move;
            assert_eq!(left, right);
        }
    }

    #[test]
    fn no_moves_yields_none() {
        let game = GameState::from_layout(
            "........
             ........
             ........
             ........
             ........
             ........
             .d......
             l.l.....
             dark",
        )
        .expect("layout should parse");
        let out = RandomEngine::seeded(1).choose_move(&game).expect("ok");
        assert!(out.best_move.is_none());
    }
}
