//! Uniform random legal-move engine.
//!
//! Used as the session's fallback when the search comes back empty-handed,
//! and handy for driving games in tests.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::game_state::GameState;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Reproducible sequence of picks for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<EngineOutput> {
        let legal_moves = game_state.legal_moves();
        let picked = legal_moves.as_slice().choose(&mut self.rng).cloned();
        Ok(EngineOutput {
            best_move: picked,
            report: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn picks_only_legal_moves() {
        let mut engine = RandomEngine::with_seed(7);
        let mut state = GameState::new_game();
        for _ in 0..20 {
            if state.is_game_over() {
                break;
            }
            let legal = state.legal_moves();
            let picked = engine
                .choose_move(&state)
                .expect("random engine never fails")
                .best_move
                .expect("a legal move exists");
            assert!(legal.contains(&picked));
            state.make_move(&picked).expect("legal move applies");
        }
    }

    #[test]
    fn same_seed_same_choice() {
        let state = GameState::new_game();
        let a = RandomEngine::with_seed(42).choose_move(&state).expect("ok").best_move;
        let b = RandomEngine::with_seed(42).choose_move(&state).expect("ok").best_move;
        assert_eq!(a, b);
    }

    #[test]
    fn no_move_when_game_is_over() {
        let state = parse_fen("7k/5K2/6Q1/8/8/8/8/8 b -").expect("valid fen");
        let out = RandomEngine::with_seed(1).choose_move(&state).expect("ok");
        assert!(out.best_move.is_none());
        assert!(out.report.is_none());
    }
}
