//! Engine abstraction used by the game session.
//!
//! Different move-selection strategies sit behind a single trait so the
//! session can swap the main engine and its fallback freely.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_move::Move;
use crate::game_state::game_state::GameState;
use crate::search::alpha_beta::SearchResult;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    /// Search statistics, when the engine searched at all.
    pub report: Option<SearchResult>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Requested search depth. Engines that do not search ignore it.
    fn set_difficulty(&mut self, _depth: i64) {}

    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<EngineOutput>;
}
