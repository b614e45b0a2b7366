//! Alpha-beta minimax engine with a configurable depth and time budget.

use tracing::{info, warn};

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::engines::time_management::SearchConfig;
use crate::game_state::chess_move::Move;
use crate::game_state::game_state::GameState;
use crate::search::alpha_beta::alpha_beta_search;
use crate::search::board_scoring::{BoardScorer, PositionalScorer};

pub struct MinimaxEngine<S: BoardScorer = PositionalScorer> {
    config: SearchConfig,
    scorer: S,
    nodes_evaluated: u64,
}

impl MinimaxEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_scorer(config, PositionalScorer)
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl<S: BoardScorer> MinimaxEngine<S> {
    pub fn with_scorer(config: SearchConfig, scorer: S) -> Self {
        Self {
            config,
            scorer,
            nodes_evaluated: 0,
        }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Nodes visited by the most recent search.
    pub fn nodes_evaluated(&self) -> u64 {
        self.nodes_evaluated
    }

    /// Best move for the side to move, or `None` when there is none or the
    /// budget ran out before the first candidate finished.
    pub fn find_best_move(&mut self, game_state: &GameState) -> ChessResult<Option<Move>> {
        Ok(self.choose_move(game_state)?.best_move)
    }

    /// Clamp the depth to the supported range and rederive the time budget.
    pub fn apply_difficulty(&mut self, depth: i64) -> SearchConfig {
        self.config = SearchConfig::for_difficulty(depth);
        info!(
            requested = depth,
            depth = self.config.depth,
            time_limit_ms = self.config.time_limit.as_millis() as u64,
            "difficulty changed"
        );
        self.config
    }
}

impl<S: BoardScorer> Engine for MinimaxEngine<S> {
    fn name(&self) -> &str {
        "Minimax"
    }

    fn new_game(&mut self) {
        self.nodes_evaluated = 0;
    }

    fn set_difficulty(&mut self, depth: i64) {
        self.apply_difficulty(depth);
    }

    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<EngineOutput> {
        let result = alpha_beta_search(game_state, &self.scorer, self.config)?;
        self.nodes_evaluated = result.nodes;

        if result.best_move.is_none() && !game_state.is_game_over() {
            warn!(timed_out = result.timed_out, "no move found");
        }

        Ok(EngineOutput {
            best_move: result.best_move.clone(),
            report: Some(result),
        })
    }
}
