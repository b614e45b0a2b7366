//! Depth-bounded minimax with alpha-beta pruning.
//!
//! Scores are always taken from the perspective of the side that started the
//! search. Every explored move is applied to a forked copy of its parent, so
//! the caller's state is never mutated. Time is checked cooperatively before
//! each candidate at every ply.

use std::time::Duration;

use tracing::{debug, info};

use crate::chess_errors::ChessResult;
use crate::engines::time_management::{SearchConfig, TimeBudget};
use crate::game_state::chess_move::Move;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::{BoardScorer, MATE_SCORE, SCORE_INFINITY};
use crate::search::move_ordering::order_moves;
use crate::search::repetition::RepetitionTable;

/// Extra plies searched when the side to move starts in check.
pub const CHECK_EXTENSION: u8 = 2;

#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: i32,
    /// Depth actually used, including any check extension.
    pub depth: u8,
    pub nodes: u64,
    pub elapsed: Duration,
    /// True when the budget ran out before every root move was searched.
    pub timed_out: bool,
}

struct Searcher<'a, S: BoardScorer> {
    scorer: &'a S,
    perspective: Color,
    budget: TimeBudget,
    nodes: u64,
}

pub fn alpha_beta_search<S: BoardScorer>(
    game_state: &GameState,
    scorer: &S,
    config: SearchConfig,
) -> ChessResult<SearchResult> {
    let budget = TimeBudget::start(config.time_limit);
    let repetition = RepetitionTable::from_recent_history(game_state);

    let side = game_state.current_player();
    let mut moves = game_state.legal_moves();
    order_moves(game_state.board(), &mut moves);

    let depth = if game_state.is_in_check(side) {
        config.depth + CHECK_EXTENSION
    } else {
        config.depth
    };
    debug!(
        candidates = moves.len(),
        depth,
        in_check = depth != config.depth,
        "search started"
    );

    let mut searcher = Searcher {
        scorer,
        perspective: side,
        budget,
        nodes: 0,
    };

    let mut result = SearchResult {
        best_score: -SCORE_INFINITY,
        depth,
        ..SearchResult::default()
    };
    let mut alpha = -SCORE_INFINITY;
    let beta = SCORE_INFINITY;

    for mv in moves {
        if searcher.budget.is_exhausted() {
            result.timed_out = true;
            break;
        }

        let mut child = game_state.fork();
        child.make_move(&mv)?;

        let mut value = searcher.minimax(&child, depth.saturating_sub(1), alpha, beta, false)?;
        value -= repetition.penalty(child.board());

        if value > result.best_score {
            result.best_score = value;
            result.best_move = Some(mv);
        }
        alpha = alpha.max(value);
    }

    result.nodes = searcher.nodes;
    result.elapsed = searcher.budget.elapsed();

    match &result.best_move {
        Some(mv) => info!(
            best = %mv,
            score = result.best_score,
            nodes = result.nodes,
            elapsed_ms = result.elapsed.as_millis() as u64,
            timed_out = result.timed_out,
            "search finished"
        ),
        None => info!(
            nodes = result.nodes,
            timed_out = result.timed_out,
            "search finished without a move"
        ),
    }

    Ok(result)
}

impl<S: BoardScorer> Searcher<'_, S> {
    fn evaluate(&self, state: &GameState) -> i32 {
        self.scorer.score(state.board(), self.perspective)
    }

    fn minimax(
        &mut self,
        state: &GameState,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> ChessResult<i32> {
        if self.budget.is_exhausted() {
            return Ok(self.evaluate(state));
        }

        self.nodes += 1;

        if depth == 0 || state.is_game_over() {
            return Ok(self.evaluate(state));
        }

        let side = state.current_player();
        let mut moves = state.legal_moves();
        if moves.is_empty() {
            if state.is_in_check(side) {
                return Ok(if maximizing { -MATE_SCORE } else { MATE_SCORE });
            }
            return Ok(0);
        }
        order_moves(state.board(), &mut moves);

        if maximizing {
            let mut best = -SCORE_INFINITY;
            for mv in &moves {
                let mut child = state.fork();
                child.make_move(mv)?;
                let value = self.minimax(&child, depth - 1, alpha, beta, false)?;
                best = best.max(value);
                alpha = alpha.max(value);
                if beta <= alpha {
                    break;
                }
            }
            Ok(best)
        } else {
            let mut best = SCORE_INFINITY;
            for mv in &moves {
                let mut child = state.fork();
                child.make_move(mv)?;
                let value = self.minimax(&child, depth - 1, alpha, beta, true)?;
                best = best.min(value);
                beta = beta.min(value);
                if beta <= alpha {
                    break;
                }
            }
            Ok(best)
        }
    }
}
