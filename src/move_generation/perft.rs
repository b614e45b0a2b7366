//! Move-path enumeration for validating the rule engine.
//!
//! Walks every legal line to a fixed depth with make/undo on a forked state
//! and tallies what the leaf moves were.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::Winner;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

pub fn perft(game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return Ok(counts);
    }

    let mut scratch = game_state.fork();
    perft_recurse(&mut scratch, depth, &mut counts)?;
    Ok(counts)
}

fn perft_recurse(state: &mut GameState, depth: u8, counts: &mut PerftCounts) -> ChessResult<()> {
    for mv in state.legal_moves() {
        state.make_move(&mv)?;

        if depth == 1 {
            counts.nodes += 1;
            if mv.is_capture() {
                counts.captures += 1;
            }
            if mv.is_castling {
                counts.castles += 1;
            }
            if mv.promotion.is_some() {
                counts.promotions += 1;
            }
            if state.is_in_check(state.current_player()) {
                counts.checks += 1;
            }
            if matches!(state.winner(), Some(Winner::Side(_))) {
                counts.checkmates += 1;
            }
        } else {
            perft_recurse(state, depth - 1, counts)?;
        }

        state.undo_move();
    }
    Ok(())
}
