use crate::game_state::board::Board;
use crate::game_state::chess_move::Move;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{push_sliding_moves, QUEEN_DIRECTIONS};

pub fn generate_queen_moves(board: &Board, from: Square, queen: Piece, out: &mut Vec<Move>) {
    push_sliding_moves(board, from, queen, &QUEEN_DIRECTIONS, out);
}
