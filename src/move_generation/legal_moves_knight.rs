use crate::game_state::board::Board;
use crate::game_state::chess_move::Move;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{push_step_moves, KNIGHT_OFFSETS};

pub fn generate_knight_moves(board: &Board, from: Square, knight: Piece, out: &mut Vec<Move>) {
    push_step_moves(board, from, knight, &KNIGHT_OFFSETS, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knight_jumps_over_pieces_but_not_onto_friends() {
        let board = Board::standard();
        let b1 = Square::new(7, 1);
        let knight = board.piece_at(b1).expect("knight on b1");
        let mut moves = Vec::new();
        generate_knight_moves(&board, b1, knight, &mut moves);
        let mut targets: Vec<String> = moves.iter().map(|m| m.to.to_string()).collect();
        targets.sort();
        assert_eq!(targets, vec!["a3", "c3"]);
    }
}
