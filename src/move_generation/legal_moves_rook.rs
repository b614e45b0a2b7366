use crate::game_state::board::Board;
use crate::game_state::chess_move::Move;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{push_sliding_moves, ROOK_DIRECTIONS};

pub fn generate_rook_moves(board: &Board, from: Square, rook: Piece, out: &mut Vec<Move>) {
    push_sliding_moves(board, from, rook, &ROOK_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rook_stops_at_blockers() {
        let mut board = Board::empty();
        let rook = board.spawn_at(Square::new(4, 0), PieceKind::Rook, Color::Light);
        board.spawn_at(Square::new(4, 3), PieceKind::Pawn, Color::Light);
        let enemy = board.spawn_at(Square::new(1, 0), PieceKind::Knight, Color::Dark);

        let mut moves = Vec::new();
        generate_rook_moves(&board, Square::new(4, 0), rook, &mut moves);

        // Right: b, c (friendly pawn on d). Up: rows 3, 2, capture on row 1. Down: rows 5-7.
        assert_eq!(moves.len(), 2 + 3 + 3);
        let captures: Vec<&Move> = moves.iter().filter(|m| m.is_capture()).collect();
        assert_eq!(captures.len(), 1);
        assert_eq!(captures[0].captured, Some(enemy));
        assert!(!moves.iter().any(|m| m.to == Square::new(4, 3)));
    }
}
