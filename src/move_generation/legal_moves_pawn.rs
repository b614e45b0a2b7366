//! Pawn pushes, double steps and diagonal captures.
//!
//! Pawns reaching the far row always promote to a queen. En passant is not
//! generated.

use crate::game_state::board::Board;
use crate::game_state::chess_move::Move;
use crate::game_state::chess_types::*;

pub fn generate_pawn_moves(board: &Board, from: Square, pawn: Piece, out: &mut Vec<Move>) {
    let direction = pawn.color.pawn_direction();
    let promotion_row = pawn.color.promotion_row();

    if let Some(one_step) = from.offset(direction, 0) {
        if board.is_empty(one_step) {
            push_pawn_move(Move::new(from, one_step, pawn, None), promotion_row, out);

            if from.row == pawn.color.pawn_home_row() {
                if let Some(two_step) = one_step.offset(direction, 0) {
                    if board.is_empty(two_step) {
                        out.push(Move::new(from, two_step, pawn, None));
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        let Some(to) = from.offset(direction, d_col) else {
            continue;
        };
        if let Some(target) = board.piece_at(to) {
            if target.color != pawn.color {
                push_pawn_move(Move::new(from, to, pawn, Some(target)), promotion_row, out);
            }
        }
    }
}

fn push_pawn_move(mv: Move, promotion_row: u8, out: &mut Vec<Move>) {
    if mv.to.row == promotion_row {
        out.push(mv.with_promotion(PieceKind::Queen));
    } else {
        out.push(mv);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pawn_moves(board: &Board, from: Square) -> Vec<Move> {
        let pawn = board.piece_at(from).expect("pawn present");
        let mut out = Vec::new();
        generate_pawn_moves(board, from, pawn, &mut out);
        out
    }

    #[test]
    fn home_row_pawn_can_double_step() {
        let board = Board::standard();
        let moves = pawn_moves(&board, Square::new(6, 4));
        let targets: Vec<String> = moves.iter().map(|m| m.to.to_string()).collect();
        assert_eq!(targets, vec!["e3", "e4"]);
    }

    #[test]
    fn blocked_pawn_has_no_pushes() {
        let mut board = Board::standard();
        board.spawn_at(Square::new(5, 4), PieceKind::Knight, Color::Dark);
        assert!(pawn_moves(&board, Square::new(6, 4)).is_empty());

        let mut board = Board::standard();
        board.spawn_at(Square::new(4, 4), PieceKind::Knight, Color::Dark);
        let moves = pawn_moves(&board, Square::new(6, 4));
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to, Square::new(5, 4));
    }

    #[test]
    fn diagonals_only_when_enemy_present() {
        let mut board = Board::empty();
        board.spawn_at(Square::new(4, 4), PieceKind::Pawn, Color::Dark);
        let victim = board.spawn_at(Square::new(5, 5), PieceKind::Bishop, Color::Light);
        board.spawn_at(Square::new(5, 3), PieceKind::Pawn, Color::Dark);

        let moves = pawn_moves(&board, Square::new(4, 4));
        assert_eq!(moves.len(), 2);
        let capture = moves.iter().find(|m| m.is_capture()).expect("capture");
        assert_eq!(capture.captured, Some(victim));
        assert_eq!(capture.to, Square::new(5, 5));
    }

    #[test]
    fn reaching_last_row_promotes_to_queen() {
        let mut board = Board::empty();
        board.spawn_at(Square::new(1, 0), PieceKind::Pawn, Color::Light);
        board.spawn_at(Square::new(0, 1), PieceKind::Rook, Color::Dark);

        let moves = pawn_moves(&board, Square::new(1, 0));
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|m| m.promotion == Some(PieceKind::Queen)));
        assert!(moves.iter().any(|m| m.is_capture()));
    }
}
