use crate::game_state::board::Board;
use crate::game_state::chess_move::Move;
use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::move_generation::legal_move_shared::{push_step_moves, KING_OFFSETS};

/// Adjacent steps plus, unless `for_attack_only`, both castling moves.
pub fn generate_king_moves(
    board: &Board,
    from: Square,
    king: Piece,
    for_attack_only: bool,
    out: &mut Vec<Move>,
) {
    push_step_moves(board, from, king, &KING_OFFSETS, out);

    if !for_attack_only {
        generate_castling_moves(board, from, king, out);
    }
}

fn generate_castling_moves(board: &Board, from: Square, king: Piece, out: &mut Vec<Move>) {
    let row = king.color.back_row();
    if king.has_moved || from != Square::new(row, KING_HOME_COL) {
        return;
    }
    // Cannot castle out of check.
    if is_king_in_check(board, king.color) {
        return;
    }

    let enemy = king.color.opposite();

    if rook_ready(board, Square::new(row, SHORT_CASTLE_ROOK_FROM_COL), king.color)
        && cols_empty(board, row, &[5, 6])
        && !is_square_attacked(board, Square::new(row, 5), enemy)
        && !is_square_attacked(board, Square::new(row, 6), enemy)
    {
        out.push(Move::castling(
            from,
            Square::new(row, SHORT_CASTLE_KING_COL),
            king,
        ));
    }

    if rook_ready(board, Square::new(row, LONG_CASTLE_ROOK_FROM_COL), king.color)
        && cols_empty(board, row, &[1, 2, 3])
        && !is_square_attacked(board, Square::new(row, 3), enemy)
        && !is_square_attacked(board, Square::new(row, 2), enemy)
    {
        out.push(Move::castling(
            from,
            Square::new(row, LONG_CASTLE_KING_COL),
            king,
        ));
    }
}

fn rook_ready(board: &Board, square: Square, color: Color) -> bool {
    board
        .piece_at(square)
        .is_some_and(|rook| rook.is(PieceKind::Rook, color) && !rook.has_moved)
}

fn cols_empty(board: &Board, row: u8, cols: &[u8]) -> bool {
    cols.iter().all(|&col| board.is_empty(Square::new(row, col)))
}
