//! Pseudo-legal move dispatch.
//!
//! Nothing here knows whose turn it is: a piece's own side decides what is
//! friendly and what can be captured. Filtering out moves that leave the
//! mover's king in check is the game state's job.

use crate::game_state::board::Board;
use crate::game_state::chess_move::Move;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

/// Candidate moves for the piece standing on `from`.
///
/// `for_attack_only` suppresses castling; pawns ignore it.
pub fn generate_moves_for_piece(board: &Board, from: Square, for_attack_only: bool) -> Vec<Move> {
    let mut out = Vec::with_capacity(16);
    if let Some(piece) = board.piece_at(from) {
        generate_moves_for_piece_into(board, from, piece, for_attack_only, &mut out);
    }
    out
}

pub fn generate_moves_for_piece_into(
    board: &Board,
    from: Square,
    piece: Piece,
    for_attack_only: bool,
    out: &mut Vec<Move>,
) {
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, from, piece, out),
        PieceKind::Knight => generate_knight_moves(board, from, piece, out),
        PieceKind::Bishop => generate_bishop_moves(board, from, piece, out),
        PieceKind::Rook => generate_rook_moves(board, from, piece, out),
        PieceKind::Queen => generate_queen_moves(board, from, piece, out),
        PieceKind::King => generate_king_moves(board, from, piece, for_attack_only, out),
    }
}

/// Pseudo-legal moves for every piece of `color`, in row-major piece order.
pub fn generate_pseudo_legal_moves(board: &Board, color: Color, for_attack_only: bool) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    for (from, piece) in board.pieces_of(color) {
        generate_moves_for_piece_into(board, from, piece, for_attack_only, &mut out);
    }
    out
}

/// Number of castling-free pseudo-legal moves of `color`.
pub fn count_pseudo_legal_moves(board: &Board, color: Color) -> usize {
    let mut scratch = Vec::with_capacity(32);
    let mut total = 0;
    for (from, piece) in board.pieces_of(color) {
        scratch.clear();
        generate_moves_for_piece_into(board, from, piece, true, &mut scratch);
        total += scratch.len();
    }
    total
}
