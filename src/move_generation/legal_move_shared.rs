//! Direction tables and step helpers shared by the per-piece generators.

use crate::game_state::board::Board;
use crate::game_state::chess_move::Move;
use crate::game_state::chess_types::*;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Single jumps (knight, king): valid unless off the board or onto a friendly piece.
pub fn push_step_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    offsets: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in offsets {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        match board.piece_at(to) {
            None => out.push(Move::new(from, to, piece, None)),
            Some(target) if target.color != piece.color => {
                out.push(Move::new(from, to, piece, Some(target)))
            }
            Some(_) => {}
        }
    }
}

/// Rays for rook, bishop and queen. Each ray stops at the first occupied
/// cell, including it only when it holds an enemy piece.
pub fn push_sliding_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in directions {
        let mut cursor = from.offset(d_row, d_col);
        while let Some(to) = cursor {
            match board.piece_at(to) {
                None => out.push(Move::new(from, to, piece, None)),
                Some(target) => {
                    if target.color != piece.color {
                        out.push(Move::new(from, to, piece, Some(target)));
                    }
                    break;
                }
            }
            cursor = to.offset(d_row, d_col);
        }
    }
}
