//! Static position scoring.
//!
//! Search delegates leaf scoring to the `BoardScorer` trait. The standard
//! heuristic, `PositionalScorer`, combines material, piece-square tables,
//! king safety and pseudo-legal mobility, always from the perspective of a
//! fixed side rather than the side to move.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::move_generation::legal_move_shared::KING_OFFSETS;
use crate::move_generation::move_generator::count_pseudo_legal_moves;

/// Forced-mate sentinel. Far outside anything the evaluator produces.
pub const MATE_SCORE: i32 = 10_000_000;
/// Search window bound. Still finite, so penalties can be subtracted safely.
pub const SCORE_INFINITY: i32 = 2 * MATE_SCORE;

pub const KING_SAFETY_WEIGHT: i32 = 50;
pub const MOBILITY_WEIGHT: i32 = 10;
/// King-safety score of a side whose king is not on the board.
pub const MISSING_KING_SAFETY: i32 = -10_000;

pub trait BoardScorer: Send + Sync {
    /// Score `board` for `perspective`; positive favours that side.
    fn score(&self, board: &Board, perspective: Color) -> i32;
}

#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20_000,
    }
}

/// Material only. Cheap enough for exhaustive comparisons in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board, perspective: Color) -> i32 {
        board
            .pieces()
            .map(|(_, piece)| signed(piece, perspective, piece_value(piece.kind)))
            .sum()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalScorer;

impl BoardScorer for PositionalScorer {
    fn score(&self, board: &Board, perspective: Color) -> i32 {
        evaluate_board(board, perspective)
    }
}

/// Full static evaluation of `board` for `color`.
pub fn evaluate_board(board: &Board, color: Color) -> i32 {
    let enemy = color.opposite();

    let material_and_position: i32 = board
        .pieces()
        .map(|(square, piece)| signed(piece, color, piece_score(piece, square)))
        .sum();

    let king_safety = (king_safety(board, color) - king_safety(board, enemy)) * KING_SAFETY_WEIGHT;

    let mobility = count_pseudo_legal_moves(board, color) as i32
        - count_pseudo_legal_moves(board, enemy) as i32;

    material_and_position + king_safety + mobility * MOBILITY_WEIGHT
}

#[inline]
fn signed(piece: Piece, perspective: Color, value: i32) -> i32 {
    if piece.color == perspective {
        value
    } else {
        -value
    }
}

/// Material plus the table bonus. Tables are written from Light's side, so
/// Dark reads them upside down.
pub fn piece_score(piece: Piece, square: Square) -> i32 {
    let row = match piece.color {
        Color::Light => square.row,
        Color::Dark => 7 - square.row,
    } as usize;
    let table = match piece.kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::Rook => &ROOK_TABLE,
        PieceKind::Queen => &QUEEN_TABLE,
        PieceKind::King => &KING_TABLE,
    };
    piece_value(piece.kind) + table[row][square.col as usize]
}

/// Unweighted king-safety term for one side.
pub fn king_safety(board: &Board, color: Color) -> i32 {
    let Some(king_sq) = board.king_square(color) else {
        return MISSING_KING_SAFETY;
    };
    let enemy = color.opposite();

    let mut safety = 0;
    if is_king_in_check(board, color) {
        safety -= 100;
    }

    for &(d_row, d_col) in KING_OFFSETS.iter() {
        let Some(neighbor) = king_sq.offset(d_row, d_col) else {
            continue;
        };
        if is_square_attacked(board, neighbor, enemy) {
            safety -= 15;
        }
        if board.piece_at(neighbor).is_some_and(|p| p.color == color) {
            safety += 5;
        }
    }

    // Castled-looking placement on either edge row.
    if (king_sq.col == 2 || king_sq.col == 6) && (king_sq.row == 0 || king_sq.row == 7) {
        safety += 30;
    }

    safety
}

#[rustfmt::skip]
const PAWN_TABLE: [[i32; 8]; 8] = [
    [  0,   0,   0,   0,   0,   0,   0,   0],
    [ 50,  50,  50,  50,  50,  50,  50,  50],
    [ 10,  10,  20,  30,  30,  20,  10,  10],
    [  5,   5,  10,  25,  25,  10,   5,   5],
    [  0,   0,   0,  20,  20,   0,   0,   0],
    [  5,  -5, -10,   0,   0, -10,  -5,   5],
    [  5,  10,  10, -20, -20,  10,  10,   5],
    [  0,   0,   0,   0,   0,   0,   0,   0],
];

#[rustfmt::skip]
const KNIGHT_TABLE: [[i32; 8]; 8] = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20,   0,   0,   0,   0, -20, -40],
    [-30,   0,  10,  15,  15,  10,   0, -30],
    [-30,   5,  15,  20,  20,  15,   5, -30],
    [-30,   0,  15,  20,  20,  15,   0, -30],
    [-30,   5,  10,  15,  15,  10,   5, -30],
    [-40, -20,   0,   5,   5,   0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

#[rustfmt::skip]
const BISHOP_TABLE: [[i32; 8]; 8] = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10,   0,   0,   0,   0,   0,   0, -10],
    [-10,   0,   5,  10,  10,   5,   0, -10],
    [-10,   5,   5,  10,  10,   5,   5, -10],
    [-10,   0,  10,  10,  10,  10,   0, -10],
    [-10,  10,  10,  10,  10,  10,  10, -10],
    [-10,   5,   0,   0,   0,   0,   5, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

#[rustfmt::skip]
const ROOK_TABLE: [[i32; 8]; 8] = [
    [  0,   0,   0,   0,   0,   0,   0,   0],
    [  5,  10,  10,  10,  10,  10,  10,   5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [  0,   0,   0,   5,   5,   0,   0,   0],
];

#[rustfmt::skip]
const QUEEN_TABLE: [[i32; 8]; 8] = [
    [-20, -10, -10,  -5,  -5, -10, -10, -20],
    [-10,   0,   0,   0,   0,   0,   0, -10],
    [-10,   0,   5,   5,   5,   5,   0, -10],
    [ -5,   0,   5,   5,   5,   5,   0,  -5],
    [  0,   0,   5,   5,   5,   5,   0,  -5],
    [-10,   5,   5,   5,   5,   5,   0, -10],
    [-10,   0,   5,   0,   0,   0,   0, -10],
    [-20, -10, -10,  -5,  -5, -10, -10, -20],
];

#[rustfmt::skip]
const KING_TABLE: [[i32; 8]; 8] = [
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-20, -30, -30, -40, -40, -30, -30, -20],
    [-10, -20, -20, -20, -20, -20, -20, -10],
    [ 20,  20,   0,   0,   0,   0,  20,  20],
    [ 20,  30,  10,   0,   0,  10,  30,  20],
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_parser::parse_board;

    #[test]
    fn start_position_is_balanced() {
        let board = Board::standard();
        assert_eq!(evaluate_board(&board, Color::Light), 0);
        assert_eq!(evaluate_board(&board, Color::Dark), 0);
        assert_eq!(MaterialScorer.score(&board, Color::Light), 0);
    }

    #[test]
    fn evaluation_is_antisymmetric() {
        let board = parse_board("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R", "KQkq")
            .expect("valid position");
        assert_eq!(
            evaluate_board(&board, Color::Light),
            -evaluate_board(&board, Color::Dark)
        );
    }

    #[test]
    fn tables_mirror_for_dark() {
        let board = Board::standard();
        let e2 = board.get(6, 4).expect("light pawn");
        let e7 = board.get(1, 4).expect("dark pawn");
        assert_eq!(piece_score(e2, Square::new(6, 4)), 80);
        assert_eq!(piece_score(e7, Square::new(1, 4)), 80);
        // Advanced pawns are worth more for either side.
        assert_eq!(piece_score(e2, Square::new(1, 4)), 150);
        assert_eq!(piece_score(e7, Square::new(6, 4)), 150);
    }

    #[test]
    fn extra_material_dominates() {
        let board = parse_board("4k3/8/8/8/8/8/8/3QK3", "-").expect("valid position");
        assert!(evaluate_board(&board, Color::Light) > 800);
        assert_eq!(MaterialScorer.score(&board, Color::Dark), -900);
    }

    #[test]
    fn king_safety_terms() {
        // Castled king on g1 behind three pawns, nothing attacking.
        let board = parse_board("4k3/8/8/8/8/8/5PPP/6K1", "-").expect("valid position");
        assert_eq!(king_safety(&board, Color::Light), 3 * 5 + 30);

        // Rook on e1 checks along the e-file; e7 is the only attacked neighbour.
        let board = parse_board("4k3/8/8/8/8/8/8/K3R3", "-").expect("valid position");
        assert_eq!(king_safety(&board, Color::Dark), -100 - 15);
    }

    #[test]
    fn missing_king_uses_sentinel() {
        let mut board = Board::empty();
        board.spawn_at(Square::new(7, 4), PieceKind::King, Color::Light);
        assert_eq!(king_safety(&board, Color::Dark), MISSING_KING_SAFETY);
        assert!(evaluate_board(&board, Color::Light) > 10_000 * KING_SAFETY_WEIGHT);
    }
}
