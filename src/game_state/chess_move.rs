//! Reversible move record.
//!
//! Moves are produced by the generators with the pre-move snapshot of the
//! moving piece. When a move is applied, `GameState::make_move` fills in the
//! post-hoc fields (`castling_rook`, `promoted_piece`) that `undo_move` needs.

use std::fmt;

use crate::game_state::chess_types::*;

/// Rook relocation recorded for a castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RookShift {
    pub rook: Piece,
    pub from_col: u8,
    pub to_col: u8,
    pub prev_has_moved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// Moving piece as it stood before the move.
    pub piece: Piece,
    pub captured: Option<Piece>,
    /// Never set by the generators: en passant is not generated.
    pub is_en_passant: bool,
    pub is_castling: bool,
    pub promotion: Option<PieceKind>,
    pub prev_has_moved: bool,
    pub castling_rook: Option<RookShift>,
    pub promoted_piece: Option<Piece>,
}

impl Move {
    pub fn new(from: Square, to: Square, piece: Piece, captured: Option<Piece>) -> Self {
        Self {
            from,
            to,
            piece,
            captured,
            is_en_passant: false,
            is_castling: false,
            promotion: None,
            prev_has_moved: piece.has_moved,
            castling_rook: None,
            promoted_piece: None,
        }
    }

    pub fn castling(from: Square, to: Square, king: Piece) -> Self {
        Self {
            is_castling: true,
            ..Self::new(from, to, king, None)
        }
    }

    pub fn with_promotion(mut self, kind: PieceKind) -> Self {
        self.promotion = Some(kind);
        self
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Same origin and destination, regardless of recorded state.
    #[inline]
    pub fn same_squares(&self, other: &Move) -> bool {
        self.from == other.from && self.to == other.to
    }

    /// Coordinate form without separator, e.g. `e2e4`.
    pub fn to_long_algebraic(&self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_move_snapshots_has_moved() {
        let mut pawn = Piece::new(PieceId(3), PieceKind::Pawn, Color::Light);
        pawn.has_moved = true;
        let mv = Move::new(Square::new(5, 4), Square::new(4, 4), pawn, None);
        assert!(mv.prev_has_moved);
        assert!(!mv.is_castling);
        assert_eq!(mv.to_string(), "e3-e4");
        assert_eq!(mv.to_long_algebraic(), "e3e4");
    }

    #[test]
    fn squares_equality_ignores_payload() {
        let pawn = Piece::new(PieceId(3), PieceKind::Pawn, Color::Light);
        let plain = Move::new(Square::new(1, 0), Square::new(0, 0), pawn, None);
        let promoting = plain.clone().with_promotion(PieceKind::Queen);
        assert!(plain.same_squares(&promoting));
        assert_ne!(plain, promoting);
    }
}
