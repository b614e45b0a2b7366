//! Arena board: a flat array of optional piece slots.
//!
//! Cloning a `Board` is a single array copy, which keeps the per-branch
//! cost of search look-ahead flat. Piece identity survives clones because it
//! is carried by `PieceId` rather than by an allocation.

use crate::game_state::chess_move::Move;
use crate::game_state::chess_rules::BACK_RANK;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; 64],
    next_piece_id: u16,
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [None; 64],
            next_piece_id: 0,
        }
    }

    /// Standard chess starting layout with Dark on rows 0-1.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK.iter().copied().enumerate() {
            let col = col as u8;
            board.spawn_at(Square::new(0, col), kind, Color::Dark);
            board.spawn_at(Square::new(1, col), PieceKind::Pawn, Color::Dark);
            board.spawn_at(Square::new(6, col), PieceKind::Pawn, Color::Light);
            board.spawn_at(Square::new(7, col), kind, Color::Light);
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.index()]
    }

    #[inline]
    pub fn get(&self, row: u8, col: u8) -> Option<Piece> {
        self.piece_at(Square::new(row, col))
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.cells[square.index()].is_none()
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.index()] = piece;
    }

    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.cells[square.index()].take()
    }

    /// Create a new piece with a fresh identity. The piece is not placed.
    pub fn spawn(&mut self, kind: PieceKind, color: Color) -> Piece {
        let piece = Piece::new(PieceId(self.next_piece_id), kind, color);
        self.next_piece_id += 1;
        piece
    }

    /// Create a new piece and place it, replacing whatever was there.
    pub fn spawn_at(&mut self, square: Square, kind: PieceKind, color: Color) -> Piece {
        let piece = self.spawn(kind, color);
        self.set(square, Some(piece));
        piece
    }

    /// Give back the identity of the most recently spawned piece.
    pub(crate) fn release_last_spawn(&mut self, id: PieceId) {
        if id.0 + 1 == self.next_piece_id {
            self.next_piece_id = id.0;
        }
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| cell.map(|piece| (Square::from_index(index), piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.is(PieceKind::King, color))
            .map(|(square, _)| square)
    }

    pub fn count(&self, kind: PieceKind, color: Color) -> usize {
        self.pieces().filter(|(_, piece)| piece.is(kind, color)).count()
    }

    /// Copy of the board with the mover relocated and any promotion applied.
    ///
    /// The paired castling rook is not moved: this is used only for
    /// king-safety probes, where the rook's landing square never matters.
    pub fn with_move_applied(&self, mv: &Move) -> Board {
        let mut next = self.clone();
        if let Some(mut piece) = next.take(mv.from) {
            if let Some(kind) = mv.promotion {
                piece.kind = kind;
            }
            next.set(mv.to, Some(piece));
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_layout_has_full_armies() {
        let board = Board::standard();
        assert_eq!(board.pieces().count(), 32);
        for color in [Color::Light, Color::Dark] {
            assert_eq!(board.count(PieceKind::Pawn, color), 8);
            assert_eq!(board.count(PieceKind::King, color), 1);
            assert_eq!(board.count(PieceKind::Queen, color), 1);
        }
        assert_eq!(board.king_square(Color::Light), Some(Square::new(7, 4)));
        assert_eq!(board.king_square(Color::Dark), Some(Square::new(0, 4)));
        assert!(board.get(7, 3).is_some_and(|p| p.is(PieceKind::Queen, Color::Light)));
    }

    #[test]
    fn every_piece_has_a_distinct_identity() {
        let board = Board::standard();
        let mut ids: Vec<PieceId> = board.pieces().map(|(_, piece)| piece.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 32);
    }

    #[test]
    fn clones_are_independent() {
        let board = Board::standard();
        let mut copy = board.clone();
        copy.take(Square::new(6, 4));
        assert!(board.get(6, 4).is_some());
        assert!(copy.get(6, 4).is_none());
    }

    #[test]
    fn releasing_last_spawn_restores_equality() {
        let board = Board::standard();
        let mut copy = board.clone();
        let piece = copy.spawn(PieceKind::Queen, Color::Light);
        assert_ne!(board, copy);
        copy.release_last_spawn(piece.id);
        assert_eq!(board, copy);
    }
}
