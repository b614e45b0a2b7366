//! Canonical chess-rule constants.
//!
//! Starting layout and the fixed castling geometry used by move generation
//! and by the game state when it relocates the paired rook.

use crate::game_state::chess_types::PieceKind;

/// Standard starting position as a placement string (see `utils::fen_parser`).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq";

/// Back-rank piece order from the a-file to the h-file.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Column the king starts on; castling is only generated from here.
pub const KING_HOME_COL: u8 = 4;

/// King-side castling: king lands on g, rook h -> f.
pub const SHORT_CASTLE_KING_COL: u8 = 6;
pub const SHORT_CASTLE_ROOK_FROM_COL: u8 = 7;
pub const SHORT_CASTLE_ROOK_TO_COL: u8 = 5;

/// Queen-side castling: king lands on c, rook a -> d.
pub const LONG_CASTLE_KING_COL: u8 = 2;
pub const LONG_CASTLE_ROOK_FROM_COL: u8 = 0;
pub const LONG_CASTLE_ROOK_TO_COL: u8 = 3;

/// Rook origin/destination columns for a castling king landing on `king_to_col`.
#[inline]
pub const fn castling_rook_cols(king_to_col: u8) -> (u8, u8) {
    if king_to_col == SHORT_CASTLE_KING_COL {
        (SHORT_CASTLE_ROOK_FROM_COL, SHORT_CASTLE_ROOK_TO_COL)
    } else {
        (LONG_CASTLE_ROOK_FROM_COL, LONG_CASTLE_ROOK_TO_COL)
    }
}
