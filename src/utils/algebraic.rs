//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and board
//! squares. Rank 8 is row 0, so `a1` is `(7, 0)`.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    }

    Ok(Square::new(b'8' - rank, file - b'a'))
}

#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}

/// Split coordinate input such as "e2e4" or "e2-e4" into its two squares.
pub fn parse_move_squares(text: &str) -> ChessResult<(Square, Square)> {
    let compact: String = text.trim().chars().filter(|c| *c != '-').collect();
    if compact.len() != 4 || !compact.is_ascii() {
        return Err(ChessErrors::InvalidAlgebraic(text.to_owned()));
    }
    let from = algebraic_to_square(&compact[0..2])?;
    let to = algebraic_to_square(&compact[2..4])?;
    Ok((from, to))
}
