//! Errors used throughout the chess engine.
//!
//! `ChessErrors` is the single error type of the crate. Game-state invariant
//! violations (moving from an empty square, castling without its rook) are
//! reported through it and leave the state untouched, so callers can treat an
//! `Err` from `make_move` as "the move did not happen".
//!
//! Usage guidelines:
//! - Parsing helpers (`algebraic`, `fen_parser`) return input errors that are
//!   suitable for showing to a user.
//! - `NoPieceAtSquare`, `MissingCastlingRook` and `OwnPieceAtDestination` mean
//!   a caller handed the game a move that was not generated for the current
//!   position; they indicate a driver bug rather than a user mistake.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Square};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// The origin square of a move was empty.
    #[error("no piece at source square {0}")]
    NoPieceAtSquare(Square),

    /// A castling move was applied but the rook it pairs with is absent.
    #[error("castling rook not found at {0}")]
    MissingCastlingRook(Square),

    /// The destination of a move holds a piece of the moving side.
    #[error("destination {0} is occupied by a piece of the moving side")]
    OwnPieceAtDestination(Square),

    /// A square or move in coordinate notation could not be parsed.
    #[error("invalid algebraic notation: {0}")]
    InvalidAlgebraic(String),

    /// A position string could not be parsed.
    #[error("invalid position: {0}")]
    InvalidPlacement(String),

    /// A position does not hold exactly one king for the given side.
    #[error("position must contain exactly one {0} king")]
    MissingKing(Color),

    /// The requested move is not among the legal moves of the position.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// A human action was requested while the engine is to move.
    #[error("it is not the player's turn")]
    NotPlayersTurn,

    /// Undo requested with too few moves in the history.
    #[error("not enough moves in history to undo")]
    NothingToUndo,

    /// The side to move has no legal moves.
    #[error("no legal moves available")]
    NoLegalMoves,

    /// The game already reached checkmate or stalemate.
    #[error("the game is over")]
    GameOver,
}

pub type ChessResult<T> = Result<T, ChessErrors>;
