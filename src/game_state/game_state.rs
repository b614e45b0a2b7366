//! Authoritative game state: board, turn, history, captures and outcome.
//!
//! `GameState` composes the pseudo-legal generators into fully legal moves
//! and applies/undoes them. Every applied move is pushed on `move_history`
//! with enough recorded state to be reversed exactly, and `current_player`
//! flips once per applied and once per undone move.

use tracing::{debug, error};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_move::{Move, RookShift};
use crate::game_state::chess_rules::castling_rook_cols;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::generate_moves_for_piece_into;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Color,
    move_history: Vec<Move>,
    /// Indexed by the color of the captured piece.
    captured_pieces: [Vec<Piece>; 2],
    is_game_over: bool,
    winner: Option<Winner>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    pub fn new_game() -> Self {
        Self {
            board: Board::standard(),
            current_player: Color::Light,
            move_history: Vec::new(),
            captured_pieces: [Vec::new(), Vec::new()],
            is_game_over: false,
            winner: None,
        }
    }

    /// Start from an arbitrary position. The outcome is evaluated at once, so
    /// a mated or stalemated side to move yields a finished game.
    ///
    /// Boards without exactly one king per side are rejected.
    pub fn from_board(board: Board, side_to_move: Color) -> ChessResult<Self> {
        for color in [Color::Light, Color::Dark] {
            if board.count(PieceKind::King, color) != 1 {
                return Err(ChessErrors::MissingKing(color));
            }
        }

        let mut state = Self {
            board,
            current_player: side_to_move,
            move_history: Vec::new(),
            captured_pieces: [Vec::new(), Vec::new()],
            is_game_over: false,
            winner: None,
        };
        state.refresh_outcome();
        Ok(state)
    }

    /// Discard everything and return to the standard starting position.
    pub fn reset(&mut self) {
        *self = Self::new_game();
    }

    /// Ephemeral copy for look-ahead: same board, turn and outcome, but no
    /// history or capture records.
    pub fn fork(&self) -> Self {
        Self {
            board: self.board.clone(),
            current_player: self.current_player,
            move_history: Vec::new(),
            captured_pieces: [Vec::new(), Vec::new()],
            is_game_over: self.is_game_over,
            winner: self.winner,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    #[inline]
    pub fn move_history(&self) -> &[Move] {
        &self.move_history
    }

    /// Pieces of `color` that have been captured, in capture order.
    #[inline]
    pub fn captured_pieces(&self, color: Color) -> &[Piece] {
        &self.captured_pieces[color.index()]
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    #[inline]
    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    #[inline]
    pub fn is_in_check(&self, color: Color) -> bool {
        is_king_in_check(&self.board, color)
    }

    /// Legal moves for the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.get_all_legal_moves(self.current_player)
    }

    /// Every pseudo-legal move of `color` that does not leave its own king in check.
    pub fn get_all_legal_moves(&self, color: Color) -> Vec<Move> {
        let mut candidates = Vec::with_capacity(64);
        for (from, piece) in self.board.pieces_of(color) {
            generate_moves_for_piece_into(&self.board, from, piece, false, &mut candidates);
        }
        candidates.retain(|mv| !self.would_leave_king_in_check(mv));
        candidates
    }

    /// True when `color` has at least one legal move. Stops at the first one.
    pub fn has_legal_move(&self, color: Color) -> bool {
        let mut candidates = Vec::with_capacity(32);
        for (from, piece) in self.board.pieces_of(color) {
            candidates.clear();
            generate_moves_for_piece_into(&self.board, from, piece, false, &mut candidates);
            if candidates.iter().any(|mv| !self.would_leave_king_in_check(mv)) {
                return true;
            }
        }
        false
    }

    /// Legal move of the side to move between two squares, if any.
    pub fn find_legal_move(&self, from: Square, to: Square) -> Option<Move> {
        self.legal_moves()
            .into_iter()
            .find(|mv| mv.from == from && mv.to == to)
    }

    fn would_leave_king_in_check(&self, mv: &Move) -> bool {
        is_king_in_check(&self.board.with_move_applied(mv), mv.piece.color)
    }

    /// Apply `mv` to the board.
    ///
    /// On `Err` nothing has changed. Afterwards, if the new side to move has
    /// no legal reply the game is over: checkmate when it is in check,
    /// otherwise a draw.
    pub fn make_move(&mut self, mv: &Move) -> ChessResult<()> {
        let Some(piece) = self.board.piece_at(mv.from) else {
            error!(target_move = %mv, "attempted to move from an empty square");
            return Err(ChessErrors::NoPieceAtSquare(mv.from));
        };

        let mut record = mv.clone();
        record.piece = piece;
        record.prev_has_moved = piece.has_moved;
        record.promoted_piece = None;
        record.castling_rook = None;

        if record.is_castling {
            let (from_col, to_col) = castling_rook_cols(mv.to.col);
            let rook_square = Square::new(mv.from.row, from_col);
            match self.board.piece_at(rook_square) {
                Some(rook) if rook.is(PieceKind::Rook, piece.color) => {
                    record.castling_rook = Some(RookShift {
                        rook,
                        from_col,
                        to_col,
                        prev_has_moved: rook.has_moved,
                    });
                }
                _ => {
                    error!(target_move = %mv, "castling rook not found");
                    return Err(ChessErrors::MissingCastlingRook(rook_square));
                }
            }
            record.captured = None;
        } else {
            let target = self.board.piece_at(mv.to);
            if target.is_some_and(|t| t.color == piece.color) {
                error!(target_move = %mv, "destination holds a piece of the moving side");
                return Err(ChessErrors::OwnPieceAtDestination(mv.to));
            }
            record.captured = target;
        }

        if let Some(captured) = record.captured {
            self.captured_pieces[captured.color.index()].push(captured);
        }

        self.board.set(mv.from, None);
        self.board.set(
            mv.to,
            Some(Piece {
                has_moved: true,
                ..piece
            }),
        );

        if let Some(shift) = record.castling_rook {
            let row = mv.to.row;
            self.board.set(Square::new(row, shift.from_col), None);
            self.board.set(
                Square::new(row, shift.to_col),
                Some(Piece {
                    has_moved: true,
                    ..shift.rook
                }),
            );
        }

        if let Some(kind) = record.promotion {
            let promoted = self.board.spawn_at(mv.to, kind, piece.color);
            record.promoted_piece = Some(promoted);
        }

        self.move_history.push(record);
        self.current_player = self.current_player.opposite();
        self.refresh_outcome();
        Ok(())
    }

    /// Reverse the last applied move. Returns the undone move, or `None` when
    /// the history is empty.
    pub fn undo_move(&mut self) -> Option<Move> {
        let mv = self.move_history.pop()?;

        if let Some(promoted) = mv.promoted_piece {
            self.board.release_last_spawn(promoted.id);
        }
        self.board.set(mv.to, mv.captured);
        self.board.set(
            mv.from,
            Some(Piece {
                has_moved: mv.prev_has_moved,
                ..mv.piece
            }),
        );

        if let Some(shift) = mv.castling_rook {
            let row = mv.to.row;
            self.board.set(Square::new(row, shift.to_col), None);
            self.board.set(
                Square::new(row, shift.from_col),
                Some(Piece {
                    has_moved: shift.prev_has_moved,
                    ..shift.rook
                }),
            );
        }

        if let Some(captured) = mv.captured {
            let list = &mut self.captured_pieces[captured.color.index()];
            if let Some(position) = list.iter().rposition(|p| p.id == captured.id) {
                list.remove(position);
            }
        }

        self.current_player = self.current_player.opposite();
        self.is_game_over = false;
        self.winner = None;
        Some(mv)
    }

    fn refresh_outcome(&mut self) {
        let side = self.current_player;
        if self.has_legal_move(side) {
            self.is_game_over = false;
            self.winner = None;
            return;
        }

        self.is_game_over = true;
        self.winner = if self.is_in_check(side) {
            Some(Winner::Side(side.opposite()))
        } else {
            Some(Winner::Draw)
        };
        debug!(winner = ?self.winner, "game over");
    }
}
