//! Position setup from FEN-style strings.
//!
//! Reads the placement, side-to-move and castling-availability fields.
//! Trailing en-passant and clock fields are accepted and ignored since the
//! engine tracks neither. `has_moved` flags are derived from the castling
//! field: a king or corner rook is unmoved only when a matching right is
//! listed. Every position must hold exactly one king per side.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let placement = parts
        .next()
        .ok_or_else(|| ChessErrors::InvalidPlacement("missing board layout".to_owned()))?;
    let side_part = parts
        .next()
        .ok_or_else(|| ChessErrors::InvalidPlacement("missing side to move".to_owned()))?;
    let castling_part = parts.next().unwrap_or("-");

    if parts.count() > 3 {
        return Err(ChessErrors::InvalidPlacement(
            "too many trailing fields".to_owned(),
        ));
    }

    let side = parse_side_to_move(side_part)?;
    let board = parse_board(placement, castling_part)?;
    GameState::from_board(board, side)
}

pub fn parse_board(placement: &str, castling: &str) -> ChessResult<Board> {
    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != 8 {
        return Err(ChessErrors::InvalidPlacement(
            "board layout must contain 8 ranks".to_owned(),
        ));
    }

    let mut board = Board::empty();
    for (row, row_str) in rows.iter().enumerate() {
        let mut col = 0usize;
        for ch in row_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidPlacement(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                col += empty_count as usize;
                continue;
            }

            let kind = PieceKind::from_letter(ch).ok_or_else(|| {
                ChessErrors::InvalidPlacement(format!("invalid piece character '{ch}'"))
            })?;
            let color = if ch.is_ascii_uppercase() {
                Color::Light
            } else {
                Color::Dark
            };
            if col >= 8 {
                return Err(ChessErrors::InvalidPlacement(format!(
                    "rank {} has too many files",
                    8 - row
                )));
            }

            let square = Square::new(row as u8, col as u8);
            let mut piece = board.spawn(kind, color);
            piece.has_moved = kind == PieceKind::Pawn && square.row != color.pawn_home_row();
            board.set(square, Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err(ChessErrors::InvalidPlacement(format!(
                "rank {} does not sum to 8 files",
                8 - row
            )));
        }
    }

    for color in [Color::Light, Color::Dark] {
        if board.count(PieceKind::King, color) != 1 {
            return Err(ChessErrors::MissingKing(color));
        }
    }

    apply_castling_rights(&mut board, castling)?;
    Ok(board)
}

fn parse_side_to_move(side: &str) -> ChessResult<Color> {
    match side {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(ChessErrors::InvalidPlacement(format!(
            "invalid side to move '{side}'"
        ))),
    }
}

/// Mark kings and rooks as moved unless a castling right keeps them fresh.
fn apply_castling_rights(board: &mut Board, castling: &str) -> ChessResult<()> {
    let mut rights = [[false; 2]; 2];
    if castling != "-" {
        for ch in castling.chars() {
            let (color, side) = match ch {
                'K' => (Color::Light, 0),
                'Q' => (Color::Light, 1),
                'k' => (Color::Dark, 0),
                'q' => (Color::Dark, 1),
                _ => {
                    return Err(ChessErrors::InvalidPlacement(format!(
                        "invalid castling character '{ch}'"
                    )))
                }
            };
            rights[color.index()][side] = true;
        }
    }

    for color in [Color::Light, Color::Dark] {
        let row = color.back_row();
        let [short, long] = rights[color.index()];
        let king_home = Square::new(row, KING_HOME_COL);
        let rook_corners = [
            (Square::new(row, SHORT_CASTLE_ROOK_FROM_COL), short),
            (Square::new(row, LONG_CASTLE_ROOK_FROM_COL), long),
        ];

        for (square, piece) in board.pieces_of(color).collect::<Vec<_>>() {
            let unmoved = match piece.kind {
                PieceKind::King => square == king_home && (short || long),
                PieceKind::Rook => rook_corners
                    .iter()
                    .any(|&(corner, right)| corner == square && right),
                _ => continue,
            };
            board.set(
                square,
                Some(Piece {
                    has_moved: !unmoved,
                    ..piece
                }),
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_fen_matches_standard_board() {
        let state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        let fresh = GameState::new_game();
        assert_eq!(state.current_player(), Color::Light);
        // Identities differ by spawn order; compare what sits where.
        for square in Square::all() {
            let strip = |p: Option<Piece>| p.map(|p| (p.kind, p.color, p.has_moved));
            assert_eq!(
                strip(state.board().piece_at(square)),
                strip(fresh.board().piece_at(square)),
                "{square}"
            );
        }
    }

    #[test]
    fn full_six_field_fen_is_accepted() {
        let state = parse_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
            .expect("fen should parse");
        assert_eq!(state.current_player(), Color::Dark);
        let e4 = state.board().get(4, 4).expect("pawn on e4");
        assert!(e4.has_moved);
    }

    #[test]
    fn castling_field_controls_has_moved() {
        let board = parse_board("r3k2r/8/8/8/8/8/8/R3K2R", "Kq").expect("valid position");
        assert!(!board.get(7, 4).expect("light king").has_moved);
        assert!(!board.get(7, 7).expect("h1 rook").has_moved);
        assert!(board.get(7, 0).expect("a1 rook").has_moved);
        assert!(!board.get(0, 4).expect("dark king").has_moved);
        assert!(!board.get(0, 0).expect("a8 rook").has_moved);
        assert!(board.get(0, 7).expect("h8 rook").has_moved);

        let board = parse_board("r3k2r/8/8/8/8/8/8/R3K2R", "-").expect("valid position");
        assert!(board.pieces().all(|(_, p)| p.has_moved));
    }

    #[test]
    fn malformed_positions_are_rejected() {
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8 w -"),
            Err(ChessErrors::InvalidPlacement(_))
        ));
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4K2X w -"),
            Err(ChessErrors::InvalidPlacement(_))
        ));
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 x -"),
            Err(ChessErrors::InvalidPlacement(_))
        ));
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4K3"),
            Err(ChessErrors::InvalidPlacement(_))
        ));
    }

    #[test]
    fn kingless_positions_are_rejected() {
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/8 w -"),
            Err(ChessErrors::MissingKing(Color::Light))
        );
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/3KK3 w -"),
            Err(ChessErrors::MissingKing(Color::Light))
        );
    }
}
