//! Attack and check queries.
//!
//! A square counts as attacked by a side when one of that side's pieces
//! could land on it: sliders along a clear ray, knights and kings by their
//! fixed offsets, pawns on either forward diagonal. A square holding a piece
//! of the attacking side is never attacked by that side. Castling plays no
//! part in attacks.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{
    BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRECTIONS,
};

pub fn is_square_attacked(board: &Board, square: Square, by: Color) -> bool {
    if board.piece_at(square).is_some_and(|p| p.color == by) {
        return false;
    }

    let is_attacker = |sq: Option<Square>, kinds: &[PieceKind]| {
        sq.and_then(|sq| board.piece_at(sq))
            .is_some_and(|p| p.color == by && kinds.contains(&p.kind))
    };

    // A pawn of `by` sits one row behind the target, relative to its direction.
    let behind = -by.pawn_direction();
    if [-1, 1]
        .into_iter()
        .any(|d_col| is_attacker(square.offset(behind, d_col), &[PieceKind::Pawn]))
    {
        return true;
    }

    if KNIGHT_OFFSETS
        .iter()
        .any(|&(dr, dc)| is_attacker(square.offset(dr, dc), &[PieceKind::Knight]))
    {
        return true;
    }

    if KING_OFFSETS
        .iter()
        .any(|&(dr, dc)| is_attacker(square.offset(dr, dc), &[PieceKind::King]))
    {
        return true;
    }

    ray_hits(board, square, by, &ROOK_DIRECTIONS, PieceKind::Rook)
        || ray_hits(board, square, by, &BISHOP_DIRECTIONS, PieceKind::Bishop)
}

/// Walk outward from `square`; true if the first piece met on some ray is a
/// `slider` or queen of `by`.
fn ray_hits(
    board: &Board,
    square: Square,
    by: Color,
    directions: &[(i8, i8)],
    slider: PieceKind,
) -> bool {
    for &(d_row, d_col) in directions {
        let mut cursor = square.offset(d_row, d_col);
        while let Some(sq) = cursor {
            if let Some(piece) = board.piece_at(sq) {
                if piece.color == by && (piece.kind == slider || piece.kind == PieceKind::Queen) {
                    return true;
                }
                break;
            }
            cursor = sq.offset(d_row, d_col);
        }
    }
    false
}

/// False when `color` has no king on the board.
#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = board.king_square(color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::move_generator::generate_moves_for_piece;
    use crate::utils::fen_parser::parse_board;

    #[test]
    fn start_position_has_no_checks() {
        let board = Board::standard();
        assert!(!is_king_in_check(&board, Color::Light));
        assert!(!is_king_in_check(&board, Color::Dark));
        // Third row is covered by pawns and knights, fifth is not.
        assert!(is_square_attacked(&board, Square::new(5, 4), Color::Light));
        assert!(!is_square_attacked(&board, Square::new(4, 4), Color::Light));
    }

    #[test]
    fn blocked_rays_do_not_attack() {
        let board = parse_board("4k3/8/8/8/4P3/8/8/4RK2", "-").expect("valid position");
        assert!(is_square_attacked(&board, Square::new(5, 4), Color::Light));
        assert!(!is_square_attacked(&board, Square::new(0, 4), Color::Light));
        assert!(!is_king_in_check(&board, Color::Dark));
    }

    #[test]
    fn own_pieces_are_never_attacked_by_their_side() {
        let board = Board::standard();
        assert!(!is_square_attacked(&board, Square::new(6, 4), Color::Light));
        assert!(!is_square_attacked(&board, Square::new(1, 4), Color::Dark));
    }

    #[test]
    fn pawns_attack_diagonals_not_push_squares() {
        let board = parse_board("4k3/8/8/3p4/8/8/8/4K3", "-").expect("valid position");
        assert!(is_square_attacked(&board, Square::new(4, 2), Color::Dark));
        assert!(is_square_attacked(&board, Square::new(4, 4), Color::Dark));
        assert!(!is_square_attacked(&board, Square::new(4, 3), Color::Dark));
    }

    #[test]
    fn non_pawn_attacks_match_pseudo_move_targets() {
        let board = parse_board("r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/5N2/PPPP1PPP/RNBQK2R", "KQkq")
            .expect("valid position");
        for color in [Color::Light, Color::Dark] {
            for target in Square::all() {
                let by_moves = board
                    .pieces_of(color)
                    .filter(|(_, p)| p.kind != PieceKind::Pawn)
                    .flat_map(|(sq, _)| generate_moves_for_piece(&board, sq, true))
                    .any(|m| m.to == target);
                let by_pawn = board
                    .pieces_of(color)
                    .filter(|(_, p)| p.kind == PieceKind::Pawn)
                    .any(|(sq, _)| {
                        sq.offset(color.pawn_direction(), -1) == Some(target)
                            || sq.offset(color.pawn_direction(), 1) == Some(target)
                    });
                let own = board.piece_at(target).is_some_and(|p| p.color == color);
                assert_eq!(
                    is_square_attacked(&board, target, color),
                    (by_moves || by_pawn) && !own,
                    "{color} on {target}"
                );
            }
        }
    }

    #[test]
    fn missing_king_reports_no_check() {
        let mut board = Board::empty();
        board.spawn_at(Square::new(0, 0), PieceKind::Queen, Color::Dark);
        assert!(!is_king_in_check(&board, Color::Light));
    }
}
