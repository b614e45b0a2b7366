//! Heuristic move ordering used at every ply of the search.
//!
//! Only affects how early alpha-beta cutoffs happen, never which move wins.

use std::cmp::Reverse;

use crate::game_state::board::Board;
use crate::game_state::chess_move::Move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::search::board_scoring::piece_value;

pub const GIVES_CHECK_BONUS: i32 = 50;
pub const PROMOTION_BONUS: i32 = 800;

/// Sort `moves` best-first. Ties keep generation order.
pub fn order_moves(board: &Board, moves: &mut [Move]) {
    moves.sort_by_cached_key(|mv| Reverse(move_order_score(board, mv)));
}

pub fn move_order_score(board: &Board, mv: &Move) -> i32 {
    let mut score = 0;

    // MVV-LVA
    if let Some(victim) = mv.captured {
        score += piece_value(victim.kind) * 10 - piece_value(mv.piece.kind);
    }

    if gives_check(board, mv) {
        score += GIVES_CHECK_BONUS;
    }

    score += center_bonus(mv.to.row, mv.to.col);

    if mv.promotion.is_some() {
        score += PROMOTION_BONUS;
    }

    score
}

/// True if the mover, relocated to `mv.to`, leaves the opposing king attacked.
pub fn gives_check(board: &Board, mv: &Move) -> bool {
    is_king_in_check(&board.with_move_applied(mv), mv.piece.color.opposite())
}

/// `(7 - manhattan distance to the board's centre point) * 2`, 2..=12.
#[inline]
pub fn center_bonus(row: u8, col: u8) -> i32 {
    // Doubled coordinates keep the half-square centre integral.
    let doubled_distance = (2 * row as i32 - 7).abs() + (2 * col as i32 - 7).abs();
    14 - doubled_distance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::*;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn center_bonus_peaks_in_the_middle() {
        assert_eq!(center_bonus(3, 3), 12);
        assert_eq!(center_bonus(4, 4), 12);
        assert_eq!(center_bonus(0, 0), 0);
        assert_eq!(center_bonus(7, 7), 0);
        assert_eq!(center_bonus(0, 3), 6);
    }

    #[test]
    fn valuable_captures_come_first() {
        // Pawn on d4 can take a queen on c5 or a knight on e5.
        let state = parse_fen("4k3/8/8/2q1n3/3P4/8/8/4K3 w -").expect("valid fen");
        let mut moves = state.legal_moves();
        order_moves(state.board(), &mut moves);
        let first = &moves[0];
        assert_eq!(first.to, Square::new(3, 2));
        assert_eq!(first.captured.map(|p| p.kind), Some(PieceKind::Queen));
        assert_eq!(moves[1].captured.map(|p| p.kind), Some(PieceKind::Knight));
    }

    #[test]
    fn promotion_outranks_quiet_moves() {
        let state = parse_fen("4k3/P7/8/8/8/8/8/4K3 w -").expect("valid fen");
        let mut moves = state.legal_moves();
        order_moves(state.board(), &mut moves);
        assert_eq!(moves[0].promotion, Some(PieceKind::Queen));
    }

    #[test]
    fn checking_moves_earn_their_bonus() {
        let state = parse_fen("4k3/8/8/8/8/8/8/R3K3 w -").expect("valid fen");
        let board = state.board();
        let check = state
            .find_legal_move(Square::new(7, 0), Square::new(0, 0))
            .expect("Ra8+ is legal");
        let quiet = state
            .find_legal_move(Square::new(7, 0), Square::new(6, 0))
            .expect("Ra2 is legal");
        assert!(gives_check(board, &check));
        assert!(!gives_check(board, &quiet));
        assert_eq!(move_order_score(board, &check), GIVES_CHECK_BONUS);
        assert_eq!(move_order_score(board, &quiet), center_bonus(6, 0));
    }

    #[test]
    fn ordering_is_a_permutation() {
        let state = parse_fen("r1bqkbnr/pppp1ppp/2n5/4p3/3PP3/5N2/PPP2PPP/RNBQKB1R b KQkq")
            .expect("valid fen");
        let original = state.legal_moves();
        let mut ordered = original.clone();
        order_moves(state.board(), &mut ordered);
        assert_eq!(ordered.len(), original.len());
        assert!(original.iter().all(|mv| ordered.contains(mv)));
    }
}
