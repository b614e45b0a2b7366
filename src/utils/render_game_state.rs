//! Terminal-oriented Unicode board renderer.

use crate::game_state::board::Board;
use crate::game_state::game_state::GameState;

/// Render the board to a Unicode string, rank 8 at the top.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8u8 {
        let rank = char::from(b'8' - row);
        out.push(rank);
        out.push(' ');

        for col in 0..8u8 {
            match board.get(row, col) {
                Some(piece) => out.push(piece.symbol()),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

pub fn render_game_state(game_state: &GameState) -> String {
    render_board(game_state.board())
}
