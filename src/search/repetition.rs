//! Recent-position bookkeeping for the repetition penalty.
//!
//! Positions are keyed by a row-major signature: kind letter, side letter and
//! coordinates for each occupied cell, `.` for each empty one. The table only
//! looks at the last few played moves, so it is a heuristic and never
//! declares a draw.

use std::collections::HashMap;

use crate::game_state::board::Board;
use crate::game_state::game_state::GameState;

/// How many played moves are replayed backwards when building the table.
pub const REPETITION_WINDOW: usize = 10;
pub const REPETITION_PENALTY: i32 = 50;

pub fn position_key(board: &Board) -> String {
    let mut key = String::with_capacity(128);
    for row in 0..8u8 {
        for col in 0..8u8 {
            match board.get(row, col) {
                Some(piece) => {
                    key.push(piece.kind.letter());
                    key.push(piece.color.letter());
                    key.push(char::from(b'0' + row));
                    key.push(char::from(b'0' + col));
                }
                None => key.push('.'),
            }
        }
    }
    key
}

#[derive(Debug, Clone, Default)]
pub struct RepetitionTable {
    counts: HashMap<String, u32>,
}

impl RepetitionTable {
    /// Tally the positions that preceded each of the last `REPETITION_WINDOW`
    /// moves of `game_state`. The live state is not touched.
    pub fn from_recent_history(game_state: &GameState) -> Self {
        let mut table = Self::default();
        let mut rewind = game_state.clone();
        for _ in 0..REPETITION_WINDOW {
            if rewind.undo_move().is_none() {
                break;
            }
            *table.counts.entry(position_key(rewind.board())).or_insert(0) += 1;
        }
        table
    }

    pub fn count(&self, board: &Board) -> u32 {
        self.counts.get(&position_key(board)).copied().unwrap_or(0)
    }

    /// Score deduction for reaching `board` again.
    pub fn penalty(&self, board: &Board) -> i32 {
        REPETITION_PENALTY * self.count(board) as i32
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
