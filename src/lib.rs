//! Crate root module declarations for the minimax chess engine.
//!
//! Exposes the rule engine (game state and move generation), the evaluator
//! and alpha-beta search, the engine abstraction, the human-versus-engine
//! session and utility helpers under stable module paths for the binary,
//! tests and benchmarks.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_move;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
    pub mod move_ordering;
    pub mod repetition;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
    pub mod time_management;
}

pub mod session {
    pub mod game_session;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_parser;
    pub mod render_game_state;
}
