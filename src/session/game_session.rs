//! Human-versus-engine game session.
//!
//! A `GameSession` is the single owner of the authoritative `GameState` for
//! one game. It also tracks which side the human plays, the square the human
//! has selected and the moves available from it, and the engine that answers.
//! Front ends (the CLI binary, a renderer) talk only to the session.
//!
//! Human and engine moves are separate calls: after `play_move` or a
//! completing `select_square`, the driver checks `is_engine_turn` and calls
//! `play_engine_move`.

use chrono::{DateTime, Local};
use tracing::{debug, info, warn};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;
use crate::engines::time_management::SearchConfig;
use crate::game_state::chess_move::Move;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

/// What a click on a square did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// A piece of the side to move is now selected.
    Selected { square: Square, targets: Vec<Square> },
    /// The selected piece moved to the clicked square.
    Moved(Move),
    /// The selection was cleared.
    Deselected,
    /// Nothing to do: the click was not actionable.
    Ignored,
}

pub struct GameSession {
    game: GameState,
    engine: Box<dyn Engine>,
    fallback: RandomEngine,
    human: Color,
    selected: Option<Square>,
    valid_moves: Vec<Move>,
    started_at: DateTime<Local>,
}

impl GameSession {
    /// Standard game against the minimax engine.
    pub fn new(config: SearchConfig, human: Color) -> Self {
        Self::with_engine(GameState::new_game(), Box::new(MinimaxEngine::new(config)), human)
    }

    pub fn with_engine(game: GameState, engine: Box<dyn Engine>, human: Color) -> Self {
        Self {
            game,
            engine,
            fallback: RandomEngine::new(),
            human,
            selected: None,
            valid_moves: Vec::new(),
            started_at: Local::now(),
        }
    }

    /// Replace the fallback used when the engine returns no move.
    pub fn with_fallback(mut self, fallback: RandomEngine) -> Self {
        self.fallback = fallback;
        self
    }

    #[inline]
    pub fn game(&self) -> &GameState {
        &self.game
    }

    #[inline]
    pub fn human(&self) -> Color {
        self.human
    }

    #[inline]
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    /// Destinations of the current selection.
    pub fn valid_targets(&self) -> Vec<Square> {
        self.valid_moves.iter().map(|mv| mv.to).collect()
    }

    pub fn is_engine_turn(&self) -> bool {
        !self.game.is_game_over() && self.game.current_player() != self.human
    }

    fn is_human_turn(&self) -> bool {
        !self.game.is_game_over() && self.game.current_player() == self.human
    }

    /// Handle a click on `square`.
    ///
    /// With a piece selected, clicking one of its targets plays that move,
    /// clicking another piece of the side to move reselects, and anything else
    /// deselects. Without a selection only pieces of the side to move can be
    /// picked up.
    pub fn select_square(&mut self, square: Square) -> ChessResult<SelectionOutcome> {
        if !self.is_human_turn() {
            return Ok(SelectionOutcome::Ignored);
        }

        let own_piece = self
            .game
            .board()
            .piece_at(square)
            .filter(|p| p.color == self.game.current_player());

        if self.selected.is_some() {
            if let Some(mv) = self.valid_moves.iter().find(|mv| mv.to == square).cloned() {
                self.apply(&mv)?;
                return Ok(SelectionOutcome::Moved(mv));
            }
            if own_piece.is_some() {
                return Ok(self.select(square));
            }
            self.deselect();
            return Ok(SelectionOutcome::Deselected);
        }

        if own_piece.is_some() {
            return Ok(self.select(square));
        }
        Ok(SelectionOutcome::Ignored)
    }

    fn select(&mut self, square: Square) -> SelectionOutcome {
        self.selected = Some(square);
        self.valid_moves = self.legal_moves_from(square);
        debug!(%square, moves = self.valid_moves.len(), "piece selected");
        SelectionOutcome::Selected {
            square,
            targets: self.valid_targets(),
        }
    }

    pub fn deselect(&mut self) {
        self.selected = None;
        self.valid_moves.clear();
    }

    /// Destinations a renderer may highlight when hovering `square`: the
    /// legal targets of a piece of the side to move, otherwise none.
    pub fn hover_targets(&self, square: Square) -> Vec<Square> {
        self.legal_moves_from(square).into_iter().map(|mv| mv.to).collect()
    }

    fn legal_moves_from(&self, square: Square) -> Vec<Move> {
        let Some(piece) = self.game.board().piece_at(square) else {
            return Vec::new();
        };
        if piece.color != self.game.current_player() {
            return Vec::new();
        }
        self.game
            .get_all_legal_moves(piece.color)
            .into_iter()
            .filter(|mv| mv.from == square)
            .collect()
    }

    /// Play the human's move between two squares.
    pub fn play_move(&mut self, from: Square, to: Square) -> ChessResult<Move> {
        if self.game.is_game_over() {
            return Err(ChessErrors::GameOver);
        }
        if !self.is_human_turn() {
            return Err(ChessErrors::IllegalMove(format!(
                "{from}-{to}: it is not {}'s turn",
                self.human
            )));
        }
        let mv = self
            .game
            .find_legal_move(from, to)
            .ok_or_else(|| ChessErrors::IllegalMove(format!("{from}-{to}")))?;
        self.apply(&mv)?;
        Ok(mv)
    }

    fn apply(&mut self, mv: &Move) -> ChessResult<()> {
        self.game.make_move(mv)?;
        self.deselect();
        info!(side = %mv.piece.color, played = %format_move(mv), "move played");
        if let Some(winner) = self.game.winner() {
            info!(?winner, "game over");
        }
        Ok(())
    }

    /// Let the engine move for its side. Falls back to a random legal move
    /// when the search produces nothing.
    pub fn play_engine_move(&mut self) -> ChessResult<Move> {
        if self.game.is_game_over() {
            return Err(ChessErrors::GameOver);
        }

        let output = self.engine.choose_move(&self.game)?;
        if let Some(report) = &output.report {
            info!(
                engine = self.engine.name(),
                nodes = report.nodes,
                elapsed_ms = report.elapsed.as_millis() as u64,
                depth = report.depth,
                "engine search done"
            );
        }

        let mv = match output.best_move {
            Some(mv) => mv,
            None => {
                warn!(engine = self.engine.name(), "engine found no move, using random fallback");
                self.fallback
                    .choose_move(&self.game)?
                    .best_move
                    .ok_or(ChessErrors::NoLegalMoves)?
            }
        };

        self.apply(&mv)?;
        Ok(mv)
    }

    /// True when the last human move and the engine reply can be taken back.
    pub fn can_undo(&self) -> bool {
        self.game.move_history().len() >= 2 && self.is_human_turn()
    }

    /// Take back the engine's last move and the human move before it.
    pub fn undo_pair(&mut self) -> ChessResult<()> {
        if self.game.is_game_over() {
            return Err(ChessErrors::GameOver);
        }
        if !self.is_human_turn() {
            return Err(ChessErrors::NotPlayersTurn);
        }
        if self.game.move_history().len() < 2 {
            return Err(ChessErrors::NothingToUndo);
        }
        self.game.undo_move();
        self.game.undo_move();
        self.deselect();
        info!(remaining = self.game.move_history().len(), "move pair undone");
        Ok(())
    }

    pub fn new_game(&mut self) {
        self.game.reset();
        self.engine.new_game();
        self.deselect();
        self.started_at = Local::now();
        info!(human = %self.human, "new game started");
    }

    pub fn set_difficulty(&mut self, depth: i64) {
        self.engine.set_difficulty(depth);
    }

    /// One-line summary for the status bar.
    pub fn status(&self) -> String {
        match self.game.winner() {
            Some(Winner::Draw) => "Draw!".to_owned(),
            Some(Winner::Side(color)) => format!("{} wins!", capitalized(color)),
            None => {
                let side = self.game.current_player();
                let mut text = format!("Turn: {}", capitalized(side));
                if self.game.is_in_check(side) {
                    text.push_str(" - check!");
                }
                text
            }
        }
    }

    /// Numbered move pairs, e.g. `1. ♙ e2-e4 - ♟ e7-e5`.
    pub fn history_lines(&self) -> Vec<String> {
        self.game
            .move_history()
            .chunks(2)
            .enumerate()
            .map(|(index, pair)| {
                let mut line = format!("{}. {}", index + 1, format_move(&pair[0]));
                if let Some(reply) = pair.get(1) {
                    line.push_str(" - ");
                    line.push_str(&format_move(reply));
                }
                line
            })
            .collect()
    }

    /// Symbols of the captured pieces of `color`, or `none`.
    pub fn captured_symbols(&self, color: Color) -> String {
        let captured = self.game.captured_pieces(color);
        if captured.is_empty() {
            return "none".to_owned();
        }
        captured
            .iter()
            .map(|p| p.symbol().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn captured_summary(&self) -> String {
        format!(
            "Captured (white): {}\nCaptured (black): {}",
            self.captured_symbols(Color::Light),
            self.captured_symbols(Color::Dark)
        )
    }
}

/// `♙ e2-e4`, with `x` instead of `-` for captures.
pub fn format_move(mv: &Move) -> String {
    let separator = if mv.is_capture() { 'x' } else { '-' };
    format!("{} {}{}{}", mv.piece.symbol(), mv.from, separator, mv.to)
}

fn capitalized(color: Color) -> &'static str {
    match color {
        Color::Light => "White",
        Color::Dark => "Black",
    }
}
