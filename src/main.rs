use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::error;
use tracing_subscriber::EnvFilter;

use minimax_chess::chess_errors::ChessResult;
use minimax_chess::engines::engine_minimax::MinimaxEngine;
use minimax_chess::engines::time_management::SearchConfig;
use minimax_chess::game_state::chess_types::Color;
use minimax_chess::game_state::game_state::GameState;
use minimax_chess::session::game_session::{format_move, GameSession, SelectionOutcome};
use minimax_chess::utils::algebraic::{algebraic_to_square, parse_move_squares};
use minimax_chess::utils::fen_parser::parse_fen;
use minimax_chess::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Side {
    #[value(alias = "white")]
    Light,
    #[value(alias = "black")]
    Dark,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::Light => Color::Light,
            Side::Dark => Color::Dark,
        }
    }
}

/// Play chess against an alpha-beta minimax engine in the terminal.
#[derive(Debug, Parser)]
#[command(name = "minimax_chess", version)]
struct Cli {
    /// Search depth, clamped to 2..=8; also sets the time budget.
    #[arg(long, default_value_t = 4)]
    depth: i64,

    /// Side played by the human.
    #[arg(long, value_enum, default_value_t = Side::Light)]
    human: Side,

    /// Start position as "<placement> <side> [castling]".
    #[arg(long)]
    position: Option<String>,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

const HELP: &str = "\
commands:
  e2e4 | e2-e4   play a move
  e2             select a square (click), again on a target to move
  moves          list legal moves
  board          show the board
  history        show the move list
  captured       show captured pieces
  undo           take back your last move and the engine reply
  depth N        set engine depth (2..=8)
  new            start a new game
  quit           leave";

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "fatal");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> ChessResult<()> {
    let game = match &cli.position {
        Some(position) => parse_fen(position)?,
        None => GameState::new_game(),
    };
    let engine = MinimaxEngine::new(SearchConfig::for_difficulty(cli.depth));
    let mut session = GameSession::with_engine(game, Box::new(engine), cli.human.into());

    println!(
        "You play {} against {}. Type 'help' for commands.",
        session.human(),
        session.engine_name()
    );
    show(&session);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if session.is_engine_turn() {
            println!("Engine is thinking...");
            let mv = session.play_engine_move()?;
            println!("Engine plays {}", format_move(&mv));
            show(&session);
            continue;
        }

        print!("> ");
        io::stdout().flush().ok();

        let Some(Ok(line)) = lines.next() else {
            break;
        };
        let input = line.trim();
        let mut words = input.split_whitespace();

        match words.next() {
            None => {}
            Some("quit" | "exit") => break,
            Some("help") => println!("{HELP}"),
            Some("board") => show(&session),
            Some("history") => {
                let history = session.history_lines();
                if history.is_empty() {
                    println!("No moves yet.");
                }
                for line in history {
                    println!("{line}");
                }
            }
            Some("captured") => println!("{}", session.captured_summary()),
            Some("moves") => {
                let moves: Vec<String> = session
                    .game()
                    .legal_moves()
                    .iter()
                    .map(|mv| mv.to_long_algebraic())
                    .collect();
                println!("{}", moves.join(" "));
            }
            Some("undo") => match session.undo_pair() {
                Ok(()) => show(&session),
                Err(err) => println!("{err}"),
            },
            Some("new") => {
                session.new_game();
                show(&session);
            }
            Some("depth") => match words.next().map(str::parse::<i64>) {
                Some(Ok(depth)) => {
                    session.set_difficulty(depth);
                    println!("Depth set to {}", SearchConfig::for_difficulty(depth).depth);
                }
                _ => println!("usage: depth N"),
            },
            Some(word) if word.len() == 2 => match algebraic_to_square(word) {
                Ok(square) => match session.select_square(square) {
                    Ok(SelectionOutcome::Selected { targets, .. }) => {
                        let targets: Vec<String> = targets.iter().map(ToString::to_string).collect();
                        println!("Selected {square}: {}", targets.join(" "));
                    }
                    Ok(SelectionOutcome::Moved(_)) => show(&session),
                    Ok(SelectionOutcome::Deselected) => println!("Selection cleared."),
                    Ok(SelectionOutcome::Ignored) => println!("Nothing to select on {square}."),
                    Err(err) => println!("{err}"),
                },
                Err(err) => println!("{err}"),
            },
            Some(_) => match parse_move_squares(input) {
                Ok((from, to)) => match session.play_move(from, to) {
                    Ok(_) => show(&session),
                    Err(err) => println!("{err}"),
                },
                Err(_) => println!("Unknown command. Type 'help'."),
            },
        }
    }

    Ok(())
}

fn show(session: &GameSession) {
    println!("{}", render_game_state(session.game()));
    println!("{}", session.status());
}
