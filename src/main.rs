//! Terminal front end.
//!
//! Usage:
//!   cargo run --release -- [--depth N] [--fen FEN] [--white human|random|engine]
//!                          [--seed S] [--max-plies N]
//!
//! Black is always the minimax engine. With `--white human` moves are typed in
//! coordinate form (`e2e4`, `e1h1` for castling by moving the king onto the
//! rook); typing a single square lists that piece's legal moves.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use env_logger::{Env, Target};

use bitboard_minimax::engines::engine_minimax::MinimaxEngine;
use bitboard_minimax::engines::engine_random::RandomEngine;
use bitboard_minimax::engines::engine_trait::Engine;
use bitboard_minimax::game_state::game_state::GameState;
use bitboard_minimax::game_state::chess_types::Color;
use bitboard_minimax::play::game_session::{GameSession, SessionStatus};
use bitboard_minimax::utils::algebraic::{algebraic_to_square, square_to_algebraic};
use bitboard_minimax::utils::engine_match_harness::{play_engine_match, MatchConfig};
use bitboard_minimax::utils::long_algebraic::long_algebraic_to_move;
use bitboard_minimax::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum WhitePlayer {
    Human,
    Random,
    Engine,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Bitboard chess with a minimax opponent", long_about = None)]
struct Args {
    /// Search depth of the black engine, in plies
    #[arg(long, default_value_t = 4)]
    depth: u8,

    /// Starting position; defaults to the standard initial position
    #[arg(long)]
    fen: Option<String>,

    /// Who plays white
    #[arg(long, value_enum, default_value_t = WhitePlayer::Human)]
    white: WhitePlayer,

    /// Seed for the random white player
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Ply cap for engine-vs-engine games
    #[arg(long, default_value_t = 200)]
    max_plies: u16,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stderr)
        .init();

    let args = Args::parse();
    let start = match &args.fen {
        Some(fen) => GameState::from_fen(fen).with_context(|| format!("parsing --fen '{fen}'"))?,
        None => GameState::new_game(),
    };

    let black = MinimaxEngine::new(args.depth);
    match args.white {
        WhitePlayer::Human => play_human(start, black),
        WhitePlayer::Random => run_match(start, RandomEngine::seeded(args.seed), black, args.max_plies),
        WhitePlayer::Engine => {
            run_match(start, MinimaxEngine::new(args.depth), black, args.max_plies)
        }
    }
}

fn run_match<W: Engine, B: Engine>(start: GameState, mut white: W, mut black: B, max_plies: u16) -> Result<()> {
    let result = play_engine_match(&mut white, &mut black, start, MatchConfig { max_plies })
        .context("engine match failed")?;

    println!("{}", result.played_moves_lan.join(" "));
    println!("{}", render_game_state(&result.final_state));
    println!("{} vs {}: {}", white.name(), black.name(), result.report());
    Ok(())
}

fn play_human(start: GameState, black: MinimaxEngine) -> Result<()> {
    if start.side_to_move != Color::Light {
        bail!("human games must start with white to move");
    }

    let mut session = GameSession::from_position(start, Color::Light, Box::new(black));
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("\n{}", render_game_state(session.game_state()));
        match session.status() {
            SessionStatus::InProgress => {}
            SessionStatus::WhiteWins => {
                println!("Checkmate. White wins.");
                return Ok(());
            }
            SessionStatus::BlackWins => {
                println!("Checkmate. Black wins.");
                return Ok(());
            }
            SessionStatus::Stalemate => {
                println!("Stalemate.");
                return Ok(());
            }
        }

        print!("white> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(());
        };
        let text = line?.trim().to_ascii_lowercase();

        match text.as_str() {
            "" => continue,
            "quit" | "exit" => return Ok(()),
            _ if text.len() == 2 => match algebraic_to_square(&text) {
                Ok(square) => {
                    let targets = session
                        .legal_moves_for(square)
                        .iter()
                        .map(|mv| square_to_algebraic(mv.to))
                        .collect::<Result<Vec<_>, _>>()?;
                    println!("legal from {text}: {}", targets.join(" "));
                }
                Err(err) => println!("{err}"),
            },
            _ if text.len() == 4 => {
                let report = long_algebraic_to_move(&text, session.game_state())
                    .and_then(|mv| session.submit_player_move(mv.from, mv.to));
                match report {
                    Ok(report) => {
                        if let Some(reply) = report.engine_move {
                            println!("{} plays {reply}", session.engine_name());
                        }
                    }
                    Err(err) => println!("{err}"),
                }
            }
            _ => println!("enter a move like e2e4, a square like e2, or quit"),
        }
    }
}
