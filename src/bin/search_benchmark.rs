//! Times black's best-move search at several depths.
//!
//! Usage:
//! `cargo run --release --bin search_benchmark`
//! `cargo run --release --bin search_benchmark -- --depths 3,4 --fen "<FEN>"`

use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use env_logger::{Env, Target};

use bitboard_minimax::game_state::chess_types::Color;
use bitboard_minimax::game_state::game_state::GameState;
use bitboard_minimax::search::board_scoring::PieceSquareScorer;
use bitboard_minimax::search::minimax::{search_root, SearchConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Time the black minimax search", long_about = None)]
struct Args {
    /// Depths to search, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = [3u8, 4, 5])]
    depths: Vec<u8>,

    /// Position to search; defaults to the standard initial position
    #[arg(long)]
    fen: Option<String>,

    /// Search every move to full width
    #[arg(long)]
    no_pruning: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .target(Target::Stderr)
        .init();

    let args = Args::parse();
    let game = match &args.fen {
        Some(fen) => GameState::from_fen(fen).with_context(|| format!("parsing --fen '{fen}'"))?,
        None => GameState::new_game(),
    };

    println!(
        "[{}] search benchmark fen=\"{}\" pruning={}",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        game.to_fen(),
        !args.no_pruning
    );

    for depth in args.depths {
        let config = SearchConfig {
            depth,
            alpha_beta: !args.no_pruning,
        };
        let started = Instant::now();
        let result = search_root(&game, Color::Dark, &PieceSquareScorer, config);
        let elapsed = started.elapsed();

        let best = result
            .best_move
            .map_or_else(|| "none".to_owned(), |mv| mv.to_string());
        let nps = if elapsed.as_secs_f64() > 0.0 {
            (result.nodes as f64 / elapsed.as_secs_f64()) as u64
        } else {
            0
        };
        println!(
            "[{}] depth {depth}: {:.4} seconds best={best} score={} nodes={} nps={nps}",
            Local::now().format("%H:%M:%S"),
            elapsed.as_secs_f64(),
            result.best_score,
            result.nodes
        );
    }

    Ok(())
}
