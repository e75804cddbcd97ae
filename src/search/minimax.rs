//! Fixed-depth minimax with alpha-beta pruning.
//!
//! Black maximizes the black-positive evaluation and white minimizes it.
//! Every node works on its own copy of the board, so sibling branches never
//! observe each other and the caller's board is never written.

use std::time::Instant;

use log::{debug, info, trace};

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::{generate_all_legal_moves, is_game_over};
use crate::search::board_scoring::{BoardScorer, PieceSquareScorer, Score, SCORE_INFINITY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched below the root position.
    pub depth: u8,
    /// Cut off siblings once `beta <= alpha`. Disabling it gives the
    /// full-width reference search with identical results.
    pub alpha_beta: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 4,
            alpha_beta: true,
        }
    }
}

impl SearchConfig {
    pub const fn with_depth(depth: u8) -> Self {
        Self {
            depth,
            alpha_beta: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: Score,
    pub nodes: u64,
    pub elapsed_ms: u64,
}

/// Best move for black at `depth` plies, or `None` when black has no legal
/// move.
pub fn find_best_move(game_state: &GameState, depth: u8) -> Option<Move> {
    search_root(
        game_state,
        Color::Dark,
        &PieceSquareScorer,
        SearchConfig::with_depth(depth),
    )
    .best_move
}

/// Root search for `side`. Moves are tried in generation order and the first
/// move reaching a strictly better score is kept, so ties go to the earliest
/// generated move.
pub fn search_root<S: BoardScorer>(
    game_state: &GameState,
    side: Color,
    scorer: &S,
    config: SearchConfig,
) -> SearchResult {
    let started = Instant::now();
    let mut nodes = 0u64;
    let mut alpha = -SCORE_INFINITY;
    let mut beta = SCORE_INFINITY;
    let mut best_move = None;
    let mut best_score = match side {
        Color::Dark => -SCORE_INFINITY,
        Color::Light => SCORE_INFINITY,
    };

    for mv in generate_all_legal_moves(game_state, side) {
        let Ok(next) = game_state.after_move(mv) else {
            continue;
        };
        let score = alpha_beta(
            &next,
            scorer,
            config.depth.saturating_sub(1),
            side.opposite(),
            alpha,
            beta,
            config.alpha_beta,
            &mut nodes,
        );
        debug!("root {} {mv} score {score}", side.name());

        let improves = match side {
            Color::Dark => score > best_score,
            Color::Light => score < best_score,
        };
        if best_move.is_none() || improves {
            best_score = score;
            best_move = Some(mv);
        }

        if config.alpha_beta {
            match side {
                Color::Dark => alpha = alpha.max(best_score),
                Color::Light => beta = beta.min(best_score),
            }
        }
    }

    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    match best_move {
        Some(mv) => info!(
            "search {} depth={} best={mv} score={best_score} nodes={nodes} elapsed_ms={elapsed_ms}",
            side.name(),
            config.depth
        ),
        None => info!("search {} depth={}: no legal move", side.name(), config.depth),
    }

    SearchResult {
        best_move,
        best_score,
        nodes,
        elapsed_ms,
    }
}

/// Alpha-beta minimax value of `game_state` with `side` to move, scored by
/// the default evaluator.
pub fn minimax(game_state: &GameState, depth: u8, side: Color, alpha: Score, beta: Score) -> Score {
    let mut nodes = 0u64;
    alpha_beta(
        game_state,
        &PieceSquareScorer,
        depth,
        side,
        alpha,
        beta,
        true,
        &mut nodes,
    )
}

/// Minimax value without any cut-offs.
pub fn minimax_full_width(game_state: &GameState, depth: u8, side: Color) -> Score {
    let mut nodes = 0u64;
    alpha_beta(
        game_state,
        &PieceSquareScorer,
        depth,
        side,
        -SCORE_INFINITY,
        SCORE_INFINITY,
        false,
        &mut nodes,
    )
}

#[allow(clippy::too_many_arguments)]
fn alpha_beta<S: BoardScorer>(
    game_state: &GameState,
    scorer: &S,
    depth: u8,
    side: Color,
    mut alpha: Score,
    mut beta: Score,
    prune: bool,
    nodes: &mut u64,
) -> Score {
    *nodes += 1;

    if depth == 0 || is_game_over(game_state) {
        return scorer.score(game_state);
    }

    // A side without legal moves that is not mated keeps the initial bound.
    match side {
        Color::Dark => {
            let mut max_eval = -SCORE_INFINITY;
            for mv in generate_all_legal_moves(game_state, side) {
                let Ok(next) = game_state.after_move(mv) else {
                    continue;
                };
                let eval = alpha_beta(&next, scorer, depth - 1, Color::Light, alpha, beta, prune, nodes);
                max_eval = max_eval.max(eval);
                alpha = alpha.max(eval);
                if prune && beta <= alpha {
                    trace!("cut at depth {depth} after {mv}: alpha={alpha} beta={beta}");
                    break;
                }
            }
            max_eval
        }
        Color::Light => {
            let mut min_eval = SCORE_INFINITY;
            for mv in generate_all_legal_moves(game_state, side) {
                let Ok(next) = game_state.after_move(mv) else {
                    continue;
                };
                let eval = alpha_beta(&next, scorer, depth - 1, Color::Dark, alpha, beta, prune, nodes);
                min_eval = min_eval.min(eval);
                beta = beta.min(eval);
                if prune && beta <= alpha {
                    trace!("cut at depth {depth} after {mv}: alpha={alpha} beta={beta}");
                    break;
                }
            }
            min_eval
        }
    }
}
