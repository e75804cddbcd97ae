//! Head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other from any starting
//! position and records the outcome, the moves played and per-side thinking
//! time.

use std::time::Instant;

use log::{debug, info};

use crate::engines::engine_trait::Engine;
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{generate_all_legal_moves, has_legal_move};
use crate::utils::long_algebraic::move_to_long_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    DrawMaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    pub max_plies: u16,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { max_plies: 300 }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub played_moves_lan: Vec<String>,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

impl MatchResult {
    pub fn report(&self) -> String {
        format!(
            "outcome={:?} plies={} white_avg_ms={:.3} black_avg_ms={:.3}",
            self.outcome,
            self.played_moves_lan.len(),
            avg_ns_per_move_ms(self.white_total_time_ns, self.white_move_count),
            avg_ns_per_move_ms(self.black_total_time_ns, self.black_move_count)
        )
    }
}

/// Plays `engine_white` against `engine_black` from `start_state`, the side
/// to move in `start_state` moving first.
///
/// The game ends when the side to move has no legal move (checkmate or
/// stalemate) or after `config.max_plies` plies. An engine answering with a
/// move outside the legal list aborts the match with `IllegalMove`; one
/// answering with no move while legal moves exist aborts it with
/// `EngineReturnedNoMove`.
pub fn play_engine_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    start_state: GameState,
    config: MatchConfig,
) -> ChessResult<MatchResult> {
    engine_white.new_game();
    engine_black.new_game();

    let mut state = start_state;
    let mut result = MatchResult {
        outcome: MatchOutcome::DrawMaxPlies,
        final_state: state,
        played_moves_lan: Vec::new(),
        white_move_count: 0,
        black_move_count: 0,
        white_total_time_ns: 0,
        black_total_time_ns: 0,
    };

    for _ in 0..config.max_plies {
        let mover = state.side_to_move;
        let legal_moves = generate_all_legal_moves(&state, mover);
        if legal_moves.is_empty() {
            break;
        }

        let engine: &mut dyn Engine = match mover {
            Color::Light => &mut *engine_white,
            Color::Dark => &mut *engine_black,
        };
        let started = Instant::now();
        let out = engine.choose_move(&state)?;
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Color::Light => {
                result.white_move_count = result.white_move_count.saturating_add(1);
                result.white_total_time_ns = result.white_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Dark => {
                result.black_move_count = result.black_move_count.saturating_add(1);
                result.black_total_time_ns = result.black_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let Some(chosen) = out.best_move else {
            return Err(ChessError::EngineReturnedNoMove(engine.name().to_owned()));
        };
        if !legal_moves.contains(&chosen) {
            return Err(ChessError::IllegalMove {
                from: chosen.from,
                to: chosen.to,
            });
        }

        let lan = move_to_long_algebraic(chosen)?;
        debug!("{} plays {lan}", mover.name());
        result.played_moves_lan.push(lan);
        state.make_move(chosen)?;
    }

    // A mate or stalemate delivered on the last allowed ply still counts.
    if let Some(outcome) = terminal_outcome(&state) {
        result.outcome = outcome;
    }
    result.final_state = state;
    info!("match finished: {}", result.report());
    Ok(result)
}

/// Outcome when the side to move has no legal move, `None` otherwise.
fn terminal_outcome(state: &GameState) -> Option<MatchOutcome> {
    let mover = state.side_to_move;
    if has_legal_move(state, mover) {
        return None;
    }
    Some(if is_king_in_check(state, mover) {
        match mover {
            Color::Light => MatchOutcome::BlackWinCheckmate,
            Color::Dark => MatchOutcome::WhiteWinCheckmate,
        }
    } else {
        MatchOutcome::DrawStalemate
    })
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_minimax::MinimaxEngine;
    use crate::engines::engine_random::RandomEngine;
    use crate::engines::engine_trait::EngineOutput;
    use crate::game_state::chess_types::*;

    struct FixedEngine(Move);

    impl Engine for FixedEngine {
        fn name(&self) -> &str {
            "fixed"
        }

        fn choose_move(&mut self, _game_state: &GameState) -> ChessResult<EngineOutput> {
            Ok(EngineOutput {
                best_move: Some(self.0),
                info_lines: Vec::new(),
            })
        }
    }

    /// Plays a fixed list of moves in order, then nothing.
    struct ScriptedEngine {
        moves: Vec<Move>,
        next: usize,
    }

    impl ScriptedEngine {
        fn new(moves: Vec<Move>) -> Self {
            Self { moves, next: 0 }
        }
    }

    impl Engine for ScriptedEngine {
        fn name(&self) -> &str {
            "scripted"
        }

        fn choose_move(&mut self, _game_state: &GameState) -> ChessResult<EngineOutput> {
            let best_move = self.moves.get(self.next).copied();
            self.next += 1;
            Ok(EngineOutput {
                best_move,
                info_lines: Vec::new(),
            })
        }
    }

    #[test]
    fn random_vs_minimax_runs_to_an_outcome() {
        let mut white = RandomEngine::seeded(42);
        let mut black = MinimaxEngine::new(1);
        let result = play_engine_match(
            &mut white,
            &mut black,
            GameState::new_game(),
            MatchConfig { max_plies: 30 },
        )
        .expect("match should run");

        assert!(result.played_moves_lan.len() <= 30);
        assert_eq!(
            result.white_move_count + result.black_move_count,
            result.played_moves_lan.len() as u32
        );
        assert!(result.white_move_count >= result.black_move_count);
        assert!(result.final_state.bitboards_disjoint());
    }

    #[test]
    fn mated_start_position_ends_immediately() {
        let start = GameState::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 1")
            .expect("FEN should parse");
        let mut white = RandomEngine::seeded(1);
        let mut black = RandomEngine::seeded(2);
        let result = play_engine_match(&mut white, &mut black, start, MatchConfig::default())
            .expect("match should run");
        assert_eq!(result.outcome, MatchOutcome::BlackWinCheckmate);
        assert!(result.played_moves_lan.is_empty());
    }

    #[test]
    fn stalemate_is_reported_as_draw() {
        let start = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        let mut white = RandomEngine::seeded(1);
        let mut black = RandomEngine::seeded(2);
        let result = play_engine_match(&mut white, &mut black, start, MatchConfig::default())
            .expect("match should run");
        assert_eq!(result.outcome, MatchOutcome::DrawStalemate);
    }

    #[test]
    fn ply_cap_ends_the_match() {
        let mut white = RandomEngine::seeded(3);
        let mut black = RandomEngine::seeded(4);
        let result = play_engine_match(
            &mut white,
            &mut black,
            GameState::new_game(),
            MatchConfig { max_plies: 4 },
        )
        .expect("match should run");
        assert_eq!(result.outcome, MatchOutcome::DrawMaxPlies);
        assert_eq!(result.played_moves_lan.len(), 4);
    }

    #[test]
    fn illegal_engine_move_aborts_the_match() {
        let mut white = FixedEngine(Move::new(12, 36, MoveKind::Quiet));
        let mut black = RandomEngine::seeded(5);
        let err = play_engine_match(
            &mut white,
            &mut black,
            GameState::new_game(),
            MatchConfig::default(),
        )
        .expect_err("e2e5 is not legal");
        assert_eq!(err, ChessError::IllegalMove { from: 12, to: 36 });
    }

    #[test]
    fn mate_on_the_last_allowed_ply_is_reported() {
        // f3 e5 g4 Qh4#
        let mut white = ScriptedEngine::new(vec![
            Move::new(13, 21, MoveKind::Quiet),
            Move::new(14, 30, MoveKind::Quiet),
        ]);
        let mut black = ScriptedEngine::new(vec![
            Move::new(52, 36, MoveKind::Quiet),
            Move::new(59, 31, MoveKind::Quiet),
        ]);
        let result = play_engine_match(
            &mut white,
            &mut black,
            GameState::new_game(),
            MatchConfig { max_plies: 4 },
        )
        .expect("match should run");
        assert_eq!(result.outcome, MatchOutcome::BlackWinCheckmate);
        assert_eq!(result.played_moves_lan, ["f2f3", "e7e5", "g2g4", "d8h4"]);
    }

    #[test]
    fn stalemate_on_the_last_allowed_ply_is_reported() {
        // Qe6-f7 stalemates the black king on h8.
        let start = GameState::from_fen("7k/8/4Q1K1/8/8/8/8/8 w - - 0 1").expect("FEN should parse");
        let mut white = ScriptedEngine::new(vec![Move::new(44, 53, MoveKind::Quiet)]);
        let mut black = ScriptedEngine::new(Vec::new());
        let result = play_engine_match(&mut white, &mut black, start, MatchConfig { max_plies: 1 })
            .expect("match should run");
        assert_eq!(result.outcome, MatchOutcome::DrawStalemate);
    }

    #[test]
    fn engine_without_a_move_aborts_the_match() {
        let mut white = ScriptedEngine::new(Vec::new());
        let mut black = RandomEngine::seeded(6);
        let err = play_engine_match(
            &mut white,
            &mut black,
            GameState::new_game(),
            MatchConfig::default(),
        )
        .expect_err("white has twenty legal moves");
        assert_eq!(err, ChessError::EngineReturnedNoMove("scripted".to_owned()));
    }
}
