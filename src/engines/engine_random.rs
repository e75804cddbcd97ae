//! Random-move engine.
//!
//! Selects uniformly from legal moves. Used as a sparring partner in matches
//! and for exercising the game loop without search cost.

use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, SeedableRng};

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_all_legal_moves;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    /// Reproducible engine: the same seed replays the same choices.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<EngineOutput> {
        let legal_moves = generate_all_legal_moves(game_state, game_state.side_to_move);

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("random_engine legal_moves {}", legal_moves.len()));
        out.best_move = legal_moves.as_slice().choose(&mut self.rng).copied();
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::*;

    #[test]
    fn picks_a_legal_move() {
        let game = GameState::new_game();
        let legal = generate_all_legal_moves(&game, Color::Light);
        let mut engine = RandomEngine::seeded(7);
        for _ in 0..10 {
            let out = engine.choose_move(&game).expect("engine should run");
            let mv = out.best_move.expect("startpos has moves");
            assert!(legal.contains(&mv));
        }
    }

    #[test]
    fn same_seed_same_choices() {
        let game = GameState::new_game();
        let mut a = RandomEngine::seeded(42);
        let mut b = RandomEngine::seeded(42);
        for _ in 0..5 {
            assert_eq!(
                a.choose_move(&game).expect("engine should run").best_move,
                b.choose_move(&game).expect("engine should run").best_move
            );
        }
    }

    #[test]
    fn no_move_when_mated() {
        let game = GameState::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 1")
            .expect("FEN should parse");
        let out = RandomEngine::seeded(1).choose_move(&game).expect("engine should run");
        assert_eq!(out.best_move, None);
    }
}
