//! Fixed-depth alpha-beta engine.

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::{BoardScorer, PieceSquareScorer};
use crate::search::minimax::{search_root, SearchConfig};

pub struct MinimaxEngine<S: BoardScorer = PieceSquareScorer> {
    scorer: S,
    config: SearchConfig,
}

impl MinimaxEngine<PieceSquareScorer> {
    pub fn new(depth: u8) -> Self {
        Self::with_scorer(PieceSquareScorer, SearchConfig::with_depth(depth))
    }
}

impl Default for MinimaxEngine<PieceSquareScorer> {
    fn default() -> Self {
        Self::with_scorer(PieceSquareScorer, SearchConfig::default())
    }
}

impl<S: BoardScorer> MinimaxEngine<S> {
    pub fn with_scorer(scorer: S, config: SearchConfig) -> Self {
        Self { scorer, config }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }
}

impl<S: BoardScorer> Engine for MinimaxEngine<S> {
    fn name(&self) -> &str {
        "minimax"
    }

    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<EngineOutput> {
        let result = search_root(
            game_state,
            game_state.side_to_move,
            &self.scorer,
            self.config,
        );

        Ok(EngineOutput {
            best_move: result.best_move,
            info_lines: vec![format!(
                "depth {} score {} nodes {} time_ms {}",
                self.config.depth, result.best_score, result.nodes, result.elapsed_ms
            )],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::*;
    use crate::search::minimax::find_best_move;

    #[test]
    fn black_choice_matches_find_best_move() {
        let mut game = GameState::new_game();
        game.apply_move(12, 28).expect("e2e4 should apply");
        let mut engine = MinimaxEngine::new(2);
        let out = engine.choose_move(&game).expect("engine should run");
        assert_eq!(out.best_move, find_best_move(&game, 2));
        assert_eq!(out.info_lines.len(), 1);
    }

    #[test]
    fn white_engine_takes_free_material() {
        let game = GameState::from_fen("4k3/8/8/3q4/8/4N3/8/4K3 w - - 0 1").expect("FEN should parse");
        let out = MinimaxEngine::new(2).choose_move(&game).expect("engine should run");
        assert_eq!(out.best_move, Some(Move::new(20, 35, MoveKind::Capture)));
    }

    #[test]
    fn default_depth_is_four() {
        assert_eq!(MinimaxEngine::<PieceSquareScorer>::default().config().depth, 4);
    }
}
