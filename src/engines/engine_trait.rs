//! Engine abstraction layer.
//!
//! Every move chooser (search, random, or anything a session plugs in) sits
//! behind one trait so games and matches can mix them freely.

use crate::errors::ChessResult;
use crate::game_state::{chess_types::Move, game_state::GameState};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOutput {
    /// `None` only when the side to move has no legal move.
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Picks a move for `game_state.side_to_move`.
    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<EngineOutput>;
}
