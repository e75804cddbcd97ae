use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::step_kind;
use crate::moves::knight_moves::knight_targets;

pub fn generate_knight_moves(game_state: &GameState, from: Square, color: Color, out: &mut Vec<Move>) {
    for to in knight_targets(from) {
        if let Some(kind) = step_kind(game_state, color, to) {
            out.push(Move::new(from, to, kind));
        }
    }
}
