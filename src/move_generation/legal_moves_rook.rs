use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::generate_ray_moves;
use crate::moves::ray_moves::ORTHOGONAL_DIRECTIONS;

pub fn generate_rook_moves(game_state: &GameState, from: Square, color: Color, out: &mut Vec<Move>) {
    generate_ray_moves(game_state, from, color, &ORTHOGONAL_DIRECTIONS, out);
}
