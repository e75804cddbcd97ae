//! Pseudo-legal pawn moves: single and double pushes plus diagonal captures.
//!
//! No en-passant, and a pawn that reaches the last rank stays a pawn.

use crate::game_state::chess_rules::pawn_home_rank;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::offsets::offset_target;
use crate::moves::pawn_moves::{pawn_capture_targets, pawn_push_offset};

pub fn generate_pawn_moves(game_state: &GameState, from: Square, color: Color, out: &mut Vec<Move>) {
    let empty = game_state.empty_squares();
    let enemy_occ = game_state.occupancy(color.opposite());
    let push = pawn_push_offset(color);

    if let Some(one_step) = offset_target(from, push, 0) {
        if empty & (1u64 << one_step) != 0 {
            out.push(Move::new(from, one_step, MoveKind::Quiet));

            if rank_of(from) == pawn_home_rank(color) {
                if let Some(two_step) = offset_target(one_step, push, 0) {
                    if empty & (1u64 << two_step) != 0 {
                        out.push(Move::new(from, two_step, MoveKind::Quiet));
                    }
                }
            }
        }
    }

    for to in pawn_capture_targets(color, from) {
        if enemy_occ & (1u64 << to) != 0 {
            out.push(Move::new(from, to, MoveKind::Capture));
        }
    }
}
