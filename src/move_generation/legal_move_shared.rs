use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::ray_moves::Ray;

/// Kind of a step onto `to` for a `color` piece, or `None` when a friendly
/// piece stands there.
#[inline]
pub fn step_kind(game_state: &GameState, color: Color, to: Square) -> Option<MoveKind> {
    let mask = 1u64 << to;
    if game_state.occupancy(color) & mask != 0 {
        None
    } else if game_state.occupancy(color.opposite()) & mask != 0 {
        Some(MoveKind::Capture)
    } else {
        Some(MoveKind::Quiet)
    }
}

/// Slider moves from `from`: each ray stops before a friendly piece and
/// includes then stops on an enemy piece.
pub fn generate_ray_moves(
    game_state: &GameState,
    from: Square,
    color: Color,
    directions: &[i8],
    out: &mut Vec<Move>,
) {
    for &direction in directions {
        for to in Ray::new(from, direction) {
            let Some(kind) = step_kind(game_state, color, to) else {
                break;
            };
            out.push(Move::new(from, to, kind));
            if kind == MoveKind::Capture {
                break;
            }
        }
    }
}
