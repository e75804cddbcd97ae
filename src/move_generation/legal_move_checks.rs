//! Attack and check detection.
//!
//! A square is attacked by a color when any of its pieces could capture there
//! on its next move, regardless of whose turn it is.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacker_origins;
use crate::moves::ray_moves::{Ray, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS};

/// Square of `color`'s king, taken from the single set bit of its bitboard.
#[inline]
pub fn king_square(game_state: &GameState, color: Color) -> Option<Square> {
    let kings = game_state.bitboard(color, PieceKind::King);
    if kings == 0 {
        None
    } else {
        Some(kings.trailing_zeros() as Square)
    }
}

/// True if `color`'s king is attacked by the opposing color.
///
/// A board without a king for `color` reports no check.
#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = king_square(game_state, color) else {
        return false;
    };
    is_square_attacked(game_state, king_sq, color.opposite())
}

pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    let attacker_pawns = game_state.bitboard(attacker_color, PieceKind::Pawn);
    if pawn_attacker_origins(attacker_color, square).any(|from| attacker_pawns & (1u64 << from) != 0)
    {
        return true;
    }

    let attacker_knights = game_state.bitboard(attacker_color, PieceKind::Knight);
    if knight_attacks(square) & attacker_knights != 0 {
        return true;
    }

    let attacker_kings = game_state.bitboard(attacker_color, PieceKind::King);
    if king_attacks(square) & attacker_kings != 0 {
        return true;
    }

    let occupancy = game_state.occupancy_all();

    let rooks_queens = game_state.bitboard(attacker_color, PieceKind::Rook)
        | game_state.bitboard(attacker_color, PieceKind::Queen);
    if first_hit_matches(square, &ORTHOGONAL_DIRECTIONS, occupancy, rooks_queens) {
        return true;
    }

    let bishops_queens = game_state.bitboard(attacker_color, PieceKind::Bishop)
        | game_state.bitboard(attacker_color, PieceKind::Queen);
    first_hit_matches(square, &DIAGONAL_DIRECTIONS, occupancy, bishops_queens)
}

/// Walks each ray outward from `square`; the first occupied square must be
/// one of `sliders` to count as an attack, anything else blocks the ray.
fn first_hit_matches(square: Square, directions: &[i8], occupancy: u64, sliders: u64) -> bool {
    for &direction in directions {
        if let Some(hit) = Ray::new(square, direction).find(|sq| occupancy & (1u64 << sq) != 0) {
            if sliders & (1u64 << hit) != 0 {
                return true;
            }
        }
    }
    false
}
